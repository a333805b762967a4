//! View configuration loading and management
//!
//! A view is the declarative description of one page's filter bar: which
//! collection it reads, which fields the search box touches, which
//! dropdown selectors exist with which options, and the default sort. Views
//! are defined in YAML so page wiring stays out of code.

use crate::core::criteria::{Criteria, Selector, SortSpec};
use crate::core::error::{ConfigError, CriteriaError};
use serde::{Deserialize, Serialize};

/// The "all" dropdown option: no constraint
pub const SELECTOR_ALL: &str = "all";

/// Configuration for one dropdown selector of a view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectorConfig {
    /// The record field this selector constrains
    pub field: String,

    /// The offered tag values (the "all" sentinel is implicit)
    pub options: Vec<String>,

    /// Initially selected value; absent or "all" means unconstrained
    #[serde(default)]
    pub default: Option<String>,
}

/// Configuration for one page view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewConfig {
    /// View name used for lookup (e.g., "bug-board")
    pub name: String,

    /// The record collection this view reads
    pub collection: String,

    /// Text fields the search box matches against
    pub searchable: Vec<String>,

    /// Dropdown selectors, in display order
    #[serde(default)]
    pub selectors: Vec<SelectorConfig>,

    /// Default sort expression (`field:asc` / `field:desc`), if any
    #[serde(default)]
    pub default_sort: Option<String>,
}

impl ViewConfig {
    /// Build the criteria this view starts with before any interaction
    pub fn initial_criteria(&self) -> Result<Criteria, CriteriaError> {
        let mut criteria = Criteria::new();

        for selector in &self.selectors {
            let initial = match selector.default.as_deref() {
                Some(value) if value != SELECTOR_ALL => Selector::Exact(value.to_string()),
                _ => Selector::Any,
            };
            criteria.selectors.insert(selector.field.clone(), initial);
        }

        if let Some(expr) = self.default_sort.as_deref() {
            criteria.sort = Some(SortSpec::parse(expr)?);
        }

        Ok(criteria)
    }
}

/// Complete configuration for the views of a template
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewsConfig {
    /// List of view configurations
    pub views: Vec<ViewConfig>,
}

impl ViewsConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::FileNotFound {
                    path: path.to_string(),
                }
            } else {
                ConfigError::IoError {
                    message: e.to_string(),
                }
            }
        })?;

        let config: Self = serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError {
            file: Some(path.to_string()),
            message: e.to_string(),
        })?;

        config.validate()?;
        tracing::debug!(path, views = config.views.len(), "loaded view config");
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError {
            file: None,
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Find a view by name
    pub fn find_view(&self, name: &str) -> Option<&ViewConfig> {
        self.views.iter().find(|view| view.name == name)
    }

    /// Check internal consistency of the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (index, view) in self.views.iter().enumerate() {
            if view.name.is_empty() {
                return Err(ConfigError::MissingField {
                    field: "name".to_string(),
                    context: format!("view #{index}"),
                });
            }

            if self
                .views
                .iter()
                .filter(|other| other.name == view.name)
                .count()
                > 1
            {
                return Err(ConfigError::InvalidValue {
                    field: "name".to_string(),
                    value: view.name.clone(),
                    message: "view names must be unique".to_string(),
                });
            }

            if view.searchable.is_empty() {
                return Err(ConfigError::MissingField {
                    field: "searchable".to_string(),
                    context: format!("view '{}'", view.name),
                });
            }

            for selector in &view.selectors {
                if let Some(default) = selector.default.as_deref() {
                    if default != SELECTOR_ALL && !selector.options.iter().any(|o| o == default) {
                        return Err(ConfigError::InvalidValue {
                            field: selector.field.clone(),
                            value: default.to_string(),
                            message: "selector default must be one of its options".to_string(),
                        });
                    }
                }
            }

            if let Some(expr) = view.default_sort.as_deref() {
                SortSpec::parse(expr).map_err(|_| ConfigError::InvalidValue {
                    field: "default_sort".to_string(),
                    value: expr.to_string(),
                    message: "expected 'field', 'field:asc' or 'field:desc'".to_string(),
                })?;
            }
        }

        Ok(())
    }

    /// Create a default configuration for testing
    pub fn default_config() -> Self {
        Self {
            views: vec![
                ViewConfig {
                    name: "bug-board".to_string(),
                    collection: "bugs".to_string(),
                    searchable: vec!["title".to_string(), "description".to_string()],
                    selectors: vec![
                        SelectorConfig {
                            field: "status".to_string(),
                            options: vec![
                                "open".to_string(),
                                "in-progress".to_string(),
                                "closed".to_string(),
                            ],
                            default: None,
                        },
                        SelectorConfig {
                            field: "severity".to_string(),
                            options: vec![
                                "critical".to_string(),
                                "high".to_string(),
                                "medium".to_string(),
                                "low".to_string(),
                            ],
                            default: Some(SELECTOR_ALL.to_string()),
                        },
                    ],
                    default_sort: Some("created_at:desc".to_string()),
                },
                ViewConfig {
                    name: "catalog".to_string(),
                    collection: "products".to_string(),
                    searchable: vec!["name".to_string()],
                    selectors: vec![SelectorConfig {
                        field: "category".to_string(),
                        options: vec![
                            "lighting".to_string(),
                            "furniture".to_string(),
                            "accessories".to_string(),
                        ],
                        default: None,
                    }],
                    default_sort: Some("price:asc".to_string()),
                },
            ],
        }
    }
}
