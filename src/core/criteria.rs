//! Filter criteria: query, selectors, and sort order

use crate::core::error::CriteriaError;
use crate::core::paginate::PageRequest;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A categorical filter constraint on one field
///
/// `Any` is the "all"/unset sentinel meaning no constraint; `Exact` requires
/// a case-sensitive exact match on the record's field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selector {
    Any,
    Exact(String),
}

impl Selector {
    /// Whether this selector constrains anything
    pub fn is_active(&self) -> bool {
        matches!(self, Selector::Exact(_))
    }
}

/// Sort direction for an explicit sort criterion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// An explicit sort criterion: field plus direction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    /// Parse a sort expression
    ///
    /// # Format
    /// - `field:asc` or `field` (ascending)
    /// - `field:desc` (descending)
    pub fn parse(expr: &str) -> Result<Self, CriteriaError> {
        let mut parts = expr.splitn(2, ':');
        let field = parts.next().unwrap_or_default().trim();
        if field.is_empty() {
            return Err(CriteriaError::InvalidSortExpression {
                expr: expr.to_string(),
            });
        }

        let direction = match parts.next().map(str::trim) {
            None | Some("asc") => SortDirection::Asc,
            Some("desc") => SortDirection::Desc,
            Some(_) => {
                return Err(CriteriaError::InvalidSortExpression {
                    expr: expr.to_string(),
                });
            }
        };

        Ok(Self::new(field, direction))
    }
}

/// The combined set of active search/filter/sort inputs at a point in time
///
/// Criteria are owned by the caller (the UI layer) and passed into the
/// pipeline on every recomputation; the pipeline holds no state of its own.
/// `Criteria::default()` is the match-all criteria.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Criteria {
    /// Free-text query, matched case-insensitively against the record's
    /// searchable fields. Empty means match-all.
    pub query: String,

    /// Categorical selectors by field name, in insertion order
    pub selectors: IndexMap<String, Selector>,

    /// Optional explicit sort; absent means source order is preserved
    pub sort: Option<SortSpec>,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the free-text query
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Constrain a field to an exact value
    pub fn with_selector(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.selectors
            .insert(field.into(), Selector::Exact(value.into()));
        self
    }

    /// Reset a field to the unconstrained sentinel
    pub fn with_any(mut self, field: impl Into<String>) -> Self {
        self.selectors.insert(field.into(), Selector::Any);
        self
    }

    /// Sort the result by a field in the given direction
    pub fn sorted_by(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.sort = Some(SortSpec::new(field, direction));
        self
    }

    /// Active (non-`Any`) selectors, in insertion order
    pub fn active_selectors(&self) -> impl Iterator<Item = (&str, &str)> {
        self.selectors.iter().filter_map(|(field, selector)| match selector {
            Selector::Exact(value) => Some((field.as_str(), value.as_str())),
            Selector::Any => None,
        })
    }

    /// Whether these criteria constrain nothing (identity transform)
    pub fn is_unconstrained(&self) -> bool {
        self.query.is_empty() && self.active_selectors().next().is_none() && self.sort.is_none()
    }
}

fn default_page() -> usize {
    1
}

fn default_per_page() -> usize {
    20
}

/// Untyped criteria parameters as received from an input layer
///
/// This structure mirrors the shape of URL-style query parameters. All
/// parameters have defaults; [`CriteriaParams::to_criteria`] produces the
/// typed [`Criteria`] the pipeline consumes.
///
/// # Example
/// ```rust,ignore
/// q=login&filters={"status": "open", "severity": "critical"}&sort=created_at:desc
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CriteriaParams {
    /// Free-text query
    pub q: String,

    /// Selectors as a JSON object of field -> tag value
    ///
    /// A value of `"all"` is the unconstrained sentinel. Numbers and
    /// booleans are accepted and compared in their canonical textual form.
    pub filters: Option<String>,

    /// Sort expression (`field:asc`, `field:desc`, or bare `field`)
    pub sort: Option<String>,

    /// Page number (starts at 1)
    #[serde(default = "default_page")]
    pub page: usize,

    /// Number of items per page
    #[serde(default = "default_per_page")]
    pub per_page: usize,
}

impl Default for CriteriaParams {
    fn default() -> Self {
        Self {
            q: String::new(),
            filters: None,
            sort: None,
            page: default_page(),
            per_page: default_per_page(),
        }
    }
}

impl CriteriaParams {
    /// Build the typed criteria from these parameters
    pub fn to_criteria(&self) -> Result<Criteria, CriteriaError> {
        let mut criteria = Criteria::new().with_query(self.q.trim());

        if let Some(raw) = self.filters.as_deref() {
            let parsed: Value =
                serde_json::from_str(raw).map_err(|e| CriteriaError::InvalidFilterJson {
                    message: e.to_string(),
                })?;
            let object = parsed
                .as_object()
                .ok_or_else(|| CriteriaError::InvalidFilterJson {
                    message: "filters must be a JSON object".to_string(),
                })?;

            for (field, value) in object {
                let selector = match value {
                    Value::String(s) if s == "all" => Selector::Any,
                    Value::String(s) => Selector::Exact(s.clone()),
                    Value::Bool(b) => Selector::Exact(b.to_string()),
                    Value::Number(n) => Selector::Exact(n.to_string()),
                    Value::Null => Selector::Any,
                    _ => {
                        return Err(CriteriaError::InvalidFilterJson {
                            message: format!("filter '{}' must be a scalar value", field),
                        });
                    }
                };
                criteria.selectors.insert(field.clone(), selector);
            }
        }

        if let Some(expr) = self.sort.as_deref() {
            criteria.sort = Some(SortSpec::parse(expr)?);
        }

        Ok(criteria)
    }

    /// The pagination request carried alongside the criteria
    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(self.page, self.per_page)
    }
}
