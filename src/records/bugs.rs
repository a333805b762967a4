//! Bug tracker records

use crate::core::error::DatasetError;
use crate::core::field::{FieldFormat, FieldValue};
use crate::core::record::Record;
use crate::impl_record;
use chrono::{TimeZone, Utc};

impl_record!(
    Bug,
    "bug",
    search: ["title", "description"],
    filter: ["status", "severity", "priority"],
    sort: ["created_at"],
    {
        key: String,
        title: String,
        description: String,
        severity: String,
        priority: String,
        assignee: String,
    }
);

/// Validate the formatted fields of a bug dataset
pub fn validate_dataset(bugs: &[Bug]) -> Result<(), DatasetError> {
    let key_format = FieldFormat::Custom(
        regex::Regex::new(r"^BUG-\d{3}$").expect("key pattern is a valid regex"),
    );

    for bug in bugs {
        if !FieldFormat::Email.validate(&FieldValue::String(bug.assignee.clone())) {
            return Err(DatasetError::InvalidFieldFormat {
                collection: Bug::collection().to_string(),
                field: "assignee".to_string(),
                value: bug.assignee.clone(),
            });
        }
        if !key_format.validate(&FieldValue::String(bug.key.clone())) {
            return Err(DatasetError::InvalidFieldFormat {
                collection: Bug::collection().to_string(),
                field: "key".to_string(),
                value: bug.key.clone(),
            });
        }
    }

    Ok(())
}

/// The static bug collection a tracker page loads with
pub fn sample_bugs() -> Vec<Bug> {
    vec![
        Bug::new(
            "open".to_string(),
            "BUG-001".to_string(),
            "Login form validation fails on special characters".to_string(),
            "Users cannot login when password contains special characters".to_string(),
            "critical".to_string(),
            "high".to_string(),
            "john.doe@example.com".to_string(),
        )
        .with_created_at(Utc.with_ymd_and_hms(2024, 1, 10, 9, 0, 0).unwrap()),
        Bug::new(
            "in-progress".to_string(),
            "BUG-002".to_string(),
            "Dashboard loading spinner stuck".to_string(),
            "Loading indicator does not disappear after data loads".to_string(),
            "medium".to_string(),
            "medium".to_string(),
            "jane.smith@example.com".to_string(),
        )
        .with_created_at(Utc.with_ymd_and_hms(2024, 1, 12, 14, 30, 0).unwrap()),
        Bug::new(
            "open".to_string(),
            "BUG-003".to_string(),
            "API timeout on large data requests".to_string(),
            "Requests fail when fetching more than 1000 records".to_string(),
            "high".to_string(),
            "high".to_string(),
            "mike.ross@example.com".to_string(),
        )
        .with_created_at(Utc.with_ymd_and_hms(2024, 1, 14, 11, 15, 0).unwrap()),
        Bug::new(
            "closed".to_string(),
            "BUG-004".to_string(),
            "Export PDF button not responsive".to_string(),
            "Button does not work on mobile devices".to_string(),
            "low".to_string(),
            "low".to_string(),
            "sarah.lee@example.com".to_string(),
        )
        .with_created_at(Utc.with_ymd_and_hms(2024, 1, 8, 16, 45, 0).unwrap()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::criteria::{Criteria, SortDirection};
    use crate::core::pipeline::apply;

    #[test]
    fn test_sample_dataset_is_valid() {
        let bugs = sample_bugs();
        assert_eq!(bugs.len(), 4);
        validate_dataset(&bugs).expect("bundled dataset should pass validation");
    }

    #[test]
    fn test_validate_dataset_rejects_bad_email() {
        let mut bugs = sample_bugs();
        bugs[0].assignee = "not-an-email".to_string();
        let err = validate_dataset(&bugs).unwrap_err();
        assert!(err.to_string().contains("assignee"));
    }

    #[test]
    fn test_validate_dataset_rejects_bad_key() {
        let mut bugs = sample_bugs();
        bugs[2].key = "BUG-3".to_string();
        let err = validate_dataset(&bugs).unwrap_err();
        assert!(err.to_string().contains("key"));
    }

    #[test]
    fn test_search_title_and_description() {
        let bugs = sample_bugs();

        // "login" appears in BUG-001's title and description only
        let results = apply(&bugs, &Criteria::new().with_query("login"));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].key, "BUG-001");

        // "data" matches BUG-002's description and BUG-003's title
        let results = apply(&bugs, &Criteria::new().with_query("data"));
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_status_and_severity_filters() {
        let bugs = sample_bugs();

        let open = apply(&bugs, &Criteria::new().with_selector("status", "open"));
        assert_eq!(open.len(), 2);

        let open_critical = apply(
            &bugs,
            &Criteria::new()
                .with_selector("status", "open")
                .with_selector("severity", "critical"),
        );
        assert_eq!(open_critical.len(), 1);
        assert_eq!(open_critical[0].key, "BUG-001");
    }

    #[test]
    fn test_sort_by_created_at() {
        let bugs = sample_bugs();
        let newest_first = apply(
            &bugs,
            &Criteria::new().sorted_by("created_at", SortDirection::Desc),
        );
        let keys: Vec<&str> = newest_first.iter().map(|b| b.key.as_str()).collect();
        assert_eq!(keys, vec!["BUG-003", "BUG-002", "BUG-001", "BUG-004"]);
    }
}
