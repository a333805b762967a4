//! Macro for defining record types without boilerplate
//!
//! Each page of the source system carries its own record shape; this macro
//! generates the struct, the `Record` implementation with its field-access
//! dispatch, and a constructor, so a page schema stays a short declaration.

/// Define a record type with its searchable/filterable/sortable schema
///
/// # Example
///
/// ```rust,ignore
/// use sift::prelude::*;
///
/// impl_record!(
///     Bug,
///     "bug",
///     search: ["title", "description"],
///     filter: ["status", "severity"],
///     sort: ["created_at"],
///     {
///         title: String,
///         description: String,
///         severity: String,
///     }
/// );
///
/// let bug = Bug::new(
///     "open".to_string(),
///     "Login form validation fails".to_string(),
///     "Special characters break the password check".to_string(),
///     "critical".to_string(),
/// );
/// ```
#[macro_export]
macro_rules! impl_record {
    (
        $type:ident,
        $type_name:expr,
        search: [ $( $search_field:expr ),* $(,)? ],
        filter: [ $( $filter_field:expr ),* $(,)? ],
        sort: [ $( $sort_field:expr ),* $(,)? ],
        {
            $( $specific_field:ident : $specific_type:ty ),* $(,)?
        }
    ) => {
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        pub struct $type {
            /// Unique identifier for this record
            pub id: ::uuid::Uuid,

            /// Type of the record
            #[serde(rename = "type")]
            pub record_type: String,

            /// When this record was created
            pub created_at: ::chrono::DateTime<::chrono::Utc>,

            /// Current status tag
            pub status: String,
            $( pub $specific_field : $specific_type ),*
        }

        impl $crate::core::record::Record for $type {
            fn collection() -> &'static str {
                concat!($type_name, "s")
            }

            fn id(&self) -> ::uuid::Uuid {
                self.id
            }

            fn record_type(&self) -> &str {
                &self.record_type
            }

            fn created_at(&self) -> ::chrono::DateTime<::chrono::Utc> {
                self.created_at
            }

            fn status(&self) -> &str {
                &self.status
            }

            fn searchable_fields() -> &'static [&'static str] {
                &[ $( $search_field ),* ]
            }

            fn filterable_fields() -> &'static [&'static str] {
                &[ $( $filter_field ),* ]
            }

            fn sortable_fields() -> &'static [&'static str] {
                &[ $( $sort_field ),* ]
            }

            fn field_value(&self, field: &str) -> Option<$crate::core::field::FieldValue> {
                use $crate::core::field::ToFieldValue;

                if field == "id" {
                    return Some($crate::core::field::FieldValue::String(
                        self.id.to_string(),
                    ));
                }
                if field == "status" {
                    return Some(self.status.to_field_value());
                }
                if field == "created_at" {
                    return Some(self.created_at.to_field_value());
                }
                $(
                    if field == stringify!($specific_field) {
                        return Some(self.$specific_field.to_field_value());
                    }
                )*
                None
            }
        }

        impl $type {
            /// Create a new record of this type
            pub fn new(
                status: String,
                $( $specific_field: $specific_type ),*
            ) -> Self {
                Self {
                    id: ::uuid::Uuid::new_v4(),
                    record_type: $type_name.to_string(),
                    created_at: ::chrono::Utc::now(),
                    status,
                    $( $specific_field ),*
                }
            }

            /// Create a record with an explicit creation timestamp
            pub fn with_created_at(
                mut self,
                created_at: ::chrono::DateTime<::chrono::Utc>,
            ) -> Self {
                self.created_at = created_at;
                self
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    impl_record!(
        TestBug,
        "test_bug",
        search: ["title", "description"],
        filter: ["status", "severity"],
        sort: ["created_at", "votes"],
        {
            title: String,
            description: String,
            severity: String,
            votes: Option<i64>,
        }
    );

    #[test]
    fn test_record_creation() {
        let bug = TestBug::new(
            "open".to_string(),
            "Login fails".to_string(),
            "Password check rejects valid input".to_string(),
            "critical".to_string(),
            Some(3),
        );

        assert_eq!(bug.status(), "open");
        assert_eq!(bug.record_type(), "test_bug");
        assert_eq!(TestBug::collection(), "test_bugs");
        assert_eq!(bug.title, "Login fails");
    }

    #[test]
    fn test_schema_declaration() {
        assert_eq!(TestBug::searchable_fields(), &["title", "description"]);
        assert_eq!(TestBug::filterable_fields(), &["status", "severity"]);
        assert_eq!(TestBug::sortable_fields(), &["created_at", "votes"]);
    }

    #[test]
    fn test_field_value_dispatch() {
        let bug = TestBug::new(
            "open".to_string(),
            "Login fails".to_string(),
            "Password check rejects valid input".to_string(),
            "critical".to_string(),
            None,
        );

        assert_eq!(
            bug.field_value("severity"),
            Some(FieldValue::String("critical".to_string()))
        );
        assert_eq!(
            bug.field_value("status"),
            Some(FieldValue::String("open".to_string()))
        );
        assert_eq!(bug.field_value("votes"), Some(FieldValue::Null));
        assert!(matches!(
            bug.field_value("created_at"),
            Some(FieldValue::DateTime(_))
        ));
        assert_eq!(bug.field_value("nonexistent"), None);
    }

    #[test]
    fn test_with_created_at() {
        let stamp = chrono::DateTime::parse_from_rfc3339("2024-03-01T09:00:00Z")
            .expect("valid timestamp")
            .with_timezone(&chrono::Utc);
        let bug = TestBug::new(
            "open".to_string(),
            "t".to_string(),
            "d".to_string(),
            "low".to_string(),
            None,
        )
        .with_created_at(stamp);

        assert_eq!(bug.created_at(), stamp);
    }

    fn bug_with_votes(title: &str, votes: Option<i64>) -> TestBug {
        TestBug::new(
            "open".to_string(),
            title.to_string(),
            "desc".to_string(),
            "low".to_string(),
            votes,
        )
    }

    #[test]
    fn test_sort_sends_absent_option_values_last() {
        let bugs = vec![
            bug_with_votes("a", Some(5)),
            bug_with_votes("b", None),
            bug_with_votes("c", Some(3)),
        ];

        let asc = apply(&bugs, &Criteria::new().sorted_by("votes", SortDirection::Asc));
        let titles: Vec<&str> = asc.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["c", "a", "b"]);

        let desc = apply(&bugs, &Criteria::new().sorted_by("votes", SortDirection::Desc));
        let titles: Vec<&str> = desc.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "c", "b"]);
    }

    #[test]
    fn test_sort_with_many_interleaved_absent_values() {
        // Alternating Some/None over a larger collection: comparable values
        // come out ordered, the rest follow in source order
        let bugs: Vec<TestBug> = (0..40)
            .map(|i| {
                let votes = if i % 2 == 0 { Some(40 - i) } else { None };
                bug_with_votes(&format!("bug-{i}"), votes)
            })
            .collect();

        let sorted = apply(&bugs, &Criteria::new().sorted_by("votes", SortDirection::Asc));

        let keyed: Vec<i64> = sorted.iter().filter_map(|b| b.votes).collect();
        assert_eq!(keyed.len(), 20);
        assert!(keyed.windows(2).all(|w| w[0] <= w[1]));

        // All keyless records trail the keyed ones, keeping source order
        let first_keyless = sorted.iter().position(|b| b.votes.is_none());
        assert_eq!(first_keyless, Some(20));
        let keyless: Vec<&str> = sorted[20..].iter().map(|b| b.title.as_str()).collect();
        let expected: Vec<String> = (0..40)
            .filter(|i| i % 2 == 1)
            .map(|i| format!("bug-{i}"))
            .collect();
        assert_eq!(keyless, expected);
    }

    #[test]
    fn test_generated_record_flows_through_pipeline() {
        let bugs = vec![
            TestBug::new(
                "open".to_string(),
                "Login fails".to_string(),
                "desc".to_string(),
                "critical".to_string(),
                None,
            ),
            TestBug::new(
                "closed".to_string(),
                "Export broken".to_string(),
                "desc".to_string(),
                "low".to_string(),
                None,
            ),
        ];

        let results = apply(
            &bugs,
            &Criteria::new().with_selector("severity", "critical"),
        );
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Login fails");
    }
}
