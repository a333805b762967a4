//! Record trait defining the per-collection schema for the pipeline

use crate::core::field::FieldValue;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A typed record in a static, insertion-ordered collection.
///
/// Every record declares its schema explicitly: which text fields are
/// searchable, which categorical fields are filterable, and which fields
/// may be used as a sort key. The pipeline only ever touches fields through
/// [`Record::field_value`], so a record of any shape can flow through the
/// same generic passes.
///
/// Records are immutable for the lifetime of a page; the pipeline never
/// mutates the source collection.
///
/// All records have:
/// - id: Unique identifier
/// - record_type: Record type name (e.g., "bug", "product")
/// - created_at: Creation timestamp
/// - status: Current status tag
pub trait Record: Clone + Send + Sync + 'static {
    /// The collection name used in views and logs (e.g., "bugs", "products")
    fn collection() -> &'static str;

    // === Core Record Fields ===

    /// Get the unique identifier for this record instance
    fn id(&self) -> Uuid;

    /// Get the record type name
    fn record_type(&self) -> &str;

    /// Get the creation timestamp
    fn created_at(&self) -> DateTime<Utc>;

    /// Get the record status tag
    fn status(&self) -> &str;

    // === Schema Declaration ===

    /// Text fields matched by the free-text query
    fn searchable_fields() -> &'static [&'static str];

    /// Categorical fields that selectors may constrain
    fn filterable_fields() -> &'static [&'static str];

    /// Fields usable as a sort key
    fn sortable_fields() -> &'static [&'static str] {
        &[]
    }

    /// Get the value of a specific field by name.
    ///
    /// Returns `None` for fields the record does not carry; the pipeline
    /// treats an absent field as non-matching rather than an error.
    fn field_value(&self, field: &str) -> Option<FieldValue>;
}
