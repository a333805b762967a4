//! Core module containing the pipeline and its fundamental types

pub mod criteria;
pub mod error;
pub mod field;
pub mod paginate;
pub mod pipeline;
pub mod record;
pub mod trend;

pub use criteria::{Criteria, CriteriaParams, Selector, SortDirection, SortSpec};
pub use error::{ConfigError, CriteriaError, DatasetError, SiftError, SiftResult};
pub use field::{FieldFormat, FieldValue, ToFieldValue};
pub use paginate::{Page, PageMeta, PageRequest, paginate};
pub use pipeline::{Collection, apply, apply_checked};
pub use record::Record;
pub use trend::{Sentiment, Trend};
