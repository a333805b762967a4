//! Bundled record schemas and demo collections
//!
//! One module per page family of the source system, each declaring its
//! record shape through [`crate::impl_record!`] together with the small
//! static dataset the page loads with.

pub mod bugs;
pub mod macros;
pub mod metrics;
pub mod products;
pub mod tickets;

pub use bugs::Bug;
pub use metrics::MetricCard;
pub use products::Product;
pub use tickets::SupportTicket;
