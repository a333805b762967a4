//! # Sift
//!
//! A generic search/filter/sort pipeline for static, in-memory record
//! collections.
//!
//! Dashboard and portal pages all repeat the same interaction: a fixed
//! collection of records, a search box, a few dropdown selectors, and an
//! optional sort — recomputed on every input change. Sift consolidates
//! that per-page logic into one typed, stateless pipeline.
//!
//! ## Features
//!
//! - **Declared Schemas**: Each record type declares which fields are
//!   searchable, filterable, and sortable — no stringly-typed guessing
//! - **Pure Pipeline**: Criteria in, result sequence out; no internal
//!   state, no mutation of the source, deterministic output
//! - **Fail-Closed Matching**: Absent fields and unknown selector values
//!   exclude a record instead of crashing the filter pass
//! - **Macro-Based Records**: `impl_record!` generates the struct, schema,
//!   and field dispatch from a short declaration
//! - **YAML Views**: Per-page filter bars (searchable fields, selector
//!   options, default sort) defined in configuration
//! - **Pagination**: Slice an already-filtered result into pages with
//!   ready-made metadata
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sift::prelude::*;
//!
//! impl_record!(
//!     Ticket,
//!     "ticket",
//!     search: ["title"],
//!     filter: ["status", "priority"],
//!     sort: ["created_at"],
//!     {
//!         title: String,
//!         priority: String,
//!     }
//! );
//!
//! let tickets = Collection::new(vec![
//!     Ticket::new("open".into(), "Payment Issue".into(), "high".into()),
//!     Ticket::new("closed".into(), "Order Status".into(), "medium".into()),
//! ]);
//!
//! let criteria = Criteria::new()
//!     .with_query("payment")
//!     .with_selector("status", "open");
//!
//! let results = tickets.apply(&criteria);
//! assert_eq!(results.len(), 1);
//! ```

pub mod config;
pub mod core;
pub mod records;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Types ===
    pub use crate::core::{
        criteria::{Criteria, CriteriaParams, Selector, SortDirection, SortSpec},
        error::{ConfigError, CriteriaError, DatasetError, SiftError, SiftResult},
        field::{FieldFormat, FieldValue, ToFieldValue},
        paginate::{Page, PageMeta, PageRequest, paginate},
        pipeline::{Collection, apply, apply_checked},
        record::Record,
        trend::{Sentiment, Trend},
    };

    // === Macros ===
    pub use crate::impl_record;

    // === Config ===
    pub use crate::config::{SELECTOR_ALL, SelectorConfig, ViewConfig, ViewsConfig};

    // === External dependencies ===
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};
    pub use uuid::Uuid;
}
