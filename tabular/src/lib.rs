//! FILENAME: tabular/src/lib.rs
//! Tabular list pipeline for the dashboard.
//!
//! This crate turns a record snapshot plus the page's UI state (query,
//! filter tag, page number) into the visible slice and its page-count
//! metadata. It depends on `records` for the domain types.
//!
//! Layers:
//! - `filter`: Enumerated filter tags (what is selectable)
//! - `view`: The pipeline itself (filter -> search -> paginate)
//! - `rows`: Per-page adapters (which fields each page searches)
//! - `summary`: Stat cards computed over the full snapshot

pub mod filter;
pub mod rows;
pub mod summary;
pub mod view;

pub use filter::FilterTag;
pub use rows::{
    AREA_PAGE_SIZE, CREDIT_PAGE_SIZE, CUSTOMER_PAGE_SIZE, RENT_PAGE_SIZE,
    TRANSACTION_PAGE_SIZE,
};
pub use summary::{CreditSummary, RentSummary};
pub use view::{filtered, view, TableRow, TableView};
