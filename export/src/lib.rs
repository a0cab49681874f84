//! FILENAME: export/src/lib.rs
//! Export module for the dashboard.
//!
//! Builds the two ephemeral output formats: CSV text with RFC-4180
//! escaping, and printable HTML documents. Delivery goes through an
//! `OutputSink` so the core never touches a windowing system.

mod csv;
mod error;
mod print;
mod sink;

pub use csv::{
    area_columns, credit_columns, customer_columns, rent_columns, to_csv, Column,
};
pub use error::ExportError;
pub use print::{
    build_chalan, build_customer_report, chalan_document, customer_document, Document,
};
pub use sink::{with_print_trigger, ExportOutput, FileSink, MemorySink, OutputSink};
