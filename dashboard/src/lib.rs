//! FILENAME: dashboard/src/lib.rs
//! PURPOSE: Main library entry point for the dashboard layer.
//! CONTEXT: Ties the record stores, the tabular pipeline, and the
//! exporter together behind a small command surface.

pub mod commands;
pub mod state;

pub use commands::{dispatch, Command, CommandOutcome, CsvList, DocumentTemplate};
pub use state::{create_dashboard_state, DashboardState};

// Re-export the pieces UI embedders need without extra crate imports.
pub use export::{ExportError, ExportOutput, FileSink, MemorySink, OutputSink};
pub use tabular::{view, FilterTag, TableView};
