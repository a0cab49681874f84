//! FILENAME: export/src/sink.rs
//! PURPOSE: Output delivery, decoupled from any windowing system.
//! CONTEXT: The exporter only produces strings; where they go (a saved
//! file, a print surface opened by the embedder) is a sink concern. A
//! sink that cannot open its surface reports `Blocked`; the export
//! data is not lost and the caller may retry.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ExportError;
use crate::print::Document;

/// Something the exporter hands to a sink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExportOutput {
    /// CSV text, `text/csv; charset=utf-8`.
    Csv { filename: String, content: String },
    /// A printable HTML document.
    Document(Document),
}

/// A delivery target for export output.
pub trait OutputSink {
    fn deliver(&mut self, output: &ExportOutput) -> Result<(), ExportError>;
}

/// Append the deferred print trigger for sinks that open a browsing
/// surface. The delay lets the document paint before the dialog opens.
pub fn with_print_trigger(html: &str) -> String {
    match html.rfind("</body>") {
        Some(pos) => format!(
            "{}<script>setTimeout(()=>{{window.print();}},300)</script>{}",
            &html[..pos],
            &html[pos..]
        ),
        None => format!(
            "{}<script>setTimeout(()=>{{window.print();}},300)</script>",
            html
        ),
    }
}

/// Writes exports into a directory: CSVs under their own name,
/// documents as `<slug>.html`.
pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        FileSink {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn document_path(&self, title: &str) -> PathBuf {
        let slug: String = title
            .chars()
            .map(|c| if c.is_alphanumeric() { c } else { '_' })
            .collect();
        self.dir.join(format!("{}.html", slug))
    }
}

impl OutputSink for FileSink {
    fn deliver(&mut self, output: &ExportOutput) -> Result<(), ExportError> {
        fs::create_dir_all(&self.dir)?;
        match output {
            ExportOutput::Csv { filename, content } => {
                fs::write(self.dir.join(filename), content)?;
            }
            ExportOutput::Document(doc) => {
                fs::write(self.document_path(&doc.title), &doc.html)?;
            }
        }
        Ok(())
    }
}

/// Collects outputs in memory; used by tests and headless embedders.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub delivered: Vec<ExportOutput>,
}

impl MemorySink {
    pub fn new() -> Self {
        MemorySink::default()
    }
}

impl OutputSink for MemorySink {
    fn deliver(&mut self, output: &ExportOutput) -> Result<(), ExportError> {
        self.delivered.push(output.clone());
        Ok(())
    }
}
