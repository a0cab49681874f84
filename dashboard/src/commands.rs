//! FILENAME: dashboard/src/commands.rs
//! PURPOSE: Named commands issued by the UI layer.
//! CONTEXT: Instead of threading update/export closures through the
//! page tree, the UI issues one of a small set of commands against the
//! state, exporter, and output sink. Each command is a single-shot
//! transform: mutations build a fresh collection and swap it in.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use export::{
    area_columns, build_chalan, build_customer_report, credit_columns, customer_columns,
    rent_columns, to_csv, ExportError, ExportOutput, OutputSink,
};
use tabular::{filtered, FilterTag};

use crate::state::DashboardState;

/// Which list an `ExportCsv` command targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CsvList {
    Customers,
    Rents,
    Credits,
    Areas,
}

impl CsvList {
    fn filename(self) -> &'static str {
        match self {
            CsvList::Customers => "customers.csv",
            CsvList::Rents => "rent_list.csv",
            CsvList::Credits => "credits.csv",
            CsvList::Areas => "sales_by_area.csv",
        }
    }
}

/// Which printable document an `ExportDocument` command builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DocumentTemplate {
    /// One chalan for one customer.
    Chalan { customer_id: u32, chalan_id: u32 },
    /// A customer with their full chalan list.
    CustomerReport { customer_id: u32 },
}

/// A UI action against the dashboard core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Command {
    /// Set or clear the delivery day on one chalan.
    UpdateDeliveryDate {
        customer_id: u32,
        chalan_id: u32,
        delivery_day: Option<NaiveDate>,
    },
    /// Export the currently filtered list (all pages) as CSV.
    ExportCsv {
        list: CsvList,
        query: String,
        filter: FilterTag,
    },
    /// Build and deliver a printable document.
    ExportDocument { template: DocumentTemplate },
}

/// What a successful dispatch did.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CommandOutcome {
    /// The customer collection was replaced.
    Updated,
    /// An export was handed to the sink; row count excludes the header.
    Exported { rows: usize },
    /// A document was handed to the sink.
    Printed { title: String },
}

/// Dispatch one command. State is only modified on success.
pub fn dispatch(
    state: &mut DashboardState,
    command: Command,
    sink: &mut dyn OutputSink,
) -> Result<CommandOutcome, ExportError> {
    match command {
        Command::UpdateDeliveryDate {
            customer_id,
            chalan_id,
            delivery_day,
        } => update_delivery_date(state, customer_id, chalan_id, delivery_day),
        Command::ExportCsv { list, query, filter } => {
            export_csv(state, list, &query, filter, sink)
        }
        Command::ExportDocument { template } => export_document(state, template, sink),
    }
}

fn update_delivery_date(
    state: &mut DashboardState,
    customer_id: u32,
    chalan_id: u32,
    delivery_day: Option<NaiveDate>,
) -> Result<CommandOutcome, ExportError> {
    let customers = state.customers.all();

    let customer = customers
        .iter()
        .find(|c| c.id == customer_id)
        .ok_or_else(|| ExportError::NotFound(format!("customer {}", customer_id)))?;
    if customer.chalan(chalan_id).is_none() {
        return Err(ExportError::NotFound(format!("chalan {}", chalan_id)));
    }

    // Fresh collection with the one chalan changed: downstream views
    // re-derive from the new snapshot.
    let next: Vec<_> = customers
        .iter()
        .map(|c| {
            if c.id != customer_id {
                return c.clone();
            }
            let mut c = c.clone();
            for chalan in &mut c.chalans {
                if chalan.chalan_id == chalan_id {
                    chalan.delivery_day = delivery_day;
                }
            }
            c
        })
        .collect();

    state.customers.replace_all(next);
    log::info!(
        "delivery date for chalan {} of customer {} set to {:?}",
        chalan_id,
        customer_id,
        delivery_day
    );
    Ok(CommandOutcome::Updated)
}

fn export_csv(
    state: &DashboardState,
    list: CsvList,
    query: &str,
    filter: FilterTag,
    sink: &mut dyn OutputSink,
) -> Result<CommandOutcome, ExportError> {
    let (content, rows) = match list {
        CsvList::Customers => {
            let rows = filtered(state.customers.all(), query, filter);
            (to_csv(&rows, &customer_columns()), rows.len())
        }
        CsvList::Rents => {
            let rows = filtered(state.rents.all(), query, filter);
            (to_csv(&rows, &rent_columns()), rows.len())
        }
        CsvList::Credits => {
            let rows = filtered(state.credits.all(), query, filter);
            (to_csv(&rows, &credit_columns()), rows.len())
        }
        CsvList::Areas => {
            let rows = filtered(state.areas.all(), query, filter);
            (to_csv(&rows, &area_columns()), rows.len())
        }
    };

    sink.deliver(&ExportOutput::Csv {
        filename: list.filename().to_string(),
        content,
    })?;
    log::info!("exported {} rows to {}", rows, list.filename());
    Ok(CommandOutcome::Exported { rows })
}

fn export_document(
    state: &DashboardState,
    template: DocumentTemplate,
    sink: &mut dyn OutputSink,
) -> Result<CommandOutcome, ExportError> {
    let document = match template {
        DocumentTemplate::Chalan {
            customer_id,
            chalan_id,
        } => build_chalan(state.customers.all(), customer_id, chalan_id)?,
        DocumentTemplate::CustomerReport { customer_id } => {
            build_customer_report(state.customers.all(), customer_id)?
        }
    };

    let title = document.title.clone();
    if let Err(err) = sink.deliver(&ExportOutput::Document(document)) {
        log::warn!("document delivery refused: {}", err);
        return Err(err);
    }
    log::info!("printed document: {}", title);
    Ok(CommandOutcome::Printed { title })
}
