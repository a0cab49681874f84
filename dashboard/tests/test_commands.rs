//! FILENAME: tests/test_commands.rs
//! Integration tests for command dispatch.

mod common;

use chrono::NaiveDate;
use common::{BlockedSink, TestHarness};
use dashboard::{
    dispatch, Command, CommandOutcome, CsvList, DocumentTemplate, ExportError,
    ExportOutput, FileSink, FilterTag, MemorySink,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ============================================================================
// UPDATE DELIVERY DATE
// ============================================================================

#[test]
fn test_update_delivery_date_replaces_snapshot() {
    let mut harness = TestHarness::with_sample_data();
    let customer_id = harness.first_customer_id();
    let chalan_id = harness.first_chalan_id();
    let mut sink = MemorySink::new();

    let new_day = Some(date(2025, 9, 1));
    let outcome = dispatch(
        &mut harness.state,
        Command::UpdateDeliveryDate {
            customer_id,
            chalan_id,
            delivery_day: new_day,
        },
        &mut sink,
    )
    .expect("dispatch");

    assert_eq!(outcome, CommandOutcome::Updated);
    let customer = harness.state.customers.find(customer_id).expect("customer");
    assert_eq!(customer.chalan(chalan_id).expect("chalan").delivery_day, new_day);
    // Other customers are untouched.
    assert_eq!(harness.state.customers.len(), 12);
}

#[test]
fn test_update_delivery_date_can_clear() {
    let mut harness = TestHarness::with_sample_data();
    let customer_id = harness.first_customer_id();
    let chalan_id = harness.first_chalan_id();
    let mut sink = MemorySink::new();

    dispatch(
        &mut harness.state,
        Command::UpdateDeliveryDate {
            customer_id,
            chalan_id,
            delivery_day: None,
        },
        &mut sink,
    )
    .expect("dispatch");

    let customer = harness.state.customers.find(customer_id).expect("customer");
    assert_eq!(customer.chalan(chalan_id).expect("chalan").delivery_day, None);
}

#[test]
fn test_update_delivery_date_unknown_ids() {
    let mut harness = TestHarness::with_sample_data();
    let customer_id = harness.first_customer_id();
    let mut sink = MemorySink::new();

    let missing_customer = dispatch(
        &mut harness.state,
        Command::UpdateDeliveryDate {
            customer_id: 999_999,
            chalan_id: 1,
            delivery_day: None,
        },
        &mut sink,
    );
    assert!(matches!(missing_customer, Err(ExportError::NotFound(_))));

    let missing_chalan = dispatch(
        &mut harness.state,
        Command::UpdateDeliveryDate {
            customer_id,
            chalan_id: 999_999,
            delivery_day: None,
        },
        &mut sink,
    );
    assert!(matches!(missing_chalan, Err(ExportError::NotFound(_))));
}

// ============================================================================
// CSV EXPORT
// ============================================================================

#[test]
fn test_export_customers_csv_covers_filtered_set() {
    let mut harness = TestHarness::with_sample_data();
    let mut sink = MemorySink::new();

    let outcome = dispatch(
        &mut harness.state,
        Command::ExportCsv {
            list: CsvList::Customers,
            query: String::new(),
            filter: FilterTag::Unpaid,
        },
        &mut sink,
    )
    .expect("dispatch");

    let expected_rows = harness
        .state
        .customers
        .all()
        .iter()
        .filter(|c| c.amount > 0.0)
        .count();
    assert_eq!(outcome, CommandOutcome::Exported { rows: expected_rows });

    assert_eq!(sink.delivered.len(), 1);
    match &sink.delivered[0] {
        ExportOutput::Csv { filename, content } => {
            assert_eq!(filename, "customers.csv");
            assert!(content.starts_with("\"ID\",\"Name\",\"Phone\",\"Amount\""));
            // Header plus one line per exported record.
            assert_eq!(content.lines().count(), expected_rows + 1);
        }
        other => panic!("expected CSV output, got {:?}", other),
    }
}

#[test]
fn test_export_rent_csv_to_file_sink() {
    let mut harness = TestHarness::with_sample_data();
    let dir = tempfile::tempdir().expect("tempdir");
    let mut sink = FileSink::new(dir.path());

    dispatch(
        &mut harness.state,
        Command::ExportCsv {
            list: CsvList::Rents,
            query: String::new(),
            filter: FilterTag::All,
        },
        &mut sink,
    )
    .expect("dispatch");

    let written =
        std::fs::read_to_string(dir.path().join("rent_list.csv")).expect("written file");
    assert!(written.starts_with("\"#\",\"ঠিকানা\",\"এলাকা\",\"ভাড়া\""));
    assert_eq!(written.lines().count(), 21); // header + 20 rows
}

#[test]
fn test_export_csv_with_query_narrows_rows() {
    let mut harness = TestHarness::with_sample_data();
    let mut sink = MemorySink::new();

    let outcome = dispatch(
        &mut harness.state,
        Command::ExportCsv {
            list: CsvList::Areas,
            query: "bagda".to_string(),
            filter: FilterTag::All,
        },
        &mut sink,
    )
    .expect("dispatch");

    assert_eq!(outcome, CommandOutcome::Exported { rows: 1 });
}

// ============================================================================
// DOCUMENT EXPORT
// ============================================================================

#[test]
fn test_export_chalan_document() {
    let mut harness = TestHarness::with_sample_data();
    let customer_id = harness.first_customer_id();
    let chalan_id = harness.first_chalan_id();
    let mut sink = MemorySink::new();

    let outcome = dispatch(
        &mut harness.state,
        Command::ExportDocument {
            template: DocumentTemplate::Chalan {
                customer_id,
                chalan_id,
            },
        },
        &mut sink,
    )
    .expect("dispatch");

    assert_eq!(
        outcome,
        CommandOutcome::Printed {
            title: format!("Chalan {}", chalan_id)
        }
    );
    match &sink.delivered[0] {
        ExportOutput::Document(doc) => assert!(doc.html.contains("সর্বমোট")),
        other => panic!("expected document output, got {:?}", other),
    }
}

#[test]
fn test_export_document_unknown_customer_is_not_found() {
    let mut harness = TestHarness::with_sample_data();
    let mut sink = MemorySink::new();

    let result = dispatch(
        &mut harness.state,
        Command::ExportDocument {
            template: DocumentTemplate::CustomerReport { customer_id: 1 },
        },
        &mut sink,
    );
    assert!(matches!(result, Err(ExportError::NotFound(_))));
    assert!(sink.delivered.is_empty());
}

#[test]
fn test_blocked_sink_surfaces_without_state_damage() {
    let mut harness = TestHarness::with_sample_data();
    let customer_id = harness.first_customer_id();
    let mut sink = BlockedSink;

    let result = dispatch(
        &mut harness.state,
        Command::ExportDocument {
            template: DocumentTemplate::CustomerReport { customer_id },
        },
        &mut sink,
    );
    assert!(matches!(result, Err(ExportError::Blocked(_))));
    // The record snapshot is intact; the user can simply retry.
    assert_eq!(harness.state.customers.len(), 12);
}
