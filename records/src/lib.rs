//! FILENAME: records/src/lib.rs
//! PURPOSE: Main library entry point for the records domain model.
//! CONTEXT: Re-exports public types and modules for use by other crates.

pub mod area;
pub mod credit;
pub mod customer;
pub mod field;
pub mod money;
pub mod rent;
pub mod sample;
pub mod store;
pub mod task;
pub mod vehicle;

// Re-export commonly used types at the crate root
pub use area::{AreaSales, AreaTotals};
pub use credit::CreditEntry;
pub use customer::{Chalan, Customer};
pub use field::{format_plain_number, FieldValue};
pub use money::{format_money, format_money_opt, CURRENCY_SYMBOL};
pub use rent::RentEntry;
pub use store::{Keyed, RecordStore};
pub use task::{Repeat, Task};
pub use vehicle::{
    ledger_rows, CashSummary, LedgerRow, Transaction, TransactionKind, Vehicle,
};
