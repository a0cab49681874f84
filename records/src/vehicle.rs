//! FILENAME: records/src/vehicle.rs
//! PURPOSE: Vehicle accounts: income/expense transactions, the cash
//! summary, and the running-balance ledger (খতিয়ান).
//! CONTEXT: Transactions are immutable snapshots; the summary and
//! ledger are derived on demand and never stored.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::store::Keyed;

/// A vehicle in the fleet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: String,
    pub name: String,
}

/// Direction of a vehicle transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransactionKind {
    Income,
    Expense,
}

/// One entry in a vehicle's account book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: u32,
    pub kind: TransactionKind,
    pub description: String,
    pub amount: f64,
    /// Cash actually moved. For income this can be less than `amount`,
    /// leaving a due.
    pub paid: f64,
    pub date: NaiveDate,
    pub note: String,
}

impl Transaction {
    /// Outstanding amount on this transaction.
    pub fn due(&self) -> f64 {
        self.amount - self.paid
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }
}

impl Keyed for Transaction {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }
}

/// Cash-flow totals over a transaction set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashSummary {
    /// Cash received from income transactions.
    pub income: f64,
    /// Cash spent on expense transactions.
    pub expense: f64,
    /// income - expense.
    pub net_cash: f64,
    /// Open dues across income transactions.
    pub total_due: f64,
}

impl CashSummary {
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let mut income = 0.0;
        let mut expense = 0.0;
        let mut total_due = 0.0;

        for t in transactions {
            match t.kind {
                TransactionKind::Income => {
                    income += t.paid;
                    if t.due() > 0.0 {
                        total_due += t.due();
                    }
                }
                TransactionKind::Expense => expense += t.amount,
            }
        }

        CashSummary {
            income,
            expense,
            net_cash: income - expense,
            total_due,
        }
    }
}

/// One row of the running-balance ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerRow {
    pub date: NaiveDate,
    pub description: String,
    /// Cash in for this entry (income transactions).
    pub debit: f64,
    /// Cash out for this entry (expense transactions).
    pub credit: f64,
    /// Running balance after this entry.
    pub balance: f64,
}

/// Build the ledger view: one row per transaction in input order with a
/// running cash balance.
pub fn ledger_rows(transactions: &[Transaction]) -> Vec<LedgerRow> {
    let mut balance = 0.0;
    transactions
        .iter()
        .map(|t| {
            let (debit, credit) = match t.kind {
                TransactionKind::Income => (t.paid, 0.0),
                TransactionKind::Expense => (0.0, t.amount),
            };
            balance += debit - credit;
            LedgerRow {
                date: t.date,
                description: t.description.clone(),
                debit,
                credit,
                balance,
            }
        })
        .collect()
}
