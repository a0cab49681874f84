//! FILENAME: tabular/src/filter.rs
//! PURPOSE: Enumerated filter tags applied before the search step.
//! CONTEXT: Exactly one tag is active per list at a time. Tags come
//! from internal UI state, so unknown strings are not an error: they
//! parse to `All`. A tag that does not apply to a given row type also
//! behaves as `All`.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The filter tag selected on a list page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterTag {
    /// No filtering.
    All,
    /// Customers with an overdue balance date.
    Overdue,
    /// Customers with an outstanding amount.
    Unpaid,
    /// Income transactions.
    Income,
    /// Expense transactions.
    Expense,
    /// Tasks not yet done.
    Pending,
    /// Completed tasks.
    Done,
}

impl Default for FilterTag {
    fn default() -> Self {
        FilterTag::All
    }
}

impl FromStr for FilterTag {
    type Err = std::convert::Infallible;

    /// Unrecognized tags fall back to `All` rather than erroring.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "overdue" => FilterTag::Overdue,
            "unpaid" => FilterTag::Unpaid,
            "income" => FilterTag::Income,
            "expense" => FilterTag::Expense,
            "pending" => FilterTag::Pending,
            "done" => FilterTag::Done,
            _ => FilterTag::All,
        })
    }
}
