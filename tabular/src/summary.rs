//! FILENAME: tabular/src/summary.rs
//! PURPOSE: The stat cards shown above each list.
//! CONTEXT: Summaries are computed over the full (unfiltered) snapshot,
//! matching the pages: searching does not change the totals row.

use serde::Serialize;

use records::{CreditEntry, RentEntry};

/// Rent list stats: count, total, and average rent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RentSummary {
    pub addresses: usize,
    /// Addresses currently charged a non-zero rent.
    pub paying: usize,
    pub total_rent: f64,
    /// Total divided by count, rounded to the nearest taka.
    pub average_rent: f64,
}

impl RentSummary {
    pub fn from_rows(rows: &[RentEntry]) -> Self {
        let total_rent: f64 = rows.iter().map(|r| r.rent).sum();
        let average_rent = if rows.is_empty() {
            0.0
        } else {
            (total_rent / rows.len() as f64).round()
        };
        RentSummary {
            addresses: rows.len(),
            paying: rows.iter().filter(|r| r.has_rent()).count(),
            total_rent,
            average_rent,
        }
    }
}

/// Credit list stats: positions, total owed, and debtor count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditSummary {
    pub positions: usize,
    pub total_owed: f64,
    pub debtors: usize,
}

impl CreditSummary {
    pub fn from_rows(rows: &[CreditEntry]) -> Self {
        CreditSummary {
            positions: rows.len(),
            total_owed: rows.iter().map(|r| r.owed).sum(),
            debtors: rows.iter().filter(|r| r.owed > 0.0).count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use records::sample;

    #[test]
    fn test_rent_summary() {
        let rents = sample::rents();
        let s = RentSummary::from_rows(&rents);
        assert_eq!(s.addresses, 20);
        assert_eq!(s.paying, 10);
        assert_eq!(s.total_rent, 5500.0);
        assert_eq!(s.average_rent, 275.0);
    }

    #[test]
    fn test_rent_summary_empty() {
        let s = RentSummary::from_rows(&[]);
        assert_eq!(s.paying, 0);
        assert_eq!(s.average_rent, 0.0);
    }

    #[test]
    fn test_credit_summary_counts_debtors() {
        let credits = sample::credits();
        let s = CreditSummary::from_rows(&credits);
        assert_eq!(s.positions, 8);
        assert_eq!(s.debtors, 5);
        assert_eq!(s.total_owed, 32075.0);
    }
}
