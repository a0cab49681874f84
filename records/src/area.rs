//! FILENAME: records/src/area.rs
//! PURPOSE: Per-area sales report rows and their grand totals.

use serde::{Deserialize, Serialize};

use crate::store::Keyed;

/// Aggregated sales figures for one delivery area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaSales {
    /// Row number in the report (also the unique id).
    pub idx: u32,
    pub area: String,
    pub customers: i64,
    pub chalans: i64,
    pub units: i64,
    /// Total sales in taka.
    pub sales: f64,
}

impl Keyed for AreaSales {
    type Id = u32;

    fn id(&self) -> u32 {
        self.idx
    }
}

/// Grand totals across all report rows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaTotals {
    pub areas: usize,
    pub customers: i64,
    pub chalans: i64,
    pub units: i64,
    pub sales: f64,
}

impl AreaTotals {
    pub fn from_rows(rows: &[AreaSales]) -> Self {
        AreaTotals {
            areas: rows.len(),
            customers: rows.iter().map(|r| r.customers).sum(),
            chalans: rows.iter().map(|r| r.chalans).sum(),
            units: rows.iter().map(|r| r.units).sum(),
            sales: rows.iter().map(|r| r.sales).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample;

    fn row(idx: u32, customers: i64, chalans: i64, units: i64, sales: f64) -> AreaSales {
        AreaSales {
            idx,
            area: format!("Area {}", idx),
            customers,
            chalans,
            units,
            sales,
        }
    }

    #[test]
    fn test_totals_sum_each_column() {
        let rows = vec![row(1, 100, 120, 2000, 14_000.0), row(2, 50, 60, 1000, 8_000.0)];
        let t = AreaTotals::from_rows(&rows);
        assert_eq!(t.areas, 2);
        assert_eq!(t.customers, 150);
        assert_eq!(t.chalans, 180);
        assert_eq!(t.units, 3000);
        assert_eq!(t.sales, 22_000.0);
    }

    #[test]
    fn test_totals_over_empty_report() {
        let t = AreaTotals::from_rows(&[]);
        assert_eq!(t.areas, 0);
        assert_eq!(t.customers, 0);
        assert_eq!(t.sales, 0.0);
    }

    #[test]
    fn test_totals_over_sample_report() {
        let t = AreaTotals::from_rows(&sample::area_sales());
        assert_eq!(t.areas, 12);
        assert_eq!(t.customers, 12_266);
        assert_eq!(t.chalans, 13_964);
        assert_eq!(t.units, 99_674);
        assert_eq!(t.sales, 1_150_862.0);
    }
}
