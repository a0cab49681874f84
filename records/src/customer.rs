//! FILENAME: records/src/customer.rs
//! PURPOSE: Customer and chalan (delivery/invoice line) records.
//! CONTEXT: A customer owns a list of chalans. Monetary totals on a
//! chalan (value, discount, vat, total, paid, due) are stored, not
//! recomputed downstream: the exporter and list views only format them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::store::Keyed;

/// A single delivery/invoice line for a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chalan {
    pub chalan_id: u32,
    /// Delivery address for this line (may differ from the customer's).
    pub address: String,
    /// Brick grade, e.g. "১ নং".
    pub category: String,
    /// Quantity in packets.
    pub qty: i64,
    /// Unit rate in taka.
    pub rate: f64,
    /// Gross value before discount and VAT.
    pub value: f64,
    pub discount: f64,
    pub vat: f64,
    /// Net total: value - discount + vat.
    pub total: f64,
    /// Cash received against this chalan.
    pub paid: f64,
    /// Outstanding balance: total - paid.
    pub due: f64,
    pub return_count: u32,
    pub delivery_day: Option<NaiveDate>,
    pub delivery_note: String,
    pub created_at: NaiveDate,
    pub serial: u32,
}

impl Keyed for Chalan {
    type Id = u32;

    fn id(&self) -> u32 {
        self.chalan_id
    }
}

/// A customer with their chalan history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: u32,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub total_packets: i64,
    pub delivered: i64,
    /// Total outstanding amount across the customer's chalans.
    pub amount: f64,
    /// Date of the most recent overdue balance, if any.
    pub last_due: Option<NaiveDate>,
    pub notes: String,
    pub chalans: Vec<Chalan>,
}

impl Customer {
    /// Look up one of this customer's chalans by id.
    pub fn chalan(&self, chalan_id: u32) -> Option<&Chalan> {
        self.chalans.iter().find(|c| c.chalan_id == chalan_id)
    }

    pub fn has_overdue(&self) -> bool {
        self.last_due.is_some()
    }

    pub fn has_unpaid(&self) -> bool {
        self.amount > 0.0
    }
}

impl Keyed for Customer {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer() -> Customer {
        Customer {
            id: 2952,
            name: "রাকিব ট্রেডার্স".to_string(),
            address: "বাগদা রোড".to_string(),
            phone: "01711-000000".to_string(),
            total_packets: 120,
            delivered: 100,
            amount: 20_800.0,
            last_due: NaiveDate::from_ymd_opt(2025, 8, 10),
            notes: String::new(),
            chalans: vec![Chalan {
                chalan_id: 3843,
                address: "বাগদা রোড".to_string(),
                category: "এক নং ইট".to_string(),
                qty: 2000,
                rate: 12.0,
                value: 24_000.0,
                discount: 480.0,
                vat: 0.0,
                total: 23_520.0,
                paid: 2_720.0,
                due: 20_800.0,
                return_count: 0,
                delivery_day: None,
                delivery_note: String::new(),
                created_at: NaiveDate::from_ymd_opt(2025, 8, 1).unwrap(),
                serial: 1,
            }],
        }
    }

    #[test]
    fn test_chalan_lookup() {
        let c = customer();
        assert!(c.chalan(3843).is_some());
        assert!(c.chalan(9999).is_none());
    }

    #[test]
    fn test_unpaid_and_overdue_flags() {
        let mut c = customer();
        assert!(c.has_unpaid());
        assert!(c.has_overdue());
        c.amount = 0.0;
        c.last_due = None;
        assert!(!c.has_unpaid());
        assert!(!c.has_overdue());
    }

    #[test]
    fn test_serde_round_trip_uses_camel_case() {
        let c = customer();
        let json = serde_json::to_value(&c).unwrap();
        assert!(json.get("totalPackets").is_some());
        assert!(json.get("lastDue").is_some());
        assert!(json["chalans"][0].get("chalanId").is_some());
        assert!(json["chalans"][0].get("deliveryDay").is_some());

        let back: Customer = serde_json::from_value(json).unwrap();
        assert_eq!(back, c);
    }
}
