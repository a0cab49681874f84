//! FILENAME: records/src/rent.rs
//! PURPOSE: Vehicle rent entries, one per delivery address.

use serde::{Deserialize, Serialize};

use crate::store::Keyed;

/// Rent charged for deliveries to an address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentEntry {
    pub id: u32,
    pub address: String,
    /// Area grouping; empty when the address has no assigned area.
    pub area: String,
    pub rent: f64,
}

impl RentEntry {
    pub fn has_rent(&self) -> bool {
        self.rent > 0.0
    }
}

impl Keyed for RentEntry {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }
}
