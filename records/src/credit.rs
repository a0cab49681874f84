//! FILENAME: records/src/credit.rs
//! PURPOSE: Credit (ঋণ/বাকি) positions per counterparty.

use serde::{Deserialize, Serialize};

use crate::store::Keyed;

/// An outstanding credit position against one person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditEntry {
    pub id: u32,
    pub name: String,
    pub location: String,
    pub phone: String,
    /// Amount the counterparty still owes.
    pub owed: f64,
}

impl Keyed for CreditEntry {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }
}
