//! FILENAME: records/src/store.rs
//! PURPOSE: Explicit record ownership: one store per list.
//! CONTEXT: Consumers read immutable snapshots through `all()`. Any
//! mutation is expressed as building a fresh collection and swapping it
//! in with `replace_all`; nothing downstream holds a mutable handle.

use serde::Serialize;

/// A record with a unique identifier field.
pub trait Keyed {
    type Id: Copy + PartialEq;

    fn id(&self) -> Self::Id;
}

/// Owner of a record collection.
#[derive(Debug, Clone, Default)]
pub struct RecordStore<T> {
    records: Vec<T>,
}

impl<T: Keyed + Clone + Serialize> RecordStore<T> {
    pub fn new(records: Vec<T>) -> Self {
        RecordStore { records }
    }

    /// The current snapshot, in insertion order.
    pub fn all(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn find(&self, id: T::Id) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Swap in a fresh collection. The previous snapshot is dropped;
    /// any derived views must be recomputed by the caller.
    pub fn replace_all(&mut self, records: Vec<T>) {
        self.records = records;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rent::RentEntry;

    fn entry(id: u32, rent: f64) -> RentEntry {
        RentEntry {
            id,
            address: format!("address {}", id),
            area: String::new(),
            rent,
        }
    }

    #[test]
    fn test_find_by_id() {
        let store = RecordStore::new(vec![entry(1, 450.0), entry(2, 0.0)]);
        assert_eq!(store.find(2).map(|r| r.rent), Some(0.0));
        assert!(store.find(99).is_none());
    }

    #[test]
    fn test_replace_all_swaps_snapshot() {
        let mut store = RecordStore::new(vec![entry(1, 450.0)]);
        store.replace_all(vec![entry(1, 500.0), entry(2, 600.0)]);
        assert_eq!(store.len(), 2);
        assert_eq!(store.find(1).map(|r| r.rent), Some(500.0));
    }
}
