use std::fmt::Formatter;
use std::sync::Arc;

use crate::data::models::{RecordId, RestaurantRecord};

/// Read-only view of the store at one point in time.
pub type Snapshot = Arc<Vec<RestaurantRecord>>;

#[derive(Debug, PartialEq)]
pub enum StoreError {
    OutOfRange { index: usize, len: usize }
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            StoreError::OutOfRange { index, len } => {
                write!(f, "Index {} out of range (store has {} records)", index, len)
            }
        }
    }
}

/// Ordered restaurant records. Insertion order is display order.
///
/// Every mutation builds a new sequence and swaps it in, so a [`Snapshot`]
/// handed out earlier never changes under its reader.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Snapshot
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Snapshot {
        Arc::clone(&self.records)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn get(&self, index: usize) -> Option<&RestaurantRecord> {
        self.records.get(index)
    }

    pub fn position(&self, id: RecordId) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    pub fn append(&mut self, record: RestaurantRecord) {
        let mut records = Vec::with_capacity(self.records.len() + 1);
        records.extend(self.records.iter().cloned());
        records.push(record);
        self.records = Arc::new(records);
    }

    pub fn replace(&mut self, index: usize, record: RestaurantRecord) -> Result<(), StoreError> {
        self.check_index(index)?;

        let mut records = self.records.as_ref().clone();
        records[index] = record;
        self.records = Arc::new(records);
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<RestaurantRecord, StoreError> {
        self.check_index(index)?;

        let mut records = self.records.as_ref().clone();
        let removed = records.remove(index);
        self.records = Arc::new(records);
        Ok(removed)
    }

    fn check_index(&self, index: usize) -> Result<(), StoreError> {
        if index < self.records.len() {
            Ok(())
        } else {
            Err(StoreError::OutOfRange { index, len: self.records.len() })
        }
    }
}
