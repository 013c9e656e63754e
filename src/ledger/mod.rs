//! Ledger entry model and the document shape it is exchanged in.

pub mod entry;

use serde::{Deserialize, Serialize};

pub use entry::{AccountCategory, LedgerEntry, ValueType};

/// On-disk shape of a ledger: `{ "data": [ ... ] }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerDocument {
    pub data: Vec<LedgerEntry>,
}

impl LedgerDocument {
    pub fn new(data: Vec<LedgerEntry>) -> Self {
        Self { data }
    }

    pub fn entries(&self) -> &[LedgerEntry] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl From<Vec<LedgerEntry>> for LedgerDocument {
    fn from(data: Vec<LedgerEntry>) -> Self {
        Self::new(data)
    }
}
