pub mod json_backend;

use crate::{errors::LedgerError, ledger::LedgerDocument};

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Anything able to hand over a full ledger in one piece.
pub trait LedgerSource {
    fn load(&self) -> Result<LedgerDocument>;
}

pub use json_backend::{load_entries_from_path, load_entries_from_str, JsonFileSource};
