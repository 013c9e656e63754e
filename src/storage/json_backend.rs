use std::{
    fs,
    path::{Path, PathBuf},
};

use serde_json::Value;
use tracing::info;

use crate::{
    errors::LedgerError,
    ledger::{LedgerDocument, LedgerEntry},
};

use super::{LedgerSource, Result};

/// Reads ledgers from a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LedgerSource for JsonFileSource {
    fn load(&self) -> Result<LedgerDocument> {
        load_entries_from_path(&self.path)
    }
}

/// Loads `{ "data": [...] }` from `path`.
pub fn load_entries_from_path(path: &Path) -> Result<LedgerDocument> {
    let raw = fs::read_to_string(path)?;
    let document = parse_document(&raw, &display_name(path))?;
    info!(path = %path.display(), entries = document.len(), "ledger data loaded");
    Ok(document)
}

/// Parses a ledger document held in memory.
pub fn load_entries_from_str(raw: &str) -> Result<LedgerDocument> {
    parse_document(raw, "input")
}

/// Only the shape of `data` is checked; individual entries decode leniently.
fn parse_document(raw: &str, source_name: &str) -> Result<LedgerDocument> {
    let root: Value = serde_json::from_str(raw)?;
    let items = match root.get("data") {
        Some(Value::Array(items)) => items,
        _ => return Err(LedgerError::MissingData(source_name.to_string())),
    };
    let data = items.iter().cloned().map(LedgerEntry::from).collect();
    Ok(LedgerDocument::new(data))
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
