#![allow(dead_code)]

use std::{fs, path::PathBuf};

use serde_json::{json, Value};
use tempfile::TempDir;

/// A ledger with every report figure well defined.
///
/// revenue 10,000 (sales debits 6,000), expenses 4,500,
/// net current assets 9,000, net current liabilities 6,000.
pub fn sample_ledger() -> Value {
    json!({
        "data": [
            { "account_category": "revenue", "account_type": "sales", "value_type": "debit", "total_value": 6000 },
            { "account_category": "revenue", "account_type": "sales", "value_type": "credit", "total_value": 4000 },
            { "account_category": "expense", "account_type": "payroll", "value_type": "debit", "total_value": 3000 },
            { "account_category": "expense", "account_type": "rent", "value_type": "debit", "total_value": 1500 },
            { "account_category": "assets", "account_type": "bank", "value_type": "debit", "total_value": 7000 },
            { "account_category": "assets", "account_type": "current_accounts_receivable", "value_type": "debit", "total_value": 2500 },
            { "account_category": "assets", "account_type": "current", "value_type": "credit", "total_value": 500 },
            { "account_category": "assets", "account_type": "fixed", "value_type": "debit", "total_value": 50000 },
            { "account_category": "liability", "account_type": "current_accounts_payable", "value_type": "credit", "total_value": 6500 },
            { "account_category": "liability", "account_type": "current", "value_type": "debit", "total_value": 500 },
            { "account_category": "liability", "account_type": "long_term", "value_type": "credit", "total_value": 90000 }
        ]
    })
}

/// Writes `contents` into a fresh temp dir and returns the guard with the file path.
pub fn write_fixture(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write fixture");
    (dir, path)
}

pub fn write_ledger(ledger: &Value) -> (TempDir, PathBuf) {
    let json = serde_json::to_string_pretty(ledger).expect("serialize ledger");
    write_fixture("data.json", &json)
}
