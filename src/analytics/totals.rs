use crate::ledger::{AccountCategory, LedgerEntry};

use super::sum_where;

/// Total of every `revenue` entry.
pub fn calculate_revenue(entries: &[LedgerEntry]) -> f64 {
    sum_where(entries, |entry| entry.is_category(&AccountCategory::Revenue))
}

/// Total of every `expense` entry.
pub fn calculate_expenses(entries: &[LedgerEntry]) -> f64 {
    sum_where(entries, |entry| entry.is_category(&AccountCategory::Expense))
}
