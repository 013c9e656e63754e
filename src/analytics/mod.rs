//! Revenue/expense totals, the three ratios derived from them, and the report
//! that strings them together.
//!
//! Every function here is a pure pass over a borrowed slice of entries. None of
//! them log above `debug`, touch the filesystem, or print.

pub mod ratios;
pub mod report;
pub mod totals;

pub use ratios::{
    calculate_gross_profit_margin, calculate_net_profit_margin, calculate_working_capital_ratio,
    net_current_assets, net_current_liabilities, CURRENT_ASSET_TYPES, CURRENT_LIABILITY_TYPES,
};
pub use report::{FinancialReport, ReportLine};
pub use totals::{calculate_expenses, calculate_revenue};

use crate::ledger::LedgerEntry;

/// Sums `total_value` over the entries accepted by `predicate`.
///
/// Folds from a positive zero so an empty selection yields `0.0`, not `-0.0`.
pub(crate) fn sum_where<F>(entries: &[LedgerEntry], predicate: F) -> f64
where
    F: Fn(&LedgerEntry) -> bool,
{
    entries
        .iter()
        .filter(|entry| predicate(entry))
        .fold(0.0, |sum, entry| sum + entry.amount())
}
