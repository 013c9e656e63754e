#![doc(test(attr(deny(warnings))))]

//! Ledger Analytics derives revenue, expenses and a handful of headline ratios
//! from a flat list of accounting ledger entries.
//!
//! ```
//! use ledger_analytics::analytics::{calculate_revenue, calculate_working_capital_ratio};
//! use ledger_analytics::ledger::{AccountCategory, LedgerEntry, ValueType};
//!
//! let entries = vec![
//!     LedgerEntry::new(AccountCategory::Revenue, "sales", ValueType::Debit, 7000.0),
//!     LedgerEntry::new(AccountCategory::Assets, "bank", ValueType::Debit, 3000.0),
//!     LedgerEntry::new(AccountCategory::Liability, "current", ValueType::Credit, 2000.0),
//! ];
//! assert_eq!(calculate_revenue(&entries), 7000.0);
//! assert_eq!(calculate_working_capital_ratio(&entries).unwrap(), "150.0");
//! ```

pub mod analytics;
pub mod cli;
pub mod config;
pub mod currency;
pub mod errors;
pub mod ledger;
pub mod storage;
pub mod utils;

pub use analytics::{
    calculate_expenses, calculate_gross_profit_margin, calculate_net_profit_margin,
    calculate_revenue, calculate_working_capital_ratio, FinancialReport,
};
pub use currency::{format_currency, format_percentage};
pub use errors::{AnalyticsError, LedgerError};
pub use ledger::{AccountCategory, LedgerDocument, LedgerEntry, ValueType};

/// Initializes global tracing; later calls are no-ops.
pub fn init() {
    utils::init_tracing();
}
