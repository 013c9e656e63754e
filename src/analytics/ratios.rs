use tracing::debug;

use crate::currency::to_fixed;
use crate::errors::AnalyticsError;
use crate::ledger::{AccountCategory, LedgerEntry, ValueType};

use super::sum_where;

/// Account types counted as current assets.
pub const CURRENT_ASSET_TYPES: [&str; 3] = ["current", "bank", "current_accounts_receivable"];

/// Account types counted as current liabilities.
pub const CURRENT_LIABILITY_TYPES: [&str; 2] = ["current", "current_accounts_payable"];

const SALES_ACCOUNT_TYPE: &str = "sales";

/// Sales debits as a share of `revenue`, percent scale with one decimal (`"50.0"`).
///
/// Cost of goods sold plays no part here; the figure is the debit total of
/// `sales` entries divided by revenue.
pub fn calculate_gross_profit_margin(
    entries: &[LedgerEntry],
    revenue: f64,
) -> Result<String, AnalyticsError> {
    if revenue == 0.0 {
        return Err(AnalyticsError::ZeroRevenue);
    }
    let sales_total = sum_where(entries, |entry| {
        entry.has_account_type(SALES_ACCOUNT_TYPE) && entry.is_value_type(&ValueType::Debit)
    });
    debug!(sales_total, revenue, "gross profit margin inputs");
    Ok(to_fixed((sales_total / revenue) * 100.0, 1))
}

/// `(revenue - expenses) / revenue` on a percent scale with one decimal.
///
/// There is no zero-revenue guard. A zero revenue renders the IEEE-754 result
/// instead of failing, spelled the Rust way (`"inf"`, `"-inf"`, `"NaN"`) rather
/// than `"Infinity"`/`"-Infinity"`. The spelling of a non-finite margin is
/// implementation-defined; callers should not match on it.
pub fn calculate_net_profit_margin(revenue: f64, expenses: f64) -> String {
    to_fixed(((revenue - expenses) / revenue) * 100.0, 1)
}

/// Current-asset debits minus current-asset credits.
pub fn net_current_assets(entries: &[LedgerEntry]) -> f64 {
    net_position(
        entries,
        &AccountCategory::Assets,
        &CURRENT_ASSET_TYPES,
        &ValueType::Debit,
        &ValueType::Credit,
    )
}

/// Current-liability credits minus current-liability debits.
pub fn net_current_liabilities(entries: &[LedgerEntry]) -> f64 {
    net_position(
        entries,
        &AccountCategory::Liability,
        &CURRENT_LIABILITY_TYPES,
        &ValueType::Credit,
        &ValueType::Debit,
    )
}

/// Net current assets over net current liabilities, percent scale with one decimal.
pub fn calculate_working_capital_ratio(entries: &[LedgerEntry]) -> Result<String, AnalyticsError> {
    let assets = net_current_assets(entries);
    let liabilities = net_current_liabilities(entries);
    debug!(assets, liabilities, "working capital inputs");

    if liabilities == 0.0 {
        return Err(AnalyticsError::ZeroLiabilities);
    }
    Ok(to_fixed((assets / liabilities) * 100.0, 1))
}

fn net_position(
    entries: &[LedgerEntry],
    category: &AccountCategory,
    account_types: &[&str],
    increase: &ValueType,
    decrease: &ValueType,
) -> f64 {
    let leg = |value_type: &ValueType| {
        sum_where(entries, |entry| {
            entry.is_category(category)
                && entry.is_value_type(value_type)
                && entry.has_account_type_in(account_types)
        })
    };
    leg(increase) - leg(decrease)
}
