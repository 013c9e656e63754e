use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::currency::{format_currency_with_symbol, DEFAULT_CURRENCY_SYMBOL};
use crate::errors::AnalyticsError;
use crate::ledger::LedgerEntry;

use super::{
    calculate_expenses, calculate_gross_profit_margin, calculate_net_profit_margin,
    calculate_revenue, calculate_working_capital_ratio,
};

/// The five headline figures for one ledger.
///
/// Margins and the working capital ratio are kept as the percent-scale strings
/// the calculations return.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinancialReport {
    pub revenue: f64,
    pub expenses: f64,
    pub gross_profit_margin: String,
    pub net_profit_margin: String,
    pub working_capital_ratio: String,
}

/// A labelled, already formatted report row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub label: &'static str,
    pub value: String,
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.value)
    }
}

impl FinancialReport {
    /// Runs every calculation in order and stops at the first failure.
    pub fn compute(entries: &[LedgerEntry]) -> Result<Self, AnalyticsError> {
        let revenue = calculate_revenue(entries);
        let expenses = calculate_expenses(entries);
        debug!(revenue, expenses, entries = entries.len(), "ledger totals");

        let gross_profit_margin = calculate_gross_profit_margin(entries, revenue)?;
        let net_profit_margin = calculate_net_profit_margin(revenue, expenses);
        let working_capital_ratio = calculate_working_capital_ratio(entries)?;

        Ok(Self {
            revenue,
            expenses,
            gross_profit_margin,
            net_profit_margin,
            working_capital_ratio,
        })
    }

    pub fn lines(&self) -> Vec<ReportLine> {
        self.lines_with_symbol(DEFAULT_CURRENCY_SYMBOL)
    }

    /// Report rows with amounts prefixed by `symbol`.
    ///
    /// Ratio strings are already on a percent scale, so they only gain a `%`
    /// suffix and never go through `format_percentage`.
    pub fn lines_with_symbol(&self, symbol: &str) -> Vec<ReportLine> {
        vec![
            ReportLine {
                label: "Revenue",
                value: format_currency_with_symbol(self.revenue, symbol),
            },
            ReportLine {
                label: "Expenses",
                value: format_currency_with_symbol(self.expenses, symbol),
            },
            ReportLine {
                label: "Gross Profit Margin",
                value: percent_suffix(&self.gross_profit_margin),
            },
            ReportLine {
                label: "Net Profit Margin",
                value: percent_suffix(&self.net_profit_margin),
            },
            ReportLine {
                label: "Working Capital Ratio",
                value: percent_suffix(&self.working_capital_ratio),
            },
        ]
    }
}

impl fmt::Display for FinancialReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

fn percent_suffix(percent: &str) -> String {
    format!("{percent}%")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{AccountCategory, ValueType};

    fn sample_entries() -> Vec<LedgerEntry> {
        vec![
            LedgerEntry::new(AccountCategory::Revenue, "sales", ValueType::Debit, 8000.0),
            LedgerEntry::new(AccountCategory::Revenue, "other", ValueType::Credit, 2000.0),
            LedgerEntry::new(AccountCategory::Expense, "rent", ValueType::Debit, 2500.0),
            LedgerEntry::new(AccountCategory::Assets, "bank", ValueType::Debit, 6000.0),
            LedgerEntry::new(AccountCategory::Liability, "current", ValueType::Credit, 4000.0),
        ]
    }

    #[test]
    fn computes_every_figure() {
        let report = FinancialReport::compute(&sample_entries()).expect("report");
        assert_eq!(report.revenue, 10_000.0);
        assert_eq!(report.expenses, 2500.0);
        assert_eq!(report.gross_profit_margin, "80.0");
        assert_eq!(report.net_profit_margin, "75.0");
        assert_eq!(report.working_capital_ratio, "150.0");
    }

    #[test]
    fn renders_lines_in_fixed_order() {
        let report = FinancialReport::compute(&sample_entries()).expect("report");
        let rendered = report.to_string();
        assert_eq!(
            rendered,
            "Revenue: $10,000\n\
             Expenses: $2,500\n\
             Gross Profit Margin: 80.0%\n\
             Net Profit Margin: 75.0%\n\
             Working Capital Ratio: 150.0%\n"
        );
    }

    #[test]
    fn zero_revenue_fails_before_ratios() {
        let entries = vec![LedgerEntry::new(
            AccountCategory::Expense,
            "rent",
            ValueType::Debit,
            10.0,
        )];
        assert_eq!(
            FinancialReport::compute(&entries).unwrap_err(),
            AnalyticsError::ZeroRevenue
        );
    }

    #[test]
    fn missing_liabilities_fail_the_report() {
        let entries = vec![LedgerEntry::new(
            AccountCategory::Revenue,
            "sales",
            ValueType::Debit,
            10.0,
        )];
        assert_eq!(
            FinancialReport::compute(&entries).unwrap_err(),
            AnalyticsError::ZeroLiabilities
        );
    }

    #[test]
    fn custom_symbol_applies_to_amounts_only() {
        let report = FinancialReport::compute(&sample_entries()).expect("report");
        let lines = report.lines_with_symbol("£");
        assert_eq!(lines[0].value, "£10,000");
        assert_eq!(lines[2].value, "80.0%");
    }
}
