use thiserror::Error;

/// Failures raised by the ratio calculations.
///
/// Both variants are division-by-zero conditions; their messages are fixed and
/// callers are expected to match on them verbatim.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AnalyticsError {
    #[error("Revenue can not be zero")]
    ZeroRevenue,
    #[error("Division by zero in Working Capital Ratio calculation")]
    ZeroLiabilities,
}

impl AnalyticsError {
    pub fn is_division_by_zero(&self) -> bool {
        matches!(self, Self::ZeroRevenue | Self::ZeroLiabilities)
    }
}

/// Error type covering ledger loading and report generation.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("The 'data' key is missing or not an array in {0}.")]
    MissingData(String),
    #[error(transparent)]
    Analytics(#[from] AnalyticsError),
}

pub type Result<T> = std::result::Result<T, LedgerError>;
