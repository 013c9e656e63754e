use std::fmt;

/// Build metadata embedded by `build.rs`.
#[derive(Debug, Clone, Copy)]
pub struct BuildMetadata {
    pub version: &'static str,
    pub git_hash: &'static str,
    pub timestamp: &'static str,
    pub target: &'static str,
    pub profile: &'static str,
    pub rustc: &'static str,
}

pub fn current() -> BuildMetadata {
    BuildMetadata {
        version: env!("CARGO_PKG_VERSION"),
        git_hash: option_env!("LEDGER_ANALYTICS_BUILD_HASH").unwrap_or("unknown"),
        timestamp: option_env!("LEDGER_ANALYTICS_BUILD_TIMESTAMP").unwrap_or("unknown"),
        target: option_env!("LEDGER_ANALYTICS_BUILD_TARGET").unwrap_or("unknown"),
        profile: option_env!("LEDGER_ANALYTICS_BUILD_PROFILE").unwrap_or("unknown"),
        rustc: option_env!("LEDGER_ANALYTICS_BUILD_RUSTC").unwrap_or("unknown"),
    }
}

impl fmt::Display for BuildMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ledger_analytics {} ({})", self.version, self.git_hash)?;
        writeln!(f, "built {} for {} [{}]", self.timestamp, self.target, self.profile)?;
        write!(f, "{}", self.rustc)
    }
}
