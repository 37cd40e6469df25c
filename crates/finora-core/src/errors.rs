//! Error types shared by providers, the formatter, and the controller.

/// Error returned by an account data provider.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    /// The provider could not serve the request.
    #[error("provider unavailable: {0}")]
    Unavailable(String),

    /// The request was cancelled before it completed.
    #[error("request cancelled")]
    Cancelled,

    /// Reading fixture data failed.
    #[error("i/o error: {0}")]
    Io(String),

    /// Fixture data could not be decoded.
    #[error("malformed data: {0}")]
    Parse(String),
}

impl From<std::io::Error> for ProviderError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ProviderError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Error returned by the currency formatter.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormatError {
    /// NaN or infinite amounts have no meaningful rendering.
    #[error("cannot format non-finite amount {0}")]
    NonFinite(f64),

    /// The currency code is not a three-letter ISO 4217 code.
    #[error("invalid currency code {0:?}")]
    InvalidCurrency(String),
}

/// Umbrella error for dashboard operations.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    /// Fetching dashboard data failed.
    #[error("fetch failed: {0}")]
    Fetch(#[from] ProviderError),

    /// An amount could not be formatted.
    #[error("format failed: {0}")]
    Format(#[from] FormatError),

    /// A tab identifier outside the known set.
    #[error("unknown tab {0:?} (expected overview, accounts, or contracts)")]
    UnknownTab(String),

    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// The dashboard did not load in time.
    #[error("timed out after {0}")]
    Timeout(String),
}
