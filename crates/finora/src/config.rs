//! Application configuration from CLI flags and environment.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use finora_core::errors::DashboardError;
use finora_core::tabs::TabId;

/// Finora: personal finance dashboard for linked bank accounts.
#[derive(Parser, Debug)]
#[command(name = "finora", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Tab to show: overview, accounts, or contracts.
    #[arg(long, default_value = "overview", env = "FINORA_TAB")]
    pub tab: String,

    /// Launch the interactive dashboard.
    #[arg(long)]
    pub tui: bool,

    /// Print the dashboard state as JSON.
    #[arg(long, conflicts_with = "tui")]
    pub json: bool,

    /// Also print the transaction list.
    #[arg(long)]
    pub transactions: bool,

    /// Read accounts from a JSON fixture file instead of the demo data.
    #[arg(long, env = "FINORA_FIXTURES")]
    pub fixtures: Option<PathBuf>,

    /// Start the demo data without linked accounts.
    #[arg(long, conflicts_with = "fixtures")]
    pub unlinked: bool,

    /// Connect a bank account before loading the dashboard.
    #[arg(long)]
    pub connect: bool,

    /// Make the demo provider fail every call.
    #[arg(long, conflicts_with = "fixtures")]
    pub offline: bool,

    /// Simulated provider latency in milliseconds.
    #[arg(long, default_value = "0", env = "FINORA_LATENCY_MS")]
    pub latency_ms: u64,

    /// How long print mode waits for data (e.g. "30s", "500ms").
    #[arg(long, default_value = "30s")]
    pub timeout: String,

    /// Verbose logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode: only the dashboard body, no spinner.
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// The tab selected with `--tab`.
    pub fn initial_tab(&self) -> Result<TabId, DashboardError> {
        self.tab.parse()
    }

    /// Parse `--timeout` into a duration.
    pub fn timeout_duration(&self) -> Result<Duration, DashboardError> {
        parse_duration(&self.timeout)
            .ok_or_else(|| DashboardError::Config(format!("invalid timeout '{}'", self.timeout)))
    }

    #[must_use]
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

/// Parse a duration string like "5m", "1h", "30s", "250ms".
fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim();
    if let Some(ms) = s.strip_suffix("ms") {
        Some(Duration::from_millis(ms.parse().ok()?))
    } else if let Some(mins) = s.strip_suffix('m') {
        let n: u64 = mins.parse().ok()?;
        Some(Duration::from_secs(n.checked_mul(60)?))
    } else if let Some(hours) = s.strip_suffix('h') {
        let n: u64 = hours.parse().ok()?;
        Some(Duration::from_secs(n.checked_mul(3600)?))
    } else if let Some(secs) = s.strip_suffix('s') {
        Some(Duration::from_secs(secs.parse().ok()?))
    } else {
        Some(Duration::from_secs(s.parse().ok()?))
    }
}
