//! In-memory provider backed by the demo fixtures.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use parking_lot::RwLock;
use tracing::{debug, info};

use crate::constants::{MOCK_MONTHLY_EXPENSES, MOCK_MONTHLY_INCOME};
use crate::errors::ProviderError;
use crate::fixtures;
use crate::model::{Account, DashboardAggregate, Transaction, User};
use crate::provider::{AccountDataProvider, AccountLinker};

/// Mock banking backend.
///
/// Resolves immediately unless a simulated latency is configured. Starts
/// either with the fixture accounts linked or with none; `connect_account`
/// links the fixtures.
pub struct MockProvider {
    accounts: RwLock<Vec<Account>>,
    latency: Duration,
    offline: AtomicBool,
}

impl MockProvider {
    /// Provider with the fixture accounts already linked.
    #[must_use]
    pub fn new() -> Self {
        Self {
            accounts: RwLock::new(fixtures::accounts()),
            latency: Duration::ZERO,
            offline: AtomicBool::new(false),
        }
    }

    /// Provider with no linked accounts, so the dashboard asks for onboarding.
    #[must_use]
    pub fn unlinked() -> Self {
        Self {
            accounts: RwLock::new(Vec::new()),
            ..Self::new()
        }
    }

    /// Delay every call by `latency`.
    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Make every fetch fail with [`ProviderError::Unavailable`] until reset.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::Relaxed);
    }

    /// Number of currently linked accounts.
    #[must_use]
    pub fn linked_accounts(&self) -> usize {
        self.accounts.read().len()
    }

    fn simulate_call(&self, op: &str) -> Result<(), ProviderError> {
        if !self.latency.is_zero() {
            std::thread::sleep(self.latency);
        }
        if self.offline.load(Ordering::Relaxed) {
            debug!(op, "mock provider offline");
            return Err(ProviderError::Unavailable("mock provider is offline".to_string()));
        }
        Ok(())
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountDataProvider for MockProvider {
    fn fetch_user(&self) -> Result<User, ProviderError> {
        self.simulate_call("fetch_user")?;
        Ok(fixtures::user())
    }

    fn fetch_accounts(&self) -> Result<Vec<Account>, ProviderError> {
        self.simulate_call("fetch_accounts")?;
        Ok(self.accounts.read().clone())
    }

    fn fetch_dashboard_aggregate(&self) -> Result<DashboardAggregate, ProviderError> {
        self.simulate_call("fetch_dashboard_aggregate")?;
        let accounts = self.accounts.read().clone();
        if accounts.is_empty() {
            return Ok(DashboardAggregate::from_accounts(accounts, 0.0, 0.0));
        }
        Ok(DashboardAggregate::from_accounts(
            accounts,
            MOCK_MONTHLY_INCOME,
            MOCK_MONTHLY_EXPENSES,
        ))
    }

    fn fetch_transactions(&self) -> Result<Vec<Transaction>, ProviderError> {
        self.simulate_call("fetch_transactions")?;
        if self.accounts.read().is_empty() {
            return Ok(Vec::new());
        }
        Ok(fixtures::transactions())
    }

    fn name(&self) -> &str {
        "mock"
    }
}

impl AccountLinker for MockProvider {
    fn connect_account(&self) -> Result<(), ProviderError> {
        self.simulate_call("connect_account")?;
        let mut accounts = self.accounts.write();
        if accounts.is_empty() {
            *accounts = fixtures::accounts();
        }
        info!(linked = accounts.len(), "bank account connected");
        Ok(())
    }
}
