//! Provider that serves a fixture document read from disk.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::errors::ProviderError;
use crate::model::{Account, DashboardAggregate, Transaction, User};
use crate::provider::{AccountDataProvider, AccountLinker};

/// Layout of a fixture file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixtureDocument {
    pub user: User,
    #[serde(default)]
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub monthly_income: f64,
    #[serde(default)]
    pub monthly_expenses: f64,
}

/// Reads the fixture file on every call, so edits show up on refetch.
pub struct JsonFileProvider {
    path: PathBuf,
}

impl JsonFileProvider {
    /// Provider for the fixture document at `path`. The file is not read yet.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the fixture document.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and decode the fixture document.
    pub fn load(&self) -> Result<FixtureDocument, ProviderError> {
        debug!(path = %self.path.display(), "reading fixture document");
        let raw = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

impl AccountDataProvider for JsonFileProvider {
    fn fetch_user(&self) -> Result<User, ProviderError> {
        Ok(self.load()?.user)
    }

    fn fetch_accounts(&self) -> Result<Vec<Account>, ProviderError> {
        Ok(self.load()?.accounts)
    }

    fn fetch_dashboard_aggregate(&self) -> Result<DashboardAggregate, ProviderError> {
        let doc = self.load()?;
        Ok(DashboardAggregate::from_accounts(
            doc.accounts,
            doc.monthly_income,
            doc.monthly_expenses,
        ))
    }

    fn fetch_transactions(&self) -> Result<Vec<Transaction>, ProviderError> {
        Ok(self.load()?.transactions)
    }

    fn name(&self) -> &str {
        "json"
    }
}

impl AccountLinker for JsonFileProvider {
    /// Fixture files are edited by hand; there is nothing to link.
    fn connect_account(&self) -> Result<(), ProviderError> {
        Ok(())
    }
}
