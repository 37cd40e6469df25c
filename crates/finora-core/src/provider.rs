//! Data provider capabilities.
//!
//! The dashboard never talks to a bank directly. It consumes these traits,
//! so a real account-data integration can replace the mock without touching
//! the controller or the presentation layer.

use crate::errors::ProviderError;
use crate::model::{Account, DashboardAggregate, Transaction, User};

/// Read access to the signed-in user's banking data.
///
/// Calls may block; callers run them on a worker thread (see
/// [`crate::worker::FetchWorker`]).
pub trait AccountDataProvider: Send + Sync {
    /// Fetch the signed-in user.
    fn fetch_user(&self) -> Result<User, ProviderError>;

    /// Fetch all linked accounts.
    fn fetch_accounts(&self) -> Result<Vec<Account>, ProviderError>;

    /// Fetch accounts together with the summary figures.
    fn fetch_dashboard_aggregate(&self) -> Result<DashboardAggregate, ProviderError>;

    /// Fetch booked transactions across all accounts.
    fn fetch_transactions(&self) -> Result<Vec<Transaction>, ProviderError>;

    /// Short name for logs.
    fn name(&self) -> &str;
}

/// Links a bank account on behalf of the user.
pub trait AccountLinker: Send + Sync {
    /// Connect an account. On success the next aggregate fetch reflects it.
    fn connect_account(&self) -> Result<(), ProviderError>;
}
