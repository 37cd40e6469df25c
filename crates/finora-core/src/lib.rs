//! # finora-core
//!
//! Core library of the Finora personal-finance dashboard: account data
//! model, data providers, grouping, `de-DE` currency formatting, and the
//! observable dashboard view state.

pub mod cancel;
pub mod constants;
pub mod controller;
pub mod currency;
pub mod errors;
pub mod fixtures;
pub mod grouping;
pub mod json_provider;
pub mod mock;
pub mod model;
pub mod observer;
pub mod observers;
pub mod presentation;
pub mod provider;
pub mod tabs;
pub mod view_state;
pub mod worker;

// Re-exports
pub use cancel::CancellationToken;
pub use constants::{exit_codes, FETCH_ERROR_MESSAGE, HOME_CURRENCY, LOCALE};
pub use controller::{DashboardController, FetchTicket};
pub use currency::{format_currency, format_home};
pub use errors::{DashboardError, FormatError, ProviderError};
pub use grouping::{group_by_type, AccountGroup, AccountGroups};
pub use json_provider::JsonFileProvider;
pub use mock::MockProvider;
pub use model::{Account, Balances, DashboardAggregate, Transaction, User};
pub use presentation::{compose, Screen};
pub use provider::{AccountDataProvider, AccountLinker};
pub use tabs::{TabId, TABS};
pub use view_state::{ViewState, ViewStatus};
pub use worker::{FetchEvent, FetchSink, FetchWorker};
