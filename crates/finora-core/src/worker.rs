//! Background execution of provider calls.
//!
//! Every call runs on its own thread and reports back through a
//! [`FetchSink`]. The UI thread owns the [`crate::controller::DashboardController`]
//! and applies the delivered events there.

use std::sync::Arc;
use std::thread::JoinHandle;

use crossbeam_channel::Sender;
use tracing::{debug, trace};

use crate::controller::FetchTicket;
use crate::errors::ProviderError;
use crate::model::{DashboardAggregate, Transaction, User};
use crate::provider::{AccountDataProvider, AccountLinker};

/// Outcome of one background provider call.
#[derive(Debug, Clone)]
pub enum FetchEvent {
    /// Result of the aggregate fetch started with ticket `seq`.
    Aggregate {
        seq: u64,
        result: Result<DashboardAggregate, ProviderError>,
    },
    User(Result<User, ProviderError>),
    Transactions(Result<Vec<Transaction>, ProviderError>),
    AccountConnected(Result<(), ProviderError>),
}

/// Destination of [`FetchEvent`]s.
pub trait FetchSink: Send + Sync {
    fn deliver(&self, event: FetchEvent);
}

impl FetchSink for Sender<FetchEvent> {
    fn deliver(&self, event: FetchEvent) {
        // The receiving side may already be gone on shutdown.
        let _ = self.send(event);
    }
}

/// Runs provider calls off the calling thread.
#[derive(Clone)]
pub struct FetchWorker {
    provider: Arc<dyn AccountDataProvider>,
    linker: Arc<dyn AccountLinker>,
    sink: Arc<dyn FetchSink>,
}

impl FetchWorker {
    #[must_use]
    pub fn new(
        provider: Arc<dyn AccountDataProvider>,
        linker: Arc<dyn AccountLinker>,
        sink: Arc<dyn FetchSink>,
    ) -> Self {
        Self {
            provider,
            linker,
            sink,
        }
    }

    /// Name of the wrapped provider.
    #[must_use]
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Fetch the dashboard aggregate for `ticket`.
    ///
    /// Nothing is delivered if the ticket is cancelled before the call
    /// returns.
    pub fn spawn_aggregate(&self, ticket: FetchTicket) -> JoinHandle<()> {
        let provider = Arc::clone(&self.provider);
        let sink = Arc::clone(&self.sink);
        std::thread::spawn(move || {
            if ticket.cancel.is_cancelled() {
                trace!(seq = ticket.seq, "aggregate fetch cancelled before start");
                return;
            }
            debug!(seq = ticket.seq, provider = provider.name(), "fetching dashboard aggregate");
            let result = provider.fetch_dashboard_aggregate();
            if ticket.cancel.is_cancelled() {
                trace!(seq = ticket.seq, "aggregate fetch cancelled, dropping result");
                return;
            }
            sink.deliver(FetchEvent::Aggregate {
                seq: ticket.seq,
                result,
            });
        })
    }

    /// Fetch the session user.
    pub fn spawn_user(&self) -> JoinHandle<()> {
        let provider = Arc::clone(&self.provider);
        let sink = Arc::clone(&self.sink);
        std::thread::spawn(move || {
            sink.deliver(FetchEvent::User(provider.fetch_user()));
        })
    }

    /// Fetch the transaction list.
    pub fn spawn_transactions(&self) -> JoinHandle<()> {
        let provider = Arc::clone(&self.provider);
        let sink = Arc::clone(&self.sink);
        std::thread::spawn(move || {
            sink.deliver(FetchEvent::Transactions(provider.fetch_transactions()));
        })
    }

    /// Link a bank account.
    pub fn spawn_connect(&self) -> JoinHandle<()> {
        let linker = Arc::clone(&self.linker);
        let sink = Arc::clone(&self.sink);
        std::thread::spawn(move || {
            sink.deliver(FetchEvent::AccountConnected(linker.connect_account()));
        })
    }
}
