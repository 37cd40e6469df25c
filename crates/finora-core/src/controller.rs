//! Dashboard view-state controller.
//!
//! Owns the [`ViewState`] and drives `Loading → {Loaded, Failed}`. The
//! controller never calls the provider itself: a fetch operation hands out a
//! [`FetchTicket`], the owner runs the provider call (usually on a
//! [`crate::worker::FetchWorker`]) and feeds the outcome back through
//! [`DashboardController::complete_fetch`].
//!
//! Only one fetch is in flight at a time. A result is applied only if its
//! sequence number belongs to the in-flight ticket, so a superseded or
//! cancelled request can never overwrite newer state.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::cancel::CancellationToken;
use crate::constants::FETCH_ERROR_MESSAGE;
use crate::errors::{DashboardError, ProviderError};
use crate::model::{DashboardAggregate, User};
use crate::observer::{ViewStateObserver, ViewStateSubject};
use crate::tabs::TabId;
use crate::view_state::ViewState;

/// Permission to run one aggregate fetch.
#[derive(Debug, Clone)]
pub struct FetchTicket {
    /// Request sequence number; higher is newer.
    pub seq: u64,
    /// Cancelled when the request is superseded or abandoned.
    pub cancel: CancellationToken,
}

/// Owner of the dashboard view state.
pub struct DashboardController {
    state: ViewState,
    next_seq: u64,
    in_flight: Option<FetchTicket>,
    subject: ViewStateSubject,
}

impl DashboardController {
    /// Controller in the initial loading state, showing `initial_tab`.
    #[must_use]
    pub fn new(initial_tab: TabId) -> Self {
        Self {
            state: ViewState::new(initial_tab),
            next_seq: 0,
            in_flight: None,
            subject: ViewStateSubject::new(),
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Register an observer; it is notified after every change.
    pub fn subscribe(&self, observer: Arc<dyn ViewStateObserver>) {
        self.subject.register(observer);
    }

    /// Whether a fetch ticket is outstanding.
    #[must_use]
    pub fn is_fetching(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Sequence number of the outstanding ticket.
    #[must_use]
    pub fn in_flight_seq(&self) -> Option<u64> {
        self.in_flight.as_ref().map(|t| t.seq)
    }

    /// Start the first dashboard fetch.
    ///
    /// Returns `None` when a fetch is already in flight.
    pub fn initialize(&mut self) -> Option<FetchTicket> {
        self.refetch()
    }

    /// Fetch the dashboard again, keeping the active tab.
    ///
    /// Coalesced with an in-flight fetch: returns `None` and the pending
    /// result will be applied instead.
    pub fn refetch(&mut self) -> Option<FetchTicket> {
        if let Some(ticket) = &self.in_flight {
            debug!(seq = ticket.seq, "fetch already in flight, coalescing");
            return None;
        }
        Some(self.begin_fetch())
    }

    /// Fetch the dashboard again, superseding any in-flight fetch.
    ///
    /// Used when the underlying data changed after the pending request was
    /// issued, e.g. right after an account was connected.
    pub fn reload(&mut self) -> FetchTicket {
        if let Some(stale) = self.in_flight.take() {
            debug!(seq = stale.seq, "superseding in-flight fetch");
            stale.cancel.cancel();
        }
        self.begin_fetch()
    }

    fn begin_fetch(&mut self) -> FetchTicket {
        self.next_seq += 1;
        let ticket = FetchTicket {
            seq: self.next_seq,
            cancel: CancellationToken::new(),
        };
        self.in_flight = Some(ticket.clone());

        self.state.loading = true;
        self.state.error_message = None;
        self.state.aggregate = None;
        self.state.needs_onboarding = false;
        debug!(seq = ticket.seq, "dashboard fetch started");
        self.notify();
        ticket
    }

    /// Apply the outcome of the fetch with sequence number `seq`.
    ///
    /// Returns `false` (state untouched) when `seq` is not the in-flight
    /// request or that request was cancelled.
    pub fn complete_fetch(
        &mut self,
        seq: u64,
        result: Result<DashboardAggregate, ProviderError>,
    ) -> bool {
        let current = match &self.in_flight {
            Some(ticket) if ticket.seq == seq && !ticket.cancel.is_cancelled() => true,
            Some(ticket) => {
                debug!(seq, in_flight = ticket.seq, "discarding stale fetch result");
                false
            }
            None => {
                debug!(seq, "discarding fetch result with no request in flight");
                false
            }
        };
        if !current {
            return false;
        }
        self.in_flight = None;
        self.state.loading = false;

        match result {
            Ok(aggregate) => {
                self.state.needs_onboarding = aggregate.accounts.is_empty();
                self.state.error_message = None;
                self.state.aggregate = Some(aggregate);
            }
            Err(err) => {
                warn!(seq, error = %err, "dashboard fetch failed");
                self.state.error_message = Some(FETCH_ERROR_MESSAGE.to_string());
                self.state.aggregate = None;
                self.state.needs_onboarding = false;
            }
        }
        self.notify();
        true
    }

    /// Abandon the in-flight fetch, leaving the dashboard in the failed state.
    ///
    /// Returns `false` if nothing was in flight.
    pub fn cancel_in_flight(&mut self) -> bool {
        let Some(ticket) = self.in_flight.take() else {
            return false;
        };
        ticket.cancel.cancel();
        debug!(seq = ticket.seq, "dashboard fetch cancelled");
        self.state.loading = false;
        self.state.error_message = Some(FETCH_ERROR_MESSAGE.to_string());
        self.notify();
        true
    }

    /// Switch tabs. Fetch state is left untouched.
    pub fn set_active_tab(&mut self, tab: TabId) {
        if self.state.active_tab == tab {
            return;
        }
        self.state.active_tab = tab;
        self.notify();
    }

    /// Switch tabs by identifier; unknown identifiers are rejected.
    pub fn set_active_tab_id(&mut self, id: &str) -> Result<(), DashboardError> {
        let tab = id.parse::<TabId>()?;
        self.set_active_tab(tab);
        Ok(())
    }

    /// Move to the tab on the right, wrapping around.
    pub fn next_tab(&mut self) {
        self.set_active_tab(self.state.active_tab.next());
    }

    /// Move to the tab on the left, wrapping around.
    pub fn previous_tab(&mut self) {
        self.set_active_tab(self.state.active_tab.previous());
    }

    /// Record the session user. The first successful result sticks.
    pub fn set_user(&mut self, result: Result<User, ProviderError>) {
        match result {
            Ok(user) if self.state.user.is_none() => {
                self.state.user = Some(user);
                self.notify();
            }
            Ok(_) => debug!("session user already known, ignoring"),
            Err(err) => warn!(error = %err, "failed to fetch user"),
        }
    }

    fn notify(&self) {
        self.subject.notify(&self.state);
    }
}

impl Default for DashboardController {
    fn default() -> Self {
        Self::new(TabId::default())
    }
}
