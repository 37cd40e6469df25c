//! Concrete observer implementations.

use crossbeam_channel::Sender;
use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::observer::ViewStateObserver;
use crate::view_state::{ViewState, ViewStatus};

/// Observer that forwards state snapshots through a channel (non-blocking).
pub struct ChannelObserver {
    sender: Sender<ViewState>,
}

impl ChannelObserver {
    /// Create a new channel observer.
    #[must_use]
    pub fn new(sender: Sender<ViewState>) -> Self {
        Self { sender }
    }
}

impl ViewStateObserver for ChannelObserver {
    fn on_state_change(&self, state: &ViewState) {
        // A full or disconnected receiver just misses this snapshot.
        let _ = self.sender.try_send(state.clone());
    }
}

/// Observer that logs status transitions and tab switches.
pub struct LoggingObserver {
    last: Mutex<Option<(ViewStatus, crate::tabs::TabId)>>,
}

impl LoggingObserver {
    #[must_use]
    pub fn new() -> Self {
        Self {
            last: Mutex::new(None),
        }
    }
}

impl Default for LoggingObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewStateObserver for LoggingObserver {
    fn on_state_change(&self, state: &ViewState) {
        let status = state.status();
        let mut last = self.last.lock();
        let (status_changed, tab_changed) = match *last {
            Some((prev_status, prev_tab)) => (prev_status != status, prev_tab != state.active_tab),
            None => (true, true),
        };
        *last = Some((status, state.active_tab));
        drop(last);

        if status_changed {
            match status {
                ViewStatus::Loading => debug!("dashboard loading"),
                ViewStatus::Failed => warn!(
                    error = state.error_message.as_deref().unwrap_or_default(),
                    "dashboard failed to load"
                ),
                ViewStatus::Loaded => info!(accounts = state.account_count(), "dashboard loaded"),
                ViewStatus::NeedsOnboarding => info!("dashboard loaded without accounts, onboarding required"),
            }
        }
        if tab_changed {
            debug!(tab = %state.active_tab, "active tab");
        }
    }
}

/// Observer that ignores every change.
pub struct NoOpObserver;

impl NoOpObserver {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewStateObserver for NoOpObserver {
    fn on_state_change(&self, _state: &ViewState) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tabs::TabId;

    #[test]
    fn noop_observer_does_nothing() {
        NoOpObserver::new().on_state_change(&ViewState::default());
    }

    #[test]
    fn channel_observer_sends_snapshot() {
        let (tx, rx) = crossbeam_channel::bounded(4);
        let observer = ChannelObserver::new(tx);
        observer.on_state_change(&ViewState::new(TabId::Accounts));
        let received = rx.try_recv().unwrap();
        assert_eq!(received.active_tab, TabId::Accounts);
    }

    #[test]
    fn channel_observer_full_channel_does_not_block() {
        let (tx, rx) = crossbeam_channel::bounded(1);
        let observer = ChannelObserver::new(tx);
        observer.on_state_change(&ViewState::default());
        observer.on_state_change(&ViewState::default());
        assert_eq!(rx.len(), 1);
    }

    #[test]
    fn channel_observer_disconnected_does_not_panic() {
        let (tx, rx) = crossbeam_channel::bounded(1);
        drop(rx);
        ChannelObserver::new(tx).on_state_change(&ViewState::default());
    }

    #[test]
    fn logging_observer_tracks_last_status() {
        let observer = LoggingObserver::default();
        let mut state = ViewState::default();
        observer.on_state_change(&state);
        state.loading = false;
        state.error_message = Some("x".into());
        observer.on_state_change(&state);
        assert_eq!(
            *observer.last.lock(),
            Some((ViewStatus::Failed, TabId::Overview))
        );
    }
}
