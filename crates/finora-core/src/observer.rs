//! Observer pattern for view-state changes.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::view_state::ViewState;

/// Receives every new [`ViewState`] after a change.
pub trait ViewStateObserver: Send + Sync {
    /// Called with the state as it is after the change.
    fn on_state_change(&self, state: &ViewState);
}

/// Subject that manages a collection of observers.
pub struct ViewStateSubject {
    observers: RwLock<Vec<Arc<dyn ViewStateObserver>>>,
}

impl ViewStateSubject {
    /// Create a new subject with no observers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            observers: RwLock::new(Vec::new()),
        }
    }

    /// Register an observer.
    pub fn register(&self, observer: Arc<dyn ViewStateObserver>) {
        self.observers.write().push(observer);
    }

    /// Unregister all observers.
    pub fn clear(&self) {
        self.observers.write().clear();
    }

    /// Notify all observers of a state change.
    pub fn notify(&self, state: &ViewState) {
        let observers = self.observers.read();
        for observer in observers.iter() {
            observer.on_state_change(state);
        }
    }

    /// Get the number of registered observers.
    #[must_use]
    pub fn count(&self) -> usize {
        self.observers.read().len()
    }
}

impl Default for ViewStateSubject {
    fn default() -> Self {
        Self::new()
    }
}
