//! Observable dashboard state.

use serde::Serialize;

use crate::model::{DashboardAggregate, User};
use crate::tabs::TabId;

/// Coarse status derived from a [`ViewState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewStatus {
    Loading,
    Failed,
    Loaded,
    /// Loaded, but no account is linked yet.
    NeedsOnboarding,
}

/// Everything the presentation layer needs to draw the dashboard.
///
/// `loading` and a populated `aggregate` never hold at the same time, and
/// `needs_onboarding` is only set after a successful fetch returned no
/// accounts.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub active_tab: TabId,
    pub loading: bool,
    pub error_message: Option<String>,
    pub aggregate: Option<DashboardAggregate>,
    pub needs_onboarding: bool,
    pub user: Option<User>,
}

impl ViewState {
    /// Initial state: loading, nothing fetched.
    #[must_use]
    pub fn new(active_tab: TabId) -> Self {
        Self {
            active_tab,
            loading: true,
            error_message: None,
            aggregate: None,
            needs_onboarding: false,
            user: None,
        }
    }

    /// Derived status.
    #[must_use]
    pub fn status(&self) -> ViewStatus {
        if self.loading {
            ViewStatus::Loading
        } else if self.error_message.is_some() {
            ViewStatus::Failed
        } else if self.needs_onboarding {
            ViewStatus::NeedsOnboarding
        } else {
            ViewStatus::Loaded
        }
    }

    /// Number of accounts in the fetched aggregate, if any.
    #[must_use]
    pub fn account_count(&self) -> usize {
        self.aggregate.as_ref().map_or(0, |a| a.accounts.len())
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(TabId::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_loading_on_requested_tab() {
        let state = ViewState::new(TabId::Contracts);
        assert!(state.loading);
        assert_eq!(state.active_tab, TabId::Contracts);
        assert_eq!(state.status(), ViewStatus::Loading);
        assert_eq!(state.account_count(), 0);
    }

    #[test]
    fn status_derivation() {
        let mut state = ViewState::default();
        state.loading = false;
        state.error_message = Some("boom".into());
        assert_eq!(state.status(), ViewStatus::Failed);

        state.error_message = None;
        state.aggregate = Some(DashboardAggregate::from_accounts(Vec::new(), 0.0, 0.0));
        state.needs_onboarding = true;
        assert_eq!(state.status(), ViewStatus::NeedsOnboarding);

        state.needs_onboarding = false;
        assert_eq!(state.status(), ViewStatus::Loaded);
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(ViewState::default()).unwrap();
        assert_eq!(json["activeTab"], "overview");
        assert_eq!(json["loading"], true);
        assert!(json["errorMessage"].is_null());
        assert_eq!(json["needsOnboarding"], false);
    }
}
