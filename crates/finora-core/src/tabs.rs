//! Dashboard tabs and their static metadata.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DashboardError;

/// The dashboard's tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabId {
    #[default]
    Overview,
    Accounts,
    Contracts,
}

impl TabId {
    /// All tabs in display order.
    pub const ALL: [TabId; 3] = [TabId::Overview, TabId::Accounts, TabId::Contracts];

    /// Stable identifier used on the command line and in JSON.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TabId::Overview => "overview",
            TabId::Accounts => "accounts",
            TabId::Contracts => "contracts",
        }
    }

    /// Position in [`TabId::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            TabId::Overview => 0,
            TabId::Accounts => 1,
            TabId::Contracts => 2,
        }
    }

    /// The tab to the right, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// The tab to the left, wrapping around.
    #[must_use]
    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Static metadata for this tab.
    #[must_use]
    pub fn meta(self) -> &'static TabMeta {
        &TABS[self.index()]
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TabId {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "overview" => Ok(TabId::Overview),
            "accounts" => Ok(TabId::Accounts),
            "contracts" => Ok(TabId::Contracts),
            _ => Err(DashboardError::UnknownTab(s.to_string())),
        }
    }
}

/// Label and hotkey of a tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabMeta {
    pub id: TabId,
    pub label: &'static str,
    pub hotkey: char,
}

/// Tab bar contents, in display order.
pub const TABS: [TabMeta; 3] = [
    TabMeta {
        id: TabId::Overview,
        label: "Übersicht",
        hotkey: '1',
    },
    TabMeta {
        id: TabId::Accounts,
        label: "Bankkonten",
        hotkey: '2',
    },
    TabMeta {
        id: TabId::Contracts,
        label: "Verträge",
        hotkey: '3',
    },
];
