//! Presentation composition: turns a [`ViewState`] into a renderer-neutral
//! [`Screen`].
//!
//! Everything here is pure. The CLI presenter and the TUI only lay out the
//! strings produced by [`compose`]; labels, grouping and formatting are
//! decided once, here.

use serde::Serialize;

use crate::currency::{format_currency, format_home};
use crate::errors::DashboardError;
use crate::grouping::group_by_type;
use crate::model::{Account, DashboardAggregate, Transaction};
use crate::tabs::TabId;
use crate::view_state::{ViewState, ViewStatus};

pub const ONBOARDING_TITLE: &str = "Willkommen bei Finora!";
pub const ONBOARDING_TEXT: &str =
    "Um Ihre Finanzen zu verwalten, verbinden Sie bitte zuerst Ihr Bankkonto.";
pub const CONNECT_BUTTON: &str = "Bankkonto verbinden";
pub const ACCOUNTS_TITLE: &str = "Kontenübersicht";
pub const CONTRACTS_TITLE: &str = "Verträge";
pub const CONTRACTS_COUNT: &str = "0 Verträge";
pub const CONTRACTS_EMPTY: &str = "Keine Verträge vorhanden";
pub const LOADING_TEXT: &str = "Lädt…";

/// What to draw for the current state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Screen {
    Loading,
    Failed { message: String },
    Overview(OverviewContent),
    Accounts(AccountListing),
    Contracts(ContractsPlaceholder),
}

/// Overview tab body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum OverviewContent {
    Onboarding(OnboardingCard),
    Summary {
        stats: Vec<StatCard>,
        listing: AccountListing,
    },
}

/// Call to action shown while no account is linked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OnboardingCard {
    pub title: &'static str,
    pub text: &'static str,
    pub button: &'static str,
}

impl Default for OnboardingCard {
    fn default() -> Self {
        Self {
            title: ONBOARDING_TITLE,
            text: ONBOARDING_TEXT,
            button: CONNECT_BUTTON,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StatKind {
    Balance,
    Income,
    Expenses,
}

/// One summary figure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatCard {
    pub title: &'static str,
    pub value: String,
    pub kind: StatKind,
}

/// Grouped account list with its header.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountListing {
    pub title: &'static str,
    pub count_label: String,
    pub groups: Vec<GroupView>,
}

/// Accounts of one type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupView {
    pub account_type: String,
    pub label: String,
    pub accounts: Vec<AccountLine>,
}

/// One account row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountLine {
    pub id: String,
    pub name: String,
    /// Avatar letter.
    pub initial: String,
    /// `subtype • ****mask`
    pub detail: String,
    pub balance: String,
    pub negative: bool,
    /// `Verfügbar: …`, only when it differs from the balance.
    pub available: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContractsPlaceholder {
    pub title: &'static str,
    pub count_label: &'static str,
    pub empty_text: &'static str,
}

impl Default for ContractsPlaceholder {
    fn default() -> Self {
        Self {
            title: CONTRACTS_TITLE,
            count_label: CONTRACTS_COUNT,
            empty_text: CONTRACTS_EMPTY,
        }
    }
}

/// One transaction row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionLine {
    pub date: String,
    pub name: String,
    pub category: String,
    pub amount: String,
    pub negative: bool,
}

/// Compose the screen for `state`.
///
/// # Errors
/// Returns [`DashboardError::Format`] if an amount cannot be formatted.
pub fn compose(state: &ViewState) -> Result<Screen, DashboardError> {
    match state.status() {
        ViewStatus::Loading => return Ok(Screen::Loading),
        ViewStatus::Failed => {
            return Ok(Screen::Failed {
                message: state.error_message.clone().unwrap_or_default(),
            })
        }
        ViewStatus::Loaded | ViewStatus::NeedsOnboarding => {}
    }

    let accounts: &[Account] = state
        .aggregate
        .as_ref()
        .map(|a| a.accounts.as_slice())
        .unwrap_or_default();

    let screen = match state.active_tab {
        TabId::Overview => match &state.aggregate {
            Some(aggregate) if !state.needs_onboarding => Screen::Overview(OverviewContent::Summary {
                stats: stat_cards(aggregate)?,
                listing: account_listing(accounts)?,
            }),
            _ => Screen::Overview(OverviewContent::Onboarding(OnboardingCard::default())),
        },
        TabId::Accounts => Screen::Accounts(account_listing(accounts)?),
        TabId::Contracts => Screen::Contracts(ContractsPlaceholder::default()),
    };
    Ok(screen)
}

fn stat_cards(aggregate: &DashboardAggregate) -> Result<Vec<StatCard>, DashboardError> {
    Ok(vec![
        StatCard {
            title: "Gesamtvermögen",
            value: format_home(aggregate.total_balance)?,
            kind: StatKind::Balance,
        },
        StatCard {
            title: "Monatliche Einnahmen",
            value: format_home(aggregate.monthly_income)?,
            kind: StatKind::Income,
        },
        StatCard {
            title: "Monatliche Ausgaben",
            value: format_home(aggregate.monthly_expenses)?,
            kind: StatKind::Expenses,
        },
    ])
}

/// Grouped listing of `accounts`, in first-occurrence type order.
///
/// # Errors
/// Returns [`DashboardError::Format`] if a balance cannot be formatted.
pub fn account_listing(accounts: &[Account]) -> Result<AccountListing, DashboardError> {
    let groups = group_by_type(accounts)
        .iter()
        .map(|group| {
            let lines = group
                .accounts
                .iter()
                .map(account_line)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(GroupView {
                account_type: group.account_type.clone(),
                label: group_label(&group.account_type),
                accounts: lines,
            })
        })
        .collect::<Result<Vec<_>, DashboardError>>()?;

    Ok(AccountListing {
        title: ACCOUNTS_TITLE,
        count_label: format!("{} Konten", accounts.len()),
        groups,
    })
}

fn account_line(account: &Account) -> Result<AccountLine, DashboardError> {
    let currency = Some(account.balances.iso_currency_code.as_str());
    let available = if account.balances.shows_available() {
        Some(format!(
            "Verfügbar: {}",
            format_currency(account.balances.available, currency)?
        ))
    } else {
        None
    };
    Ok(AccountLine {
        id: account.id.clone(),
        name: account.name.clone(),
        initial: account
            .name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default(),
        detail: format!("{} • ****{}", subtype_label(&account.subtype), account.mask),
        balance: format_currency(account.balances.current, currency)?,
        negative: account.balances.current < 0.0,
        available,
    })
}

/// Heading for a group of accounts.
#[must_use]
pub fn group_label(account_type: &str) -> String {
    match account_type {
        "depository" => "Konten".to_string(),
        "credit" => "Kredite".to_string(),
        other => capitalize(other),
    }
}

/// German name of an account subtype; unknown subtypes pass through.
#[must_use]
pub fn subtype_label(subtype: &str) -> &str {
    match subtype {
        "checking" => "Girokonto",
        "savings" => "Sparkonto",
        "credit card" => "Kreditkarte",
        other => other,
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Rows for a transaction list, in the given order.
///
/// Amounts are formatted in the home currency.
///
/// # Errors
/// Returns [`DashboardError::Format`] if an amount cannot be formatted.
pub fn compose_transactions(
    transactions: &[Transaction],
) -> Result<Vec<TransactionLine>, DashboardError> {
    transactions
        .iter()
        .map(|tx| {
            Ok(TransactionLine {
                date: tx.date.clone(),
                name: tx.name.clone(),
                category: tx.category.clone(),
                amount: format_home(tx.amount)?,
                negative: tx.amount < 0.0,
            })
        })
        .collect()
}
