//! Plain-text layout of a composed [`Screen`].
//!
//! Produces tone-tagged lines; the presenter decides how a tone is styled.

use std::time::Duration;

use finora_core::presentation::{
    AccountLine, AccountListing, OverviewContent, Screen, StatKind, TransactionLine, LOADING_TEXT,
};
use finora_core::tabs::{TabId, TABS};

/// Visual weight of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Heading,
    Muted,
    Accent,
    Positive,
    Negative,
    Error,
}

/// One output line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    pub tone: Tone,
}

impl Line {
    fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }

    fn blank() -> Self {
        Self::new("", Tone::Plain)
    }
}

/// `[Übersicht]  Bankkonten  Verträge`, with the active tab bracketed.
#[must_use]
pub fn tab_bar(active: TabId) -> String {
    TABS.iter()
        .map(|tab| {
            if tab.id == active {
                format!("[{}]", tab.label)
            } else {
                format!(" {} ", tab.label)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lines for the body of `screen`.
#[must_use]
pub fn screen_lines(screen: &Screen) -> Vec<Line> {
    match screen {
        Screen::Loading => vec![Line::new(LOADING_TEXT, Tone::Muted)],
        Screen::Failed { message } => vec![Line::new(message.clone(), Tone::Error)],
        Screen::Overview(OverviewContent::Onboarding(card)) => vec![
            Line::new(card.title, Tone::Heading),
            Line::new(card.text, Tone::Plain),
            Line::blank(),
            Line::new(format!("[ {} ]", card.button), Tone::Accent),
        ],
        Screen::Overview(OverviewContent::Summary { stats, listing }) => {
            let mut lines: Vec<Line> = stats
                .iter()
                .map(|card| {
                    let tone = match card.kind {
                        StatKind::Balance => Tone::Plain,
                        StatKind::Income => Tone::Positive,
                        StatKind::Expenses => Tone::Negative,
                    };
                    Line::new(format!("{:<24}{:>18}", card.title, card.value), tone)
                })
                .collect();
            lines.push(Line::blank());
            lines.extend(listing_lines(listing));
            lines
        }
        Screen::Accounts(listing) => listing_lines(listing),
        Screen::Contracts(placeholder) => vec![
            Line::new(placeholder.title, Tone::Heading),
            Line::new(placeholder.count_label, Tone::Muted),
            Line::blank(),
            Line::new(placeholder.empty_text, Tone::Muted),
        ],
    }
}

fn listing_lines(listing: &AccountListing) -> Vec<Line> {
    let mut lines = vec![
        Line::new(listing.title, Tone::Heading),
        Line::new(listing.count_label.clone(), Tone::Muted),
    ];
    for group in &listing.groups {
        lines.push(Line::blank());
        lines.push(Line::new(group.label.clone(), Tone::Accent));
        for account in &group.accounts {
            lines.extend(account_lines(account));
        }
    }
    lines
}

fn account_lines(account: &AccountLine) -> Vec<Line> {
    let tone = if account.negative {
        Tone::Negative
    } else {
        Tone::Plain
    };
    let mut lines = vec![
        Line::new(
            format!("  {}  {:<24}{:>16}", account.initial, account.name, account.balance),
            tone,
        ),
        Line::new(format!("     {}", account.detail), Tone::Muted),
    ];
    if let Some(available) = &account.available {
        lines.push(Line::new(format!("     {available}"), Tone::Muted));
    }
    lines
}

/// Lines for a transaction list.
#[must_use]
pub fn transaction_lines(transactions: &[TransactionLine]) -> Vec<Line> {
    let mut lines = vec![Line::new("Umsätze", Tone::Heading)];
    if transactions.is_empty() {
        lines.push(Line::new("Keine Umsätze vorhanden", Tone::Muted));
        return lines;
    }
    for tx in transactions {
        let tone = if tx.negative {
            Tone::Negative
        } else {
            Tone::Positive
        };
        lines.push(Line::new(
            format!(
                "  {}  {:<26}{:<14}{:>14}",
                tx.date, tx.name, tx.category, tx.amount
            ),
            tone,
        ));
    }
    lines
}

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 1.0 {
        format!("{:.0}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.1}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        format!("{mins}m{:.0}s", secs - (mins * 60) as f64)
    }
}
