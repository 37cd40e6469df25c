//! Print-mode dashboard presenter.

use std::io::{self, Write};

use console::style;
use thiserror::Error;

use finora_core::constants::APP_NAME;
use finora_core::errors::DashboardError;
use finora_core::model::Transaction;
use finora_core::presentation::{compose, compose_transactions};
use finora_core::view_state::ViewState;

use crate::output::{screen_lines, tab_bar, transaction_lines, Line, Tone};
use crate::ui::stdout_wants_color;

/// Failure while writing the dashboard.
#[derive(Debug, Error)]
pub enum PresentError {
    #[error(transparent)]
    Dashboard(#[from] DashboardError),

    #[error("write failed: {0}")]
    Io(#[from] io::Error),

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Writes the composed dashboard as text or JSON.
pub struct DashboardPresenter {
    color: bool,
    quiet: bool,
}

impl DashboardPresenter {
    /// Presenter for stdout; color follows `NO_COLOR` and the terminal.
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        Self {
            color: stdout_wants_color(),
            quiet,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Write the active tab of `state`, then `transactions` when given.
    ///
    /// Quiet mode drops the header and tab bar.
    pub fn present(
        &self,
        out: &mut dyn Write,
        state: &ViewState,
        transactions: Option<&[Transaction]>,
    ) -> Result<(), PresentError> {
        let screen = compose(state)?;

        if !self.quiet {
            let header = match &state.user {
                Some(user) => format!("{APP_NAME} · {}", user.display_name()),
                None => APP_NAME.to_string(),
            };
            self.write_line(out, &Line { text: header, tone: Tone::Heading })?;
            self.write_line(
                out,
                &Line {
                    text: tab_bar(state.active_tab),
                    tone: Tone::Muted,
                },
            )?;
            writeln!(out)?;
        }

        for line in screen_lines(&screen) {
            self.write_line(out, &line)?;
        }

        if let Some(transactions) = transactions {
            let rows = compose_transactions(transactions)?;
            writeln!(out)?;
            for line in transaction_lines(&rows) {
                self.write_line(out, &line)?;
            }
        }
        Ok(())
    }

    /// Write `state`, its composed screen and optional transactions as one
    /// JSON document.
    pub fn present_json(
        &self,
        out: &mut dyn Write,
        state: &ViewState,
        transactions: Option<&[Transaction]>,
    ) -> Result<(), PresentError> {
        let screen = compose(state)?;
        let document = serde_json::json!({
            "state": state,
            "screen": screen,
            "transactions": transactions,
        });
        serde_json::to_writer_pretty(&mut *out, &document)?;
        writeln!(out)?;
        Ok(())
    }

    fn write_line(&self, out: &mut dyn Write, line: &Line) -> io::Result<()> {
        if !self.color || line.text.is_empty() {
            return writeln!(out, "{}", line.text);
        }
        let styled = style(&line.text).force_styling(true);
        let styled = match line.tone {
            Tone::Plain => styled,
            Tone::Heading => styled.bold().cyan(),
            Tone::Muted => styled.dim(),
            Tone::Accent => styled.bold(),
            Tone::Positive => styled.green(),
            Tone::Negative => styled.red(),
            Tone::Error => styled.red().bold(),
        };
        writeln!(out, "{styled}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use finora_core::fixtures;
    use finora_core::model::DashboardAggregate;
    use finora_core::tabs::TabId;

    fn loaded(tab: TabId) -> ViewState {
        let mut state = ViewState::new(tab);
        state.loading = false;
        state.aggregate = Some(DashboardAggregate::from_accounts(
            fixtures::accounts(),
            3250.0,
            2175.45,
        ));
        state.user = Some(fixtures::user());
        state
    }

    fn render(presenter: &DashboardPresenter, state: &ViewState) -> String {
        let mut buf: Vec<u8> = Vec::new();
        presenter.present(&mut buf, state, None).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn plain_overview() {
        let presenter = DashboardPresenter::new(false).with_color(false);
        let text = render(&presenter, &loaded(TabId::Overview));
        assert!(text.starts_with("Finora · Max Mustermann\n"));
        assert!(text.contains("[Übersicht]"));
        assert!(text.contains("Gesamtvermögen"));
        assert!(text.contains("17.840,82\u{a0}€"));
        assert!(!text.contains('\u{1b}'));
    }

    #[test]
    fn quiet_omits_header() {
        let presenter = DashboardPresenter::new(true).with_color(false);
        let text = render(&presenter, &loaded(TabId::Contracts));
        assert_eq!(text, "Verträge\n0 Verträge\n\nKeine Verträge vorhanden\n");
    }

    #[test]
    fn colored_output_has_escape_codes() {
        let presenter = DashboardPresenter::new(true).with_color(true);
        let text = render(&presenter, &loaded(TabId::Accounts));
        assert!(text.contains('\u{1b}'));
    }

    #[test]
    fn transactions_are_appended() {
        let presenter = DashboardPresenter::new(true).with_color(false);
        let mut buf: Vec<u8> = Vec::new();
        presenter
            .present(&mut buf, &loaded(TabId::Overview), Some(fixtures::transactions().as_slice()))
            .unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Umsätze"));
        assert!(text.contains("Supermarkt"));
    }

    #[test]
    fn json_document() {
        let presenter = DashboardPresenter::new(false);
        let mut buf: Vec<u8> = Vec::new();
        presenter
            .present_json(&mut buf, &loaded(TabId::Accounts), None)
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["state"]["activeTab"], "accounts");
        assert_eq!(value["screen"]["kind"], "accounts");
        assert_eq!(value["screen"]["countLabel"], "3 Konten");
        assert!(value["transactions"].is_null());
    }

    #[test]
    fn format_error_propagates() {
        let mut state = loaded(TabId::Overview);
        if let Some(aggregate) = state.aggregate.as_mut() {
            aggregate.total_balance = f64::INFINITY;
        }
        let presenter = DashboardPresenter::new(true).with_color(false);
        let err = presenter.present(&mut Vec::<u8>::new(), &state, None).unwrap_err();
        assert!(matches!(err, PresentError::Dashboard(DashboardError::Format(_))));
    }
}
