//! TUI header panel.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use finora_core::constants::APP_NAME;
use finora_core::model::User;
use finora_core::view_state::ViewStatus;

use crate::styles::ColorTheme;

/// Render the header with the signed-in user and the load status.
pub fn render_header(frame: &mut Frame, area: Rect, user: Option<&User>, status: ViewStatus) {
    let theme = ColorTheme::default();
    let mut spans = vec![Span::styled(APP_NAME, theme.header_style())];
    if let Some(user) = user {
        spans.push(Span::raw(format!(" | {}", user.display_name())));
    }
    let (label, style) = match status {
        ViewStatus::Loading => ("lädt", theme.warning_style()),
        ViewStatus::Failed => ("Fehler", theme.error_style()),
        ViewStatus::Loaded => ("aktuell", theme.success_style()),
        ViewStatus::NeedsOnboarding => ("kein Konto", theme.muted_style()),
    };
    spans.push(Span::raw(" | "));
    spans.push(Span::styled(label, style));

    let block = Block::default().borders(Borders::BOTTOM);
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn first_row(user: Option<&User>, status: ViewStatus) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 2)).unwrap();
        let buf = terminal
            .draw(|frame| {
                let area = frame.area();
                render_header(frame, area, user, status);
            })
            .unwrap();
        (0..buf.area.width)
            .map(|x| buf.buffer[(x, 0)].symbol().to_string())
            .collect()
    }

    #[test]
    fn shows_user_name() {
        let user = finora_core::fixtures::user();
        let row = first_row(Some(&user), ViewStatus::Loaded);
        assert!(row.contains("Finora"));
        assert!(row.contains("Max Mustermann"));
        assert!(row.contains("aktuell"));
    }

    #[test]
    fn without_user() {
        let row = first_row(None, ViewStatus::Loading);
        assert!(row.contains("Finora"));
        assert!(row.contains("lädt"));
    }
}
