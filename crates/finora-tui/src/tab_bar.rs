//! Tab bar.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Tabs};
use ratatui::Frame;

use finora_core::tabs::{TabId, TABS};

use crate::styles::ColorTheme;

/// Render the tab bar with `active` highlighted.
pub fn render_tab_bar(frame: &mut Frame, area: Rect, active: TabId) {
    let theme = ColorTheme::default();
    let titles: Vec<Line> = TABS
        .iter()
        .map(|tab| Line::from(format!("{} {}", tab.hotkey, tab.label)))
        .collect();
    let tabs = Tabs::new(titles)
        .select(active.index())
        .style(theme.muted_style())
        .highlight_style(theme.header_style().add_modifier(Modifier::UNDERLINED))
        .divider(" │ ")
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(theme.border_style()),
        );
    frame.render_widget(tabs, area);
}
