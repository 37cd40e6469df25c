//! In-app log panel fed by the tracing bridge and the app itself.

use std::collections::VecDeque;

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem};
use ratatui::Frame;

/// Maximum number of lines kept in the panel.
pub const LOG_CAPACITY: usize = 500;

/// Bounded log buffer with its scroll position.
///
/// While `follow` is set the view sticks to the newest line. Any upward
/// movement pins the view at `top` until the user scrolls back down to
/// the last line.
#[derive(Debug, Clone)]
pub struct LogPanel {
    lines: VecDeque<String>,
    top: usize,
    follow: bool,
}

impl LogPanel {
    #[must_use]
    pub fn new() -> Self {
        Self {
            lines: VecDeque::with_capacity(LOG_CAPACITY),
            top: 0,
            follow: true,
        }
    }

    /// Append a line, evicting the oldest one at capacity.
    pub fn push(&mut self, line: impl Into<String>) {
        if self.lines.len() == LOG_CAPACITY {
            self.lines.pop_front();
            // keep a pinned view on the same text
            self.top = self.top.saturating_sub(1);
        }
        self.lines.push_back(line.into());
        if self.follow {
            self.top = self.last_index();
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// First line of a pinned view.
    pub fn top(&self) -> usize {
        self.top
    }

    pub fn is_following(&self) -> bool {
        self.follow
    }

    fn last_index(&self) -> usize {
        self.lines.len().saturating_sub(1)
    }

    pub fn scroll_up(&mut self, by: usize) {
        self.follow = false;
        self.top = self.top.saturating_sub(by);
    }

    pub fn scroll_down(&mut self, by: usize) {
        self.top = (self.top + by).min(self.last_index());
        self.follow = self.top == self.last_index();
    }

    pub fn jump_to_start(&mut self) {
        self.follow = false;
        self.top = 0;
    }

    pub fn jump_to_end(&mut self) {
        self.follow = true;
        self.top = self.last_index();
    }

    /// Index of the first line shown in a viewport of `height` lines.
    fn first_visible(&self, height: usize) -> usize {
        if self.follow {
            self.lines.len().saturating_sub(height)
        } else {
            self.top
        }
    }
}

impl Default for LogPanel {
    fn default() -> Self {
        Self::new()
    }
}

fn level_color(line: &str) -> Option<Color> {
    match line.split_whitespace().next()? {
        "ERROR" => Some(Color::Red),
        "WARN" => Some(Color::Yellow),
        "DEBUG" | "TRACE" => Some(Color::DarkGray),
        _ => None,
    }
}

/// Draw `panel` into `area`.
pub fn render_logs(frame: &mut Frame, area: Rect, panel: &LogPanel) {
    let height = usize::from(area.height.saturating_sub(2));
    let first = panel.first_visible(height);

    let items: Vec<ListItem> = panel
        .lines()
        .skip(first)
        .take(height)
        .map(|line| {
            let style = level_color(line).map_or_else(Style::default, |c| Style::default().fg(c));
            ListItem::new(Line::raw(line)).style(style)
        })
        .collect();

    let title = if panel.is_following() {
        format!(" Protokoll ({}) ", panel.len())
    } else {
        format!(" Protokoll ({}/{}) ", first + 1, panel.len())
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(list, area);
}
