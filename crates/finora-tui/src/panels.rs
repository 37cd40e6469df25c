//! Main content area: one panel per [`Screen`].

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap};
use ratatui::Frame;

use finora_core::presentation::{
    AccountListing, ContractsPlaceholder, OnboardingCard, OverviewContent, Screen, StatCard,
    StatKind, LOADING_TEXT,
};

use crate::styles::ColorTheme;

/// Render `screen` into `area`.
pub fn render_screen(frame: &mut Frame, area: Rect, screen: &Screen) {
    let theme = ColorTheme::default();
    match screen {
        Screen::Loading => render_message(
            frame,
            area,
            vec![Line::styled(LOADING_TEXT, theme.muted_style())],
        ),
        Screen::Failed { message } => render_message(
            frame,
            area,
            vec![
                Line::styled(message.as_str(), theme.error_style().add_modifier(Modifier::BOLD)),
                Line::raw(""),
                Line::styled("r: erneut versuchen", theme.muted_style()),
            ],
        ),
        Screen::Overview(OverviewContent::Onboarding(card)) => render_onboarding(frame, area, card),
        Screen::Overview(OverviewContent::Summary { stats, listing }) => {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(4), Constraint::Min(3)])
                .split(area);
            render_stats(frame, rows[0], stats);
            render_listing(frame, rows[1], listing);
        }
        Screen::Accounts(listing) => render_listing(frame, area, listing),
        Screen::Contracts(placeholder) => render_contracts(frame, area, placeholder),
    }
}

fn render_message(frame: &mut Frame, area: Rect, lines: Vec<Line<'_>>) {
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn render_onboarding(frame: &mut Frame, area: Rect, card: &OnboardingCard) {
    let theme = ColorTheme::default();
    let lines = vec![
        Line::raw(""),
        Line::styled(card.title, theme.header_style()),
        Line::raw(""),
        Line::styled(card.text, theme.text_style()),
        Line::raw(""),
        Line::from(Span::styled(format!("  {}  ", card.button), theme.button_style())),
        Line::styled("c drücken", theme.muted_style()),
    ];
    render_message(frame, area, lines);
}

fn render_stats(frame: &mut Frame, area: Rect, stats: &[StatCard]) {
    let theme = ColorTheme::default();
    let constraints: Vec<Constraint> = stats
        .iter()
        .map(|_| Constraint::Ratio(1, u32::try_from(stats.len()).unwrap_or(1)))
        .collect();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (card, column) in stats.iter().zip(columns.iter()) {
        let value_style = match card.kind {
            StatKind::Balance => theme.header_style(),
            StatKind::Income => theme.success_style().add_modifier(Modifier::BOLD),
            StatKind::Expenses => theme.error_style().add_modifier(Modifier::BOLD),
        };
        let paragraph = Paragraph::new(Line::styled(card.value.as_str(), value_style)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style())
                .title(card.title),
        );
        frame.render_widget(paragraph, *column);
    }
}

fn listing_rows<'a>(listing: &'a AccountListing, theme: &ColorTheme) -> Vec<Row<'a>> {
    let mut rows = Vec::new();
    for group in &listing.groups {
        rows.push(Row::new(vec![
            Cell::from(""),
            Cell::from(Span::styled(
                group.label.as_str(),
                theme.text_style().add_modifier(Modifier::BOLD),
            )),
            Cell::from(""),
        ]));
        for account in &group.accounts {
            let mut detail = vec![
                Line::raw(account.name.as_str()),
                Line::styled(account.detail.as_str(), theme.muted_style()),
            ];
            if let Some(available) = &account.available {
                detail.push(Line::styled(available.as_str(), theme.muted_style()));
            }
            let height = u16::try_from(detail.len()).unwrap_or(2);
            rows.push(
                Row::new(vec![
                    Cell::from(Span::styled(account.initial.as_str(), theme.header_style())),
                    Cell::from(Text::from(detail)),
                    Cell::from(
                        Line::styled(account.balance.as_str(), theme.amount_style(account.negative))
                            .alignment(Alignment::Right),
                    ),
                ])
                .height(height),
            );
        }
    }
    rows
}

fn render_listing(frame: &mut Frame, area: Rect, listing: &AccountListing) {
    let theme = ColorTheme::default();
    let title = Line::from(vec![
        Span::styled(format!(" {} ", listing.title), theme.header_style()),
        Span::styled(format!("{} ", listing.count_label), theme.muted_style()),
    ]);
    let table = Table::new(
        listing_rows(listing, &theme),
        [
            Constraint::Length(3),
            Constraint::Min(20),
            Constraint::Length(18),
        ],
    )
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style())
            .title(title),
    );
    frame.render_widget(table, area);
}

fn render_contracts(frame: &mut Frame, area: Rect, placeholder: &ContractsPlaceholder) {
    let theme = ColorTheme::default();
    let title = Line::from(vec![
        Span::styled(format!(" {} ", placeholder.title), theme.header_style()),
        Span::styled(format!("{} ", placeholder.count_label), theme.muted_style()),
    ]);
    let paragraph = Paragraph::new(Line::styled(placeholder.empty_text, theme.muted_style()))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(paragraph, area);
}
