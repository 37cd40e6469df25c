//! TUI application model (Elm architecture).

use std::io;
use std::time::Duration;

use crossbeam_channel::Receiver;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Terminal;
use tracing::debug;

use finora_core::controller::DashboardController;
use finora_core::presentation::{compose, Screen};
use finora_core::view_state::{ViewState, ViewStatus};
use finora_core::worker::{FetchEvent, FetchWorker};

use crate::footer::render_footer;
use crate::header::render_header;
use crate::keymap::{map_key, KeyAction};
use crate::logs::{render_logs, LogPanel};
use crate::messages::TuiMessage;
use crate::panels::render_screen;
use crate::tab_bar::render_tab_bar;

const PAGE_SIZE: usize = 10;
const LOG_PANEL_HEIGHT: u16 = 8;

/// TUI application state (Elm Model).
pub struct TuiApp {
    /// Whether the app should quit.
    pub should_quit: bool,
    controller: DashboardController,
    worker: FetchWorker,
    rx: Receiver<TuiMessage>,
    /// A connect-account call is running.
    pub connecting: bool,
    pub logs: LogPanel,
    pub show_logs: bool,
    pub terminal_width: u16,
    pub terminal_height: u16,
}

impl TuiApp {
    /// Create the app. Nothing is fetched until [`TuiApp::start`].
    #[must_use]
    pub fn new(controller: DashboardController, worker: FetchWorker, rx: Receiver<TuiMessage>) -> Self {
        Self {
            should_quit: false,
            controller,
            worker,
            rx,
            connecting: false,
            logs: LogPanel::new(),
            show_logs: false,
            terminal_width: 80,
            terminal_height: 24,
        }
    }

    /// Issue the initial user and dashboard fetches.
    pub fn start(&mut self) {
        self.worker.spawn_user();
        if let Some(ticket) = self.controller.initialize() {
            self.worker.spawn_aggregate(ticket);
        }
    }

    /// Current dashboard state.
    #[must_use]
    pub fn state(&self) -> &ViewState {
        self.controller.state()
    }

    /// Update the model with incoming messages (Elm Update).
    pub fn update(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            self.handle_message(msg);
        }
    }

    /// Handle a single message.
    pub fn handle_message(&mut self, msg: TuiMessage) {
        match msg {
            TuiMessage::Fetch(event) => self.handle_fetch_event(event),
            TuiMessage::Log(line) => self.push_log(line),
            TuiMessage::Quit => {
                self.should_quit = true;
            }
            TuiMessage::Resize { width, height } => {
                self.terminal_width = width;
                self.terminal_height = height;
            }
            TuiMessage::KeyPress(action) => self.handle_key_action(action),
            TuiMessage::Error(err) => self.push_log(format!("ERROR {err}")),
        }
    }

    fn handle_fetch_event(&mut self, event: FetchEvent) {
        match event {
            FetchEvent::Aggregate { seq, result } => {
                if !self.controller.complete_fetch(seq, result) {
                    debug!(seq, "ignored stale dashboard result");
                }
            }
            FetchEvent::User(result) => {
                if let Err(err) = &result {
                    self.push_log(format!(" WARN Benutzer nicht geladen: {err}"));
                }
                self.controller.set_user(result);
            }
            FetchEvent::Transactions(result) => match result {
                Ok(transactions) => {
                    self.push_log(format!(" INFO {} Umsätze geladen", transactions.len()));
                }
                Err(err) => self.push_log(format!(" WARN Umsätze nicht geladen: {err}")),
            },
            FetchEvent::AccountConnected(result) => {
                self.connecting = false;
                match result {
                    Ok(()) => {
                        self.push_log(" INFO Bankkonto verbunden".to_string());
                        let ticket = self.controller.reload();
                        self.worker.spawn_aggregate(ticket);
                    }
                    Err(err) => {
                        self.handle_message(TuiMessage::Error(format!(
                            "Bankkonto konnte nicht verbunden werden: {err}"
                        )));
                    }
                }
            }
        }
    }

    /// Handle a keyboard action.
    pub fn handle_key_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Quit | KeyAction::Cancel => {
                self.controller.cancel_in_flight();
                self.should_quit = true;
            }
            KeyAction::SelectTab(tab) => self.controller.set_active_tab(tab),
            KeyAction::NextTab => self.controller.next_tab(),
            KeyAction::PreviousTab => self.controller.previous_tab(),
            KeyAction::Refetch => self.refetch(),
            KeyAction::ConnectAccount => self.connect_account(),
            KeyAction::ToggleLogs => {
                self.show_logs = !self.show_logs;
            }
            KeyAction::ScrollUp => self.logs.scroll_up(1),
            KeyAction::ScrollDown => self.logs.scroll_down(1),
            KeyAction::PageUp => self.logs.scroll_up(PAGE_SIZE),
            KeyAction::PageDown => self.logs.scroll_down(PAGE_SIZE),
            KeyAction::Home => self.logs.jump_to_start(),
            KeyAction::End => self.logs.jump_to_end(),
            KeyAction::None => {}
        }
    }

    fn refetch(&mut self) {
        match self.controller.refetch() {
            Some(ticket) => {
                self.worker.spawn_aggregate(ticket);
            }
            None => debug!("refetch coalesced with running fetch"),
        }
    }

    fn connect_account(&mut self) {
        if self.connecting {
            return;
        }
        if self.controller.state().status() != ViewStatus::NeedsOnboarding {
            debug!("connect ignored, dashboard is not in onboarding");
            return;
        }
        self.connecting = true;
        self.push_log(" INFO Bankkonto wird verbunden".to_string());
        self.worker.spawn_connect();
    }

    fn push_log(&mut self, line: String) {
        self.logs.push(line);
    }

    /// Split the frame into header, tab bar, content, optional log panel,
    /// and footer.
    #[must_use]
    pub fn compute_layout(area: Rect, show_logs: bool) -> (Rect, Rect, Rect, Option<Rect>, Rect) {
        let log_height = if show_logs { LOG_PANEL_HEIGHT } else { 0 };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),          // header
                Constraint::Length(2),          // tabs
                Constraint::Min(5),             // content
                Constraint::Length(log_height), // logs
                Constraint::Length(2),          // footer
            ])
            .split(area);
        let logs = show_logs.then_some(chunks[3]);
        (chunks[0], chunks[1], chunks[2], logs, chunks[4])
    }

    /// Render the full TUI view.
    pub fn render(&self, frame: &mut ratatui::Frame) {
        let (header_area, tabs_area, content_area, logs_area, footer_area) =
            Self::compute_layout(frame.area(), self.show_logs);
        let state = self.controller.state();

        render_header(frame, header_area, state.user.as_ref(), state.status());
        render_tab_bar(frame, tabs_area, state.active_tab);

        let screen = compose(state).unwrap_or_else(|err| Screen::Failed {
            message: err.to_string(),
        });
        render_screen(frame, content_area, &screen);

        if let Some(area) = logs_area {
            render_logs(frame, area, &self.logs);
        }
        render_footer(frame, footer_area);
    }

    /// Set up the terminal for TUI mode.
    pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        Terminal::new(CrosstermBackend::new(stdout))
    }

    /// Tear down the terminal, restoring normal mode.
    pub fn teardown_terminal(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Run the TUI event loop until the user quits.
    pub fn run(&mut self) -> io::Result<()> {
        let mut terminal = Self::setup_terminal()?;
        let result = self.event_loop(&mut terminal);
        Self::teardown_terminal(&mut terminal)?;
        result
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
        let tick_rate = Duration::from_millis(100);
        self.start();

        loop {
            terminal.draw(|frame| self.render(frame))?;

            if self.should_quit {
                return Ok(());
            }

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_message(TuiMessage::KeyPress(map_key(key)));
                    }
                    Event::Resize(width, height) => {
                        self.handle_message(TuiMessage::Resize { width, height });
                    }
                    _ => {}
                }
            }

            self.update();
        }
    }
}
