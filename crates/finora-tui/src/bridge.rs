//! Bridges from background work and tracing into TUI messages.

use std::io;

use crossbeam_channel::Sender;
use parking_lot::Mutex;
use tracing_subscriber::fmt::MakeWriter;

use finora_core::observer::ViewStateObserver;
use finora_core::view_state::{ViewState, ViewStatus};
use finora_core::worker::{FetchEvent, FetchSink};

use crate::messages::TuiMessage;

/// Delivers worker results into the TUI message loop.
pub struct TuiFetchSink {
    tx: Sender<TuiMessage>,
}

impl TuiFetchSink {
    #[must_use]
    pub fn new(tx: Sender<TuiMessage>) -> Self {
        Self { tx }
    }
}

impl FetchSink for TuiFetchSink {
    fn deliver(&self, event: FetchEvent) {
        let _ = self.tx.send(TuiMessage::Fetch(event));
    }
}

/// View-state observer that reports status changes in the log panel.
pub struct TuiBridgeObserver {
    tx: Sender<TuiMessage>,
    last: Mutex<Option<ViewStatus>>,
}

impl TuiBridgeObserver {
    #[must_use]
    pub fn new(tx: Sender<TuiMessage>) -> Self {
        Self {
            tx,
            last: Mutex::new(None),
        }
    }
}

impl ViewStateObserver for TuiBridgeObserver {
    fn on_state_change(&self, state: &ViewState) {
        let status = state.status();
        {
            let mut last = self.last.lock();
            if *last == Some(status) {
                return;
            }
            *last = Some(status);
        }
        let line = match status {
            ViewStatus::Loading => " INFO Dashboard wird geladen".to_string(),
            ViewStatus::Failed => format!(
                "ERROR {}",
                state.error_message.as_deref().unwrap_or_default()
            ),
            ViewStatus::Loaded => format!(" INFO {} Konten geladen", state.account_count()),
            ViewStatus::NeedsOnboarding => " INFO Kein Bankkonto verbunden".to_string(),
        };
        let _ = self.tx.try_send(TuiMessage::Log(line));
    }
}

/// `tracing` writer that turns each formatted event into a log-panel line.
///
/// Keeps log output off the alternate screen while the TUI runs.
#[derive(Clone)]
pub struct TuiLogWriter {
    tx: Sender<TuiMessage>,
}

impl TuiLogWriter {
    #[must_use]
    pub fn new(tx: Sender<TuiMessage>) -> Self {
        Self { tx }
    }
}

impl io::Write for TuiLogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text = String::from_utf8_lossy(buf);
        for line in text.lines().filter(|l| !l.trim().is_empty()) {
            let _ = self.tx.try_send(TuiMessage::Log(line.to_string()));
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for TuiLogWriter {
    type Writer = TuiLogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
