//! TUI message types (Elm Messages).

use finora_core::worker::FetchEvent;

/// Messages that drive the TUI update cycle.
#[derive(Debug, Clone)]
pub enum TuiMessage {
    /// Result of a background provider call.
    Fetch(FetchEvent),
    /// Log line for the log panel.
    Log(String),
    /// Quit the application.
    Quit,
    /// Terminal resize event.
    Resize { width: u16, height: u16 },
    /// Key press event forwarded from the event loop.
    KeyPress(crate::keymap::KeyAction),
    /// Error message.
    Error(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use finora_core::errors::ProviderError;

    #[test]
    fn message_variants() {
        let msg = TuiMessage::Fetch(FetchEvent::AccountConnected(Ok(())));
        assert!(matches!(msg, TuiMessage::Fetch(_)));

        let msg = TuiMessage::Fetch(FetchEvent::Aggregate {
            seq: 1,
            result: Err(ProviderError::Cancelled),
        });
        assert!(matches!(
            msg,
            TuiMessage::Fetch(FetchEvent::Aggregate { seq: 1, .. })
        ));

        let msg = TuiMessage::Resize {
            width: 80,
            height: 24,
        };
        assert!(matches!(msg, TuiMessage::Resize { .. }));

        let msg = TuiMessage::Error("kaputt".to_string());
        assert!(matches!(msg, TuiMessage::Error(_)));
    }
}
