//! Keyboard shortcut handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use finora_core::tabs::{TabId, TABS};

/// TUI keyboard actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Leave the dashboard (logout).
    Quit,
    Cancel,
    SelectTab(TabId),
    NextTab,
    PreviousTab,
    Refetch,
    ConnectAccount,
    ToggleLogs,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    Home,
    End,
    None,
}

/// Map a key event to an action.
#[must_use]
pub fn map_key(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Cancel,
        KeyCode::Char('c') => KeyAction::ConnectAccount,
        KeyCode::Char('r') => KeyAction::Refetch,
        KeyCode::Char('l') => KeyAction::ToggleLogs,
        KeyCode::Char('o') => KeyAction::SelectTab(TabId::Overview),
        KeyCode::Char('a') => KeyAction::SelectTab(TabId::Accounts),
        KeyCode::Char('v') => KeyAction::SelectTab(TabId::Contracts),
        KeyCode::Char(c) => TABS
            .iter()
            .find(|tab| tab.hotkey == c)
            .map_or(KeyAction::None, |tab| KeyAction::SelectTab(tab.id)),
        KeyCode::Tab | KeyCode::Right => KeyAction::NextTab,
        KeyCode::BackTab | KeyCode::Left => KeyAction::PreviousTab,
        KeyCode::Up => KeyAction::ScrollUp,
        KeyCode::Down => KeyAction::ScrollDown,
        KeyCode::PageUp => KeyAction::PageUp,
        KeyCode::PageDown => KeyAction::PageDown,
        KeyCode::Home => KeyAction::Home,
        KeyCode::End => KeyAction::End,
        _ => KeyAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn quit_keys() {
        assert_eq!(map_key(key(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(map_key(key(KeyCode::Esc)), KeyAction::Quit);
    }

    #[test]
    fn ctrl_c_cancels_plain_c_connects() {
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(event), KeyAction::Cancel);
        assert_eq!(map_key(key(KeyCode::Char('c'))), KeyAction::ConnectAccount);
    }

    #[test]
    fn tab_hotkeys() {
        assert_eq!(
            map_key(key(KeyCode::Char('1'))),
            KeyAction::SelectTab(TabId::Overview)
        );
        assert_eq!(
            map_key(key(KeyCode::Char('2'))),
            KeyAction::SelectTab(TabId::Accounts)
        );
        assert_eq!(
            map_key(key(KeyCode::Char('3'))),
            KeyAction::SelectTab(TabId::Contracts)
        );
        assert_eq!(
            map_key(key(KeyCode::Char('v'))),
            KeyAction::SelectTab(TabId::Contracts)
        );
    }

    #[test]
    fn tab_cycling_keys() {
        assert_eq!(map_key(key(KeyCode::Tab)), KeyAction::NextTab);
        assert_eq!(map_key(key(KeyCode::Right)), KeyAction::NextTab);
        assert_eq!(map_key(key(KeyCode::BackTab)), KeyAction::PreviousTab);
        assert_eq!(map_key(key(KeyCode::Left)), KeyAction::PreviousTab);
    }

    #[test]
    fn refetch_and_logs() {
        assert_eq!(map_key(key(KeyCode::Char('r'))), KeyAction::Refetch);
        assert_eq!(map_key(key(KeyCode::Char('l'))), KeyAction::ToggleLogs);
    }

    #[test]
    fn scroll_keys() {
        assert_eq!(map_key(key(KeyCode::Up)), KeyAction::ScrollUp);
        assert_eq!(map_key(key(KeyCode::Down)), KeyAction::ScrollDown);
        assert_eq!(map_key(key(KeyCode::PageUp)), KeyAction::PageUp);
        assert_eq!(map_key(key(KeyCode::PageDown)), KeyAction::PageDown);
        assert_eq!(map_key(key(KeyCode::Home)), KeyAction::Home);
        assert_eq!(map_key(key(KeyCode::End)), KeyAction::End);
    }

    #[test]
    fn unknown_key() {
        assert_eq!(map_key(key(KeyCode::Char('z'))), KeyAction::None);
        assert_eq!(map_key(key(KeyCode::Char('9'))), KeyAction::None);
    }
}
