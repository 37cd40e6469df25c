//! # finora-tui
//!
//! Interactive finance dashboard using ratatui with Elm architecture.

pub mod bridge;
pub mod footer;
pub mod header;
pub mod keymap;
pub mod logs;
pub mod messages;
pub mod model;
pub mod panels;
pub mod styles;
pub mod tab_bar;

pub use bridge::{TuiBridgeObserver, TuiFetchSink, TuiLogWriter};
pub use logs::LogPanel;
pub use messages::TuiMessage;
pub use model::TuiApp;
