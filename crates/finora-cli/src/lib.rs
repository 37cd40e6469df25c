//! # finora-cli
//!
//! Print-mode output of the dashboard, the wait spinner, and shell
//! completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod spinner;
pub mod ui;

pub use presenter::DashboardPresenter;
