//! Spinner shown on stderr while print mode waits for the provider.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

const TICK: Duration = Duration::from_millis(100);

/// Indeterminate progress indicator.
///
/// Hidden when disabled; indicatif also hides it on its own when stderr is
/// not a terminal.
pub struct WaitSpinner {
    bar: ProgressBar,
}

impl WaitSpinner {
    /// Start spinning with `message`.
    #[must_use]
    pub fn start(message: &str, visible: bool) -> Self {
        let bar = if visible {
            ProgressBar::new_spinner()
        } else {
            ProgressBar::hidden()
        };
        let style = ProgressStyle::with_template("{spinner:.cyan} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        bar.set_style(style);
        bar.set_message(message.to_string());
        if visible {
            bar.enable_steady_tick(TICK);
        }
        Self { bar }
    }

    /// Replace the message.
    pub fn set_message(&self, message: &str) {
        self.bar.set_message(message.to_string());
    }

    /// Print a line above the spinner.
    pub fn println(&self, line: &str) {
        self.bar.println(line);
    }

    /// Whether the spinner draws anything.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.bar.is_hidden()
    }

    /// Elapsed time since start.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.bar.elapsed()
    }

    /// Stop and erase the spinner.
    pub fn finish(self) {
        self.bar.finish_and_clear();
    }
}
