//! Styled notices on stderr for print mode.

use console::{style, Term};

/// Whether the `NO_COLOR` convention disables styling.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty())
}

/// Whether stdout should receive ANSI styling.
#[must_use]
pub fn stdout_wants_color() -> bool {
    !is_color_disabled() && Term::stdout().features().colors_supported()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Severity {
    Warning,
    Error,
}

fn badge(severity: Severity, color: bool) -> String {
    let label = match severity {
        Severity::Warning => "Warnung:",
        Severity::Error => "Fehler:",
    };
    if !color {
        return label.to_string();
    }
    match severity {
        Severity::Warning => style(label).yellow().bold().force_styling(true).to_string(),
        Severity::Error => style(label).red().bold().force_styling(true).to_string(),
    }
}

fn notice(severity: Severity, text: &str) {
    let term = Term::stderr();
    let color = !is_color_disabled() && term.features().colors_supported();
    // stderr gone means nobody is listening
    let _ = term.write_line(&format!("{} {text}", badge(severity, color)));
}

/// Print a warning to stderr.
pub fn print_warning(text: &str) {
    notice(Severity::Warning, text);
}

/// Print an error to stderr.
pub fn print_error(text: &str) {
    notice(Severity::Error, text);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_badges() {
        assert_eq!(badge(Severity::Warning, false), "Warnung:");
        assert_eq!(badge(Severity::Error, false), "Fehler:");
    }

    #[test]
    fn colored_badge_keeps_label() {
        let styled = badge(Severity::Error, true);
        assert!(styled.contains("Fehler:"));
        assert!(styled.starts_with('\u{1b}'));
    }

    #[test]
    fn notices_do_not_panic() {
        let _ = stdout_wants_color();
        print_warning("Umsätze nicht verfügbar");
        print_error("Fehler beim Laden der Daten");
    }
}
