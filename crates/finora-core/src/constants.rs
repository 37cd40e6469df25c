//! Fixed locale, currency, and application constants.

/// Locale used for every formatted amount. Not user-configurable.
pub const LOCALE: &str = "de-DE";

/// Currency assumed when an amount carries no ISO code.
pub const HOME_CURRENCY: &str = "EUR";

/// Message shown to the user when the dashboard fetch fails.
pub const FETCH_ERROR_MESSAGE: &str = "Fehler beim Laden der Daten";

/// Product name shown in headers and the onboarding card.
pub const APP_NAME: &str = "Finora";

/// Monthly income reported by the mock provider.
pub const MOCK_MONTHLY_INCOME: f64 = 3250.00;

/// Monthly expenses reported by the mock provider.
pub const MOCK_MONTHLY_EXPENSES: f64 = 2175.45;

/// Exit codes for the `finora` binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error, including a failed dashboard fetch.
    pub const ERROR_GENERIC: i32 = 1;
    /// The dashboard did not load within the configured timeout.
    pub const ERROR_TIMEOUT: i32 = 2;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
    /// Cancelled by user (Ctrl+C).
    pub const ERROR_CANCELED: i32 = 130;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_currency_is_iso_code() {
        assert_eq!(HOME_CURRENCY.len(), 3);
        assert!(HOME_CURRENCY.chars().all(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [
            exit_codes::SUCCESS,
            exit_codes::ERROR_GENERIC,
            exit_codes::ERROR_TIMEOUT,
            exit_codes::ERROR_CONFIG,
            exit_codes::ERROR_CANCELED,
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
