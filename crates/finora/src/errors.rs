//! Error handling and exit codes.

use finora_cli::presenter::PresentError;
use finora_core::constants::exit_codes;
use finora_core::errors::{DashboardError, ProviderError};

/// Exit code for a dashboard error.
pub fn handle_error(err: &DashboardError) -> i32 {
    match err {
        DashboardError::Fetch(ProviderError::Cancelled) => exit_codes::ERROR_CANCELED,
        DashboardError::Fetch(_) | DashboardError::Format(_) => exit_codes::ERROR_GENERIC,
        DashboardError::UnknownTab(_) | DashboardError::Config(_) => exit_codes::ERROR_CONFIG,
        DashboardError::Timeout(_) => exit_codes::ERROR_TIMEOUT,
    }
}

/// Exit code for any error reaching `main`.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    for cause in err.chain() {
        if let Some(err) = cause.downcast_ref::<DashboardError>() {
            return handle_error(err);
        }
        if let Some(PresentError::Dashboard(err)) = cause.downcast_ref::<PresentError>() {
            return handle_error(err);
        }
        if let Some(ProviderError::Cancelled) = cause.downcast_ref::<ProviderError>() {
            return exit_codes::ERROR_CANCELED;
        }
    }
    exit_codes::ERROR_GENERIC
}
