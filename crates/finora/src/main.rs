//! Finora: personal finance dashboard.

use finora_lib::{app, config, errors};

fn main() {
    let config = config::AppConfig::parse();
    if let Err(err) = app::run(&config) {
        finora_cli::ui::print_error(&format!("{err:#}"));
        std::process::exit(errors::exit_code(&err));
    }
}
