//! Application entry point and dispatch.

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossbeam_channel::{Receiver, RecvTimeoutError, Sender};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use finora_cli::presenter::DashboardPresenter;
use finora_cli::spinner::WaitSpinner;
use finora_cli::ui::print_warning;
use finora_core::cancel::CancellationToken;
use finora_core::controller::DashboardController;
use finora_core::errors::{DashboardError, ProviderError};
use finora_core::json_provider::JsonFileProvider;
use finora_core::mock::MockProvider;
use finora_core::model::Transaction;
use finora_core::observers::LoggingObserver;
use finora_core::provider::{AccountDataProvider, AccountLinker};
use finora_core::tabs::TabId;
use finora_core::worker::{FetchEvent, FetchWorker};
use finora_tui::{TuiApp, TuiBridgeObserver, TuiFetchSink, TuiLogWriter, TuiMessage};

use crate::config::AppConfig;

/// Granularity of the print-mode wait loop.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        finora_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let tab = config.initial_tab()?;

    if config.tui {
        let (tx, rx) = crossbeam_channel::unbounded::<TuiMessage>();
        init_logging(config, Some(tx.clone()));
        return run_tui(config, tab, tx, rx);
    }

    init_logging(config, None);
    run_cli(config, tab)
}

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` wins over the verbosity flags. In TUI mode events go to the
/// log panel instead of stderr.
fn init_logging(config: &AppConfig, tui: Option<Sender<TuiMessage>>) {
    let level = if config.verbose {
        "debug"
    } else if config.quiet {
        "error"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let installed = match tui {
        Some(tx) => builder
            .with_writer(TuiLogWriter::new(tx))
            .with_ansi(false)
            .without_time()
            .with_target(false)
            .try_init(),
        None => builder.with_writer(std::io::stderr).try_init(),
    };
    if installed.is_err() {
        debug!("tracing subscriber already installed");
    }
}

fn build_provider(
    config: &AppConfig,
) -> Result<(Arc<dyn AccountDataProvider>, Arc<dyn AccountLinker>), DashboardError> {
    if let Some(path) = &config.fixtures {
        if !path.is_file() {
            return Err(DashboardError::Config(format!(
                "fixture file not found: {}",
                path.display()
            )));
        }
        let provider = Arc::new(JsonFileProvider::new(path.clone()));
        let data: Arc<dyn AccountDataProvider> = provider.clone();
        let linker: Arc<dyn AccountLinker> = provider;
        return Ok((data, linker));
    }

    let mock = if config.unlinked {
        MockProvider::unlinked()
    } else {
        MockProvider::new()
    }
    .with_latency(config.latency());
    mock.set_offline(config.offline);

    let provider = Arc::new(mock);
    let data: Arc<dyn AccountDataProvider> = provider.clone();
    let linker: Arc<dyn AccountLinker> = provider;
    Ok((data, linker))
}

fn run_tui(
    config: &AppConfig,
    tab: TabId,
    tx: Sender<TuiMessage>,
    rx: Receiver<TuiMessage>,
) -> Result<()> {
    let (provider, linker) = build_provider(config)?;
    info!(provider = provider.name(), "starting interactive dashboard");

    let worker = FetchWorker::new(provider, linker, Arc::new(TuiFetchSink::new(tx.clone())));
    let controller = DashboardController::new(tab);
    controller.subscribe(Arc::new(TuiBridgeObserver::new(tx)));
    controller.subscribe(Arc::new(LoggingObserver::new()));

    let mut app = TuiApp::new(controller, worker, rx);
    app.run().context("TUI error")?;
    Ok(())
}

/// Outstanding print-mode work.
#[derive(Debug, Default)]
struct Pending {
    connect: bool,
    aggregate: bool,
    user: bool,
    transactions: bool,
}

impl Pending {
    fn any(&self) -> bool {
        self.connect || self.aggregate || self.user || self.transactions
    }
}

fn run_cli(config: &AppConfig, tab: TabId) -> Result<()> {
    let timeout = config.timeout_duration()?;
    let (provider, linker) = build_provider(config)?;
    debug!(provider = provider.name(), %tab, "loading dashboard");

    let (tx, rx) = crossbeam_channel::unbounded::<FetchEvent>();
    let worker = FetchWorker::new(provider, linker, Arc::new(tx));
    let mut controller = DashboardController::new(tab);
    controller.subscribe(Arc::new(LoggingObserver::new()));

    let cancel = CancellationToken::new();
    ctrlc_handler(cancel.clone());

    let interactive = !config.quiet && !config.json;
    let spinner = WaitSpinner::start("Lade Dashboard", interactive);
    let deadline = Instant::now() + timeout;

    let mut pending = Pending {
        user: true,
        transactions: config.transactions,
        ..Pending::default()
    };
    worker.spawn_user();
    if config.transactions {
        worker.spawn_transactions();
    }
    if config.connect {
        spinner.set_message("Verbinde Bankkonto");
        pending.connect = true;
        worker.spawn_connect();
    } else if let Some(ticket) = controller.initialize() {
        pending.aggregate = true;
        worker.spawn_aggregate(ticket);
    }

    let mut fetch_error: Option<ProviderError> = None;
    let mut transactions: Option<Vec<Transaction>> = None;

    while pending.any() {
        let event = match next_event(&rx, &cancel, deadline, &config.timeout) {
            Ok(event) => event,
            Err(err) => {
                controller.cancel_in_flight();
                spinner.finish();
                return Err(err.into());
            }
        };
        match event {
            FetchEvent::Aggregate { seq, result } => {
                let error = result.as_ref().err().cloned();
                if controller.complete_fetch(seq, result) {
                    fetch_error = error;
                    pending.aggregate = false;
                }
            }
            FetchEvent::User(result) => {
                controller.set_user(result);
                pending.user = false;
            }
            FetchEvent::Transactions(result) => {
                match result {
                    Ok(list) => transactions = Some(list),
                    Err(err) => {
                        warn!(error = %err, "failed to fetch transactions");
                        if interactive {
                            print_warning(&format!("Umsätze nicht verfügbar: {err}"));
                        }
                    }
                }
                pending.transactions = false;
            }
            FetchEvent::AccountConnected(result) => {
                pending.connect = false;
                if let Err(err) = result {
                    spinner.finish();
                    return Err(DashboardError::Fetch(err)).context("connecting a bank account");
                }
                if interactive {
                    spinner.println("Bankkonto verbunden");
                }
                spinner.set_message("Lade Dashboard");
                pending.aggregate = true;
                worker.spawn_aggregate(controller.reload());
            }
        }
    }
    let elapsed = spinner.elapsed();
    spinner.finish();
    debug!(?elapsed, "dashboard ready");

    let presenter = DashboardPresenter::new(config.quiet);
    let mut stdout = std::io::stdout().lock();
    if config.json {
        presenter.present_json(&mut stdout, controller.state(), transactions.as_deref())?;
    } else {
        presenter.present(&mut stdout, controller.state(), transactions.as_deref())?;
    }

    match fetch_error {
        Some(err) => Err(DashboardError::Fetch(err).into()),
        None => Ok(()),
    }
}

/// Wait for the next worker event, honoring cancellation and the deadline.
fn next_event(
    rx: &Receiver<FetchEvent>,
    cancel: &CancellationToken,
    deadline: Instant,
    timeout_label: &str,
) -> Result<FetchEvent, DashboardError> {
    loop {
        cancel.check_cancelled()?;
        let now = Instant::now();
        if now >= deadline {
            return Err(DashboardError::Timeout(timeout_label.to_string()));
        }
        match rx.recv_timeout(POLL_INTERVAL.min(deadline - now)) {
            Ok(event) => return Ok(event),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                return Err(DashboardError::Fetch(ProviderError::Unavailable(
                    "worker channel closed".to_string(),
                )));
            }
        }
    }
}

fn ctrlc_handler(cancel: CancellationToken) {
    if let Err(err) = ctrlc::set_handler(move || cancel.cancel()) {
        warn!(error = %err, "could not install Ctrl+C handler");
    }
}
