//! Quill - read a personal blog from the terminal.
//!
//! Thin caller over `quill-core`: it resolves configuration, restores the
//! saved session and article state, runs one command, and reports failures.

mod commands;

use std::io;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use quill_core::api::{ApiClient, Notifier, PendingRoute, LOGIN_ROUTE};
use quill_core::{ApiError, ArticleStore, Config, FileStorage, SessionStore, Storage};
use tracing::{debug, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{AppContext, Command};

/// Log file name prefix inside the data directory
const LOG_FILE_PREFIX: &str = "quill.log";

/// Prints user-facing failure messages to stderr.
struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn error(&self, message: &str) {
        eprintln!("error: {}", message);
    }
}

/// Whether `err` was already shown to the user by `TerminalNotifier`.
fn already_reported(err: &anyhow::Error) -> bool {
    err.downcast_ref::<ApiError>()
        .is_some_and(|api| api.kind().is_notified())
}

/// Initialize the tracing subscriber for logging.
/// Stderr gets `RUST_LOG`-filtered output (default `warn`); the data
/// directory gets a daily log file at `debug`.
fn init_tracing(log_dir: &Path) -> WorkerGuard {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let file_appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_filter(filter))
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_writer(file_writer)
                .with_filter(EnvFilter::new("quill_core=debug,quill=debug")),
        )
        .init();

    guard
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = Command::parse(&args)?;
    if command == Command::Help {
        println!("{}", commands::USAGE);
        return Ok(());
    }

    let config = Config::load().context("Failed to load config")?;
    let data_dir = config.data_dir()?;
    let storage: Arc<dyn Storage> = Arc::new(FileStorage::new(data_dir.clone())?);

    let log_guard = init_tracing(&data_dir);
    info!(command = ?command, "Quill starting");

    let navigator = Arc::new(PendingRoute::new());
    let client = ApiClient::new(&config.base_url()?, storage.clone())?
        .with_notifier(Arc::new(TerminalNotifier))
        .with_navigator(navigator.clone());

    let mut ctx = AppContext {
        config,
        session: SessionStore::restore(client),
        articles: ArticleStore::restore(storage),
    };

    let result = commands::run(command, &mut ctx).await;

    if navigator.take().as_deref() == Some(LOGIN_ROUTE) {
        eprintln!("Your session was rejected by the server. Run `quill login` to sign in again.");
    }

    match result {
        Ok(()) => Ok(()),
        Err(e) if already_reported(&e) => {
            debug!(error = %e, "Command failed");
            drop(log_guard);
            std::process::exit(1);
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notified_failures_are_not_printed_again() {
        let auth = ApiError::Unauthorized { message: None };
        assert!(already_reported(&auth.into()));

        let transport = ApiError::Transport {
            status: Some(502),
            message: "Bad gateway".to_string(),
        };
        assert!(already_reported(&transport.into()));
    }

    #[test]
    fn test_unnotified_failures_are_printed() {
        let missing_token = ApiError::InvalidResponse("Login response carried no token".to_string());
        assert!(!already_reported(&missing_token.into()));

        let bad_header = ApiError::Request("Session token is not a valid header value".to_string());
        assert!(!already_reported(&bad_header.into()));

        assert!(!already_reported(&anyhow::anyhow!("Failed to save config")));
    }
}
