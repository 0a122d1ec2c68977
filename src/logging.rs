use std::fs::{create_dir_all, File};
use std::path::PathBuf;
use std::sync::Mutex;

use chrono::Local;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::constants::LOG_FILTER_ENV;
use crate::error::{OctofitError, OctofitResult};

lazy_static::lazy_static! {
    static ref LOG_FILE: Mutex<Option<PathBuf>> = Mutex::new(None);
}

pub fn log_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join("octofit")
        .join("logs")
}

/// Install a file-backed subscriber. Nothing is written to the terminal so
/// the dashboard's alternate screen stays clean.
pub fn init_logging() -> OctofitResult<PathBuf> {
    let dir = log_dir();
    create_dir_all(&dir)?;

    let log_file = dir.join(format!("octofit-{}.log", Local::now().format("%Y%m%d-%H%M%S")));
    let file = File::create(&log_file)?;

    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .try_init()
        .map_err(|e| OctofitError::ConfigError(format!("failed to install logger: {}", e)))?;

    if let Ok(mut slot) = LOG_FILE.lock() {
        *slot = Some(log_file.clone());
    }

    tracing::info!(path = %log_file.display(), "logging initialized");
    Ok(log_file)
}

/// Chain a hook that records the panic location and payload before the
/// default hook runs.
pub fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown location".to_string());

        let payload = if let Some(s) = info.payload().downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic payload".to_string()
        };

        tracing::error!(%location, %payload, "panic");
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::debug!("Backtrace:\n{}", backtrace);

        default_hook(info);
    }));
}

pub fn get_log_file_path() -> Option<PathBuf> {
    LOG_FILE.lock().ok().and_then(|slot| slot.clone())
}
