//! Logging init: append-only log file whose path and filter come from the
//! `[logging]` config section, with stderr as the last resort.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::Subscriber;
use tracing_subscriber::EnvFilter;

/// Filter used when neither `RUST_LOG` nor the config names one.
pub const DEFAULT_FILTER: &str = "info,ckbox=debug,ckbox_core=debug";

/// Optional `[logging]` section in config.toml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log file; defaults to `~/.local/state/ckbox/ckbox.log`.
    #[serde(default)]
    pub file: Option<PathBuf>,
    /// `EnvFilter` directives. `RUST_LOG` still takes precedence.
    #[serde(default)]
    pub filter: Option<String>,
}

impl LoggingConfig {
    /// Log file in effect (configured or under the XDG state dir).
    pub fn log_file_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.file {
            return Ok(path.clone());
        }
        let xdg_dirs = xdg::BaseDirectories::with_prefix("ckbox")?;
        Ok(xdg_dirs.get_state_home().join("ckbox").join("ckbox.log"))
    }

    /// `RUST_LOG`, then the configured directives, then [`DEFAULT_FILTER`].
    pub fn env_filter(&self) -> Result<EnvFilter> {
        if let Ok(filter) = EnvFilter::try_from_default_env() {
            return Ok(filter);
        }
        let directives = self.filter.as_deref().unwrap_or(DEFAULT_FILTER);
        EnvFilter::try_new(directives)
            .with_context(|| format!("invalid log filter {directives:?}"))
    }
}

/// Opens `path` for appending, creating parent directories as needed.
pub fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating log dir {}", parent.display()))?;
    }
    fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))
}

/// Plain-text subscriber writing every event into `file`.
pub fn file_subscriber(cfg: &LoggingConfig, file: File) -> Result<impl Subscriber + Send + Sync> {
    Ok(tracing_subscriber::fmt()
        .with_env_filter(cfg.env_filter()?)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .finish())
}

/// Install the file subscriber globally. Returns the log file path.
/// On failure (e.g. log dir unwritable) the caller can fall back to
/// [`init_logging_stderr`].
pub fn init_logging(cfg: &LoggingConfig) -> Result<PathBuf> {
    let path = cfg.log_file_path()?;
    let subscriber = file_subscriber(cfg, open_log_file(&path)?)?;
    tracing::subscriber::set_global_default(subscriber)?;

    tracing::info!("ckbox logging initialized at {}", path.display());
    Ok(path)
}

/// Initialize logging to stderr only.
pub fn init_logging_stderr() {
    let filter = LoggingConfig::default()
        .env_filter()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .finish();
    // Already installed (e.g. file logging succeeded earlier): keep it.
    let _ = tracing::subscriber::set_global_default(subscriber);
}
