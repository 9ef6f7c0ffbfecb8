use crate::asset_url::parse_origin;
use crate::breakpoints::BreakpointPolicy;
use crate::error::Error;
use crate::logging::LoggingConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Origin assets are served from unless configured otherwise.
pub const DEFAULT_ASSETS_ORIGIN: &str = "https://ckbox.cloud/";

/// Global configuration loaded from `~/.config/ckbox/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CkboxConfig {
    /// Absolute base URL asset paths are resolved against.
    pub assets_origin: String,
    /// Optional breakpoint parameters; if missing, built-in defaults are used.
    #[serde(default)]
    pub breakpoints: Option<BreakpointPolicy>,
    /// Log file and filter; see [`LoggingConfig`].
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for CkboxConfig {
    fn default() -> Self {
        Self {
            assets_origin: DEFAULT_ASSETS_ORIGIN.to_string(),
            breakpoints: None,
            logging: LoggingConfig::default(),
        }
    }
}

impl CkboxConfig {
    /// Breakpoint policy in effect (configured or default).
    pub fn breakpoint_policy(&self) -> BreakpointPolicy {
        self.breakpoints.unwrap_or_default()
    }

    /// Rejects values the URL builders cannot work with.
    pub fn validate(&self) -> crate::error::Result<()> {
        parse_origin(&self.assets_origin)?;
        if let Some(policy) = &self.breakpoints {
            if policy.pixels_threshold == 0 {
                return Err(Error::InvalidConfig {
                    message: "breakpoints.pixels_threshold must be greater than 0".to_string(),
                });
            }
        }
        if let Some(filter) = &self.logging.filter {
            tracing_subscriber::EnvFilter::try_new(filter).map_err(|e| Error::InvalidConfig {
                message: format!("logging.filter {filter:?}: {e}"),
            })?;
        }
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("ckbox")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<CkboxConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = CkboxConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load and validate configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<CkboxConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg: CkboxConfig =
        toml::from_str(&data).with_context(|| format!("parsing config {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validating config {}", path.display()))?;
    Ok(cfg)
}
