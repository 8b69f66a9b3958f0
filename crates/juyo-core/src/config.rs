use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// What happens to the rest of an archive after one member fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberFailurePolicy {
    /// Stop at the first failed member and return its error.
    #[default]
    Abort,
    /// Log the failure, record it in the report, and carry on with siblings.
    Skip,
}

/// HTTP client settings (optional `[http]` section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    pub connect_timeout_secs: u64,
    /// Whole-request timeout; upstream hosts guarantee none.
    pub timeout_secs: u64,
    /// User-Agent sent on data downloads.
    pub user_agent: String,
    pub max_redirects: u32,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            timeout_secs: 120,
            user_agent: "Mozilla/5.0".to_string(),
            max_redirects: 10,
        }
    }
}

/// Global configuration loaded from `~/.config/juyo/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JuyoConfig {
    /// Root of the output tree; relative paths resolve against the working directory.
    pub output_root: PathBuf,
    #[serde(default)]
    pub member_failure: MemberFailurePolicy,
    #[serde(default)]
    pub http: HttpConfig,
}

impl Default for JuyoConfig {
    fn default() -> Self {
        Self {
            output_root: PathBuf::from("csv"),
            member_failure: MemberFailurePolicy::default(),
            http: HttpConfig::default(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("juyo")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<JuyoConfig> {
    let path = config_path()?;
    load_or_init_at(&path)
}

pub fn load_or_init_at(path: &Path) -> Result<JuyoConfig> {
    if !path.exists() {
        let default_cfg = JuyoConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)
            .with_context(|| format!("write default config {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: JuyoConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
