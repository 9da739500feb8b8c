use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/mapi/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManagerConfig {
    /// Base URL of the manager REST API, e.g. "https://10.161.2.73".
    pub manager_url: String,
    /// Username for HTTP Basic authentication.
    pub username: String,
    /// Password for HTTP Basic authentication.
    pub password: String,
    /// Skip TLS peer/host certificate verification. Demo managers ship
    /// self-signed certificates; enabling this against a production host is
    /// a security hazard.
    pub accept_invalid_certs: bool,
    /// Optional connect timeout in seconds (None = built-in default).
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
    /// Optional whole-request timeout in seconds (None = built-in default).
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            manager_url: "https://10.161.2.73".to_string(),
            username: "admin".to_string(),
            password: "default".to_string(),
            accept_invalid_certs: true,
            connect_timeout_secs: None,
            timeout_secs: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("mapi")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ManagerConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ManagerConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: ManagerConfig = toml::from_str(&data)?;
    Ok(cfg)
}
