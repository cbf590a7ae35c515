use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::cdn::CdnConfig;
use crate::context::{ResolveContext, DEFAULT_ORIGIN};
use crate::resolver::MediaResolver;
use crate::rules::ExtractionRules;

/// Environment variable overriding `origin`.
pub const ENV_ORIGIN: &str = "MEDIAREF_ORIGIN";
/// Environment variable overriding `cdn.cloud_name` (empty clears it).
pub const ENV_CDN_CLOUD: &str = "MEDIAREF_CDN_CLOUD";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("locate XDG directories: {0}")]
    Xdg(#[from] xdg::BaseDirectoriesError),
    #[error("config I/O: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid origin {origin:?}: {reason}")]
    InvalidOrigin { origin: String, reason: String },
}

/// Global configuration loaded from `~/.config/mediaref/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaRefConfig {
    /// Page origin that relative media paths are served from.
    #[serde(default = "default_origin")]
    pub origin: String,
    /// CDN delivery settings; without a cloud name, descriptors stay unresolved.
    #[serde(default)]
    pub cdn: CdnConfig,
    /// Optional override of the field extraction table.
    #[serde(default)]
    pub rules: ExtractionRules,
}

fn default_origin() -> String {
    DEFAULT_ORIGIN.to_string()
}

impl Default for MediaRefConfig {
    fn default() -> Self {
        Self {
            origin: default_origin(),
            cdn: CdnConfig::default(),
            rules: ExtractionRules::default(),
        }
    }
}

impl MediaRefConfig {
    /// Applies `MEDIAREF_*` overrides using `lookup` (normally `std::env::var`).
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(origin) = lookup(ENV_ORIGIN).filter(|o| !o.trim().is_empty()) {
            self.origin = origin.trim().to_string();
        }
        if let Some(cloud) = lookup(ENV_CDN_CLOUD) {
            let cloud = cloud.trim();
            self.cdn.cloud_name = if cloud.is_empty() {
                None
            } else {
                Some(cloud.to_string())
            };
        }
    }

    /// Validates the origin and builds the resolution context.
    pub fn context(&self) -> Result<ResolveContext, ConfigError> {
        ResolveContext::new(&self.origin, self.cdn.clone())
    }

    pub fn resolver(&self) -> Result<MediaResolver, ConfigError> {
        Ok(MediaResolver::new(self.context()?, self.rules.clone()))
    }
}

pub fn config_path() -> Result<PathBuf, ConfigError> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("mediaref")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from `path`, writing defaults there if it does not exist.
pub fn load_or_init_at(path: &Path) -> Result<MediaRefConfig, ConfigError> {
    if !path.exists() {
        let default_cfg = MediaRefConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)?;
    let cfg: MediaRefConfig = toml::from_str(&data)?;
    Ok(cfg)
}

/// Load configuration from disk (creating a default file if none exists),
/// then apply environment overrides. Called once at startup.
pub fn load_or_init() -> Result<MediaRefConfig, ConfigError> {
    let mut cfg = load_or_init_at(&config_path()?)?;
    cfg.apply_env_overrides(|key| std::env::var(key).ok());
    Ok(cfg)
}
