//! `mediaref config` – show config location and effective values.

use anyhow::Result;
use mediaref_core::config::{self, MediaRefConfig};

pub fn run_config(cfg: &MediaRefConfig) -> Result<()> {
    println!("# {}", config::config_path()?.display());
    print!("{}", toml::to_string_pretty(cfg)?);
    Ok(())
}
