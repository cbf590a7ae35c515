//! CLI for inspecting media references in marketplace API payloads.

mod commands;
mod input;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use mediaref_core::config::{self, MediaRefConfig};

use commands::{
    run_classify, run_completions, run_config, run_gallery, run_resolve, run_thumbnail,
};

/// Top-level CLI for mediaref.
#[derive(Debug, Parser)]
#[command(name = "mediaref")]
#[command(about = "mediaref: resolve media references and build galleries from API payloads", long_about = None)]
pub struct Cli {
    /// Page origin for relative paths (overrides config and MEDIAREF_ORIGIN).
    #[arg(long, global = true, value_name = "URL")]
    pub origin: Option<String>,

    /// CDN cloud identifier (overrides config and MEDIAREF_CDN_CLOUD).
    #[arg(long, global = true, value_name = "NAME")]
    pub cloud: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve one media reference (JSON value or plain string) to a URL.
    Resolve {
        /// Reference, e.g. `/img/a.png` or `{"public_id":"x"}`.
        reference: String,

        /// Prefer thumbnail renditions and CDN thumbnail transforms.
        #[arg(long)]
        thumb: bool,
    },

    /// Classify a media reference as image, video, or other.
    Classify {
        /// Reference, e.g. `http://cdn/c.mp4` or `{"url":"x","media_type":"video"}`.
        reference: String,
    },

    /// Print the image gallery of an entity (or array of entities).
    Gallery {
        /// Path to a JSON file, or `-` for stdin.
        path: String,

        /// List every resolvable media entry with its kind instead of images only.
        #[arg(long)]
        all: bool,

        /// Emit JSON instead of one URL per line.
        #[arg(long)]
        json: bool,
    },

    /// Print the selected thumbnail of an entity (or array of entities).
    Thumbnail {
        /// Path to a JSON file, or `-` for stdin.
        path: String,
    },

    /// Show the config file location and effective configuration.
    Config,

    /// Generate shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

/// Effective configuration: file, then environment, then CLI flags.
fn load_config(origin: Option<String>, cloud: Option<String>) -> Result<MediaRefConfig> {
    let mut cfg = config::load_or_init()?;
    if let Some(origin) = origin {
        cfg.origin = origin;
    }
    if let Some(cloud) = cloud {
        cfg.cdn.cloud_name = Some(cloud);
    }
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let Cli {
            origin,
            cloud,
            command,
            ..
        } = self;

        // Completions need neither config nor a resolver.
        if let CliCommand::Completions { shell } = command {
            run_completions(shell);
            return Ok(());
        }

        let cfg = load_config(origin, cloud)?;
        let resolver = cfg.resolver()?;

        match command {
            CliCommand::Resolve { reference, thumb } => run_resolve(&resolver, &reference, thumb)?,
            CliCommand::Classify { reference } => run_classify(&resolver, &reference)?,
            CliCommand::Gallery { path, all, json } => run_gallery(&resolver, &path, all, json)?,
            CliCommand::Thumbnail { path } => run_thumbnail(&resolver, &path)?,
            CliCommand::Config => run_config(&cfg)?,
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
