//! `mediaref thumbnail <path>` – selected thumbnail for each entity.

use anyhow::Result;
use mediaref_core::MediaResolver;

use crate::cli::input::{entities, read_json};

pub fn run_thumbnail(resolver: &MediaResolver, path: &str) -> Result<()> {
    let doc = read_json(path)?;
    for entity in entities(&doc) {
        // Empty line keeps output aligned with the input entities.
        println!("{}", resolver.thumbnail(entity).unwrap_or_default());
    }
    Ok(())
}
