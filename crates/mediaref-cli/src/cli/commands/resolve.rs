//! `mediaref resolve <reference>` – resolve one reference to a URL.

use anyhow::{bail, Result};
use mediaref_core::MediaResolver;

use crate::cli::input::parse_reference;

pub fn run_resolve(resolver: &MediaResolver, reference: &str, thumb: bool) -> Result<()> {
    let value = parse_reference(reference);
    let url = if thumb {
        resolver.resolve_thumb(&value)
    } else {
        resolver.resolve(&value)
    };
    match url {
        Some(url) => println!("{url}"),
        None => bail!("unresolvable media reference: {reference}"),
    }
    Ok(())
}
