//! `mediaref classify <reference>` – print image, video, or other.

use anyhow::Result;
use mediaref_core::MediaResolver;

use crate::cli::input::parse_reference;

pub fn run_classify(resolver: &MediaResolver, reference: &str) -> Result<()> {
    let kind = resolver.classify(&parse_reference(reference));
    println!("{kind}");
    Ok(())
}
