//! CLI command handlers, one file per command.

mod classify;
mod completions;
mod config;
mod gallery;
mod resolve;
mod thumbnail;

pub use classify::run_classify;
pub use completions::run_completions;
pub use config::run_config;
pub use gallery::run_gallery;
pub use resolve::run_resolve;
pub use thumbnail::run_thumbnail;
