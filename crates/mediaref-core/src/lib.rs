pub mod config;
pub mod logging;

// Resolution pipeline, leaves first.
pub mod cdn;
pub mod classify;
pub mod context;
pub mod gallery;
pub mod normalize;
pub mod resolver;
pub mod rules;
pub mod thumbnail;

pub use classify::MediaKind;
pub use context::ResolveContext;
pub use gallery::ResolvedMedia;
pub use resolver::MediaResolver;
pub use rules::ExtractionRules;
