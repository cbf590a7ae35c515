//! Resolution context: page origin and CDN settings.
//!
//! A context is built once at startup and passed by reference into every
//! resolution call. Nothing in it changes afterwards, so it can be shared
//! freely between threads.

use crate::cdn::CdnConfig;
use crate::config::ConfigError;

/// Origin used when none is configured.
pub const DEFAULT_ORIGIN: &str = "http://localhost";

/// Everything a resolver needs to turn a reference into an absolute URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveContext {
    /// `scheme://host[:port]`, never with a trailing slash.
    origin: String,
    /// Origin scheme plus `:`, prefixed onto protocol-relative references.
    protocol: String,
    cdn: CdnConfig,
}

impl ResolveContext {
    /// Builds a context from an origin string such as `https://shop.example.com`.
    ///
    /// Any path, query or fragment on the origin is dropped. Fails if the
    /// origin cannot be parsed or has no host.
    pub fn new(origin: &str, cdn: CdnConfig) -> Result<Self, ConfigError> {
        let trimmed = origin.trim();
        let parsed = url::Url::parse(trimmed).map_err(|e| ConfigError::InvalidOrigin {
            origin: trimmed.to_string(),
            reason: e.to_string(),
        })?;
        let host = parsed.host_str().ok_or_else(|| ConfigError::InvalidOrigin {
            origin: trimmed.to_string(),
            reason: "missing host".to_string(),
        })?;

        let mut normalized = format!("{}://{}", parsed.scheme(), host);
        if let Some(port) = parsed.port() {
            normalized.push_str(&format!(":{port}"));
        }

        Ok(Self {
            origin: normalized,
            protocol: format!("{}:", parsed.scheme()),
            cdn,
        })
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    pub fn cdn(&self) -> &CdnConfig {
        &self.cdn
    }

    /// Returns a copy of this context with the given CDN cloud configured.
    pub fn with_cdn_cloud(mut self, cloud_name: impl Into<String>) -> Self {
        self.cdn.cloud_name = Some(cloud_name.into());
        self
    }
}

impl Default for ResolveContext {
    fn default() -> Self {
        Self {
            origin: DEFAULT_ORIGIN.to_string(),
            protocol: "http:".to_string(),
            cdn: CdnConfig::default(),
        }
    }
}
