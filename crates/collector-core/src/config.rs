//! Backend locator.
//!
//! Resolves the base URL every request is prefixed with. Resolution never
//! fails: an explicit override wins, then the hosted-preview heuristic, then
//! the local development server.

use std::fmt;

/// Environment variable holding an explicit backend URL.
pub const BACKEND_URL_ENV: &str = "COLLECTOR_BACKEND_URL";

/// Hostname fragment identifying the hosted preview environment.
pub const PREVIEW_HOST_PATTERN: &str = "modal.host";

/// Backend serving the hosted preview.
pub const PREVIEW_BACKEND_URL: &str =
    "https://ta-01ka9an0nydq7b0vtfk2v6nfzp-8000.wo-yxk9w2iajh1zhifmhjppf6di0.w.modal.host";

/// Local development backend.
pub const LOCAL_BACKEND_URL: &str = "http://localhost:8000";

/// Which rule produced the base URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendSource {
    Override,
    Preview,
    Local,
}

impl fmt::Display for BackendSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendSource::Override => f.write_str("override"),
            BackendSource::Preview => f.write_str("preview host"),
            BackendSource::Local => f.write_str("local default"),
        }
    }
}

/// Resolved backend location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    base_url: String,
    source: BackendSource,
}

impl BackendConfig {
    /// Resolve from an optional override and the current page hostname
    /// (`None` outside a browser).
    pub fn resolve(override_url: Option<&str>, hostname: Option<&str>) -> Self {
        if let Some(url) = override_url.map(str::trim).filter(|u| !u.is_empty()) {
            return Self::new(url, BackendSource::Override);
        }

        if hostname.is_some_and(|h| h.contains(PREVIEW_HOST_PATTERN)) {
            return Self::new(PREVIEW_BACKEND_URL, BackendSource::Preview);
        }

        Self::new(LOCAL_BACKEND_URL, BackendSource::Local)
    }

    /// Resolve using [`BACKEND_URL_ENV`] as the override.
    pub fn from_env(hostname: Option<&str>) -> Self {
        let override_url = std::env::var(BACKEND_URL_ENV).ok();
        Self::resolve(override_url.as_deref(), hostname)
    }

    fn new(url: &str, source: BackendSource) -> Self {
        Self {
            base_url: url.trim_end_matches('/').to_string(),
            source,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn source(&self) -> BackendSource {
        self.source
    }

    /// Join an absolute API path onto the base URL
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::resolve(None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_wins() {
        let config = BackendConfig::resolve(Some("http://api.example:9000"), Some("x.modal.host"));
        assert_eq!(config.base_url(), "http://api.example:9000");
        assert_eq!(config.source(), BackendSource::Override);
    }

    #[test]
    fn test_blank_override_ignored() {
        let config = BackendConfig::resolve(Some("   "), None);
        assert_eq!(config.base_url(), LOCAL_BACKEND_URL);
        assert_eq!(config.source(), BackendSource::Local);
    }

    #[test]
    fn test_preview_hostname() {
        let config = BackendConfig::resolve(None, Some("ta-123-5173.w.modal.host"));
        assert_eq!(config.base_url(), PREVIEW_BACKEND_URL);
        assert_eq!(config.source(), BackendSource::Preview);
    }

    #[test]
    fn test_other_hostname_falls_back_to_local() {
        let config = BackendConfig::resolve(None, Some("cards.example.com"));
        assert_eq!(config.base_url(), LOCAL_BACKEND_URL);
    }

    #[test]
    fn test_trailing_slash_stripped() {
        let config = BackendConfig::resolve(Some("http://api.example/"), None);
        assert_eq!(config.endpoint("/api/collection"), "http://api.example/api/collection");
    }
}
