//! Backend endpoint subsystem.
//!
//! # Data Flow
//! ```text
//! EndpointsConfig
//!     → EndpointTable (target → base URL)
//!     → selector.rs (active Selection, cycle order)
//!     → Selection::url_for(path) → health probe / correction request
//! ```

pub mod selector;
pub mod target;

pub use selector::{cycle_target, select_target, EndpointSelector, Stamped};
pub use target::{Target, UnknownTarget};

use url::Url;

use crate::config::EndpointsConfig;

/// Fixed mapping from target to base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointTable {
    local: String,
    docker: String,
    cloud: String,
}

impl EndpointTable {
    pub fn new(local: impl Into<String>, docker: impl Into<String>, cloud: impl Into<String>) -> Self {
        Self {
            local: local.into(),
            docker: docker.into(),
            cloud: cloud.into(),
        }
    }

    /// Base URL of `target`; empty means same-origin.
    pub fn base_url(&self, target: Target) -> &str {
        match target {
            Target::Local => &self.local,
            Target::Docker => &self.docker,
            Target::Cloud => &self.cloud,
        }
    }
}

impl From<&EndpointsConfig> for EndpointTable {
    fn from(config: &EndpointsConfig) -> Self {
        Self::new(&config.local, &config.docker, &config.cloud)
    }
}

/// The active target together with its derived base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub target: Target,
    pub base_url: String,
}

impl Selection {
    /// Resolve `path` against the base URL.
    ///
    /// An empty base yields the bare path, i.e. a same-origin relative URL.
    pub fn resolve(&self, path: &str) -> String {
        if self.base_url.is_empty() {
            path.to_string()
        } else {
            format!("{}{}", self.base_url.trim_end_matches('/'), path)
        }
    }

    /// Absolute URL for `path`, using `origin` when the base is empty.
    pub fn url_for(&self, origin: &Url, path: &str) -> Result<Url, url::ParseError> {
        if self.base_url.is_empty() {
            origin.join(path)
        } else {
            Url::parse(&self.resolve(path))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_relative_when_base_empty() {
        let selection = Selection { target: Target::Docker, base_url: String::new() };
        assert_eq!(selection.resolve("/api/health"), "/api/health");

        let origin = Url::parse("http://localhost:8080").unwrap();
        assert_eq!(
            selection.url_for(&origin, "/api/health").unwrap().as_str(),
            "http://localhost:8080/api/health"
        );
    }

    #[test]
    fn test_resolve_absolute_keeps_base_path() {
        let selection = Selection {
            target: Target::Cloud,
            base_url: "https://example.org/clarity/".into(),
        };
        assert_eq!(selection.resolve("/api/correct"), "https://example.org/clarity/api/correct");

        let origin = Url::parse("http://localhost").unwrap();
        assert_eq!(
            selection.url_for(&origin, "/api/correct").unwrap().as_str(),
            "https://example.org/clarity/api/correct"
        );
    }
}
