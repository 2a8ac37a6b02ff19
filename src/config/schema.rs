//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the client.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::endpoint::Target;
use crate::workbench::theme::Theme;

/// Root configuration for the correction client.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ClientConfig {
    /// Deployment targets and the same-origin base.
    pub endpoints: EndpointsConfig,

    /// Connectivity probe settings.
    pub health_check: HealthCheckConfig,

    /// Correction request settings.
    pub correction: CorrectionConfig,

    /// Workbench presentation settings.
    pub ui: UiConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Base URLs of the three deployment targets.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct EndpointsConfig {
    /// Backend running directly on the developer machine.
    pub local: String,

    /// Reverse-proxied backend. Empty means "relative to `origin`".
    pub docker: String,

    /// Hosted backend.
    pub cloud: String,

    /// Origin that relative paths resolve against.
    pub origin: String,

    /// Target selected at startup.
    pub default_target: Target,
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            local: "http://127.0.0.1:8000".to_string(),
            docker: String::new(),
            cloud: "https://scriptsledge-clarity-backend.hf.space".to_string(),
            origin: "http://localhost".to_string(),
            default_target: Target::Cloud,
        }
    }
}

/// Health check configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HealthCheckConfig {
    /// Path probed on the selected target.
    pub path: String,

    /// Recurring check interval in seconds.
    pub interval_secs: u64,

    /// Hard deadline for a single probe in milliseconds.
    pub timeout_ms: u64,

    /// Skip a timer tick while an earlier check is still outstanding.
    pub skip_overlapping: bool,

    /// Statuses the cloud host returns on a live connection.
    pub cloud_tolerated_statuses: Vec<u16>,
}

impl Default for HealthCheckConfig {
    fn default() -> Self {
        Self {
            path: "/api/health".to_string(),
            interval_secs: 30,
            timeout_ms: 10_000,
            skip_overlapping: true,
            cloud_tolerated_statuses: vec![404, 405],
        }
    }
}

/// Correction request configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CorrectionConfig {
    /// Path the source code is posted to.
    pub path: String,
}

impl Default for CorrectionConfig {
    fn default() -> Self {
        Self {
            path: "/api/correct".to_string(),
        }
    }
}

/// Workbench presentation configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UiConfig {
    /// Theme at startup.
    pub theme: Theme,

    /// Spaces inserted for a tab key.
    pub indent_width: usize,

    /// How long the "Copied!" feedback stays visible.
    pub copy_feedback_ms: u64,

    /// Scratch file used when the terminal clipboard is unavailable.
    pub clipboard_fallback_path: Option<String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            indent_width: 4,
            copy_feedback_ms: 2000,
            clipboard_fallback_path: None,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Install the Prometheus exporter.
    pub metrics_enabled: bool,

    /// Exporter bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9091".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_compiled_in_targets() {
        let config = ClientConfig::default();
        assert_eq!(config.endpoints.local, "http://127.0.0.1:8000");
        assert_eq!(config.endpoints.docker, "");
        assert_eq!(config.endpoints.default_target, Target::Cloud);
        assert_eq!(config.health_check.interval_secs, 30);
        assert_eq!(config.health_check.timeout_ms, 10_000);
        assert_eq!(config.health_check.cloud_tolerated_statuses, vec![404, 405]);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: ClientConfig = toml::from_str(
            r#"
            [endpoints]
            default_target = "local"

            [health_check]
            interval_secs = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.endpoints.default_target, Target::Local);
        assert_eq!(config.health_check.interval_secs, 5);
        assert_eq!(config.health_check.path, "/api/health");
        assert_eq!(config.correction.path, "/api/correct");
        assert_eq!(config.ui.indent_width, 4);
    }
}
