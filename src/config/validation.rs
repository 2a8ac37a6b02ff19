//! Configuration validation.
//!
//! Serde handles syntax; this module checks value ranges and that every URL
//! parses. All errors are collected, not just the first.

use std::net::SocketAddr;

use thiserror::Error;
use url::Url;

use crate::config::schema::ClientConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("endpoints.{field}: '{value}' is not an http(s) URL")]
    InvalidUrl { field: &'static str, value: String },

    #[error("{field}: path '{value}' must start with '/'")]
    InvalidPath { field: &'static str, value: String },

    #[error("{field} must be greater than zero")]
    Zero { field: &'static str },

    #[error("ui.indent_width {0} is outside 1..=16")]
    IndentWidth(usize),

    #[error("health_check.cloud_tolerated_statuses: {0} is not an HTTP status")]
    InvalidStatus(u16),

    #[error("observability.metrics_address: '{0}' is not a socket address")]
    MetricsAddress(String),
}

/// Validate a parsed configuration.
pub fn validate_config(config: &ClientConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let endpoints = &config.endpoints;

    // Empty bases are allowed: they mean "same origin".
    for (field, value) in [
        ("local", &endpoints.local),
        ("docker", &endpoints.docker),
        ("cloud", &endpoints.cloud),
    ] {
        if !value.is_empty() && !is_http_url(value) {
            errors.push(ValidationError::InvalidUrl { field, value: value.clone() });
        }
    }
    if !is_http_url(&endpoints.origin) {
        errors.push(ValidationError::InvalidUrl {
            field: "origin",
            value: endpoints.origin.clone(),
        });
    }

    for (field, value) in [
        ("health_check.path", &config.health_check.path),
        ("correction.path", &config.correction.path),
    ] {
        if !value.starts_with('/') {
            errors.push(ValidationError::InvalidPath { field, value: value.clone() });
        }
    }

    if config.health_check.interval_secs == 0 {
        errors.push(ValidationError::Zero { field: "health_check.interval_secs" });
    }
    if config.health_check.timeout_ms == 0 {
        errors.push(ValidationError::Zero { field: "health_check.timeout_ms" });
    }
    for &status in &config.health_check.cloud_tolerated_statuses {
        if !(100..=599).contains(&status) {
            errors.push(ValidationError::InvalidStatus(status));
        }
    }

    if !(1..=16).contains(&config.ui.indent_width) {
        errors.push(ValidationError::IndentWidth(config.ui.indent_width));
    }

    let observability = &config.observability;
    if observability.metrics_enabled && observability.metrics_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::MetricsAddress(observability.metrics_address.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn is_http_url(value: &str) -> bool {
    Url::parse(value)
        .map(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&ClientConfig::default()).is_ok());
    }

    #[test]
    fn test_reports_every_error() {
        let mut config = ClientConfig::default();
        config.endpoints.local = "not a url".into();
        config.endpoints.origin = "ftp://example.com".into();
        config.health_check.path = "api/health".into();
        config.health_check.interval_secs = 0;
        config.health_check.cloud_tolerated_statuses = vec![404, 999];
        config.ui.indent_width = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 6);
        assert!(errors.contains(&ValidationError::InvalidStatus(999)));
        assert!(errors.contains(&ValidationError::IndentWidth(0)));
    }

    #[test]
    fn test_metrics_address_only_checked_when_enabled() {
        let mut config = ClientConfig::default();
        config.observability.metrics_address = "nowhere".into();
        assert!(validate_config(&config).is_ok());

        config.observability.metrics_enabled = true;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors, vec![ValidationError::MetricsAddress("nowhere".into())]);
    }
}
