//! Single bounded-time connectivity probe.

use std::time::Duration;

use tokio::time;
use url::Url;

use crate::config::{EndpointsConfig, HealthCheckConfig};
use crate::endpoint::Selection;
use crate::health::policy::{evaluate_health, HealthPolicy};
use crate::health::HealthError;
use crate::http::{RequestId, RequestIdExt};

/// Issues `GET {base}{path}` against a selection and applies the policy.
#[derive(Debug, Clone)]
pub struct HealthProber {
    client: reqwest::Client,
    origin: Url,
    path: String,
    timeout: Duration,
    policy: HealthPolicy,
}

impl HealthProber {
    pub fn new(client: reqwest::Client, origin: Url, path: impl Into<String>, timeout: Duration, policy: HealthPolicy) -> Self {
        Self {
            client,
            origin,
            path: path.into(),
            timeout,
            policy,
        }
    }

    /// Build a prober from validated configuration.
    pub fn from_config(
        client: reqwest::Client,
        endpoints: &EndpointsConfig,
        config: &HealthCheckConfig,
    ) -> Result<Self, url::ParseError> {
        Ok(Self::new(
            client,
            Url::parse(&endpoints.origin)?,
            config.path.clone(),
            Duration::from_millis(config.timeout_ms),
            HealthPolicy::with_cloud_tolerated(&config.cloud_tolerated_statuses),
        ))
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Probe `selection`.
    ///
    /// The request future is dropped when the deadline passes, which aborts
    /// the connection.
    pub async fn check_health(&self, selection: &Selection) -> Result<(), HealthError> {
        let url = selection.url_for(&self.origin, &self.path)?;
        let request_id = RequestId::new();

        tracing::debug!(
            request_id = %request_id,
            mode = %selection.target,
            url = %url,
            "Probing backend"
        );

        let response_future = self.client.get(url).with_request_id(request_id).send();

        match time::timeout(self.timeout, response_future).await {
            Ok(Ok(response)) => {
                let status = response.status().as_u16();
                evaluate_health(&self.policy, selection.target, status)
            }
            Ok(Err(e)) => Err(HealthError::Transport(e.to_string())),
            Err(_) => Err(HealthError::Timeout(self.timeout)),
        }
    }
}
