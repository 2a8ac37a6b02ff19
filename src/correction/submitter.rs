//! Correction submission.
//!
//! # Responsibilities
//! - Post the editor contents to the active endpoint
//! - Hold the busy presentation for the duration of the call
//! - Render the result, latency and connectivity side effects

use std::sync::Arc;
use std::time::Instant;

use url::Url;

use crate::correction::{CorrectionError, CorrectionRequest, CorrectionResponse, SubmitOutcome};
use crate::endpoint::Selection;
use crate::health::Connectivity;
use crate::http::{RequestId, RequestIdExt};
use crate::observability::metrics;
use crate::workbench::{BusyGuard, Workbench};

/// Stateless HTTP half of the submitter.
#[derive(Debug, Clone)]
pub struct CorrectionClient {
    client: reqwest::Client,
    origin: Url,
    path: String,
}

impl CorrectionClient {
    pub fn new(client: reqwest::Client, origin: Url, path: impl Into<String>) -> Self {
        Self {
            client,
            origin,
            path: path.into(),
        }
    }

    /// `POST {base}{path}` with `{"code": ...}` and decode the reply.
    pub async fn correct(&self, selection: &Selection, code: &str) -> Result<CorrectionResponse, CorrectionError> {
        let url = selection.url_for(&self.origin, &self.path)?;
        let request_id = RequestId::new();

        tracing::debug!(
            request_id = %request_id,
            mode = %selection.target,
            url = %url,
            bytes = code.len(),
            "Submitting code for correction"
        );

        let response = self
            .client
            .post(url)
            .with_request_id(request_id)
            .json(&CorrectionRequest { code })
            .send()
            .await
            .map_err(CorrectionError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(CorrectionError::Status { status: status.as_u16() });
        }

        response.json::<CorrectionResponse>().await.map_err(|e| {
            if e.is_decode() {
                CorrectionError::Decode(e)
            } else {
                CorrectionError::Transport(e)
            }
        })
    }
}

/// Drives one submission through the workbench.
pub struct Submitter {
    client: CorrectionClient,
    workbench: Arc<Workbench>,
}

impl Submitter {
    pub fn new(client: CorrectionClient, workbench: Arc<Workbench>) -> Self {
        Self { client, workbench }
    }

    /// Press the action control with the editor contents.
    ///
    /// `None` when the control is disabled (offline or already busy).
    pub async fn submit_input(&self) -> Option<SubmitOutcome> {
        let source = self.workbench.input_text();
        if source.trim().is_empty() {
            return self.workbench.action_enabled().then_some(SubmitOutcome::Skipped);
        }
        let busy = self.workbench.begin_action()?;
        Some(self.exchange(busy, &source).await)
    }

    /// Submit `source` to the active endpoint, regardless of connectivity.
    ///
    /// Blank input is ignored without touching the view, as is a second
    /// submission while one is in flight.
    pub async fn submit(&self, source: &str) -> SubmitOutcome {
        if source.trim().is_empty() {
            return SubmitOutcome::Skipped;
        }
        let Some(busy) = self.workbench.begin_busy() else {
            tracing::debug!("Submission already in flight, ignoring");
            return SubmitOutcome::Busy;
        };
        self.exchange(busy, source).await
    }

    /// One round trip. The busy presentation ends when `_busy` drops.
    async fn exchange(&self, _busy: BusyGuard<'_>, source: &str) -> SubmitOutcome {
        let selection = self.workbench.selection();
        let started = Instant::now();

        match self.client.correct(&selection, source).await {
            Ok(response) => {
                let latency = started.elapsed();
                metrics::record_correction(selection.target, None, Some(latency));
                tracing::info!(
                    mode = %selection.target,
                    latency_ms = latency.as_millis() as u64,
                    language = response.language.as_ref().map(|l| l.name.as_str()).unwrap_or("-"),
                    "Correction received"
                );
                self.workbench.render_correction(&response, latency);
                self.workbench.set_system_status(Connectivity::online());
                SubmitOutcome::Corrected { response, latency }
            }
            Err(e) => {
                metrics::record_correction(selection.target, Some(&e), None);
                tracing::error!(mode = %selection.target, error = %e, "Correction request failed");
                let message = e.to_string();
                self.workbench.render_error(&message);
                self.workbench.set_system_status(Connectivity::connection_failed());
                SubmitOutcome::Failed { message }
            }
        }
    }
}
