//! Application wiring.
//!
//! Builds the shared client, workbench, monitor and submitter from a
//! validated configuration and exposes the user-facing operations.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::task::JoinHandle;
use url::Url;

use crate::config::ClientConfig;
use crate::correction::{CorrectionClient, SubmitOutcome, Submitter};
use crate::endpoint::{EndpointSelector, EndpointTable, Target};
use crate::health::{Connectivity, ConnectivityStatus, HealthMonitor, HealthProber};
use crate::http;
use crate::lifecycle::Shutdown;
use crate::workbench::clipboard::{copy_with_fallback, Clipboard, ClipboardError, CopyTier, FileClipboard, Osc52Clipboard};
use crate::workbench::Workbench;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid origin URL: {0}")]
    Origin(#[from] url::ParseError),
}

pub struct App {
    workbench: Arc<Workbench>,
    monitor: Arc<HealthMonitor>,
    submitter: Submitter,
    native_clipboard: Box<dyn Clipboard>,
    fallback_clipboard: Box<dyn Clipboard>,
    copy_feedback: Duration,
}

impl App {
    pub fn from_config(config: &ClientConfig) -> Result<Self, AppError> {
        Self::with_target(config, config.endpoints.default_target)
    }

    /// Like `from_config`, starting at `target` instead of the configured default.
    pub fn with_target(config: &ClientConfig, target: Target) -> Result<Self, AppError> {
        let client = http::build_client()?;
        let origin = Url::parse(&config.endpoints.origin)?;

        let selector = Arc::new(EndpointSelector::new(EndpointTable::from(&config.endpoints), target));
        let workbench = Arc::new(Workbench::new(selector, config.ui.theme, config.ui.indent_width));

        let prober = HealthProber::from_config(client.clone(), &config.endpoints, &config.health_check)?;
        let monitor = Arc::new(HealthMonitor::new(prober, workbench.clone(), &config.health_check));

        let submitter = Submitter::new(
            CorrectionClient::new(client, origin, config.correction.path.clone()),
            workbench.clone(),
        );

        let fallback_clipboard = match &config.ui.clipboard_fallback_path {
            Some(path) => FileClipboard::new(path),
            None => FileClipboard::in_temp_dir(),
        };

        Ok(Self {
            workbench,
            monitor,
            submitter,
            native_clipboard: Box::new(Osc52Clipboard::stdout()),
            fallback_clipboard: Box::new(fallback_clipboard),
            copy_feedback: Duration::from_millis(config.ui.copy_feedback_ms),
        })
    }

    /// Replace both clipboard tiers.
    pub fn with_clipboards(mut self, native: Box<dyn Clipboard>, fallback: Box<dyn Clipboard>) -> Self {
        self.native_clipboard = native;
        self.fallback_clipboard = fallback;
        self
    }

    pub fn workbench(&self) -> &Arc<Workbench> {
        &self.workbench
    }

    pub fn monitor(&self) -> &Arc<HealthMonitor> {
        &self.monitor
    }

    /// Run the startup check, then hand the recurring checks to a task.
    pub async fn start(&self, shutdown: &Shutdown) -> JoinHandle<()> {
        let selection = self.workbench.selection();
        tracing::info!(mode = %selection.target, base_url = %selection.base_url, "Initializing");
        self.monitor.perform_health_check().await;
        tokio::spawn(self.monitor.clone().run(shutdown.clone()))
    }

    /// Advance to the next target and resolve its real status.
    pub async fn cycle_target(&self) -> ConnectivityStatus {
        let selection = self.workbench.selector().cycle();
        self.workbench.show_selection(&selection);
        self.workbench.set_system_status(Connectivity::checking());
        self.monitor.perform_health_check().await
    }

    /// Press the action control. `None` when it is disabled.
    pub async fn press_action(&self) -> Option<SubmitOutcome> {
        let outcome = self.submitter.submit_input().await;
        if outcome.is_none() {
            tracing::debug!("Action control disabled, ignoring press");
        }
        outcome
    }

    /// Submit `source` directly, bypassing the editor and the control state.
    pub async fn submit(&self, source: &str) -> SubmitOutcome {
        self.submitter.submit(source).await
    }

    /// Copy the output pane and show the "Copied!" feedback.
    pub fn copy_output(&self) -> Result<CopyTier, ClipboardError> {
        let text = self.workbench.output_text();
        let tier = copy_with_fallback(self.native_clipboard.as_ref(), self.fallback_clipboard.as_ref(), &text)?;
        tracing::debug!(tier = ?tier, bytes = text.len(), "Output copied");

        self.workbench.show_copied();
        if let Ok(handle) = tokio::runtime::Handle::try_current() {
            let workbench = self.workbench.clone();
            let feedback = self.copy_feedback;
            handle.spawn(async move {
                tokio::time::sleep(feedback).await;
                workbench.reset_copy_label();
            });
        }
        Ok(tier)
    }
}
