//! The stateful shell around the pure selection and health functions.
//!
//! # Data Flow
//! ```text
//! HealthMonitor ─┐
//!                ├─→ Workbench (view state behind a mutex)
//! Submitter ─────┘        │
//!                         ├─→ status watch channel → renderer
//!                         └─→ snapshot() → renderer
//! ```
//!
//! # Design Decisions
//! - Connectivity and the action control change under the same lock, so the
//!   "disabled while offline" rule can't be observed half-applied
//! - Busy presentation is restored by a drop guard on every exit path

pub mod clipboard;
pub mod editor;
pub mod overlay;
pub mod theme;
pub mod view;

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::sync::watch;

use crate::correction::CorrectionResponse;
use crate::endpoint::{EndpointSelector, Selection};
use crate::health::{Connectivity, ConnectivityStatus};
use crate::observability::metrics;
use crate::workbench::overlay::ClickTarget;
use crate::workbench::theme::Theme;
use crate::workbench::view::{ToggleFace, ViewState, BUSY_LABEL, COPIED_LABEL, COPY_LABEL};

/// Shared view state plus the active endpoint selection.
pub struct Workbench {
    selector: Arc<EndpointSelector>,
    view: Mutex<ViewState>,
    status_tx: watch::Sender<Connectivity>,
}

impl Workbench {
    pub fn new(selector: Arc<EndpointSelector>, theme: Theme, indent_width: usize) -> Self {
        let view = ViewState::new(selector.current().target, theme, indent_width);
        let (status_tx, _) = watch::channel(view.connectivity.clone());
        Self {
            selector,
            view: Mutex::new(view),
            status_tx,
        }
    }

    fn lock(&self) -> MutexGuard<'_, ViewState> {
        self.view.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn selector(&self) -> &Arc<EndpointSelector> {
        &self.selector
    }

    pub fn selection(&self) -> Arc<Selection> {
        self.selector.current()
    }

    /// Copy of the current presentation state.
    pub fn snapshot(&self) -> ViewState {
        self.lock().clone()
    }

    pub fn connectivity(&self) -> Connectivity {
        self.lock().connectivity.clone()
    }

    pub fn action_enabled(&self) -> bool {
        self.lock().action_enabled()
    }

    /// Receive every connectivity change.
    pub fn subscribe_status(&self) -> watch::Receiver<Connectivity> {
        self.status_tx.subscribe()
    }

    /// Update the indicator. The action control follows via `action_enabled`.
    pub fn set_system_status(&self, connectivity: Connectivity) {
        let mut view = self.lock();
        if view.connectivity == connectivity {
            return;
        }
        tracing::debug!(
            status = %connectivity.status,
            message = %connectivity.message,
            "Connectivity changed"
        );
        metrics::record_connectivity(connectivity.status == ConnectivityStatus::Online);
        view.connectivity = connectivity.clone();
        // Sent under the lock so watchers observe changes in order.
        self.status_tx.send_replace(connectivity);
    }

    /// Show the label and icon of the newly selected target.
    pub fn show_selection(&self, selection: &Selection) {
        self.lock().toggle = ToggleFace::from(selection.target);
    }

    /// Enter the busy presentation until the guard drops.
    ///
    /// `None` while another submission already holds it.
    pub fn begin_busy(&self) -> Option<BusyGuard<'_>> {
        let mut view = self.lock();
        if view.action.busy {
            return None;
        }
        Some(self.enter_busy(&mut view))
    }

    /// Press the action control: like `begin_busy`, but also refused while
    /// offline. Checked and applied under one lock.
    pub fn begin_action(&self) -> Option<BusyGuard<'_>> {
        let mut view = self.lock();
        if !view.action_enabled() {
            return None;
        }
        Some(self.enter_busy(&mut view))
    }

    fn enter_busy(&self, view: &mut ViewState) -> BusyGuard<'_> {
        let prior_label = std::mem::replace(&mut view.action.label, BUSY_LABEL.to_string());
        view.action.busy = true;
        view.output.dimmed = true;
        BusyGuard {
            workbench: self,
            prior_label,
        }
    }

    pub fn render_correction(&self, response: &CorrectionResponse, latency: Duration) {
        let mut view = self.lock();
        view.output.dimmed = false;
        view.output.is_error = false;
        view.output.text = response.corrected_code.clone();
        if let Some(language) = &response.language {
            view.apply_language(language);
        }
        view.latency = Some(latency);
    }

    pub fn render_error(&self, message: &str) {
        let mut view = self.lock();
        view.output.text = format!("# Error: {message}");
        view.output.is_error = true;
    }

    // --- Editor ---

    pub fn input_text(&self) -> String {
        self.lock().input.text().to_string()
    }

    pub fn set_input(&self, text: impl Into<String>) {
        self.lock().input.set_text(text);
    }

    pub fn type_line(&self, line: &str) {
        self.lock().input.type_line(line);
    }

    pub fn clear_input(&self) {
        self.lock().input.clear();
    }

    pub fn output_text(&self) -> String {
        self.lock().output.text.clone()
    }

    // --- Theme & settings ---

    pub fn toggle_theme(&self) -> Theme {
        let mut view = self.lock();
        view.theme = view.theme.toggled();
        view.theme
    }

    pub fn open_settings(&self) {
        self.lock().settings.open();
    }

    pub fn close_settings(&self) {
        self.lock().settings.close();
    }

    pub fn click_settings(&self, target: ClickTarget) {
        self.lock().settings.click(target);
    }

    // --- Copy feedback ---

    pub fn show_copied(&self) {
        self.lock().copy_label = COPIED_LABEL.to_string();
    }

    pub fn reset_copy_label(&self) {
        self.lock().copy_label = COPY_LABEL.to_string();
    }
}

/// Restores the action control and output pane when dropped.
///
/// At most one exists at a time, so the saved label is never the busy one.
pub struct BusyGuard<'a> {
    workbench: &'a Workbench,
    prior_label: String,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        let mut view = self.workbench.lock();
        view.action.label = std::mem::take(&mut self.prior_label);
        view.action.busy = false;
        view.output.dimmed = false;
    }
}
