//! Connectivity checking subsystem.
//!
//! # Data Flow
//! ```text
//! Startup / target switch / periodic timer
//!     → monitor.rs (perform_health_check)
//!     → probe.rs (GET {base}/api/health with deadline)
//!     → policy.rs (status table keyed by target)
//!     → state.rs (Online / Offline + message)
//!     → workbench (indicator, action control)
//! ```
//!
//! # Design Decisions
//! - A single check decides the state; there is no hysteresis
//! - Failures are logged and shown, never propagated
//! - Timer ticks skip while a check is outstanding; manual checks never do

pub mod monitor;
pub mod policy;
pub mod probe;
pub mod state;

pub use monitor::HealthMonitor;
pub use policy::{evaluate_health, HealthPolicy};
pub use probe::HealthProber;
pub use state::{connectivity_for, Connectivity, ConnectivityStatus};

use std::time::Duration;

use thiserror::Error;

/// Why a probe did not count as alive.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HealthError {
    /// The backend answered with a status the policy rejects.
    #[error("HTTP Status {status}")]
    Status { status: u16 },

    /// No answer before the deadline.
    #[error("health check timed out after {}ms", .0.as_millis())]
    Timeout(Duration),

    /// Connection refused, DNS failure, TLS error and similar.
    #[error("transport error: {0}")]
    Transport(String),

    /// The selected base URL could not be turned into a request URL.
    #[error("invalid health check URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl HealthError {
    /// Short label for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            HealthError::Status { .. } => "status",
            HealthError::Timeout(_) => "timeout",
            HealthError::Transport(_) => "transport",
            HealthError::InvalidUrl(_) => "invalid_url",
        }
    }
}
