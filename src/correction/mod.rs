//! Correction request subsystem.
//!
//! # Data Flow
//! ```text
//! editor buffer
//!     → submitter.rs (blank guard, busy presentation)
//!     → CorrectionClient (POST {base}/api/correct)
//!     → types.rs (decode corrected_code + language)
//!     → workbench (output pane, language, latency, connectivity)
//! ```
//!
//! # Design Decisions
//! - No timeout or retry on the request; the transport bounds it
//! - Every failure becomes "# Error: ..." in the output pane and marks the
//!   backend offline

pub mod submitter;
pub mod types;

pub use submitter::{CorrectionClient, Submitter};
pub use types::{CorrectionRequest, CorrectionResponse, Language, SubmitOutcome};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CorrectionError {
    /// Non-2xx response.
    #[error("API Error: {status}")]
    Status { status: u16 },

    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("invalid response body: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("invalid correction URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl CorrectionError {
    /// Short label for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            CorrectionError::Status { .. } => "status",
            CorrectionError::Transport(_) => "transport",
            CorrectionError::Decode(_) => "decode",
            CorrectionError::InvalidUrl(_) => "invalid_url",
        }
    }
}
