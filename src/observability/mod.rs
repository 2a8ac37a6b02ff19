//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! monitor, submitter, workbench produce:
//!     → logging.rs (structured log events on stderr)
//!     → metrics.rs (counters, gauges, histograms)
//!
//! Consumers:
//!     → terminal / log capture
//!     → optional Prometheus scrape endpoint
//! ```

pub mod logging;
pub mod metrics;
