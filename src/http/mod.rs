//! Outbound HTTP plumbing.
//!
//! # Data Flow
//! ```text
//! health probe / correction submit
//!     → request.rs (attach x-request-id)
//!     → shared reqwest::Client (connection pooling)
//!     → backend
//! ```

pub mod request;

pub use request::{RequestId, RequestIdExt, X_REQUEST_ID};

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("clarity-client/", env!("CARGO_PKG_VERSION"));

/// Build the client shared by the monitor and the submitter.
///
/// No global timeout is set: the health probe enforces its own deadline and
/// the correction request is bounded only by the transport.
pub fn build_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder().user_agent(USER_AGENT).build()
}
