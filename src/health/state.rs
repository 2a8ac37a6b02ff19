//! Connectivity state.
//!
//! # States
//! - Online: the selected backend answered acceptably
//! - Offline: it did not, or a check is still pending
//!
//! # Design Decisions
//! - Two values only; "Checking..." is an Offline status with its own message
//! - Derived from the latest check or exchange, never stored authoritatively

use std::fmt;

use crate::health::HealthError;

pub const MSG_ONLINE: &str = "System Online";
pub const MSG_OFFLINE: &str = "Offline / Connecting...";
pub const MSG_CHECKING: &str = "Checking...";
pub const MSG_CONNECTION_FAILED: &str = "Connection Failed";

/// Reachability of the selected backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectivityStatus {
    Online,
    Offline,
}

impl fmt::Display for ConnectivityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectivityStatus::Online => f.write_str("online"),
            ConnectivityStatus::Offline => f.write_str("offline"),
        }
    }
}

/// Status plus the message shown next to the indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connectivity {
    pub status: ConnectivityStatus,
    pub message: String,
}

impl Connectivity {
    pub fn online() -> Self {
        Self::new(ConnectivityStatus::Online, MSG_ONLINE)
    }

    pub fn offline() -> Self {
        Self::new(ConnectivityStatus::Offline, MSG_OFFLINE)
    }

    /// Transient display while a check for a new target is pending.
    pub fn checking() -> Self {
        Self::new(ConnectivityStatus::Offline, MSG_CHECKING)
    }

    /// Shown after a correction exchange failed.
    pub fn connection_failed() -> Self {
        Self::new(ConnectivityStatus::Offline, MSG_CONNECTION_FAILED)
    }

    pub fn new(status: ConnectivityStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn is_online(&self) -> bool {
        self.status == ConnectivityStatus::Online
    }
}

impl Default for Connectivity {
    // Nothing has been checked yet.
    fn default() -> Self {
        Self::checking()
    }
}

/// Map a probe result onto the indicator.
pub fn connectivity_for(result: &Result<(), HealthError>) -> Connectivity {
    match result {
        Ok(()) => Connectivity::online(),
        Err(_) => Connectivity::offline(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checking_is_offline() {
        let c = Connectivity::checking();
        assert!(!c.is_online());
        assert_eq!(c.message, "Checking...");
    }

    #[test]
    fn test_connectivity_for_result() {
        assert_eq!(connectivity_for(&Ok(())), Connectivity::online());
        let failed = connectivity_for(&Err(HealthError::Status { status: 503 }));
        assert_eq!(failed.status, ConnectivityStatus::Offline);
        assert_eq!(failed.message, "Offline / Connecting...");
    }
}
