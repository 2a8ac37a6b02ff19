//! Health status interpretation policy.
//!
//! A table of acceptance rules keyed by target and status. A probe succeeds
//! when any rule matches; everything else is a failure carrying the status.
//!
//! ```text
//! target   status     verdict
//! any      2xx        alive
//! Cloud    404, 405   alive   (the host answers these on a live space)
//! any      other      dead
//! ```

use crate::endpoint::Target;
use crate::health::HealthError;

/// Which statuses a rule covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusMatch {
    /// Any 2xx status.
    Success,
    /// Exactly this status.
    Exact(u16),
}

impl StatusMatch {
    fn matches(self, status: u16) -> bool {
        match self {
            StatusMatch::Success => (200..300).contains(&status),
            StatusMatch::Exact(code) => code == status,
        }
    }
}

/// One row of the acceptance table. `target: None` applies to every target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcceptRule {
    pub target: Option<Target>,
    pub status: StatusMatch,
}

/// The acceptance table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthPolicy {
    rules: Vec<AcceptRule>,
}

impl HealthPolicy {
    /// 2xx everywhere, plus the given statuses for the cloud target.
    pub fn with_cloud_tolerated(statuses: &[u16]) -> Self {
        let mut rules = vec![AcceptRule {
            target: None,
            status: StatusMatch::Success,
        }];
        rules.extend(statuses.iter().map(|&code| AcceptRule {
            target: Some(Target::Cloud),
            status: StatusMatch::Exact(code),
        }));
        Self { rules }
    }

    pub fn rules(&self) -> &[AcceptRule] {
        &self.rules
    }

    /// True when `status` from `target` means the backend is alive.
    pub fn accepts(&self, target: Target, status: u16) -> bool {
        self.rules.iter().any(|rule| {
            rule.target.map_or(true, |t| t == target) && rule.status.matches(status)
        })
    }
}

impl Default for HealthPolicy {
    fn default() -> Self {
        Self::with_cloud_tolerated(&[404, 405])
    }
}

/// Interpret an HTTP status from a health probe.
pub fn evaluate_health(policy: &HealthPolicy, target: Target, status: u16) -> Result<(), HealthError> {
    if policy.accepts(target, status) {
        Ok(())
    } else {
        Err(HealthError::Status { status })
    }
}
