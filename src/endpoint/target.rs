//! Deployment targets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the three fixed deployment targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// Backend started by hand on the developer machine.
    Local,
    /// Backend behind the same-origin reverse proxy.
    Docker,
    /// Hosted backend.
    Cloud,
}

impl Target {
    /// All targets in cycle order.
    pub const ALL: [Target; 3] = [Target::Local, Target::Docker, Target::Cloud];

    /// The target after this one in the toggle cycle.
    pub fn next(self) -> Self {
        match self {
            Target::Local => Target::Docker,
            Target::Docker => Target::Cloud,
            Target::Cloud => Target::Local,
        }
    }

    /// Label shown on the toggle.
    pub fn label(self) -> &'static str {
        match self {
            Target::Local => "Local",
            Target::Docker => "Docker",
            Target::Cloud => "Cloud",
        }
    }

    /// Icon shown next to the label.
    pub fn icon(self) -> &'static str {
        match self {
            Target::Local => "💻",
            Target::Docker => "🐳",
            Target::Cloud => "☁️",
        }
    }

    /// Lowercase identifier used in config files and metric labels.
    pub fn as_str(self) -> &'static str {
        match self {
            Target::Local => "local",
            Target::Docker => "docker",
            Target::Cloud => "cloud",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a string names no target.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown target '{0}' (expected local, docker or cloud)")]
pub struct UnknownTarget(pub String);

impl FromStr for Target {
    type Err = UnknownTarget;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Target::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownTarget(s.to_string()))
    }
}
