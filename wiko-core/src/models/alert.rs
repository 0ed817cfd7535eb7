use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity attached to rule-based alerts shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertLevel {
    Ok,
    Caution,
    HighRisk,
}

impl AlertLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Caution => "CAUTION",
            Self::HighRisk => "HIGH_RISK",
        }
    }
}

impl fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
