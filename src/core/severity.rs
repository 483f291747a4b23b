//! Severity category definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The five fixed log categories.
///
/// The set is closed: routing and styling rules only ever distinguish
/// these five. `Custom` is the catch-all for caller-styled messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Severity {
    DebugLog = 0,
    #[default]
    Info = 1,
    Warning = 2,
    Error = 3,
    Custom = 4,
}

impl Severity {
    pub fn to_str(&self) -> &'static str {
        match self {
            Severity::DebugLog => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Custom => "CUSTOM",
        }
    }

    /// All severities, in declaration order. Handy for exhaustive tests
    /// and style-table iteration.
    pub const ALL: [Severity; 5] = [
        Severity::DebugLog,
        Severity::Info,
        Severity::Warning,
        Severity::Error,
        Severity::Custom,
    ];
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DEBUG" | "DEBUGLOG" => Ok(Severity::DebugLog),
            "INFO" => Ok(Severity::Info),
            "WARN" | "WARNING" => Ok(Severity::Warning),
            "ERROR" => Ok(Severity::Error),
            "CUSTOM" => Ok(Severity::Custom),
            _ => Err(format!("Invalid severity: '{}'", s)),
        }
    }
}
