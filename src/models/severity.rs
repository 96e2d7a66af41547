use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Refactor,
    Convention,
    Warning,
    Error,
    Fatal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "refactor" | "r" => Ok(Severity::Refactor),
            "convention" | "c" => Ok(Severity::Convention),
            "warning" | "w" => Ok(Severity::Warning),
            "error" | "e" => Ok(Severity::Error),
            "fatal" | "f" => Ok(Severity::Fatal),
            _ => Err(format!("Invalid severity: {}", s)),
        }
    }
}

impl Severity {
    pub const ALL: [Severity; 5] = [
        Severity::Refactor,
        Severity::Convention,
        Severity::Warning,
        Severity::Error,
        Severity::Fatal,
    ];

    pub fn as_value(&self) -> u8 {
        match self {
            Severity::Refactor => 0,
            Severity::Convention => 1,
            Severity::Warning => 2,
            Severity::Error => 3,
            Severity::Fatal => 4,
        }
    }

    /// Lower-case name, also used as the CSS class of highlighted spans.
    pub fn name(&self) -> &'static str {
        match self {
            Severity::Refactor => "refactor",
            Severity::Convention => "convention",
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Fatal => "fatal",
        }
    }
}
