//! Result type module - severity of a fired validation rule

use serde::{Deserialize, Serialize};

/// Classification of a validation result
///
/// How each severity affects acceptance is decided by the orchestrator:
/// - Error: the entity must not be accepted
/// - Warning: the entity may be accepted, but the caller should be told
/// - Info: purely informational, never affects acceptance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultType {
    /// Informational note
    Info,

    /// Suspicious but acceptable
    Warning,

    /// Rule violation that blocks acceptance
    Error,
}

impl ResultType {
    /// Get the result type name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultType::Info => "info",
            ResultType::Warning => "warning",
            ResultType::Error => "error",
        }
    }

    /// Parse a result type from a string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "info" | "information" => Some(ResultType::Info),
            "warning" | "warn" => Some(ResultType::Warning),
            "error" => Some(ResultType::Error),
            _ => None,
        }
    }

    /// Whether this severity blocks acceptance on its own
    pub fn is_blocking(&self) -> bool {
        matches!(self, ResultType::Error)
    }
}

impl std::fmt::Display for ResultType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ResultType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid result type: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(ResultType::Error > ResultType::Warning);
        assert!(ResultType::Warning > ResultType::Info);
    }

    #[test]
    fn test_parse() {
        assert_eq!(ResultType::parse("Error"), Some(ResultType::Error));
        assert_eq!(ResultType::parse("warn"), Some(ResultType::Warning));
        assert_eq!(ResultType::parse("information"), Some(ResultType::Info));
        assert_eq!(ResultType::parse("fatal"), None);
        assert!("fatal".parse::<ResultType>().is_err());
    }

    #[test]
    fn test_only_error_blocks() {
        assert!(ResultType::Error.is_blocking());
        assert!(!ResultType::Warning.is_blocking());
        assert!(!ResultType::Info.is_blocking());
    }
}
