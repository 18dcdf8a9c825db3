//! Validation result - the materialized outcome of a fired rule

use serde::{Deserialize, Serialize};

use crate::ResultType;

/// Outcome of applying one rule to one entity at one path
///
/// Immutable once built; two results are equal when all fields are.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    property_name: String,
    property_path: String,
    message: String,
    result_type: ResultType,
}

impl ValidationResult {
    /// Create a new validation result
    pub fn new(
        property_name: impl Into<String>,
        property_path: impl Into<String>,
        message: impl Into<String>,
        result_type: ResultType,
    ) -> Self {
        Self {
            property_name: property_name.into(),
            property_path: property_path.into(),
            message: message.into(),
            result_type,
        }
    }

    /// Name of the property the rule concerns
    pub fn property_name(&self) -> &str {
        &self.property_name
    }

    /// Full dotted path of the property (e.g. `User.Email`)
    pub fn property_path(&self) -> &str {
        &self.property_path
    }

    /// Human-readable failure description
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Severity of the result
    pub fn result_type(&self) -> ResultType {
        self.result_type
    }
}

impl std::fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.result_type, self.property_path, self.message)
    }
}
