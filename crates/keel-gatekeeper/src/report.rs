//! Aggregated outcome of validating one entity

use keel_domain::{ResultType, ValidationResult};
use serde::Serialize;

/// Acceptance decision for an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationStatus {
    /// No blocking or warning results
    Accepted,

    /// Accepted, but warnings were reported
    AcceptedWithWarnings,

    /// At least one blocking result
    Rejected,
}

/// All results reported for one entity, in rule registration order
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    entity_path: String,
    status: ValidationStatus,
    results: Vec<ValidationResult>,
    truncated: bool,
}

impl ValidationReport {
    /// Build a report and compute its status
    ///
    /// Errors always reject. Warnings reject only with `warnings_as_errors`,
    /// otherwise they downgrade to [`ValidationStatus::AcceptedWithWarnings`].
    /// Info results never affect the status.
    pub fn new(
        entity_path: impl Into<String>,
        results: Vec<ValidationResult>,
        truncated: bool,
        warnings_as_errors: bool,
    ) -> Self {
        let status = compute_status(&results, warnings_as_errors);
        Self {
            entity_path: entity_path.into(),
            status,
            results,
            truncated,
        }
    }

    /// Report for an entity nothing was checked against
    pub fn empty(entity_path: impl Into<String>) -> Self {
        Self::new(entity_path, Vec::new(), false, false)
    }

    /// Path the entity was validated at
    pub fn entity_path(&self) -> &str {
        &self.entity_path
    }

    /// Acceptance decision
    pub fn status(&self) -> ValidationStatus {
        self.status
    }

    /// Whether the entity may be accepted
    pub fn is_valid(&self) -> bool {
        self.status != ValidationStatus::Rejected
    }

    /// Whether evaluation stopped because the result cap was reached
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// All results
    pub fn results(&self) -> &[ValidationResult] {
        &self.results
    }

    /// Results with [`ResultType::Error`]
    pub fn errors(&self) -> impl Iterator<Item = &ValidationResult> {
        self.of_type(ResultType::Error)
    }

    /// Results with [`ResultType::Warning`]
    pub fn warnings(&self) -> impl Iterator<Item = &ValidationResult> {
        self.of_type(ResultType::Warning)
    }

    /// Results reported at exactly `property_path`
    pub fn for_property<'a>(&'a self, property_path: &'a str) -> impl Iterator<Item = &'a ValidationResult> {
        self.results
            .iter()
            .filter(move |r| r.property_path() == property_path)
    }

    /// Take ownership of the results
    pub fn into_results(self) -> Vec<ValidationResult> {
        self.results
    }

    /// One-line summary for logs
    pub fn summary(&self) -> String {
        format!(
            "{}: {:?} ({} errors, {} warnings{})",
            self.entity_path,
            self.status,
            self.errors().count(),
            self.warnings().count(),
            if self.truncated { ", truncated" } else { "" }
        )
    }

    fn of_type(&self, result_type: ResultType) -> impl Iterator<Item = &ValidationResult> {
        self.results
            .iter()
            .filter(move |r| r.result_type() == result_type)
    }
}

fn compute_status(results: &[ValidationResult], warnings_as_errors: bool) -> ValidationStatus {
    let mut warned = false;

    for result in results {
        match result.result_type() {
            ResultType::Error => return ValidationStatus::Rejected,
            ResultType::Warning if warnings_as_errors => return ValidationStatus::Rejected,
            ResultType::Warning => warned = true,
            ResultType::Info => {}
        }
    }

    if warned {
        ValidationStatus::AcceptedWithWarnings
    } else {
        ValidationStatus::Accepted
    }
}
