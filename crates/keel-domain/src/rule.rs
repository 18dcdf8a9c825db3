//! Validation rules
//!
//! A rule is a named, immutable (property, predicate, message, severity)
//! tuple. Testing a rule (`matches`) and building its result (`as_result`)
//! are separate steps so callers can run many rules and only allocate a
//! result for the ones that fire.
//!
//! ## Polarity
//!
//! `matches` returning `true` means the rule is **violated**: the predicate
//! describes the bad state (`|p: &Person| p.age < 18`). `evaluate` builds on
//! that and yields a result only when the predicate fires.

use std::fmt;
use std::sync::Arc;

use crate::{Entity, ResultType, ValidationResult};

/// Compute the dotted path of a property below `entity_path`
///
/// Returns `entity_path` unchanged when it already ends with `property_name`,
/// otherwise appends `.property_name`. The suffix check is a plain string
/// comparison; no separator normalization is done.
///
/// # Examples
///
/// ```
/// use keel_domain::rule::property_path;
///
/// assert_eq!(property_path("Person", "Age"), "Person.Age");
/// assert_eq!(property_path("Person.Age", "Age"), "Person.Age");
/// assert_eq!(property_path("", "Age"), ".Age");
/// ```
pub fn property_path(entity_path: &str, property_name: &str) -> String {
    if entity_path.ends_with(property_name) {
        entity_path.to_string()
    } else {
        format!("{}.{}", entity_path, property_name)
    }
}

/// A validation rule over entities of type `E`
///
/// Implement this for rule kinds that need more than a closure (for instance
/// rules that carry their own thresholds). Path and result construction are
/// provided so every rule kind reports the same way.
pub trait Rule<E: Entity> {
    /// Name of the property the rule concerns
    fn property_name(&self) -> &str;

    /// Failure text reported when the rule fires
    fn message(&self) -> &str;

    /// Severity reported when the rule fires
    fn result_type(&self) -> ResultType;

    /// Whether the rule fires (is violated) for `entity`
    ///
    /// Must be a pure function of the entity's current state.
    fn matches(&self, entity: &E) -> bool;

    /// Dotted path of this rule's property below `entity_path`
    fn property_path(&self, entity_path: &str) -> String {
        property_path(entity_path, self.property_name())
    }

    /// Build the result this rule reports at `entity_path`
    ///
    /// Does not call [`Rule::matches`].
    fn as_result(&self, entity_path: &str) -> ValidationResult {
        ValidationResult::new(
            self.property_name(),
            self.property_path(entity_path),
            self.message(),
            self.result_type(),
        )
    }

    /// Test the rule and build a result only if it fires
    fn evaluate(&self, entity: &E, entity_path: &str) -> Option<ValidationResult> {
        if self.matches(entity) {
            Some(self.as_result(entity_path))
        } else {
            None
        }
    }
}

type Predicate<E> = Arc<dyn Fn(&E) -> bool + Send + Sync>;

/// Closure-backed rule
///
/// Cloning is cheap; clones share the predicate.
pub struct ValidationRule<E> {
    property_name: String,
    message: String,
    result_type: ResultType,
    predicate: Predicate<E>,
}

impl<E: Entity> ValidationRule<E> {
    /// Create a new rule
    ///
    /// # Examples
    ///
    /// ```
    /// use keel_domain::{Entity, ResultType, Rule, ValidationRule};
    ///
    /// struct Person { age: u32 }
    /// impl Entity for Person { const ENTITY_NAME: &'static str = "Person"; }
    ///
    /// let rule = ValidationRule::new("Age", "Must be an adult", ResultType::Error, |p: &Person| p.age < 18);
    /// assert!(rule.matches(&Person { age: 12 }));
    /// assert!(!rule.matches(&Person { age: 40 }));
    /// ```
    pub fn new<F>(
        property_name: impl Into<String>,
        message: impl Into<String>,
        result_type: ResultType,
        predicate: F,
    ) -> Self
    where
        F: Fn(&E) -> bool + Send + Sync + 'static,
    {
        Self {
            property_name: property_name.into(),
            message: message.into(),
            result_type,
            predicate: Arc::new(predicate),
        }
    }

    /// Create a rule reporting [`ResultType::Error`]
    pub fn error<F>(property_name: impl Into<String>, message: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&E) -> bool + Send + Sync + 'static,
    {
        Self::new(property_name, message, ResultType::Error, predicate)
    }

    /// Create a rule reporting [`ResultType::Warning`]
    pub fn warning<F>(property_name: impl Into<String>, message: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&E) -> bool + Send + Sync + 'static,
    {
        Self::new(property_name, message, ResultType::Warning, predicate)
    }
}

impl<E: Entity> Rule<E> for ValidationRule<E> {
    fn property_name(&self) -> &str {
        &self.property_name
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn result_type(&self) -> ResultType {
        self.result_type
    }

    fn matches(&self, entity: &E) -> bool {
        (self.predicate)(entity)
    }
}

impl<E> Clone for ValidationRule<E> {
    fn clone(&self) -> Self {
        Self {
            property_name: self.property_name.clone(),
            message: self.message.clone(),
            result_type: self.result_type,
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<E> fmt::Debug for ValidationRule<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationRule")
            .field("property_name", &self.property_name)
            .field("message", &self.message)
            .field("result_type", &self.result_type)
            .finish_non_exhaustive()
    }
}
