//! Ordered rules for one entity type

use keel_domain::{Entity, Rule, ValidationResult};

type BoxedRule<E> = Box<dyn Rule<E> + Send + Sync>;

/// Rules registered for entity type `E`, kept in registration order
pub struct RuleSet<E> {
    rules: Vec<BoxedRule<E>>,
}

impl<E: Entity> RuleSet<E> {
    /// Create an empty rule set
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule
    pub fn add<R>(&mut self, rule: R)
    where
        R: Rule<E> + Send + Sync + 'static,
    {
        self.rules.push(Box::new(rule));
    }

    /// Append a rule, builder style
    pub fn with<R>(mut self, rule: R) -> Self
    where
        R: Rule<E> + Send + Sync + 'static,
    {
        self.add(rule);
        self
    }

    /// Number of rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the set holds no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate rules in registration order
    pub fn iter(&self) -> impl Iterator<Item = &(dyn Rule<E> + Send + Sync)> {
        self.rules.iter().map(|rule| &**rule as &(dyn Rule<E> + Send + Sync))
    }

    /// Evaluate every rule and collect results for the ones that fired
    pub fn evaluate(&self, entity: &E, entity_path: &str) -> Vec<ValidationResult> {
        self.iter()
            .filter_map(|rule| rule.evaluate(entity, entity_path))
            .collect()
    }

    pub(crate) fn extend(&mut self, other: RuleSet<E>) {
        self.rules.extend(other.rules);
    }
}

impl<E: Entity> Default for RuleSet<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> std::fmt::Debug for RuleSet<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleSet").field("rules", &self.rules.len()).finish()
    }
}
