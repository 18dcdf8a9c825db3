//! Entity validation logic

use std::any::{Any, TypeId};
use std::collections::HashMap;

use keel_domain::{Entity, ResultType, Rule};
use tracing::{debug, info, warn};

use crate::{GatekeeperError, RuleSet, ValidationConfig, ValidationReport};

/// The Gatekeeper validates entities against their registered rules
///
/// Holds one [`RuleSet`] per entity type. Rules run in registration order and
/// a result is only built for rules whose predicate fired. Validation takes
/// `&self`, so a configured gatekeeper can be shared behind an `Arc`.
pub struct Gatekeeper {
    config: ValidationConfig,
    rule_sets: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl Gatekeeper {
    /// Create a new Gatekeeper with the given configuration
    pub fn new(config: ValidationConfig) -> Self {
        Self {
            config,
            rule_sets: HashMap::new(),
        }
    }

    /// Create a Gatekeeper with default configuration
    pub fn default_config() -> Self {
        Self::new(ValidationConfig::default())
    }

    /// Active configuration
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Register a rule for entity type `E`
    pub fn register<E, R>(&mut self, rule: R) -> &mut Self
    where
        E: Entity + 'static,
        R: Rule<E> + Send + Sync + 'static,
    {
        if let Some(set) = self.rule_set_mut::<E>() {
            set.add(rule);
        }
        self
    }

    /// Register every rule of `rules` for entity type `E`, after any already registered
    pub fn register_set<E>(&mut self, rules: RuleSet<E>) -> &mut Self
    where
        E: Entity + 'static,
    {
        if let Some(set) = self.rule_set_mut::<E>() {
            set.extend(rules);
        }
        self
    }

    /// Rules registered for entity type `E`
    pub fn rules_for<E>(&self) -> Option<&RuleSet<E>>
    where
        E: Entity + 'static,
    {
        self.rule_sets
            .get(&TypeId::of::<E>())
            .and_then(|set| set.downcast_ref::<RuleSet<E>>())
    }

    /// Validate an entity at its own [`Entity::entity_path`]
    pub fn validate<E>(&self, entity: &E) -> Result<ValidationReport, GatekeeperError>
    where
        E: Entity + 'static,
    {
        self.validate_at(entity, &entity.entity_path())
    }

    /// Validate an entity located at `entity_path`
    ///
    /// # Errors
    ///
    /// Returns [`GatekeeperError::Unregistered`] when no rules exist for `E`
    /// and the configuration denies unregistered types.
    pub fn validate_at<E>(&self, entity: &E, entity_path: &str) -> Result<ValidationReport, GatekeeperError>
    where
        E: Entity + 'static,
    {
        let Some(rules) = self.rules_for::<E>() else {
            if self.config.deny_unregistered {
                return Err(GatekeeperError::Unregistered {
                    entity: E::ENTITY_NAME,
                });
            }
            warn!("No validation rules registered for '{}', accepting", E::ENTITY_NAME);
            return Ok(ValidationReport::empty(entity_path));
        };

        let mut results = Vec::new();
        let mut truncated = false;

        for rule in rules.iter() {
            if !rule.matches(entity) {
                continue;
            }

            if self.config.max_results.is_some_and(|max| results.len() >= max) {
                warn!(
                    "Result cap of {:?} reached for '{}', skipping remaining rules",
                    self.config.max_results, entity_path
                );
                truncated = true;
                break;
            }

            let result = rule.as_result(entity_path);
            debug!(
                "Rule fired: {} [{}] {}",
                result.property_path(),
                result.result_type(),
                result.message()
            );

            let blocking = self.is_blocking(result.result_type());
            results.push(result);

            if blocking && self.config.stop_on_first_error {
                debug!("Stopping at first blocking result for '{}'", entity_path);
                break;
            }
        }

        let report = ValidationReport::new(entity_path, results, truncated, self.config.warnings_as_errors);
        info!("Validated {}", report.summary());

        Ok(report)
    }

    /// Validate a batch of entities of the same type, each at its own path
    pub fn validate_all<'a, E, I>(&self, entities: I) -> Result<Vec<ValidationReport>, GatekeeperError>
    where
        E: Entity + 'static,
        I: IntoIterator<Item = &'a E>,
    {
        entities.into_iter().map(|entity| self.validate(entity)).collect()
    }

    fn is_blocking(&self, result_type: ResultType) -> bool {
        result_type.is_blocking() || (self.config.warnings_as_errors && result_type == ResultType::Warning)
    }

    fn rule_set_mut<E>(&mut self) -> Option<&mut RuleSet<E>>
    where
        E: Entity + 'static,
    {
        self.rule_sets
            .entry(TypeId::of::<E>())
            .or_insert_with(|| Box::new(RuleSet::<E>::new()) as Box<dyn Any + Send + Sync>)
            .downcast_mut::<RuleSet<E>>()
    }
}

impl Default for Gatekeeper {
    fn default() -> Self {
        Self::default_config()
    }
}

impl std::fmt::Debug for Gatekeeper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gatekeeper")
            .field("config", &self.config)
            .field("entity_types", &self.rule_sets.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ValidationStatus;
    use keel_domain::ValidationRule;

    #[derive(Debug, Clone)]
    struct Person {
        name: String,
        email: String,
        age: u32,
    }

    impl Entity for Person {
        const ENTITY_NAME: &'static str = "Person";
    }

    struct Invoice {
        total: i64,
    }

    impl Entity for Invoice {
        const ENTITY_NAME: &'static str = "Invoice";
    }

    fn create_test_person() -> Person {
        Person {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            age: 36,
        }
    }

    fn gatekeeper(config: ValidationConfig) -> Gatekeeper {
        let mut gatekeeper = Gatekeeper::new(config);
        gatekeeper
            .register(ValidationRule::error("Name", "Name is required", |p: &Person| p.name.is_empty()))
            .register(ValidationRule::error("Email", "Invalid email", |p: &Person| !p.email.contains('@')))
            .register(ValidationRule::warning("Age", "Unusually old", |p: &Person| p.age > 120));
        gatekeeper
    }

    #[test]
    fn test_valid_entity() {
        let gatekeeper = gatekeeper(ValidationConfig::default());
        let report = gatekeeper.validate(&create_test_person()).unwrap();

        assert_eq!(report.status(), ValidationStatus::Accepted);
        assert!(report.results().is_empty());
        assert_eq!(report.entity_path(), "Person");
    }

    #[test]
    fn test_invalid_email() {
        let gatekeeper = gatekeeper(ValidationConfig::default());
        let mut person = create_test_person();
        person.email = "nobody".to_string();

        let report = gatekeeper.validate(&person).unwrap();

        assert_eq!(report.status(), ValidationStatus::Rejected);
        assert_eq!(report.results().len(), 1);
        let result = &report.results()[0];
        assert_eq!(result.property_name(), "Email");
        assert_eq!(result.property_path(), "Person.Email");
        assert_eq!(result.message(), "Invalid email");
        assert_eq!(result.result_type(), ResultType::Error);
    }

    #[test]
    fn test_warning_only() {
        let gatekeeper = gatekeeper(ValidationConfig::default());
        let mut person = create_test_person();
        person.age = 130;

        let report = gatekeeper.validate(&person).unwrap();
        assert_eq!(report.status(), ValidationStatus::AcceptedWithWarnings);
    }

    #[test]
    fn test_warnings_as_errors() {
        let gatekeeper = gatekeeper(ValidationConfig::strict());
        let mut person = create_test_person();
        person.age = 130;

        let report = gatekeeper.validate(&person).unwrap();
        assert_eq!(report.status(), ValidationStatus::Rejected);
    }

    #[test]
    fn test_results_follow_registration_order() {
        let gatekeeper = gatekeeper(ValidationConfig::default());
        let person = Person {
            name: String::new(),
            email: "nobody".to_string(),
            age: 200,
        };

        let report = gatekeeper.validate(&person).unwrap();
        let paths: Vec<&str> = report.results().iter().map(|r| r.property_path()).collect();
        assert_eq!(paths, vec!["Person.Name", "Person.Email", "Person.Age"]);
    }

    #[test]
    fn test_stop_on_first_error() {
        let config = ValidationConfig {
            stop_on_first_error: true,
            ..ValidationConfig::default()
        };
        let gatekeeper = gatekeeper(config);
        let person = Person {
            name: String::new(),
            email: "nobody".to_string(),
            age: 36,
        };

        let report = gatekeeper.validate(&person).unwrap();
        assert_eq!(report.results().len(), 1);
        assert_eq!(report.results()[0].property_name(), "Name");
        assert!(!report.is_truncated());
    }

    #[test]
    fn test_warning_does_not_stop_evaluation() {
        let config = ValidationConfig {
            stop_on_first_error: true,
            ..ValidationConfig::default()
        };
        let mut gatekeeper = Gatekeeper::new(config);
        gatekeeper
            .register(ValidationRule::warning("Age", "Unusually old", |p: &Person| p.age > 120))
            .register(ValidationRule::error("Name", "Name is required", |p: &Person| p.name.is_empty()));

        let person = Person {
            name: String::new(),
            email: "ada@example.com".to_string(),
            age: 200,
        };

        let report = gatekeeper.validate(&person).unwrap();
        assert_eq!(report.results().len(), 2);
    }

    #[test]
    fn test_max_results_truncates() {
        let config = ValidationConfig {
            max_results: Some(2),
            ..ValidationConfig::default()
        };
        let gatekeeper = gatekeeper(config);
        let person = Person {
            name: String::new(),
            email: "nobody".to_string(),
            age: 200,
        };

        let report = gatekeeper.validate(&person).unwrap();
        assert_eq!(report.results().len(), 2);
        assert!(report.is_truncated());
    }

    #[test]
    fn test_cap_reached_exactly_is_not_truncated() {
        let config = ValidationConfig {
            max_results: Some(1),
            ..ValidationConfig::default()
        };
        let gatekeeper = gatekeeper(config);
        let mut person = create_test_person();
        person.email = "nobody".to_string();

        let report = gatekeeper.validate(&person).unwrap();
        assert_eq!(report.results().len(), 1);
        assert!(!report.is_truncated());
    }

    #[test]
    fn test_unregistered_type_accepted_by_default() {
        let gatekeeper = gatekeeper(ValidationConfig::default());
        let report = gatekeeper.validate(&Invoice { total: -5 }).unwrap();

        assert_eq!(report.status(), ValidationStatus::Accepted);
        assert_eq!(report.entity_path(), "Invoice");
    }

    #[test]
    fn test_unregistered_type_denied() {
        let gatekeeper = gatekeeper(ValidationConfig::strict());
        let err = gatekeeper.validate(&Invoice { total: 10 }).unwrap_err();

        match err {
            GatekeeperError::Unregistered { entity } => assert_eq!(entity, "Invoice"),
            _ => panic!("Expected Unregistered"),
        }
    }

    #[test]
    fn test_rules_kept_per_type() {
        let mut gatekeeper = gatekeeper(ValidationConfig::default());
        gatekeeper.register(ValidationRule::error("Total", "Total must not be negative", |i: &Invoice| i.total < 0));

        assert_eq!(gatekeeper.rules_for::<Person>().map(RuleSet::len), Some(3));
        assert_eq!(gatekeeper.rules_for::<Invoice>().map(RuleSet::len), Some(1));

        let report = gatekeeper.validate(&Invoice { total: -1 }).unwrap();
        assert_eq!(report.results()[0].property_path(), "Invoice.Total");
    }

    #[test]
    fn test_register_set_appends() {
        let mut gatekeeper = gatekeeper(ValidationConfig::default());
        gatekeeper.register_set(
            RuleSet::new().with(ValidationRule::error("Age", "Must be an adult", |p: &Person| p.age < 18)),
        );

        let rules = gatekeeper.rules_for::<Person>().unwrap();
        assert_eq!(rules.len(), 4);
        assert_eq!(rules.iter().last().map(|r| r.message()), Some("Must be an adult"));
    }

    #[test]
    fn test_validate_at_nested_path() {
        let gatekeeper = gatekeeper(ValidationConfig::default());
        let mut person = create_test_person();
        person.email = "nobody".to_string();

        let report = gatekeeper.validate_at(&person, "Order.Customer").unwrap();
        assert_eq!(report.results()[0].property_path(), "Order.Customer.Email");
    }

    #[test]
    fn test_validate_at_leaf_path_not_duplicated() {
        let gatekeeper = gatekeeper(ValidationConfig::default());
        let mut person = create_test_person();
        person.email = "nobody".to_string();

        let report = gatekeeper.validate_at(&person, "Person.Email").unwrap();
        assert_eq!(report.results()[0].property_path(), "Person.Email");
    }

    #[test]
    fn test_validate_all() {
        let gatekeeper = gatekeeper(ValidationConfig::default());
        let mut bad = create_test_person();
        bad.name = String::new();
        let people = vec![create_test_person(), bad];

        let reports = gatekeeper.validate_all(&people).unwrap();
        assert_eq!(reports.len(), 2);
        assert!(reports[0].is_valid());
        assert!(!reports[1].is_valid());
    }
}
