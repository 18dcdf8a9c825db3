//! Entity capability
//!
//! The only thing validation needs to know about a domain object is that it
//! is one. Predicates inspect the concrete type directly.

/// Marker capability for domain entities
///
/// Implemented by every type that rules can be registered for.
pub trait Entity {
    /// Name of the entity type, used as the root of property paths
    /// (e.g. `"Person"` for `Person.Age`)
    const ENTITY_NAME: &'static str;

    /// Path of this entity instance inside an entity graph
    ///
    /// Defaults to the entity name. Override for entities that know their
    /// position (e.g. `"Order.Lines[2]"`).
    fn entity_path(&self) -> String {
        Self::ENTITY_NAME.to_string()
    }
}
