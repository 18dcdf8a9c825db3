//! Keel Domain Layer
//!
//! Core vocabulary for validating domain entities. Defines the entity
//! capability, validation rules and the results they produce, plus the plain
//! data records that travel alongside entities (query parameters and change
//! events).
//!
//! ## Key Concepts
//!
//! - **Entity**: any type rules can be registered for
//! - **Rule**: an immutable (property, predicate, message, severity) tuple
//! - **Result**: what a fired rule reports, located by a dotted property path
//! - **Property path**: `Entity.Property`, never duplicating the leaf
//!
//! ## Architecture
//!
//! This crate holds no orchestration. Deciding which rules run, in which
//! order, and what a set of results means for acceptance lives in
//! `keel-gatekeeper`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod entity;
pub mod events;
pub mod query;
pub mod result;
pub mod result_type;
pub mod rule;

// Re-exports for convenience
pub use entity::Entity;
pub use events::{ChangeKind, EntityChangedEvent, EventId, PropertyChangedEvent};
pub use query::{OrderBy, QueryParameters, SortDirection};
pub use result::ValidationResult;
pub use result_type::ResultType;
pub use rule::{Rule, ValidationRule};
