//! Change notification payloads
//!
//! Plain records handed to subscribers when entities change. Raising and
//! dispatching them is the caller's business.

use std::fmt;

/// Unique identifier for a change event based on UUIDv7
///
/// Sorts chronologically, so events can be ordered by id alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EventId(u128);

impl EventId {
    /// Generate a new UUIDv7-based EventId
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Create an EventId from a raw u128 value
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Parse an EventId from a UUID string
    pub fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s)
            .map(|u| Self(u.as_u128()))
            .map_err(|e| format!("Invalid UUID string: {}", e))
    }

    /// Get the raw u128 value
    pub fn value(&self) -> u128 {
        self.0
    }

    /// Milliseconds since Unix epoch embedded in the UUIDv7
    pub fn timestamp(&self) -> u64 {
        (self.0 >> 80) as u64
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

/// What happened to an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    /// Entity was created
    Added,
    /// Entity was updated
    Modified,
    /// Entity was removed
    Deleted,
}

/// An entity was added, modified or deleted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityChangedEvent {
    /// Event identifier
    pub id: EventId,

    /// Entity type name (see [`crate::Entity::ENTITY_NAME`])
    pub entity_name: String,

    /// Key of the changed entity, rendered as a string
    pub entity_key: String,

    /// Kind of change
    pub kind: ChangeKind,

    /// When the change happened (ms since epoch)
    pub timestamp: u64,
}

impl EntityChangedEvent {
    /// Create a new event with a fresh id; the timestamp is taken from the id
    pub fn new(entity_name: impl Into<String>, entity_key: impl Into<String>, kind: ChangeKind) -> Self {
        let id = EventId::new();
        Self {
            id,
            entity_name: entity_name.into(),
            entity_key: entity_key.into(),
            kind,
            timestamp: id.timestamp(),
        }
    }
}

/// A single property of an entity changed value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyChangedEvent {
    /// Entity type name
    pub entity_name: String,

    /// Name of the changed property
    pub property_name: String,

    /// Previous value, if known
    pub old_value: Option<String>,

    /// New value, if known
    pub new_value: Option<String>,
}

impl PropertyChangedEvent {
    /// Create a new property change without values
    pub fn new(entity_name: impl Into<String>, property_name: impl Into<String>) -> Self {
        Self {
            entity_name: entity_name.into(),
            property_name: property_name.into(),
            old_value: None,
            new_value: None,
        }
    }

    /// Attach the previous and new values
    pub fn with_values(mut self, old_value: Option<String>, new_value: Option<String>) -> Self {
        self.old_value = old_value;
        self.new_value = new_value;
        self
    }

    /// Dotted path of the changed property, matching validation result paths
    pub fn property_path(&self) -> String {
        crate::rule::property_path(&self.entity_name, &self.property_name)
    }
}
