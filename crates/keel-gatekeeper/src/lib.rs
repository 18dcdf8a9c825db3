//! Keel Gatekeeper
//!
//! Validates domain entities against the rules registered for their type.
//!
//! The Gatekeeper provides:
//! - Rule registration per entity type
//! - Ordered evaluation with results built only for fired rules
//! - Acceptance decisions (errors reject, warnings configurable)
//! - TOML configuration
//!
//! # Examples
//!
//! ```
//! use keel_domain::{Entity, ValidationRule};
//! use keel_gatekeeper::{Gatekeeper, ValidationConfig, ValidationStatus};
//!
//! struct User { email: String }
//! impl Entity for User { const ENTITY_NAME: &'static str = "User"; }
//!
//! let mut gatekeeper = Gatekeeper::new(ValidationConfig::default());
//! gatekeeper.register(ValidationRule::error("Email", "Invalid email", |u: &User| !u.email.contains('@')));
//!
//! let report = gatekeeper.validate(&User { email: "nobody".to_string() }).unwrap();
//! assert_eq!(report.status(), ValidationStatus::Rejected);
//! assert_eq!(report.results()[0].property_path(), "User.Email");
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod report;
mod rule_set;
mod validator;

pub use config::{ConfigError, ValidationConfig};
pub use error::GatekeeperError;
pub use report::{ValidationReport, ValidationStatus};
pub use rule_set::RuleSet;
pub use validator::Gatekeeper;
