//! # signup-form
//!
//! A pure validation engine for the signup form: a [`RuleCatalog`] declares
//! the ordered rules of every field, [`validate`] runs them against an
//! [`InputRecord`] and returns an [`ErrorMap`] holding at most one message per
//! field.
//!
//! ```rust
//! use signup_form::{validate, Field, InputRecord, RuleCatalog};
//!
//! let catalog = RuleCatalog::signup();
//! let record = InputRecord::blank().with(Field::Password, "abc");
//!
//! let errors = validate(&record, &catalog);
//! assert_eq!(
//!     errors.get(Field::Password),
//!     Some("Password must be at least 8 characters")
//! );
//! assert!(!errors.is_valid());
//! ```
//!
//! Multi-select fields are updated with [`toggle_member`] (or
//! [`InputRecord::toggle`], which stores the result for you).
//!
//! Nothing here performs I/O: catalogs can also be described as data with a
//! [`CatalogSchema`] parsed from JSON or TOML text the caller has read.

pub mod catalog;
pub mod error_map;
pub mod evaluator;
pub mod field;
pub mod record;
pub mod rule;
pub mod schema;
pub mod toggle;

pub use catalog::{CatalogBuilder, CatalogConfig, CatalogError, RuleCatalog};
pub use error_map::ErrorMap;
pub use evaluator::{validate, validate_field};
pub use field::{Field, FieldKind, UnknownField};
pub use record::{FieldValue, InputRecord};
pub use rule::{Check, Rule, RuleSet};
pub use schema::{CatalogSchema, SchemaError};
pub use toggle::toggle_member;
