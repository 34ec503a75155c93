//! Signup-Form-Validation Core
//!
//! Pure validation functions shared by the rule evaluator and the WASM
//! bindings. Every validator is deterministic and side-effect free; the ones
//! returning `Result<(), String>` carry a generic default message that a rule
//! may override with its own.

pub mod collection;
pub mod email;
pub mod numeric;
pub mod password;
pub mod string;

// Re-export all validators
pub use collection::*;
pub use email::*;
pub use numeric::*;
pub use password::*;
pub use string::*;
