//! Data models
//!
//! Shared between the form engine and any rendering collaborator.
//! Wire names are camelCase to match the intake form's field names.

pub mod employee;
pub mod field;

// Re-exports
pub use employee::*;
pub use field::*;
