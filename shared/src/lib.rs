//! Shared types for the HRnet intake form
//!
//! Common types used across the form engine: employee models, field
//! identifiers, validation diagnostics, option lists, and id/time utilities.

pub mod error;
pub mod models;
pub mod options;
pub mod types;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{FieldErrors, SubmitError, ValidationCode};
pub use models::{EmployeeDraft, EmployeeRecord, Field, FieldValue};
pub use options::OptionLists;
