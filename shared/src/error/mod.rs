//! Validation diagnostics for the intake form
//!
//! This module provides the diagnostics side of the form contract:
//! - [`ValidationCode`]: standardized per-field diagnostic codes
//! - [`FieldErrors`]: mapping from field to its first failing code
//! - [`SubmitError`]: why a submit call was rejected
//!
//! # Code Ranges
//!
//! - 1xxx: presence
//! - 2xxx: text shape
//! - 3xxx: numeric shape
//!
//! # Example
//!
//! ```
//! use shared::error::{FieldErrors, ValidationCode};
//! use shared::models::Field;
//!
//! let mut errors = FieldErrors::new();
//! errors.insert(Field::FirstName, ValidationCode::TooShort);
//!
//! assert!(!errors.is_valid());
//! assert_eq!(errors.get(Field::FirstName), Some(ValidationCode::TooShort));
//! ```

mod codes;
mod types;

pub use codes::{InvalidValidationCode, ValidationCode};
pub use types::{FieldErrors, SubmitError};
