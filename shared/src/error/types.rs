//! Field diagnostics mapping and submit rejection types

use super::codes::ValidationCode;
use crate::models::Field;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Per-field validation diagnostics
///
/// Maps each failing field to the first rule it failed. An empty mapping is
/// an accept verdict; a non-empty one is a reject verdict. Iteration order
/// follows [`Field`] declaration order, so diagnostics render next to their
/// fields deterministically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors {
    by_field: BTreeMap<Field, ValidationCode>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the first failing code for a field. Later inserts for the same
    /// field are ignored (first failure wins).
    pub fn insert(&mut self, field: Field, code: ValidationCode) {
        self.by_field.entry(field).or_insert(code);
    }

    /// Diagnostic for one field, if it failed
    pub fn get(&self, field: Field) -> Option<ValidationCode> {
        self.by_field.get(&field).copied()
    }

    /// User-facing message for one field, if it failed
    pub fn message(&self, field: Field) -> Option<&'static str> {
        self.get(field).map(|c| c.message())
    }

    /// Overall verdict: true when no field failed
    pub fn is_valid(&self) -> bool {
        self.by_field.is_empty()
    }

    pub fn len(&self) -> usize {
        self.by_field.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_field.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, ValidationCode)> + '_ {
        self.by_field.iter().map(|(f, c)| (*f, *c))
    }
}

impl FromIterator<(Field, ValidationCode)> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = (Field, ValidationCode)>>(iter: I) -> Self {
        let mut errors = Self::new();
        for (field, code) in iter {
            errors.insert(field, code);
        }
        errors
    }
}

/// Why a submit call was rejected
///
/// Validation failures are data, not process-level errors: the diagnostics
/// mapping travels inside the rejection so the caller can render it inline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The draft failed validation; no side effects occurred
    #[error("validation failed for {} field(s)", .0.len())]
    Invalid(FieldErrors),
    /// A submission is already in flight; the duplicate is dropped
    #[error("a submission is already in progress")]
    InProgress,
}
