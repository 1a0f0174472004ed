//! Controller for the "add employee" form
//!
//! Owns one draft for its lifetime: re-validates on every field change,
//! guards against re-entrant submits, and on a validated submit forwards
//! the sealed record, resets to a fresh draft, and fires the completion
//! signal. Everything is synchronous; rejected submits have no side
//! effects.

use crate::config::FormConfig;
use crate::directory::EmployeeStore;
use crate::schema;
use shared::error::{FieldErrors, SubmitError};
use shared::models::{EmployeeDraft, Field, FieldValue};

/// Controller phase
///
/// No error-terminal phase exists: failed validation stays in `Editing`
/// with inline diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Editing,
    Submitting,
}

/// Proof of a successful submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitReceipt {
    /// Id of the record handed to the acceptance collaborator
    pub employee_id: String,
}

/// Form controller: current draft, its diagnostics, and the phase flag
#[derive(Debug)]
pub struct FormController {
    pub(crate) draft: EmployeeDraft,
    pub(crate) errors: FieldErrors,
    pub(crate) phase: FormPhase,
    validate_on_change: bool,
}

impl FormController {
    /// Fresh controller with a newly initialized draft
    pub fn new() -> Self {
        Self::with_config(&FormConfig::default())
    }

    pub fn with_config(config: &FormConfig) -> Self {
        Self {
            draft: EmployeeDraft::new(),
            errors: FieldErrors::new(),
            phase: FormPhase::Editing,
            validate_on_change: config.validate_on_change,
        }
    }

    /// The draft being edited
    pub fn draft(&self) -> &EmployeeDraft {
        &self.draft
    }

    /// Current per-field diagnostics
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// Overwrite one field and re-validate the whole draft.
    ///
    /// Returns the updated diagnostics so the caller can surface them next
    /// to the fields immediately.
    pub fn update_field(&mut self, field: Field, value: FieldValue) -> &FieldErrors {
        self.draft.set(field, value);
        if self.validate_on_change {
            self.errors = schema::validate(&self.draft);
            tracing::trace!(
                field = %field,
                failing = self.errors.len(),
                "field updated"
            );
        }
        &self.errors
    }

    /// Submit the current draft.
    ///
    /// On success the sealed record is forwarded to `store`, the draft is
    /// replaced by a fresh one (new id, empty fields), and `notify` fires
    /// with `true` so the host UI can dismiss its surface. A rejection
    /// refreshes the diagnostics and leaves the draft and store untouched.
    pub fn submit(
        &mut self,
        store: &mut dyn EmployeeStore,
        mut notify: impl FnMut(bool),
    ) -> Result<SubmitReceipt, SubmitError> {
        if self.is_submitting() {
            return Err(SubmitError::InProgress);
        }

        let record = match schema::seal(&self.draft) {
            Ok(record) => record,
            Err(errors) => {
                tracing::debug!(failing = errors.len(), "submit rejected by validation");
                self.errors = errors.clone();
                return Err(SubmitError::Invalid(errors));
            }
        };

        self.phase = FormPhase::Submitting;
        let employee_id = record.id.clone();
        store.add_employee(record);
        self.phase = FormPhase::Editing;

        tracing::info!(%employee_id, "employee accepted");

        self.draft = EmployeeDraft::new();
        self.errors = FieldErrors::new();
        notify(true);

        Ok(SubmitReceipt { employee_id })
    }

    /// Discard all edits: fresh draft with a new id, diagnostics cleared.
    /// Available in any phase.
    pub fn reset(&mut self) {
        self.draft = EmployeeDraft::new();
        self.errors = FieldErrors::new();
        self.phase = FormPhase::Editing;
    }
}

impl Default for FormController {
    fn default() -> Self {
        Self::new()
    }
}
