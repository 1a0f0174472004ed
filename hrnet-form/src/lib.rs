//! HRnet intake form engine
//!
//! # Architecture
//!
//! Two pieces compose the "add employee" feature:
//!
//! - **Validation schema** (`schema`): declarative per-field rule chains
//!   evaluated first-failure-wins against the whole draft, producing a
//!   field → diagnostic mapping. Pure, no side effects.
//! - **Form controller** (`form`): owns the draft and its diagnostics,
//!   re-validates on change, guards re-entrant submits, and on a validated
//!   submit forwards the sealed record to the acceptance collaborator,
//!   resets the draft, and fires the completion signal.
//!
//! Everything runs synchronously on the caller's thread; validation
//! failures are data, never panics.
//!
//! # Module structure
//!
//! ```text
//! hrnet-form/src/
//! ├── config.rs      # env-driven engine configuration
//! ├── directory.rs   # acceptance collaborator trait + in-memory impl
//! ├── form/          # controller state machine
//! ├── logger.rs      # tracing subscriber setup
//! └── schema/        # rule chains and the employee schema
//! ```

pub mod config;
pub mod directory;
pub mod form;
pub mod logger;
pub mod schema;

// Re-export public types
pub use config::FormConfig;
pub use directory::{DirectoryEntry, EmployeeDirectory, EmployeeStore};
pub use form::{FormController, FormPhase, SubmitReceipt};
pub use logger::{init_logger, init_logger_with_level};
pub use schema::{seal, validate};

// Re-export the shared vocabulary so callers need one crate
pub use shared::error::{FieldErrors, SubmitError, ValidationCode};
pub use shared::models::{EmployeeDraft, EmployeeRecord, Field, FieldValue};
pub use shared::options::OptionLists;
