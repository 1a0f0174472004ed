//! Acceptance collaborator for validated employee records

use serde::{Deserialize, Serialize};
use shared::models::EmployeeRecord;
use shared::types::Timestamp;
use shared::util::now_millis;

/// External service that durably records a validated employee.
///
/// Infallible by contract at this layer: whatever persistence or queueing
/// happens behind it is the implementation's concern.
pub trait EmployeeStore {
    fn add_employee(&mut self, record: EmployeeRecord);
}

/// One accepted record with its acceptance timestamp
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryEntry {
    pub accepted_at: Timestamp,
    pub employee: EmployeeRecord,
}

/// In-memory employee directory
///
/// Plays the acceptance-service role for a single process: appends in
/// arrival order and keeps everything resident.
#[derive(Debug, Default)]
pub struct EmployeeDirectory {
    entries: Vec<DirectoryEntry>,
}

impl EmployeeDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Accepted records, oldest first
    pub fn entries(&self) -> &[DirectoryEntry] {
        &self.entries
    }

    pub fn find(&self, employee_id: &str) -> Option<&DirectoryEntry> {
        self.entries.iter().find(|e| e.employee.id == employee_id)
    }
}

impl EmployeeStore for EmployeeDirectory {
    fn add_employee(&mut self, record: EmployeeRecord) {
        tracing::debug!(employee_id = %record.id, "record stored in directory");
        self.entries.push(DirectoryEntry {
            accepted_at: now_millis(),
            employee: record,
        });
    }
}
