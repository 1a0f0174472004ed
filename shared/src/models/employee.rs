//! Employee Model

use super::field::Field;
use crate::util::employee_id;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Value assigned to one field of a draft
///
/// Text carries raw keyboard input; Date carries a picked (or cleared) date.
/// Text assigned to a date field is parsed as `YYYY-MM-DD` and cleared on
/// parse failure, matching the date inputs' behavior.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Date(Option<NaiveDate>),
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(d: NaiveDate) -> Self {
        FieldValue::Date(Some(d))
    }
}

/// Employee record under construction (possibly partial or invalid)
///
/// `zip` stays raw text until the draft is sealed: the user may have typed
/// anything, and the numeric rules report what went wrong.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDraft {
    /// Generated at creation, immutable for the draft's lifetime
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: Option<NaiveDate>,
    pub start_date: Option<NaiveDate>,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub department: String,
}

impl EmployeeDraft {
    /// Fresh draft: new unique id, every other field empty/absent
    pub fn new() -> Self {
        Self {
            id: employee_id(),
            first_name: String::new(),
            last_name: String::new(),
            birth_date: None,
            start_date: None,
            street: String::new(),
            city: String::new(),
            state: String::new(),
            zip: String::new(),
            department: String::new(),
        }
    }

    /// Overwrite exactly one field. No other field is affected.
    pub fn set(&mut self, field: Field, value: FieldValue) {
        match field {
            Field::BirthDate => self.birth_date = coerce_date(value),
            Field::StartDate => self.start_date = coerce_date(value),
            Field::FirstName => self.first_name = coerce_text(value),
            Field::LastName => self.last_name = coerce_text(value),
            Field::Street => self.street = coerce_text(value),
            Field::City => self.city = coerce_text(value),
            Field::State => self.state = coerce_text(value),
            Field::Zip => self.zip = coerce_text(value),
            Field::Department => self.department = coerce_text(value),
        }
    }

    /// Raw text of one field, if it is a text field
    pub fn text(&self, field: Field) -> Option<&str> {
        match field {
            Field::FirstName => Some(&self.first_name),
            Field::LastName => Some(&self.last_name),
            Field::Street => Some(&self.street),
            Field::City => Some(&self.city),
            Field::State => Some(&self.state),
            Field::Zip => Some(&self.zip),
            Field::Department => Some(&self.department),
            Field::BirthDate | Field::StartDate => None,
        }
    }
}

impl Default for EmployeeDraft {
    fn default() -> Self {
        Self::new()
    }
}

fn coerce_text(value: FieldValue) -> String {
    match value {
        FieldValue::Text(s) => s,
        // Date inputs never target text fields; format defensively
        FieldValue::Date(Some(d)) => d.format("%Y-%m-%d").to_string(),
        FieldValue::Date(None) => String::new(),
    }
}

fn coerce_date(value: FieldValue) -> Option<NaiveDate> {
    match value {
        FieldValue::Date(d) => d,
        FieldValue::Text(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok(),
    }
}

/// Sealed employee record (validated, what crosses the acceptance boundary)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRecord {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: Option<NaiveDate>,
    pub start_date: Option<NaiveDate>,
    pub street: String,
    pub city: String,
    pub state: String,
    /// Validated 5-digit zip, 1001 < zip < 99950
    pub zip: u32,
    pub department: String,
}
