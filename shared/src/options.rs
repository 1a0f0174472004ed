//! Option lists for the state and department selects
//!
//! Static enumerations consumed read-only: by rendering collaborators to
//! populate select inputs, and by callers that want to check membership.
//! Owned by process-wide configuration, installed once at startup; the
//! built-in lists apply when nothing is installed.

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// One selectable US state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateEntry {
    /// Two-letter code, the value stored on the draft
    pub abbreviation: String,
    /// Display label
    pub name: String,
}

/// Built-in US states and territories, in display order
pub const US_STATES: &[(&str, &str)] = &[
    ("AL", "Alabama"),
    ("AK", "Alaska"),
    ("AZ", "Arizona"),
    ("AR", "Arkansas"),
    ("CA", "California"),
    ("CO", "Colorado"),
    ("CT", "Connecticut"),
    ("DE", "Delaware"),
    ("DC", "District Of Columbia"),
    ("FL", "Florida"),
    ("GA", "Georgia"),
    ("HI", "Hawaii"),
    ("ID", "Idaho"),
    ("IL", "Illinois"),
    ("IN", "Indiana"),
    ("IA", "Iowa"),
    ("KS", "Kansas"),
    ("KY", "Kentucky"),
    ("LA", "Louisiana"),
    ("ME", "Maine"),
    ("MD", "Maryland"),
    ("MA", "Massachusetts"),
    ("MI", "Michigan"),
    ("MN", "Minnesota"),
    ("MS", "Mississippi"),
    ("MO", "Missouri"),
    ("MT", "Montana"),
    ("NE", "Nebraska"),
    ("NV", "Nevada"),
    ("NH", "New Hampshire"),
    ("NJ", "New Jersey"),
    ("NM", "New Mexico"),
    ("NY", "New York"),
    ("NC", "North Carolina"),
    ("ND", "North Dakota"),
    ("OH", "Ohio"),
    ("OK", "Oklahoma"),
    ("OR", "Oregon"),
    ("PA", "Pennsylvania"),
    ("RI", "Rhode Island"),
    ("SC", "South Carolina"),
    ("SD", "South Dakota"),
    ("TN", "Tennessee"),
    ("TX", "Texas"),
    ("UT", "Utah"),
    ("VT", "Vermont"),
    ("VA", "Virginia"),
    ("WA", "Washington"),
    ("WV", "West Virginia"),
    ("WI", "Wisconsin"),
    ("WY", "Wyoming"),
];

/// Built-in organizational departments
pub const DEPARTMENTS: &[&str] = &[
    "Sales",
    "Marketing",
    "Engineering",
    "Human Resources",
    "Legal",
];

static GLOBAL: OnceLock<OptionLists> = OnceLock::new();

/// Process-wide option lists backing the state and department selects
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionLists {
    states: Vec<StateEntry>,
    departments: Vec<String>,
}

impl OptionLists {
    /// Lists built from the compiled-in tables
    pub fn builtin() -> Self {
        Self {
            states: US_STATES
                .iter()
                .map(|(abbr, name)| StateEntry {
                    abbreviation: (*abbr).to_string(),
                    name: (*name).to_string(),
                })
                .collect(),
            departments: DEPARTMENTS.iter().map(|d| (*d).to_string()).collect(),
        }
    }

    /// Install custom lists for this process. Must run before the first
    /// [`OptionLists::global`] call; returns the rejected lists otherwise.
    pub fn install(lists: OptionLists) -> Result<(), OptionLists> {
        GLOBAL.set(lists)
    }

    /// The process-wide lists, defaulting to the built-in tables
    pub fn global() -> &'static OptionLists {
        GLOBAL.get_or_init(Self::builtin)
    }

    pub fn states(&self) -> &[StateEntry] {
        &self.states
    }

    pub fn departments(&self) -> &[String] {
        &self.departments
    }

    pub fn is_known_state(&self, abbreviation: &str) -> bool {
        self.states.iter().any(|s| s.abbreviation == abbreviation)
    }

    pub fn is_known_department(&self, name: &str) -> bool {
        self.departments.iter().any(|d| d == name)
    }
}
