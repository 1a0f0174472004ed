//! Field identifiers for the intake form

use serde::{Deserialize, Serialize};
use std::fmt;

/// One editable field of the employee draft
///
/// The generated `id` is deliberately not listed: it is assigned at draft
/// creation and never edited. Declaration order is the form's visual order
/// and drives [`Ord`], so diagnostics iterate in render order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    BirthDate,
    StartDate,
    Street,
    City,
    State,
    Zip,
    Department,
}

impl Field {
    /// Every editable field, in form order
    pub const ALL: [Field; 9] = [
        Field::FirstName,
        Field::LastName,
        Field::BirthDate,
        Field::StartDate,
        Field::Street,
        Field::City,
        Field::State,
        Field::Zip,
        Field::Department,
    ];

    /// Wire name, as the form submits it
    pub const fn as_str(&self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::BirthDate => "birthDate",
            Field::StartDate => "startDate",
            Field::Street => "street",
            Field::City => "city",
            Field::State => "state",
            Field::Zip => "zip",
            Field::Department => "department",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
