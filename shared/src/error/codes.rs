//! Unified validation diagnostic codes
//!
//! One code per failed field rule. Codes are organized by category:
//! - 1xxx: presence
//! - 2xxx: text shape
//! - 3xxx: numeric shape

use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-field validation diagnostic code
///
/// Codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ValidationCode {
    // ==================== 1xxx: Presence ====================
    /// Required field is empty or absent
    Required = 1001,

    // ==================== 2xxx: Text shape ====================
    /// Value is shorter than the minimum length
    TooShort = 2001,
    /// Value is longer than the maximum length
    TooLong = 2002,
    /// Value contains characters outside the allowed set
    PatternMismatch = 2003,

    // ==================== 3xxx: Numeric shape ====================
    /// Value does not parse as a number
    NotANumber = 3001,
    /// Value does not have exactly five digits
    WrongDigitCount = 3002,
    /// Value is at or below the lower bound
    TooSmall = 3003,
    /// Value is at or above the upper bound
    TooLarge = 3004,
    /// Value is zero or negative
    NotPositive = 3005,
    /// Value has a fractional part
    NotInteger = 3006,
}

impl ValidationCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the user-facing English message for this diagnostic
    pub const fn message(&self) -> &'static str {
        match self {
            // Presence
            ValidationCode::Required => "Required",

            // Text shape
            ValidationCode::TooShort => "Must be at least 2 characters",
            ValidationCode::TooLong => "Must be less than 20 characters",
            ValidationCode::PatternMismatch => "Only letters are allowed",

            // Numeric shape
            ValidationCode::NotANumber => "Must be a number",
            ValidationCode::WrongDigitCount => "Must be 5 digits",
            ValidationCode::TooSmall => "Cannot be less than 01001",
            ValidationCode::TooLarge => "Cannot be more than 99950",
            ValidationCode::NotPositive => "Cannot be a negative number",
            ValidationCode::NotInteger => "Must be a whole number",
        }
    }
}

impl fmt::Display for ValidationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl From<ValidationCode> for u16 {
    #[inline]
    fn from(code: ValidationCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ValidationCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidValidationCode(pub u16);

impl fmt::Display for InvalidValidationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid validation code: {}", self.0)
    }
}

impl std::error::Error for InvalidValidationCode {}

impl TryFrom<u16> for ValidationCode {
    type Error = InvalidValidationCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // Presence
            1001 => Ok(ValidationCode::Required),

            // Text shape
            2001 => Ok(ValidationCode::TooShort),
            2002 => Ok(ValidationCode::TooLong),
            2003 => Ok(ValidationCode::PatternMismatch),

            // Numeric shape
            3001 => Ok(ValidationCode::NotANumber),
            3002 => Ok(ValidationCode::WrongDigitCount),
            3003 => Ok(ValidationCode::TooSmall),
            3004 => Ok(ValidationCode::TooLarge),
            3005 => Ok(ValidationCode::NotPositive),
            3006 => Ok(ValidationCode::NotInteger),

            other => Err(InvalidValidationCode(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [ValidationCode; 10] = [
        ValidationCode::Required,
        ValidationCode::TooShort,
        ValidationCode::TooLong,
        ValidationCode::PatternMismatch,
        ValidationCode::NotANumber,
        ValidationCode::WrongDigitCount,
        ValidationCode::TooSmall,
        ValidationCode::TooLarge,
        ValidationCode::NotPositive,
        ValidationCode::NotInteger,
    ];

    #[test]
    fn numeric_round_trip() {
        for code in ALL {
            let n: u16 = code.into();
            assert_eq!(ValidationCode::try_from(n), Ok(code));
        }
    }

    #[test]
    fn unknown_code_is_rejected() {
        assert_eq!(ValidationCode::try_from(42), Err(InvalidValidationCode(42)));
    }

    #[test]
    fn serde_uses_numeric_value() {
        let json = serde_json::to_string(&ValidationCode::TooSmall).unwrap();
        assert_eq!(json, "3003");
        let back: ValidationCode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ValidationCode::TooSmall);
    }
}
