//! Rule chains for the employee intake form
//!
//! Mirrors the form's declared chains: identity/address text fields check
//! min length, max length, required, pattern in that order; `state` and
//! `department` are required-only; `zip` runs the numeric chain; the date
//! fields are unconstrained.

use super::rule::{first_failure, Rule};
use shared::error::{FieldErrors, ValidationCode};
use shared::models::{EmployeeDraft, EmployeeRecord, Field};

const NAME_RULES: [Rule; 4] = [
    Rule::check(ValidationCode::TooShort, at_least_two),
    Rule::check(ValidationCode::TooLong, at_most_twenty),
    Rule::required(),
    Rule::check(ValidationCode::PatternMismatch, letters_only),
];

const REQUIRED_ONLY: [Rule; 1] = [Rule::required()];

const ZIP_RULES: [Rule; 7] = [
    Rule::check(ValidationCode::NotANumber, is_number),
    Rule::check(ValidationCode::WrongDigitCount, has_five_digits),
    Rule::check(ValidationCode::TooSmall, above_lower_bound),
    Rule::check(ValidationCode::TooLarge, below_upper_bound),
    Rule::check(ValidationCode::NotPositive, is_positive),
    Rule::check(ValidationCode::NotInteger, is_integral),
    Rule::required(),
];

/// Chain for one field; `None` for the unconstrained date fields
fn rules_for(field: Field) -> Option<&'static [Rule]> {
    match field {
        Field::FirstName | Field::LastName | Field::Street | Field::City => Some(&NAME_RULES),
        Field::State | Field::Department => Some(&REQUIRED_ONLY),
        Field::Zip => Some(&ZIP_RULES),
        Field::BirthDate | Field::StartDate => None,
    }
}

/// Validate the whole draft.
///
/// Pure: every constrained field is checked independently against its chain
/// and the first failing rule supplies that field's diagnostic. An empty
/// mapping is the accept verdict.
pub fn validate(draft: &EmployeeDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for field in Field::ALL {
        let Some(rules) = rules_for(field) else {
            continue;
        };
        let value = draft.text(field).and_then(present);
        if let Some(code) = first_failure(rules, value) {
            errors.insert(field, code);
        }
    }
    errors
}

/// Seal a draft into the record that crosses the acceptance boundary.
///
/// Rejects with the full diagnostics mapping when any rule fails; drafts
/// are never forwarded partially valid.
pub fn seal(draft: &EmployeeDraft) -> Result<EmployeeRecord, FieldErrors> {
    let errors = validate(draft);
    if !errors.is_valid() {
        return Err(errors);
    }

    let zip = match parse_number(&draft.zip) {
        Some(v) => v as u32,
        None => {
            let mut errors = FieldErrors::new();
            errors.insert(Field::Zip, ValidationCode::NotANumber);
            return Err(errors);
        }
    };

    Ok(EmployeeRecord {
        id: draft.id.clone(),
        first_name: draft.first_name.clone(),
        last_name: draft.last_name.clone(),
        birth_date: draft.birth_date,
        start_date: draft.start_date,
        street: draft.street.clone(),
        city: draft.city.clone(),
        state: draft.state.clone(),
        zip,
        department: draft.department.clone(),
    })
}

/// Empty input counts as absent; only the Required rule may fail it
fn present(value: &str) -> Option<&str> {
    if value.is_empty() { None } else { Some(value) }
}

// ==================== Text checks ====================

fn at_least_two(value: &str) -> bool {
    value.chars().count() >= 2
}

fn at_most_twenty(value: &str) -> bool {
    value.chars().count() <= 20
}

fn letters_only(value: &str) -> bool {
    value.chars().all(|c| c.is_ascii_alphabetic())
}

// ==================== Zip checks ====================

fn parse_number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn is_number(value: &str) -> bool {
    parse_number(value).is_some()
}

/// Digit count is judged against the canonical zero-padded form: zips below
/// 10000 print with leading zeros ("01002"), so only values wider than five
/// digits fail this rule.
fn has_five_digits(value: &str) -> bool {
    let Some(v) = parse_number(value) else {
        return true;
    };
    format!("{:05}", v.trunc().abs() as u64).chars().count() == 5
}

fn above_lower_bound(value: &str) -> bool {
    parse_number(value).is_none_or(|v| v > 1001.0)
}

fn below_upper_bound(value: &str) -> bool {
    parse_number(value).is_none_or(|v| v < 99950.0)
}

fn is_positive(value: &str) -> bool {
    parse_number(value).is_none_or(|v| v > 0.0)
}

fn is_integral(value: &str) -> bool {
    parse_number(value).is_none_or(|v| v.fract() == 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::FieldValue;

    fn filled_draft() -> EmployeeDraft {
        let mut draft = EmployeeDraft::new();
        draft.set(Field::FirstName, "Jane".into());
        draft.set(Field::LastName, "Doe".into());
        draft.set(Field::Street, "Elm".into());
        draft.set(Field::City, "Paris".into());
        draft.set(Field::State, "CA".into());
        draft.set(Field::Zip, "12345".into());
        draft.set(Field::Department, "Engineering".into());
        draft
    }

    // ========================================================================
    // Accept verdicts
    // ========================================================================

    #[test]
    fn filled_draft_is_valid() {
        assert!(validate(&filled_draft()).is_valid());
    }

    #[test]
    fn dates_are_unconstrained() {
        let mut draft = filled_draft();
        assert!(validate(&draft).is_valid());

        draft.set(Field::BirthDate, "1990-04-23".into());
        draft.set(Field::StartDate, FieldValue::Date(None));
        assert!(validate(&draft).is_valid());
    }

    // ========================================================================
    // Text field boundaries
    // ========================================================================

    #[test]
    fn two_character_name_is_valid() {
        let mut draft = filled_draft();
        draft.set(Field::FirstName, "Al".into());
        assert!(validate(&draft).is_valid());
    }

    #[test]
    fn one_character_name_is_too_short() {
        let mut draft = filled_draft();
        draft.set(Field::FirstName, "A".into());
        assert_eq!(
            validate(&draft).get(Field::FirstName),
            Some(ValidationCode::TooShort)
        );
    }

    #[test]
    fn twenty_one_character_name_is_too_long() {
        let mut draft = filled_draft();
        draft.set(Field::Street, "a".repeat(21).into());
        assert_eq!(
            validate(&draft).get(Field::Street),
            Some(ValidationCode::TooLong)
        );
    }

    #[test]
    fn digits_in_a_name_mismatch_the_pattern() {
        let mut draft = filled_draft();
        draft.set(Field::FirstName, "Jane2".into());
        assert_eq!(
            validate(&draft).get(Field::FirstName),
            Some(ValidationCode::PatternMismatch)
        );
    }

    #[test]
    fn short_rule_beats_pattern_rule() {
        // "1" fails min-length and pattern; min-length is declared first
        let mut draft = filled_draft();
        draft.set(Field::City, "1".into());
        assert_eq!(
            validate(&draft).get(Field::City),
            Some(ValidationCode::TooShort)
        );
    }

    // ========================================================================
    // Required fields
    // ========================================================================

    #[test]
    fn every_missing_required_field_reports_required() {
        let errors = validate(&EmployeeDraft::new());

        for field in [
            Field::FirstName,
            Field::LastName,
            Field::Street,
            Field::City,
            Field::State,
            Field::Zip,
            Field::Department,
        ] {
            assert_eq!(
                errors.get(field),
                Some(ValidationCode::Required),
                "{field} should be required"
            );
        }
        assert_eq!(errors.get(Field::BirthDate), None);
        assert_eq!(errors.get(Field::StartDate), None);
    }

    // ========================================================================
    // Zip boundaries
    // ========================================================================

    #[test]
    fn zip_1001_is_too_small() {
        let mut draft = filled_draft();
        draft.set(Field::Zip, "1001".into());
        assert_eq!(validate(&draft).get(Field::Zip), Some(ValidationCode::TooSmall));
    }

    #[test]
    fn zip_1002_is_valid() {
        let mut draft = filled_draft();
        draft.set(Field::Zip, "1002".into());
        assert!(validate(&draft).is_valid());
    }

    #[test]
    fn zip_99949_is_valid() {
        let mut draft = filled_draft();
        draft.set(Field::Zip, "99949".into());
        assert!(validate(&draft).is_valid());
    }

    #[test]
    fn zip_99950_is_too_large() {
        let mut draft = filled_draft();
        draft.set(Field::Zip, "99950".into());
        assert_eq!(validate(&draft).get(Field::Zip), Some(ValidationCode::TooLarge));
    }

    #[test]
    fn six_digit_zip_has_wrong_digit_count() {
        let mut draft = filled_draft();
        draft.set(Field::Zip, "123456".into());
        assert_eq!(
            validate(&draft).get(Field::Zip),
            Some(ValidationCode::WrongDigitCount)
        );
    }

    #[test]
    fn non_numeric_zip_is_not_a_number() {
        let mut draft = filled_draft();
        draft.set(Field::Zip, "abcde".into());
        assert_eq!(
            validate(&draft).get(Field::Zip),
            Some(ValidationCode::NotANumber)
        );
    }

    #[test]
    fn fractional_zip_is_not_integral() {
        let mut draft = filled_draft();
        draft.set(Field::Zip, "12345.5".into());
        assert_eq!(
            validate(&draft).get(Field::Zip),
            Some(ValidationCode::NotInteger)
        );
    }

    #[test]
    fn negative_zip_fails_the_lower_bound_first() {
        let mut draft = filled_draft();
        draft.set(Field::Zip, "-12345".into());
        assert_eq!(validate(&draft).get(Field::Zip), Some(ValidationCode::TooSmall));
    }

    // ========================================================================
    // Sealing
    // ========================================================================

    #[test]
    fn seal_carries_every_field_and_parses_zip() {
        let draft = filled_draft();
        let record = seal(&draft).unwrap();

        assert_eq!(record.id, draft.id);
        assert_eq!(record.first_name, "Jane");
        assert_eq!(record.last_name, "Doe");
        assert_eq!(record.street, "Elm");
        assert_eq!(record.city, "Paris");
        assert_eq!(record.state, "CA");
        assert_eq!(record.zip, 12345);
        assert_eq!(record.department, "Engineering");
    }

    #[test]
    fn seal_rejects_invalid_drafts_with_diagnostics() {
        let mut draft = filled_draft();
        draft.set(Field::Department, "".into());

        let errors = seal(&draft).unwrap_err();
        assert_eq!(errors.get(Field::Department), Some(ValidationCode::Required));
    }
}
