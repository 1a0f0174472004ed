//! Predicate+code rules and first-failure-wins chains

use shared::error::ValidationCode;

/// One rule in a field's chain: a diagnostic code and the check that
/// guards it.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    code: ValidationCode,
    kind: RuleKind,
}

#[derive(Debug, Clone, Copy)]
enum RuleKind {
    /// Fails when the field is absent/empty; present values always pass
    Required,
    /// Runs on present values only; absent values pass, so that a missing
    /// required field reports `Required` no matter where the shape rules
    /// sit in the chain
    Check(fn(&str) -> bool),
}

impl Rule {
    /// The field must be present and non-empty
    pub const fn required() -> Self {
        Self {
            code: ValidationCode::Required,
            kind: RuleKind::Required,
        }
    }

    /// The present value must satisfy `check`
    pub const fn check(code: ValidationCode, check: fn(&str) -> bool) -> Self {
        Self {
            code,
            kind: RuleKind::Check(check),
        }
    }

    /// Diagnostic for this rule against one field value, if it fails
    pub fn apply(&self, value: Option<&str>) -> Option<ValidationCode> {
        let passed = match (self.kind, value) {
            (RuleKind::Required, None) => false,
            (RuleKind::Required, Some(_)) => true,
            (RuleKind::Check(_), None) => true,
            (RuleKind::Check(check), Some(v)) => check(v),
        };
        if passed { None } else { Some(self.code) }
    }
}

/// Evaluate a chain in declared order; the first failing rule supplies the
/// field's diagnostic.
pub fn first_failure(rules: &[Rule], value: Option<&str>) -> Option<ValidationCode> {
    rules.iter().find_map(|rule| rule.apply(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_alpha(s: &str) -> bool {
        s.chars().all(|c| c.is_ascii_alphabetic())
    }

    fn min_two(s: &str) -> bool {
        s.chars().count() >= 2
    }

    const CHAIN: [Rule; 3] = [
        Rule::check(ValidationCode::TooShort, min_two),
        Rule::required(),
        Rule::check(ValidationCode::PatternMismatch, all_alpha),
    ];

    #[test]
    fn declared_order_decides_the_diagnostic() {
        // "1" fails both min-length and pattern; min-length is declared first
        assert_eq!(
            first_failure(&CHAIN, Some("1")),
            Some(ValidationCode::TooShort)
        );
        assert_eq!(
            first_failure(&CHAIN, Some("r2d2")),
            Some(ValidationCode::PatternMismatch)
        );
    }

    #[test]
    fn shape_rules_skip_absent_values() {
        // Missing input reports Required even though TooShort sits earlier
        assert_eq!(
            first_failure(&CHAIN, None),
            Some(ValidationCode::Required)
        );
    }

    #[test]
    fn passing_value_yields_no_diagnostic() {
        assert_eq!(first_failure(&CHAIN, Some("Al")), None);
    }
}
