//! Rule evaluator — pure logic over a [`FormFields`] value.

use validator::ValidateEmail;

use super::rules::{Shape, ValidationErrors, Violation, FIRST_NAME_MIN_LEN};
use crate::fields::FormFields;
use crate::types::Field;

/// Evaluate every rule against the given fields.
///
/// Rules are independent and all of them run on each call, so any subset of
/// the required fields can be reported at once. `message` is never checked.
pub fn evaluate(fields: &FormFields) -> ValidationErrors {
    let violations = Field::ALL
        .into_iter()
        .filter_map(|field| evaluate_field(field, fields.get(field)))
        .collect();
    ValidationErrors::from_violations(violations)
}

/// Evaluate the rules attached to a single field.
pub fn evaluate_field(field: Field, value: &str) -> Option<Violation> {
    match field {
        Field::FirstName => evaluate_required(field, value)
            .or_else(|| evaluate_min_length(field, value, FIRST_NAME_MIN_LEN)),
        Field::LastName => evaluate_required(field, value),
        Field::Email => evaluate_required(field, value).or_else(|| evaluate_email(field, value)),
        Field::Message => None,
    }
}

fn evaluate_required(field: Field, value: &str) -> Option<Violation> {
    if value.trim().is_empty() {
        Some(Violation::RequiredFieldMissing(field))
    } else {
        None
    }
}

fn evaluate_min_length(field: Field, value: &str, min: usize) -> Option<Violation> {
    if value.trim().chars().count() < min {
        Some(Violation::MinLengthViolation { field, min })
    } else {
        None
    }
}

fn evaluate_email(field: Field, value: &str) -> Option<Violation> {
    if value.trim().validate_email() {
        None
    } else {
        Some(Violation::InvalidFormat {
            field,
            shape: Shape::EmailAddress,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn fields(first: &str, last: &str, email: &str, message: &str) -> FormFields {
        FormFields {
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn valid_fields_pass() {
        let result = evaluate(&fields("Micky", "Johnson", "MickJohn@gmail.com", ""));
        assert!(result.is_empty());
    }

    #[test]
    fn short_first_name_is_the_only_violation() {
        for first in ["s", "sa", "sam", "samy", "  sam  "] {
            let result = evaluate(&fields(first, "Smithson", "sam@gmail.com", ""));
            assert_eq!(result.len(), 1, "first name {first:?}");
            assert_matches!(
                result.for_field(Field::FirstName),
                Some(Violation::MinLengthViolation { min: 5, .. })
            );
        }
    }

    #[test]
    fn first_name_length_counts_characters_not_bytes() {
        let result = evaluate(&fields("Zoë", "Smithson", "z@gmail.com", ""));
        assert_matches!(
            result.for_field(Field::FirstName),
            Some(Violation::MinLengthViolation { .. })
        );
        let result = evaluate(&fields("Chloë", "Smithson", "c@gmail.com", ""));
        assert!(result.is_empty());
    }

    #[test]
    fn blank_fields_report_three_violations() {
        let result = evaluate(&fields(" ", "  ", "   ", ""));
        assert_eq!(result.len(), 3);
        for field in [Field::FirstName, Field::LastName, Field::Email] {
            assert_matches!(
                result.for_field(field),
                Some(Violation::RequiredFieldMissing(f)) if *f == field
            );
        }
        assert!(result.for_field(Field::Message).is_none());
    }

    #[test]
    fn blank_email_is_required_violation() {
        let result = evaluate(&fields("Samantha", "Smithson", " ", ""));
        assert_eq!(result.len(), 1);
        assert_eq!(
            result.for_field(Field::Email).unwrap().message(),
            "email is a required field"
        );
    }

    #[test]
    fn malformed_email_is_format_violation() {
        let result = evaluate(&fields("Samantha", "Smithson", "sophie", ""));
        assert_eq!(result.len(), 1);
        assert_eq!(
            result.for_field(Field::Email).unwrap().message(),
            "email must be a valid email address"
        );
    }

    #[test]
    fn missing_last_name_is_required_violation() {
        let result = evaluate(&fields("Samantha", "", "sophie@gmail.com", ""));
        assert_eq!(result.len(), 1);
        assert_eq!(
            result.for_field(Field::LastName).unwrap().message(),
            "lastName is a required field"
        );
    }

    #[test]
    fn whitespace_only_last_name_is_missing() {
        for last in ["  ", "\t\n", "\u{a0}"] {
            let result = evaluate(&fields("Samantha", last, "sophie@gmail.com", ""));
            assert_eq!(result.len(), 1, "last name {last:?}");
            assert_matches!(
                result.for_field(Field::LastName),
                Some(Violation::RequiredFieldMissing(Field::LastName))
            );
        }
    }

    #[test]
    fn email_domain_without_dot_is_accepted() {
        assert_eq!(evaluate_field(Field::Email, "a@b"), None);
        assert_matches!(
            evaluate_field(Field::Email, "a@"),
            Some(Violation::InvalidFormat { .. })
        );
    }

    #[test]
    fn message_is_never_validated() {
        assert_eq!(evaluate_field(Field::Message, ""), None);
        assert_eq!(evaluate_field(Field::Message, "   "), None);
    }

    #[test]
    fn evaluation_is_deterministic() {
        let input = fields("sam", "", "sophie", "hello");
        assert_eq!(evaluate(&input), evaluate(&input));
    }
}
