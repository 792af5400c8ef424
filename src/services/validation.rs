use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::{FieldKind, FieldSpec};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap());

// 10 digits, leading 6-9 (regional mobile convention)
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[6-9][0-9]{9}$").unwrap());

/// Result of one validation pass. A field id appears in `errors` only
/// if it failed a check; re-validation replaces the whole mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Validation {
    pub valid: bool,
    pub errors: BTreeMap<String, String>,
}

impl Validation {
    pub fn error(&self, field_id: &str) -> Option<&str> {
        self.errors.get(field_id).map(|m| m.as_str())
    }
}

/// Checks `values` against `fields`. Per field the first failing rule
/// wins: required first, then the kind-specific check. Optional fields
/// left empty pass silently.
pub fn validate(fields: &[FieldSpec], values: &BTreeMap<String, String>) -> Validation {
    let mut errors = BTreeMap::new();

    for field in fields {
        let raw = values.get(&field.id).map(|v| v.as_str()).unwrap_or("");
        let value = raw.trim();

        if field.required && value.is_empty() {
            errors.insert(field.id.clone(), format!("{} is required", field.label));
            continue;
        }
        if value.is_empty() {
            continue;
        }

        let message = match field.kind {
            FieldKind::Text => None,
            FieldKind::Email => check_email(value),
            FieldKind::Phone => check_phone(value),
            FieldKind::Age => check_age(value),
            FieldKind::Count => check_count(value, &field.label),
        };
        if let Some(message) = message {
            errors.insert(field.id.clone(), message);
        }
    }

    Validation {
        valid: errors.is_empty(),
        errors,
    }
}

fn check_email(value: &str) -> Option<String> {
    if EMAIL_RE.is_match(value) {
        None
    } else {
        Some("Please enter a valid email (e.g. you@gmail.com)".to_string())
    }
}

fn check_phone(value: &str) -> Option<String> {
    let digits: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    if PHONE_RE.is_match(&digits) {
        None
    } else {
        Some("Please enter a valid 10-digit mobile number".to_string())
    }
}

fn check_age(value: &str) -> Option<String> {
    match value.parse::<i64>() {
        Ok(age) if (1..=120).contains(&age) => None,
        _ => Some("Please enter a valid age between 1 and 120".to_string()),
    }
}

fn check_count(value: &str, label: &str) -> Option<String> {
    match value.parse::<i64>() {
        Ok(count) if count >= 1 => None,
        _ => Some(format!("{label} must be at least 1")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_required_field_empty() {
        let fields = [FieldSpec::new("name", "Full Name", FieldKind::Text).required()];
        let result = validate(&fields, &values(&[("name", "   ")]));
        assert!(!result.valid);
        assert_eq!(result.error("name"), Some("Full Name is required"));
    }

    #[test]
    fn test_required_field_missing_from_values() {
        let fields = [FieldSpec::new("name", "Name", FieldKind::Text).required()];
        let result = validate(&fields, &values(&[]));
        assert!(!result.valid);
        assert_eq!(result.error("name"), Some("Name is required"));
    }

    #[test]
    fn test_optional_empty_email_passes() {
        let fields = [FieldSpec::new("e", "Email", FieldKind::Email)];
        let result = validate(&fields, &values(&[("e", "")]));
        assert!(result.valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_invalid_email_rejected() {
        let fields = [FieldSpec::new("e", "Email", FieldKind::Email)];
        let result = validate(&fields, &values(&[("e", "not-an-email")]));
        assert_eq!(
            result.error("e"),
            Some("Please enter a valid email (e.g. you@gmail.com)")
        );
    }

    #[test]
    fn test_valid_email_accepted() {
        let fields = [FieldSpec::new("e", "Email", FieldKind::Email).required()];
        let result = validate(&fields, &values(&[("e", "you@gmail.com")]));
        assert!(result.valid);
        let result = validate(&fields, &values(&[("e", " priya.s+book@mail.co.in ")]));
        assert!(result.valid);
    }

    #[test]
    fn test_required_beats_email_check() {
        let fields = [FieldSpec::new("e", "Email", FieldKind::Email).required()];
        let result = validate(&fields, &values(&[("e", "")]));
        assert_eq!(result.error("e"), Some("Email is required"));
    }

    #[test]
    fn test_phone_with_spaces_accepted() {
        let fields = [FieldSpec::new("p", "Phone", FieldKind::Phone).required()];
        let result = validate(&fields, &values(&[("p", "98765 43210")]));
        assert!(result.valid, "errors: {:?}", result.errors);
    }

    #[test]
    fn test_phone_rejects_bad_numbers() {
        let fields = [FieldSpec::new("p", "Phone", FieldKind::Phone)];
        for bad in ["12345 67890", "9876543", "98765432101", "abcdefghij"] {
            let result = validate(&fields, &values(&[("p", bad)]));
            assert_eq!(
                result.error("p"),
                Some("Please enter a valid 10-digit mobile number"),
                "input {bad:?}"
            );
        }
    }

    #[test]
    fn test_age_range() {
        let fields = [FieldSpec::new("age", "Age", FieldKind::Age)];
        for bad in ["150", "0", "-4", "old"] {
            let result = validate(&fields, &values(&[("age", bad)]));
            assert_eq!(
                result.error("age"),
                Some("Please enter a valid age between 1 and 120"),
                "input {bad:?}"
            );
        }
        assert!(validate(&fields, &values(&[("age", "35")])).valid);
        assert!(validate(&fields, &values(&[("age", "120")])).valid);
        // optional and empty: skipped
        assert!(validate(&fields, &values(&[("age", "")])).valid);
    }

    #[test]
    fn test_count_minimum() {
        let fields = [FieldSpec::new("travelers", "Travelers", FieldKind::Count)];
        let result = validate(&fields, &values(&[("travelers", "0")]));
        assert_eq!(result.error("travelers"), Some("Travelers must be at least 1"));
        assert!(validate(&fields, &values(&[("travelers", "2")])).valid);
    }

    #[test]
    fn test_revalidation_clears_stale_errors() {
        let fields = [FieldSpec::new("p", "Phone", FieldKind::Phone).required()];
        let first = validate(&fields, &values(&[("p", "123")]));
        assert!(!first.valid);
        let second = validate(&fields, &values(&[("p", "9876543210")]));
        assert!(second.valid);
        assert!(second.errors.is_empty());
    }

    #[test]
    fn test_idempotent() {
        let fields = [
            FieldSpec::new("name", "Name", FieldKind::Text).required(),
            FieldSpec::new("e", "Email", FieldKind::Email),
            FieldSpec::new("age", "Age", FieldKind::Age),
        ];
        let input = values(&[("name", ""), ("e", "nope"), ("age", "200")]);
        let a = validate(&fields, &input);
        let b = validate(&fields, &input);
        assert_eq!(a, b);
        assert_eq!(a.errors.len(), 3);
    }
}
