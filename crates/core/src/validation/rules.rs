//! Violation types and single-field rule helpers.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// A single field-level rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub rule_type: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(
        field: impl Into<String>,
        rule_type: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            rule_type: rule_type.into(),
            message: message.into(),
        }
    }
}

/// Accumulates violations across every rule of a validator.
///
/// Rules never short-circuit each other: a record with three bad fields
/// reports three messages.
#[derive(Debug, Default, Clone)]
pub struct Violations {
    items: Vec<FieldViolation>,
}

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &str, rule_type: &str, message: &str) {
        self.items.push(FieldViolation::new(field, rule_type, message));
    }

    pub fn extend(&mut self, other: Violations) {
        self.items.extend(other.items);
    }

    /// Push a `required` violation when `value` is absent or empty.
    ///
    /// Returns `true` when the value is present, so callers can skip
    /// follow-up rules that only make sense for non-empty input.
    pub fn required(&mut self, field: &str, value: Option<&str>, message: &str) -> bool {
        match value {
            Some(v) if !v.is_empty() => true,
            _ => {
                self.push(field, "required", message);
                false
            }
        }
    }

    /// Push a `max_length` violation when `value` exceeds `max` characters.
    pub fn max_chars(&mut self, field: &str, value: Option<&str>, max: usize, message: &str) {
        if value.is_some_and(|v| char_len(v) > max) {
            self.push(field, "max_length", message);
        }
    }

    /// Push a `min_length` violation when a non-empty `value` is shorter than
    /// `min` characters.
    pub fn min_chars(&mut self, field: &str, value: Option<&str>, min: usize, message: &str) {
        if value.is_some_and(|v| !v.is_empty() && char_len(v) < min) {
            self.push(field, "min_length", message);
        }
    }

    /// Push a `regex_pattern` violation when a present `value` does not match.
    pub fn pattern(&mut self, field: &str, value: Option<&str>, re: &Regex, message: &str) {
        if value.is_some_and(|v| !re.is_match(v)) {
            self.push(field, "regex_pattern", message);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldViolation> {
        self.items.iter()
    }

    pub fn into_vec(self) -> Vec<FieldViolation> {
        self.items
    }
}

/// Length in Unicode scalar values, not bytes.
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}
