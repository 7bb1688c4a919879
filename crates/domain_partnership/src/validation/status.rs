//! Uniform validation error records
//!
//! Every violation, whatever rule produced it, is reported as an
//! `{error, location}` pair where the location is the dotted json-path of
//! the offending field.

use serde::{Deserialize, Serialize};

/// A single violation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationStatusError {
    pub error: String,
    pub location: String,
    pub location_type: String,
    #[serde(rename = "type")]
    pub error_type: String,
}

impl ValidationStatusError {
    pub fn new(message: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            location: location.into(),
            location_type: "json-path".to_string(),
            error_type: "ch:validation".to_string(),
        }
    }
}

/// Outcome of a validation pass
///
/// Errors keep the order in which the rules were evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationStatus {
    pub errors: Vec<ValidationStatusError>,
    pub is_valid: bool,
}

impl ValidationStatus {
    /// Creates a passing status
    pub fn ok() -> Self {
        Self {
            errors: Vec::new(),
            is_valid: true,
        }
    }

    /// Builds a status from zero or more violations
    pub fn collect(errors: impl IntoIterator<Item = ValidationStatusError>) -> Self {
        let mut status = Self::ok();
        status.extend(errors);
        status
    }

    /// Adds an error to the status
    pub fn add_error(&mut self, message: impl Into<String>, location: impl Into<String>) {
        self.push(ValidationStatusError::new(message, location));
    }

    pub fn push(&mut self, error: ValidationStatusError) {
        self.errors.push(error);
        self.is_valid = false;
    }

    pub fn extend(&mut self, errors: impl IntoIterator<Item = ValidationStatusError>) {
        for error in errors {
            self.push(error);
        }
    }

    /// Merges another status into this one
    pub fn merge(&mut self, other: ValidationStatus) {
        if !other.is_valid {
            self.is_valid = false;
        }
        self.errors.extend(other.errors);
    }

    pub fn into_errors(self) -> Vec<ValidationStatusError> {
        self.errors
    }
}

impl Default for ValidationStatus {
    fn default() -> Self {
        Self::ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_shape() {
        let error = ValidationStatusError::new("Cease date is required", "data.ceaseDate");
        let value = serde_json::to_value(&error).unwrap();
        assert_eq!(value["error"], "Cease date is required");
        assert_eq!(value["location"], "data.ceaseDate");
        assert_eq!(value["location_type"], "json-path");
        assert_eq!(value["type"], "ch:validation");
    }

    #[test]
    fn test_collect_keeps_order() {
        let status = ValidationStatus::collect(vec![
            ValidationStatusError::new("first", "data.a"),
            ValidationStatusError::new("second", "data.b"),
        ]);
        assert!(!status.is_valid);
        let messages: Vec<_> = status.errors.iter().map(|e| e.error.as_str()).collect();
        assert_eq!(messages, vec!["first", "second"]);
    }

    #[test]
    fn test_collect_nothing_is_valid() {
        assert!(ValidationStatus::collect(Vec::new()).is_valid);
    }

    #[test]
    fn test_merge() {
        let mut status = ValidationStatus::ok();
        let mut other = ValidationStatus::ok();
        other.add_error("Email is required", "data.email");
        status.merge(other);
        assert!(!status.is_valid);
        assert_eq!(status.errors.len(), 1);
    }
}
