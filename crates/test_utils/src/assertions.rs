//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for validation results that give
//! more meaningful error messages than standard assertions.

use core_kernel::Money;
use domain_partnership::{Cost, PartnershipError, ValidationStatus, ValidationStatusError};

fn describe(errors: &[ValidationStatusError]) -> String {
    errors
        .iter()
        .map(|e| format!("{} ({})", e.error, e.location))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Asserts that a validation pass found nothing
pub fn assert_no_errors(errors: &[ValidationStatusError]) {
    assert!(errors.is_empty(), "Expected no errors, got: {}", describe(errors));
}

/// Asserts that a status is valid
pub fn assert_valid(status: &ValidationStatus) {
    assert!(
        status.is_valid,
        "Expected a valid status, got: {}",
        describe(&status.errors)
    );
    assert_no_errors(&status.errors);
}

/// Asserts that exactly one error carries the message at the location
pub fn assert_has_error(errors: &[ValidationStatusError], location: &str, message: &str) {
    let matching = errors
        .iter()
        .filter(|e| e.location == location && e.error == message)
        .count();
    assert_eq!(
        matching,
        1,
        "Expected one '{}' at {}, got: {}",
        message,
        location,
        describe(errors)
    );
}

/// Asserts the errors' locations, in the order they were reported
pub fn assert_locations(errors: &[ValidationStatusError], expected: &[&str]) {
    let actual: Vec<&str> = errors.iter().map(|e| e.location.as_str()).collect();
    assert_eq!(actual, expected, "Unexpected errors: {}", describe(errors));
}

/// Unwraps the violations of a validation failure
///
/// # Panics
///
/// Panics if the result is not a validation error
pub fn expect_validation_errors<T: std::fmt::Debug>(
    result: Result<T, PartnershipError>,
) -> Vec<ValidationStatusError> {
    match result {
        Err(PartnershipError::Validation(errors)) => errors,
        other => panic!("Expected a validation error, got {:?}", other),
    }
}

/// Unwraps the message of a service error
///
/// # Panics
///
/// Panics if the result is not a service error
pub fn expect_service_error<T: std::fmt::Debug>(result: Result<T, PartnershipError>) -> String {
    match result {
        Err(PartnershipError::Service(message)) => message,
        other => panic!("Expected a service error, got {:?}", other),
    }
}

/// Asserts that the costs are a single fee of the given amount
pub fn assert_single_fee(costs: &[Cost], fee: &Money) {
    assert_eq!(costs.len(), 1, "Expected one fee, got {:?}", costs);
    assert_eq!(costs[0].amount, fee.to_amount_string());
}
