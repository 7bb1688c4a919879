//! Tests for port and money errors

use core_kernel::money::MoneyError;
use core_kernel::ports::PortError;

#[test]
fn test_port_error_display_names_entity() {
    let error = PortError::not_found("Transaction", "txn-123");
    assert_eq!(error.to_string(), "Not found: Transaction with id txn-123");
    assert!(error.is_not_found());
}

#[test]
fn test_conflict_display() {
    let error = PortError::conflict("Submission gp-1 already exists");
    assert_eq!(error.to_string(), "Conflict: Submission gp-1 already exists");
    assert!(!error.is_not_found());
}

#[test]
fn test_money_error_display() {
    assert_eq!(
        MoneyError::InvalidAmount("ten".to_string()).to_string(),
        "Invalid amount: ten"
    );
    assert_eq!(
        MoneyError::UnknownCurrency("ABC".to_string()).to_string(),
        "Unknown currency: ABC"
    );
}
