//! Partnership domain errors
//!
//! Field-validation errors and malformed requests are the filer's to
//! correct; service errors come from misconfiguration or failing
//! collaborators.

use core_kernel::PortError;
use thiserror::Error;

use crate::validation::ValidationStatusError;

/// Errors that can occur in the partnership domain
#[derive(Debug, Error)]
pub enum PartnershipError {
    /// One pass of validation found at least one violation
    #[error("Validation failed with {} error(s)", .0.len())]
    Validation(Vec<ValidationStatusError>),

    /// Unexpected or configuration-level failure
    #[error("{0}")]
    Service(String),

    /// A request the filer can correct that never reached validation,
    /// such as a patch producing mixed partner data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The submission does not exist or is not linked to the transaction
    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    /// An external collaborator failed
    #[error(transparent)]
    Port(#[from] PortError),
}

impl PartnershipError {
    /// Creates a Service error with a message
    pub fn service(message: impl Into<String>) -> Self {
        PartnershipError::Service(message.into())
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        PartnershipError::InvalidRequest(message.into())
    }

    /// Creates a ResourceNotFound error for a submission id
    pub fn not_found(id: impl std::fmt::Display) -> Self {
        PartnershipError::ResourceNotFound(id.to_string())
    }

    /// Turns a list of violations into an error, or `Ok` when there are none
    pub fn check(errors: Vec<ValidationStatusError>) -> Result<(), Self> {
        if errors.is_empty() {
            Ok(())
        } else {
            Err(PartnershipError::Validation(errors))
        }
    }

    /// The violations carried by a validation error
    pub fn validation_errors(&self) -> Option<&[ValidationStatusError]> {
        match self {
            PartnershipError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}
