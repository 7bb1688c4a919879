//! Business-rule validation
//!
//! Validators never mutate state. Partial, remove and update validation
//! fail with a single [`PartnershipError::Validation`](crate::PartnershipError)
//! carrying every violation found in one pass; full validation returns the
//! list instead of failing.

pub mod constraints;
pub mod general_partner;
pub mod limited_partner;
pub mod messages;
pub mod partner;
pub mod partnership;
pub mod status;

pub use constraints::FieldConstraints;
pub use general_partner::GeneralPartnerValidator;
pub use limited_partner::LimitedPartnerValidator;
pub use partner::PartnerValidator;
pub use partnership::LimitedPartnershipValidator;
pub use status::{ValidationStatus, ValidationStatusError};
