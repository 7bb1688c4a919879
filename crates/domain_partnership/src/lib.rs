//! Limited Partnership Domain
//!
//! This crate implements the business rules for registering, transitioning
//! and changing limited partnerships through transaction-based incremental
//! submissions.
//!
//! # Architecture
//!
//! The domain layer is infrastructure-agnostic:
//! - **Data**: partnership, general partner and limited partner submissions
//! - **Validation**: field constraints plus per-resource rule groups
//! - **Strategies**: one validation and cost policy per post-transition kind
//! - **Ports**: company profiles, transactions and the submission store
//! - **Services**: create, read, update, delete and pre-close validation
//!
//! # Filing Modes
//!
//! ```text
//! limited-partnership-registration     -> incorporation + partnership + partners
//! limited-partnership-transition       -> incorporation + partnership + partners
//! limited-partnership-post-transition  -> one change, dispatched by kind
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_partnership::{GeneralPartnerValidator, Transaction, FilingMode};
//!
//! let validator = GeneralPartnerValidator::new(company_profiles);
//! let transaction = Transaction::new("txn-1", FilingMode::Registration);
//! let errors = validator.validate_full(&general_partner, &transaction, false).await?;
//! assert!(errors.is_empty());
//! ```

#[macro_use]
pub mod described;

pub mod address;
pub mod adapters;
pub mod cost;
pub mod country;
pub mod error;
pub mod incorporation;
pub mod kind;
pub mod nationality;
pub mod partner;
pub mod partnership;
pub mod ports;
pub mod services;
pub mod strategy;
pub mod transaction;
pub mod types;
pub mod validation;

pub use address::Address;
pub use cost::{Cost, CostsConfig};
pub use country::Country;
pub use described::Described;
pub use error::PartnershipError;
pub use incorporation::IncorporationData;
pub use kind::{ChangeAction, KindSubject, PostTransitionKind};
pub use nationality::Nationality;
pub use partner::{
    GeneralPartnerData, LegalEntityDetails, LimitedPartnerData, PartnerData, PartnerSubject,
    PersonDetails,
};
pub use partnership::PartnershipData;
pub use ports::{CompanyProfile, CompanyProfilePort, Submission, SubmissionRepository, TransactionPort};
pub use services::{
    CostsService, FilingApi, FilingData, FilingsService, GeneralPartnerService,
    IncorporationService, LimitedPartnerService, PartnershipPorts, PartnershipService,
    PartnershipServices, ResourceView,
};
pub use strategy::{PostTransitionEntity, PostTransitionStrategy, StrategyDispatcher};
pub use transaction::{Transaction, TransactionResource};
pub use types::{
    ContributionSubType, FilingMode, IncorporationKind, Jurisdiction, PartnershipNameEnding,
    PartnershipType, Term,
};
pub use validation::{
    FieldConstraints, GeneralPartnerValidator, LimitedPartnerValidator,
    LimitedPartnershipValidator, PartnerValidator, ValidationStatus, ValidationStatusError,
};
