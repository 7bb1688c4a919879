//! Core Kernel - Foundational types for the limited partnerships service
//!
//! This crate provides the building blocks shared by the domain and API crates:
//! - Money types with precise decimal arithmetic (filing fees, contribution currencies)
//! - Calendar helpers for "in the past" date rules
//! - Typed identifiers for submission resources
//! - Port error and marker traits for external collaborators

pub mod money;
pub mod calendar;
pub mod identifiers;
pub mod ports;

pub use money::{Money, Currency, MoneyError};
pub use identifiers::{IncorporationId, PartnershipId, GeneralPartnerId, LimitedPartnerId};
pub use ports::{
    PortError, DomainPort, AdapterHealth, HealthCheckable, HealthCheckResult,
    OperationMetadata,
};
