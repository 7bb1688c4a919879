//! Adapters for the partnership domain ports
//!
//! # Available Adapters
//!
//! - **InMemoryCompanyProfiles**: company profile lookup
//! - **InMemoryTransactions**: transaction resource links
//! - **InMemorySubmissions**: document store for any submission type

pub mod memory;

pub use memory::{InMemoryCompanyProfiles, InMemorySubmissions, InMemoryTransactions};
