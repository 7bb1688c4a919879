//! Partnership Domain Ports
//!
//! The validation core needs three collaborators it does not own: the
//! company profile service (for incorporation dates), the transactions
//! service (which links sub-resources to a filing) and a document store for
//! the submissions themselves. Each is a port trait; adapters live in
//! [`crate::adapters`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_partnership::ports::CompanyProfilePort;
//! use std::sync::Arc;
//!
//! pub struct PartnerValidator {
//!     company_profiles: Arc<dyn CompanyProfilePort>,
//! }
//! ```

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{DomainPort, OperationMetadata, PortError};

use crate::transaction::{Transaction, TransactionResource};

/// The registry's view of an incorporated company
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub company_number: String,
    pub company_name: String,
    pub date_of_creation: NaiveDate,
}

/// Lookup of incorporated companies
#[async_trait]
pub trait CompanyProfilePort: DomainPort {
    /// Retrieves the profile of a company
    ///
    /// Returns `PortError::NotFound` for an unknown company number.
    async fn get_company_profile(&self, company_number: &str) -> Result<CompanyProfile, PortError>;
}

/// The externally owned transactions service
#[async_trait]
pub trait TransactionPort: DomainPort {
    async fn get_transaction(&self, transaction_id: &str) -> Result<Transaction, PortError>;

    /// Links a sub-resource to the transaction under `uri`
    async fn add_resource(
        &self,
        transaction_id: &str,
        uri: &str,
        resource: TransactionResource,
        metadata: Option<OperationMetadata>,
    ) -> Result<Transaction, PortError>;

    /// Unlinks the sub-resource at `uri`
    async fn remove_resource(
        &self,
        transaction_id: &str,
        uri: &str,
        metadata: Option<OperationMetadata>,
    ) -> Result<Transaction, PortError>;
}

/// A stored sub-resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission<T> {
    pub id: String,
    pub transaction_id: String,
    pub data: T,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Option<String>,
}

impl<T> Submission<T> {
    pub fn new(id: impl Into<String>, transaction_id: impl Into<String>, data: T) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            transaction_id: transaction_id.into(),
            data,
            created_at: now,
            updated_at: now,
            created_by: None,
        }
    }

    /// Records the user who created the submission
    pub fn created_by(mut self, metadata: &OperationMetadata) -> Self {
        self.created_by = metadata.initiated_by.clone();
        self
    }
}

/// Document store for one kind of submission
#[async_trait]
pub trait SubmissionRepository<T>: DomainPort
where
    T: Clone + Send + Sync + 'static,
{
    async fn find_by_id(&self, id: &str) -> Result<Option<Submission<T>>, PortError>;

    /// Every submission of the transaction, oldest first
    async fn find_all_by_transaction_id_ordered(
        &self,
        transaction_id: &str,
    ) -> Result<Vec<Submission<T>>, PortError>;

    /// Stores a new submission; fails with `PortError::Conflict` if the id
    /// is taken
    async fn insert(&self, submission: Submission<T>) -> Result<Submission<T>, PortError>;

    /// Replaces a stored submission
    async fn save(&self, submission: Submission<T>) -> Result<Submission<T>, PortError>;

    async fn delete_by_id(&self, id: &str) -> Result<(), PortError>;
}
