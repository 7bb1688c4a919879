//! In-memory adapters
//!
//! Stand-ins for the company profile service, the transactions service and
//! the document store. The server uses them when no external system is
//! configured; the test suites use them throughout.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use core_kernel::{
    DomainPort, HealthCheckResult, HealthCheckable, OperationMetadata, PortError,
};

use crate::ports::{
    CompanyProfile, CompanyProfilePort, Submission, SubmissionRepository, TransactionPort,
};
use crate::transaction::{Transaction, TransactionResource};

/// Company profiles keyed by company number
#[derive(Debug, Default, Clone)]
pub struct InMemoryCompanyProfiles {
    profiles: Arc<RwLock<HashMap<String, CompanyProfile>>>,
}

impl InMemoryCompanyProfiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates with profiles for testing
    pub async fn with_profiles(profiles: Vec<CompanyProfile>) -> Self {
        let port = Self::new();
        for profile in profiles {
            port.insert(profile).await;
        }
        port
    }

    pub async fn insert(&self, profile: CompanyProfile) {
        self.profiles
            .write()
            .await
            .insert(profile.company_number.clone(), profile);
    }
}

impl DomainPort for InMemoryCompanyProfiles {}

#[async_trait]
impl HealthCheckable for InMemoryCompanyProfiles {
    async fn health_check(&self) -> HealthCheckResult {
        HealthCheckResult::healthy("in-memory-company-profiles")
    }
}

#[async_trait]
impl CompanyProfilePort for InMemoryCompanyProfiles {
    async fn get_company_profile(&self, company_number: &str) -> Result<CompanyProfile, PortError> {
        self.profiles
            .read()
            .await
            .get(company_number)
            .cloned()
            .ok_or_else(|| PortError::not_found("CompanyProfile", company_number))
    }
}

/// Transactions keyed by id
#[derive(Debug, Default, Clone)]
pub struct InMemoryTransactions {
    transactions: Arc<RwLock<HashMap<String, Transaction>>>,
}

impl InMemoryTransactions {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, transaction: Transaction) {
        self.transactions
            .write()
            .await
            .insert(transaction.id.clone(), transaction);
    }
}

impl DomainPort for InMemoryTransactions {}

#[async_trait]
impl HealthCheckable for InMemoryTransactions {
    async fn health_check(&self) -> HealthCheckResult {
        HealthCheckResult::healthy("in-memory-transactions")
    }
}

#[async_trait]
impl TransactionPort for InMemoryTransactions {
    async fn get_transaction(&self, transaction_id: &str) -> Result<Transaction, PortError> {
        self.transactions
            .read()
            .await
            .get(transaction_id)
            .cloned()
            .ok_or_else(|| PortError::not_found("Transaction", transaction_id))
    }

    async fn add_resource(
        &self,
        transaction_id: &str,
        uri: &str,
        resource: TransactionResource,
        _metadata: Option<OperationMetadata>,
    ) -> Result<Transaction, PortError> {
        let mut transactions = self.transactions.write().await;
        let transaction = transactions
            .get_mut(transaction_id)
            .ok_or_else(|| PortError::not_found("Transaction", transaction_id))?;
        transaction.resources.insert(uri.to_string(), resource);
        Ok(transaction.clone())
    }

    async fn remove_resource(
        &self,
        transaction_id: &str,
        uri: &str,
        _metadata: Option<OperationMetadata>,
    ) -> Result<Transaction, PortError> {
        let mut transactions = self.transactions.write().await;
        let transaction = transactions
            .get_mut(transaction_id)
            .ok_or_else(|| PortError::not_found("Transaction", transaction_id))?;
        transaction.resources.remove(uri);
        Ok(transaction.clone())
    }
}

/// Submissions of one kind keyed by id
#[derive(Debug, Clone)]
pub struct InMemorySubmissions<T> {
    submissions: Arc<RwLock<HashMap<String, Submission<T>>>>,
}

impl<T> Default for InMemorySubmissions<T> {
    fn default() -> Self {
        Self {
            submissions: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl<T> InMemorySubmissions<T> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T: Send + Sync + 'static> DomainPort for InMemorySubmissions<T> {}

#[async_trait]
impl<T> SubmissionRepository<T> for InMemorySubmissions<T>
where
    T: Clone + Send + Sync + 'static,
{
    async fn find_by_id(&self, id: &str) -> Result<Option<Submission<T>>, PortError> {
        Ok(self.submissions.read().await.get(id).cloned())
    }

    async fn find_all_by_transaction_id_ordered(
        &self,
        transaction_id: &str,
    ) -> Result<Vec<Submission<T>>, PortError> {
        let submissions = self.submissions.read().await;
        let mut results: Vec<_> = submissions
            .values()
            .filter(|s| s.transaction_id == transaction_id)
            .cloned()
            .collect();
        results.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(results)
    }

    async fn insert(&self, submission: Submission<T>) -> Result<Submission<T>, PortError> {
        let mut submissions = self.submissions.write().await;
        if submissions.contains_key(&submission.id) {
            return Err(PortError::conflict(format!(
                "Submission {} already exists",
                submission.id
            )));
        }
        submissions.insert(submission.id.clone(), submission.clone());
        Ok(submission)
    }

    async fn save(&self, mut submission: Submission<T>) -> Result<Submission<T>, PortError> {
        let mut submissions = self.submissions.write().await;
        if !submissions.contains_key(&submission.id) {
            return Err(PortError::not_found("Submission", &submission.id));
        }
        submission.updated_at = Utc::now();
        submissions.insert(submission.id.clone(), submission.clone());
        Ok(submission)
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), PortError> {
        self.submissions
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| PortError::not_found("Submission", id))
    }
}
