//! In-memory service harness
//!
//! Wires every partnership service to in-memory collaborators and keeps
//! handles on the transaction and registry stores so tests can seed them.

use domain_partnership::adapters::{InMemoryCompanyProfiles, InMemoryTransactions};
use domain_partnership::{
    CompanyProfile, CostsConfig, PartnershipPorts, PartnershipServices, Transaction,
};
use std::sync::Arc;

use crate::fixtures::TransactionFixtures;

/// Services plus the stores behind them
#[derive(Clone)]
pub struct TestHarness {
    pub services: PartnershipServices,
    pub ports: PartnershipPorts,
    pub transactions: Arc<InMemoryTransactions>,
    pub company_profiles: Arc<InMemoryCompanyProfiles>,
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

impl TestHarness {
    /// Empty stores and the default fees
    pub fn new() -> Self {
        Self::with_costs(CostsConfig::default())
    }

    pub fn with_costs(costs: CostsConfig) -> Self {
        let transactions = Arc::new(InMemoryTransactions::new());
        let company_profiles = Arc::new(InMemoryCompanyProfiles::new());
        let ports = PartnershipPorts::in_memory(company_profiles.clone(), transactions.clone());
        Self {
            services: PartnershipServices::new(ports.clone(), costs),
            ports,
            transactions,
            company_profiles,
        }
    }

    /// Stores a transaction and returns its id
    pub async fn transaction(&self, transaction: Transaction) -> String {
        let id = transaction.id.clone();
        self.transactions.insert(transaction).await;
        id
    }

    pub async fn company(&self, profile: CompanyProfile) {
        self.company_profiles.insert(profile).await;
    }

    /// A harness whose registry knows the fixture partnership
    pub async fn with_registered_company() -> Self {
        let harness = Self::new();
        harness.company(TransactionFixtures::company_profile()).await;
        harness
    }
}
