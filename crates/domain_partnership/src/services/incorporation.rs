//! The incorporation shell and pre-close validation

use std::sync::Arc;
use tracing::{info, instrument, warn};

use core_kernel::{IncorporationId, OperationMetadata};

use super::{
    GeneralPartnerService, LimitedPartnerService, PartnershipResource, PartnershipService,
    ResourceStore,
};
use crate::error::PartnershipError;
use crate::incorporation::IncorporationData;
use crate::kind::INCORPORATION_KIND;
use crate::ports::{Submission, SubmissionRepository, TransactionPort};
use crate::transaction::{incorporation_uri, Transaction};
use crate::types::IncorporationKind;
use crate::validation::ValidationStatus;

impl PartnershipResource for IncorporationData {
    const RESOURCE_KIND: &'static str = INCORPORATION_KIND;

    fn new_id() -> String {
        IncorporationId::new().to_string()
    }

    fn uri(transaction_id: &str, id: &str) -> String {
        incorporation_uri(transaction_id, id)
    }

    fn kind(&self) -> Option<&str> {
        None
    }
}

#[derive(Clone)]
pub struct IncorporationService {
    store: ResourceStore<IncorporationData>,
    pub(crate) partnerships: PartnershipService,
    pub(crate) general_partners: GeneralPartnerService,
    pub(crate) limited_partners: LimitedPartnerService,
}

impl IncorporationService {
    pub fn new(
        repository: Arc<dyn SubmissionRepository<IncorporationData>>,
        transactions: Arc<dyn TransactionPort>,
        partnerships: PartnershipService,
        general_partners: GeneralPartnerService,
        limited_partners: LimitedPartnerService,
    ) -> Self {
        Self {
            store: ResourceStore::new(repository, transactions),
            partnerships,
            general_partners,
            limited_partners,
        }
    }

    /// Creates the incorporation shell of a registration or transition
    ///
    /// The incorporation kind follows the transaction's filing mode; any
    /// other mode has nothing to incorporate.
    #[instrument(skip(self, metadata))]
    pub async fn create(
        &self,
        transaction_id: &str,
        metadata: Option<OperationMetadata>,
    ) -> Result<Submission<IncorporationData>, PartnershipError> {
        let transaction = self.store.transaction(transaction_id).await?;
        let mode = transaction.filing_mode();
        let kind = IncorporationKind::from_filing_mode(mode).ok_or_else(|| {
            PartnershipError::service(format!(
                "Filing mode {} has no incorporation",
                mode.description()
            ))
        })?;

        let submission = self
            .store
            .create(&transaction, IncorporationData::new(kind), false, metadata)
            .await?;
        info!(submission_id = %submission.id, kind = kind.description(), "Incorporation created");
        Ok(submission)
    }

    pub async fn get(
        &self,
        transaction_id: &str,
        id: &str,
    ) -> Result<Submission<IncorporationData>, PartnershipError> {
        let transaction = self.store.transaction(transaction_id).await?;
        self.store.load_linked(&transaction, id).await
    }

    pub(crate) async fn get_transaction(&self, transaction_id: &str) -> Result<Transaction, PartnershipError> {
        self.store.transaction(transaction_id).await
    }

    /// Pre-close validation of everything the incorporation links
    pub async fn validate_transaction(
        &self,
        transaction_id: &str,
        id: &str,
    ) -> Result<ValidationStatus, PartnershipError> {
        let transaction = self.store.transaction(transaction_id).await?;
        self.store.load_linked(&transaction, id).await?;
        self.validate(&transaction).await
    }

    /// Full validation of the partnership and every partner
    pub async fn validate(&self, transaction: &Transaction) -> Result<ValidationStatus, PartnershipError> {
        let mut status = self.partnerships.validate_transaction(transaction).await?;
        status.merge(self.general_partners.validate_transaction(transaction).await?);
        status.merge(self.limited_partners.validate_transaction(transaction).await?);

        if !status.is_valid {
            warn!(
                transaction_id = %transaction.id,
                errors = status.errors.len(),
                "Transaction failed pre-close validation"
            );
        }
        Ok(status)
    }
}
