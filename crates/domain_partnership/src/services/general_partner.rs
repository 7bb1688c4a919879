//! General partner submissions

use serde_json::Value;
use std::sync::Arc;
use tracing::{info, instrument};

use core_kernel::{GeneralPartnerId, OperationMetadata};

use super::{apply_patch, CostsService, PartnershipResource, ResourceStore, ResourceView};
use crate::cost::Cost;
use crate::error::PartnershipError;
use crate::kind::{self, GENERAL_PARTNER_KIND};
use crate::partner::GeneralPartnerData;
use crate::ports::{Submission, SubmissionRepository, TransactionPort};
use crate::strategy::{PostTransitionEntity, StrategyDispatcher};
use crate::transaction::{general_partner_uri, Transaction};
use crate::types::FilingMode;
use crate::validation::{GeneralPartnerValidator, ValidationStatus};

impl PartnershipResource for GeneralPartnerData {
    const RESOURCE_KIND: &'static str = GENERAL_PARTNER_KIND;

    fn new_id() -> String {
        GeneralPartnerId::new().to_string()
    }

    fn uri(transaction_id: &str, id: &str) -> String {
        general_partner_uri(transaction_id, id)
    }

    fn kind(&self) -> Option<&str> {
        self.partner.kind.as_deref()
    }
}

#[derive(Clone)]
pub struct GeneralPartnerService {
    store: ResourceStore<GeneralPartnerData>,
    validator: GeneralPartnerValidator,
    dispatcher: Arc<StrategyDispatcher>,
    costs: CostsService,
}

impl GeneralPartnerService {
    pub fn new(
        repository: Arc<dyn SubmissionRepository<GeneralPartnerData>>,
        transactions: Arc<dyn TransactionPort>,
        validator: GeneralPartnerValidator,
        dispatcher: Arc<StrategyDispatcher>,
        costs: CostsService,
    ) -> Self {
        Self {
            store: ResourceStore::new(repository, transactions),
            validator,
            dispatcher,
            costs,
        }
    }

    /// Validates, stores and links a new general partner
    ///
    /// A post-transition kind must name a strategy for general partners;
    /// nothing is stored when it does not.
    #[instrument(skip(self, data, metadata), fields(kind = data.kind().unwrap_or("none")))]
    pub async fn create(
        &self,
        transaction_id: &str,
        data: GeneralPartnerData,
        metadata: Option<OperationMetadata>,
    ) -> Result<ResourceView<GeneralPartnerData>, PartnershipError> {
        let transaction = self.store.transaction(transaction_id).await?;
        if transaction.filing_mode() == FilingMode::PostTransition
            || data.post_transition_kind().is_some()
        {
            self.dispatcher
                .resolve_for(data.kind(), &PostTransitionEntity::GeneralPartner(&data))?;
        }
        self.validate_create(&data, &transaction).await?;

        let completed = self.validate_full(&data, &transaction).await?.is_valid;

        let with_costs = self.costs.is_chargeable(&transaction, Some(data.linked_kind()));
        let submission = self
            .store
            .create(&transaction, data, with_costs, metadata)
            .await?;
        info!(submission_id = %submission.id, "General partner created");
        Ok(ResourceView::new(submission, completed))
    }

    /// Create-time rules for the requested change
    async fn validate_create(
        &self,
        data: &GeneralPartnerData,
        transaction: &Transaction,
    ) -> Result<(), PartnershipError> {
        if kind::is_remove_kind(data.kind()) {
            self.validator.validate_remove(data, transaction)
        } else if kind::is_update_kind(data.kind()) {
            self.validator.validate_update(data, transaction).await
        } else {
            self.validator.validate_partial(data, transaction).await
        }
    }

    pub async fn get(
        &self,
        transaction_id: &str,
        id: &str,
    ) -> Result<ResourceView<GeneralPartnerData>, PartnershipError> {
        let transaction = self.store.transaction(transaction_id).await?;
        let submission = self.store.load_linked(&transaction, id).await?;
        self.view(submission, &transaction).await
    }

    /// Every general partner of the transaction, oldest first
    pub async fn list(
        &self,
        transaction_id: &str,
    ) -> Result<Vec<ResourceView<GeneralPartnerData>>, PartnershipError> {
        let transaction = self.store.transaction(transaction_id).await?;
        let mut views = Vec::new();
        for submission in self.store.list_linked(&transaction).await? {
            views.push(self.view(submission, &transaction).await?);
        }
        Ok(views)
    }

    /// Applies a merge patch, then validates the changed partner
    #[instrument(skip(self, changes))]
    pub async fn update(
        &self,
        transaction_id: &str,
        id: &str,
        changes: &Value,
    ) -> Result<ResourceView<GeneralPartnerData>, PartnershipError> {
        let transaction = self.store.transaction(transaction_id).await?;
        let mut submission = self.store.load_linked(&transaction, id).await?;

        let data = apply_patch(&submission.data, changes)?;
        if data.linked_kind() != submission.data.linked_kind() {
            return Err(PartnershipError::service("The kind of a general partner cannot change"));
        }
        self.validator.validate_update(&data, &transaction).await?;

        submission.data = data;
        let submission = self.store.save(submission).await?;
        info!(submission_id = %submission.id, "General partner updated");
        self.view(submission, &transaction).await
    }

    pub async fn delete(
        &self,
        transaction_id: &str,
        id: &str,
        metadata: Option<OperationMetadata>,
    ) -> Result<(), PartnershipError> {
        let transaction = self.store.transaction(transaction_id).await?;
        self.store.load_linked(&transaction, id).await?;
        self.store.delete(&transaction, id, metadata).await?;
        info!(transaction_id = %transaction_id, submission_id = %id, "General partner deleted");
        Ok(())
    }

    /// Full validation of a stored general partner
    pub async fn validation_status(
        &self,
        transaction_id: &str,
        id: &str,
    ) -> Result<ValidationStatus, PartnershipError> {
        let transaction = self.store.transaction(transaction_id).await?;
        let submission = self.store.load_linked(&transaction, id).await?;
        self.validate_full(&submission.data, &transaction).await
    }

    pub async fn costs(&self, transaction_id: &str, id: &str) -> Result<Vec<Cost>, PartnershipError> {
        let transaction = self.store.transaction(transaction_id).await?;
        let submission = self.store.load_linked(&transaction, id).await?;
        self.costs.costs(&transaction, Some(submission.data.linked_kind()))
    }

    /// Full validation; post-transition changes go through their strategy
    pub async fn validate_full(
        &self,
        data: &GeneralPartnerData,
        transaction: &Transaction,
    ) -> Result<ValidationStatus, PartnershipError> {
        if transaction.filing_mode() == FilingMode::PostTransition
            || data.post_transition_kind().is_some()
        {
            return self
                .dispatcher
                .validate(data.kind(), PostTransitionEntity::GeneralPartner(data), transaction)
                .await;
        }

        let is_remove_or_update = kind::is_remove_or_update_kind(data.kind());
        let errors = self
            .validator
            .validate_full(data, transaction, is_remove_or_update)
            .await?;
        Ok(ValidationStatus::collect(errors))
    }

    /// Full validation of every general partner the transaction links
    pub(crate) async fn validate_transaction(
        &self,
        transaction: &Transaction,
    ) -> Result<ValidationStatus, PartnershipError> {
        let mut status = ValidationStatus::ok();
        for submission in self.store.list_linked(transaction).await? {
            status.merge(self.validate_full(&submission.data, transaction).await?);
        }
        Ok(status)
    }

    pub(crate) async fn list_data(
        &self,
        transaction: &Transaction,
    ) -> Result<Vec<GeneralPartnerData>, PartnershipError> {
        Ok(self
            .store
            .list_linked(transaction)
            .await?
            .into_iter()
            .map(|s| s.data)
            .collect())
    }

    async fn view(
        &self,
        submission: Submission<GeneralPartnerData>,
        transaction: &Transaction,
    ) -> Result<ResourceView<GeneralPartnerData>, PartnershipError> {
        let completed = self.validate_full(&submission.data, transaction).await?.is_valid;
        Ok(ResourceView::new(submission, completed))
    }
}
