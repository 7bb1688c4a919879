//! Limited partner submissions

use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, instrument};

use core_kernel::{LimitedPartnerId, OperationMetadata};

use super::{apply_patch, CostsService, PartnershipResource, ResourceStore, ResourceView};
use crate::cost::Cost;
use crate::error::PartnershipError;
use crate::kind::{self, LIMITED_PARTNER_KIND};
use crate::partner::LimitedPartnerData;
use crate::partnership::PartnershipData;
use crate::ports::{Submission, SubmissionRepository, TransactionPort};
use crate::strategy::{PostTransitionEntity, StrategyDispatcher};
use crate::transaction::{limited_partner_uri, Transaction};
use crate::types::FilingMode;
use crate::validation::{LimitedPartnerValidator, ValidationStatus};

impl PartnershipResource for LimitedPartnerData {
    const RESOURCE_KIND: &'static str = LIMITED_PARTNER_KIND;

    fn new_id() -> String {
        LimitedPartnerId::new().to_string()
    }

    fn uri(transaction_id: &str, id: &str) -> String {
        limited_partner_uri(transaction_id, id)
    }

    fn kind(&self) -> Option<&str> {
        self.partner.kind.as_deref()
    }
}

#[derive(Clone)]
pub struct LimitedPartnerService {
    store: ResourceStore<LimitedPartnerData>,
    partnerships: ResourceStore<PartnershipData>,
    validator: LimitedPartnerValidator,
    dispatcher: Arc<StrategyDispatcher>,
    costs: CostsService,
}

impl LimitedPartnerService {
    pub fn new(
        repository: Arc<dyn SubmissionRepository<LimitedPartnerData>>,
        partnerships: Arc<dyn SubmissionRepository<PartnershipData>>,
        transactions: Arc<dyn TransactionPort>,
        validator: LimitedPartnerValidator,
        dispatcher: Arc<StrategyDispatcher>,
        costs: CostsService,
    ) -> Self {
        Self {
            store: ResourceStore::new(repository, transactions.clone()),
            partnerships: ResourceStore::new(partnerships, transactions),
            validator,
            dispatcher,
            costs,
        }
    }

    /// Contribution rules depend on the partnership's type; a partner filed
    /// without one takes it from the transaction's partnership.
    async fn with_partnership_type(
        &self,
        mut data: LimitedPartnerData,
        transaction: &Transaction,
    ) -> Result<LimitedPartnerData, PartnershipError> {
        if data.partnership_type.is_none() {
            data.partnership_type = self
                .partnerships
                .list_linked(transaction)
                .await?
                .into_iter()
                .find_map(|s| s.data.partnership_type);
            debug!(partnership_type = ?data.partnership_type, "Partnership type taken from partnership");
        }
        Ok(data)
    }

    /// Validates, stores and links a new limited partner
    #[instrument(skip(self, data, metadata), fields(kind = data.kind().unwrap_or("none")))]
    pub async fn create(
        &self,
        transaction_id: &str,
        data: LimitedPartnerData,
        metadata: Option<OperationMetadata>,
    ) -> Result<ResourceView<LimitedPartnerData>, PartnershipError> {
        let transaction = self.store.transaction(transaction_id).await?;
        if transaction.filing_mode() == FilingMode::PostTransition
            || data.post_transition_kind().is_some()
        {
            self.dispatcher
                .resolve_for(data.kind(), &PostTransitionEntity::LimitedPartner(&data))?;
        }
        let data = self.with_partnership_type(data, &transaction).await?;
        self.validate_create(&data, &transaction).await?;

        let completed = self.validate_full(&data, &transaction).await?.is_valid;

        let with_costs = self.costs.is_chargeable(&transaction, Some(data.linked_kind()));
        let submission = self
            .store
            .create(&transaction, data, with_costs, metadata)
            .await?;
        info!(submission_id = %submission.id, "Limited partner created");
        Ok(ResourceView::new(submission, completed))
    }

    /// Create-time rules for the requested change
    async fn validate_create(
        &self,
        data: &LimitedPartnerData,
        transaction: &Transaction,
    ) -> Result<(), PartnershipError> {
        if kind::is_remove_kind(data.kind()) {
            self.validator.validate_remove(data, transaction)
        } else if kind::is_update_kind(data.kind()) {
            self.validator.validate_update(data, &Value::Null, transaction).await
        } else {
            self.validator.validate_partial(data, transaction).await
        }
    }

    pub async fn get(
        &self,
        transaction_id: &str,
        id: &str,
    ) -> Result<ResourceView<LimitedPartnerData>, PartnershipError> {
        let transaction = self.store.transaction(transaction_id).await?;
        let submission = self.store.load_linked(&transaction, id).await?;
        self.view(submission, &transaction).await
    }

    /// Every limited partner of the transaction, oldest first
    pub async fn list(
        &self,
        transaction_id: &str,
    ) -> Result<Vec<ResourceView<LimitedPartnerData>>, PartnershipError> {
        let transaction = self.store.transaction(transaction_id).await?;
        let mut views = Vec::new();
        for submission in self.store.list_linked(&transaction).await? {
            views.push(self.view(submission, &transaction).await?);
        }
        Ok(views)
    }

    /// Applies a merge patch, then validates the changed partner
    ///
    /// Contribution rules run again only when the patch touches them.
    #[instrument(skip(self, changes))]
    pub async fn update(
        &self,
        transaction_id: &str,
        id: &str,
        changes: &Value,
    ) -> Result<ResourceView<LimitedPartnerData>, PartnershipError> {
        let transaction = self.store.transaction(transaction_id).await?;
        let mut submission = self.store.load_linked(&transaction, id).await?;

        let data = apply_patch(&submission.data, changes)?;
        if data.linked_kind() != submission.data.linked_kind() {
            return Err(PartnershipError::service("The kind of a limited partner cannot change"));
        }
        let data = self.with_partnership_type(data, &transaction).await?;
        self.validator
            .validate_update(&data, changes, &transaction)
            .await?;

        submission.data = data;
        let submission = self.store.save(submission).await?;
        info!(submission_id = %submission.id, "Limited partner updated");
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
        info!(transaction_id = %transaction_id, submission_id = %id, "Limited partner deleted");
        Ok(())
    }

    /// Full validation of a stored limited partner
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
        data: &LimitedPartnerData,
        transaction: &Transaction,
    ) -> Result<ValidationStatus, PartnershipError> {
        if transaction.filing_mode() == FilingMode::PostTransition
            || data.post_transition_kind().is_some()
        {
            return self
                .dispatcher
                .validate(data.kind(), PostTransitionEntity::LimitedPartner(data), transaction)
                .await;
        }

        let is_remove_or_update = kind::is_remove_or_update_kind(data.kind());
        let errors = self
            .validator
            .validate_full(data, transaction, is_remove_or_update)
            .await?;
        Ok(ValidationStatus::collect(errors))
    }

    /// Full validation of every limited partner the transaction links
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
    ) -> Result<Vec<LimitedPartnerData>, PartnershipError> {
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
        submission: Submission<LimitedPartnerData>,
        transaction: &Transaction,
    ) -> Result<ResourceView<LimitedPartnerData>, PartnershipError> {
        let completed = self.validate_full(&submission.data, transaction).await?.is_valid;
        Ok(ResourceView::new(submission, completed))
    }
}
