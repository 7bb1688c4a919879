//! Partnership submissions

use serde_json::Value;
use std::sync::Arc;
use tracing::{info, instrument};

use core_kernel::{OperationMetadata, PartnershipId};

use super::{apply_patch, CostsService, PartnershipResource, ResourceStore, ResourceView};
use crate::cost::Cost;
use crate::error::PartnershipError;
use crate::kind::PARTNERSHIP_KIND;
use crate::partnership::PartnershipData;
use crate::ports::{Submission, SubmissionRepository, TransactionPort};
use crate::strategy::{PostTransitionEntity, StrategyDispatcher};
use crate::transaction::{partnership_uri, Transaction};
use crate::types::{FilingMode, IncorporationKind};
use crate::validation::{LimitedPartnershipValidator, ValidationStatus};

impl PartnershipResource for PartnershipData {
    const RESOURCE_KIND: &'static str = PARTNERSHIP_KIND;

    fn new_id() -> String {
        PartnershipId::new().to_string()
    }

    fn uri(transaction_id: &str, id: &str) -> String {
        partnership_uri(transaction_id, id)
    }

    fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }
}

#[derive(Clone)]
pub struct PartnershipService {
    store: ResourceStore<PartnershipData>,
    validator: LimitedPartnershipValidator,
    dispatcher: Arc<StrategyDispatcher>,
    costs: CostsService,
}

impl PartnershipService {
    pub fn new(
        repository: Arc<dyn SubmissionRepository<PartnershipData>>,
        transactions: Arc<dyn TransactionPort>,
        validator: LimitedPartnershipValidator,
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

    fn incorporation_kind(transaction: &Transaction) -> Option<IncorporationKind> {
        IncorporationKind::from_filing_mode(transaction.filing_mode())
    }

    /// Validates, stores and links the partnership of a transaction
    #[instrument(skip(self, data, metadata), fields(kind = data.kind().unwrap_or("none")))]
    pub async fn create(
        &self,
        transaction_id: &str,
        data: PartnershipData,
        metadata: Option<OperationMetadata>,
    ) -> Result<ResourceView<PartnershipData>, PartnershipError> {
        let transaction = self.store.transaction(transaction_id).await?;
        if transaction.filing_mode() == FilingMode::PostTransition
            || data.post_transition_kind().is_some()
        {
            self.dispatcher
                .resolve_for(data.kind(), &PostTransitionEntity::Partnership(&data))?;
        }
        self.validator
            .validate_partial(&data, Self::incorporation_kind(&transaction))?;

        let completed = self.validate_full(&data, &transaction).await?.is_valid;

        let with_costs = self.costs.is_chargeable(&transaction, Some(data.linked_kind()));
        let submission = self
            .store
            .create(&transaction, data, with_costs, metadata)
            .await?;
        info!(submission_id = %submission.id, "Partnership created");
        Ok(ResourceView::new(submission, completed))
    }

    pub async fn get(
        &self,
        transaction_id: &str,
        id: &str,
    ) -> Result<ResourceView<PartnershipData>, PartnershipError> {
        let transaction = self.store.transaction(transaction_id).await?;
        let submission = self.store.load_linked(&transaction, id).await?;
        self.view(submission, &transaction).await
    }

    /// Applies a merge patch, then re-checks the changed partnership
    #[instrument(skip(self, changes))]
    pub async fn update(
        &self,
        transaction_id: &str,
        id: &str,
        changes: &Value,
    ) -> Result<ResourceView<PartnershipData>, PartnershipError> {
        let transaction = self.store.transaction(transaction_id).await?;
        let mut submission = self.store.load_linked(&transaction, id).await?;

        let data = apply_patch(&submission.data, changes)?;
        if data.linked_kind() != submission.data.linked_kind() {
            return Err(PartnershipError::service("The kind of a partnership cannot change"));
        }
        self.validator
            .validate_partial(&data, Self::incorporation_kind(&transaction))?;

        submission.data = data;
        let submission = self.store.save(submission).await?;
        info!(submission_id = %submission.id, "Partnership updated");
        self.view(submission, &transaction).await
    }

    /// Full validation of a stored partnership
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
        data: &PartnershipData,
        transaction: &Transaction,
    ) -> Result<ValidationStatus, PartnershipError> {
        if transaction.filing_mode() == FilingMode::PostTransition
            || data.post_transition_kind().is_some()
        {
            return self
                .dispatcher
                .validate(data.kind(), PostTransitionEntity::Partnership(data), transaction)
                .await;
        }

        let errors = self
            .validator
            .validate_full(data, Self::incorporation_kind(transaction));
        Ok(ValidationStatus::collect(errors))
    }

    /// Full validation of the transaction's partnership
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

    /// The partnership the transaction links, if it has one yet
    pub(crate) async fn find_data(
        &self,
        transaction: &Transaction,
    ) -> Result<Option<PartnershipData>, PartnershipError> {
        Ok(self
            .store
            .list_linked(transaction)
            .await?
            .into_iter()
            .next()
            .map(|s| s.data))
    }

    async fn view(
        &self,
        submission: Submission<PartnershipData>,
        transaction: &Transaction,
    ) -> Result<ResourceView<PartnershipData>, PartnershipError> {
        let completed = self.validate_full(&submission.data, transaction).await?.is_valid;
        Ok(ResourceView::new(submission, completed))
    }
}
