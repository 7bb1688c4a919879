//! Partnership domain services
//!
//! Services orchestrate the ports, the validators and the post-transition
//! dispatcher. Every sub-resource operation resolves the transaction first
//! and refuses to touch a submission the transaction does not link.

pub mod costs;
pub mod filings;
pub mod general_partner;
pub mod incorporation;
pub mod limited_partner;
pub mod partnership;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

use core_kernel::{OperationMetadata, PortError};

use crate::adapters::InMemorySubmissions;
use crate::cost::CostsConfig;
use crate::error::PartnershipError;
use crate::incorporation::IncorporationData;
use crate::kind::PostTransitionKind;
use crate::partner::{GeneralPartnerData, LimitedPartnerData};
use crate::partnership::PartnershipData;
use crate::ports::{CompanyProfilePort, Submission, SubmissionRepository, TransactionPort};
use crate::strategy::StrategyDispatcher;
use crate::transaction::{Transaction, TransactionResource};
use crate::validation::{
    GeneralPartnerValidator, LimitedPartnerValidator, LimitedPartnershipValidator,
};

pub use costs::CostsService;
pub use filings::{FilingApi, FilingData, FilingsService};
pub use general_partner::GeneralPartnerService;
pub use incorporation::IncorporationService;
pub use limited_partner::LimitedPartnerService;
pub use partnership::PartnershipService;

/// A sub-resource this service stores and links into transactions
pub trait PartnershipResource: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Kind used while registering or transitioning
    const RESOURCE_KIND: &'static str;

    fn new_id() -> String;

    fn uri(transaction_id: &str, id: &str) -> String;

    /// The kind string the filer supplied
    fn kind(&self) -> Option<&str>;

    /// The post-transition kind this submission was filed under, if any
    fn post_transition_kind(&self) -> Option<PostTransitionKind> {
        self.kind().and_then(PostTransitionKind::from_description)
    }

    /// The kind the transaction links this submission under
    fn linked_kind(&self) -> &'static str {
        self.post_transition_kind()
            .map(|kind| kind.description())
            .unwrap_or(Self::RESOURCE_KIND)
    }
}

/// A stored submission with its derived completeness flag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceView<T> {
    pub id: String,
    pub transaction_id: String,
    pub data: T,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    /// Whether full validation finds nothing to correct
    pub completed: bool,
}

impl<T> ResourceView<T> {
    pub fn new(submission: Submission<T>, completed: bool) -> Self {
        Self {
            id: submission.id,
            transaction_id: submission.transaction_id,
            data: submission.data,
            created_at: submission.created_at,
            updated_at: submission.updated_at,
            created_by: submission.created_by,
            completed,
        }
    }
}

/// The external collaborators the services run against
#[derive(Clone)]
pub struct PartnershipPorts {
    pub company_profiles: Arc<dyn CompanyProfilePort>,
    pub transactions: Arc<dyn TransactionPort>,
    pub incorporations: Arc<dyn SubmissionRepository<IncorporationData>>,
    pub partnerships: Arc<dyn SubmissionRepository<PartnershipData>>,
    pub general_partners: Arc<dyn SubmissionRepository<GeneralPartnerData>>,
    pub limited_partners: Arc<dyn SubmissionRepository<LimitedPartnerData>>,
}

impl PartnershipPorts {
    /// In-memory stores around the given profile and transaction ports
    pub fn in_memory(
        company_profiles: Arc<dyn CompanyProfilePort>,
        transactions: Arc<dyn TransactionPort>,
    ) -> Self {
        Self {
            company_profiles,
            transactions,
            incorporations: Arc::new(InMemorySubmissions::new()),
            partnerships: Arc::new(InMemorySubmissions::new()),
            general_partners: Arc::new(InMemorySubmissions::new()),
            limited_partners: Arc::new(InMemorySubmissions::new()),
        }
    }
}

/// Every service, wired to one set of ports
#[derive(Clone)]
pub struct PartnershipServices {
    pub incorporations: IncorporationService,
    pub partnerships: PartnershipService,
    pub general_partners: GeneralPartnerService,
    pub limited_partners: LimitedPartnerService,
    pub costs: CostsService,
    pub filings: FilingsService,
    pub dispatcher: Arc<StrategyDispatcher>,
}

impl PartnershipServices {
    pub fn new(ports: PartnershipPorts, costs: CostsConfig) -> Self {
        let general_partner_validator = GeneralPartnerValidator::new(ports.company_profiles.clone());
        let limited_partner_validator = LimitedPartnerValidator::new(ports.company_profiles.clone());
        let partnership_validator = LimitedPartnershipValidator::new();

        let dispatcher = Arc::new(StrategyDispatcher::new(
            general_partner_validator.clone(),
            limited_partner_validator.clone(),
            partnership_validator.clone(),
        ));
        let costs = CostsService::new(costs, dispatcher.clone());

        let partnerships = PartnershipService::new(
            ports.partnerships.clone(),
            ports.transactions.clone(),
            partnership_validator,
            dispatcher.clone(),
            costs.clone(),
        );
        let general_partners = GeneralPartnerService::new(
            ports.general_partners,
            ports.transactions.clone(),
            general_partner_validator,
            dispatcher.clone(),
            costs.clone(),
        );
        let limited_partners = LimitedPartnerService::new(
            ports.limited_partners,
            ports.partnerships,
            ports.transactions.clone(),
            limited_partner_validator,
            dispatcher.clone(),
            costs.clone(),
        );
        let incorporations = IncorporationService::new(
            ports.incorporations,
            ports.transactions,
            partnerships.clone(),
            general_partners.clone(),
            limited_partners.clone(),
        );
        let filings = FilingsService::new(incorporations.clone());

        Self {
            incorporations,
            partnerships,
            general_partners,
            limited_partners,
            costs,
            filings,
            dispatcher,
        }
    }
}

/// Applies a JSON merge patch: objects merge key by key, `null` removes a
/// key, anything else replaces the target.
pub fn merge_patch(target: &mut Value, patch: &Value) {
    let Value::Object(changes) = patch else {
        *target = patch.clone();
        return;
    };

    if !target.is_object() {
        *target = Value::Object(serde_json::Map::new());
    }
    if let Value::Object(fields) = target {
        for (key, value) in changes {
            if value.is_null() {
                fields.remove(key);
            } else {
                merge_patch(fields.entry(key.clone()).or_insert(Value::Null), value);
            }
        }
    }
}

/// Applies `patch` to a copy of `data`
pub fn apply_patch<T: Serialize + DeserializeOwned>(
    data: &T,
    patch: &Value,
) -> Result<T, PartnershipError> {
    let mut document = serde_json::to_value(data)
        .map_err(|e| PartnershipError::service(format!("Failed to serialise submission: {}", e)))?;
    merge_patch(&mut document, patch);
    serde_json::from_value(document)
        .map_err(|e| PartnershipError::invalid_request(format!("Invalid patch: {}", e)))
}

/// Storage and transaction plumbing shared by the sub-resource services
pub(crate) struct ResourceStore<T: PartnershipResource> {
    repository: Arc<dyn SubmissionRepository<T>>,
    transactions: Arc<dyn TransactionPort>,
}

impl<T: PartnershipResource> Clone for ResourceStore<T> {
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.clone(),
            transactions: self.transactions.clone(),
        }
    }
}

impl<T: PartnershipResource> ResourceStore<T> {
    pub(crate) fn new(
        repository: Arc<dyn SubmissionRepository<T>>,
        transactions: Arc<dyn TransactionPort>,
    ) -> Self {
        Self {
            repository,
            transactions,
        }
    }

    pub(crate) async fn transaction(&self, transaction_id: &str) -> Result<Transaction, PartnershipError> {
        Ok(self.transactions.get_transaction(transaction_id).await?)
    }

    /// The submission `id`, provided the transaction links it
    pub(crate) async fn load_linked(
        &self,
        transaction: &Transaction,
        id: &str,
    ) -> Result<Submission<T>, PartnershipError> {
        let submission = self
            .repository
            .find_by_id(id)
            .await?
            .filter(|s| s.transaction_id == transaction.id)
            .ok_or_else(|| PartnershipError::not_found(id))?;

        let uri = T::uri(&transaction.id, id);
        if !transaction.is_linked(&uri, submission.data.linked_kind()) {
            warn!(
                transaction_id = %transaction.id,
                submission_id = %id,
                "Submission is not linked to the transaction"
            );
            return Err(PartnershipError::not_found(id));
        }
        Ok(submission)
    }

    /// Every submission the transaction links, oldest first
    pub(crate) async fn list_linked(
        &self,
        transaction: &Transaction,
    ) -> Result<Vec<Submission<T>>, PartnershipError> {
        let submissions = self
            .repository
            .find_all_by_transaction_id_ordered(&transaction.id)
            .await?;
        Ok(submissions
            .into_iter()
            .filter(|s| transaction.is_linked(&T::uri(&transaction.id, &s.id), s.data.linked_kind()))
            .collect())
    }

    /// Stores a new submission and links it into the transaction
    pub(crate) async fn create(
        &self,
        transaction: &Transaction,
        data: T,
        with_costs: bool,
        metadata: Option<OperationMetadata>,
    ) -> Result<Submission<T>, PartnershipError> {
        let mut submission = Submission::new(T::new_id(), transaction.id.clone(), data);
        if let Some(metadata) = &metadata {
            submission = submission.created_by(metadata);
        }
        let submission = self.repository.insert(submission).await?;

        let uri = T::uri(&transaction.id, &submission.id);
        let mut resource = TransactionResource::new(submission.data.linked_kind(), &uri);
        if with_costs {
            resource = resource.with_costs(&uri);
        }
        self.transactions
            .add_resource(&transaction.id, &uri, resource, metadata)
            .await?;

        debug!(
            transaction_id = %transaction.id,
            submission_id = %submission.id,
            kind = %submission.data.linked_kind(),
            "Created submission"
        );
        Ok(submission)
    }

    pub(crate) async fn save(&self, submission: Submission<T>) -> Result<Submission<T>, PartnershipError> {
        Ok(self.repository.save(submission).await?)
    }

    /// Deletes the submission and unlinks it from the transaction
    pub(crate) async fn delete(
        &self,
        transaction: &Transaction,
        id: &str,
        metadata: Option<OperationMetadata>,
    ) -> Result<(), PartnershipError> {
        self.repository.delete_by_id(id).await?;
        let uri = T::uri(&transaction.id, id);
        match self
            .transactions
            .remove_resource(&transaction.id, &uri, metadata)
            .await
        {
            Ok(_) => Ok(()),
            Err(PortError::NotFound { .. }) => Err(PartnershipError::not_found(id)),
            Err(e) => Err(e.into()),
        }
    }
}
