//! Post-transition strategies
//!
//! Every change to an already-incorporated partnership names a kind from
//! the closed vocabulary in [`crate::kind`]. The dispatcher maps each kind
//! to the strategy that validates it and prices it. A kind with no
//! registered strategy is a service error, never a silent default.
//!
//! ```text
//!   "limited-partnership#update-partnership-name"
//!                     │ resolve
//!                     ▼
//!        UpdatePartnershipNameStrategy
//!          ├─ validate(entity, status, transaction)
//!          └─ cost(costs) ─▶ Some(Cost)
//! ```

pub mod partner;
pub mod partnership;

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, error, warn};

use crate::cost::{Cost, CostsConfig};
use crate::error::PartnershipError;
use crate::kind::{ChangeAction, KindSubject, PostTransitionKind};
use crate::partner::{GeneralPartnerData, LimitedPartnerData};
use crate::partnership::PartnershipData;
use crate::transaction::Transaction;
use crate::validation::{
    GeneralPartnerValidator, LimitedPartnerValidator, LimitedPartnershipValidator,
    ValidationStatus,
};

pub use partner::{AddPartnerStrategy, PartnerValidators, RemovePartnerStrategy, UpdatePartnerStrategy};
pub use partnership::{
    UpdatePartnershipNameStrategy, UpdatePartnershipRegisteredOfficeAddressStrategy,
    UpdatePartnershipTermStrategy,
};

/// The resource a strategy validates
#[derive(Debug, Clone, Copy)]
pub enum PostTransitionEntity<'a> {
    GeneralPartner(&'a GeneralPartnerData),
    LimitedPartner(&'a LimitedPartnerData),
    Partnership(&'a PartnershipData),
}

impl PostTransitionEntity<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            PostTransitionEntity::GeneralPartner(_) => "general partner",
            PostTransitionEntity::LimitedPartner(_) => "limited partner",
            PostTransitionEntity::Partnership(_) => "partnership",
        }
    }

    /// Whether changes of `kind` apply to this resource
    pub fn accepts(&self, kind: PostTransitionKind) -> bool {
        let subject = kind.subject();
        match self {
            PostTransitionEntity::GeneralPartner(_) => subject.is_general_partner(),
            PostTransitionEntity::LimitedPartner(_) => subject.is_limited_partner(),
            PostTransitionEntity::Partnership(_) => subject == KindSubject::Partnership,
        }
    }
}

/// The service error for an entity a strategy cannot validate
pub(crate) fn unsupported_entity(kind: PostTransitionKind, entity: &PostTransitionEntity<'_>) -> PartnershipError {
    PartnershipError::service(format!(
        "Strategy for kind {} cannot validate a {}",
        kind,
        entity.name()
    ))
}

/// Validation and cost policy of one post-transition kind
#[async_trait]
pub trait PostTransitionStrategy: Send + Sync {
    fn kind(&self) -> PostTransitionKind;

    /// Adds every violation of the entity to `status`
    async fn validate(
        &self,
        entity: PostTransitionEntity<'_>,
        status: &mut ValidationStatus,
        transaction: &Transaction,
    ) -> Result<(), PartnershipError>;

    /// The fee for this kind of change, if any
    fn cost(&self, _costs: &CostsConfig) -> Option<Cost> {
        None
    }
}

/// Registry of strategies keyed by kind
#[derive(Clone, Default)]
pub struct StrategyDispatcher {
    strategies: HashMap<PostTransitionKind, Arc<dyn PostTransitionStrategy>>,
}

impl StrategyDispatcher {
    /// A dispatcher with no strategies
    pub fn empty() -> Self {
        Self::default()
    }

    /// A dispatcher with a strategy for every post-transition kind
    pub fn new(
        general_partners: GeneralPartnerValidator,
        limited_partners: LimitedPartnerValidator,
        partnerships: LimitedPartnershipValidator,
    ) -> Self {
        let validators = PartnerValidators::new(general_partners, limited_partners);
        let mut dispatcher = Self::empty();

        for kind in PostTransitionKind::ALL.iter().copied() {
            let strategy: Arc<dyn PostTransitionStrategy> = match (kind.subject(), kind.action()) {
                (KindSubject::Partnership, _) => match kind {
                    PostTransitionKind::UpdatePartnershipName => {
                        Arc::new(UpdatePartnershipNameStrategy::new(partnerships.clone()))
                    }
                    PostTransitionKind::UpdatePartnershipTerm => {
                        Arc::new(UpdatePartnershipTermStrategy::new(partnerships.clone()))
                    }
                    _ => Arc::new(UpdatePartnershipRegisteredOfficeAddressStrategy::new(
                        partnerships.clone(),
                    )),
                },
                (_, ChangeAction::Add) => Arc::new(AddPartnerStrategy::new(kind, validators.clone())),
                (_, ChangeAction::Remove) => {
                    Arc::new(RemovePartnerStrategy::new(kind, validators.clone()))
                }
                (_, ChangeAction::Update) => {
                    Arc::new(UpdatePartnerStrategy::new(kind, validators.clone()))
                }
            };
            dispatcher.register(strategy);
        }

        dispatcher
    }

    /// Registers a strategy under its own kind, replacing any previous one
    pub fn register(&mut self, strategy: Arc<dyn PostTransitionStrategy>) {
        self.strategies.insert(strategy.kind(), strategy);
    }

    /// The strategy for a kind string
    ///
    /// Lookup is exact and case-sensitive; an unknown or missing kind fails.
    pub fn resolve(&self, kind: Option<&str>) -> Result<Arc<dyn PostTransitionStrategy>, PartnershipError> {
        let strategy = kind
            .and_then(PostTransitionKind::from_description)
            .and_then(|k| self.strategies.get(&k).cloned());

        match strategy {
            Some(strategy) => {
                debug!(kind = %strategy.kind(), "Resolved post-transition strategy");
                Ok(strategy)
            }
            None => {
                let kind = kind.unwrap_or("null");
                error!(kind = %kind, "No post-transition strategy registered");
                Err(PartnershipError::service(format!(
                    "No strategy found for kind: {}",
                    kind
                )))
            }
        }
    }

    /// The strategy for `kind`, provided it applies to `entity`
    pub fn resolve_for(
        &self,
        kind: Option<&str>,
        entity: &PostTransitionEntity<'_>,
    ) -> Result<Arc<dyn PostTransitionStrategy>, PartnershipError> {
        let strategy = self.resolve(kind)?;
        if !entity.accepts(strategy.kind()) {
            warn!(kind = %strategy.kind(), entity = entity.name(), "Kind filed against the wrong resource");
            return Err(unsupported_entity(strategy.kind(), entity));
        }
        Ok(strategy)
    }

    /// Resolves the strategy for `kind` and runs it over `entity`
    pub async fn validate(
        &self,
        kind: Option<&str>,
        entity: PostTransitionEntity<'_>,
        transaction: &Transaction,
    ) -> Result<ValidationStatus, PartnershipError> {
        let strategy = self.resolve_for(kind, &entity)?;
        let mut status = ValidationStatus::ok();
        strategy.validate(entity, &mut status, transaction).await?;
        Ok(status)
    }

    /// The fee owed for `kind`
    pub fn cost(&self, kind: Option<&str>, costs: &CostsConfig) -> Result<Option<Cost>, PartnershipError> {
        Ok(self.resolve(kind)?.cost(costs))
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryCompanyProfiles;

    fn dispatcher() -> StrategyDispatcher {
        let profiles = Arc::new(InMemoryCompanyProfiles::new());
        StrategyDispatcher::new(
            GeneralPartnerValidator::new(profiles.clone()),
            LimitedPartnerValidator::new(profiles),
            LimitedPartnershipValidator::new(),
        )
    }

    #[test]
    fn test_every_kind_has_a_strategy() {
        let dispatcher = dispatcher();
        assert_eq!(dispatcher.len(), PostTransitionKind::ALL.len());
        for kind in PostTransitionKind::ALL {
            let strategy = dispatcher.resolve(Some(kind.description())).unwrap();
            assert_eq!(strategy.kind(), *kind);
        }
    }

    #[test]
    fn test_unknown_kind_is_a_service_error() {
        let error = dispatcher().resolve(Some("limited-partnership")).err().unwrap();
        assert!(matches!(error, PartnershipError::Service(_)));
        assert_eq!(error.to_string(), "No strategy found for kind: limited-partnership");
    }

    #[test]
    fn test_missing_kind_is_a_service_error() {
        let error = dispatcher().resolve(None).err().unwrap();
        assert_eq!(error.to_string(), "No strategy found for kind: null");
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!(dispatcher()
            .resolve(Some("limited-partnership#UPDATE-PARTNERSHIP-NAME"))
            .is_err());
    }

    #[test]
    fn test_kind_for_another_resource_is_refused() {
        let data = GeneralPartnerData::default();
        let entity = PostTransitionEntity::GeneralPartner(&data);
        let dispatcher = dispatcher();

        let error = dispatcher
            .resolve_for(Some("limited-partnership#add-limited-partner-person"), &entity)
            .err()
            .unwrap();
        assert_eq!(
            error.to_string(),
            "Strategy for kind limited-partnership#add-limited-partner-person cannot validate a general partner"
        );
        assert!(dispatcher
            .resolve_for(Some("limited-partnership#add-general-partner-person"), &entity)
            .is_ok());
    }

    #[test]
    fn test_empty_dispatcher_resolves_nothing() {
        let dispatcher = StrategyDispatcher::empty();
        assert!(dispatcher.is_empty());
        assert!(dispatcher
            .resolve(Some("limited-partnership#update-partnership-name"))
            .is_err());
    }

    #[test]
    fn test_only_name_updates_are_charged() {
        let dispatcher = dispatcher();
        let costs = CostsConfig::default();
        for kind in PostTransitionKind::ALL {
            let cost = dispatcher.cost(Some(kind.description()), &costs).unwrap();
            if *kind == PostTransitionKind::UpdatePartnershipName {
                assert_eq!(cost.map(|c| c.amount), Some("20.00".to_string()));
            } else {
                assert!(cost.is_none(), "{kind}");
            }
        }
    }
}
