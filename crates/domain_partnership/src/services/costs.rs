//! Fee calculation

use std::sync::Arc;
use tracing::debug;

use crate::cost::{Cost, CostsConfig};
use crate::error::PartnershipError;
use crate::kind::{PostTransitionKind, PARTNERSHIP_KIND};
use crate::strategy::StrategyDispatcher;
use crate::transaction::Transaction;
use crate::types::FilingMode;

/// Works out what a transaction owes for a resource
///
/// Registering a partnership carries the registration fee; transitions are
/// free; after transition each change kind owns its fee through its strategy.
#[derive(Clone)]
pub struct CostsService {
    config: CostsConfig,
    dispatcher: Arc<StrategyDispatcher>,
}

impl CostsService {
    pub fn new(config: CostsConfig, dispatcher: Arc<StrategyDispatcher>) -> Self {
        Self { config, dispatcher }
    }

    pub fn config(&self) -> &CostsConfig {
        &self.config
    }

    /// The fees owed for a resource of `kind` in `transaction`
    pub fn costs(
        &self,
        transaction: &Transaction,
        kind: Option<&str>,
    ) -> Result<Vec<Cost>, PartnershipError> {
        let mode = transaction.filing_mode();
        let costs = match mode {
            FilingMode::Registration if kind.unwrap_or(PARTNERSHIP_KIND) == PARTNERSHIP_KIND => {
                vec![Cost::registration(&self.config)]
            }
            FilingMode::PostTransition => self
                .dispatcher
                .cost(kind, &self.config)?
                .into_iter()
                .collect(),
            _ => Vec::new(),
        };

        debug!(
            transaction_id = %transaction.id,
            filing_mode = %mode.description(),
            kind = kind.unwrap_or("none"),
            count = costs.len(),
            "Calculated costs"
        );
        Ok(costs)
    }

    /// Whether the resource will carry a costs link
    pub fn is_chargeable(&self, transaction: &Transaction, kind: Option<&str>) -> bool {
        match transaction.filing_mode() {
            FilingMode::Registration => kind.unwrap_or(PARTNERSHIP_KIND) == PARTNERSHIP_KIND,
            FilingMode::PostTransition => kind
                .and_then(PostTransitionKind::from_description)
                .and_then(|k| self.dispatcher.resolve(Some(k.description())).ok())
                .map(|strategy| strategy.cost(&self.config).is_some())
                .unwrap_or(false),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryCompanyProfiles;
    use crate::validation::{
        GeneralPartnerValidator, LimitedPartnerValidator, LimitedPartnershipValidator,
    };

    fn service() -> CostsService {
        let profiles = Arc::new(InMemoryCompanyProfiles::new());
        let dispatcher = StrategyDispatcher::new(
            GeneralPartnerValidator::new(profiles.clone()),
            LimitedPartnerValidator::new(profiles),
            LimitedPartnershipValidator::new(),
        );
        CostsService::new(CostsConfig::default(), Arc::new(dispatcher))
    }

    #[test]
    fn test_registration_is_charged() {
        let transaction = Transaction::new("txn-1", FilingMode::Registration);
        let costs = service().costs(&transaction, None).unwrap();
        assert_eq!(costs.len(), 1);
        assert_eq!(costs[0].amount, "100.00");
        assert!(service().is_chargeable(&transaction, Some(PARTNERSHIP_KIND)));
    }

    #[test]
    fn test_transition_is_free() {
        let transaction = Transaction::new("txn-1", FilingMode::Transition);
        assert!(service().costs(&transaction, Some(PARTNERSHIP_KIND)).unwrap().is_empty());
    }

    #[test]
    fn test_post_transition_uses_strategy_cost() {
        let transaction = Transaction::new("txn-1", FilingMode::PostTransition);
        let service = service();

        let costs = service
            .costs(&transaction, Some("limited-partnership#update-partnership-name"))
            .unwrap();
        assert_eq!(costs[0].amount, "20.00");

        assert!(service
            .costs(&transaction, Some("limited-partnership#update-partnership-term"))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_post_transition_unknown_kind_fails() {
        let transaction = Transaction::new("txn-1", FilingMode::PostTransition);
        let error = service()
            .costs(&transaction, Some(PARTNERSHIP_KIND))
            .unwrap_err();
        assert_eq!(
            error.to_string(),
            "No strategy found for kind: limited-partnership#limited-partnership"
        );
    }
}
