//! Post-transition changes to the partnership itself

use async_trait::async_trait;
use tracing::debug;

use super::{unsupported_entity, PostTransitionEntity, PostTransitionStrategy};
use crate::cost::{Cost, CostsConfig};
use crate::error::PartnershipError;
use crate::kind::PostTransitionKind;
use crate::partnership::PartnershipData;
use crate::transaction::Transaction;
use crate::validation::{LimitedPartnershipValidator, ValidationStatus};

fn partnership<'a>(
    kind: PostTransitionKind,
    entity: PostTransitionEntity<'a>,
) -> Result<&'a PartnershipData, PartnershipError> {
    match entity {
        PostTransitionEntity::Partnership(data) => Ok(data),
        other => Err(unsupported_entity(kind, &other)),
    }
}

pub struct UpdatePartnershipRegisteredOfficeAddressStrategy {
    validator: LimitedPartnershipValidator,
}

impl UpdatePartnershipRegisteredOfficeAddressStrategy {
    pub fn new(validator: LimitedPartnershipValidator) -> Self {
        Self { validator }
    }
}

#[async_trait]
impl PostTransitionStrategy for UpdatePartnershipRegisteredOfficeAddressStrategy {
    fn kind(&self) -> PostTransitionKind {
        PostTransitionKind::UpdatePartnershipRegisteredOfficeAddress
    }

    async fn validate(
        &self,
        entity: PostTransitionEntity<'_>,
        status: &mut ValidationStatus,
        _transaction: &Transaction,
    ) -> Result<(), PartnershipError> {
        let data = partnership(self.kind(), entity)?;
        status.extend(self.validator.check_registered_office_address_update(data));
        debug!(kind = %self.kind(), valid = status.is_valid, "Validated partnership update");
        Ok(())
    }
}

/// A change of name; the only post-transition change that carries a fee
pub struct UpdatePartnershipNameStrategy {
    validator: LimitedPartnershipValidator,
}

impl UpdatePartnershipNameStrategy {
    pub fn new(validator: LimitedPartnershipValidator) -> Self {
        Self { validator }
    }
}

#[async_trait]
impl PostTransitionStrategy for UpdatePartnershipNameStrategy {
    fn kind(&self) -> PostTransitionKind {
        PostTransitionKind::UpdatePartnershipName
    }

    async fn validate(
        &self,
        entity: PostTransitionEntity<'_>,
        status: &mut ValidationStatus,
        _transaction: &Transaction,
    ) -> Result<(), PartnershipError> {
        let data = partnership(self.kind(), entity)?;
        status.extend(self.validator.check_name_update(data));
        debug!(kind = %self.kind(), valid = status.is_valid, "Validated partnership update");
        Ok(())
    }

    fn cost(&self, costs: &CostsConfig) -> Option<Cost> {
        Some(Cost::update_partnership_name(costs))
    }
}

pub struct UpdatePartnershipTermStrategy {
    validator: LimitedPartnershipValidator,
}

impl UpdatePartnershipTermStrategy {
    pub fn new(validator: LimitedPartnershipValidator) -> Self {
        Self { validator }
    }
}

#[async_trait]
impl PostTransitionStrategy for UpdatePartnershipTermStrategy {
    fn kind(&self) -> PostTransitionKind {
        PostTransitionKind::UpdatePartnershipTerm
    }

    async fn validate(
        &self,
        entity: PostTransitionEntity<'_>,
        status: &mut ValidationStatus,
        _transaction: &Transaction,
    ) -> Result<(), PartnershipError> {
        let data = partnership(self.kind(), entity)?;
        status.extend(self.validator.check_term_update(data));
        debug!(kind = %self.kind(), valid = status.is_valid, "Validated partnership update");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partner::GeneralPartnerData;
    use crate::types::{FilingMode, PartnershipNameEnding, Term};
    use chrono::NaiveDate;

    fn post_transition() -> Transaction {
        Transaction::new("txn-1", FilingMode::PostTransition).with_company_number("LP123456")
    }

    #[tokio::test]
    async fn test_name_update_requires_name_and_date_of_update() {
        let strategy = UpdatePartnershipNameStrategy::new(LimitedPartnershipValidator::new());
        let data = PartnershipData::default();
        let mut status = ValidationStatus::ok();

        strategy
            .validate(PostTransitionEntity::Partnership(&data), &mut status, &post_transition())
            .await
            .unwrap();

        let locations: Vec<_> = status.errors.iter().map(|e| e.location.as_str()).collect();
        assert_eq!(
            locations,
            vec!["data.partnershipName", "data.nameEnding", "data.dateOfUpdate"]
        );
    }

    #[tokio::test]
    async fn test_complete_name_update_passes_and_is_charged() {
        let strategy = UpdatePartnershipNameStrategy::new(LimitedPartnershipValidator::new());
        let data = PartnershipData {
            partnership_name: Some("Acme Ventures".to_string()),
            name_ending: Some(PartnershipNameEnding::LimitedPartnership),
            date_of_update: NaiveDate::from_ymd_opt(2024, 3, 1),
            ..Default::default()
        };
        let mut status = ValidationStatus::ok();

        strategy
            .validate(PostTransitionEntity::Partnership(&data), &mut status, &post_transition())
            .await
            .unwrap();

        assert!(status.is_valid, "{:?}", status.errors);
        let cost = strategy.cost(&CostsConfig::default()).unwrap();
        assert_eq!(cost.amount, "20.00");
        assert_eq!(cost.description, "Update a Limited Partnership name");
    }

    #[tokio::test]
    async fn test_term_update_is_free() {
        let strategy = UpdatePartnershipTermStrategy::new(LimitedPartnershipValidator::new());
        let data = PartnershipData {
            term: Some(Term::UntilDissolution),
            date_of_update: NaiveDate::from_ymd_opt(2024, 3, 1),
            ..Default::default()
        };
        let mut status = ValidationStatus::ok();

        strategy
            .validate(PostTransitionEntity::Partnership(&data), &mut status, &post_transition())
            .await
            .unwrap();

        assert!(status.is_valid);
        assert!(strategy.cost(&CostsConfig::default()).is_none());
    }

    #[tokio::test]
    async fn test_registered_office_address_required() {
        let strategy =
            UpdatePartnershipRegisteredOfficeAddressStrategy::new(LimitedPartnershipValidator::new());
        let data = PartnershipData {
            date_of_update: NaiveDate::from_ymd_opt(2024, 3, 1),
            ..Default::default()
        };
        let mut status = ValidationStatus::ok();

        strategy
            .validate(PostTransitionEntity::Partnership(&data), &mut status, &post_transition())
            .await
            .unwrap();

        assert_eq!(status.errors.len(), 1);
        assert_eq!(status.errors[0].error, "Registered office address is required");
    }

    #[tokio::test]
    async fn test_partner_entity_is_rejected() {
        let strategy = UpdatePartnershipTermStrategy::new(LimitedPartnershipValidator::new());
        let data = GeneralPartnerData::default();
        let mut status = ValidationStatus::ok();

        let result = strategy
            .validate(PostTransitionEntity::GeneralPartner(&data), &mut status, &post_transition())
            .await;

        assert!(matches!(result, Err(PartnershipError::Service(_))));
    }
}
