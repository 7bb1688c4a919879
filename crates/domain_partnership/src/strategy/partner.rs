//! Add, remove and update strategies for general and limited partners

use async_trait::async_trait;
use tracing::debug;

use super::{unsupported_entity, PostTransitionEntity, PostTransitionStrategy};
use crate::error::PartnershipError;
use crate::kind::{KindSubject, PostTransitionKind};
use crate::partner::{GeneralPartnerData, LimitedPartnerData, PartnerData};
use crate::transaction::Transaction;
use crate::validation::messages::{self, location};
use crate::validation::{
    GeneralPartnerValidator, LimitedPartnerValidator, ValidationStatus, ValidationStatusError,
};

/// The validators partner strategies delegate to
#[derive(Clone)]
pub struct PartnerValidators {
    general_partners: GeneralPartnerValidator,
    limited_partners: LimitedPartnerValidator,
}

impl PartnerValidators {
    pub fn new(
        general_partners: GeneralPartnerValidator,
        limited_partners: LimitedPartnerValidator,
    ) -> Self {
        Self {
            general_partners,
            limited_partners,
        }
    }
}

fn with_kind(partner: &PartnerData, kind: PostTransitionKind) -> PartnerData {
    partner.clone().with_kind(kind.description())
}

fn general_partner(data: &GeneralPartnerData, kind: PostTransitionKind) -> GeneralPartnerData {
    GeneralPartnerData {
        partner: with_kind(&data.partner, kind),
        ..data.clone()
    }
}

fn limited_partner(data: &LimitedPartnerData, kind: PostTransitionKind) -> LimitedPartnerData {
    LimitedPartnerData {
        partner: with_kind(&data.partner, kind),
        ..data.clone()
    }
}

/// A new appointment after transition
pub struct AddPartnerStrategy {
    kind: PostTransitionKind,
    validators: PartnerValidators,
}

impl AddPartnerStrategy {
    pub fn new(kind: PostTransitionKind, validators: PartnerValidators) -> Self {
        Self { kind, validators }
    }
}

#[async_trait]
impl PostTransitionStrategy for AddPartnerStrategy {
    fn kind(&self) -> PostTransitionKind {
        self.kind
    }

    async fn validate(
        &self,
        entity: PostTransitionEntity<'_>,
        status: &mut ValidationStatus,
        transaction: &Transaction,
    ) -> Result<(), PartnershipError> {
        let errors = match (self.kind.subject().is_general_partner(), entity) {
            (true, PostTransitionEntity::GeneralPartner(data)) => {
                let data = general_partner(data, self.kind);
                self.validators
                    .general_partners
                    .validate_full(&data, transaction, false)
                    .await?
            }
            (false, PostTransitionEntity::LimitedPartner(data)) => {
                let data = limited_partner(data, self.kind);
                self.validators
                    .limited_partners
                    .validate_full(&data, transaction, false)
                    .await?
            }
            (_, entity) => return Err(unsupported_entity(self.kind, &entity)),
        };

        debug!(kind = %self.kind, errors = errors.len(), "Validated partner addition");
        status.extend(errors);
        Ok(())
    }
}

/// Cessation of an existing appointment
pub struct RemovePartnerStrategy {
    kind: PostTransitionKind,
    validators: PartnerValidators,
}

impl RemovePartnerStrategy {
    pub fn new(kind: PostTransitionKind, validators: PartnerValidators) -> Self {
        Self { kind, validators }
    }
}

#[async_trait]
impl PostTransitionStrategy for RemovePartnerStrategy {
    fn kind(&self) -> PostTransitionKind {
        self.kind
    }

    async fn validate(
        &self,
        entity: PostTransitionEntity<'_>,
        status: &mut ValidationStatus,
        _transaction: &Transaction,
    ) -> Result<(), PartnershipError> {
        let errors = match (self.kind.subject().is_general_partner(), entity) {
            (true, PostTransitionEntity::GeneralPartner(data)) => self
                .validators
                .general_partners
                .remove_status(&general_partner(data, self.kind)),
            (false, PostTransitionEntity::LimitedPartner(data)) => self
                .validators
                .limited_partners
                .remove_status(&limited_partner(data, self.kind)),
            (_, entity) => return Err(unsupported_entity(self.kind, &entity)),
        };

        debug!(kind = %self.kind, errors = errors.len(), "Validated partner removal");
        status.extend(errors);
        Ok(())
    }
}

/// Changes to the details of an existing appointment
pub struct UpdatePartnerStrategy {
    kind: PostTransitionKind,
    validators: PartnerValidators,
}

impl UpdatePartnerStrategy {
    pub fn new(kind: PostTransitionKind, validators: PartnerValidators) -> Self {
        Self { kind, validators }
    }

    /// A person states whether their addresses change; a legal entity
    /// states whether its principal office address does. Only general
    /// partners hold a service address.
    fn check_choices(&self, partner: &PartnerData) -> Vec<ValidationStatusError> {
        let subject = self.kind.subject();
        let mut errors = Vec::new();

        if subject.is_legal_entity() {
            if partner.update_principal_office_address_required.is_none() {
                errors.push(ValidationStatusError::new(
                    messages::UPDATE_PRINCIPAL_OFFICE_ADDRESS_CHOICE_REQUIRED,
                    location::UPDATE_PRINCIPAL_OFFICE_ADDRESS_REQUIRED,
                ));
            }
            return errors;
        }

        if partner.update_usual_residential_address_required.is_none() {
            errors.push(ValidationStatusError::new(
                messages::UPDATE_USUAL_RESIDENTIAL_ADDRESS_CHOICE_REQUIRED,
                location::UPDATE_USUAL_RESIDENTIAL_ADDRESS_REQUIRED,
            ));
        }
        if subject == KindSubject::GeneralPartnerPerson
            && partner.update_service_address_required.is_none()
        {
            errors.push(ValidationStatusError::new(
                messages::UPDATE_SERVICE_ADDRESS_CHOICE_REQUIRED,
                location::UPDATE_SERVICE_ADDRESS_REQUIRED,
            ));
        }
        errors
    }
}

#[async_trait]
impl PostTransitionStrategy for UpdatePartnerStrategy {
    fn kind(&self) -> PostTransitionKind {
        self.kind
    }

    async fn validate(
        &self,
        entity: PostTransitionEntity<'_>,
        status: &mut ValidationStatus,
        transaction: &Transaction,
    ) -> Result<(), PartnershipError> {
        let errors = match (self.kind.subject().is_general_partner(), entity) {
            (true, PostTransitionEntity::GeneralPartner(data)) => {
                let data = general_partner(data, self.kind);
                let mut errors = self
                    .validators
                    .general_partners
                    .validate_full(&data, transaction, true)
                    .await?;
                errors.extend(self.check_choices(&data.partner));
                errors
            }
            (false, PostTransitionEntity::LimitedPartner(data)) => {
                let data = limited_partner(data, self.kind);
                let mut errors = self
                    .validators
                    .limited_partners
                    .validate_full(&data, transaction, true)
                    .await?;
                errors.extend(self.check_choices(&data.partner));
                errors
            }
            (_, entity) => return Err(unsupported_entity(self.kind, &entity)),
        };

        debug!(kind = %self.kind, errors = errors.len(), "Validated partner update");
        status.extend(errors);
        Ok(())
    }
}
