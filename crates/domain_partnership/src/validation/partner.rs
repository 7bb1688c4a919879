//! Rules shared by general and limited partners

use std::sync::Arc;

use core_kernel::calendar;

use crate::error::PartnershipError;
use crate::kind;
use crate::partner::{LegalEntityDetails, PartnerData, PartnerSubject, PersonDetails};
use crate::ports::CompanyProfilePort;
use crate::transaction::Transaction;
use crate::validation::constraints::{FieldConstraints, LONG_TEXT, SHORT_TEXT};
use crate::validation::messages::{self, location};
use crate::validation::status::ValidationStatusError;

/// Shared partner checks
///
/// Holds the one collaborator partner validation needs: the company profile
/// lookup behind the date-effective-from window.
#[derive(Clone)]
pub struct PartnerValidator {
    company_profiles: Arc<dyn CompanyProfilePort>,
}

impl PartnerValidator {
    pub fn new(company_profiles: Arc<dyn CompanyProfilePort>) -> Self {
        Self { company_profiles }
    }

    /// Field-level constraints of the partner envelope and its subject
    pub fn check_fields(&self, partner: &PartnerData, constraints: &mut FieldConstraints) {
        constraints.past_date(partner.cease_date, location::CEASE_DATE, "Cease date");

        match &partner.subject {
            PartnerSubject::Person(person) => {
                constraints
                    .text(person.forename.as_deref(), location::FORENAME, "Forename", SHORT_TEXT)
                    .text(person.surname.as_deref(), location::SURNAME, "Surname", LONG_TEXT)
                    .text(
                        person.former_names.as_deref(),
                        location::FORMER_NAMES,
                        "Former names",
                        LONG_TEXT,
                    )
                    .past_date(person.date_of_birth, location::DATE_OF_BIRTH, "Date of birth")
                    .described(person.nationality1, location::NATIONALITY1, "First nationality")
                    .described(person.nationality2, location::NATIONALITY2, "Second nationality")
                    .address(
                        person.usual_residential_address.as_ref(),
                        location::USUAL_RESIDENTIAL_ADDRESS,
                    );
            }
            PartnerSubject::LegalEntity(entity) => {
                constraints
                    .text(
                        entity.legal_entity_name.as_deref(),
                        location::LEGAL_ENTITY_NAME,
                        "Legal Entity Name",
                        LONG_TEXT,
                    )
                    .text(entity.legal_form.as_deref(), location::LEGAL_FORM, "Legal Form", LONG_TEXT)
                    .text(
                        entity.governing_law.as_deref(),
                        location::GOVERNING_LAW,
                        "Governing Law",
                        LONG_TEXT,
                    )
                    .text(
                        entity.legal_entity_register_name.as_deref(),
                        location::LEGAL_ENTITY_REGISTER_NAME,
                        "Legal Entity Register Name",
                        LONG_TEXT,
                    )
                    .described(
                        entity.legal_entity_registration_location,
                        location::LEGAL_ENTITY_REGISTRATION_LOCATION,
                        "Legal Entity Registration Location",
                    )
                    .text(
                        entity.registered_company_number.as_deref(),
                        location::REGISTERED_COMPANY_NUMBER,
                        "Registered Company Number",
                        LONG_TEXT,
                    )
                    .address(
                        entity.principal_office_address.as_ref(),
                        location::PRINCIPAL_OFFICE_ADDRESS,
                    );
            }
            PartnerSubject::Unidentified => {}
        }
    }

    /// Required fields of a natural person
    pub fn check_not_null_person(&self, person: &PersonDetails) -> Vec<ValidationStatusError> {
        let mut errors = Vec::new();
        if person.forename.is_none() {
            errors.push(ValidationStatusError::new(messages::FORENAME_REQUIRED, location::FORENAME));
        }
        if person.surname.is_none() {
            errors.push(ValidationStatusError::new(messages::SURNAME_REQUIRED, location::SURNAME));
        }
        if person.date_of_birth.is_none() {
            errors.push(ValidationStatusError::new(
                messages::DATE_OF_BIRTH_REQUIRED,
                location::DATE_OF_BIRTH,
            ));
        }
        if person.nationality1.is_none() {
            errors.push(ValidationStatusError::new(
                messages::NATIONALITY1_REQUIRED,
                location::NATIONALITY1,
            ));
        }
        errors
    }

    /// Required fields of a legal entity
    pub fn check_not_null_legal_entity(
        &self,
        entity: &LegalEntityDetails,
    ) -> Vec<ValidationStatusError> {
        let checks = [
            (
                entity.legal_entity_name.is_none(),
                messages::LEGAL_ENTITY_NAME_REQUIRED,
                location::LEGAL_ENTITY_NAME,
            ),
            (
                entity.legal_form.is_none(),
                messages::LEGAL_FORM_REQUIRED,
                location::LEGAL_FORM,
            ),
            (
                entity.governing_law.is_none(),
                messages::GOVERNING_LAW_REQUIRED,
                location::GOVERNING_LAW,
            ),
            (
                entity.legal_entity_register_name.is_none(),
                messages::LEGAL_ENTITY_REGISTER_NAME_REQUIRED,
                location::LEGAL_ENTITY_REGISTER_NAME,
            ),
            (
                entity.legal_entity_registration_location.is_none(),
                messages::LEGAL_ENTITY_REGISTRATION_LOCATION_REQUIRED,
                location::LEGAL_ENTITY_REGISTRATION_LOCATION,
            ),
            (
                entity.registered_company_number.is_none(),
                messages::REGISTERED_COMPANY_NUMBER_REQUIRED,
                location::REGISTERED_COMPANY_NUMBER,
            ),
        ];

        checks
            .into_iter()
            .filter(|(missing, _, _)| *missing)
            .map(|(_, message, at)| ValidationStatusError::new(message, at))
            .collect()
    }

    /// Flags a second nationality equal to the first
    ///
    /// Nationalities compare by description.
    pub fn is_second_nationality_different(
        &self,
        person: &PersonDetails,
    ) -> Option<ValidationStatusError> {
        match (person.nationality1, person.nationality2) {
            (Some(first), Some(second)) if first.description() == second.description() => Some(
                ValidationStatusError::new(
                    messages::SECOND_NATIONALITY_DIFFERENT,
                    location::NATIONALITY2,
                ),
            ),
            _ => None,
        }
    }

    /// The date a partner's appointment takes effect
    ///
    /// When supplied it must be in the past. Transition and post-transition
    /// filings require it, and it must not precede the partnership's
    /// incorporation.
    pub async fn check_not_null_date_effective_from(
        &self,
        partner: &PartnerData,
        transaction: &Transaction,
    ) -> Result<Vec<ValidationStatusError>, PartnershipError> {
        let mut errors = Vec::new();
        let required = transaction.filing_mode().requires_date_effective_from();

        let Some(date) = partner.date_effective_from else {
            if required {
                errors.push(ValidationStatusError::new(
                    messages::DATE_EFFECTIVE_FROM_REQUIRED,
                    location::DATE_EFFECTIVE_FROM,
                ));
            }
            return Ok(errors);
        };

        if !calendar::is_in_past(date) {
            errors.push(ValidationStatusError::new(
                messages::DATE_EFFECTIVE_FROM_IN_PAST,
                location::DATE_EFFECTIVE_FROM,
            ));
        }

        if required {
            let company_number = transaction.company_number.as_deref().ok_or_else(|| {
                PartnershipError::service(format!(
                    "Transaction {} has no company number",
                    transaction.id
                ))
            })?;
            let profile = self
                .company_profiles
                .get_company_profile(company_number)
                .await?;
            if calendar::is_before(date, profile.date_of_creation) {
                errors.push(ValidationStatusError::new(
                    messages::DATE_EFFECTIVE_FROM_BEFORE_INCORPORATION,
                    location::DATE_EFFECTIVE_FROM,
                ));
            }
        }

        Ok(errors)
    }

    /// Fields a removal must supply
    pub fn check_remove_fields(&self, partner: &PartnerData) -> Vec<ValidationStatusError> {
        let mut errors = Vec::new();
        if partner.cease_date.is_none() {
            errors.push(ValidationStatusError::new(
                messages::CEASE_DATE_REQUIRED,
                location::CEASE_DATE,
            ));
        }
        if partner.remove_confirmation_checked != Some(true) {
            errors.push(ValidationStatusError::new(
                messages::REMOVE_CONFIRMATION_CHECKED_REQUIRED,
                location::REMOVE_CONFIRMATION_CHECKED,
            ));
        }
        errors
    }

    /// An update kind must say when the change happened
    pub fn check_date_of_update(&self, partner: &PartnerData) -> Vec<ValidationStatusError> {
        if kind::is_update_kind(partner.kind.as_deref()) && partner.date_of_update.is_none() {
            vec![ValidationStatusError::new(
                messages::DATE_OF_UPDATE_REQUIRED,
                location::DATE_OF_UPDATE,
            )]
        } else {
            Vec::new()
        }
    }

    /// Partners that are neither person nor legal entity yet
    pub fn check_identified(&self, partner: &PartnerData) -> Vec<ValidationStatusError> {
        if partner.is_identified() {
            Vec::new()
        } else {
            vec![ValidationStatusError::new(
                messages::SOME_FIELDS_MISSING,
                location::DATA,
            )]
        }
    }

    /// Required fields shared by partial validation of either partner type
    ///
    /// A legal entity giving a register name or legal form must give all its
    /// registration details. A person giving a forename or surname must name
    /// themselves and give a first nationality distinct from the second.
    /// Anything else is reported as missing fields.
    pub fn check_subject(&self, partner: &PartnerData) -> Vec<ValidationStatusError> {
        if let Some(entity) = partner.identified_legal_entity() {
            self.check_not_null_legal_entity(entity)
        } else if let Some(person) = partner.identified_person() {
            let mut errors = self.check_not_null_person(person);
            errors.extend(self.is_second_nationality_different(person));
            errors
        } else {
            self.check_identified(partner)
        }
    }

    /// Rules re-checked when an existing appointment is updated
    pub async fn check_update(
        &self,
        partner: &PartnerData,
        transaction: &Transaction,
    ) -> Result<Vec<ValidationStatusError>, PartnershipError> {
        let mut errors = Vec::new();
        if let Some(person) = partner.as_person() {
            errors.extend(self.check_not_null_person(person).into_iter().filter(|e| {
                e.location != location::DATE_OF_BIRTH
            }));
            errors.extend(self.is_second_nationality_different(person));
        }
        errors.extend(self.check_not_null_date_effective_from(partner, transaction).await?);
        errors.extend(self.check_date_of_update(partner));
        Ok(errors)
    }

    /// Address requirements of a new appointment
    pub fn check_required_addresses(&self, partner: &PartnerData) -> Vec<ValidationStatusError> {
        if let Some(entity) = partner.identified_legal_entity() {
            if entity.principal_office_address.is_none() {
                return vec![ValidationStatusError::new(
                    messages::PRINCIPAL_OFFICE_ADDRESS_REQUIRED,
                    location::PRINCIPAL_OFFICE_ADDRESS,
                )];
            }
        } else if let Some(person) = partner.identified_person() {
            if person.usual_residential_address.is_none() {
                return vec![ValidationStatusError::new(
                    messages::USUAL_RESIDENTIAL_ADDRESS_REQUIRED,
                    location::USUAL_RESIDENTIAL_ADDRESS,
                )];
            }
        }
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryCompanyProfiles;
    use crate::nationality::Nationality;
    use crate::ports::CompanyProfile;
    use crate::types::FilingMode;
    use chrono::{Days, NaiveDate};
    use proptest::prelude::*;

    fn validator() -> PartnerValidator {
        PartnerValidator::new(Arc::new(InMemoryCompanyProfiles::new()))
    }

    async fn validator_with_company(incorporated: NaiveDate) -> PartnerValidator {
        let profiles = InMemoryCompanyProfiles::with_profiles(vec![CompanyProfile {
            company_number: "LP123456".to_string(),
            company_name: "Acme Ventures LP".to_string(),
            date_of_creation: incorporated,
        }])
        .await;
        PartnerValidator::new(Arc::new(profiles))
    }

    fn person(n1: Option<Nationality>, n2: Option<Nationality>) -> PersonDetails {
        PersonDetails {
            forename: Some("Jack".to_string()),
            surname: Some("Jones".to_string()),
            date_of_birth: NaiveDate::from_ymd_opt(2000, 10, 3),
            nationality1: n1,
            nationality2: n2,
            ..Default::default()
        }
    }

    fn locations(errors: &[ValidationStatusError]) -> Vec<&str> {
        errors.iter().map(|e| e.location.as_str()).collect()
    }

    #[test]
    fn test_person_required_fields() {
        let errors = validator().check_not_null_person(&PersonDetails::default());
        assert_eq!(
            locations(&errors),
            vec![
                location::FORENAME,
                location::SURNAME,
                location::DATE_OF_BIRTH,
                location::NATIONALITY1
            ]
        );
        assert_eq!(errors[0].error, "Forename is required");
    }

    #[test]
    fn test_legal_entity_required_fields() {
        let entity = LegalEntityDetails {
            legal_entity_name: Some("Acme Holdings".to_string()),
            legal_form: Some("Limited Company".to_string()),
            ..Default::default()
        };
        let errors = validator().check_not_null_legal_entity(&entity);
        let messages: Vec<_> = errors.iter().map(|e| e.error.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Governing Law is required",
                "Legal Entity Register Name is required",
                "Legal Entity Registration Location is required",
                "Registered Company Number is required",
            ]
        );
    }

    #[test]
    fn test_unidentified_partner() {
        let errors = validator().check_subject(&PartnerData::default());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].error, "Some fields are missing");
        assert_eq!(errors[0].location, "data");
    }

    #[test]
    fn test_remove_fields() {
        let partner = PartnerData {
            remove_confirmation_checked: Some(false),
            ..Default::default()
        };
        let errors = validator().check_remove_fields(&partner);
        assert_eq!(
            locations(&errors),
            vec!["data.ceaseDate", "data.removeConfirmationChecked"]
        );
    }

    #[test]
    fn test_date_of_update_only_for_update_kinds() {
        let partner = PartnerData::default().with_kind("limited-partnership#update-general-partner-person");
        assert_eq!(
            validator().check_date_of_update(&partner)[0].error,
            "Date of update is required"
        );

        let partner = PartnerData::default().with_kind("limited-partnership#add-general-partner-person");
        assert!(validator().check_date_of_update(&partner).is_empty());
    }

    #[tokio::test]
    async fn test_date_effective_from_not_required_at_registration() {
        let transaction = Transaction::new("txn-1", FilingMode::Registration);
        let errors = validator()
            .check_not_null_date_effective_from(&PartnerData::default(), &transaction)
            .await
            .unwrap();
        assert!(errors.is_empty());
    }

    #[tokio::test]
    async fn test_date_effective_from_required_for_transition() {
        let transaction = Transaction::new("txn-1", FilingMode::Transition).with_company_number("LP123456");
        let errors = validator()
            .check_not_null_date_effective_from(&PartnerData::default(), &transaction)
            .await
            .unwrap();
        assert_eq!(errors[0].error, "Partner date effective from is required");
    }

    #[tokio::test]
    async fn test_date_effective_from_before_incorporation() {
        let validator = validator_with_company(NaiveDate::from_ymd_opt(2015, 6, 1).unwrap()).await;
        let transaction =
            Transaction::new("txn-1", FilingMode::PostTransition).with_company_number("LP123456");
        let partner = PartnerData {
            date_effective_from: NaiveDate::from_ymd_opt(2015, 5, 31),
            ..Default::default()
        };

        let errors = validator
            .check_not_null_date_effective_from(&partner, &transaction)
            .await
            .unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].error,
            "Partner date effective from cannot be before the incorporation date"
        );
        assert_eq!(errors[0].location, "data.dateEffectiveFrom");
    }

    #[tokio::test]
    async fn test_date_effective_from_on_incorporation_day_passes() {
        let incorporated = NaiveDate::from_ymd_opt(2015, 6, 1).unwrap();
        let validator = validator_with_company(incorporated).await;
        let transaction =
            Transaction::new("txn-1", FilingMode::Transition).with_company_number("LP123456");
        let partner = PartnerData {
            date_effective_from: Some(incorporated),
            ..Default::default()
        };

        let errors = validator
            .check_not_null_date_effective_from(&partner, &transaction)
            .await
            .unwrap();
        assert!(errors.is_empty());
    }

    #[tokio::test]
    async fn test_date_effective_from_in_future() {
        let validator = validator_with_company(NaiveDate::from_ymd_opt(2015, 6, 1).unwrap()).await;
        let transaction =
            Transaction::new("txn-1", FilingMode::Transition).with_company_number("LP123456");
        let partner = PartnerData {
            date_effective_from: calendar::today().checked_add_days(Days::new(3)),
            ..Default::default()
        };

        let errors = validator
            .check_not_null_date_effective_from(&partner, &transaction)
            .await
            .unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].error, "Partner date effective from must be in the past");
    }

    #[tokio::test]
    async fn test_profile_lookup_failure_propagates() {
        let transaction =
            Transaction::new("txn-1", FilingMode::Transition).with_company_number("LP999999");
        let partner = PartnerData {
            date_effective_from: NaiveDate::from_ymd_opt(2020, 1, 1),
            ..Default::default()
        };

        let error = validator()
            .check_not_null_date_effective_from(&partner, &transaction)
            .await
            .unwrap_err();
        assert!(matches!(error, PartnershipError::Port(_)));
    }

    #[tokio::test]
    async fn test_missing_company_number_is_a_service_error() {
        let transaction = Transaction::new("txn-1", FilingMode::Transition);
        let partner = PartnerData {
            date_effective_from: NaiveDate::from_ymd_opt(2020, 1, 1),
            ..Default::default()
        };

        let error = validator()
            .check_not_null_date_effective_from(&partner, &transaction)
            .await
            .unwrap_err();
        assert!(matches!(error, PartnershipError::Service(_)));
    }

    fn nationality() -> impl Strategy<Value = Nationality> {
        proptest::sample::select(Nationality::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn equal_nationalities_are_always_flagged(n in nationality()) {
            let error = validator().is_second_nationality_different(&person(Some(n), Some(n)));
            prop_assert_eq!(error.map(|e| e.location), Some(location::NATIONALITY2.to_string()));
        }

        #[test]
        fn distinct_or_missing_nationalities_are_never_flagged(
            n1 in nationality(),
            n2 in nationality(),
            drop_first in any::<bool>(),
            drop_second in any::<bool>(),
        ) {
            prop_assume!(n1 != n2 || drop_first || drop_second);
            let first = if drop_first { None } else { Some(n1) };
            let second = if drop_second { None } else { Some(n2) };
            prop_assert!(validator().is_second_nationality_different(&person(first, second)).is_none());
        }
    }
}
