//! General partner validation
//!
//! # Rules
//!
//! ## Create (partial)
//! - Field-level constraints on every supplied field
//! - Person: name, date of birth and first nationality; distinct second
//!   nationality; the not-disqualified statement at registration and when
//!   adding a partner after transition
//! - Legal entity: registration details
//! - Date effective from window
//!
//! ## Full
//! - Create rules plus the addresses a new appointment needs, or the remove
//!   or update rules for an existing appointment

use std::sync::Arc;

use crate::error::PartnershipError;
use crate::kind;
use crate::partner::GeneralPartnerData;
use crate::ports::CompanyProfilePort;
use crate::transaction::Transaction;
use crate::types::FilingMode;
use crate::validation::constraints::FieldConstraints;
use crate::validation::messages::{self, location};
use crate::validation::partner::PartnerValidator;
use crate::validation::status::ValidationStatusError;

#[derive(Clone)]
pub struct GeneralPartnerValidator {
    partner: PartnerValidator,
}

impl GeneralPartnerValidator {
    pub fn new(company_profiles: Arc<dyn CompanyProfilePort>) -> Self {
        Self {
            partner: PartnerValidator::new(company_profiles),
        }
    }

    pub fn partner_validator(&self) -> &PartnerValidator {
        &self.partner
    }

    fn check_fields(&self, data: &GeneralPartnerData) -> Vec<ValidationStatusError> {
        let mut constraints = FieldConstraints::new();
        self.partner.check_fields(&data.partner, &mut constraints);
        constraints.address(data.service_address.as_ref(), location::SERVICE_ADDRESS);
        constraints.finish()
    }

    /// The statement is owed by people joining a partnership: at
    /// registration, or when added after transition.
    fn check_not_disqualified(
        &self,
        data: &GeneralPartnerData,
        transaction: &Transaction,
    ) -> Option<ValidationStatusError> {
        data.partner.identified_person()?;
        let applies = match transaction.filing_mode() {
            FilingMode::Registration => true,
            FilingMode::PostTransition => kind::is_add_kind(data.kind()),
            _ => false,
        };
        if applies && data.not_disqualified_statement_checked != Some(true) {
            Some(ValidationStatusError::new(
                messages::NOT_DISQUALIFIED_STATEMENT_CHECKED,
                location::NOT_DISQUALIFIED_STATEMENT_CHECKED,
            ))
        } else {
            None
        }
    }

    async fn partial_rules(
        &self,
        data: &GeneralPartnerData,
        transaction: &Transaction,
    ) -> Result<Vec<ValidationStatusError>, PartnershipError> {
        let mut errors = self.partner.check_subject(&data.partner);
        errors.extend(self.check_not_disqualified(data, transaction));
        errors.extend(
            self.partner
                .check_not_null_date_effective_from(&data.partner, transaction)
                .await?,
        );
        Ok(errors)
    }

    fn required_addresses(&self, data: &GeneralPartnerData) -> Vec<ValidationStatusError> {
        let mut errors = self.partner.check_required_addresses(&data.partner);
        if data.partner.identified_person().is_some() && data.service_address.is_none() {
            errors.push(ValidationStatusError::new(
                messages::SERVICE_ADDRESS_REQUIRED,
                location::SERVICE_ADDRESS,
            ));
        }
        errors
    }

    async fn partial_errors(
        &self,
        data: &GeneralPartnerData,
        transaction: &Transaction,
    ) -> Result<Vec<ValidationStatusError>, PartnershipError> {
        let mut errors = self.check_fields(data);
        errors.extend(self.partial_rules(data, transaction).await?);
        Ok(errors)
    }

    /// Create-time validation; fails with every violation found
    pub async fn validate_partial(
        &self,
        data: &GeneralPartnerData,
        transaction: &Transaction,
    ) -> Result<(), PartnershipError> {
        PartnershipError::check(self.partial_errors(data, transaction).await?)
    }

    /// Field constraints and remove rules of an existing appointment
    pub fn remove_status(&self, data: &GeneralPartnerData) -> Vec<ValidationStatusError> {
        let mut errors = self.check_fields(data);
        errors.extend(self.partner.check_remove_fields(&data.partner));
        errors
    }

    /// Removal of an existing appointment; fails with every violation found
    pub fn validate_remove(
        &self,
        data: &GeneralPartnerData,
        _transaction: &Transaction,
    ) -> Result<(), PartnershipError> {
        PartnershipError::check(self.remove_status(data))
    }

    async fn update_errors(
        &self,
        data: &GeneralPartnerData,
        transaction: &Transaction,
    ) -> Result<Vec<ValidationStatusError>, PartnershipError> {
        let mut errors = self.check_fields(data);
        errors.extend(self.partner.check_update(&data.partner, transaction).await?);
        Ok(errors)
    }

    /// Changes to an existing appointment; fails with every violation found
    pub async fn validate_update(
        &self,
        data: &GeneralPartnerData,
        transaction: &Transaction,
    ) -> Result<(), PartnershipError> {
        PartnershipError::check(self.update_errors(data, transaction).await?)
    }

    /// Completeness check; returns every violation instead of failing
    ///
    /// Only collaborator failures are returned as errors.
    pub async fn validate_full(
        &self,
        data: &GeneralPartnerData,
        transaction: &Transaction,
        is_remove_or_update: bool,
    ) -> Result<Vec<ValidationStatusError>, PartnershipError> {
        if !is_remove_or_update {
            let mut errors = self.partial_errors(data, transaction).await?;
            errors.extend(self.required_addresses(data));
            return Ok(errors);
        }

        if kind::is_remove_kind(data.kind()) {
            Ok(self.remove_status(data))
        } else {
            self.update_errors(data, transaction).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryCompanyProfiles;
    use crate::address::Address;
    use crate::country::Country;
    use crate::nationality::Nationality;
    use crate::partner::{LegalEntityDetails, PartnerData, PartnerSubject, PersonDetails};
    use chrono::NaiveDate;

    fn validator() -> GeneralPartnerValidator {
        GeneralPartnerValidator::new(Arc::new(InMemoryCompanyProfiles::new()))
    }

    fn address() -> Address {
        Address::new("2", "Bridge Street", "Bristol", "BS1 4DJ", Country::England)
    }

    fn person() -> GeneralPartnerData {
        GeneralPartnerData {
            partner: PartnerData::person(PersonDetails {
                forename: Some("Jack".to_string()),
                surname: Some("Jones".to_string()),
                date_of_birth: NaiveDate::from_ymd_opt(2000, 10, 3),
                nationality1: Some(Nationality::British),
                usual_residential_address: Some(address()),
                ..Default::default()
            }),
            service_address: Some(address()),
            not_disqualified_statement_checked: Some(true),
        }
    }

    fn registration() -> Transaction {
        Transaction::new("txn-1", FilingMode::Registration)
    }

    #[tokio::test]
    async fn test_partial_accepts_complete_person() {
        assert!(validator().validate_partial(&person(), &registration()).await.is_ok());
    }

    #[tokio::test]
    async fn test_partial_reports_all_violations_at_once() {
        let mut data = person();
        data.not_disqualified_statement_checked = None;
        if let PartnerSubject::Person(person) = &mut data.partner.subject {
            person.forename = None;
            person.nationality2 = Some(Nationality::British);
        }

        let error = validator().validate_partial(&data, &registration()).await.unwrap_err();
        let messages: Vec<_> = error
            .validation_errors()
            .unwrap()
            .iter()
            .map(|e| e.error.as_str())
            .collect();
        assert_eq!(
            messages,
            vec![
                "Forename is required",
                "Second nationality must be different from the first",
                "Not Disqualified Statement must be checked",
            ]
        );
    }

    #[tokio::test]
    async fn test_not_disqualified_not_needed_in_default_mode() {
        let mut data = person();
        data.not_disqualified_statement_checked = None;
        data.partner.date_effective_from = NaiveDate::from_ymd_opt(2020, 1, 1);
        let transaction = Transaction::new("txn-1", FilingMode::Default);
        assert!(validator().validate_partial(&data, &transaction).await.is_ok());
    }

    #[tokio::test]
    async fn test_not_disqualified_for_post_transition_add() {
        let mut data = person();
        data.not_disqualified_statement_checked = Some(false);
        data.partner.kind = Some("limited-partnership#add-general-partner-person".to_string());
        let profiles = InMemoryCompanyProfiles::with_profiles(vec![crate::ports::CompanyProfile {
            company_number: "LP123456".to_string(),
            company_name: "Acme Ventures LP".to_string(),
            date_of_creation: NaiveDate::from_ymd_opt(2010, 1, 1).unwrap(),
        }])
        .await;
        data.partner.date_effective_from = NaiveDate::from_ymd_opt(2020, 1, 1);
        let validator = GeneralPartnerValidator::new(Arc::new(profiles));
        let transaction =
            Transaction::new("txn-1", FilingMode::PostTransition).with_company_number("LP123456");

        let errors = validator.validate_full(&data, &transaction, false).await.unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].location, "data.notDisqualifiedStatementChecked");
    }

    #[tokio::test]
    async fn test_full_legal_entity_requires_principal_office_address() {
        let data = GeneralPartnerData::new(PartnerData::legal_entity(LegalEntityDetails {
            legal_entity_name: Some("Acme Holdings".to_string()),
            legal_form: Some("Limited Company".to_string()),
            governing_law: Some("Act of Parliament".to_string()),
            legal_entity_register_name: Some("Companies House".to_string()),
            legal_entity_registration_location: Some(Country::England),
            registered_company_number: Some("12345678".to_string()),
            principal_office_address: None,
        }));

        let errors = validator().validate_full(&data, &registration(), false).await.unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].error, "Principal office address is required");
    }

    #[tokio::test]
    async fn test_remove_validation() {
        let mut data = person();
        data.partner.kind = Some("limited-partnership#remove-general-partner-person".to_string());
        data.partner.cease_date = NaiveDate::from_ymd_opt(2024, 3, 1);
        data.partner.remove_confirmation_checked = Some(true);

        assert!(validator().validate_remove(&data, &registration()).is_ok());
        let errors = validator().validate_full(&data, &registration(), true).await.unwrap();
        assert!(errors.is_empty());
    }

    #[tokio::test]
    async fn test_update_requires_date_of_update() {
        let mut data = person();
        data.partner.kind = Some("limited-partnership#update-general-partner-person".to_string());
        let transaction = Transaction::new("txn-1", FilingMode::Default);

        let error = validator().validate_update(&data, &transaction).await.unwrap_err();
        let errors = error.validation_errors().unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].location, "data.dateOfUpdate");
    }
}
