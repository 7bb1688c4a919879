//! Limited partnership validation
//!
//! # Rules
//!
//! ## Journey specific
//! - Registration: name ending required
//! - Any other incorporation kind: partnership number required
//!
//! ## Common
//! - Email, jurisdiction and registered office address always required
//! - Registration also requires the principal place of business and the
//!   lawful purpose statement
//!
//! ## Partnership type specific
//! - Private fund partnerships (PFLP, SPFLP) have no term and no SIC codes
//! - Other types registering must supply both

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::PartnershipError;
use crate::partnership::PartnershipData;
use crate::types::IncorporationKind;
use crate::validation::constraints::{FieldConstraints, LONG_TEXT};
use crate::validation::messages::{self, location};
use crate::validation::status::ValidationStatusError;

static PARTNERSHIP_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(LP|SL|NL)\d{6}$").expect("valid partnership number pattern"));

fn error(message: &str, at: &str) -> ValidationStatusError {
    ValidationStatusError::new(message, at)
}

#[derive(Debug, Clone, Default)]
pub struct LimitedPartnershipValidator;

impl LimitedPartnershipValidator {
    pub fn new() -> Self {
        Self
    }

    /// Field-level constraints on every supplied field
    pub fn check_fields(&self, data: &PartnershipData) -> Vec<ValidationStatusError> {
        let mut constraints = FieldConstraints::new();
        constraints
            .text(
                data.partnership_name.as_deref(),
                location::PARTNERSHIP_NAME,
                "Partnership name",
                LONG_TEXT,
            )
            .described(data.name_ending, location::NAME_ENDING, "Name ending")
            .pattern(
                data.partnership_number.as_deref(),
                &PARTNERSHIP_NUMBER,
                location::PARTNERSHIP_NUMBER,
                messages::PARTNERSHIP_NUMBER_FORMAT,
            )
            .email(data.email.as_deref(), location::EMAIL)
            .described(data.jurisdiction, location::JURISDICTION, "Jurisdiction")
            .address(
                data.registered_office_address.as_ref(),
                location::REGISTERED_OFFICE_ADDRESS,
            )
            .address(
                data.principal_place_of_business_address.as_ref(),
                location::PRINCIPAL_PLACE_OF_BUSINESS_ADDRESS,
            )
            .described(data.term, location::TERM, "Term")
            .sic_codes(data.sic_codes.as_deref(), location::SIC_CODES)
            .described(data.partnership_type, location::PARTNERSHIP_TYPE, "Partnership type");

        let mut errors = constraints.finish();
        if let (Some(name), Some(ending)) = (&data.partnership_name, data.name_ending) {
            let combined = name.chars().count() + 1 + ending.description().chars().count();
            if name.chars().count() <= LONG_TEXT && combined > LONG_TEXT {
                errors.push(error(messages::PARTNERSHIP_NAME_TOO_LONG, location::PARTNERSHIP_NAME));
            }
        }
        errors
    }

    /// Registration names the partnership; every other journey identifies
    /// an existing one by number.
    pub fn check_journey_specific_fields(
        &self,
        data: &PartnershipData,
        incorporation_kind: Option<IncorporationKind>,
    ) -> Vec<ValidationStatusError> {
        match incorporation_kind {
            Some(IncorporationKind::Registration) if data.name_ending.is_none() => {
                vec![error(messages::NAME_ENDING_REQUIRED, location::NAME_ENDING)]
            }
            Some(IncorporationKind::Transition) if data.partnership_number.is_none() => {
                vec![error(messages::PARTNERSHIP_NUMBER_REQUIRED, location::PARTNERSHIP_NUMBER)]
            }
            _ => Vec::new(),
        }
    }

    fn partial_errors(
        &self,
        data: &PartnershipData,
        incorporation_kind: Option<IncorporationKind>,
    ) -> Vec<ValidationStatusError> {
        let mut errors = self.check_fields(data);
        errors.extend(self.check_journey_specific_fields(data, incorporation_kind));
        errors
    }

    /// Create and update validation; fails with every violation found
    pub fn validate_partial(
        &self,
        data: &PartnershipData,
        incorporation_kind: Option<IncorporationKind>,
    ) -> Result<(), PartnershipError> {
        PartnershipError::check(self.partial_errors(data, incorporation_kind))
    }

    pub fn check_common_fields(
        &self,
        data: &PartnershipData,
        incorporation_kind: Option<IncorporationKind>,
    ) -> Vec<ValidationStatusError> {
        let mut errors = Vec::new();
        if data.email.is_none() {
            errors.push(error(messages::EMAIL_REQUIRED, location::EMAIL));
        }
        if data.jurisdiction.is_none() {
            errors.push(error(messages::JURISDICTION_REQUIRED, location::JURISDICTION));
        }
        if data.registered_office_address.is_none() {
            errors.push(error(
                messages::REGISTERED_OFFICE_ADDRESS_REQUIRED,
                location::REGISTERED_OFFICE_ADDRESS,
            ));
        }
        if incorporation_kind == Some(IncorporationKind::Registration) {
            if data.principal_place_of_business_address.is_none() {
                errors.push(error(
                    messages::PRINCIPAL_PLACE_OF_BUSINESS_ADDRESS_REQUIRED,
                    location::PRINCIPAL_PLACE_OF_BUSINESS_ADDRESS,
                ));
            }
            if data.lawful_purpose_statement_checked != Some(true) {
                errors.push(error(
                    messages::LAWFUL_PURPOSE_STATEMENT_CHECKED_REQUIRED,
                    location::LAWFUL_PURPOSE_STATEMENT_CHECKED,
                ));
            }
        }
        errors
    }

    pub fn check_partnership_type_specific_fields(
        &self,
        data: &PartnershipData,
        incorporation_kind: Option<IncorporationKind>,
    ) -> Vec<ValidationStatusError> {
        let mut errors = Vec::new();
        let has_sic_codes = data
            .sic_codes
            .as_ref()
            .map(|codes| !codes.is_empty())
            .unwrap_or(false);

        if data.is_private_fund() {
            if data.term.is_some() {
                errors.push(error(messages::TERM_NOT_REQUIRED, location::TERM));
            }
            if has_sic_codes {
                errors.push(error(messages::SIC_CODES_NOT_REQUIRED, location::SIC_CODES));
            }
        } else if incorporation_kind == Some(IncorporationKind::Registration) {
            if data.term.is_none() {
                errors.push(error(messages::TERM_REQUIRED, location::TERM));
            }
            if !has_sic_codes {
                errors.push(error(messages::SIC_CODES_REQUIRED, location::SIC_CODES));
            }
        }
        errors
    }

    /// Completeness check; returns every violation instead of failing
    pub fn validate_full(
        &self,
        data: &PartnershipData,
        incorporation_kind: Option<IncorporationKind>,
    ) -> Vec<ValidationStatusError> {
        let mut errors = self.partial_errors(data, incorporation_kind);
        errors.extend(self.check_common_fields(data, incorporation_kind));
        errors.extend(self.check_partnership_type_specific_fields(data, incorporation_kind));
        errors
    }

    fn check_date_of_update(&self, data: &PartnershipData) -> Option<ValidationStatusError> {
        data.date_of_update
            .is_none()
            .then(|| error(messages::DATE_OF_UPDATE_REQUIRED, location::DATE_OF_UPDATE))
    }

    /// A post-transition change of registered office address
    pub fn check_registered_office_address_update(
        &self,
        data: &PartnershipData,
    ) -> Vec<ValidationStatusError> {
        let mut errors = self.check_fields(data);
        if data.registered_office_address.is_none() {
            errors.push(error(
                messages::REGISTERED_OFFICE_ADDRESS_REQUIRED,
                location::REGISTERED_OFFICE_ADDRESS,
            ));
        }
        errors.extend(self.check_date_of_update(data));
        errors
    }

    /// A post-transition change of name
    pub fn check_name_update(&self, data: &PartnershipData) -> Vec<ValidationStatusError> {
        let mut errors = self.check_fields(data);
        if data.partnership_name.is_none() {
            errors.push(error(messages::PARTNERSHIP_NAME_REQUIRED, location::PARTNERSHIP_NAME));
        }
        if data.name_ending.is_none() {
            errors.push(error(messages::NAME_ENDING_REQUIRED, location::NAME_ENDING));
        }
        errors.extend(self.check_date_of_update(data));
        errors
    }

    /// A post-transition change of term
    pub fn check_term_update(&self, data: &PartnershipData) -> Vec<ValidationStatusError> {
        let mut errors = self.check_fields(data);
        if data.term.is_none() {
            errors.push(error(messages::TERM_REQUIRED, location::TERM));
        }
        errors.extend(self.check_date_of_update(data));
        errors
    }
}
