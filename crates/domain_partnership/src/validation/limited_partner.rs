//! Limited partner validation
//!
//! Limited partners follow the general partner rules without the
//! not-disqualified statement, and add the capital contribution rules that
//! apply at registration:
//!
//! - private fund partnerships (PFLP, SPFLP) must not declare a contribution
//! - every other partnership type must declare a non-zero value, a currency
//!   and at least one contribution type

use once_cell::sync::Lazy;
use regex::Regex;
use core_kernel::{Currency, Money};
use serde_json::Value;
use std::sync::Arc;
use tracing::warn;

use crate::error::PartnershipError;
use crate::kind;
use crate::partner::LimitedPartnerData;
use crate::ports::CompanyProfilePort;
use crate::transaction::Transaction;
use crate::types::FilingMode;
use crate::validation::constraints::FieldConstraints;
use crate::validation::messages::{self, location};
use crate::validation::partner::PartnerValidator;
use crate::validation::status::ValidationStatusError;

static CONTRIBUTION_VALUE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+(\.\d{2})?$").expect("valid contribution pattern"));

/// Wire names of the capital contribution fields
const CONTRIBUTION_FIELDS: &[&str] = &[
    "contribution_currency_value",
    "contribution_currency_type",
    "contribution_sub_types",
];

/// Whether a contribution value is numerically zero
///
/// A value that does not parse is logged and treated as not zero; the
/// field-level pattern check reports malformed values.
fn is_zero_value(value: &str, currency: Option<Currency>) -> bool {
    match Money::parse(value, currency.unwrap_or(Currency::GBP)) {
        Ok(amount) => amount.is_zero(),
        Err(e) => {
            warn!(value = %value, error = %e, "Unparseable contribution currency value");
            false
        }
    }
}

#[derive(Clone)]
pub struct LimitedPartnerValidator {
    partner: PartnerValidator,
}

impl LimitedPartnerValidator {
    pub fn new(company_profiles: Arc<dyn CompanyProfilePort>) -> Self {
        Self {
            partner: PartnerValidator::new(company_profiles),
        }
    }

    pub fn partner_validator(&self) -> &PartnerValidator {
        &self.partner
    }

    fn check_fields(&self, data: &LimitedPartnerData) -> Vec<ValidationStatusError> {
        let mut constraints = FieldConstraints::new();
        self.partner.check_fields(&data.partner, &mut constraints);
        constraints
            .pattern(
                data.contribution_currency_value
                    .as_deref()
                    .filter(|v| !v.trim().is_empty()),
                &CONTRIBUTION_VALUE,
                location::DATA_CONTRIBUTION_CURRENCY_VALUE,
                messages::CONTRIBUTION_CURRENCY_VALUE_FORMAT,
            )
            .described_all(
                data.contribution_sub_types.as_deref(),
                location::DATA_CONTRIBUTION_SUB_TYPES,
                "Contribution sub types",
            )
            .described(data.partnership_type, location::PARTNERSHIP_TYPE, "Partnership type");
        constraints.finish()
    }

    /// Capital contribution rules
    ///
    /// Only registration filings carry contributions.
    pub fn validate_capital_contributions(
        &self,
        data: &LimitedPartnerData,
        transaction: &Transaction,
    ) -> Vec<ValidationStatusError> {
        let mut errors = Vec::new();
        if transaction.filing_mode() != FilingMode::Registration {
            return errors;
        }

        let private_fund = data
            .partnership_type
            .map(|t| t.is_private_fund())
            .unwrap_or(false);
        let has_sub_types = data
            .contribution_sub_types
            .as_ref()
            .map(|types| !types.is_empty())
            .unwrap_or(false);

        if private_fund {
            if data.contribution_currency_value.is_some() {
                errors.push(ValidationStatusError::new(
                    messages::PRIVATE_FUND_CONTRIBUTION_CURRENCY_VALUE,
                    location::CONTRIBUTION_CURRENCY_VALUE,
                ));
            }
            if data.contribution_currency_type.is_some() {
                errors.push(ValidationStatusError::new(
                    messages::PRIVATE_FUND_CONTRIBUTION_CURRENCY_TYPE,
                    location::CONTRIBUTION_CURRENCY_TYPE,
                ));
            }
            if has_sub_types {
                errors.push(ValidationStatusError::new(
                    messages::PRIVATE_FUND_CONTRIBUTION_SUB_TYPES,
                    location::CONTRIBUTION_SUB_TYPES,
                ));
            }
            return errors;
        }

        let value_missing = match data.contribution_currency_value.as_deref() {
            None => true,
            Some(value) => {
                value.trim().is_empty() || is_zero_value(value, data.contribution_currency_type)
            }
        };
        if value_missing {
            errors.push(ValidationStatusError::new(
                messages::CONTRIBUTION_CURRENCY_VALUE_REQUIRED,
                location::CONTRIBUTION_CURRENCY_VALUE,
            ));
        }
        if data.contribution_currency_type.is_none() {
            errors.push(ValidationStatusError::new(
                messages::CONTRIBUTION_CURRENCY_TYPE_REQUIRED,
                location::CONTRIBUTION_CURRENCY_TYPE,
            ));
        }
        if !has_sub_types {
            errors.push(ValidationStatusError::new(
                messages::CONTRIBUTION_SUB_TYPES_REQUIRED,
                location::CONTRIBUTION_SUB_TYPES,
            ));
        }
        errors
    }

    async fn partial_rules(
        &self,
        data: &LimitedPartnerData,
        transaction: &Transaction,
    ) -> Result<Vec<ValidationStatusError>, PartnershipError> {
        let mut errors = self.partner.check_subject(&data.partner);
        errors.extend(
            self.partner
                .check_not_null_date_effective_from(&data.partner, transaction)
                .await?,
        );
        errors.extend(self.validate_capital_contributions(data, transaction));
        Ok(errors)
    }

    async fn partial_errors(
        &self,
        data: &LimitedPartnerData,
        transaction: &Transaction,
    ) -> Result<Vec<ValidationStatusError>, PartnershipError> {
        let mut errors = self.check_fields(data);
        errors.extend(self.partial_rules(data, transaction).await?);
        Ok(errors)
    }

    /// Create-time validation; fails with every violation found
    pub async fn validate_partial(
        &self,
        data: &LimitedPartnerData,
        transaction: &Transaction,
    ) -> Result<(), PartnershipError> {
        PartnershipError::check(self.partial_errors(data, transaction).await?)
    }

    fn remove_rules(&self, data: &LimitedPartnerData) -> Vec<ValidationStatusError> {
        if kind::is_remove_kind(data.kind()) {
            self.partner.check_remove_fields(&data.partner)
        } else {
            Vec::new()
        }
    }

    /// Field constraints and remove rules of an existing appointment
    pub fn remove_status(&self, data: &LimitedPartnerData) -> Vec<ValidationStatusError> {
        let mut errors = self.check_fields(data);
        errors.extend(self.partner.check_remove_fields(&data.partner));
        errors
    }

    /// Removal of an existing appointment; fails with every violation found
    pub fn validate_remove(
        &self,
        data: &LimitedPartnerData,
        _transaction: &Transaction,
    ) -> Result<(), PartnershipError> {
        PartnershipError::check(self.remove_status(data))
    }

    async fn update_errors(
        &self,
        data: &LimitedPartnerData,
        transaction: &Transaction,
    ) -> Result<Vec<ValidationStatusError>, PartnershipError> {
        let mut errors = self.check_fields(data);
        errors.extend(self.partner.check_update(&data.partner, transaction).await?);
        Ok(errors)
    }

    /// Changes to an existing limited partner
    ///
    /// `changes` is the patch that produced `data`; contribution rules are
    /// re-checked only when it touches a contribution field.
    pub async fn validate_update(
        &self,
        data: &LimitedPartnerData,
        changes: &Value,
        transaction: &Transaction,
    ) -> Result<(), PartnershipError> {
        let mut errors = self.update_errors(data, transaction).await?;
        let touches_contributions = changes
            .as_object()
            .map(|fields| CONTRIBUTION_FIELDS.iter().any(|f| fields.contains_key(*f)))
            .unwrap_or(false);
        if touches_contributions {
            errors.extend(self.validate_capital_contributions(data, transaction));
        }
        PartnershipError::check(errors)
    }

    /// Completeness check; returns every violation instead of failing
    ///
    /// A new appointment is checked against the create rules and its
    /// required addresses. The remove rules are chained only when the kind
    /// is a remove kind, never unconditionally: a partner being appointed is
    /// not required to carry a cease date or a removal confirmation.
    pub async fn validate_full(
        &self,
        data: &LimitedPartnerData,
        transaction: &Transaction,
        is_remove_or_update: bool,
    ) -> Result<Vec<ValidationStatusError>, PartnershipError> {
        if !is_remove_or_update {
            let mut errors = self.partial_errors(data, transaction).await?;
            errors.extend(self.partner.check_required_addresses(&data.partner));
            errors.extend(self.remove_rules(data));
            return Ok(errors);
        }

        if kind::is_remove_kind(data.kind()) {
            Ok(self.remove_status(data))
        } else {
            self.update_errors(data, transaction).await
        }
    }
}
