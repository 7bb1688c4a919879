//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else.

use chrono::NaiveDate;
use core_kernel::Currency;
use domain_partnership::{
    Address, ContributionSubType, GeneralPartnerData, Jurisdiction, LegalEntityDetails,
    LimitedPartnerData, PartnerData, PartnershipData, PartnershipNameEnding, PartnershipType,
    PersonDetails, PostTransitionKind, Term,
};

use crate::fixtures::{AddressFixtures, PartnerFixtures};

/// Builder for the fields every partner shares
#[derive(Debug, Clone)]
pub struct PartnerBuilder {
    data: PartnerData,
}

impl PartnerBuilder {
    /// A complete person
    pub fn person() -> Self {
        Self::with_person(PartnerFixtures::jack_jones())
    }

    pub fn with_person(details: PersonDetails) -> Self {
        Self {
            data: PartnerData::person(details),
        }
    }

    /// A complete legal entity
    pub fn legal_entity() -> Self {
        Self::with_legal_entity(PartnerFixtures::acme_holdings())
    }

    pub fn with_legal_entity(details: LegalEntityDetails) -> Self {
        Self {
            data: PartnerData::legal_entity(details),
        }
    }

    /// Neither a person nor a legal entity
    pub fn unidentified() -> Self {
        Self {
            data: PartnerData::default(),
        }
    }

    pub fn kind(mut self, kind: PostTransitionKind) -> Self {
        self.data.kind = Some(kind.description().to_string());
        self
    }

    pub fn cease_date(mut self, date: NaiveDate) -> Self {
        self.data.cease_date = Some(date);
        self
    }

    pub fn remove_confirmed(mut self) -> Self {
        self.data.remove_confirmation_checked = Some(true);
        self
    }

    pub fn date_effective_from(mut self, date: NaiveDate) -> Self {
        self.data.date_effective_from = Some(date);
        self
    }

    pub fn date_of_update(mut self, date: NaiveDate) -> Self {
        self.data.date_of_update = Some(date);
        self
    }

    /// Answers every "update this address?" question
    pub fn address_choices(mut self, required: bool) -> Self {
        self.data.update_usual_residential_address_required = Some(required);
        self.data.update_service_address_required = Some(required);
        self.data.update_principal_office_address_required = Some(required);
        self
    }

    pub fn build(self) -> PartnerData {
        self.data
    }
}

/// Builder for general partners
#[derive(Debug, Clone)]
pub struct GeneralPartnerBuilder {
    partner: PartnerBuilder,
    service_address: Option<Address>,
    not_disqualified_statement_checked: Option<bool>,
}

impl GeneralPartnerBuilder {
    /// A person ready for registration
    pub fn person() -> Self {
        Self {
            partner: PartnerBuilder::person(),
            service_address: Some(AddressFixtures::bristol()),
            not_disqualified_statement_checked: Some(true),
        }
    }

    /// A legal entity ready for registration
    pub fn legal_entity() -> Self {
        Self::from_partner(PartnerBuilder::legal_entity())
    }

    pub fn from_partner(partner: PartnerBuilder) -> Self {
        Self {
            partner,
            service_address: None,
            not_disqualified_statement_checked: None,
        }
    }

    /// Changes the shared partner fields
    pub fn partner(mut self, change: impl FnOnce(PartnerBuilder) -> PartnerBuilder) -> Self {
        self.partner = change(self.partner);
        self
    }

    pub fn service_address(mut self, address: Option<Address>) -> Self {
        self.service_address = address;
        self
    }

    pub fn not_disqualified(mut self, checked: Option<bool>) -> Self {
        self.not_disqualified_statement_checked = checked;
        self
    }

    pub fn build(self) -> GeneralPartnerData {
        let mut data = GeneralPartnerData::new(self.partner.build());
        data.service_address = self.service_address;
        data.not_disqualified_statement_checked = self.not_disqualified_statement_checked;
        data
    }
}

/// Builder for limited partners
#[derive(Debug, Clone)]
pub struct LimitedPartnerBuilder {
    partner: PartnerBuilder,
    contribution_currency_value: Option<String>,
    contribution_currency_type: Option<Currency>,
    contribution_sub_types: Option<Vec<ContributionSubType>>,
    partnership_type: Option<PartnershipType>,
}

impl LimitedPartnerBuilder {
    /// A person with no contribution details
    pub fn person() -> Self {
        Self::from_partner(PartnerBuilder::person())
    }

    pub fn legal_entity() -> Self {
        Self::from_partner(PartnerBuilder::legal_entity())
    }

    pub fn from_partner(partner: PartnerBuilder) -> Self {
        Self {
            partner,
            contribution_currency_value: None,
            contribution_currency_type: None,
            contribution_sub_types: None,
            partnership_type: None,
        }
    }

    pub fn partner(mut self, change: impl FnOnce(PartnerBuilder) -> PartnerBuilder) -> Self {
        self.partner = change(self.partner);
        self
    }

    /// A complete capital contribution in pounds
    pub fn contribution(mut self, value: &str) -> Self {
        self.contribution_currency_value = Some(value.to_string());
        self.contribution_currency_type = Some(Currency::GBP);
        self.contribution_sub_types = Some(vec![ContributionSubType::Money]);
        self
    }

    pub fn contribution_value(mut self, value: Option<&str>) -> Self {
        self.contribution_currency_value = value.map(str::to_string);
        self
    }

    pub fn contribution_currency(mut self, currency: Option<Currency>) -> Self {
        self.contribution_currency_type = currency;
        self
    }

    pub fn contribution_sub_types(mut self, sub_types: Option<Vec<ContributionSubType>>) -> Self {
        self.contribution_sub_types = sub_types;
        self
    }

    pub fn partnership_type(mut self, partnership_type: PartnershipType) -> Self {
        self.partnership_type = Some(partnership_type);
        self
    }

    pub fn build(self) -> LimitedPartnerData {
        let mut data = LimitedPartnerData::new(self.partner.build());
        data.contribution_currency_value = self.contribution_currency_value;
        data.contribution_currency_type = self.contribution_currency_type;
        data.contribution_sub_types = self.contribution_sub_types;
        data.partnership_type = self.partnership_type;
        data
    }
}

/// Builder for the partnership itself
#[derive(Debug, Clone)]
pub struct PartnershipBuilder {
    data: PartnershipData,
}

impl PartnershipBuilder {
    /// A standard partnership ready for registration
    pub fn registration() -> Self {
        Self {
            data: PartnershipData {
                partnership_name: Some("Bridge Street Ventures".to_string()),
                name_ending: Some(PartnershipNameEnding::LimitedPartnership),
                email: Some("partners@example.com".to_string()),
                jurisdiction: Some(Jurisdiction::EnglandAndWales),
                registered_office_address: Some(AddressFixtures::bristol()),
                principal_place_of_business_address: Some(AddressFixtures::bristol()),
                lawful_purpose_statement_checked: Some(true),
                term: Some(Term::ByAgreement),
                sic_codes: Some(vec!["12345".to_string()]),
                partnership_type: Some(PartnershipType::Lp),
                ..Default::default()
            },
        }
    }

    /// A private fund partnership ready for registration
    pub fn private_fund() -> Self {
        Self::registration()
            .partnership_type(PartnershipType::Pflp)
            .term(None)
            .sic_codes(None)
    }

    /// An existing partnership being transitioned
    pub fn transition(partnership_number: &str) -> Self {
        let mut builder = Self::registration();
        builder.data.name_ending = None;
        builder.data.principal_place_of_business_address = None;
        builder.data.lawful_purpose_statement_checked = None;
        builder.data.partnership_number = Some(partnership_number.to_string());
        builder
    }

    /// An empty post-transition change of the given kind
    pub fn change(kind: PostTransitionKind) -> Self {
        Self {
            data: PartnershipData {
                kind: Some(kind.description().to_string()),
                ..Default::default()
            },
        }
    }

    pub fn partnership_name(mut self, name: &str) -> Self {
        self.data.partnership_name = Some(name.to_string());
        self
    }

    pub fn name_ending(mut self, ending: Option<PartnershipNameEnding>) -> Self {
        self.data.name_ending = ending;
        self
    }

    pub fn partnership_type(mut self, partnership_type: PartnershipType) -> Self {
        self.data.partnership_type = Some(partnership_type);
        self
    }

    pub fn term(mut self, term: Option<Term>) -> Self {
        self.data.term = term;
        self
    }

    pub fn sic_codes(mut self, codes: Option<Vec<&str>>) -> Self {
        self.data.sic_codes = codes.map(|c| c.into_iter().map(str::to_string).collect());
        self
    }

    pub fn registered_office_address(mut self, address: Option<Address>) -> Self {
        self.data.registered_office_address = address;
        self
    }

    pub fn date_of_update(mut self, date: NaiveDate) -> Self {
        self.data.date_of_update = Some(date);
        self
    }

    pub fn build(self) -> PartnershipData {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_partnership::PartnerSubject;

    #[test]
    fn test_general_partner_person_defaults() {
        let data = GeneralPartnerBuilder::person().build();
        assert!(data.partner.as_person().is_some());
        assert_eq!(data.not_disqualified_statement_checked, Some(true));
        assert!(data.service_address.is_some());
    }

    #[test]
    fn test_limited_partner_contribution() {
        let data = LimitedPartnerBuilder::legal_entity()
            .contribution("1000.00")
            .partnership_type(PartnershipType::Slp)
            .build();
        assert!(matches!(data.partner.subject, PartnerSubject::LegalEntity(_)));
        assert_eq!(data.contribution_currency_type, Some(Currency::GBP));
    }

    #[test]
    fn test_private_fund_has_no_term() {
        let data = PartnershipBuilder::private_fund().build();
        assert!(data.is_private_fund());
        assert!(data.term.is_none());
        assert!(data.sic_codes.is_none());
    }
}
