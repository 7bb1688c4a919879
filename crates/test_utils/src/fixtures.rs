//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for the partnership domain.
//! These fixtures are designed to be consistent and predictable for unit tests.

use chrono::NaiveDate;
use core_kernel::{Currency, Money};
use domain_partnership::{
    Address, CompanyProfile, Country, FilingMode, LegalEntityDetails, Nationality, PersonDetails,
    Transaction,
};
use rust_decimal_macros::dec;

/// Fixture for addresses
pub struct AddressFixtures;

impl AddressFixtures {
    /// A complete address in England
    pub fn bristol() -> Address {
        Address::new("2", "Bridge Street", "Bristol", "BS1 4DJ", Country::England)
    }

    /// A complete address in Scotland
    pub fn edinburgh() -> Address {
        Address::new("14", "Castle Terrace", "Edinburgh", "EH1 2DP", Country::Scotland)
    }

    /// An address outside the UK, where a postcode is optional
    pub fn paris() -> Address {
        let mut address = Address::new("8", "Rue de Rivoli", "Paris", "", Country::France);
        address.postal_code = None;
        address
    }

    /// A Jersey postcode, which the UK registers reject
    pub fn jersey() -> Address {
        Address::new("1", "King Street", "St Helier", "JE2 4WE", Country::England)
    }
}

/// Fixture for the people and organisations appointed as partners
pub struct PartnerFixtures;

impl PartnerFixtures {
    /// A complete person
    pub fn jack_jones() -> PersonDetails {
        PersonDetails {
            forename: Some("Jack".to_string()),
            surname: Some("Jones".to_string()),
            date_of_birth: Some(DateFixtures::date_of_birth()),
            nationality1: Some(Nationality::British),
            usual_residential_address: Some(AddressFixtures::bristol()),
            ..Default::default()
        }
    }

    /// A complete legal entity
    pub fn acme_holdings() -> LegalEntityDetails {
        LegalEntityDetails {
            legal_entity_name: Some("Acme Holdings".to_string()),
            legal_form: Some("Limited Company".to_string()),
            governing_law: Some("Act of Parliament".to_string()),
            legal_entity_register_name: Some("Companies House".to_string()),
            legal_entity_registration_location: Some(Country::England),
            registered_company_number: Some("12345678".to_string()),
            principal_office_address: Some(AddressFixtures::bristol()),
        }
    }
}

/// Fixture for dates
pub struct DateFixtures;

impl DateFixtures {
    pub fn date_of_birth() -> NaiveDate {
        date(2000, 10, 3)
    }

    /// The day the fixture partnership was incorporated
    pub fn incorporated() -> NaiveDate {
        date(2015, 6, 1)
    }

    /// A change date after incorporation and well in the past
    pub fn change() -> NaiveDate {
        date(2024, 1, 10)
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Fixture for transactions and the registry
pub struct TransactionFixtures;

impl TransactionFixtures {
    /// Number of the fixture partnership on the register
    pub const COMPANY_NUMBER: &'static str = "LP123456";

    pub fn registration(id: &str) -> Transaction {
        Transaction::new(id, FilingMode::Registration)
    }

    pub fn transition(id: &str) -> Transaction {
        Transaction::new(id, FilingMode::Transition).with_company_number(Self::COMPANY_NUMBER)
    }

    pub fn post_transition(id: &str) -> Transaction {
        Transaction::new(id, FilingMode::PostTransition).with_company_number(Self::COMPANY_NUMBER)
    }

    /// The register entry behind `COMPANY_NUMBER`
    pub fn company_profile() -> CompanyProfile {
        CompanyProfile {
            company_number: Self::COMPANY_NUMBER.to_string(),
            company_name: "Bridge Street Ventures LP".to_string(),
            date_of_creation: DateFixtures::incorporated(),
        }
    }
}

/// Fixture for fees
pub struct MoneyFixtures;

impl MoneyFixtures {
    pub fn registration_fee() -> Money {
        Money::new(dec!(100.00), Currency::GBP)
    }

    pub fn name_change_fee() -> Money {
        Money::new(dec!(20.00), Currency::GBP)
    }
}
