//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use chrono::{Days, NaiveDate};
use core_kernel::calendar::today;
use core_kernel::Currency;
use domain_partnership::{
    ContributionSubType, Country, Nationality, PartnershipType, PostTransitionKind,
};
use proptest::prelude::*;
use proptest::sample::select;
use rust_decimal::Decimal;

/// Strategy for any recognised nationality
pub fn nationality_strategy() -> impl Strategy<Value = Nationality> {
    select(Nationality::ALL)
}

/// Strategy for any recognised country
pub fn country_strategy() -> impl Strategy<Value = Country> {
    select(Country::ALL)
}

/// Strategy for the four partnership types
pub fn partnership_type_strategy() -> impl Strategy<Value = PartnershipType> {
    select(PartnershipType::ALL)
}

/// Strategy for private fund partnership types
pub fn private_fund_strategy() -> impl Strategy<Value = PartnershipType> {
    prop_oneof![Just(PartnershipType::Pflp), Just(PartnershipType::Spflp)]
}

/// Strategy for standard partnership types
pub fn standard_partnership_strategy() -> impl Strategy<Value = PartnershipType> {
    prop_oneof![Just(PartnershipType::Lp), Just(PartnershipType::Slp)]
}

/// Strategy for every post-transition kind
pub fn post_transition_kind_strategy() -> impl Strategy<Value = PostTransitionKind> {
    select(PostTransitionKind::ALL)
}

/// Strategy for a non-empty set of contribution types
pub fn contribution_sub_types_strategy() -> impl Strategy<Value = Vec<ContributionSubType>> {
    proptest::collection::vec(select(ContributionSubType::ALL), 1..4)
}

/// Strategy for contribution currencies
pub fn contribution_currency_strategy() -> impl Strategy<Value = Currency> {
    prop_oneof![Just(Currency::GBP), Just(Currency::EUR), Just(Currency::USD)]
}

/// Strategy for positive contribution amounts as the filer types them
pub fn contribution_value_strategy() -> impl Strategy<Value = String> {
    (1i64..100_000_000i64).prop_map(|minor| Decimal::new(minor, 2).to_string())
}

/// Strategy for dates strictly before today
pub fn past_date_strategy() -> impl Strategy<Value = NaiveDate> {
    (1u64..30_000u64).prop_filter_map("date out of range", |days| {
        today().checked_sub_days(Days::new(days))
    })
}

/// Strategy for today or a later date
pub fn today_or_future_date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0u64..30_000u64).prop_filter_map("date out of range", |days| {
        today().checked_add_days(Days::new(days))
    })
}

/// Strategy for UK postcodes the register accepts
pub fn uk_postcode_strategy() -> impl Strategy<Value = String> {
    "(SW1A 1AA|BS1 4DJ|EH1 2DP|CF10 1EP|BT1 5GS|M1 1AE|B33 8TH|W1A 0AX)"
}
