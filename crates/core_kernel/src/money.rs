//! Money types with precise decimal arithmetic
//!
//! This module provides a type-safe representation of monetary values
//! using rust_decimal, used for filing fees and for the currencies a limited
//! partner may contribute capital in.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Currency codes following ISO 4217
///
/// The list covers the currencies accepted for a limited partner's capital
/// contribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    GBP,
    EUR,
    USD,
    AUD,
    BRL,
    CAD,
    CHF,
    CNY,
    CZK,
    DKK,
    HKD,
    HUF,
    ILS,
    INR,
    JPY,
    KRW,
    MXN,
    MYR,
    NOK,
    NZD,
    PHP,
    PLN,
    RUB,
    SEK,
    SGD,
    THB,
    TRY,
    TWD,
    ZAR,
}

impl Currency {
    /// Every supported currency, in display order
    pub const ALL: &'static [Currency] = &[
        Currency::GBP, Currency::EUR, Currency::USD, Currency::AUD, Currency::BRL,
        Currency::CAD, Currency::CHF, Currency::CNY, Currency::CZK, Currency::DKK,
        Currency::HKD, Currency::HUF, Currency::ILS, Currency::INR, Currency::JPY,
        Currency::KRW, Currency::MXN, Currency::MYR, Currency::NOK, Currency::NZD,
        Currency::PHP, Currency::PLN, Currency::RUB, Currency::SEK, Currency::SGD,
        Currency::THB, Currency::TRY, Currency::TWD, Currency::ZAR,
    ];

    /// Returns the number of decimal places for this currency
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::JPY | Currency::KRW | Currency::HUF => 0,
            _ => 2,
        }
    }

    /// Returns the ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::GBP => "GBP",
            Currency::EUR => "EUR",
            Currency::USD => "USD",
            Currency::AUD => "AUD",
            Currency::BRL => "BRL",
            Currency::CAD => "CAD",
            Currency::CHF => "CHF",
            Currency::CNY => "CNY",
            Currency::CZK => "CZK",
            Currency::DKK => "DKK",
            Currency::HKD => "HKD",
            Currency::HUF => "HUF",
            Currency::ILS => "ILS",
            Currency::INR => "INR",
            Currency::JPY => "JPY",
            Currency::KRW => "KRW",
            Currency::MXN => "MXN",
            Currency::MYR => "MYR",
            Currency::NOK => "NOK",
            Currency::NZD => "NZD",
            Currency::PHP => "PHP",
            Currency::PLN => "PLN",
            Currency::RUB => "RUB",
            Currency::SEK => "SEK",
            Currency::SGD => "SGD",
            Currency::THB => "THB",
            Currency::TRY => "TRY",
            Currency::TWD => "TWD",
            Currency::ZAR => "ZAR",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Currency {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::ALL
            .iter()
            .copied()
            .find(|c| c.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| MoneyError::UnknownCurrency(s.to_string()))
    }
}

/// Errors that can occur during money operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),
}

/// A monetary amount with associated currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Creates a new Money value
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self {
            amount: amount.round_dp(4),
            currency,
        }
    }

    /// Parses a decimal amount such as `"100.00"`
    pub fn parse(amount: &str, currency: Currency) -> Result<Self, MoneyError> {
        let value = Decimal::from_str(amount.trim())
            .map_err(|_| MoneyError::InvalidAmount(amount.to_string()))?;
        Ok(Self::new(value, currency))
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Formats the amount with the currency's decimal places and no symbol,
    /// e.g. `"100.00"`, the form payment services expect.
    pub fn to_amount_string(&self) -> String {
        let dp = self.currency.decimal_places();
        format!("{:.dp$}", self.amount, dp = dp as usize)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.currency.code(), self.to_amount_string())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn amounts_round_trip_through_amount_string(pence in 0i64..1_000_000_000i64) {
            let money = Money::new(Decimal::new(pence, 2), Currency::GBP);
            let reparsed = Money::parse(&money.to_amount_string(), Currency::GBP).unwrap();
            prop_assert_eq!(reparsed, money);
        }
    }
}
