//! Filing fees
//!
//! Fee amounts are configuration handed to whoever computes a cost; nothing
//! here reads global state.

use core_kernel::{Currency, Money};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::kind::{PostTransitionKind, PARTNERSHIP_KIND};

/// Fee amounts in pounds sterling
#[derive(Debug, Clone, PartialEq)]
pub struct CostsConfig {
    pub registration: Money,
    pub post_transition_update_name: Money,
}

impl Default for CostsConfig {
    fn default() -> Self {
        Self {
            registration: Money::new(dec!(100.00), Currency::GBP),
            post_transition_update_name: Money::new(dec!(20.00), Currency::GBP),
        }
    }
}

/// A payable fee, in the shape the payments service expects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cost {
    pub amount: String,
    pub available_payment_methods: Vec<String>,
    pub class_of_payment: Vec<String>,
    pub description: String,
    pub description_identifier: String,
    pub description_values: HashMap<String, String>,
    pub kind: String,
    pub resource_kind: String,
    pub product_type: String,
}

impl Cost {
    fn new(
        amount: &Money,
        description: &str,
        description_identifier: &str,
        resource_kind: &str,
        product_type: &str,
    ) -> Self {
        Self {
            amount: amount.to_amount_string(),
            available_payment_methods: vec!["credit-card".to_string()],
            class_of_payment: vec!["data-maintenance".to_string()],
            description: description.to_string(),
            description_identifier: description_identifier.to_string(),
            description_values: HashMap::new(),
            kind: "cost#cost".to_string(),
            resource_kind: resource_kind.to_string(),
            product_type: product_type.to_string(),
        }
    }

    /// The fee for registering a new partnership
    pub fn registration(config: &CostsConfig) -> Self {
        Self::new(
            &config.registration,
            "Register a Limited Partnership",
            "limited-partnership",
            PARTNERSHIP_KIND,
            "limited-partnership-registration",
        )
    }

    /// The fee for changing a partnership's name
    pub fn update_partnership_name(config: &CostsConfig) -> Self {
        Self::new(
            &config.post_transition_update_name,
            "Update a Limited Partnership name",
            "update-partnership-name",
            PostTransitionKind::UpdatePartnershipName.description(),
            "limited-partnership-update-name",
        )
    }
}
