//! Partnership data

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::address::Address;
use crate::types::{Jurisdiction, PartnershipNameEnding, PartnershipType, Term};

/// The partnership being registered, transitioned or changed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartnershipData {
    /// Post-transition change kind; absent during registration and transition
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partnership_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_ending: Option<PartnershipNameEnding>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partnership_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jurisdiction: Option<Jurisdiction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registered_office_address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub principal_place_of_business_address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lawful_purpose_statement_checked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term: Option<Term>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sic_codes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partnership_type: Option<PartnershipType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_update: Option<NaiveDate>,
}

impl PartnershipData {
    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    pub fn is_private_fund(&self) -> bool {
        self.partnership_type
            .map(|t| t.is_private_fund())
            .unwrap_or(false)
    }

    /// The registered name, including its ending
    pub fn full_name(&self) -> Option<String> {
        let name = self.partnership_name.as_deref()?;
        Some(match self.name_ending {
            Some(ending) if ending.is_known() => format!("{} {}", name, ending),
            _ => name.to_string(),
        })
    }
}
