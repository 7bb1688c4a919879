//! The externally owned transaction
//!
//! A transaction aggregates links to the sub-resources this service owns.
//! It is read-only from the validation core's point of view.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::types::FilingMode;

/// A sub-resource linked to a transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionResource {
    pub kind: String,
    #[serde(default)]
    pub links: HashMap<String, String>,
}

impl TransactionResource {
    /// A resource whose `resource` and `validation_status` links follow the
    /// sub-resource URI.
    pub fn new(kind: impl Into<String>, uri: &str) -> Self {
        let mut links = HashMap::new();
        links.insert("resource".to_string(), uri.to_string());
        links.insert(
            "validation_status".to_string(),
            format!("{}/validation-status", uri),
        );
        Self {
            kind: kind.into(),
            links,
        }
    }

    /// Adds the costs link for a fee-bearing resource
    pub fn with_costs(mut self, uri: &str) -> Self {
        self.links
            .insert("costs".to_string(), format!("{}/costs", uri));
        self
    }
}

/// A filing transaction
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_number: Option<String>,
    #[serde(default, rename = "filing_mode", skip_serializing_if = "Option::is_none")]
    pub filing_mode: Option<String>,
    /// Linked sub-resources keyed by URI
    #[serde(default)]
    pub resources: HashMap<String, TransactionResource>,
}

impl Transaction {
    pub fn new(id: impl Into<String>, filing_mode: FilingMode) -> Self {
        Self {
            id: id.into(),
            company_number: None,
            filing_mode: Some(filing_mode.description().to_string()),
            resources: HashMap::new(),
        }
    }

    /// Sets the number of the partnership the transaction changes
    pub fn with_company_number(mut self, company_number: impl Into<String>) -> Self {
        self.company_number = Some(company_number.into());
        self
    }

    /// The filing mode governing validation
    pub fn filing_mode(&self) -> FilingMode {
        FilingMode::from_description(self.filing_mode.as_deref())
    }

    /// Whether the sub-resource at `uri` belongs to this transaction with
    /// the given kind
    pub fn is_linked(&self, uri: &str, kind: &str) -> bool {
        self.resources
            .get(uri)
            .map(|resource| resource.kind == kind)
            .unwrap_or(false)
    }

    /// Whether the sub-resource at `uri` belongs to this transaction with
    /// any of the given kinds
    pub fn is_linked_as_any(&self, uri: &str, kinds: &[&str]) -> bool {
        kinds.iter().any(|kind| self.is_linked(uri, kind))
    }

    /// URIs of every linked resource of the given kind
    pub fn resource_uris_of_kind<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a str> {
        self.resources
            .iter()
            .filter(move |(_, resource)| resource.kind == kind)
            .map(|(uri, _)| uri.as_str())
    }
}

/// Base URI of everything this service links into a transaction
pub fn transaction_uri(transaction_id: &str) -> String {
    format!("/transactions/{}", transaction_id)
}

pub fn incorporation_uri(transaction_id: &str, id: &str) -> String {
    format!(
        "{}/incorporation/limited-partnership/{}",
        transaction_uri(transaction_id),
        id
    )
}

pub fn partnership_uri(transaction_id: &str, id: &str) -> String {
    format!(
        "{}/limited-partnership/partnership/{}",
        transaction_uri(transaction_id),
        id
    )
}

pub fn general_partner_uri(transaction_id: &str, id: &str) -> String {
    format!(
        "{}/limited-partnership/general-partner/{}",
        transaction_uri(transaction_id),
        id
    )
}

pub fn limited_partner_uri(transaction_id: &str, id: &str) -> String {
    format!(
        "{}/limited-partnership/limited-partner/{}",
        transaction_uri(transaction_id),
        id
    )
}
