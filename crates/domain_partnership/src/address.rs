//! Address types

use serde::{Deserialize, Serialize};

use crate::country::Country;

/// A postal address as supplied by the filer
///
/// Every field is optional on the wire so that a partially completed address
/// can be stored and reported on field by field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub premises: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line_1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line_2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<Country>,
}

impl Address {
    /// Creates an address with the mandatory parts filled in
    pub fn new(
        premises: impl Into<String>,
        address_line_1: impl Into<String>,
        locality: impl Into<String>,
        postal_code: impl Into<String>,
        country: Country,
    ) -> Self {
        Self {
            premises: Some(premises.into()),
            address_line_1: Some(address_line_1.into()),
            address_line_2: None,
            locality: Some(locality.into()),
            region: None,
            postal_code: Some(postal_code.into()),
            country: Some(country),
        }
    }

    /// Formats address for display
    pub fn format(&self) -> String {
        let first_line = match (&self.premises, &self.address_line_1) {
            (Some(premises), Some(line1)) => format!("{} {}", premises, line1),
            (Some(only), None) | (None, Some(only)) => only.clone(),
            (None, None) => String::new(),
        };
        let mut lines = vec![first_line];
        lines.extend(self.address_line_2.iter().cloned());
        lines.extend(self.locality.iter().cloned());
        lines.extend(self.region.iter().cloned());
        lines.extend(self.postal_code.iter().cloned());
        lines.extend(self.country.map(|c| c.description().to_string()));
        lines.retain(|l| !l.is_empty());
        lines.join("\n")
    }
}
