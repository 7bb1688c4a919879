//! Field-level constraints
//!
//! Structural checks that do not depend on the filing journey: length
//! bounds, allowed characters, enum membership, past dates, address shape.
//! Every failing check on a field adds its own error; one failure never
//! hides another on the same field.

use chrono::NaiveDate;
use core_kernel::calendar;
use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidateEmail;

use crate::address::Address;
use crate::described::Described;
use crate::validation::messages;
use crate::validation::status::ValidationStatusError;

/// Maximum length of a forename
pub const SHORT_TEXT: usize = 50;
/// Maximum length of surnames, former names and legal entity fields
pub const LONG_TEXT: usize = 160;
/// Maximum length of address lines other than premises
pub const ADDRESS_LINE: usize = 50;
/// Maximum length of premises
pub const PREMISES: usize = 200;
/// Maximum length of a postcode
pub const POSTCODE: usize = 15;
/// Maximum number of SIC codes
pub const MAX_SIC_CODES: usize = 4;

/// Latin letters (including accented forms), digits and the punctuation
/// company-law text uses
static VALID_CHARACTERS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^[-,.:; 0-9A-Z&@$£¥€'"«»?!/\\()\[\]{}<>*=#%+ÀÁÂÃÄÅĀĂĄÆǼÇĆĈĊČÞĎÐÈÉÊËĒĔĖĘĚĜĞĠĢĤĦÌÍÎÏĨĪĬĮİĴĶĹĻĽĿŁÑŃŅŇŊÒÓÔÕÖØŌŎŐǾŒŔŖŘŚŜŞŠŢŤŦÙÚÛÜŨŪŬŮŰŲŴẀẂẄỲÝŶŸŹŻŽa-zſƒǺàáâãäåāăąæǽçćĉċčþďðèéêëēĕėęěĝģğġĥħìíîïĩīĭįĵķĺļľŀłñńņňŋòóôõöøōŏőǿœŕŗřśŝşšţťŧùúûüũūŭůűųŵẁẃẅỳýŷÿźżž]*$"#,
    )
    .expect("valid character pattern")
});

static UK_POSTCODE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z]{1,2}\d[A-Za-z\d]? ?\d[A-Za-z]{2}$").expect("valid postcode pattern")
});

static SIC_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{5}$").expect("valid SIC code pattern"));

/// Crown dependencies use UK-shaped postcodes but are not part of the UK
const NON_MAINLAND_PREFIXES: &[&str] = &["JE", "GY", "IM"];

/// Whether `value` uses only characters the registry accepts
pub fn has_valid_characters(value: &str) -> bool {
    VALID_CHARACTERS.is_match(value)
}

/// Whether `value` is shaped like a UK postcode
pub fn is_uk_postcode(value: &str) -> bool {
    UK_POSTCODE.is_match(value.trim())
}

/// Whether `value` belongs to a Crown dependency rather than the UK mainland
pub fn is_non_mainland_postcode(value: &str) -> bool {
    let upper = value.trim().to_uppercase();
    NON_MAINLAND_PREFIXES
        .iter()
        .any(|prefix| upper.starts_with(prefix))
}

/// Accumulates field-level violations for one DTO
#[derive(Debug, Default)]
pub struct FieldConstraints {
    errors: Vec<ValidationStatusError>,
}

impl FieldConstraints {
    pub fn new() -> Self {
        Self::default()
    }

    fn add(&mut self, message: impl Into<String>, location: &str) {
        self.errors.push(ValidationStatusError::new(message, location));
    }

    /// Length bounds and allowed characters of an optional text field
    pub fn text(&mut self, value: Option<&str>, location: &str, label: &str, max: usize) -> &mut Self {
        if let Some(value) = value {
            let length = value.chars().count();
            if length < 1 {
                self.add(messages::too_short(label), location);
            }
            if length > max {
                self.add(messages::too_long(label, max), location);
            }
            if !has_valid_characters(value) {
                self.add(messages::invalid_characters(label), location);
            }
        }
        self
    }

    /// A text field that must be present
    pub fn required_text(
        &mut self,
        value: Option<&str>,
        location: &str,
        label: &str,
        max: usize,
    ) -> &mut Self {
        match value {
            None => self.add(messages::required(label), location),
            Some(_) => {
                self.text(value, location, label, max);
            }
        }
        self
    }

    /// A date that, when supplied, must be strictly before today
    pub fn past_date(&mut self, value: Option<NaiveDate>, location: &str, label: &str) -> &mut Self {
        if let Some(date) = value {
            if !calendar::is_in_past(date) {
                self.add(messages::must_be_in_past(label), location);
            }
        }
        self
    }

    /// A described enumeration value must be a recognised one
    pub fn described<T: Described>(&mut self, value: Option<T>, location: &str, label: &str) -> &mut Self {
        if let Some(value) = value {
            if !value.is_known() {
                self.add(messages::must_be_valid(label), location);
            }
        }
        self
    }

    /// Every enumeration value in a list must be recognised
    pub fn described_all<T: Described>(
        &mut self,
        values: Option<&[T]>,
        location: &str,
        label: &str,
    ) -> &mut Self {
        if let Some(values) = values {
            if values.iter().any(|v| !v.is_known()) {
                self.add(messages::must_be_valid(label), location);
            }
        }
        self
    }

    /// A value that, when supplied, must match `pattern`
    pub fn pattern(
        &mut self,
        value: Option<&str>,
        pattern: &Regex,
        location: &str,
        message: &str,
    ) -> &mut Self {
        if let Some(value) = value {
            if !pattern.is_match(value) {
                self.add(message, location);
            }
        }
        self
    }

    /// Up to four five-digit SIC codes
    pub fn sic_codes(&mut self, value: Option<&[String]>, location: &str) -> &mut Self {
        if let Some(codes) = value {
            if codes.len() > MAX_SIC_CODES {
                self.add(messages::SIC_CODES_TOO_MANY, location);
            }
            if codes.iter().any(|code| !SIC_CODE.is_match(code)) {
                self.add(messages::SIC_CODE_FORMAT, location);
            }
        }
        self
    }

    pub fn email(&mut self, value: Option<&str>, location: &str) -> &mut Self {
        if let Some(email) = value {
            if !email.validate_email() {
                self.add(messages::EMAIL_INVALID, location);
            }
        }
        self
    }

    /// The parts of an address, reported under `prefix`
    pub fn address(&mut self, value: Option<&Address>, prefix: &str) -> &mut Self {
        let Some(address) = value else {
            return self;
        };
        let at = |field: &str| format!("{}.{}", prefix, field);

        self.required_text(address.premises.as_deref(), &at("premises"), "Premises", PREMISES);
        self.required_text(
            address.address_line_1.as_deref(),
            &at("addressLine1"),
            "Address line 1",
            ADDRESS_LINE,
        );
        self.text(
            address.address_line_2.as_deref(),
            &at("addressLine2"),
            "Address line 2",
            ADDRESS_LINE,
        );
        self.required_text(
            address.locality.as_deref(),
            &at("locality"),
            "Town or city",
            ADDRESS_LINE,
        );
        self.text(address.region.as_deref(), &at("region"), "County", ADDRESS_LINE);

        match address.country {
            None => self.add(messages::required("Country"), &at("country")),
            Some(country) => {
                self.described(Some(country), &at("country"), "Country");
            }
        }

        let postcode_location = at("postalCode");
        if let Some(postcode) = address.postal_code.as_deref() {
            if postcode.chars().count() > POSTCODE {
                self.add(messages::too_long("Postcode", POSTCODE), &postcode_location);
            }
        }
        if address.country.map(|c| c.is_uk()).unwrap_or(false) {
            match address.postal_code.as_deref().map(str::trim) {
                None | Some("") => self.add(messages::POSTCODE_REQUIRED, &postcode_location),
                Some(postcode) => {
                    if !is_uk_postcode(postcode) {
                        self.add(messages::POSTCODE_INVALID, &postcode_location);
                    } else if is_non_mainland_postcode(postcode) {
                        self.add(messages::POSTCODE_NOT_MAINLAND, &postcode_location);
                    }
                }
            }
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn finish(self) -> Vec<ValidationStatusError> {
        self.errors
    }
}
