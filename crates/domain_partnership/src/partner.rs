//! Partner data
//!
//! General and limited partners share one envelope: the appointment
//! metadata every partner carries, plus a subject that is either a natural
//! person or a legal entity. On the wire the two subjects arrive as one flat
//! object ([`PartnerDataDto`]); converting it into [`PartnerData`] decides
//! which subject the filer is describing and rejects data that describes
//! both.

use chrono::NaiveDate;
use core_kernel::Currency;
use serde::{Deserialize, Serialize};

use crate::address::Address;
use crate::country::Country;
use crate::nationality::Nationality;
use crate::types::{ContributionSubType, PartnershipType};

/// Message of the conversion error raised for mixed partner data
pub const MIXED_PARTNER_DATA: &str = "Partner cannot have both person and legal entity details";

/// Flat wire form of partner data
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartnerDataDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appointment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cease_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remove_confirmation_checked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_effective_from: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_update: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_usual_residential_address_required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_service_address_required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_principal_office_address_required: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub forename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub former_names: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nationality1: Option<Nationality>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nationality2: Option<Nationality>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usual_residential_address: Option<Address>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_entity_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_form: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub governing_law: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_entity_register_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_entity_registration_location: Option<Country>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registered_company_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub principal_office_address: Option<Address>,
}

impl PartnerDataDto {
    fn has_person_fields(&self) -> bool {
        self.forename.is_some()
            || self.surname.is_some()
            || self.former_names.is_some()
            || self.date_of_birth.is_some()
            || self.nationality1.is_some()
            || self.nationality2.is_some()
            || self.usual_residential_address.is_some()
    }

    fn has_legal_entity_fields(&self) -> bool {
        self.legal_entity_name.is_some()
            || self.legal_form.is_some()
            || self.governing_law.is_some()
            || self.legal_entity_register_name.is_some()
            || self.legal_entity_registration_location.is_some()
            || self.registered_company_number.is_some()
            || self.principal_office_address.is_some()
    }
}

/// A natural person appointed as partner
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersonDetails {
    pub forename: Option<String>,
    pub surname: Option<String>,
    pub former_names: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub nationality1: Option<Nationality>,
    pub nationality2: Option<Nationality>,
    pub usual_residential_address: Option<Address>,
}

/// A legal entity appointed as partner
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LegalEntityDetails {
    pub legal_entity_name: Option<String>,
    pub legal_form: Option<String>,
    pub governing_law: Option<String>,
    pub legal_entity_register_name: Option<String>,
    pub legal_entity_registration_location: Option<Country>,
    pub registered_company_number: Option<String>,
    pub principal_office_address: Option<Address>,
}

/// Who the partner is
#[derive(Debug, Clone, Default, PartialEq)]
pub enum PartnerSubject {
    Person(PersonDetails),
    LegalEntity(LegalEntityDetails),
    /// Neither person nor legal entity details have been supplied yet
    #[default]
    Unidentified,
}

/// Partner data common to general and limited partners
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartnerData {
    pub kind: Option<String>,
    pub appointment_id: Option<String>,
    pub cease_date: Option<NaiveDate>,
    pub remove_confirmation_checked: Option<bool>,
    pub date_effective_from: Option<NaiveDate>,
    pub date_of_update: Option<NaiveDate>,
    pub update_usual_residential_address_required: Option<bool>,
    pub update_service_address_required: Option<bool>,
    pub update_principal_office_address_required: Option<bool>,
    pub subject: PartnerSubject,
}

impl PartnerData {
    pub fn person(details: PersonDetails) -> Self {
        Self {
            subject: PartnerSubject::Person(details),
            ..Default::default()
        }
    }

    pub fn legal_entity(details: LegalEntityDetails) -> Self {
        Self {
            subject: PartnerSubject::LegalEntity(details),
            ..Default::default()
        }
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn is_legal_entity(&self) -> bool {
        matches!(self.subject, PartnerSubject::LegalEntity(_))
    }

    pub fn as_person(&self) -> Option<&PersonDetails> {
        match &self.subject {
            PartnerSubject::Person(person) => Some(person),
            _ => None,
        }
    }

    pub fn as_legal_entity(&self) -> Option<&LegalEntityDetails> {
        match &self.subject {
            PartnerSubject::LegalEntity(entity) => Some(entity),
            _ => None,
        }
    }

    /// The legal entity rules apply once its register name or legal form is given
    pub fn identified_legal_entity(&self) -> Option<&LegalEntityDetails> {
        self.as_legal_entity()
            .filter(|entity| entity.legal_entity_register_name.is_some() || entity.legal_form.is_some())
    }

    /// The person rules apply once a forename or surname is given
    pub fn identified_person(&self) -> Option<&PersonDetails> {
        if self.identified_legal_entity().is_some() {
            return None;
        }
        self.as_person()
            .filter(|person| person.forename.is_some() || person.surname.is_some())
    }

    pub fn is_identified(&self) -> bool {
        self.identified_legal_entity().is_some() || self.identified_person().is_some()
    }

    /// Name shown in listings
    pub fn display_name(&self) -> Option<String> {
        match &self.subject {
            PartnerSubject::Person(person) => match (&person.forename, &person.surname) {
                (Some(forename), Some(surname)) => Some(format!("{} {}", forename, surname)),
                (Some(name), None) | (None, Some(name)) => Some(name.clone()),
                (None, None) => None,
            },
            PartnerSubject::LegalEntity(entity) => entity.legal_entity_name.clone(),
            PartnerSubject::Unidentified => None,
        }
    }
}

impl TryFrom<PartnerDataDto> for PartnerData {
    type Error = String;

    fn try_from(dto: PartnerDataDto) -> Result<Self, Self::Error> {
        let subject = match (dto.has_person_fields(), dto.has_legal_entity_fields()) {
            (true, true) => return Err(MIXED_PARTNER_DATA.to_string()),
            (true, false) => PartnerSubject::Person(PersonDetails {
                forename: dto.forename,
                surname: dto.surname,
                former_names: dto.former_names,
                date_of_birth: dto.date_of_birth,
                nationality1: dto.nationality1,
                nationality2: dto.nationality2,
                usual_residential_address: dto.usual_residential_address,
            }),
            (false, true) => PartnerSubject::LegalEntity(LegalEntityDetails {
                legal_entity_name: dto.legal_entity_name,
                legal_form: dto.legal_form,
                governing_law: dto.governing_law,
                legal_entity_register_name: dto.legal_entity_register_name,
                legal_entity_registration_location: dto.legal_entity_registration_location,
                registered_company_number: dto.registered_company_number,
                principal_office_address: dto.principal_office_address,
            }),
            (false, false) => PartnerSubject::Unidentified,
        };

        Ok(Self {
            kind: dto.kind,
            appointment_id: dto.appointment_id,
            cease_date: dto.cease_date,
            remove_confirmation_checked: dto.remove_confirmation_checked,
            date_effective_from: dto.date_effective_from,
            date_of_update: dto.date_of_update,
            update_usual_residential_address_required: dto
                .update_usual_residential_address_required,
            update_service_address_required: dto.update_service_address_required,
            update_principal_office_address_required: dto
                .update_principal_office_address_required,
            subject,
        })
    }
}

impl From<PartnerData> for PartnerDataDto {
    fn from(data: PartnerData) -> Self {
        let mut dto = PartnerDataDto {
            kind: data.kind,
            appointment_id: data.appointment_id,
            cease_date: data.cease_date,
            remove_confirmation_checked: data.remove_confirmation_checked,
            date_effective_from: data.date_effective_from,
            date_of_update: data.date_of_update,
            update_usual_residential_address_required: data
                .update_usual_residential_address_required,
            update_service_address_required: data.update_service_address_required,
            update_principal_office_address_required: data
                .update_principal_office_address_required,
            ..Default::default()
        };
        match data.subject {
            PartnerSubject::Person(person) => {
                dto.forename = person.forename;
                dto.surname = person.surname;
                dto.former_names = person.former_names;
                dto.date_of_birth = person.date_of_birth;
                dto.nationality1 = person.nationality1;
                dto.nationality2 = person.nationality2;
                dto.usual_residential_address = person.usual_residential_address;
            }
            PartnerSubject::LegalEntity(entity) => {
                dto.legal_entity_name = entity.legal_entity_name;
                dto.legal_form = entity.legal_form;
                dto.governing_law = entity.governing_law;
                dto.legal_entity_register_name = entity.legal_entity_register_name;
                dto.legal_entity_registration_location = entity.legal_entity_registration_location;
                dto.registered_company_number = entity.registered_company_number;
                dto.principal_office_address = entity.principal_office_address;
            }
            PartnerSubject::Unidentified => {}
        }
        dto
    }
}

/// Wire form of a general partner
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneralPartnerDataDto {
    #[serde(flatten)]
    pub partner: PartnerDataDto,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_disqualified_statement_checked: Option<bool>,
}

/// A general partner
///
/// The service address and the not-disqualified statement only apply to a
/// person; they are carried on the envelope so a half-completed journey can
/// store them before the subject is known.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GeneralPartnerDataDto", into = "GeneralPartnerDataDto")]
pub struct GeneralPartnerData {
    pub partner: PartnerData,
    pub service_address: Option<Address>,
    pub not_disqualified_statement_checked: Option<bool>,
}

impl GeneralPartnerData {
    pub fn new(partner: PartnerData) -> Self {
        Self {
            partner,
            ..Default::default()
        }
    }

    pub fn kind(&self) -> Option<&str> {
        self.partner.kind.as_deref()
    }
}

impl TryFrom<GeneralPartnerDataDto> for GeneralPartnerData {
    type Error = String;

    fn try_from(dto: GeneralPartnerDataDto) -> Result<Self, Self::Error> {
        Ok(Self {
            partner: PartnerData::try_from(dto.partner)?,
            service_address: dto.service_address,
            not_disqualified_statement_checked: dto.not_disqualified_statement_checked,
        })
    }
}

impl From<GeneralPartnerData> for GeneralPartnerDataDto {
    fn from(data: GeneralPartnerData) -> Self {
        Self {
            partner: data.partner.into(),
            service_address: data.service_address,
            not_disqualified_statement_checked: data.not_disqualified_statement_checked,
        }
    }
}

/// Wire form of a limited partner
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LimitedPartnerDataDto {
    #[serde(flatten)]
    pub partner: PartnerDataDto,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contribution_currency_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contribution_currency_type: Option<Currency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contribution_sub_types: Option<Vec<ContributionSubType>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partnership_type: Option<PartnershipType>,
}

/// A limited partner
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LimitedPartnerDataDto", into = "LimitedPartnerDataDto")]
pub struct LimitedPartnerData {
    pub partner: PartnerData,
    /// Decimal amount as typed by the filer
    pub contribution_currency_value: Option<String>,
    pub contribution_currency_type: Option<Currency>,
    pub contribution_sub_types: Option<Vec<ContributionSubType>>,
    /// Copied from the partnership for validation context
    pub partnership_type: Option<PartnershipType>,
}

impl LimitedPartnerData {
    pub fn new(partner: PartnerData) -> Self {
        Self {
            partner,
            ..Default::default()
        }
    }

    pub fn kind(&self) -> Option<&str> {
        self.partner.kind.as_deref()
    }
}

impl TryFrom<LimitedPartnerDataDto> for LimitedPartnerData {
    type Error = String;

    fn try_from(dto: LimitedPartnerDataDto) -> Result<Self, Self::Error> {
        Ok(Self {
            partner: PartnerData::try_from(dto.partner)?,
            contribution_currency_value: dto.contribution_currency_value,
            contribution_currency_type: dto.contribution_currency_type,
            contribution_sub_types: dto.contribution_sub_types,
            partnership_type: dto.partnership_type,
        })
    }
}

impl From<LimitedPartnerData> for LimitedPartnerDataDto {
    fn from(data: LimitedPartnerData) -> Self {
        Self {
            partner: data.partner.into(),
            contribution_currency_value: data.contribution_currency_value,
            contribution_currency_type: data.contribution_currency_type,
            contribution_sub_types: data.contribution_sub_types,
            partnership_type: data.partnership_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_person_fields_make_a_person() {
        let data: GeneralPartnerData = serde_json::from_value(json!({
            "forename": "Jack",
            "surname": "Jones",
            "nationality1": "British",
            "not_disqualified_statement_checked": true
        }))
        .unwrap();

        let person = data.partner.as_person().unwrap();
        assert_eq!(person.forename.as_deref(), Some("Jack"));
        assert_eq!(person.nationality1, Some(Nationality::British));
        assert_eq!(data.not_disqualified_statement_checked, Some(true));
    }

    #[test]
    fn test_legal_entity_fields_make_a_legal_entity() {
        let data: LimitedPartnerData = serde_json::from_value(json!({
            "legal_entity_name": "Acme Holdings",
            "legal_form": "Limited Company",
            "contribution_currency_value": "1000.00",
            "contribution_currency_type": "GBP",
            "contribution_sub_types": ["MONEY", "SHARES"],
            "partnership_type": "PFLP"
        }))
        .unwrap();

        assert!(data.partner.is_legal_entity());
        assert_eq!(data.contribution_currency_type, Some(Currency::GBP));
        assert_eq!(
            data.contribution_sub_types,
            Some(vec![ContributionSubType::Money, ContributionSubType::Shares])
        );
        assert_eq!(data.partnership_type, Some(PartnershipType::Pflp));
    }

    #[test]
    fn test_mixed_subjects_are_rejected() {
        let result: Result<GeneralPartnerData, _> = serde_json::from_value(json!({
            "forename": "Jack",
            "legal_entity_name": "Acme Holdings"
        }));
        let error = result.unwrap_err().to_string();
        assert!(error.contains(MIXED_PARTNER_DATA));
    }

    #[test]
    fn test_no_subject_fields_is_unidentified() {
        let data: GeneralPartnerData =
            serde_json::from_value(json!({ "kind": "limited-partnership#general-partner" }))
                .unwrap();
        assert_eq!(data.partner.subject, PartnerSubject::Unidentified);
        assert_eq!(data.kind(), Some("limited-partnership#general-partner"));
    }

    #[test]
    fn test_serializes_flat() {
        let partner = PartnerData::person(PersonDetails {
            forename: Some("Jack".to_string()),
            surname: Some("Jones".to_string()),
            ..Default::default()
        })
        .with_kind("limited-partnership#general-partner");
        let value = serde_json::to_value(GeneralPartnerData::new(partner)).unwrap();

        assert_eq!(
            value,
            json!({
                "kind": "limited-partnership#general-partner",
                "forename": "Jack",
                "surname": "Jones"
            })
        );
    }

    #[test]
    fn test_display_name() {
        let person = PartnerData::person(PersonDetails {
            forename: Some("Jack".to_string()),
            surname: Some("Jones".to_string()),
            ..Default::default()
        });
        assert_eq!(person.display_name().as_deref(), Some("Jack Jones"));
        assert_eq!(PartnerData::default().display_name(), None);
    }
}
