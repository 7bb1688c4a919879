//! Message and location literals
//!
//! These strings are the externally observable contract of validation;
//! filer-facing journeys match on them.

pub mod location {
    pub const DATA: &str = "data";

    pub const FORENAME: &str = "data.forename";
    pub const SURNAME: &str = "data.surname";
    pub const FORMER_NAMES: &str = "data.formerNames";
    pub const DATE_OF_BIRTH: &str = "data.dateOfBirth";
    pub const NATIONALITY1: &str = "data.nationality1";
    pub const NATIONALITY2: &str = "data.nationality2";
    pub const USUAL_RESIDENTIAL_ADDRESS: &str = "data.usualResidentialAddress";
    pub const SERVICE_ADDRESS: &str = "data.serviceAddress";
    pub const NOT_DISQUALIFIED_STATEMENT_CHECKED: &str = "data.notDisqualifiedStatementChecked";

    pub const LEGAL_ENTITY_NAME: &str = "data.legalEntityName";
    pub const LEGAL_FORM: &str = "data.legalForm";
    pub const GOVERNING_LAW: &str = "data.governingLaw";
    pub const LEGAL_ENTITY_REGISTER_NAME: &str = "data.legalEntityRegisterName";
    pub const LEGAL_ENTITY_REGISTRATION_LOCATION: &str = "data.legalEntityRegistrationLocation";
    pub const REGISTERED_COMPANY_NUMBER: &str = "data.registeredCompanyNumber";
    pub const PRINCIPAL_OFFICE_ADDRESS: &str = "data.principalOfficeAddress";

    pub const CEASE_DATE: &str = "data.ceaseDate";
    pub const REMOVE_CONFIRMATION_CHECKED: &str = "data.removeConfirmationChecked";
    pub const DATE_EFFECTIVE_FROM: &str = "data.dateEffectiveFrom";
    pub const DATE_OF_UPDATE: &str = "data.dateOfUpdate";
    pub const UPDATE_USUAL_RESIDENTIAL_ADDRESS_REQUIRED: &str =
        "data.updateUsualResidentialAddressRequired";
    pub const UPDATE_SERVICE_ADDRESS_REQUIRED: &str = "data.updateServiceAddressRequired";
    pub const UPDATE_PRINCIPAL_OFFICE_ADDRESS_REQUIRED: &str =
        "data.updatePrincipalOfficeAddressRequired";

    /// Pattern check on the stored value
    pub const DATA_CONTRIBUTION_CURRENCY_VALUE: &str = "data.contributionCurrencyValue";
    pub const DATA_CONTRIBUTION_SUB_TYPES: &str = "data.contributionSubTypes";
    // Capital contribution business rules report against the bare field names.
    pub const CONTRIBUTION_CURRENCY_VALUE: &str = "contributionCurrencyValue";
    pub const CONTRIBUTION_CURRENCY_TYPE: &str = "contributionCurrencyType";
    pub const CONTRIBUTION_SUB_TYPES: &str = "contributionSubTypes";

    pub const PARTNERSHIP_NAME: &str = "data.partnershipName";
    pub const NAME_ENDING: &str = "data.nameEnding";
    pub const PARTNERSHIP_NUMBER: &str = "data.partnershipNumber";
    pub const EMAIL: &str = "data.email";
    pub const JURISDICTION: &str = "data.jurisdiction";
    pub const REGISTERED_OFFICE_ADDRESS: &str = "data.registeredOfficeAddress";
    pub const PRINCIPAL_PLACE_OF_BUSINESS_ADDRESS: &str = "data.principalPlaceOfBusinessAddress";
    pub const LAWFUL_PURPOSE_STATEMENT_CHECKED: &str = "data.lawfulPurposeStatementChecked";
    pub const TERM: &str = "data.term";
    pub const SIC_CODES: &str = "data.sicCodes";
    pub const PARTNERSHIP_TYPE: &str = "data.partnershipType";
}

pub const FORENAME_REQUIRED: &str = "Forename is required";
pub const SURNAME_REQUIRED: &str = "Surname is required";
pub const DATE_OF_BIRTH_REQUIRED: &str = "Date of birth is required";
pub const NATIONALITY1_REQUIRED: &str = "Nationality1 is required";
pub const SECOND_NATIONALITY_DIFFERENT: &str =
    "Second nationality must be different from the first";
pub const SOME_FIELDS_MISSING: &str = "Some fields are missing";
pub const NOT_DISQUALIFIED_STATEMENT_CHECKED: &str = "Not Disqualified Statement must be checked";
pub const USUAL_RESIDENTIAL_ADDRESS_REQUIRED: &str = "Usual residential address is required";
pub const SERVICE_ADDRESS_REQUIRED: &str = "Service address is required";
pub const PRINCIPAL_OFFICE_ADDRESS_REQUIRED: &str = "Principal office address is required";

pub const LEGAL_ENTITY_NAME_REQUIRED: &str = "Legal Entity Name is required";
pub const LEGAL_FORM_REQUIRED: &str = "Legal Form is required";
pub const GOVERNING_LAW_REQUIRED: &str = "Governing Law is required";
pub const LEGAL_ENTITY_REGISTER_NAME_REQUIRED: &str = "Legal Entity Register Name is required";
pub const LEGAL_ENTITY_REGISTRATION_LOCATION_REQUIRED: &str =
    "Legal Entity Registration Location is required";
pub const REGISTERED_COMPANY_NUMBER_REQUIRED: &str = "Registered Company Number is required";

pub const DATE_EFFECTIVE_FROM_REQUIRED: &str = "Partner date effective from is required";
pub const DATE_EFFECTIVE_FROM_IN_PAST: &str = "Partner date effective from must be in the past";
pub const DATE_EFFECTIVE_FROM_BEFORE_INCORPORATION: &str =
    "Partner date effective from cannot be before the incorporation date";

pub const CEASE_DATE_REQUIRED: &str = "Cease date is required";
pub const REMOVE_CONFIRMATION_CHECKED_REQUIRED: &str = "Remove confirmation checked is required";
pub const DATE_OF_UPDATE_REQUIRED: &str = "Date of update is required";
pub const UPDATE_USUAL_RESIDENTIAL_ADDRESS_CHOICE_REQUIRED: &str =
    "Update usual residential address choice is required";
pub const UPDATE_SERVICE_ADDRESS_CHOICE_REQUIRED: &str =
    "Update service address choice is required";
pub const UPDATE_PRINCIPAL_OFFICE_ADDRESS_CHOICE_REQUIRED: &str =
    "Update principal office address choice is required";

pub const PRIVATE_FUND_CONTRIBUTION_CURRENCY_VALUE: &str =
    "Private fund partnerships cannot have a contribution currency value";
pub const PRIVATE_FUND_CONTRIBUTION_CURRENCY_TYPE: &str =
    "Private fund partnerships cannot have a contribution currency type";
pub const PRIVATE_FUND_CONTRIBUTION_SUB_TYPES: &str =
    "Private fund partnerships cannot have a contribution sub types";
pub const CONTRIBUTION_CURRENCY_VALUE_REQUIRED: &str = "Contribution currency value is required";
pub const CONTRIBUTION_CURRENCY_TYPE_REQUIRED: &str = "Contribution currency type is required";
pub const CONTRIBUTION_SUB_TYPES_REQUIRED: &str = "At least one contribution type must be selected";
pub const CONTRIBUTION_CURRENCY_VALUE_FORMAT: &str =
    "Contribution currency value must be a number with up to two decimal places";

pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Email must be valid";
pub const JURISDICTION_REQUIRED: &str = "Jurisdiction is required";
pub const REGISTERED_OFFICE_ADDRESS_REQUIRED: &str = "Registered office address is required";
pub const PRINCIPAL_PLACE_OF_BUSINESS_ADDRESS_REQUIRED: &str =
    "Principal place of business address is required";
pub const LAWFUL_PURPOSE_STATEMENT_CHECKED_REQUIRED: &str =
    "Lawful purpose statement checked is required";
pub const TERM_REQUIRED: &str = "Term is required";
pub const TERM_NOT_REQUIRED: &str = "Term is not required";
pub const SIC_CODES_REQUIRED: &str = "SIC codes are required";
pub const SIC_CODES_NOT_REQUIRED: &str = "SIC codes are not required";
pub const SIC_CODE_FORMAT: &str = "SIC code must be 5 numeric characters";
pub const SIC_CODES_TOO_MANY: &str = "SIC codes list must contain at most 4 codes";
pub const NAME_ENDING_REQUIRED: &str = "Name ending is required";
pub const PARTNERSHIP_NUMBER_REQUIRED: &str = "Partnership number is required";
pub const PARTNERSHIP_NUMBER_FORMAT: &str = "Partnership number must be valid";
pub const PARTNERSHIP_NAME_REQUIRED: &str = "Partnership name is required";
pub const PARTNERSHIP_NAME_TOO_LONG: &str =
    "Partnership name and name ending must be less than 160";

pub const POSTCODE_REQUIRED: &str = "Postcode is required";
pub const POSTCODE_INVALID: &str = "Postcode must be valid";
pub const POSTCODE_NOT_MAINLAND: &str = "Postcode must be a UK mainland postcode";

pub fn required(label: &str) -> String {
    format!("{} is required", label)
}

pub fn too_short(label: &str) -> String {
    format!("{} must be greater than 1", label)
}

pub fn too_long(label: &str, max: usize) -> String {
    format!("{} must be less than {}", label, max)
}

pub fn invalid_characters(label: &str) -> String {
    format!(
        "{} must only include letters a to z, and common special characters such as hyphens, spaces and apostrophes",
        label
    )
}

pub fn must_be_valid(label: &str) -> String {
    format!("{} must be valid", label)
}

pub fn must_be_in_past(label: &str) -> String {
    format!("{} must be in the past", label)
}
