//! Registry vocabularies
//!
//! Filing modes, incorporation kinds and the small described enumerations
//! used by partnership and partner data.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The journey a transaction belongs to
///
/// Governs which validation branches apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilingMode {
    /// Registering a brand new limited partnership
    Registration,
    /// Bringing an existing partnership's details onto the register
    Transition,
    /// Changes to an already-incorporated partnership
    PostTransition,
    Default,
    Unknown,
}

impl FilingMode {
    /// The description carried by the transaction
    pub fn description(&self) -> &'static str {
        match self {
            FilingMode::Registration => "limited-partnership-registration",
            FilingMode::Transition => "limited-partnership-transition",
            FilingMode::PostTransition => "limited-partnership-post-transition",
            FilingMode::Default => "default",
            FilingMode::Unknown => "unknown",
        }
    }

    /// Resolves the filing mode of a transaction
    ///
    /// A transaction with no filing mode is in the default mode; an
    /// unrecognised description is `Unknown`.
    pub fn from_description(value: Option<&str>) -> Self {
        match value {
            None => FilingMode::Default,
            Some("limited-partnership-registration") => FilingMode::Registration,
            Some("limited-partnership-transition") => FilingMode::Transition,
            Some("limited-partnership-post-transition") => FilingMode::PostTransition,
            Some("default") => FilingMode::Default,
            Some(_) => FilingMode::Unknown,
        }
    }

    /// Transition and post-transition filings concern a partnership that
    /// already has an incorporation date.
    pub fn requires_date_effective_from(&self) -> bool {
        matches!(self, FilingMode::Transition | FilingMode::PostTransition)
    }
}

impl fmt::Display for FilingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// The kind of incorporation shell a transaction carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IncorporationKind {
    #[serde(rename = "limited-partnership-registration")]
    Registration,
    #[serde(rename = "limited-partnership-transition")]
    Transition,
}

impl IncorporationKind {
    pub fn description(&self) -> &'static str {
        match self {
            IncorporationKind::Registration => "limited-partnership-registration",
            IncorporationKind::Transition => "limited-partnership-transition",
        }
    }

    /// The incorporation kind matching a filing mode, if the mode has one
    pub fn from_filing_mode(mode: FilingMode) -> Option<Self> {
        match mode {
            FilingMode::Registration => Some(IncorporationKind::Registration),
            FilingMode::Transition => Some(IncorporationKind::Transition),
            _ => None,
        }
    }
}

described_enum! {
    /// Standard (LP, SLP) or private fund (PFLP, SPFLP) partnership
    PartnershipType {
        Lp => "LP",
        Pflp => "PFLP",
        Slp => "SLP",
        Spflp => "SPFLP",
    }
}

impl PartnershipType {
    /// Private fund partnerships carry no capital contributions, term or SIC codes
    pub fn is_private_fund(&self) -> bool {
        matches!(self, PartnershipType::Pflp | PartnershipType::Spflp)
    }
}

described_enum! {
    /// Where the partnership is registered
    Jurisdiction {
        EnglandAndWales => "England and Wales",
        NorthernIreland => "Northern Ireland",
        Scotland => "Scotland",
    }
}

described_enum! {
    /// How long the partnership lasts
    Term {
        ByAgreement => "BY_AGREEMENT",
        UntilDissolution => "UNTIL_DISSOLUTION",
        NoFixedTerm => "NONE",
    }
}

described_enum! {
    /// The legally required ending of a partnership name
    PartnershipNameEnding {
        LimitedPartnership => "Limited Partnership",
        Lp => "LP",
        LDotP => "L.P.",
        PartneriaethCyfyngedig => "Partneriaeth Cyfyngedig",
        Pc => "PC",
        PDotC => "P.C.",
    }
}

described_enum! {
    /// What a limited partner contributes
    ContributionSubType {
        Money => "MONEY",
        LandOrProperty => "LAND_OR_PROPERTY",
        Shares => "SHARES",
        ServicesOrGoods => "SERVICES_OR_GOODS",
        AnyOtherAsset => "ANY_OTHER_ASSET",
    }
}
