//! The closed kind vocabulary
//!
//! Every resource kind and post-transition change kind this service knows
//! about is defined here and nowhere else. Kinds travel as strings
//! (`limited-partnership#update-partnership-name`); lookups are exact and
//! case-sensitive.

use std::fmt;

/// Prefix shared by every kind
pub const KIND_PREFIX: &str = "limited-partnership";

/// Kind of the incorporation shell resource
pub const INCORPORATION_KIND: &str = "limited-partnership#incorporation";
/// Kind of the partnership resource during registration and transition
pub const PARTNERSHIP_KIND: &str = "limited-partnership#limited-partnership";
/// Kind of a general partner during registration and transition
pub const GENERAL_PARTNER_KIND: &str = "limited-partnership#general-partner";
/// Kind of a limited partner during registration and transition
pub const LIMITED_PARTNER_KIND: &str = "limited-partnership#limited-partner";

/// The change a post-transition kind requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeAction {
    Add,
    Remove,
    Update,
}

/// Which resource a post-transition kind applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KindSubject {
    GeneralPartnerPerson,
    GeneralPartnerLegalEntity,
    LimitedPartnerPerson,
    LimitedPartnerLegalEntity,
    Partnership,
}

impl KindSubject {
    pub fn is_general_partner(&self) -> bool {
        matches!(
            self,
            KindSubject::GeneralPartnerPerson | KindSubject::GeneralPartnerLegalEntity
        )
    }

    pub fn is_limited_partner(&self) -> bool {
        matches!(
            self,
            KindSubject::LimitedPartnerPerson | KindSubject::LimitedPartnerLegalEntity
        )
    }

    pub fn is_legal_entity(&self) -> bool {
        matches!(
            self,
            KindSubject::GeneralPartnerLegalEntity | KindSubject::LimitedPartnerLegalEntity
        )
    }
}

/// A change to an already-incorporated partnership
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PostTransitionKind {
    AddGeneralPartnerPerson,
    AddGeneralPartnerLegalEntity,
    RemoveGeneralPartnerPerson,
    RemoveGeneralPartnerLegalEntity,
    UpdateGeneralPartnerPerson,
    UpdateGeneralPartnerLegalEntity,
    AddLimitedPartnerPerson,
    AddLimitedPartnerLegalEntity,
    RemoveLimitedPartnerPerson,
    RemoveLimitedPartnerLegalEntity,
    UpdateLimitedPartnerPerson,
    UpdateLimitedPartnerLegalEntity,
    UpdatePartnershipRegisteredOfficeAddress,
    UpdatePartnershipName,
    UpdatePartnershipTerm,
}

impl PostTransitionKind {
    pub const ALL: &'static [PostTransitionKind] = &[
        PostTransitionKind::AddGeneralPartnerPerson,
        PostTransitionKind::AddGeneralPartnerLegalEntity,
        PostTransitionKind::RemoveGeneralPartnerPerson,
        PostTransitionKind::RemoveGeneralPartnerLegalEntity,
        PostTransitionKind::UpdateGeneralPartnerPerson,
        PostTransitionKind::UpdateGeneralPartnerLegalEntity,
        PostTransitionKind::AddLimitedPartnerPerson,
        PostTransitionKind::AddLimitedPartnerLegalEntity,
        PostTransitionKind::RemoveLimitedPartnerPerson,
        PostTransitionKind::RemoveLimitedPartnerLegalEntity,
        PostTransitionKind::UpdateLimitedPartnerPerson,
        PostTransitionKind::UpdateLimitedPartnerLegalEntity,
        PostTransitionKind::UpdatePartnershipRegisteredOfficeAddress,
        PostTransitionKind::UpdatePartnershipName,
        PostTransitionKind::UpdatePartnershipTerm,
    ];

    /// The wire form of this kind
    pub fn description(&self) -> &'static str {
        match self {
            PostTransitionKind::AddGeneralPartnerPerson => {
                "limited-partnership#add-general-partner-person"
            }
            PostTransitionKind::AddGeneralPartnerLegalEntity => {
                "limited-partnership#add-general-partner-legal-entity"
            }
            PostTransitionKind::RemoveGeneralPartnerPerson => {
                "limited-partnership#remove-general-partner-person"
            }
            PostTransitionKind::RemoveGeneralPartnerLegalEntity => {
                "limited-partnership#remove-general-partner-legal-entity"
            }
            PostTransitionKind::UpdateGeneralPartnerPerson => {
                "limited-partnership#update-general-partner-person"
            }
            PostTransitionKind::UpdateGeneralPartnerLegalEntity => {
                "limited-partnership#update-general-partner-legal-entity"
            }
            PostTransitionKind::AddLimitedPartnerPerson => {
                "limited-partnership#add-limited-partner-person"
            }
            PostTransitionKind::AddLimitedPartnerLegalEntity => {
                "limited-partnership#add-limited-partner-legal-entity"
            }
            PostTransitionKind::RemoveLimitedPartnerPerson => {
                "limited-partnership#remove-limited-partner-person"
            }
            PostTransitionKind::RemoveLimitedPartnerLegalEntity => {
                "limited-partnership#remove-limited-partner-legal-entity"
            }
            PostTransitionKind::UpdateLimitedPartnerPerson => {
                "limited-partnership#update-limited-partner-person"
            }
            PostTransitionKind::UpdateLimitedPartnerLegalEntity => {
                "limited-partnership#update-limited-partner-legal-entity"
            }
            PostTransitionKind::UpdatePartnershipRegisteredOfficeAddress => {
                "limited-partnership#update-partnership-registered-office-address"
            }
            PostTransitionKind::UpdatePartnershipName => {
                "limited-partnership#update-partnership-name"
            }
            PostTransitionKind::UpdatePartnershipTerm => {
                "limited-partnership#update-partnership-term"
            }
        }
    }

    /// Exact, case-sensitive lookup
    pub fn from_description(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.description() == value)
    }

    pub fn action(&self) -> ChangeAction {
        use PostTransitionKind::*;
        match self {
            AddGeneralPartnerPerson
            | AddGeneralPartnerLegalEntity
            | AddLimitedPartnerPerson
            | AddLimitedPartnerLegalEntity => ChangeAction::Add,
            RemoveGeneralPartnerPerson
            | RemoveGeneralPartnerLegalEntity
            | RemoveLimitedPartnerPerson
            | RemoveLimitedPartnerLegalEntity => ChangeAction::Remove,
            UpdateGeneralPartnerPerson
            | UpdateGeneralPartnerLegalEntity
            | UpdateLimitedPartnerPerson
            | UpdateLimitedPartnerLegalEntity
            | UpdatePartnershipRegisteredOfficeAddress
            | UpdatePartnershipName
            | UpdatePartnershipTerm => ChangeAction::Update,
        }
    }

    pub fn subject(&self) -> KindSubject {
        use PostTransitionKind::*;
        match self {
            AddGeneralPartnerPerson | RemoveGeneralPartnerPerson | UpdateGeneralPartnerPerson => {
                KindSubject::GeneralPartnerPerson
            }
            AddGeneralPartnerLegalEntity
            | RemoveGeneralPartnerLegalEntity
            | UpdateGeneralPartnerLegalEntity => KindSubject::GeneralPartnerLegalEntity,
            AddLimitedPartnerPerson | RemoveLimitedPartnerPerson | UpdateLimitedPartnerPerson => {
                KindSubject::LimitedPartnerPerson
            }
            AddLimitedPartnerLegalEntity
            | RemoveLimitedPartnerLegalEntity
            | UpdateLimitedPartnerLegalEntity => KindSubject::LimitedPartnerLegalEntity,
            UpdatePartnershipRegisteredOfficeAddress
            | UpdatePartnershipName
            | UpdatePartnershipTerm => KindSubject::Partnership,
        }
    }
}

impl fmt::Display for PostTransitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// The post-transition action named by an optional kind string
pub fn action_of(kind: Option<&str>) -> Option<ChangeAction> {
    kind.and_then(PostTransitionKind::from_description)
        .map(|k| k.action())
}

pub fn is_add_kind(kind: Option<&str>) -> bool {
    action_of(kind) == Some(ChangeAction::Add)
}

pub fn is_remove_kind(kind: Option<&str>) -> bool {
    action_of(kind) == Some(ChangeAction::Remove)
}

pub fn is_update_kind(kind: Option<&str>) -> bool {
    action_of(kind) == Some(ChangeAction::Update)
}

/// Remove and update kinds validate an existing appointment rather than a
/// new one.
pub fn is_remove_or_update_kind(kind: Option<&str>) -> bool {
    matches!(
        action_of(kind),
        Some(ChangeAction::Remove) | Some(ChangeAction::Update)
    )
}
