//! The incorporation shell linked to every registration or transition
//! transaction

use serde::{Deserialize, Serialize};

use crate::types::IncorporationKind;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncorporationData {
    pub kind: IncorporationKind,
}

impl IncorporationData {
    pub fn new(kind: IncorporationKind) -> Self {
        Self { kind }
    }
}
