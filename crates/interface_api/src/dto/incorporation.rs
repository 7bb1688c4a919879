//! Incorporation DTOs

use chrono::{DateTime, Utc};
use domain_partnership::{IncorporationData, IncorporationKind, Submission};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncorporationResponse {
    pub id: String,
    pub transaction_id: String,
    pub kind: IncorporationKind,
    pub created_at: DateTime<Utc>,
}

impl From<Submission<IncorporationData>> for IncorporationResponse {
    fn from(submission: Submission<IncorporationData>) -> Self {
        Self {
            id: submission.id,
            transaction_id: submission.transaction_id,
            kind: submission.data.kind,
            created_at: submission.created_at,
        }
    }
}
