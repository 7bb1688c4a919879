//! Filing assembly
//!
//! The payload handed to the filing generator once a transaction closes.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::IncorporationService;
use crate::error::PartnershipError;
use crate::partner::{GeneralPartnerData, LimitedPartnerData};
use crate::partnership::PartnershipData;
use crate::transaction::Transaction;
use crate::types::FilingMode;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilingData {
    pub limited_partnership: Option<PartnershipData>,
    pub general_partners: Vec<GeneralPartnerData>,
    pub limited_partners: Vec<LimitedPartnerData>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilingApi {
    pub data: FilingData,
    /// The transaction's filing mode
    pub kind: String,
    pub description: String,
}

/// Human readable description of a filing
pub fn filing_description(mode: FilingMode) -> &'static str {
    match mode {
        FilingMode::Registration => "Register a Limited Partnership",
        FilingMode::Transition => "Transition a Limited Partnership",
        _ => "Update a Limited Partnership",
    }
}

#[derive(Clone)]
pub struct FilingsService {
    incorporations: IncorporationService,
}

impl FilingsService {
    pub fn new(incorporations: IncorporationService) -> Self {
        Self { incorporations }
    }

    /// The filing for an incorporation
    ///
    /// Fails with every pre-close violation when the transaction is not
    /// ready to file.
    pub async fn generate(
        &self,
        transaction_id: &str,
        incorporation_id: &str,
    ) -> Result<FilingApi, PartnershipError> {
        let status = self
            .incorporations
            .validate_transaction(transaction_id, incorporation_id)
            .await?;
        PartnershipError::check(status.into_errors())?;

        let transaction = self.incorporations.get_transaction(transaction_id).await?;
        self.assemble(&transaction).await
    }

    async fn assemble(&self, transaction: &Transaction) -> Result<FilingApi, PartnershipError> {
        let data = FilingData {
            limited_partnership: self.incorporations.partnerships.find_data(transaction).await?,
            general_partners: self
                .incorporations
                .general_partners
                .list_data(transaction)
                .await?,
            limited_partners: self
                .incorporations
                .limited_partners
                .list_data(transaction)
                .await?,
        };

        let mode = transaction.filing_mode();
        info!(
            transaction_id = %transaction.id,
            general_partners = data.general_partners.len(),
            limited_partners = data.limited_partners.len(),
            "Filing assembled"
        );
        Ok(FilingApi {
            data,
            kind: mode.description().to_string(),
            description: filing_description(mode).to_string(),
        })
    }
}
