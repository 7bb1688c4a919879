//! Incorporation handlers

use axum::{
    extract::{Path, State},
    http::{header::LOCATION, StatusCode},
    response::{IntoResponse, Response},
    Extension, Json,
};
use core_kernel::OperationMetadata;
use domain_partnership::{transaction::incorporation_uri, FilingApi, ValidationStatus};

use crate::dto::incorporation::IncorporationResponse;
use crate::{error::ApiError, AppState};

/// Creates the incorporation of a registration or transition
pub async fn create_incorporation(
    State(state): State<AppState>,
    Path(transaction_id): Path<String>,
    Extension(metadata): Extension<OperationMetadata>,
) -> Result<Response, ApiError> {
    let submission = state
        .services
        .incorporations
        .create(&transaction_id, Some(metadata))
        .await?;
    let location = incorporation_uri(&transaction_id, &submission.id);
    Ok((
        StatusCode::CREATED,
        [(LOCATION, location)],
        Json(IncorporationResponse::from(submission)),
    )
        .into_response())
}

/// Pre-close validation of the whole transaction
pub async fn validation_status(
    State(state): State<AppState>,
    Path((transaction_id, id)): Path<(String, String)>,
) -> Result<Json<ValidationStatus>, ApiError> {
    let status = state
        .services
        .incorporations
        .validate_transaction(&transaction_id, &id)
        .await?;
    Ok(Json(status))
}

/// The filing payload of a closed transaction
pub async fn filing(
    State(state): State<AppState>,
    Path((transaction_id, id)): Path<(String, String)>,
) -> Result<Json<FilingApi>, ApiError> {
    let filing = state.services.filings.generate(&transaction_id, &id).await?;
    Ok(Json(filing))
}
