//! Partnership handlers

use axum::{
    extract::{Path, State},
    http::{header::LOCATION, StatusCode},
    response::{IntoResponse, Response},
    Extension, Json,
};
use core_kernel::OperationMetadata;
use domain_partnership::{
    transaction::partnership_uri, Cost, PartnershipData, ResourceView, ValidationStatus,
};
use serde_json::Value;

use crate::extract::ApiJson;
use crate::{error::ApiError, AppState};

/// Creates the partnership of a transaction
pub async fn create_partnership(
    State(state): State<AppState>,
    Path(transaction_id): Path<String>,
    Extension(metadata): Extension<OperationMetadata>,
    ApiJson(request): ApiJson<PartnershipData>,
) -> Result<Response, ApiError> {
    let view = state
        .services
        .partnerships
        .create(&transaction_id, request, Some(metadata))
        .await?;
    let location = partnership_uri(&transaction_id, &view.id);
    Ok((StatusCode::CREATED, [(LOCATION, location)], Json(view)).into_response())
}

pub async fn get_partnership(
    State(state): State<AppState>,
    Path((transaction_id, id)): Path<(String, String)>,
) -> Result<Json<ResourceView<PartnershipData>>, ApiError> {
    let view = state.services.partnerships.get(&transaction_id, &id).await?;
    Ok(Json(view))
}

/// Applies a merge patch to the partnership
pub async fn update_partnership(
    State(state): State<AppState>,
    Path((transaction_id, id)): Path<(String, String)>,
    ApiJson(changes): ApiJson<Value>,
) -> Result<Json<ResourceView<PartnershipData>>, ApiError> {
    let view = state
        .services
        .partnerships
        .update(&transaction_id, &id, &changes)
        .await?;
    Ok(Json(view))
}

pub async fn validation_status(
    State(state): State<AppState>,
    Path((transaction_id, id)): Path<(String, String)>,
) -> Result<Json<ValidationStatus>, ApiError> {
    let status = state
        .services
        .partnerships
        .validation_status(&transaction_id, &id)
        .await?;
    Ok(Json(status))
}

pub async fn costs(
    State(state): State<AppState>,
    Path((transaction_id, id)): Path<(String, String)>,
) -> Result<Json<Vec<Cost>>, ApiError> {
    let costs = state.services.partnerships.costs(&transaction_id, &id).await?;
    Ok(Json(costs))
}
