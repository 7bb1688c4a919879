//! Limited partner handlers

use axum::{
    extract::{Path, State},
    http::{header::LOCATION, StatusCode},
    response::{IntoResponse, Response},
    Extension, Json,
};
use core_kernel::OperationMetadata;
use domain_partnership::{
    transaction::limited_partner_uri, Cost, LimitedPartnerData, ResourceView, ValidationStatus,
};
use serde_json::Value;

use crate::extract::ApiJson;
use crate::{error::ApiError, AppState};

/// Creates a limited partner
pub async fn create_limited_partner(
    State(state): State<AppState>,
    Path(transaction_id): Path<String>,
    Extension(metadata): Extension<OperationMetadata>,
    ApiJson(request): ApiJson<LimitedPartnerData>,
) -> Result<Response, ApiError> {
    let view = state
        .services
        .limited_partners
        .create(&transaction_id, request, Some(metadata))
        .await?;
    let location = limited_partner_uri(&transaction_id, &view.id);
    Ok((StatusCode::CREATED, [(LOCATION, location)], Json(view)).into_response())
}

/// Lists the limited partners of a transaction
pub async fn list_limited_partners(
    State(state): State<AppState>,
    Path(transaction_id): Path<String>,
) -> Result<Json<Vec<ResourceView<LimitedPartnerData>>>, ApiError> {
    let views = state.services.limited_partners.list(&transaction_id).await?;
    Ok(Json(views))
}

pub async fn get_limited_partner(
    State(state): State<AppState>,
    Path((transaction_id, id)): Path<(String, String)>,
) -> Result<Json<ResourceView<LimitedPartnerData>>, ApiError> {
    let view = state.services.limited_partners.get(&transaction_id, &id).await?;
    Ok(Json(view))
}

/// Applies a merge patch to a limited partner
pub async fn update_limited_partner(
    State(state): State<AppState>,
    Path((transaction_id, id)): Path<(String, String)>,
    ApiJson(changes): ApiJson<Value>,
) -> Result<Json<ResourceView<LimitedPartnerData>>, ApiError> {
    let view = state
        .services
        .limited_partners
        .update(&transaction_id, &id, &changes)
        .await?;
    Ok(Json(view))
}

pub async fn delete_limited_partner(
    State(state): State<AppState>,
    Path((transaction_id, id)): Path<(String, String)>,
    Extension(metadata): Extension<OperationMetadata>,
) -> Result<StatusCode, ApiError> {
    state
        .services
        .limited_partners
        .delete(&transaction_id, &id, Some(metadata))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn validation_status(
    State(state): State<AppState>,
    Path((transaction_id, id)): Path<(String, String)>,
) -> Result<Json<ValidationStatus>, ApiError> {
    let status = state
        .services
        .limited_partners
        .validation_status(&transaction_id, &id)
        .await?;
    Ok(Json(status))
}

pub async fn costs(
    State(state): State<AppState>,
    Path((transaction_id, id)): Path<(String, String)>,
) -> Result<Json<Vec<Cost>>, ApiError> {
    let costs = state.services.limited_partners.costs(&transaction_id, &id).await?;
    Ok(Json(costs))
}
