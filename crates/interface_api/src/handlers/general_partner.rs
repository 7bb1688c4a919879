//! General partner handlers

use axum::{
    extract::{Path, State},
    http::{header::LOCATION, StatusCode},
    response::{IntoResponse, Response},
    Extension, Json,
};
use core_kernel::OperationMetadata;
use domain_partnership::{
    transaction::general_partner_uri, Cost, GeneralPartnerData, ResourceView, ValidationStatus,
};
use serde_json::Value;

use crate::extract::ApiJson;
use crate::{error::ApiError, AppState};

/// Creates a general partner
pub async fn create_general_partner(
    State(state): State<AppState>,
    Path(transaction_id): Path<String>,
    Extension(metadata): Extension<OperationMetadata>,
    ApiJson(request): ApiJson<GeneralPartnerData>,
) -> Result<Response, ApiError> {
    let view = state
        .services
        .general_partners
        .create(&transaction_id, request, Some(metadata))
        .await?;
    let location = general_partner_uri(&transaction_id, &view.id);
    Ok((StatusCode::CREATED, [(LOCATION, location)], Json(view)).into_response())
}

/// Lists the general partners of a transaction
pub async fn list_general_partners(
    State(state): State<AppState>,
    Path(transaction_id): Path<String>,
) -> Result<Json<Vec<ResourceView<GeneralPartnerData>>>, ApiError> {
    let views = state.services.general_partners.list(&transaction_id).await?;
    Ok(Json(views))
}

pub async fn get_general_partner(
    State(state): State<AppState>,
    Path((transaction_id, id)): Path<(String, String)>,
) -> Result<Json<ResourceView<GeneralPartnerData>>, ApiError> {
    let view = state.services.general_partners.get(&transaction_id, &id).await?;
    Ok(Json(view))
}

/// Applies a merge patch to a general partner
pub async fn update_general_partner(
    State(state): State<AppState>,
    Path((transaction_id, id)): Path<(String, String)>,
    ApiJson(changes): ApiJson<Value>,
) -> Result<Json<ResourceView<GeneralPartnerData>>, ApiError> {
    let view = state
        .services
        .general_partners
        .update(&transaction_id, &id, &changes)
        .await?;
    Ok(Json(view))
}

pub async fn delete_general_partner(
    State(state): State<AppState>,
    Path((transaction_id, id)): Path<(String, String)>,
    Extension(metadata): Extension<OperationMetadata>,
) -> Result<StatusCode, ApiError> {
    state
        .services
        .general_partners
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
        .general_partners
        .validation_status(&transaction_id, &id)
        .await?;
    Ok(Json(status))
}

pub async fn costs(
    State(state): State<AppState>,
    Path((transaction_id, id)): Path<(String, String)>,
) -> Result<Json<Vec<Cost>>, ApiError> {
    let costs = state.services.general_partners.costs(&transaction_id, &id).await?;
    Ok(Json(costs))
}
