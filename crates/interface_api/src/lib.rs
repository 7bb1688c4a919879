//! HTTP API Layer
//!
//! This crate provides the REST API for limited partnership filings using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for each submission resource
//! - **Middleware**: Filer identity and audit logging
//! - **DTOs**: Response shapes the domain has no type for
//! - **Error Handling**: Validation errors as 400s, everything else mapped once
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let app = create_router(AppState::in_memory(config));
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use core_kernel::HealthCheckable;
use domain_partnership::adapters::{InMemoryCompanyProfiles, InMemoryTransactions};
use domain_partnership::{PartnershipPorts, PartnershipServices};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::handlers::{general_partner, health, incorporation, limited_partner, partnership};
use crate::middleware::{audit_middleware, identity_middleware};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub services: PartnershipServices,
    pub config: ApiConfig,
    /// Collaborators reported by the health check
    pub health: Vec<Arc<dyn HealthCheckable>>,
}

impl AppState {
    pub fn new(
        config: ApiConfig,
        ports: PartnershipPorts,
        health: Vec<Arc<dyn HealthCheckable>>,
    ) -> Self {
        Self {
            services: PartnershipServices::new(ports, config.costs()),
            config,
            health,
        }
    }

    /// State backed entirely by in-memory adapters
    pub fn in_memory(config: ApiConfig) -> Self {
        let company_profiles = Arc::new(InMemoryCompanyProfiles::new());
        let transactions = Arc::new(InMemoryTransactions::new());
        let ports = PartnershipPorts::in_memory(company_profiles.clone(), transactions.clone());
        let health: Vec<Arc<dyn HealthCheckable>> = vec![
            company_profiles as Arc<dyn HealthCheckable>,
            transactions as Arc<dyn HealthCheckable>,
        ];
        Self::new(config, ports, health)
    }
}

/// Creates the main API router
pub fn create_router(state: AppState) -> Router {
    let incorporation_routes = Router::new()
        .route(
            "/transactions/:transaction_id/incorporation/limited-partnership",
            post(incorporation::create_incorporation),
        )
        .route(
            "/transactions/:transaction_id/incorporation/limited-partnership/:id/validation-status",
            get(incorporation::validation_status),
        )
        .route(
            "/private/transactions/:transaction_id/incorporation/limited-partnership/:id/filings",
            get(incorporation::filing),
        );

    let partnership_routes = Router::new()
        .route("/partnership", post(partnership::create_partnership))
        .route(
            "/partnership/:id",
            get(partnership::get_partnership).patch(partnership::update_partnership),
        )
        .route(
            "/partnership/:id/validation-status",
            get(partnership::validation_status),
        )
        .route("/partnership/:id/costs", get(partnership::costs));

    let general_partner_routes = Router::new()
        .route("/general-partner", post(general_partner::create_general_partner))
        .route("/general-partners", get(general_partner::list_general_partners))
        .route(
            "/general-partner/:id",
            get(general_partner::get_general_partner)
                .patch(general_partner::update_general_partner)
                .delete(general_partner::delete_general_partner),
        )
        .route(
            "/general-partner/:id/validation-status",
            get(general_partner::validation_status),
        )
        .route("/general-partner/:id/costs", get(general_partner::costs));

    let limited_partner_routes = Router::new()
        .route("/limited-partner", post(limited_partner::create_limited_partner))
        .route("/limited-partners", get(limited_partner::list_limited_partners))
        .route(
            "/limited-partner/:id",
            get(limited_partner::get_limited_partner)
                .patch(limited_partner::update_limited_partner)
                .delete(limited_partner::delete_limited_partner),
        )
        .route(
            "/limited-partner/:id/validation-status",
            get(limited_partner::validation_status),
        )
        .route("/limited-partner/:id/costs", get(limited_partner::costs));

    let submission_routes = Router::new()
        .merge(partnership_routes)
        .merge(general_partner_routes)
        .merge(limited_partner_routes);

    let api_routes = Router::new()
        .merge(incorporation_routes)
        .nest("/transactions/:transaction_id/limited-partnership", submission_routes)
        .layer(axum_middleware::from_fn(audit_middleware))
        .layer(axum_middleware::from_fn(identity_middleware));

    Router::new()
        .route("/healthcheck", get(health::health_check))
        .merge(api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
