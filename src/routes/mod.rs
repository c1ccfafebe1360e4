use crate::state::AppState;
use axum::middleware;
use axum::{
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

pub mod access;
pub mod events;
pub mod roles;
pub mod users;

use access::check_access;
use events::{create_event, delete_event, get_event, list_events, update_event};
use roles::{grant_role, list_event_roles};
use users::list_user_events;

// OpenAPI endpoint handler
async fn openapi_json() -> Json<serde_json::Value> {
    use utoipa::OpenApi;
    Json(
        serde_json::to_value(crate::openapi::ApiDoc::openapi())
            .expect("Failed to serialize OpenAPI document for event-service"),
    )
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "event-service",
    }))
}

pub fn build_router(state: AppState) -> Router {
    // Service introspection endpoints (no auth, no API version prefix)
    let introspection = Router::new()
        .route("/health", get(health))
        .route("/metrics", get(crate::metrics::metrics_handler))
        .route("/openapi.json", get(openapi_json));

    // API v1 endpoints
    let api_v1 = Router::new()
        .route("/events", post(create_event).get(list_events))
        .route(
            "/events/:event_id",
            get(get_event).patch(update_event).delete(delete_event),
        )
        .route(
            "/events/:event_id/roles",
            get(list_event_roles).post(grant_role),
        )
        .route("/users/:user_id/events", get(list_user_events))
        .route("/access/check", get(check_access));

    // Identity propagation applies to API routes only (introspection stays
    // public for healthchecks)
    let secured_api_v1 = api_v1.layer(middleware::from_fn(
        crate::middleware::auth::auth_middleware,
    ));

    let router = introspection
        .merge(Router::new().nest("/v1", secured_api_v1))
        .layer(middleware::from_fn(crate::metrics::track_http_metrics));

    crate::middleware::with_defaults(router).with_state(state)
}
