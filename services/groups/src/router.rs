use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use roster_core::health::healthz;
use roster_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::handlers::group::{create_group, get_group};
use crate::handlers::health::readyz;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Groups
        .route("/groups", post(create_group))
        .route("/groups/{id}", get(get_group))
        .with_state(state)
        .layer(propagate_request_id_layer())
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
}
