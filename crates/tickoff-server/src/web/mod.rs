pub mod api;

use crate::state::AppState;
use axum::{routing::get, Json, Router};
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

/// GET / -- service banner
async fn root() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Welcome to Tickoff",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub fn build_router(state: AppState) -> anyhow::Result<Router> {
    let origins = state.config.cors.origin_headers()?;
    let state = Arc::new(state);

    // Credentialed CORS forbids wildcards, so mirror the request instead
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    Ok(Router::new()
        .route("/", get(root))
        .nest("/api", api::build_api_routes(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http()))
}
