/// HTTP routing and cross-origin policy
use crate::{api, config::CorsSettings, error::Result, state::AppState};
use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Path of the WebSocket endpoint
pub const REALTIME_PATH: &str = "/ws";

/// Build the full application router
pub fn create_router(app_state: AppState, cors: CorsLayer) -> Router {
    let api_routes = Router::new()
        .route("/health", get(api::health::health))
        .route("/users", post(api::users::create_user))
        .route("/users/export", get(api::users::export_users));

    Router::new()
        .nest("/api", api_routes)
        .route(REALTIME_PATH, get(api::realtime::connect))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(cors)
        .with_state(app_state)
}

/// One allowed origin, `GET`/`POST` only, `Content-Type` as the only request header
pub fn cors_layer(settings: &CorsSettings) -> Result<CorsLayer> {
    Ok(CorsLayer::new()
        .allow_origin(settings.origin_header()?)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]))
}
