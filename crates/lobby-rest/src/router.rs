//! Main application router.

use crate::{
    controllers::{health_controller, user_controller},
    links::{BaseUrlLinks, USERS_PATH},
    middleware::logging_middleware,
    openapi::ApiDoc,
    state::AppState,
};
use axum::{http::HeaderName, middleware, routing::get, Json, Router};
use lobby_config::AppConfig;
use lobby_service::UserService;
use shaku::{HasComponent, Module};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};
use utoipa::OpenApi;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Creates the main application router from a Shaku module.
///
/// Links in `Location` and `X-Pagination` headers are rooted at the
/// configured public URL.
pub fn create_router<M>(module: &M, config: &AppConfig) -> Router
where
    M: Module + HasComponent<dyn UserService>,
{
    let links = Arc::new(BaseUrlLinks::from_config(&config.server));
    let state = AppState::from_module(module, links);
    build_router(state, config)
}

/// Creates the application router around an already assembled state.
pub fn build_router(state: AppState, config: &AppConfig) -> Router {
    let cors = create_cors_layer(config);
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    let router = Router::new()
        .merge(health_controller::router(&config.app))
        .nest(USERS_PATH, user_controller::router().with_state(state))
        .route("/api-docs/openapi.json", get(openapi_json))
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid));

    info!("Router created with {} endpoints", USERS_PATH);
    router
}

/// Creates a CORS layer based on server configuration.
fn create_cors_layer(config: &AppConfig) -> CorsLayer {
    let server = &config.server;
    if !server.cors_enabled {
        return CorsLayer::new();
    }
    if server.cors_origins.iter().any(|o| o == "*") {
        return CorsLayer::permissive();
    }

    let origins: Vec<_> = server
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Serves the OpenAPI document.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
