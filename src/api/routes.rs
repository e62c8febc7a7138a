//! API Routes
//!
//! Configures the Axum router with all relay server endpoints.

use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{get_url_handler, health_handler, store_url_handler, AppState};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /` - Liveness check
/// - `POST /storeURL` - Store a URL for the caller's identity
/// - `GET /getURL` - Fetch the URL stored for the caller's identity
///
/// # Middleware
/// - CORS: any origin, `GET`/`POST`/`OPTIONS`, `Content-Type` header
/// - Tracing: logs all requests
/// - Catch panic: a panicking handler yields a 500 instead of a dropped connection
pub fn create_router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/", get(health_handler))
        .route("/storeURL", post(store_url_handler))
        .route("/getURL", get(get_url_handler));

    with_middleware(routes).with_state(state)
}

/// Wraps routes in the CORS, panic-catching and tracing layers.
pub fn with_middleware(routes: Router<AppState>) -> Router<AppState> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    routes
        .layer(cors)
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
}
