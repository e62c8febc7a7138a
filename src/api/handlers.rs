//! API Handlers
//!
//! HTTP request handlers for each relay server endpoint.

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    body::Bytes,
    extract::{ConnectInfo, State},
    http::HeaderMap,
    Json,
};

use crate::error::Result;
use crate::identity::{derive_identity, resolve_client_ip, RequestAttributes};
use crate::models::{GetUrlResponse, HealthResponse, StoreUrlRequest, StoreUrlResponse};
use crate::store::UrlStore;

/// Application state shared across all handlers.
///
/// Contains the URL store wrapped in Arc<RwLock<>> for thread-safe access.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe URL store
    pub store: Arc<RwLock<UrlStore>>,
    /// Port reported by the liveness check
    pub port: u16,
}

impl AppState {
    /// Creates a new AppState with the given store.
    pub fn new(store: UrlStore, port: u16) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            port,
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new(UrlStore::new(config.expiration_time), config.port)
    }
}

/// TCP peer address, when the server was started with connect info.
pub type PeerAddr = Option<ConnectInfo<SocketAddr>>;

/// Derives the storage identity of the request carrying `headers`.
fn request_identity(headers: &HeaderMap, peer: PeerAddr) -> String {
    let client_ip = resolve_client_ip(headers, peer.map(|ConnectInfo(addr)| addr));
    derive_identity(&RequestAttributes::from_headers(client_ip, headers))
}

/// Handler for POST /storeURL
///
/// Validates the submitted URL and stores it under the caller's identity.
/// The body is parsed as JSON whatever its `Content-Type`.
pub async fn store_url_handler(
    State(state): State<AppState>,
    peer: PeerAddr,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<StoreUrlResponse>> {
    let url = StoreUrlRequest::from_body(&body).validate()?;

    let identity = request_identity(&headers, peer);

    // Acquire write lock and store the URL
    let mut store = state.store.write().await;
    store.put(identity.clone(), url);

    Ok(Json(StoreUrlResponse::new(identity)))
}

/// Handler for GET /getURL
///
/// Returns the URL stored under the caller's identity.
pub async fn get_url_handler(
    State(state): State<AppState>,
    peer: PeerAddr,
    headers: HeaderMap,
) -> Result<Json<GetUrlResponse>> {
    let identity = request_identity(&headers, peer);

    // Write lock: a hit refreshes the entry's timestamp
    let mut store = state.store.write().await;
    let url = store.get(&identity)?;

    Ok(Json(GetUrlResponse::new(url)))
}

/// Handler for GET /
///
/// Liveness check. Does not touch the store.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::running(state.port))
}
