//! API Module
//!
//! HTTP handlers and routing for the relay server REST API.
//!
//! # Endpoints
//! - `GET /` - Liveness check
//! - `POST /storeURL` - Store a URL for the caller's identity
//! - `GET /getURL` - Fetch the URL stored for the caller's identity

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::{create_router, with_middleware};
