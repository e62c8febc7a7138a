//! URL Relay - An ephemeral, fingerprint-keyed URL store
//!
//! Clients store a URL and later fetch it back without an explicit key: the
//! key is derived from the client IP and a hash of request headers. Entries
//! expire after a period without stores or fetches.

pub mod api;
pub mod config;
pub mod error;
pub mod identity;
pub mod models;
pub mod store;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_cleanup_task;
