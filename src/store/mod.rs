//! Store Module
//!
//! Provides the in-memory, identity-keyed URL store with sliding expiration.

mod entry;
mod expiring;


// Re-export public types
pub use entry::{current_timestamp_ms, UrlEntry};
pub use expiring::UrlStore;
