//! Identity Module
//!
//! Turns an inbound request into the identity its URL is stored under.

mod client_ip;
mod fingerprint;


pub use client_ip::resolve_client_ip;
pub use fingerprint::{derive_identity, fingerprint, RequestAttributes};
