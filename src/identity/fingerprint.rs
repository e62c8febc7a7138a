//! Request Fingerprinting
//!
//! Derives the storage identity for a request from its client IP and a fixed
//! set of request headers.

use axum::http::{header, HeaderMap, HeaderName};
use sha2::{Digest, Sha256};

/// Separator between fingerprint components.
const SEPARATOR: &str = "-";

/// The request attributes an identity is derived from.
///
/// Absent attributes are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestAttributes {
    pub client_ip: String,
    pub user_agent: String,
    pub accept_language: String,
    pub connection: String,
    pub accept_encoding: String,
    pub forwarded_for: String,
}

impl RequestAttributes {
    /// Collects attributes from request headers and an already resolved
    /// client IP. Repeated headers are joined with `", "`; values that are
    /// not visible ASCII are skipped.
    pub fn from_headers(client_ip: impl Into<String>, headers: &HeaderMap) -> Self {
        Self {
            client_ip: client_ip.into(),
            user_agent: header_value(headers, &header::USER_AGENT),
            accept_language: header_value(headers, &header::ACCEPT_LANGUAGE),
            connection: header_value(headers, &header::CONNECTION),
            accept_encoding: header_value(headers, &header::ACCEPT_ENCODING),
            forwarded_for: header_value(headers, &HeaderName::from_static("x-forwarded-for")),
        }
    }
}

fn header_value(headers: &HeaderMap, name: &HeaderName) -> String {
    headers
        .get_all(name)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Hex-encoded SHA-256 over the attributes joined by `-`.
pub fn fingerprint(attrs: &RequestAttributes) -> String {
    let raw = [
        attrs.client_ip.as_str(),
        attrs.user_agent.as_str(),
        attrs.accept_language.as_str(),
        attrs.connection.as_str(),
        attrs.accept_encoding.as_str(),
        attrs.forwarded_for.as_str(),
    ]
    .join(SEPARATOR);

    hex::encode(Sha256::digest(raw.as_bytes()))
}

/// Derives the storage identity `"{ip}-{fingerprint}"` for a request.
///
/// Pure and infallible: identical attributes always produce the same
/// identity, and the result is never empty.
pub fn derive_identity(attrs: &RequestAttributes) -> String {
    format!("{}{}{}", attrs.client_ip, SEPARATOR, fingerprint(attrs))
}
