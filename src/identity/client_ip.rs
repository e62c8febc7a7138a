//! Client IP Resolution
//!
//! Picks the originating client address from proxy headers, falling back to
//! the TCP peer address.

use std::net::{IpAddr, SocketAddr};

use axum::http::HeaderMap;

/// Proxy headers consulted in priority order. A header may carry a
/// comma-separated chain or repeat; its first entry that is a valid IP wins.
const IP_HEADERS: [&str; 5] = [
    "x-client-ip",
    "x-forwarded-for",
    "cf-connecting-ip",
    "true-client-ip",
    "x-real-ip",
];

/// Resolves the client IP for a request.
///
/// Returns the first header candidate that parses as an IP address, else the
/// peer address, else an empty string.
pub fn resolve_client_ip(headers: &HeaderMap, peer: Option<SocketAddr>) -> String {
    IP_HEADERS
        .iter()
        .flat_map(|name| headers.get_all(*name))
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .find_map(|candidate| parse_ip(candidate.trim()))
        .or_else(|| peer.map(|addr| addr.ip()))
        .map(|ip| ip.to_string())
        .unwrap_or_default()
}

/// Parses a bare IP, tolerating an `ip:port` or `[v6]:port` suffix some
/// proxies append.
fn parse_ip(candidate: &str) -> Option<IpAddr> {
    candidate
        .parse::<IpAddr>()
        .ok()
        .or_else(|| candidate.parse::<SocketAddr>().ok().map(|addr| addr.ip()))
}
