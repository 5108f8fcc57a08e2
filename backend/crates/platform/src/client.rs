//! Client identification utilities
//!
//! Common functions for identifying clients via HTTP headers.

use axum::http::HeaderMap;
use std::net::IpAddr;

/// Key used when no client address can be determined
pub const UNKNOWN_CLIENT: &str = "unknown";

/// Extract client IP address
///
/// With `trust_forwarded` set, the X-Forwarded-For header is checked first
/// (for reverse proxy setups). Otherwise, or when the header is absent or
/// malformed, the direct connection IP is used.
///
/// ## Arguments
/// * `headers` - HTTP request headers
/// * `direct_ip` - Direct connection IP address
/// * `trust_forwarded` - Whether proxy headers may be believed
///
/// ## Returns
/// The client IP address, or None if not determinable
pub fn extract_client_ip(
    headers: &HeaderMap,
    direct_ip: Option<IpAddr>,
    trust_forwarded: bool,
) -> Option<IpAddr> {
    if trust_forwarded {
        // Check X-Forwarded-For header (first IP in the list)
        if let Some(xff) = headers.get("x-forwarded-for").and_then(|v| v.to_str().ok()) {
            if let Some(first_ip) = xff.split(',').next() {
                if let Ok(ip) = first_ip.trim().parse::<IpAddr>() {
                    return Some(ip);
                }
            }
        }
    }
    direct_ip
}

/// Rate limiting key for a client
pub fn client_key(ip: Option<IpAddr>) -> String {
    ip.map(|ip| ip.to_string())
        .unwrap_or_else(|| UNKNOWN_CLIENT.to_string())
}
