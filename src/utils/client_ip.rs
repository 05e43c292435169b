//! Client identity resolution from HTTP request headers and the peer address.

use axum::http::{HeaderMap, HeaderName};
use std::borrow::Cow;

/// Direct-trust header set by a fronting proxy to the single client address.
pub const X_REAL_IP: HeaderName = HeaderName::from_static("x-real-ip");

/// Proxy-chain header: comma-separated addresses, originating client first.
pub const X_FORWARDED_FOR: HeaderName = HeaderName::from_static("x-forwarded-for");

/// Identifier used when neither trust headers nor a peer address are available.
pub const UNKNOWN_CLIENT: &str = "unknown";

/// Resolves the identifier used to rate limit a request.
///
/// Precedence, first non-empty wins:
///
/// 1. `X-Real-IP`, returned as-is
/// 2. `X-Forwarded-For`, the first non-empty element after trimming whitespace
/// 3. `remote_addr` with the port stripped (see [`strip_port`])
///
/// Header values are not validated as addresses and their origin is not
/// verified, so any client can choose its own identifier by sending these
/// headers. Deploy behind a proxy that overwrites them.
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(X_FORWARDED_FOR, " 10.0.0.1 , 10.0.0.2".parse().unwrap());
///
/// assert_eq!(resolve_client_ip(&headers, Some("127.0.0.1:4000")), "10.0.0.1");
/// ```
pub fn resolve_client_ip(headers: &HeaderMap, remote_addr: Option<&str>) -> String {
    if let Some(real_ip) = header_str(headers, &X_REAL_IP)
        && !real_ip.is_empty()
    {
        return real_ip.into_owned();
    }

    if let Some(forwarded) = header_str(headers, &X_FORWARDED_FOR)
        && let Some(first) = forwarded
            .split(',')
            .map(str::trim)
            .find(|part| !part.is_empty())
    {
        return first.to_string();
    }

    match remote_addr {
        Some(addr) => strip_port(addr).to_string(),
        None => UNKNOWN_CLIENT.to_string(),
    }
}

/// Strips the port from a connection address.
///
/// - `203.0.113.7:54321` → `203.0.113.7`
/// - `[::1]:8080` → `[::1]`
/// - `localhost` → `localhost`
pub fn strip_port(addr: &str) -> &str {
    if addr.starts_with('[') {
        // IPv6 address (e.g., [::1] or [::1]:8080)
        if let Some(end_bracket) = addr.find(']') {
            return &addr[..=end_bracket];
        }
        return addr;
    }

    addr.split(':').next().unwrap_or(addr)
}

// Bytes outside visible ASCII are kept (invalid UTF-8 becomes U+FFFD) rather
// than discarding the whole header.
fn header_str<'a>(headers: &'a HeaderMap, name: &HeaderName) -> Option<Cow<'a, str>> {
    headers
        .get(name)
        .map(|v| String::from_utf8_lossy(v.as_bytes()))
}
