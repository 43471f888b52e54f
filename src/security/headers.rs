//! Security and cache response headers.
//!
//! # Responsibilities
//! - Attach the fixed security headers to every response
//! - Attach an immutable cache policy to cacheable assets only
//!
//! # Design Decisions
//! - Closed header vocabulary, all values static: applying never fails
//! - Existing values for these names are overwritten, not appended

use axum::http::header::CACHE_CONTROL;
use axum::http::{HeaderMap, HeaderName, HeaderValue};

use crate::routing::Classification;

/// Content security policy sent with every response.
pub const CONTENT_SECURITY_POLICY_VALUE: &str = "default-src 'none'; script-src 'self'; \
connect-src 'self'; child-src 'self'; img-src 'self'; style-src 'self'; object-src 'none'; \
frame-ancestors 'none'; base-uri 'self'; form-action 'self'";

pub const STRICT_TRANSPORT_SECURITY_VALUE: &str = "max-age=31536000; includeSubdomains; preload";
pub const X_FRAME_OPTIONS_VALUE: &str = "DENY";
pub const X_XSS_PROTECTION_VALUE: &str = "1; mode=block";
pub const X_CONTENT_TYPE_OPTIONS_VALUE: &str = "nosniff";
pub const REFERRER_POLICY_VALUE: &str = "same-origin";

/// Cache policy for cacheable assets.
pub const CACHE_CONTROL_VALUE: &str = "public, max-age=31536000, immutable";

/// Headers set on every response, in emission order.
pub const SECURITY_HEADERS: [(&str, &str); 6] = [
    ("content-security-policy", CONTENT_SECURITY_POLICY_VALUE),
    ("strict-transport-security", STRICT_TRANSPORT_SECURITY_VALUE),
    ("x-frame-options", X_FRAME_OPTIONS_VALUE),
    ("x-xss-protection", X_XSS_PROTECTION_VALUE),
    ("x-content-type-options", X_CONTENT_TYPE_OPTIONS_VALUE),
    ("referrer-policy", REFERRER_POLICY_VALUE),
];

/// Compute the headers owed to a response of the given classification.
pub fn header_set(classification: Classification) -> Vec<(HeaderName, HeaderValue)> {
    let mut headers: Vec<_> = SECURITY_HEADERS
        .into_iter()
        .map(|(name, value)| {
            (
                HeaderName::from_static(name),
                HeaderValue::from_static(value),
            )
        })
        .collect();

    if classification == Classification::Cacheable {
        headers.push((CACHE_CONTROL, HeaderValue::from_static(CACHE_CONTROL_VALUE)));
    }

    headers
}

/// Apply the header policy to an outgoing response's headers.
pub fn apply_headers(classification: Classification, headers: &mut HeaderMap) {
    for (name, value) in header_set(classification) {
        headers.insert(name, value);
    }
}
