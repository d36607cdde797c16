//! Mutation guards for [`HttpHeaders`](crate::http::headers::HttpHeaders).
//!
//! A guard is fixed when a header collection is created and is consulted
//! before every `append`, `set` and `delete`. The classification tables
//! below are the fixed lists from the Fetch standard; they are built once,
//! lowercased, and never change.
//!
//! Only [`Guard::Immutable`] reports a rejection as an error. Every other
//! guard drops a forbidden mutation silently.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use tracing::debug;

use crate::error::{Error, Result};

static FORBIDDEN_REQUEST_HEADERS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "accept-charset",
        "accept-encoding",
        "access-control-request-headers",
        "access-control-request-method",
        "connection",
        "content-length",
        "cookie",
        "cookie2",
        "date",
        "dnt",
        "expect",
        "host",
        "keep-alive",
        "origin",
        "referer",
        "te",
        "trailer",
        "transfer-encoding",
        "upgrade",
        "via",
    ])
});

const FORBIDDEN_REQUEST_PREFIXES: [&str; 3] = ["proxy-", "sec-", "access-control-"];

static FORBIDDEN_RESPONSE_HEADERS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| HashSet::from(["set-cookie", "set-cookie2"]));

static SIMPLE_HEADERS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "accept",
        "accept-language",
        "content-language",
        "content-type",
    ])
});

static SIMPLE_CONTENT_TYPES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "application/x-www-form-urlencoded",
        "multipart/form-data",
        "text/plain",
    ])
});

/// Enforcement mode of a header collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Guard {
    /// Every mutation is allowed.
    #[default]
    Open,
    /// Every mutation fails with [`Error::GuardViolation`].
    Immutable,
    /// Forbidden request headers are ignored.
    Request,
    /// Only simple headers may be written or removed.
    RequestNoCors,
    /// Forbidden response headers are ignored.
    Response,
}

/// The kind of mutation a guard is asked about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Append,
    Set,
    Delete,
}

impl Guard {
    pub fn as_str(&self) -> &'static str {
        match self {
            Guard::Open => "none",
            Guard::Immutable => "immutable",
            Guard::Request => "request",
            Guard::RequestNoCors => "request-no-cors",
            Guard::Response => "response",
        }
    }

    /// Decides whether a mutation may touch the entries.
    ///
    /// Returns `Ok(true)` to proceed, `Ok(false)` when the mutation must be
    /// dropped silently (logged at debug level), and `Err` for immutable
    /// collections.
    /// `value` is `None` for deletions; a no-cors delete is then judged on
    /// the name alone.
    pub fn check(self, op: Mutation, name: &str, value: Option<&str>) -> Result<bool> {
        let allowed = match self {
            Guard::Open => true,
            Guard::Immutable => {
                debug!(guard = self.as_str(), ?op, name, "rejected mutation");
                return Err(Error::GuardViolation);
            }
            Guard::Request => !is_forbidden_request_header(name),
            Guard::RequestNoCors => match value {
                Some(value) => is_simple_header(name, value),
                None => is_simple_header_name(name),
            },
            Guard::Response => !is_forbidden_response_header(name),
        };

        if !allowed {
            debug!(guard = self.as_str(), ?op, name, "ignored mutation");
        }
        Ok(allowed)
    }
}

impl std::fmt::Display for Guard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn is_forbidden_request_header(name: &str) -> bool {
    let name = name.to_ascii_lowercase();
    FORBIDDEN_REQUEST_HEADERS.contains(name.as_str())
        || FORBIDDEN_REQUEST_PREFIXES
            .iter()
            .any(|prefix| name.starts_with(prefix))
}

pub fn is_forbidden_response_header(name: &str) -> bool {
    FORBIDDEN_RESPONSE_HEADERS.contains(name.to_ascii_lowercase().as_str())
}

pub fn is_simple_header_name(name: &str) -> bool {
    SIMPLE_HEADERS.contains(name.to_ascii_lowercase().as_str())
}

/// A simple header is one of the simple names; for `Content-Type` the
/// value's MIME essence must also be one of the simple content types.
pub fn is_simple_header(name: &str, value: &str) -> bool {
    if !is_simple_header_name(name) {
        return false;
    }
    if !name.eq_ignore_ascii_case("content-type") {
        return true;
    }
    SIMPLE_CONTENT_TYPES.contains(mime_essence(value).as_str())
}

/// `type/subtype` part of a MIME type, without parameters, lowercased.
fn mime_essence(value: &str) -> String {
    let essence = value.split(';').next().unwrap_or_default();
    essence
        .trim_matches(|c| matches!(c, ' ' | '\t' | '\r' | '\n'))
        .to_ascii_lowercase()
}
