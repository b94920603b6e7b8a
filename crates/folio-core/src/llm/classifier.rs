//! Failure classification for provider adapter errors
//!
//! Adapters normalize every vendor failure into an [`AdapterError`]. The
//! failover controller never inspects vendor types; it asks [`classify`] for a
//! [`FailureKind`] and only a `Capacity` failure is allowed to move the chain.
//!
//! The matching vocabulary lives in the tables below rather than in the
//! controller so it can be reviewed and tested on its own.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Message fragments that indicate rate limiting or quota exhaustion.
///
/// `tpd` is Groq's tokens-per-day limit marker.
pub const CAPACITY_MARKERS: &[&str] = &["rate limit", "429", "tpd", "resource exhausted"];

/// HTTP statuses that indicate rate limiting or quota exhaustion
pub const CAPACITY_STATUSES: &[u16] = &[429];

/// Message fragments that indicate authentication or request validation errors
pub const FATAL_MARKERS: &[&str] = &[
    "invalid api key",
    "api key not valid",
    "unauthorized",
    "authentication",
    "permission denied",
    "forbidden",
    "invalid request",
    "invalid_request_error",
    "model_not_found",
    "does not exist",
];

/// HTTP statuses that indicate authentication or request validation errors
pub const FATAL_STATUSES: &[u16] = &[400, 401, 403, 404, 422];

/// Classification of an adapter failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureKind {
    /// Rate limit or quota exhaustion: recoverable by switching provider
    Capacity,
    /// Network failure, timeout or server error: surfaced without switching
    Transient,
    /// Authentication or validation error: surfaced without switching
    Fatal,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Capacity => write!(f, "capacity"),
            Self::Transient => write!(f, "transient"),
            Self::Fatal => write!(f, "fatal"),
        }
    }
}

/// Normalized failure reported by a provider adapter
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{raw_message}")]
pub struct AdapterError {
    /// Vendor error text, already sanitized of credentials
    pub raw_message: String,
    /// HTTP status of the vendor response, when one was received
    pub http_status: Option<u16>,
}

impl AdapterError {
    /// Create an adapter error without an HTTP status
    pub fn new(raw_message: impl Into<String>) -> Self {
        Self {
            raw_message: raw_message.into(),
            http_status: None,
        }
    }

    /// Create an adapter error carrying the vendor's HTTP status
    pub fn with_status(raw_message: impl Into<String>, status: u16) -> Self {
        Self {
            raw_message: raw_message.into(),
            http_status: Some(status),
        }
    }

    /// Classify this error
    pub fn kind(&self) -> FailureKind {
        classify(self)
    }
}

/// Classify an adapter failure.
///
/// Capacity is checked first: a 429 whose body also mentions the API key is
/// still a rate limit. Vendor enum spellings such as `RESOURCE_EXHAUSTED` are
/// matched by treating underscores as spaces.
pub fn classify(error: &AdapterError) -> FailureKind {
    let message = normalize(&error.raw_message);

    let status_is = |table: &[u16]| error.http_status.is_some_and(|s| table.contains(&s));

    if status_is(CAPACITY_STATUSES) || CAPACITY_MARKERS.iter().any(|m| message.contains(m)) {
        return FailureKind::Capacity;
    }

    if status_is(FATAL_STATUSES) || FATAL_MARKERS.iter().any(|m| message.contains(m)) {
        return FailureKind::Fatal;
    }

    FailureKind::Transient
}

fn normalize(message: &str) -> String {
    message.to_lowercase().replace('_', " ")
}
