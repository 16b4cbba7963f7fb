//! Error taxonomy for gateway calls.
//!
//! Every facade operation returns exactly one of these variants on failure,
//! so callers can match on the *kind* of failure instead of parsing message
//! strings. The taxonomy is deliberately small:
//!
//! - [`ClientError::InvalidHashes`] — rejected locally, before any network
//!   activity. Fix the input and call again.
//! - [`ClientError::BadRequest`] — the node rejected the request (HTTP 400).
//!   Carries the node's own diagnostic text.
//! - [`ClientError::Access`] — authorization or node-side failure
//!   (HTTP 401/500). Do not retry blindly; the carried status tells the two
//!   apart.
//! - [`ClientError::Transport`] — the node was not reached at all, or its
//!   response could not be decoded. The only class where a retry can make
//!   sense, since the request itself was never judged.
//! - [`ClientError::UnexpectedStatus`] — a status code outside the node's
//!   documented contract. Treated as a transport-class failure rather than
//!   guessing at success.
//!
//! The gateway performs no internal recovery — every failure is scoped to
//! the single call that produced it.

use thiserror::Error;

/// Errors surfaced by [`VelaClient`](crate::api::VelaClient) operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// A supplied identifier or identifier array failed the tryte format
    /// check. Raised before any network call; `argument` names the offending
    /// parameter.
    #[error("invalid hashes supplied for `{argument}`")]
    InvalidHashes {
        /// The facade parameter that failed validation.
        argument: &'static str,
    },

    /// The node answered HTTP 400: it considered the request malformed or
    /// invalid, independent of any local validation already performed.
    #[error("node rejected the request: {message}")]
    BadRequest {
        /// Diagnostic text from the node's error body, verbatim.
        message: String,
    },

    /// The node answered HTTP 401 (unauthorized) or HTTP 500 (node-side
    /// failure). A harder condition than [`ClientError::BadRequest`] — it
    /// points at credentials or the node itself, not the request shape.
    #[error("node refused the call ({status}): {message}")]
    Access {
        /// The HTTP status, 401 or 500.
        status: u16,
        /// Body text from the node, verbatim.
        message: String,
    },

    /// The node was unreachable, the connection failed mid-call, or the
    /// response body could not be decoded into the expected shape.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The node answered with a status code outside the documented
    /// 200/400/401/500 contract. Surfaced as-is instead of attempting a
    /// decode.
    #[error("unexpected response status {status}: {body}")]
    UnexpectedStatus {
        /// The undocumented HTTP status.
        status: u16,
        /// Body text, verbatim (possibly empty).
        body: String,
    },

    /// The configured protocol/host/port do not form a valid URL. Raised at
    /// client construction, never during a call.
    #[error("invalid node endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
}
