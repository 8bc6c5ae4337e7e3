//! Error type shared by all Harness REST clients

use thiserror::Error;

/// Failure of a single upstream call.
///
/// Every failure is terminal for that call — there is no retry policy and
/// no transient/permanent distinction in this layer.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure (connect, timeout, TLS, body read)
    #[error("request to Harness failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Upstream answered outside the 2xx range
    #[error("non-2xx status: {0}")]
    UnexpectedStatus(u16),

    /// Upstream answered 2xx with a body that isn't the expected JSON
    #[error("failed to decode Harness response: {0}")]
    Decode(#[from] serde_json::Error),
}
