//! # Local Proof-of-Work Seam
//!
//! The node can attach transactions itself, but operators with spare CPU
//! usually want the nonce search done client-side. [`LocalPow`] is the
//! plug-in point: the client stores whatever implementation it is built
//! with and hands it to higher layers untouched. Nothing in the core
//! command surface calls it.

use thiserror::Error;

/// Minimum weight magnitude the network accepts on mainnet. The number of
/// trailing zero trits a transaction hash must carry.
pub const DEFAULT_MIN_WEIGHT_MAGNITUDE: u32 = 14;

/// A nonce-search failure.
#[derive(Debug, Error)]
pub enum PowError {
    /// The input was not a valid transaction tryte string.
    #[error("pow input is not valid transaction trytes")]
    MalformedTrytes,

    /// The implementation gave up before finding a nonce.
    #[error("pow aborted: {0}")]
    Aborted(String),
}

/// A client-side nonce search strategy.
///
/// Implementations take the raw trytes of a single transaction and return
/// the same trytes with a nonce filled in such that the transaction hash
/// meets `min_weight_magnitude`. Implementations must be shareable across
/// tasks; the client stores them behind an `Arc`.
pub trait LocalPow: Send + Sync {
    /// Searches for a nonce. Returns the completed transaction trytes.
    fn perform(&self, trytes: &str, min_weight_magnitude: u32) -> Result<String, PowError>;
}
