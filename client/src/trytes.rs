//! # Tryte Identifiers
//!
//! Validation for the fixed-alphabet identifiers the VELA node deals in.
//! Addresses, transaction hashes, tags, and bundle hashes are all strings
//! over the 27-character tryte alphabet (`9` plus uppercase `A`–`Z`), and
//! the node rejects anything else with an HTTP 400. The functions here let
//! the client refuse malformed identifiers *before* spending a network
//! round trip on them.
//!
//! ## Identifier Forms
//!
//! ```text
//! hash                81 trytes   transaction hash, bundle hash, bare address
//! address + checksum  90 trytes   address with a 9-tryte transcription checksum
//! ```
//!
//! The checksum is a transcription aid for humans — it never goes on the
//! wire. [`strip_checksum`] removes it on the convenience paths that accept
//! both forms.
//!
//! Everything in this module is pure: no side effects, no panics, `false`
//! for every structural problem.

// ---------------------------------------------------------------------------
// Alphabet & Lengths
// ---------------------------------------------------------------------------

/// The tryte alphabet. `9` plays the role of zero, then `A` through `Z`.
pub const TRYTE_ALPHABET: &str = "9ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Length of a bare identifier: transaction hash, bundle hash, or address.
pub const HASH_LENGTH: usize = 81;

/// Length of the optional address checksum suffix.
pub const CHECKSUM_LENGTH: usize = 9;

/// Length of an address carrying its checksum.
pub const ADDRESS_WITH_CHECKSUM_LENGTH: usize = HASH_LENGTH + CHECKSUM_LENGTH;

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Returns true when `c` is a single tryte character.
fn is_tryte(c: char) -> bool {
    c == '9' || c.is_ascii_uppercase()
}

/// Returns true when `input` is non-empty and consists only of trytes.
pub fn is_trytes(input: &str) -> bool {
    !input.is_empty() && input.chars().all(is_tryte)
}

/// Returns true when `input` is exactly `length` trytes.
///
/// The length check is in bytes, which is safe here: any non-ASCII input
/// fails the alphabet check anyway.
pub fn is_trytes_of_length(input: &str, length: usize) -> bool {
    input.len() == length && is_trytes(input)
}

/// Returns true when `input` is a well-formed identifier: exactly
/// [`HASH_LENGTH`] trytes.
pub fn is_hash(input: &str) -> bool {
    is_trytes_of_length(input, HASH_LENGTH)
}

/// Returns true when every element of `hashes` is a well-formed identifier.
///
/// An empty slice is vacuously valid. Commands that require at least one
/// element enforce that themselves — length policy is not the validator's
/// business.
pub fn is_array_of_hashes<S: AsRef<str>>(hashes: &[S]) -> bool {
    hashes.iter().all(|h| is_hash(h.as_ref()))
}

// ---------------------------------------------------------------------------
// Checksums
// ---------------------------------------------------------------------------

/// Strips the 9-tryte checksum from an address, if present.
///
/// Returns the leading [`HASH_LENGTH`] trytes when `address` is a
/// well-formed 90-tryte address+checksum. Anything else comes back
/// unchanged — the paths that call this perform no validation of their
/// own, and the node is authoritative on what they let through.
pub fn strip_checksum(address: &str) -> &str {
    if is_trytes_of_length(address, ADDRESS_WITH_CHECKSUM_LENGTH) {
        &address[..HASH_LENGTH]
    } else {
        address
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
