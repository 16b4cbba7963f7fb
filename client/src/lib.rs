// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # VELA Client — Node Command Gateway
//!
//! The client library for VELA, a tangle ledger that settles transactions
//! by having each new one vouch for two old ones. This crate is the part
//! that talks: a typed, validated gateway to a single node's command API,
//! with no opinion about what you do with the answers.
//!
//! Everything rides on one observation: the node's API is nine commands
//! POSTed to one endpoint, and almost everything that goes wrong with
//! client integrations is malformed input or misread failures. So this
//! crate is built around exactly those two jobs — validate before the
//! wire, classify after it.
//!
//! ## Architecture
//!
//! The modules mirror the life of a single call:
//!
//! - **trytes** — Identifier format rules. The tryte alphabet gatekeeps here.
//! - **commands** — Typed builders for the node's command payloads.
//! - **transport** — One pooled HTTP adapter; headers composed once, ever.
//! - **responses** — Typed views of what the node sends back.
//! - **error** — The full failure taxonomy. Four families, no surprises.
//! - **api** — The facade: validate, dispatch, classify. In that order.
//! - **pow** — Seam for client-side proof-of-work. Bring your own hasher.
//!
//! ## Design Philosophy
//!
//! 1. Reject bad input before it costs a round trip.
//! 2. Absent means omitted — this client never sends `null`.
//! 3. A status code the node never promised is treated as weather, not
//!    signal: logged, surfaced, never guessed at.
//! 4. The node is the authority on tangle semantics; we are the authority
//!    on the wire.

pub mod api;
pub mod commands;
pub mod error;
pub mod pow;
pub mod responses;
pub mod transport;
pub mod trytes;
