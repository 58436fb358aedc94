//! # ipv6kit core
//!
//! Turns the text printed by `ping`, `ping6`, `traceroute6` and `tracert` into
//! structured records.
//!
//! * **[`diagnostics`]**: stateless single-line parsers for both output dialects.
//! * **[`session`]**: drivers that feed a stream of lines through the parsers and
//!   keep the per-run state (sequence counter, collected records).
//! * **[`statistics`]**: packet loss and round-trip summaries over parsed replies.
//!
//! This crate never launches the diagnostic commands itself.

pub mod diagnostics;
pub mod session;
pub mod statistics;
