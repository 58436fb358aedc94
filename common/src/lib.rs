//! # ipv6kit common
//!
//! Address-level building blocks shared by every other crate in the workspace:
//!
//! * **[`network::address`]**: validation, expansion, compression and classification
//!   of IPv6 addresses.
//! * **[`network::subnet`]**: CIDR arithmetic on top of the canonical form.
//! * **[`config`]**: runtime options handed from the CLI to the commands.
//!
//! Nothing in here performs I/O. Every function is a pure mapping from text to values.

pub mod config;
pub mod error;
pub mod macros;
pub mod network;

#[doc(hidden)]
pub use tracing as __tracing;
