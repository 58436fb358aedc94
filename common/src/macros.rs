//! Logging shorthands used across the workspace.
//!
//! They forward to `tracing` so that whatever subscriber the binary installs decides
//! how a message looks. `success!` uses its own target, which the CLI formatter
//! renders with the `[+]` marker.

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::__tracing::info!(target: "ipv6kit::info", $($arg)*)
    };
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::__tracing::info!(target: "ipv6kit::success", $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::__tracing::warn!(target: "ipv6kit::warn", $($arg)*)
    };
}
