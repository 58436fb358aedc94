use thiserror::Error;

/// Reasons a CIDR string cannot be turned into a subnet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubnetError {
    /// Missing `/`, or more than one of them.
    #[error("invalid CIDR format '{0}', expected <address>/<prefix>")]
    InvalidFormat(String),
    /// Prefix is not an integer or lies outside `0..=128`.
    #[error("invalid prefix length '{0}', must be an integer between 0 and 128")]
    InvalidPrefix(String),
    #[error("invalid IPv6 address '{0}'")]
    InvalidAddress(String),
}
