//! # IPv6 Subnet Calculator
//!
//! Derives the network boundaries of a CIDR block such as `2001:db8::/32`.
//!
//! The arithmetic works group by group: group `i` covers bits `[16 * i, 16 * i + 16)`,
//! so every group is either fully inside the prefix, fully inside the host part,
//! or the single group the prefix boundary cuts through.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use crate::error::SubnetError;
use crate::network::address::{self, GROUP_COUNT, MAX_PREFIX};

const BITS_PER_GROUP: u32 = 16;
const GROUP_MASK: u32 = 0xFFFF;

/// `2^128` does not fit into a `u128`.
const ALL_ADDRESSES: &str = "340282366920938463463374607431768211456";

/// Host-bit count below which [`Ipv6Subnet::approximate_total`] prints the exact count.
const EXACT_DISPLAY_BITS: u8 = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ipv6Subnet {
    pub network_address: String,
    pub prefix_length: u8,
    pub cidr: String,
    pub first_address: String,
    /// Address with every host bit set.
    pub last_address: String,
    /// Exact number of addresses in the block, in decimal.
    pub total_addresses: String,
}

impl Ipv6Subnet {
    pub fn host_bits(&self) -> u8 {
        MAX_PREFIX - self.prefix_length
    }

    /// Compact form of [`Self::total_addresses`] for display, e.g. `2^64 (≈1.84e19)`.
    pub fn approximate_total(&self) -> String {
        let host_bits = self.host_bits();
        if host_bits < EXACT_DISPLAY_BITS {
            return self.total_addresses.clone();
        }
        let approx: f64 = 2f64.powi(i32::from(host_bits));
        format!("2^{host_bits} (≈{approx:.2e})")
    }

    /// Returns `true` if `address` lies inside this block.
    ///
    /// Invalid addresses are never contained.
    pub fn contains(&self, address: &str) -> bool {
        let (Some(candidate), Some(network)) = (
            address::groups(address),
            address::groups(&self.network_address),
        ) else {
            return false;
        };
        network_groups(&candidate, u32::from(self.prefix_length)) == network
    }
}

impl fmt::Display for Ipv6Subnet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.cidr)
    }
}

impl FromStr for Ipv6Subnet {
    type Err = SubnetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        calculate(s)
    }
}

/// Computes the subnet described by `cidr` (`<address>/<prefix>`).
///
/// The address does not have to be the network address; host bits are cleared.
pub fn calculate(cidr: &str) -> Result<Ipv6Subnet, SubnetError> {
    let (addr, prefix) = split_cidr(cidr)?;
    let groups =
        address::groups(addr).ok_or_else(|| SubnetError::InvalidAddress(addr.to_string()))?;

    let prefix_bits = u32::from(prefix);
    let network = network_groups(&groups, prefix_bits);
    let last = last_groups(&network, prefix_bits);

    let network_address = address::format_compressed(&network);
    debug!(cidr, network = %network_address, prefix, "calculated subnet");

    Ok(Ipv6Subnet {
        cidr: format!("{network_address}/{prefix}"),
        first_address: network_address.clone(),
        last_address: address::format_compressed(&last),
        total_addresses: total_addresses(MAX_PREFIX - prefix),
        network_address,
        prefix_length: prefix,
    })
}

/// Structural check of `cidr` without computing anything.
pub fn validate_cidr(cidr: &str) -> bool {
    split_cidr(cidr).is_ok_and(|(addr, _)| address::validate(addr))
}

fn split_cidr(cidr: &str) -> Result<(&str, u8), SubnetError> {
    let cidr = cidr.trim();
    let mut parts = cidr.split('/');

    let (Some(addr), Some(prefix), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(SubnetError::InvalidFormat(cidr.to_string()));
    };

    let prefix_length = prefix
        .parse::<u32>()
        .ok()
        .filter(|value| *value <= u32::from(MAX_PREFIX))
        .ok_or_else(|| SubnetError::InvalidPrefix(prefix.to_string()))?;

    Ok((addr, prefix_length as u8))
}

/// Clears every bit at or beyond `prefix`.
fn network_groups(groups: &[u16; GROUP_COUNT], prefix: u32) -> [u16; GROUP_COUNT] {
    let mut network = *groups;
    for (idx, group) in network.iter_mut().enumerate() {
        let start = idx as u32 * BITS_PER_GROUP;
        let end = start + BITS_PER_GROUP;

        if end <= prefix {
            continue;
        }
        if start >= prefix {
            *group = 0;
            continue;
        }

        let bits_to_keep = prefix - start;
        let mask = (GROUP_MASK << (BITS_PER_GROUP - bits_to_keep)) & GROUP_MASK;
        *group &= mask as u16;
    }
    network
}

/// Sets every bit at or beyond `prefix`.
fn last_groups(network: &[u16; GROUP_COUNT], prefix: u32) -> [u16; GROUP_COUNT] {
    let mut last = *network;
    for (idx, group) in last.iter_mut().enumerate() {
        let start = idx as u32 * BITS_PER_GROUP;
        let end = start + BITS_PER_GROUP;

        if end <= prefix {
            continue;
        }
        if start >= prefix {
            *group = u16::MAX;
            continue;
        }

        let bits_to_set = end - prefix;
        *group |= ((1u32 << bits_to_set) - 1) as u16;
    }
    last
}

fn total_addresses(host_bits: u8) -> String {
    1u128
        .checked_shl(u32::from(host_bits))
        .map_or_else(|| ALL_ADDRESSES.to_string(), |count| count.to_string())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
