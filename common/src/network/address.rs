//! # IPv6 Address Canonicalization
//!
//! Validates, expands, compresses and classifies textual IPv6 addresses.
//!
//! Accepted input:
//! * Full form, e.g. `2001:0db8:0000:0000:0000:0000:0000:0001`.
//! * Compressed form with a single `::`, e.g. `2001:db8::1`.
//! * The IPv4-mapped form `::ffff:a.b.c.d`.
//! * Any of the above followed by `/prefix` with a prefix in `0..=128`.
//!
//! None of the functions here fail. Invalid input is echoed back unchanged and
//! classified as [`Ipv6AddressType::Unknown`], so callers can always display something.

use std::fmt;

use serde::Serialize;
use tracing::trace;

pub const GROUP_COUNT: usize = 8;
pub const MAX_PREFIX: u8 = 128;

const MAX_GROUP_DIGITS: usize = 4;
const MAPPED_PREFIX: &str = "::ffff:";

/// Address category derived from the leading bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Ipv6AddressType {
    /// `::/128`
    Unspecified,
    /// `::1/128`
    Loopback,
    /// `fe80::/10`
    LinkLocal,
    /// `fc00::/7`
    UniqueLocal,
    /// `2000::/3`
    GlobalUnicast,
    /// `ff00::/8`
    Multicast,
    Unknown,
}

impl Ipv6AddressType {
    /// Short tag as commonly used in interface listings.
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Ipv6AddressType::Unspecified => "UNSPEC",
            Ipv6AddressType::Loopback => "LOOP",
            Ipv6AddressType::LinkLocal => "LLA",
            Ipv6AddressType::UniqueLocal => "ULA",
            Ipv6AddressType::GlobalUnicast => "GUA",
            Ipv6AddressType::Multicast => "MCAST",
            Ipv6AddressType::Unknown => "IPv6",
        }
    }
}

impl fmt::Display for Ipv6AddressType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Ipv6AddressType::Unspecified => "Unspecified",
            Ipv6AddressType::Loopback => "Loopback",
            Ipv6AddressType::LinkLocal => "Link-Local",
            Ipv6AddressType::UniqueLocal => "Unique Local",
            Ipv6AddressType::GlobalUnicast => "Global Unicast",
            Ipv6AddressType::Multicast => "Multicast",
            Ipv6AddressType::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

/// Every representation of one input string.
///
/// `expanded` and `compressed` never carry the prefix suffix; it is reported
/// separately in `prefix`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ipv6Address {
    pub raw: String,
    pub expanded: String,
    pub compressed: String,
    #[serde(rename = "type")]
    pub address_type: Ipv6AddressType,
    pub prefix: Option<u8>,
    pub is_valid: bool,
}

impl From<&str> for Ipv6Address {
    fn from(raw: &str) -> Self {
        parse(raw)
    }
}

impl fmt::Display for Ipv6Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.prefix {
            Some(prefix) => write!(f, "{}/{}", self.compressed, prefix),
            None => f.write_str(&self.compressed),
        }
    }
}

/// A successfully parsed input.
struct Canonical<'a> {
    groups: [u16; GROUP_COUNT],
    /// Text after the `/`, kept verbatim for re-appending.
    suffix: Option<&'a str>,
    prefix: Option<u8>,
    /// Input used the dotted `::ffff:a.b.c.d` notation.
    dotted: bool,
}

impl Canonical<'_> {
    fn compressed(&self) -> String {
        if self.dotted {
            let [.., hi, lo] = self.groups;
            let [a, b] = hi.to_be_bytes();
            let [c, d] = lo.to_be_bytes();
            return format!("{MAPPED_PREFIX}{a}.{b}.{c}.{d}");
        }
        format_compressed(&self.groups)
    }

    fn with_suffix(&self, address: String) -> String {
        match self.suffix {
            Some(suffix) => format!("{address}/{suffix}"),
            None => address,
        }
    }
}

/// Returns `true` if `input` is a well-formed IPv6 address with an optional `/prefix`.
pub fn validate(input: &str) -> bool {
    canonicalize(input).is_some()
}

/// Expands to eight zero-padded groups, keeping any `/prefix` suffix.
///
/// Invalid input is returned unchanged.
pub fn expand(input: &str) -> String {
    match canonicalize(input) {
        Some(canonical) => canonical.with_suffix(format_expanded(&canonical.groups)),
        None => input.to_string(),
    }
}

/// Shortens to the compressed notation, keeping any `/prefix` suffix.
///
/// Invalid input is returned unchanged.
pub fn compress(input: &str) -> String {
    match canonicalize(input) {
        Some(canonical) => canonical.with_suffix(canonical.compressed()),
        None => input.to_string(),
    }
}

pub fn classify(input: &str) -> Ipv6AddressType {
    canonicalize(input)
        .map(|canonical| classify_groups(&canonical.groups))
        .unwrap_or(Ipv6AddressType::Unknown)
}

/// Builds the full [`Ipv6Address`] record for `input`.
pub fn parse(input: &str) -> Ipv6Address {
    match canonicalize(input) {
        Some(canonical) => Ipv6Address {
            raw: input.to_string(),
            expanded: format_expanded(&canonical.groups),
            compressed: canonical.compressed(),
            address_type: classify_groups(&canonical.groups),
            prefix: canonical.prefix,
            is_valid: true,
        },
        None => Ipv6Address {
            raw: input.to_string(),
            expanded: input.to_string(),
            compressed: input.to_string(),
            address_type: Ipv6AddressType::Unknown,
            prefix: None,
            is_valid: false,
        },
    }
}

/// The eight 16-bit groups of `input`, ignoring any prefix suffix.
pub fn groups(input: &str) -> Option<[u16; GROUP_COUNT]> {
    canonicalize(input).map(|canonical| canonical.groups)
}

pub fn format_expanded(groups: &[u16; GROUP_COUNT]) -> String {
    groups
        .iter()
        .map(|group| format!("{group:04x}"))
        .collect::<Vec<String>>()
        .join(":")
}

/// Strips leading zeros and replaces the longest run of zero groups with `::`.
///
/// Ties go to the earliest run. A single zero group is never replaced.
pub fn format_compressed(groups: &[u16; GROUP_COUNT]) -> String {
    let (mut best_start, mut best_len) = (0usize, 0usize);
    let (mut run_start, mut run_len) = (0usize, 0usize);

    for (idx, group) in groups.iter().enumerate() {
        if *group != 0 {
            run_len = 0;
            continue;
        }
        if run_len == 0 {
            run_start = idx;
        }
        run_len += 1;
        if run_len > best_len {
            best_start = run_start;
            best_len = run_len;
        }
    }

    if best_len < 2 {
        return join_hex(groups);
    }

    let before = join_hex(&groups[..best_start]);
    let after = join_hex(&groups[best_start + best_len..]);
    format!("{before}::{after}")
}

pub fn classify_groups(groups: &[u16; GROUP_COUNT]) -> Ipv6AddressType {
    match *groups {
        [0, 0, 0, 0, 0, 0, 0, 0] => Ipv6AddressType::Unspecified,
        [0, 0, 0, 0, 0, 0, 0, 1] => Ipv6AddressType::Loopback,
        [first, ..] => match first {
            0xfe80..=0xfebf => Ipv6AddressType::LinkLocal,
            0xfc00..=0xfdff => Ipv6AddressType::UniqueLocal,
            0xff00..=0xffff => Ipv6AddressType::Multicast,
            0x2000..=0x3fff => Ipv6AddressType::GlobalUnicast,
            _ => Ipv6AddressType::Unknown,
        },
    }
}

fn join_hex(groups: &[u16]) -> String {
    groups
        .iter()
        .map(|group| format!("{group:x}"))
        .collect::<Vec<String>>()
        .join(":")
}

fn canonicalize(input: &str) -> Option<Canonical<'_>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    let (addr, suffix) = match trimmed.split_once('/') {
        Some((addr, suffix)) => (addr, Some(suffix)),
        None => (trimmed, None),
    };

    let prefix = match suffix {
        Some(suffix) => Some(parse_prefix(suffix)?),
        None => None,
    };

    if let Some(groups) = parse_ipv4_mapped(addr) {
        return Some(Canonical { groups, suffix, prefix, dotted: true });
    }

    let Some(groups) = parse_groups(addr) else {
        trace!(input = trimmed, "rejected malformed IPv6 address");
        return None;
    };

    Some(Canonical { groups, suffix, prefix, dotted: false })
}

/// Parses the text after `/`. A second `/` ends up in here and fails the integer parse.
fn parse_prefix(suffix: &str) -> Option<u8> {
    suffix
        .parse::<u32>()
        .ok()
        .filter(|prefix| *prefix <= u32::from(MAX_PREFIX))
        .map(|prefix| prefix as u8)
}

fn parse_groups(addr: &str) -> Option<[u16; GROUP_COUNT]> {
    if addr.matches("::").count() > 1 {
        return None;
    }

    let mut groups = [0u16; GROUP_COUNT];
    match addr.split_once("::") {
        Some((left, right)) => {
            let left = parse_segment(left)?;
            let right = parse_segment(right)?;
            if left.len() + right.len() > GROUP_COUNT {
                return None;
            }
            groups[..left.len()].copy_from_slice(&left);
            groups[GROUP_COUNT - right.len()..].copy_from_slice(&right);
        }
        None => {
            let all = parse_segment(addr)?;
            if all.len() != GROUP_COUNT {
                return None;
            }
            groups.copy_from_slice(&all);
        }
    }

    Some(groups)
}

/// Parses the colon-separated groups on one side of a `::`.
fn parse_segment(segment: &str) -> Option<Vec<u16>> {
    if segment.is_empty() {
        return Some(Vec::new());
    }
    segment.split(':').map(parse_group).collect()
}

fn parse_group(group: &str) -> Option<u16> {
    if group.is_empty()
        || group.len() > MAX_GROUP_DIGITS
        || !group.bytes().all(|b| b.is_ascii_hexdigit())
    {
        return None;
    }
    u16::from_str_radix(group, 16).ok()
}

fn parse_ipv4_mapped(addr: &str) -> Option<[u16; GROUP_COUNT]> {
    let head = addr.get(..MAPPED_PREFIX.len())?;
    if !head.eq_ignore_ascii_case(MAPPED_PREFIX) {
        return None;
    }

    let [a, b, c, d] = parse_dotted_quad(&addr[MAPPED_PREFIX.len()..])?;
    Some([
        0,
        0,
        0,
        0,
        0,
        0xffff,
        u16::from_be_bytes([a, b]),
        u16::from_be_bytes([c, d]),
    ])
}

fn parse_dotted_quad(s: &str) -> Option<[u8; 4]> {
    let mut octets = [0u8; 4];
    let mut parts = s.split('.');

    for octet in octets.iter_mut() {
        let part = parts.next()?;
        if part.is_empty() || part.len() > 3 || !part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        *octet = part.parse::<u8>().ok()?;
    }

    parts.next().is_none().then_some(octets)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
