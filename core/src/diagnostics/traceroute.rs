//! Hop lines.
//!
//! ```text
//! unix:     1  gateway (fe80::1)  1.234 ms  1.567 ms  1.890 ms
//! unix -n:  2  2001:db8::1  0.412 ms  0.388 ms  0.377 ms
//! windows:  1    <1 ms    <1 ms    <1 ms  2001:db8::1
//! windows:  2     4 ms     3 ms     4 ms  core1 [2001:db8:1::1]
//! any:      5  * * *
//! ```

use super::{Dialect, HopResult};

const RTT_UNIT: &str = "ms";
const PROBES_PER_HOP: usize = 3;

/// Parses one line of traceroute output.
///
/// Returns `None` unless the line starts with a positive hop number.
pub fn parse_traceroute_line(line: &str, dialect: Dialect) -> Option<HopResult> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let hop_index = tokens
        .first()?
        .parse::<u32>()
        .ok()
        .filter(|hop| *hop > 0)?;

    let fields = &tokens[1..];
    if fields.is_empty() {
        return Some(HopResult::unanswered(hop_index));
    }

    let (rtt_positions, rtts) = collect_rtts(fields, dialect);
    let host_name = match dialect {
        Dialect::Unix => fields
            .iter()
            .enumerate()
            .find(|(idx, token)| !rtt_positions.contains(idx) && is_host_name(token))
            .map(|(_, token)| token.to_string()),
        Dialect::Windows => None,
    };

    Some(HopResult {
        hop_index,
        host_name,
        ip: find_ip(fields),
        rtt1: rtts.first().copied(),
        rtt2: rtts.get(1).copied(),
        rtt3: rtts.get(2).copied(),
        timed_out: rtts.is_empty(),
    })
}

/// Finds round-trip values, returning their token positions and parsed values.
///
/// A value is either glued to its unit (`1.2ms`) or followed by a separate `ms` token.
/// Windows prints sub-millisecond probes as `<1`.
fn collect_rtts(fields: &[&str], dialect: Dialect) -> (Vec<usize>, Vec<u64>) {
    let mut positions = Vec::new();
    let mut values = Vec::new();

    for (idx, &token) in fields.iter().enumerate() {
        if token == RTT_UNIT {
            continue;
        }

        let followed_by_unit = fields.get(idx + 1) == Some(&RTT_UNIT);
        let text = match token.strip_suffix(RTT_UNIT) {
            Some(value) => value,
            None if followed_by_unit => token,
            None if dialect == Dialect::Windows && token.starts_with('<') => token,
            None => continue,
        };

        if let Some(value) = parse_rtt(text, dialect) {
            positions.push(idx);
            if values.len() < PROBES_PER_HOP {
                values.push(value);
            }
        }
    }

    (positions, values)
}

fn parse_rtt(text: &str, dialect: Dialect) -> Option<u64> {
    let text = match dialect {
        Dialect::Windows => text.strip_prefix('<').unwrap_or(text),
        Dialect::Unix => text,
    };
    text.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
        .map(|value| value as u64)
}

/// Skips probe markers, units, `(addr)` and `!H`-style annotations.
fn is_host_name(token: &str) -> bool {
    token != "*" && token != RTT_UNIT && !token.starts_with(['(', '!'])
}

/// `(addr)` first, then `[addr]`, then the last token containing a colon.
fn find_ip(fields: &[&str]) -> Option<String> {
    let wrapped = |open: char, close: char| {
        fields.iter().find_map(|token| {
            token
                .strip_prefix(open)
                .and_then(|inner| inner.strip_suffix(close))
                .filter(|inner| !inner.is_empty())
        })
    };

    wrapped('(', ')')
        .or_else(|| wrapped('[', ']'))
        .or_else(|| fields.iter().rev().find(|token| token.contains(':')).copied())
        .map(str::to_string)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
