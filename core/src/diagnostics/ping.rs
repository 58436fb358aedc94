//! Echo reply lines.
//!
//! ```text
//! unix:    64 bytes from 2001:db8::1: icmp_seq=1 ttl=64 time=1.23 ms
//! macos:   16 bytes from 2001:db8::1, icmp_seq=0 hlim=57 time=12.114 ms
//! windows: Reply from 2001:db8::1: time=1ms
//! ```

use std::sync::LazyLock;

use regex::Regex;

use super::{Dialect, PingLineResult};

const UNIX_MARKER: &str = "bytes from";
const WINDOWS_MARKER: &str = "Reply from";

static UNIX_TIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"time=([\d.]+)\s*ms").expect("static regex"));
static UNIX_TTL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:ttl|hlim)=(\d+)").expect("static regex"));
static UNIX_SEQ: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"icmp_seq=(\d+)").expect("static regex"));
static WINDOWS_TIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"time[=<](\d+)ms").expect("static regex"));

/// Parses one line of ping output.
///
/// Returns `None` for lines that are not replies (headers, summaries, timeouts).
/// `fallback_sequence` is used when the line carries no sequence number, which is
/// always the case for the Windows dialect.
pub fn parse_ping_line(
    line: &str,
    host: &str,
    fallback_sequence: u32,
    dialect: Dialect,
) -> Option<PingLineResult> {
    match dialect {
        Dialect::Unix => parse_unix(line, host, fallback_sequence),
        Dialect::Windows => parse_windows(line, host, fallback_sequence),
    }
}

fn parse_unix(line: &str, host: &str, fallback_sequence: u32) -> Option<PingLineResult> {
    if !line.contains(UNIX_MARKER) {
        return None;
    }

    // Fractions are cut off, not rounded.
    let response_time_ms = capture(&UNIX_TIME, line)
        .and_then(|time| time.parse::<f64>().ok())
        .filter(|time| time.is_finite() && *time >= 0.0)
        .map(|time| time as u64);
    let ttl = capture(&UNIX_TTL, line).and_then(|ttl| ttl.parse::<u32>().ok());
    let sequence = capture(&UNIX_SEQ, line)
        .and_then(|seq| seq.parse::<u32>().ok())
        .unwrap_or(fallback_sequence);

    Some(PingLineResult {
        sequence,
        host: host.to_string(),
        response_time_ms,
        ttl,
        success: response_time_ms.is_some(),
    })
}

fn parse_windows(line: &str, host: &str, sequence: u32) -> Option<PingLineResult> {
    if !line.contains(WINDOWS_MARKER) {
        return None;
    }

    let response_time_ms = capture(&WINDOWS_TIME, line).and_then(|time| time.parse::<u64>().ok());

    Some(PingLineResult {
        sequence,
        host: host.to_string(),
        response_time_ms,
        ttl: None,
        success: response_time_ms.is_some(),
    })
}

fn capture<'a>(regex: &Regex, line: &'a str) -> Option<&'a str> {
    regex
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
