//! # Diagnostic Output Models
//!
//! Records produced from single lines of diagnostic command output, plus the
//! [`Dialect`] selector telling the parsers which output format to expect.

pub mod ping;
pub mod traceroute;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Output format family of the diagnostic commands.
///
/// The caller decides which one applies; nothing here inspects the running platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// `ping`/`ping6`/`traceroute`/`traceroute6` on Linux, macOS and the BSDs.
    Unix,
    /// `ping -6` and `tracert -6` on Windows.
    Windows,
}

impl FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "unix" | "linux" | "macos" | "bsd" => Ok(Dialect::Unix),
            "windows" | "win" => Ok(Dialect::Windows),
            _ => Err(format!("unknown dialect: {s} (expected 'unix' or 'windows')")),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dialect::Unix => f.write_str("unix"),
            Dialect::Windows => f.write_str("windows"),
        }
    }
}

/// One echo reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PingLineResult {
    pub sequence: u32,
    pub host: String,
    /// Round-trip time in whole milliseconds, truncated.
    pub response_time_ms: Option<u64>,
    /// Not reported by the Windows dialect.
    pub ttl: Option<u32>,
    /// `true` iff a response time was found.
    pub success: bool,
}

/// One traceroute hop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HopResult {
    pub hop_index: u32,
    pub host_name: Option<String>,
    pub ip: Option<String>,
    pub rtt1: Option<u64>,
    pub rtt2: Option<u64>,
    pub rtt3: Option<u64>,
    /// `true` iff no round-trip time was found.
    pub timed_out: bool,
}

impl HopResult {
    pub fn unanswered(hop_index: u32) -> Self {
        Self {
            hop_index,
            host_name: None,
            ip: None,
            rtt1: None,
            rtt2: None,
            rtt3: None,
            timed_out: true,
        }
    }

    pub fn rtts(&self) -> impl Iterator<Item = u64> {
        [self.rtt1, self.rtt2, self.rtt3].into_iter().flatten()
    }

    /// Name to show for the hop: host name, then IP, then `*`.
    pub fn label(&self) -> &str {
        self.host_name
            .as_deref()
            .or(self.ip.as_deref())
            .unwrap_or("*")
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialect_from_str() {
        assert_eq!(Dialect::from_str("unix"), Ok(Dialect::Unix));
        assert_eq!(Dialect::from_str("Linux"), Ok(Dialect::Unix));
        assert_eq!(Dialect::from_str("WINDOWS"), Ok(Dialect::Windows));
        assert!(Dialect::from_str("plan9").is_err());
    }

    #[test]
    fn test_hop_label_and_rtts() {
        let mut hop = HopResult::unanswered(3);
        assert_eq!(hop.label(), "*");
        assert_eq!(hop.rtts().count(), 0);

        hop.ip = Some("2001:db8::1".to_string());
        hop.rtt1 = Some(4);
        hop.rtt3 = Some(6);
        assert_eq!(hop.label(), "2001:db8::1");
        assert_eq!(hop.rtts().collect::<Vec<u64>>(), vec![4, 6]);

        hop.host_name = Some("core1".to_string());
        assert_eq!(hop.label(), "core1");
    }
}
