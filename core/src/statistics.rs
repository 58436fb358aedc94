//! # Ping Statistics
//!
//! Summary over a finished run of parsed echo replies, in the spirit of the
//! trailer `ping` itself prints.

use serde::Serialize;

use crate::diagnostics::PingLineResult;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PingStatistics {
    pub packets_sent: usize,
    pub packets_received: usize,
    /// Percentage in `0.0..=100.0`.
    pub packet_loss: f64,
    pub min_rtt: Option<u64>,
    pub avg_rtt: Option<u64>,
    pub max_rtt: Option<u64>,
    /// Population standard deviation.
    pub std_dev_rtt: Option<f64>,
}

impl PingStatistics {
    /// Aggregates `results`.
    ///
    /// `sent` is the number of echo requests issued. When unknown, every parsed record
    /// counts as one request. It is never allowed to drop below the received count.
    pub fn from_results(results: &[PingLineResult], sent: Option<usize>) -> Self {
        let rtts: Vec<u64> = results
            .iter()
            .filter_map(|result| result.response_time_ms)
            .collect();

        let packets_received = rtts.len();
        let packets_sent = sent.unwrap_or(results.len()).max(packets_received);
        let packet_loss = if packets_sent == 0 {
            0.0
        } else {
            (packets_sent - packets_received) as f64 * 100.0 / packets_sent as f64
        };

        let (avg_rtt, std_dev_rtt) = match packets_received {
            0 => (None, None),
            n => {
                let sum: u128 = rtts.iter().map(|rtt| u128::from(*rtt)).sum();
                let mean = sum as f64 / n as f64;
                let variance = rtts
                    .iter()
                    .map(|rtt| (*rtt as f64 - mean).powi(2))
                    .sum::<f64>()
                    / n as f64;
                // Bounded by the largest sample.
                let avg = u64::try_from(sum / n as u128).unwrap_or(u64::MAX);
                (Some(avg), Some(variance.sqrt()))
            }
        };

        Self {
            packets_sent,
            packets_received,
            packet_loss,
            min_rtt: rtts.iter().min().copied(),
            avg_rtt,
            max_rtt: rtts.iter().max().copied(),
            std_dev_rtt,
        }
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

    fn reply(sequence: u32, rtt: Option<u64>) -> PingLineResult {
        PingLineResult {
            sequence,
            host: "2001:db8::1".to_string(),
            response_time_ms: rtt,
            ttl: None,
            success: rtt.is_some(),
        }
    }

    #[test]
    fn test_all_replies() {
        let results = [reply(0, Some(2)), reply(1, Some(4)), reply(2, Some(6))];
        let stats = PingStatistics::from_results(&results, None);

        assert_eq!(stats.packets_sent, 3);
        assert_eq!(stats.packets_received, 3);
        assert_eq!(stats.packet_loss, 0.0);
        assert_eq!(stats.min_rtt, Some(2));
        assert_eq!(stats.avg_rtt, Some(4));
        assert_eq!(stats.max_rtt, Some(6));

        let std_dev = stats.std_dev_rtt.unwrap();
        assert!((std_dev - (8.0f64 / 3.0).sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_loss_against_sent_count() {
        let results = [reply(0, Some(10)), reply(1, None)];
        let stats = PingStatistics::from_results(&results, Some(4));

        assert_eq!(stats.packets_sent, 4);
        assert_eq!(stats.packets_received, 1);
        assert_eq!(stats.packet_loss, 75.0);
        assert_eq!(stats.std_dev_rtt, Some(0.0));
    }

    #[test]
    fn test_sent_never_below_received() {
        let results = [reply(0, Some(1)), reply(1, Some(1))];
        let stats = PingStatistics::from_results(&results, Some(1));

        assert_eq!(stats.packets_sent, 2);
        assert_eq!(stats.packet_loss, 0.0);
    }

    #[test]
    fn test_extreme_rtts_do_not_overflow() {
        let results = [reply(0, Some(u64::MAX)), reply(1, Some(u64::MAX))];
        let stats = PingStatistics::from_results(&results, None);

        assert_eq!(stats.avg_rtt, Some(u64::MAX));
        assert_eq!(stats.max_rtt, Some(u64::MAX));
        assert_eq!(stats.std_dev_rtt, Some(0.0));
    }

    #[test]
    fn test_empty() {
        let stats = PingStatistics::from_results(&[], None);
        assert_eq!(stats.packets_sent, 0);
        assert_eq!(stats.packet_loss, 0.0);
        assert_eq!(stats.min_rtt, None);
        assert_eq!(stats.avg_rtt, None);

        let stats = PingStatistics::from_results(&[], Some(4));
        assert_eq!(stats.packet_loss, 100.0);
        assert_eq!(stats.std_dev_rtt, None);
    }
}
