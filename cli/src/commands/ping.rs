use std::path::Path;

use colored::*;
use serde_json::json;

use crate::commands::open_input;
use crate::mprint;
use crate::terminal::print::GLOBAL_KEY_WIDTH;
use crate::terminal::{colors, format, print};
use ipv6kit_common::config::Config;
use ipv6kit_common::{info, warn};
use ipv6kit_core::diagnostics::{Dialect, PingLineResult};
use ipv6kit_core::session::{self, PingSession};
use ipv6kit_core::statistics::PingStatistics;

pub async fn ping(
    host: &str,
    dialect: Dialect,
    count: Option<usize>,
    input: Option<&Path>,
    cfg: &Config,
) -> anyhow::Result<()> {
    info!("Parsing {dialect} ping output for {host}");

    let reader = open_input(input).await?;
    let session: PingSession =
        session::read_ping(reader, host, dialect, |record| print_reply(record, cfg)).await?;

    let Some(stats) = summarize(&session, count) else {
        print::no_results(cfg);
        return Ok(());
    };

    if session.results().is_empty() {
        warn!("no replies from {host}");
    }
    if cfg.json {
        print::json(&json!({ "host": session.host(), "statistics": stats }));
    } else if cfg.quiet < 2 {
        print_statistics(&stats);
    }
    Ok(())
}

/// Statistics for the run, or `None` when there is nothing to report.
///
/// A transcript without replies still has a summary once the number of echo
/// requests is known: it is a total loss.
fn summarize(session: &PingSession, count: Option<usize>) -> Option<PingStatistics> {
    if session.results().is_empty() && count.is_none_or(|sent| sent == 0) {
        return None;
    }
    Some(session.statistics(count))
}

fn print_reply(record: &PingLineResult, cfg: &Config) {
    if cfg.json {
        print::json(record);
    } else if cfg.quiet < 2 {
        print::print(&format::reply_line(record));
    }
}

fn print_statistics(stats: &PingStatistics) {
    GLOBAL_KEY_WIDTH.set(8);
    mprint!();

    let ms = |value: Option<u64>| -> ColoredString {
        value
            .map(|ms| format!("{ms} ms").color(colors::RTT))
            .unwrap_or_else(|| "-".color(colors::TIMEOUT))
    };

    print::aligned_line("Sent", stats.packets_sent.to_string());
    print::aligned_line("Received", stats.packets_received.to_string());

    let loss: ColoredString = format!("{:.1}%", stats.packet_loss).color(if stats.packet_loss > 0.0 {
        colors::TIMEOUT
    } else {
        colors::RTT
    });
    print::aligned_line("Loss", loss);
    print::aligned_line("Min", ms(stats.min_rtt));
    print::aligned_line("Avg", ms(stats.avg_rtt));
    print::aligned_line("Max", ms(stats.max_rtt));

    let std_dev: ColoredString = stats
        .std_dev_rtt
        .map(|dev| format!("{dev:.2} ms").color(colors::RTT))
        .unwrap_or_else(|| "-".color(colors::TIMEOUT));
    print::aligned_line("Std dev", std_dev);
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
