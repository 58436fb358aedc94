use std::path::Path;

use serde_json::json;

use crate::commands::open_input;
use crate::terminal::{format, print};
use ipv6kit_common::config::Config;
use ipv6kit_common::{info, success, warn};
use ipv6kit_core::diagnostics::{Dialect, HopResult};
use ipv6kit_core::session::{self, TraceSession};

pub async fn trace(dialect: Dialect, input: Option<&Path>, cfg: &Config) -> anyhow::Result<()> {
    info!("Parsing {dialect} traceroute output");

    let reader = open_input(input).await?;
    let session: TraceSession =
        session::read_traceroute(reader, dialect, |hop| print_hop(hop, cfg)).await?;

    if session.hops().is_empty() {
        print::no_results(cfg);
        return Ok(());
    }

    let last: Option<&HopResult> = session.last_responding();
    if cfg.json {
        print::json(&json!({
            "hops": session.hops().len(),
            "last_responding": last.map(|hop| hop.hop_index),
        }));
        return Ok(());
    }

    match last {
        Some(hop) => success!(
            "{} hops, last answer from hop {} ({})",
            session.hops().len(),
            hop.hop_index,
            hop.label()
        ),
        None => warn!("{} hops, none answered", session.hops().len()),
    }
    Ok(())
}

fn print_hop(hop: &HopResult, cfg: &Config) {
    if cfg.json {
        print::json(hop);
    } else if cfg.quiet < 2 {
        print::print(&format::hop_line(hop));
    }
}
