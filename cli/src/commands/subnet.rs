use anyhow::Context;
use colored::*;
use serde_json::json;

use crate::terminal::{colors, format, print};
use ipv6kit_common::config::Config;
use ipv6kit_common::network::subnet::{self, Ipv6Subnet};
use ipv6kit_common::{success, warn};

pub fn subnet(cidr: &str, check: Option<&str>, cfg: &Config) -> anyhow::Result<()> {
    let subnet: Ipv6Subnet =
        subnet::calculate(cidr).with_context(|| format!("cannot calculate subnet for '{cidr}'"))?;
    let contains: Option<bool> = check.map(|address| subnet.contains(address));

    if cfg.json {
        print::json(&json!({ "subnet": subnet, "check": check, "contains": contains }));
        return Ok(());
    }

    if cfg.quiet > 1 {
        print::print(&subnet.cidr);
    } else {
        print::tree_head(0, &subnet.cidr);
        let mut details: Vec<format::Detail> = format::subnet_to_details(&subnet);
        if subnet.total_addresses != subnet.approximate_total() {
            details.push((
                "Exact".to_string(),
                subnet.total_addresses.color(colors::TEXT_DEFAULT),
            ));
        }
        print::as_tree_one_level(details);
    }

    match (check, contains) {
        (Some(address), Some(true)) => success!("{address} is inside {}", subnet.cidr),
        (Some(address), Some(false)) => warn!("{address} is outside {}", subnet.cidr),
        _ => {}
    }

    Ok(())
}
