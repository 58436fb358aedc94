use colored::*;
use serde_json::json;

use crate::mprint;
use crate::terminal::{colors, format, print};
use ipv6kit_common::config::Config;
use ipv6kit_common::network::address::{self, Ipv6Address};
use ipv6kit_common::{success, warn};

pub fn inspect(addresses: &[String], cfg: &Config) -> anyhow::Result<()> {
    let parsed: Vec<Ipv6Address> = addresses.iter().map(|raw| address::parse(raw)).collect();

    for (idx, address) in parsed.iter().enumerate() {
        match (cfg.json, cfg.quiet) {
            (true, _) => print::json(address),
            (false, 2..) => print::print(&address.compressed),
            (false, _) => {
                print::tree_head(idx, &address.raw);
                print::as_tree_one_level(format::address_to_details(address));
                if idx + 1 != parsed.len() {
                    mprint!();
                }
            }
        }
    }

    report_invalid(&parsed);
    Ok(())
}

pub fn expand(addresses: &[String], cfg: &Config) -> anyhow::Result<()> {
    convert(addresses, cfg, "expanded", address::expand)
}

pub fn compress(addresses: &[String], cfg: &Config) -> anyhow::Result<()> {
    convert(addresses, cfg, "compressed", address::compress)
}

fn convert(
    addresses: &[String],
    cfg: &Config,
    key: &str,
    transform: fn(&str) -> String,
) -> anyhow::Result<()> {
    let mut invalid: usize = 0;

    for raw in addresses {
        let valid: bool = address::validate(raw);
        let output: String = transform(raw);
        if !valid {
            invalid += 1;
        }

        if cfg.json {
            print::json(&json!({ "input": raw, key: output, "is_valid": valid }));
        } else if valid {
            print::print(&format!("{}", output.color(colors::IPV6_ADDR)));
        } else {
            print::print(&format!("{}", output.color(colors::INVALID)));
            warn!("'{raw}' is not a valid IPv6 address");
        }
    }

    if invalid == 0 && cfg.quiet == 0 && !cfg.json {
        success!("{} address(es) {key}", addresses.len());
    }
    Ok(())
}

fn report_invalid(parsed: &[Ipv6Address]) {
    let invalid: usize = parsed.iter().filter(|address| !address.is_valid).count();
    if invalid > 0 {
        warn!("{invalid} of {} inputs are not valid IPv6 addresses", parsed.len());
    }
}
