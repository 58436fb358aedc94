use std::path::Path;

use anyhow::Context;
use colored::*;
use rayon::prelude::*;

use crate::terminal::{colors, format, print};
use ipv6kit_common::config::Config;
use ipv6kit_common::network::address::{self, Ipv6Address, Ipv6AddressType};
use ipv6kit_common::{success, warn};

const SUMMARY_ORDER: [Ipv6AddressType; 7] = [
    Ipv6AddressType::GlobalUnicast,
    Ipv6AddressType::UniqueLocal,
    Ipv6AddressType::LinkLocal,
    Ipv6AddressType::Multicast,
    Ipv6AddressType::Loopback,
    Ipv6AddressType::Unspecified,
    Ipv6AddressType::Unknown,
];

pub fn batch(input: &Path, cfg: &Config) -> anyhow::Result<()> {
    let content: Vec<u8> =
        std::fs::read(input).with_context(|| format!("failed to read {}", input.display()))?;
    let content = String::from_utf8_lossy(&content);

    let lines: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();

    if lines.is_empty() {
        print::no_results(cfg);
        return Ok(());
    }

    let parsed: Vec<Ipv6Address> = lines.par_iter().map(|line| address::parse(line)).collect();

    for address in &parsed {
        print_row(address, cfg);
    }

    let invalid: usize = parsed.iter().filter(|address| !address.is_valid).count();
    if cfg.json || cfg.quiet > 1 {
        return Ok(());
    }

    print::fat_separator();
    for address_type in SUMMARY_ORDER {
        let count: usize = parsed
            .iter()
            .filter(|address| address.is_valid && address.address_type == address_type)
            .count();
        if count == 0 {
            continue;
        }
        let label: String = format!("{:<6}{count:>6}", address_type.abbreviation());
        print::centerln(&format!("{}", label.color(format::type_color(address_type))));
    }
    print::fat_separator();

    match invalid {
        0 => success!("{} addresses canonicalized", parsed.len()),
        n => warn!("{n} of {} lines are not valid IPv6 addresses", parsed.len()),
    }
    Ok(())
}

fn print_row(address: &Ipv6Address, cfg: &Config) {
    if cfg.json {
        print::json(address);
        return;
    }
    if cfg.quiet > 1 {
        print::print(&address.compressed);
        return;
    }

    let shown: ColoredString = if address.is_valid {
        address.compressed.color(colors::IPV6_ADDR)
    } else {
        address.raw.color(colors::INVALID)
    };
    let tag: ColoredString = format!("{:<6}", address.address_type.abbreviation())
        .color(format::type_color(address.address_type));
    print::print(&format!("{} {}", tag, shown));
}
