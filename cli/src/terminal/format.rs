use crate::terminal::colors;
use colored::*;
use ipv6kit_common::network::address::{Ipv6Address, Ipv6AddressType};
use ipv6kit_common::network::subnet::Ipv6Subnet;
use ipv6kit_core::diagnostics::{HopResult, PingLineResult};

pub type Detail = (String, ColoredString);

pub fn type_color(address_type: Ipv6AddressType) -> Color {
    match address_type {
        Ipv6AddressType::GlobalUnicast => Color::Green,
        Ipv6AddressType::UniqueLocal => Color::Cyan,
        Ipv6AddressType::LinkLocal => Color::Blue,
        Ipv6AddressType::Multicast => Color::Magenta,
        Ipv6AddressType::Loopback | Ipv6AddressType::Unspecified => Color::BrightBlack,
        Ipv6AddressType::Unknown => Color::Yellow,
    }
}

pub fn address_to_details(address: &Ipv6Address) -> Vec<Detail> {
    if !address.is_valid {
        return vec![(
            "Valid".to_string(),
            "no".color(colors::INVALID).bold(),
        )];
    }

    let mut details: Vec<Detail> = vec![
        (
            "Expanded".to_string(),
            address.expanded.color(colors::IPV6_ADDR),
        ),
        (
            "Short".to_string(),
            address.compressed.color(colors::IPV6_ADDR),
        ),
        (
            "Type".to_string(),
            format!(
                "{} ({})",
                address.address_type,
                address.address_type.abbreviation()
            )
            .color(type_color(address.address_type)),
        ),
    ];

    if let Some(prefix) = address.prefix {
        details.push((
            "Prefix".to_string(),
            format!("/{prefix}").color(colors::IPV6_PREFIX),
        ));
    }

    details
}

pub fn subnet_to_details(subnet: &Ipv6Subnet) -> Vec<Detail> {
    let prefix: ColoredString = subnet.prefix_length.to_string().color(colors::IPV6_PREFIX);
    vec![
        (
            "Network".to_string(),
            subnet.network_address.color(colors::IPV6_ADDR),
        ),
        ("Prefix".to_string(), format!("/{prefix}").normal()),
        (
            "First".to_string(),
            subnet.first_address.color(colors::IPV6_ADDR),
        ),
        (
            "Last".to_string(),
            subnet.last_address.color(colors::IPV6_ADDR),
        ),
        (
            "Addresses".to_string(),
            subnet.approximate_total().color(colors::ACCENT),
        ),
    ]
}

pub fn reply_line(record: &PingLineResult) -> String {
    let seq: ColoredString = format!("#{}", record.sequence).color(colors::ACCENT);
    let time: ColoredString = match record.response_time_ms {
        Some(ms) => format!("{ms} ms").color(colors::RTT),
        None => "no time".color(colors::TIMEOUT),
    };
    let ttl: String = record
        .ttl
        .map(|ttl| format!(" ttl={ttl}"))
        .unwrap_or_default();

    format!(
        "{} {} {}{}",
        seq,
        record.host.color(colors::IPV6_ADDR),
        time,
        ttl.color(colors::SEPARATOR)
    )
}

pub fn hop_line(hop: &HopResult) -> String {
    let index: ColoredString = format!("{:>2}", hop.hop_index).color(colors::ACCENT);
    if hop.timed_out {
        return format!("{} {}", index, "* * *".color(colors::TIMEOUT));
    }

    let rtts: String = hop
        .rtts()
        .map(|rtt| format!("{rtt} ms"))
        .collect::<Vec<String>>()
        .join("  ");

    let ip: String = match (&hop.host_name, &hop.ip) {
        (Some(name), Some(ip)) if name != ip => format!(" ({ip})"),
        _ => String::new(),
    };

    format!(
        "{} {}{}  {}",
        index,
        hop.label().color(colors::PRIMARY),
        ip.color(colors::IPV6_ADDR),
        rtts.color(colors::RTT)
    )
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
