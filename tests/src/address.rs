#![cfg(test)]
use crate::util::{is_v4_mapped, random_groups, std_addr};
use ipv6kit_common::network::address::{self, Ipv6AddressType};
use rand::Rng;
use std::net::Ipv6Addr;

const ROUNDS: usize = 2_000;

#[test]
fn compressed_form_matches_std_display() {
    let mut rng = rand::rng();

    for _ in 0..ROUNDS {
        let groups: [u16; 8] = random_groups(&mut rng);
        if is_v4_mapped(&groups) {
            continue;
        }
        assert_eq!(
            address::format_compressed(&groups),
            std_addr(&groups).to_string(),
            "groups {groups:04x?}"
        );
    }
}

#[test]
fn expand_and_compress_agree_with_std_parser() {
    let mut rng = rand::rng();

    for _ in 0..ROUNDS {
        let groups: [u16; 8] = random_groups(&mut rng);
        let expanded: String = address::format_expanded(&groups);
        let compressed: String = address::compress(&expanded);

        assert!(address::validate(&expanded));
        assert!(address::validate(&compressed));
        assert_eq!(address::expand(&compressed), expanded);
        assert_eq!(compressed.parse::<Ipv6Addr>().unwrap().segments(), groups);
    }
}

#[test]
fn conversions_are_idempotent() {
    let mut rng = rand::rng();

    for _ in 0..ROUNDS {
        let groups: [u16; 8] = random_groups(&mut rng);
        let text: String = std_addr(&groups).to_string();

        let compressed: String = address::compress(&text);
        let expanded: String = address::expand(&text);
        assert_eq!(address::compress(&compressed), compressed);
        assert_eq!(address::expand(&expanded), expanded);
        assert_eq!(address::groups(&text), Some(groups));
    }
}

#[test]
fn prefix_survives_conversions() {
    let mut rng = rand::rng();

    for _ in 0..ROUNDS {
        let groups: [u16; 8] = random_groups(&mut rng);
        let prefix: u8 = rng.random_range(0..=128);
        let input: String = format!("{}/{prefix}", address::format_expanded(&groups));

        let parsed = address::parse(&input);
        assert!(parsed.is_valid, "{input}");
        assert_eq!(parsed.prefix, Some(prefix));
        assert!(address::compress(&input).ends_with(&format!("/{prefix}")));
        assert!(address::expand(&input).ends_with(&format!("/{prefix}")));
    }
}

#[test]
fn classification_matches_std_predicates() {
    let mut rng = rand::rng();

    for _ in 0..ROUNDS {
        let groups: [u16; 8] = random_groups(&mut rng);
        let std: Ipv6Addr = std_addr(&groups);
        let kind: Ipv6AddressType = address::classify_groups(&groups);

        if std.is_unspecified() {
            assert_eq!(kind, Ipv6AddressType::Unspecified);
        } else if std.is_loopback() {
            assert_eq!(kind, Ipv6AddressType::Loopback);
        } else if std.is_multicast() {
            assert_eq!(kind, Ipv6AddressType::Multicast);
        } else if std.is_unique_local() {
            assert_eq!(kind, Ipv6AddressType::UniqueLocal);
        } else if std.is_unicast_link_local() {
            assert_eq!(kind, Ipv6AddressType::LinkLocal);
        }
    }
}

#[test]
fn malformed_input_is_passed_through() {
    for input in ["", "1::2::3", "12345::", "g::1", "1:2:3:4:5:6:7:8:9", "::1/129", "1::2:"] {
        let parsed = address::parse(input);
        assert!(!parsed.is_valid, "{input:?}");
        assert_eq!(parsed.expanded, input);
        assert_eq!(parsed.compressed, input);
        assert_eq!(parsed.address_type, Ipv6AddressType::Unknown);
        assert_eq!(address::classify(input), Ipv6AddressType::Unknown);
    }
}
