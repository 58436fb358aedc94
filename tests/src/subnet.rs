#![cfg(test)]
use crate::util::{random_groups, std_addr};
use ipv6kit_common::error::SubnetError;
use ipv6kit_common::network::address;
use ipv6kit_common::network::subnet::{self, Ipv6Subnet};
use pnet::ipnetwork::Ipv6Network;
use rand::Rng;

#[test]
fn boundaries_match_ipnetwork() {
    let mut rng = rand::rng();

    for _ in 0..2_000 {
        let groups: [u16; 8] = random_groups(&mut rng);
        let prefix: u8 = rng.random_range(0..=128);
        let cidr: String = format!("{}/{prefix}", address::format_expanded(&groups));

        let ours: Ipv6Subnet = subnet::calculate(&cidr).unwrap();
        let reference: Ipv6Network = Ipv6Network::new(std_addr(&groups), prefix).unwrap();

        assert_eq!(
            address::groups(&ours.first_address),
            Some(reference.network().segments()),
            "{cidr}"
        );
        assert_eq!(
            address::groups(&ours.last_address),
            Some(reference.broadcast().segments()),
            "{cidr}"
        );
        assert_eq!(ours.prefix_length, prefix);
        assert!(ours.contains(&cidr));
    }
}

#[test]
fn total_addresses_is_exact() {
    for prefix in 1..=128u32 {
        let cidr: String = format!("2001:db8::/{prefix}");
        let expected: u128 = 1u128 << (128 - prefix);
        assert_eq!(
            subnet::calculate(&cidr).unwrap().total_addresses,
            expected.to_string()
        );
    }

    assert_eq!(
        subnet::calculate("::/0").unwrap().total_addresses,
        "340282366920938463463374607431768211456"
    );
}

#[test]
fn random_members_are_contained() {
    let mut rng = rand::rng();
    let block: Ipv6Subnet = subnet::calculate("2001:db8:1200::/40").unwrap();

    for _ in 0..500 {
        let mut groups: [u16; 8] = rng.random();
        groups[0] = 0x2001;
        groups[1] = 0x0db8;
        groups[2] = 0x1200 | (groups[2] & 0x00ff);
        assert!(block.contains(&address::format_compressed(&groups)));

        groups[2] ^= 0x0100;
        assert!(!block.contains(&address::format_compressed(&groups)));
    }
}

#[test]
fn errors_name_the_offending_part() {
    assert_eq!(
        subnet::calculate("2001:db8::"),
        Err(SubnetError::InvalidFormat("2001:db8::".to_string()))
    );
    assert_eq!(
        subnet::calculate("2001:db8::/abc"),
        Err(SubnetError::InvalidPrefix("abc".to_string()))
    );
    assert_eq!(
        subnet::calculate("2001:db8::/129"),
        Err(SubnetError::InvalidPrefix("129".to_string()))
    );
    assert_eq!(
        subnet::calculate("2001:zz8::/64"),
        Err(SubnetError::InvalidAddress("2001:zz8::".to_string()))
    );
    assert!("2001:db8::/64".parse::<Ipv6Subnet>().is_ok());
}
