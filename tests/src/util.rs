use rand::Rng;
use std::net::Ipv6Addr;

/// Random groups with a zero run of random position and length, so that
/// compression has something to do most of the time.
pub fn random_groups<R: Rng>(rng: &mut R) -> [u16; 8] {
    let mut groups: [u16; 8] = rng.random();
    let start: usize = rng.random_range(0..8);
    let len: usize = rng.random_range(0..=8 - start);
    groups[start..start + len].fill(0);
    groups
}

/// The `::ffff:a.b.c.d` range, which std prints in dotted form.
pub fn is_v4_mapped(groups: &[u16; 8]) -> bool {
    groups[..5] == [0; 5] && groups[5] == 0xffff
}

pub fn std_addr(groups: &[u16; 8]) -> Ipv6Addr {
    Ipv6Addr::from(*groups)
}
