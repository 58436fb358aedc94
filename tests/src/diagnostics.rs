#![cfg(test)]
use ipv6kit_core::diagnostics::{Dialect, HopResult, PingLineResult};
use ipv6kit_core::session::{read_ping, read_traceroute};

const LINUX_PING: &str = "\
PING 2001:db8::1(2001:db8::1) 56 data bytes
64 bytes from 2001:db8::1: icmp_seq=1 ttl=58 time=10.4 ms
64 bytes from 2001:db8::1: icmp_seq=2 ttl=58 time=12.9 ms
From 2001:db8::ff icmp_seq=3 Destination unreachable: No route
64 bytes from 2001:db8::1: icmp_seq=4 ttl=58 time=11.0 ms

--- 2001:db8::1 ping statistics ---
4 packets transmitted, 3 received, 25% packet loss, time 3004ms
rtt min/avg/max/mdev = 10.4/11.4/12.9/1.07 ms
";

const MACOS_PING: &str = "\
PING6(56=40+8+8 bytes) 2001:db8::100 --> 2001:db8::1
16 bytes from 2001:db8::1, icmp_seq=0 hlim=57 time=20.114 ms
16 bytes from 2001:db8::1, icmp_seq=1 hlim=57 time=22.871 ms
";

const WINDOWS_PING: &str = "\r
Pinging 2001:db8::1 with 32 bytes of data:\r
Reply from 2001:db8::1: time=14ms \r
Request timed out.\r
Reply from 2001:db8::1: time=16ms \r
Reply from 2001:db8::1: time<1ms \r
\r
Ping statistics for 2001:db8::1:\r
    Packets: Sent = 4, Received = 3, Lost = 1 (25% loss),\r
";

const LINUX_TRACEROUTE: &str = "\
traceroute to 2001:db8::1 (2001:db8::1), 30 hops max, 80 byte packets
 1  gateway (fe80::1)  0.512 ms  0.498 ms  0.470 ms
 2  2001:db8:ff::1  5.921 ms  6.003 ms  5.877 ms
 3  * * *
 4  edge.example.net (2001:db8:1::9)  12.330 ms * 12.101 ms
 5  2001:db8::1  14.2 ms  14.0 ms  13.9 ms
";

const WINDOWS_TRACERT: &str = "\r
Tracing route to example.net [2001:db8::1]\r
over a maximum of 30 hops:\r
\r
  1    <1 ms    <1 ms    <1 ms  fe80::1\r
  2     6 ms     5 ms     6 ms  core.example.net [2001:db8:ff::1]\r
  3     *        *        *     Request timed out.\r
  4    14 ms    13 ms    14 ms  2001:db8::1\r
\r
Trace complete.\r
";

#[tokio::test]
async fn linux_ping_transcript() {
    let mut streamed: Vec<PingLineResult> = Vec::new();
    let session = read_ping(LINUX_PING.as_bytes(), "2001:db8::1", Dialect::Unix, |record| {
        streamed.push(record.clone())
    })
    .await
    .unwrap();

    assert_eq!(streamed.as_slice(), session.results());
    let sequences: Vec<u32> = streamed.iter().map(|record| record.sequence).collect();
    assert_eq!(sequences, vec![1, 2, 4]);
    assert!(streamed.iter().all(|record| record.ttl == Some(58)));

    let stats = session.statistics(Some(4));
    assert_eq!(stats.packets_sent, 4);
    assert_eq!(stats.packets_received, 3);
    assert_eq!(stats.packet_loss, 25.0);
    assert_eq!(stats.min_rtt, Some(10));
    assert_eq!(stats.avg_rtt, Some(11));
    assert_eq!(stats.max_rtt, Some(12));
}

#[tokio::test]
async fn macos_ping_transcript_reads_hop_limit() {
    let session = read_ping(MACOS_PING.as_bytes(), "2001:db8::1", Dialect::Unix, |_| {})
        .await
        .unwrap();

    let results = session.results();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].sequence, 0);
    assert_eq!(results[0].ttl, Some(57));
    assert_eq!(results[1].response_time_ms, Some(22));
    assert_eq!(session.statistics(None).packet_loss, 0.0);
}

#[tokio::test]
async fn windows_ping_transcript() {
    let session = read_ping(WINDOWS_PING.as_bytes(), "2001:db8::1", Dialect::Windows, |_| {})
        .await
        .unwrap();

    let times: Vec<Option<u64>> = session
        .results()
        .iter()
        .map(|record| record.response_time_ms)
        .collect();
    assert_eq!(times, vec![Some(14), Some(16), Some(1)]);

    let sequences: Vec<u32> = session.results().iter().map(|record| record.sequence).collect();
    assert_eq!(sequences, vec![0, 1, 2]);

    let stats = session.statistics(Some(4));
    assert_eq!(stats.packet_loss, 25.0);
    assert_eq!(stats.min_rtt, Some(1));
    assert_eq!(stats.max_rtt, Some(16));
}

#[tokio::test]
async fn linux_traceroute_transcript() {
    let session = read_traceroute(LINUX_TRACEROUTE.as_bytes(), Dialect::Unix, |_| {})
        .await
        .unwrap();
    let hops: &[HopResult] = session.hops();

    let indices: Vec<u32> = hops.iter().map(|hop| hop.hop_index).collect();
    assert_eq!(indices, vec![1, 2, 3, 4, 5]);

    assert_eq!(hops[0].host_name.as_deref(), Some("gateway"));
    assert_eq!(hops[0].ip.as_deref(), Some("fe80::1"));
    assert_eq!((hops[0].rtt1, hops[0].rtt2, hops[0].rtt3), (Some(0), Some(0), Some(0)));

    assert_eq!(hops[1].ip.as_deref(), Some("2001:db8:ff::1"));
    assert_eq!(hops[1].rtt1, Some(5));

    assert!(hops[2].timed_out);
    assert_eq!(hops[2].label(), "*");

    assert_eq!(hops[3].ip.as_deref(), Some("2001:db8:1::9"));
    assert_eq!(hops[3].rtts().collect::<Vec<u64>>(), vec![12, 12]);
    assert!(!hops[3].timed_out);

    assert_eq!(session.last_responding().map(|hop| hop.hop_index), Some(5));
}

#[tokio::test]
async fn windows_tracert_transcript() {
    let mut streamed: usize = 0;
    let session = read_traceroute(WINDOWS_TRACERT.as_bytes(), Dialect::Windows, |_| streamed += 1)
        .await
        .unwrap();
    let hops: &[HopResult] = session.hops();

    assert_eq!(streamed, 4);
    assert_eq!(hops[0].ip.as_deref(), Some("fe80::1"));
    assert_eq!(hops[0].rtt1, Some(1));
    assert_eq!(hops[1].ip.as_deref(), Some("2001:db8:ff::1"));
    assert_eq!(hops[1].rtts().collect::<Vec<u64>>(), vec![6, 5, 6]);
    assert!(hops[2].timed_out);
    assert_eq!(hops[2].ip, None);
    assert_eq!(hops[3].ip.as_deref(), Some("2001:db8::1"));
    assert_eq!(session.last_responding().map(|hop| hop.hop_index), Some(4));
}
