//! # Diagnostic Sessions
//!
//! The line parsers are stateless. A session owns the state of one run instead:
//! the running ping sequence counter and the records collected so far.
//!
//! [`read_ping`] and [`read_traceroute`] drive a session from any async line source,
//! e.g. a child process pipe, a file, or an in-memory buffer.

use anyhow::Context;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, trace};

use crate::diagnostics::{
    Dialect, HopResult, PingLineResult, ping::parse_ping_line,
    traceroute::parse_traceroute_line,
};
use crate::statistics::PingStatistics;

#[derive(Debug, Clone)]
pub struct PingSession {
    host: String,
    dialect: Dialect,
    next_sequence: u32,
    results: Vec<PingLineResult>,
}

impl PingSession {
    pub fn new(host: impl Into<String>, dialect: Dialect) -> Self {
        Self {
            host: host.into(),
            dialect,
            next_sequence: 0,
            results: Vec::new(),
        }
    }

    /// Parses `line` and keeps the record, if any.
    ///
    /// The fallback sequence only advances when a record is produced.
    pub fn feed(&mut self, line: &str) -> Option<&PingLineResult> {
        let result = parse_ping_line(line, &self.host, self.next_sequence, self.dialect)?;
        self.next_sequence = self.next_sequence.saturating_add(1);
        self.results.push(result);
        self.results.last()
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn results(&self) -> &[PingLineResult] {
        &self.results
    }

    pub fn statistics(&self, sent: Option<usize>) -> PingStatistics {
        PingStatistics::from_results(&self.results, sent)
    }
}

#[derive(Debug, Clone)]
pub struct TraceSession {
    dialect: Dialect,
    hops: Vec<HopResult>,
}

impl TraceSession {
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            hops: Vec::new(),
        }
    }

    pub fn feed(&mut self, line: &str) -> Option<&HopResult> {
        let hop = parse_traceroute_line(line, self.dialect)?;
        self.hops.push(hop);
        self.hops.last()
    }

    pub fn hops(&self) -> &[HopResult] {
        &self.hops
    }

    /// Last hop that answered at least one probe.
    pub fn last_responding(&self) -> Option<&HopResult> {
        self.hops.iter().rev().find(|hop| !hop.timed_out)
    }
}

/// Feeds every line of `reader` through a new [`PingSession`].
///
/// `on_record` sees each record as soon as its line has been read.
pub async fn read_ping<R, F>(
    reader: R,
    host: &str,
    dialect: Dialect,
    mut on_record: F,
) -> anyhow::Result<PingSession>
where
    R: AsyncBufRead + Unpin,
    F: FnMut(&PingLineResult),
{
    let mut session = PingSession::new(host, dialect);
    let mut lines = LossyLines::new(reader);

    while let Some(line) = lines.next_line().await.context("reading ping output")? {
        match session.feed(&line) {
            Some(record) => on_record(record),
            None => trace!(line = %line, "no echo reply in line"),
        }
    }

    debug!(host, replies = session.results().len(), "ping output exhausted");
    Ok(session)
}

/// Feeds every line of `reader` through a new [`TraceSession`].
pub async fn read_traceroute<R, F>(
    reader: R,
    dialect: Dialect,
    mut on_record: F,
) -> anyhow::Result<TraceSession>
where
    R: AsyncBufRead + Unpin,
    F: FnMut(&HopResult),
{
    let mut session = TraceSession::new(dialect);
    let mut lines = LossyLines::new(reader);

    while let Some(line) = lines.next_line().await.context("reading traceroute output")? {
        match session.feed(&line) {
            Some(hop) => on_record(hop),
            None => trace!(line = %line, "no hop in line"),
        }
    }

    debug!(hops = session.hops().len(), "traceroute output exhausted");
    Ok(session)
}

/// Line reader that replaces invalid UTF-8 instead of failing.
///
/// Windows consoles print in the active code page, not UTF-8.
struct LossyLines<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: AsyncBufRead + Unpin> LossyLines<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
        }
    }

    async fn next_line(&mut self) -> std::io::Result<Option<String>> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf).await? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&self.buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
