pub mod address;
pub mod batch;
pub mod ping;
pub mod subnet;
pub mod trace;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use ipv6kit_core::diagnostics::Dialect;
use tokio::fs::File;
use tokio::io::{AsyncBufRead, BufReader};

#[derive(Parser)]
#[command(name = "ipv6kit")]
#[command(about = "IPv6 address, subnet and diagnostic output toolkit.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Less output; -q drops headers, -qq prints bare results
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// More log output; repeat for more detail
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Print results as JSON lines
    #[arg(long, global = true)]
    pub json: bool,

    #[arg(long, global = true)]
    pub no_banner: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show every representation of one or more addresses
    #[command(alias = "i")]
    Inspect {
        #[arg(required = true)]
        addresses: Vec<String>,
    },
    /// Print addresses in full eight-group form
    #[command(alias = "e")]
    Expand {
        #[arg(required = true)]
        addresses: Vec<String>,
    },
    /// Print addresses in shortest form
    #[command(alias = "c")]
    Compress {
        #[arg(required = true)]
        addresses: Vec<String>,
    },
    /// Calculate the boundaries of a CIDR block
    #[command(alias = "s")]
    Subnet {
        cidr: String,
        /// Also report whether this address lies inside the block
        #[arg(long)]
        check: Option<String>,
    },
    /// Parse ping output from a file or stdin
    #[command(alias = "p")]
    Ping {
        /// Host the transcript was recorded against
        #[arg(long)]
        host: String,
        #[arg(long, default_value_t = default_dialect())]
        dialect: Dialect,
        /// Number of echo requests sent, for loss calculation
        #[arg(short, long)]
        count: Option<usize>,
        input: Option<PathBuf>,
    },
    /// Parse traceroute/tracert output from a file or stdin
    #[command(alias = "t")]
    Trace {
        #[arg(long, default_value_t = default_dialect())]
        dialect: Dialect,
        input: Option<PathBuf>,
    },
    /// Canonicalize a file with one address per line
    #[command(alias = "b")]
    Batch { input: PathBuf },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

fn default_dialect() -> Dialect {
    if cfg!(windows) {
        Dialect::Windows
    } else {
        Dialect::Unix
    }
}

/// Opens `path` for line reading, or stdin when no path is given.
pub async fn open_input(path: Option<&Path>) -> anyhow::Result<Box<dyn AsyncBufRead + Unpin + Send>> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .await
                .with_context(|| format!("failed to open {}", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(BufReader::new(tokio::io::stdin()))),
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
