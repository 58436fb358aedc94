mod commands;
mod terminal;

use commands::{CommandLine, Commands, address, batch, ping, subnet, trace};
use ipv6kit_common::config::Config;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose, commands.quiet)?;

    let cfg = Config {
        quiet: commands.quiet,
        json: commands.json,
        no_banner: commands.no_banner,
    };

    print::banner(&cfg);

    let result: anyhow::Result<()> = match commands.command {
        Commands::Inspect { addresses } => {
            print::header("inspecting addresses", &cfg);
            address::inspect(&addresses, &cfg)
        }
        Commands::Expand { addresses } => {
            print::header("expanding addresses", &cfg);
            address::expand(&addresses, &cfg)
        }
        Commands::Compress { addresses } => {
            print::header("compressing addresses", &cfg);
            address::compress(&addresses, &cfg)
        }
        Commands::Subnet { cidr, check } => {
            print::header("subnet calculator", &cfg);
            subnet::subnet(&cidr, check.as_deref(), &cfg)
        }
        Commands::Ping { host, dialect, count, input } => {
            print::header("ping replies", &cfg);
            ping::ping(&host, dialect, count, input.as_deref(), &cfg).await
        }
        Commands::Trace { dialect, input } => {
            print::header("traceroute hops", &cfg);
            trace::trace(dialect, input.as_deref(), &cfg).await
        }
        Commands::Batch { input } => {
            print::header("batch canonicalization", &cfg);
            batch::batch(&input, &cfg)
        }
    };

    print::end_of_program(&cfg);
    result
}
