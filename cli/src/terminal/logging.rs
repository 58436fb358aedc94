use colored::*;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::registry::LookupSpan;

use crate::terminal::print::PRINT_TARGET;

const SUCCESS_TARGET: &str = "ipv6kit::success";

pub struct Ipv6KitFormatter;

impl<S, N> FormatEvent<S, N> for Ipv6KitFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        if meta.target() == PRINT_TARGET {
            ctx.field_format().format_fields(writer.by_ref(), event)?;
            return writeln!(writer);
        }

        let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) = match *meta.level() {
            Level::TRACE => ("[ ]", |s| s.dimmed()),
            Level::DEBUG => ("[?]", |s| s.blue()),
            Level::INFO if meta.target() == SUCCESS_TARGET => ("[+]", |s| s.green().bold()),
            Level::INFO => ("[*]", |s| s.cyan()),
            Level::WARN => ("[!]", |s| s.yellow().bold()),
            Level::ERROR => ("[-]", |s| s.red().bold()),
        };

        write!(writer, "{} ", color_func(symbol.into()))?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Installs the global subscriber.
///
/// Results go to stdout, everything else to stderr. `RUST_LOG` overrides the
/// verbosity flags but never hides results.
pub fn init_logging(verbose: u8, quiet: u8) -> anyhow::Result<()> {
    let default_directives: &str = match (verbose, quiet) {
        (0, 0) => "warn,ipv6kit::info=info,ipv6kit::success=info",
        (0, _) => "warn",
        (1, _) => "info",
        (2, _) => "debug",
        _ => "trace",
    };

    let filter: EnvFilter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives))
        .add_directive(format!("{PRINT_TARGET}=info").parse()?);

    let writer = std::io::stdout
        .with_filter(|meta| meta.target() == PRINT_TARGET)
        .or_else(std::io::stderr);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .event_format(Ipv6KitFormatter)
        .with_writer(writer)
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))
}
