//! CLI entry point for the mosaic pattern generator

use clap::Parser;
use mosaic::io::cli::{Cli, PatternRunner};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> mosaic::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "mosaic=debug"
    } else if cli.quiet {
        "mosaic=warn"
    } else {
        "mosaic=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    PatternRunner::new(cli).run()
}
