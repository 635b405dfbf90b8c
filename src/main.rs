use anyhow::Result;
use clap::Parser;
use fibo::cli::Cli;
use fibo::commands::{handle_series, SeriesConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    handle_series(SeriesConfig {
        bound: cli.bound,
        format: cli.format,
        output: cli.output,
        stream: cli.stream,
        verbosity: cli.verbosity,
    })
}

fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_level),
    )
    .init();
}
