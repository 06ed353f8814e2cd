mod batch_cmd;
mod cli;
mod inspect_cmd;

use clap::Parser;
use cli::Cli;
use tracing_subscriber::{EnvFilter, fmt};

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    let result = match cli.command {
        cli::Commands::Batch {
            ref folder,
            ref output,
            format,
            ref extraction,
        } => batch_cmd::run(folder.as_deref(), output, format, extraction),
        cli::Commands::Inspect {
            ref file,
            format,
            ref extraction,
        } => inspect_cmd::run(file, format, extraction),
    };

    if let Err(code) = result {
        std::process::exit(code);
    }
}

/// Log to stderr. `--verbose`/`--quiet` override `RUST_LOG`; the default is `info`.
fn init_logging(cli: &Cli) {
    let filter = match log_level(cli) {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn log_level(cli: &Cli) -> Option<&'static str> {
    if cli.verbose {
        Some("debug")
    } else if cli.quiet {
        Some("warn")
    } else {
        None
    }
}
