use std::process::ExitCode;

use clap::{Parser, Subcommand};

mod decode;
mod encode;
mod error;
mod output;
mod utils;

use error::Result;

#[derive(Parser)]
#[command(name = "codeunit")]
#[command(about = "Convert text to and from UTF-16 code units", long_about = None)]
struct Cli {
    /// Enable debug logging (otherwise controlled by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode text into code units
    Encode {
        #[command(flatten)]
        config: encode::Config,
    },
    /// Decode code units into text
    Decode {
        #[command(flatten)]
        config: decode::Config,
    },
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = if verbose {
        EnvFilter::new("debug")
    } else if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        return;
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true),
        )
        .with(filter)
        .init();
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Encode { config } => encode::execute(config)?,
        Commands::Decode { config } => decode::execute(config)?,
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli.command) {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("error: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
