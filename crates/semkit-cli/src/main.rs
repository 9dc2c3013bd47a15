mod cmd;
mod config;

use anyhow::Result;
use clap::Parser;
use config::SemkitConfig;
use semkit::SemverError;
use std::path::PathBuf;
use std::process::ExitCode;

/// Semantic Versioning command line interface
#[derive(Parser, Debug)]
#[command(name = "semkit")]
#[command(about = "Parse, compare and bump Semantic Versioning 2.0.0 versions")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: cmd::Commands,

    /// Use this configuration file instead of searching for semkit.toml
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn run() -> Result<i32> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = SemkitConfig::resolve(args.config.as_deref())?;
    cmd::execute(args.command, &config)
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            // Malformed input is a usage error, everything else is a failure
            if let Some(err) = e.downcast_ref::<SemverError>() {
                eprintln!("ERROR {}", err);
                return ExitCode::from(2);
            }
            eprintln!("Error: {}", e);
            for cause in e.chain().skip(1) {
                eprintln!("  Caused by: {}", cause);
            }
            ExitCode::FAILURE
        }
    }
}
