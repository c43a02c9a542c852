mod cmd;
mod kubeconfig;
mod prompt;

use clap::Parser;
use cmd::Cli;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    Cli::parse();

    cmd::menu::handle()
}
