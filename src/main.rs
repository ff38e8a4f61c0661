//! bugreport system test runner
//!
//! Runs the bugreport analyzer against every input listed in the manifest and
//! prints OK or ERROR per input.

use clap::Parser;
use systest::commands::{Commands, RunnerOptions};
use systest::{cli, common::logging};

#[derive(Parser)]
#[command(name = "systest", about = "System test runner for bugreport")]
#[command(version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    options: RunnerOptions,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    logging::init_cli(cli.options.verbose);

    let command = cli.command.unwrap_or(Commands::Run);
    if let Err(e) = cli::dispatch(command, cli.options).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
