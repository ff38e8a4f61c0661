//! CLI command definitions
//!
//! Defines the clap commands for the system test runner.

use clap::{Args, Subcommand};
use std::path::PathBuf;

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Run every manifest entry against the executable (default)
    Run,

    /// Parse the manifest and print its entries without running anything
    #[command(alias = "ls")]
    List,
}

/// Options shared by every command; each overrides the config file
#[derive(Args, Debug, Clone, Default)]
pub struct RunnerOptions {
    /// Configuration file (default: ./systest.toml, then the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Manifest of `<test file>,<expected output>` records
    #[arg(long, short = 'm', global = true)]
    pub manifest: Option<PathBuf>,

    /// Executable run once per manifest entry
    #[arg(long, short = 'e', global = true)]
    pub executable: Option<PathBuf>,

    /// Directory that test file names are resolved against
    #[arg(long, short = 'i', global = true)]
    pub input_dir: Option<PathBuf>,

    /// Program to run the executable through (e.g. mono)
    #[arg(long, global = true)]
    pub launcher: Option<String>,

    /// Disable coloured OK/ERROR markers
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Log subprocess details to stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}
