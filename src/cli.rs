use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueHint};

mod run_impl;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "mapfile-drift",
    version,
    about = "Compare perfmon mapfile.csv to the Linux kernel.",
    long_about = None
)]
pub struct Args {
    /// Path to local perfmon checkout.
    #[arg(short = 'p', long = "perfmon-repo-path", value_name = "PATH", value_hint = ValueHint::DirPath)]
    pub perfmon_repo_path: PathBuf,

    /// Path to local Linux kernel checkout.
    #[arg(short = 'k', long = "kernel-repo-path", value_name = "PATH", value_hint = ValueHint::DirPath)]
    pub kernel_repo_path: PathBuf,
}

/// Runs the CLI application. Returns `true` when the mapfile is in sync.
///
/// # Errors
/// Returns an error if either input cannot be loaded.
pub fn run() -> Result<bool> {
    let args = Args::parse();
    run_impl::run_with_args(&args)
}
