use std::path;

use anyhow::{Context, Result};
use tracing::{error, info};

use mapfile_drift::Comparison;

use super::Args;

pub fn run_with_args(args: &Args) -> Result<bool> {
    let perfmon_root = path::absolute(&args.perfmon_repo_path)
        .with_context(|| format!("resolve perfmon path: {}", args.perfmon_repo_path.display()))?;
    let kernel_root = path::absolute(&args.kernel_repo_path)
        .with_context(|| format!("resolve kernel path: {}", args.kernel_repo_path.display()))?;

    let comparison = Comparison::new(&perfmon_root, &kernel_root)?;
    comparison.report().emit();

    if comparison.is_missing_model() {
        error!("Comparison failed. Updates are required.");
        return Ok(false);
    }
    info!("Mapfile and kernel are in sync.");
    Ok(true)
}
