//! Provision command implementation

use std::path::PathBuf;

use console::Style;

use crate::cli::ProvisionArgs;
use crate::commands::helpers;
use crate::error::Result;
use crate::progress::ProgressDisplay;
use crate::provision::{self, FileStatus, ProvisionOptions};
use crate::resolver;

/// Run provision command
pub fn run(file: Option<PathBuf>, args: ProvisionArgs) -> Result<()> {
    let descriptor = helpers::load_descriptor(file)?;
    let classpaths = resolver::resolve(&descriptor)?;

    let progress = ProgressDisplay::new(classpaths.runtime.len() as u64);
    let report = provision::provision(
        &classpaths,
        &args.into,
        ProvisionOptions { clean: args.clean },
        &progress,
    )?;

    println!(
        "{} {} archive(s) into {} ({} created, {} updated, {} up to date)",
        Style::new().bold().green().apply_to("Provisioned"),
        report.files.len(),
        args.into.display(),
        report.count(FileStatus::Created),
        report.count(FileStatus::Updated),
        report.count(FileStatus::UpToDate),
    );
    for removed in &report.removed {
        println!("  removed {}", removed.display());
    }

    Ok(())
}
