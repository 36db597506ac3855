//! Check command implementation
//!
//! Resolves the descriptor and prints a summary of every artifact, the
//! repository sources and the size of each classpath.

use std::fmt::Write as _;
use std::path::PathBuf;

use console::Style;

use crate::commands::helpers;
use crate::config::Descriptor;
use crate::domain::{Classpaths, Scope};
use crate::error::Result;
use crate::resolver;

/// Run check command
pub fn run(file: Option<PathBuf>) -> Result<()> {
    let descriptor = helpers::load_descriptor(file)?;
    let classpaths = resolver::resolve(&descriptor)?;
    print!("{}", summary(&descriptor, &classpaths));
    Ok(())
}

/// Human-readable summary of a successful resolution
fn summary(descriptor: &Descriptor, classpaths: &Classpaths) -> String {
    let bold = Style::new().bold();
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} {}",
        Style::new().bold().yellow().apply_to(&descriptor.group),
        descriptor.version
    );

    if !descriptor.repositories.is_empty() {
        let _ = writeln!(out, "  {}", bold.apply_to("Repositories:"));
        for repository in &descriptor.repositories {
            let _ = writeln!(out, "    {}", repository.describe());
        }
    }

    if classpaths.is_empty() {
        let _ = writeln!(out, "  No dependencies declared.");
        return out;
    }

    let _ = writeln!(out, "  {}", bold.apply_to("Dependencies:"));
    for artifact in &classpaths.artifacts {
        let scope_style = match artifact.scope {
            Scope::Implementation => Style::new().green(),
            Scope::RuntimeOnly => Style::new().cyan(),
        };
        let _ = writeln!(
            out,
            "    {} {} {}",
            scope_style.apply_to(format!("{:<14}", artifact.scope.as_str())),
            artifact.name,
            Style::new().dim().apply_to(artifact.path.display())
        );
    }

    let _ = writeln!(
        out,
        "  {} compile, {} runtime",
        classpaths.compile.len(),
        classpaths.runtime.len()
    );
    out
}
