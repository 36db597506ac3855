//! Kiln - classpath resolver
//!
//! Command line front end: resolves a kiln.yaml build descriptor into compile
//! and runtime classpaths.

use clap::Parser;

use kiln::cli::{Cli, Commands};
use kiln::{commands, logging};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Resolve(args) => commands::resolve::run(cli.file, args),
        Commands::Check => commands::check::run(cli.file),
        Commands::Provision(args) => commands::provision::run(cli.file, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
