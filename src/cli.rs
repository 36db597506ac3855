//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Kiln - classpath resolver
///
/// Resolve a declared dependency manifest into compile and runtime classpaths.
#[derive(Parser, Debug)]
#[command(
    name = "kiln",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Resolve declared dependencies into compile and runtime classpaths",
    long_about = "Kiln reads a kiln.yaml build descriptor (project identity, repository sources, \
                  dependency entries) and resolves it into the compile classpath and the runtime \
                  classpath consumed by a compiler and a launcher.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  kiln resolve\n    \
                  kiln resolve --scope runtime\n    \
                  kiln resolve --format json\n    \
                  kiln check\n    \
                  kiln provision --into build/install/lib"
)]
pub struct Cli {
    /// Descriptor file (defaults to the nearest kiln.yaml)
    #[arg(long, short = 'f', global = true, env = "KILN_DESCRIPTOR")]
    pub file: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print resolved classpaths
    Resolve(ResolveArgs),

    /// Verify every declared dependency resolves
    Check,

    /// Copy the runtime classpath into a directory
    Provision(ProvisionArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Which classpath to print
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ClasspathKind {
    Compile,
    Runtime,
    #[default]
    Both,
}

/// Output format for resolve
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Arguments for the resolve command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Print both classpaths:\n    kiln resolve\n\n\
                   Print the compile classpath for javac:\n    javac -cp \"$(kiln resolve --scope compile)\" ...\n\n\
                   Print the runtime classpath for java:\n    java -cp \"$(kiln resolve --scope runtime)\" ...\n\n\
                   Machine-readable output:\n    kiln resolve --format json")]
pub struct ResolveArgs {
    /// Classpath to print
    #[arg(long, value_enum, default_value_t = ClasspathKind::Both)]
    pub scope: ClasspathKind,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Arguments for the provision command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Copy runtime archives:\n    kiln provision --into build/install/lib\n\n\
                  Also remove archives no longer declared:\n    kiln provision --into build/install/lib --clean")]
pub struct ProvisionArgs {
    /// Target directory
    #[arg(long, value_name = "DIR")]
    pub into: PathBuf,

    /// Remove .jar files in the target that are not on the runtime classpath
    #[arg(long)]
    pub clean: bool,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    kiln completions bash > ~/.bash_completion.d/kiln\n\n\
                  Generate zsh completions:\n    kiln completions zsh > ~/.zfunc/_kiln\n\n\
                  Generate fish completions:\n    kiln completions fish > ~/.config/fish/completions/kiln.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
