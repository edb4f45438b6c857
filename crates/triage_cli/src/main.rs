//! Triage CLI: replays compiler diagnostics through the structured export path.
//!
//! Provides `triage replay` for feeding a stream of raw diagnostics through the
//! interception point (optionally exporting them with `--ai-json`), and
//! `triage explain` for looking up how a single diagnostic code is classified.

#![warn(missing_docs)]

mod explain;
mod pipeline;
mod replay;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use triage_common::DialectVersion;
use triage_diagnostics::DiagnosticKind;

/// Triage: structured diagnostics export for the DML compiler.
#[derive(Parser, Debug)]
#[command(name = "triage", version, about = "Structured DML diagnostics export")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose (debug-level) logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a custom `triage.toml` configuration file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Replay raw diagnostics from a JSON-lines file.
    Replay(ReplayArgs),
    /// Show the category, suggestions, and documentation link for a code.
    Explain(ExplainArgs),
}

/// Arguments for the `triage replay` subcommand.
#[derive(Parser, Debug)]
pub struct ReplayArgs {
    /// File with one raw diagnostic JSON object per line.
    pub diagnostics: PathBuf,

    /// Write the structured diagnostics document to this path.
    #[arg(long = "ai-json", value_name = "PATH")]
    pub ai_json: Option<PathBuf>,

    /// The compiled input file, recorded in the export summary.
    #[arg(long)]
    pub input_file: Option<String>,

    /// The DML dialect version of the input (e.g., "1.4").
    #[arg(long)]
    pub dml_version: Option<DialectVersion>,
}

/// Arguments for the `triage explain` subcommand.
#[derive(Parser, Debug)]
pub struct ExplainArgs {
    /// The diagnostic code (e.g., `EUNDEF`).
    pub code: String,

    /// The kind of diagnostic the code is raised as.
    #[arg(short, long, value_enum, default_value_t = KindArg::Error)]
    pub kind: KindArg,
}

/// Diagnostic kind selection for `triage explain`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    /// A compilation error.
    Error,
    /// A warning.
    Warning,
    /// An internal compiler error.
    #[value(name = "internal-error")]
    InternalError,
    /// An informational message.
    Info,
}

impl From<KindArg> for DiagnosticKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Error => DiagnosticKind::Error,
            KindArg::Warning => DiagnosticKind::Warning,
            KindArg::InternalError => DiagnosticKind::InternalError,
            KindArg::Info => DiagnosticKind::Info,
        }
    }
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Optional path to a custom config file.
    pub config: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let global = GlobalArgs {
        quiet: cli.quiet,
        config: cli.config,
    };

    let result = match cli.command {
        Command::Replay(ref args) => replay::run(args, &global),
        Command::Explain(ref args) => explain::run(args, &global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

/// Installs the stderr log subscriber.
///
/// `--verbose` forces debug level; otherwise `RUST_LOG` is honored, falling
/// back to warnings (errors only with `--quiet`).
fn init_tracing(verbose: bool, quiet: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(if quiet { "error" } else { "warn" }))
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}
