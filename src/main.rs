//! Tiger evaluator CLI
//!
//! Main entry point for the `tev` command.

use clap::{Parser, Subcommand};
use miette::Result;
use std::io::Read;
use std::path::{Path, PathBuf};
use tiger_eval::{BinaryOp, Evaluator, LoadError, NodeKind, Reporter};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "tev")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Evaluate Tiger expression trees to 32-bit integers", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a JSON-encoded expression tree
    Eval {
        /// Input file, or `-` for stdin
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Show the decoded tree before evaluating
        #[arg(long)]
        show_ast: bool,
    },

    /// Show information about the evaluator
    Info,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Eval { input, show_ast } => eval(&input, show_ast),
        Commands::Info => info(),
    }
}

fn read_input(input: &Path) -> Result<(String, String), LoadError> {
    if input == Path::new("-") {
        let name = "<stdin>".to_string();
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .map_err(|source| LoadError::Io {
                name: name.clone(),
                source,
            })?;
        Ok((name, source))
    } else {
        let name = input.display().to_string();
        let source = std::fs::read_to_string(input).map_err(|source| LoadError::Io {
            name: name.clone(),
            source,
        })?;
        Ok((name, source))
    }
}

fn eval(input: &Path, show_ast: bool) -> Result<()> {
    tracing::info!("Evaluating {:?}", input);

    let (name, source) = read_input(input)?;
    let expr = tiger_eval::parse_json(&source)?;

    if show_ast {
        println!("=== AST ===");
        println!("{:#?}", expr);
        println!();
    }

    let mut reporter = Reporter::new(name);
    match Evaluator::new().evaluate(&expr) {
        Ok(value) => {
            println!("{}", value);
            Ok(())
        }
        Err(e) => {
            reporter.error(e);
            reporter.emit_all();
            Err(miette::miette!(
                "evaluation of {} failed with {} error(s)",
                reporter.name(),
                reporter.error_count()
            ))
        }
    }
}

fn info() -> Result<()> {
    println!("Tiger expression evaluator");
    println!("Version: {}", tiger_eval::VERSION);
    println!();
    println!("Evaluated node kinds:");
    for kind in NodeKind::ALL.iter().filter(|k| k.is_evaluable()) {
        println!("  - {}", kind);
    }
    println!();
    println!("Rejected node kinds:");
    for kind in NodeKind::ALL.iter().filter(|k| !k.is_evaluable()) {
        println!("  - {}", kind);
    }
    println!();
    let symbols = |comparison: bool| {
        BinaryOp::KNOWN
            .iter()
            .filter(|op| op.is_comparison() == comparison)
            .map(BinaryOp::symbol)
            .collect::<Vec<_>>()
            .join(" ")
    };
    println!("Arithmetic operators: {}", symbols(false));
    println!("Comparison operators (yield 0 or 1): {}", symbols(true));

    Ok(())
}
