//! sqlsplit CLI
//!
//! Command-line front end for the clause-splitting SQL parser.

use std::io::{self, Read};

use clap::{Parser, Subcommand};
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

use sqlsplit_core::{ParserOptions, QueryParser, locate_clauses, normalize_set_operations};

/// Split SQL queries into clauses and render conditions as expressions.
#[derive(Parser)]
#[command(name = "sqlsplit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Raise errors for malformed conditions instead of parsing them best-effort.
    #[arg(long, env = "SQLSPLIT_STRICT")]
    strict: bool,

    /// Print JSON on a single line.
    #[arg(long)]
    compact: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a query and print it as JSON.
    Parse {
        /// Query text (read from stdin if omitted or `-`).
        sql: Option<String>,
    },

    /// Render a condition as a boolean expression.
    Condition {
        /// Condition text (read from stdin if omitted or `-`).
        text: Option<String>,
    },

    /// List the top-level clauses located in a query.
    Clauses {
        /// Query text (read from stdin if omitted or `-`).
        sql: Option<String>,
    },
}

/// Returns the argument, or stdin when it is missing or `-`.
fn input(arg: Option<String>) -> anyhow::Result<String> {
    match arg {
        Some(text) if text != "-" => Ok(text),
        _ => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let parser = QueryParser::new(ParserOptions::new().strict_conditions(cli.strict));
    debug!(strict = cli.strict, "Parser ready");

    match cli.command {
        Commands::Parse { sql } => {
            let query = parser.parse(input(sql)?.trim())?;
            let json = if cli.compact {
                serde_json::to_string(&query)?
            } else {
                serde_json::to_string_pretty(&query)?
            };
            println!("{json}");
        }

        Commands::Condition { text } => {
            let expression = parser.condition_to_expression(input(text)?.trim())?;
            println!("{expression}");
        }

        Commands::Clauses { sql } => {
            let sql = input(sql)?;
            let normalized = normalize_set_operations(sql.trim());
            for m in locate_clauses(&normalized) {
                println!("{}\t{}", m.start, m.clause);
            }
        }
    }

    Ok(())
}
