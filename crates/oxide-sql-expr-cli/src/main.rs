//! sql-expr CLI
//!
//! Turns SQL-like queries into structured JSON expressions.

mod error;
mod input;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use oxide_sql_expr::{Breakpoint, Clause, normalize, parse, segment};

use crate::error::Result;
use crate::input::QuerySource;

/// Parse SQL-like queries into clause expressions.
#[derive(Parser, Debug)]
#[command(name = "sql-expr")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Pretty-print the JSON output.
    #[arg(short, long, global = true, env = "SQL_EXPR_PRETTY")]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Query input options shared by the subcommands that read a query.
#[derive(Args, Debug)]
struct QueryArgs {
    /// Query text (read from stdin if neither this nor --file is given).
    #[arg(conflicts_with = "file")]
    sql: Option<String>,

    /// Read the query from a file.
    #[arg(short, long)]
    file: Option<PathBuf>,
}

impl QueryArgs {
    fn source(&self) -> QuerySource {
        QuerySource::new(self.sql.clone(), self.file.clone())
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse a query and print its expression.
    Parse(QueryArgs),

    /// Print the clauses a query is split into, with keyword spans.
    Segment(QueryArgs),

    /// List the clause keywords in scan priority order.
    Breakpoints,
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
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let output = run(&cli)?;
    println!("{output}");

    Ok(())
}

fn run(cli: &Cli) -> Result<String> {
    match &cli.command {
        Commands::Parse(args) => {
            let sql = args.source().read()?;
            render(&parse(&sql), cli.pretty)
        }
        Commands::Segment(args) => {
            let sql = args.source().read()?;
            let text = normalize(&sql);
            let clauses: Vec<Clause<'_>> = segment(&text).collect();
            info!(clauses = clauses.len(), "segmented query");
            render(&clauses, cli.pretty)
        }
        Commands::Breakpoints => {
            let table: Vec<_> = Breakpoint::BY_LENGTH
                .iter()
                .map(|bp| {
                    json!({
                        "keyword": bp.as_str(),
                        "key": bp.key(),
                        "handler": bp.handler().as_str()
                    })
                })
                .collect();
            render(&table, cli.pretty)
        }
    }
}

fn render<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(text)
}
