//! opds-rel CLI - classify OPDS link relations

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "opds-rel")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify relation strings against the OPDS vocabulary
    Classify {
        /// Relation strings (read from --input or stdin when omitted)
        rels: Vec<String>,

        /// File with one relation per line
        #[arg(short, long, conflicts_with = "rels")]
        input: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Fail if any relation is unknown
        #[arg(long)]
        strict: bool,
    },

    /// List the relation vocabulary
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "opds_rel_cli=debug,opds_rel_core=debug"
    } else {
        "opds_rel_cli=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Classify {
            rels,
            input,
            json,
            strict,
        } => commands::classify(rels, input.as_deref(), json, strict),

        Commands::List { json } => commands::list(json),
    }
}
