// Rust guideline compliant 2026-10-14

//! Termdex CLI Application
//!
//! Command-line interface for building and querying search-term indexes.

use clap::Parser;
use std::path::PathBuf;
use termdex_cli::{commands, create_formatter, logging, Workspace};
use termdex_core::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "tdx",
    version,
    about = "Termdex: shortest search terms for catalog entries",
    long_about = "Termdex computes, for every entry of a named catalog, the shortest substring that narrows the catalog to a small candidate set. Catalogs are JSON arrays of {\"id\", \"name\"} records.",
    after_help = "Examples:\n  tdx init\n  tdx build items.json\n  tdx terms items.json --max-candidates 5\n  tdx resolve items.json \"oak logs\"\n  tdx search items.json cannon\n"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    /// Config directory (default .termdex)
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Create the config directory with a default config.toml
    Init,

    /// Build or refresh the cached search-term index
    Build {
        /// Catalog JSON file
        corpus: PathBuf,

        /// Largest candidate set a term may leave
        #[arg(long)]
        max_candidates: Option<usize>,

        /// Rebuild even if the cached index is current
        #[arg(long)]
        force: bool,
    },

    /// List every entry with its search term
    Terms {
        /// Catalog JSON file
        corpus: PathBuf,

        /// Largest candidate set a term may leave
        #[arg(long)]
        max_candidates: Option<usize>,
    },

    /// Resolve an identifier, name or term to one entry
    Resolve {
        /// Catalog JSON file
        corpus: PathBuf,

        /// Identifier, full name or search term
        input: String,
    },

    /// List entries whose name contains a term
    Search {
        /// Catalog JSON file
        corpus: PathBuf,

        /// Search term
        term: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init_tracing(&cli.log_level, cli.log_json)?;

    let workspace = Workspace::open(cli.config_dir.as_deref());
    let json = cli.json
        || matches!(&workspace, Ok(ws) if ws.config().output_format == OutputFormat::Json);
    let formatter = create_formatter(json);

    let result = workspace.and_then(|workspace| match cli.command {
        Some(Commands::Init) => commands::init::execute(&workspace, formatter.as_ref()),
        Some(Commands::Build {
            corpus,
            max_candidates,
            force,
        }) => commands::build::execute(
            &corpus,
            max_candidates,
            force,
            &workspace,
            formatter.as_ref(),
        ),
        Some(Commands::Terms {
            corpus,
            max_candidates,
        }) => commands::terms::execute(&corpus, max_candidates, &workspace, formatter.as_ref()),
        Some(Commands::Resolve { corpus, input }) => {
            commands::resolve::execute(&corpus, &input, formatter.as_ref())
        }
        Some(Commands::Search { corpus, term }) => {
            commands::search::execute(&corpus, &term, formatter.as_ref())
        }
        None => {
            println!("Use --help for usage information");
            Ok(())
        }
    });

    if let Err(error) = result {
        if json {
            println!("{}", formatter.format_error(&error));
            std::process::exit(1);
        }
        return Err(error);
    }

    Ok(())
}
