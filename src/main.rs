use std::path::PathBuf;

use anyhow::Result;
use chefbook::cli;
use clap::{Parser, Subcommand};

/// chefbook - recipe domain toolkit
#[derive(Parser)]
#[command(name = "chefbook")]
#[command(about = "Validate, summarize and fetch recipes", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a recipe JSON file (one recipe or an array)
    Validate { path: PathBuf },
    /// Print the list-view summaries of a recipe JSON file
    Summary { path: PathBuf },
    /// Run a GraphQL query document against the configured endpoint
    Query {
        /// File holding the GraphQL document
        document: PathBuf,

        /// JSON file holding the query variables
        #[arg(long)]
        variables: Option<PathBuf>,

        /// Operation to run when the document defines several
        #[arg(long)]
        operation: Option<String>,

        /// Field of `data` holding the recipes
        #[arg(long, default_value = "recipes")]
        field: String,

        /// Expect list-view summaries rather than full recipes
        #[arg(long)]
        summary: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = chefbook::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    chefbook::observability::init_observability(
        "chefbook",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Commands::Validate { path } => cli::validate(&path, &mut stdout),
        Commands::Summary { path } => cli::summary(&path, &mut stdout),
        Commands::Query {
            document,
            variables,
            operation,
            field,
            summary,
        } => {
            cli::query(
                &config,
                cli::QueryArgs {
                    document,
                    variables,
                    operation,
                    field,
                    summary,
                },
                &mut stdout,
            )
            .await
        }
    }
}
