mod commands;
mod output;
mod xml_output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use company_search::{load_catalog, load_default_catalog, Company, CompanySearch, MatchPolicy};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "company-search")]
#[command(about = "Search companies by ticker, LEI, FIGI, PermID or name")]
struct Cli {
    /// Output format: table, json, csv, markdown or xml
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Company catalog (.json, .yml, .yaml or .csv). Defaults to the built-in seed list
    #[arg(long, env = "COMPANY_SEARCH_CATALOG", global = true)]
    catalog: Option<PathBuf>,

    /// Match policy TOML overriding the default confidence caps
    #[arg(long, env = "COMPANY_SEARCH_POLICY", global = true)]
    policy: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank companies matching a query
    Search(commands::search::SearchArgs),
    /// Autocomplete a partial ticker, LEI or name
    Suggest(commands::suggest::SuggestArgs),
    /// Check an identifier against the LEI, ticker, FIGI and PermID formats
    Validate(commands::validate::ValidateArgs),
    /// Print the loaded catalog
    List,
}

fn load_companies(catalog: Option<&PathBuf>) -> Result<Vec<Company>> {
    let companies = match catalog {
        Some(path) => load_catalog(path)?,
        None => {
            tracing::debug!("No catalog given, using the built-in seed list");
            load_default_catalog()?
        }
    };
    Ok(companies)
}

fn load_engine(policy: Option<&PathBuf>) -> Result<CompanySearch> {
    let policy = match policy {
        Some(path) => MatchPolicy::load(path)?,
        None => MatchPolicy::default(),
    };
    Ok(CompanySearch::new(policy))
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("company_search=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = OutputFormat::parse(&cli.output)?;

    match &cli.command {
        Commands::Search(args) => {
            let companies = load_companies(cli.catalog.as_ref())?;
            let engine = load_engine(cli.policy.as_ref())?;
            commands::search::run(args, &companies, &engine, &format)?
        }
        Commands::Suggest(args) => {
            let companies = load_companies(cli.catalog.as_ref())?;
            let engine = load_engine(cli.policy.as_ref())?;
            commands::suggest::run(args, &companies, &engine, &format)?
        }
        Commands::Validate(args) => commands::validate::run(args, &format)?,
        Commands::List => {
            let companies = load_companies(cli.catalog.as_ref())?;
            commands::list::run(&companies, &format)?
        }
    }

    Ok(())
}
