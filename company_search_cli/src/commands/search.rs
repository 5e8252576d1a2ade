use anyhow::Result;
use clap::Args;
use company_search::validation;
use company_search::{Company, CompanySearch};

use crate::output::{
    print_json, print_matches_csv, print_matches_markdown, print_matches_table,
    print_matches_xml, OutputFormat,
};

#[derive(Args)]
pub struct SearchArgs {
    /// Ticker, LEI, FIGI, PermID, or part of a company name
    pub query: String,

    /// Maximum number of matches to print
    #[arg(long)]
    pub limit: Option<usize>,
}

pub fn run(
    args: &SearchArgs,
    companies: &[Company],
    engine: &CompanySearch,
    format: &OutputFormat,
) -> Result<()> {
    let query = validation::bounded_query(&args.query)?;

    let mut results = engine.search(companies, query);
    let total = results.len();
    if let Some(limit) = args.limit {
        results.truncate(limit);
    }

    eprintln!(
        "{} of {} matches for '{}' ({} companies searched)",
        results.len(),
        total,
        query,
        companies.len()
    );

    match format {
        OutputFormat::Table => print_matches_table(&results),
        OutputFormat::Json => print_json(&results),
        OutputFormat::Csv => print_matches_csv(&results)?,
        OutputFormat::Markdown => print_matches_markdown(&results),
        OutputFormat::Xml => print_matches_xml(&results)?,
    }

    Ok(())
}
