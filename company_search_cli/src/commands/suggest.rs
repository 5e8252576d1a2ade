use anyhow::Result;
use clap::Args;
use company_search::validation;
use company_search::{Company, CompanySearch};

use crate::output::{
    print_json, print_suggestions_csv, print_suggestions_markdown, print_suggestions_table,
    print_suggestions_xml, OutputFormat,
};

#[derive(Args)]
pub struct SuggestArgs {
    /// Beginning of a ticker, LEI, or company name (at least 2 characters)
    pub partial: String,

    /// Maximum number of suggestions (defaults to the policy limit)
    #[arg(long)]
    pub limit: Option<usize>,
}

pub fn run(
    args: &SuggestArgs,
    companies: &[Company],
    engine: &CompanySearch,
    format: &OutputFormat,
) -> Result<()> {
    let partial = validation::bounded_query(&args.partial)?;
    let limit = args
        .limit
        .unwrap_or(engine.policy().default_suggestion_limit);

    let suggestions = engine.suggestions(companies, partial, limit);

    if suggestions.is_empty() && partial.chars().count() < engine.policy().suggestion_min_query_len {
        eprintln!(
            "Type at least {} characters to get suggestions",
            engine.policy().suggestion_min_query_len
        );
    }

    match format {
        OutputFormat::Table => print_suggestions_table(&suggestions),
        OutputFormat::Json => print_json(&suggestions),
        OutputFormat::Csv => print_suggestions_csv(&suggestions)?,
        OutputFormat::Markdown => print_suggestions_markdown(&suggestions),
        OutputFormat::Xml => print_suggestions_xml(&suggestions)?,
    }

    Ok(())
}
