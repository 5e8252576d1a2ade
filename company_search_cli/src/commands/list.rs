use anyhow::Result;
use company_search::Company;

use crate::output::{
    print_companies_csv, print_companies_markdown, print_companies_table, print_companies_xml,
    print_json, OutputFormat,
};

pub fn run(companies: &[Company], format: &OutputFormat) -> Result<()> {
    eprintln!("{} companies in catalog", companies.len());

    match format {
        OutputFormat::Table => print_companies_table(companies),
        OutputFormat::Json => print_json(&companies),
        OutputFormat::Csv => print_companies_csv(companies)?,
        OutputFormat::Markdown => print_companies_markdown(companies),
        OutputFormat::Xml => print_companies_xml(companies)?,
    }

    Ok(())
}
