use anyhow::{bail, Result};
use company_search::{Company, MatchResult};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::xml_output;

#[derive(Clone, Debug, PartialEq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
    Xml,
}

impl OutputFormat {
    pub fn parse(input: &str) -> Result<Self> {
        match input.trim().to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "markdown" | "md" => Ok(Self::Markdown),
            "xml" => Ok(Self::Xml),
            other => bail!(
                "unknown output format '{}'. Valid values: table, json, csv, markdown, xml",
                other
            ),
        }
    }
}

/// Result of checking one identifier against one format.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub identifier: String,
    pub identifier_type: String,
    pub valid: bool,
}

#[derive(Tabled, Serialize)]
struct MatchRow {
    #[tabled(rename = "#")]
    #[serde(rename = "Rank")]
    rank: usize,
    #[tabled(rename = "Company")]
    #[serde(rename = "Company")]
    company: String,
    #[tabled(rename = "Ticker")]
    #[serde(rename = "Ticker")]
    ticker: String,
    #[tabled(rename = "Matched On")]
    #[serde(rename = "Matched On")]
    identifier_type: String,
    #[tabled(rename = "Matched Value")]
    #[serde(rename = "Matched Value")]
    matched: String,
    #[tabled(rename = "Confidence")]
    #[serde(rename = "Confidence")]
    confidence: String,
}

#[derive(Tabled, Serialize)]
struct SuggestionRow {
    #[tabled(rename = "Suggestion")]
    #[serde(rename = "Suggestion")]
    suggestion: String,
}

#[derive(Tabled, Serialize)]
struct ValidationRow {
    #[tabled(rename = "Identifier")]
    #[serde(rename = "Identifier")]
    identifier: String,
    #[tabled(rename = "Type")]
    #[serde(rename = "Type")]
    identifier_type: String,
    #[tabled(rename = "Valid")]
    #[serde(rename = "Valid")]
    valid: String,
}

#[derive(Tabled, Serialize)]
struct CompanyRow {
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Ticker")]
    #[serde(rename = "Ticker")]
    ticker: String,
    #[tabled(rename = "LEI")]
    #[serde(rename = "LEI")]
    lei: String,
    #[tabled(rename = "FIGI")]
    #[serde(rename = "FIGI")]
    figi: String,
    #[tabled(rename = "PermID")]
    #[serde(rename = "PermID")]
    permid: String,
}

// -- Row builders --

fn build_match_rows(results: &[MatchResult<'_>]) -> Vec<MatchRow> {
    results
        .iter()
        .enumerate()
        .map(|(i, r)| MatchRow {
            rank: i + 1,
            company: r.company.name.clone(),
            ticker: r.company.ticker.clone().unwrap_or_default(),
            identifier_type: r.identifier_type.to_string(),
            matched: r.matched_identifier.clone(),
            confidence: format_confidence(r.confidence),
        })
        .collect()
}

fn build_suggestion_rows(suggestions: &[String]) -> Vec<SuggestionRow> {
    suggestions
        .iter()
        .map(|s| SuggestionRow {
            suggestion: s.clone(),
        })
        .collect()
}

fn build_validation_rows(reports: &[ValidationReport]) -> Vec<ValidationRow> {
    reports
        .iter()
        .map(|r| ValidationRow {
            identifier: r.identifier.clone(),
            identifier_type: r.identifier_type.clone(),
            valid: if r.valid { "yes" } else { "no" }.to_string(),
        })
        .collect()
}

fn build_company_rows(companies: &[Company]) -> Vec<CompanyRow> {
    companies
        .iter()
        .map(|c| CompanyRow {
            name: c.name.clone(),
            ticker: c.ticker.clone().unwrap_or_default(),
            lei: c.lei.clone().unwrap_or_default(),
            figi: c.figi.clone().unwrap_or_default(),
            permid: c.permid.clone().unwrap_or_default(),
        })
        .collect()
}

// -- Rendering helpers --

fn render_table<T: Tabled>(rows: Vec<T>) -> String {
    Table::new(rows).to_string()
}

fn render_markdown<T: Tabled>(rows: Vec<T>) -> String {
    let mut table = Table::new(rows);
    table.with(Style::markdown());
    table.to_string()
}

fn write_csv<T: Serialize>(rows: &[T]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

// -- Table output --

pub fn print_matches_table(results: &[MatchResult<'_>]) {
    println!("{}", render_table(build_match_rows(results)));
}

pub fn print_suggestions_table(suggestions: &[String]) {
    println!("{}", render_table(build_suggestion_rows(suggestions)));
}

pub fn print_validations_table(reports: &[ValidationReport]) {
    println!("{}", render_table(build_validation_rows(reports)));
}

pub fn print_companies_table(companies: &[Company]) {
    println!("{}", render_table(build_company_rows(companies)));
}

// -- Markdown output --

pub fn print_matches_markdown(results: &[MatchResult<'_>]) {
    println!("{}", render_markdown(build_match_rows(results)));
}

pub fn print_suggestions_markdown(suggestions: &[String]) {
    println!("{}", render_markdown(build_suggestion_rows(suggestions)));
}

pub fn print_validations_markdown(reports: &[ValidationReport]) {
    println!("{}", render_markdown(build_validation_rows(reports)));
}

pub fn print_companies_markdown(companies: &[Company]) {
    println!("{}", render_markdown(build_company_rows(companies)));
}

// -- CSV output --

pub fn print_matches_csv(results: &[MatchResult<'_>]) -> Result<()> {
    write_csv(&build_match_rows(results))
}

pub fn print_suggestions_csv(suggestions: &[String]) -> Result<()> {
    write_csv(&build_suggestion_rows(suggestions))
}

pub fn print_validations_csv(reports: &[ValidationReport]) -> Result<()> {
    write_csv(&build_validation_rows(reports))
}

pub fn print_companies_csv(companies: &[Company]) -> Result<()> {
    write_csv(&build_company_rows(companies))
}

// -- XML output --

pub fn print_matches_xml(results: &[MatchResult<'_>]) -> Result<()> {
    println!("{}", xml_output::matches_to_xml(results)?);
    Ok(())
}

pub fn print_suggestions_xml(suggestions: &[String]) -> Result<()> {
    println!("{}", xml_output::suggestions_to_xml(suggestions)?);
    Ok(())
}

pub fn print_validations_xml(reports: &[ValidationReport]) -> Result<()> {
    println!("{}", xml_output::validations_to_xml(reports)?);
    Ok(())
}

pub fn print_companies_xml(companies: &[Company]) -> Result<()> {
    println!("{}", xml_output::companies_to_xml(companies)?);
    Ok(())
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

fn format_confidence(confidence: f64) -> String {
    format!("{:.3}", confidence)
}
