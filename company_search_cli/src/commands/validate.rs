use anyhow::Result;
use clap::Args;
use company_search::validation::{classify_identifier, is_valid_identifier, validate_identifier};
use company_search::IdentifierType;

use crate::output::{
    print_json, print_validations_csv, print_validations_markdown, print_validations_table,
    print_validations_xml, OutputFormat, ValidationReport,
};

/// Identifier formats with a validator, in priority order.
const FORMATS: [IdentifierType; 4] = [
    IdentifierType::Ticker,
    IdentifierType::Lei,
    IdentifierType::Figi,
    IdentifierType::Permid,
];

#[derive(Args)]
pub struct ValidateArgs {
    /// Identifier to check
    pub identifier: String,

    /// Only check this format: lei, ticker, figi or permid
    #[arg(long = "type")]
    pub identifier_type: Option<String>,
}

pub fn run(args: &ValidateArgs, format: &OutputFormat) -> Result<()> {
    let identifier = args.identifier.trim();
    let reports = build_reports(identifier, args.identifier_type.as_deref());

    if args.identifier_type.is_none() {
        let kinds: Vec<String> = classify_identifier(identifier)
            .iter()
            .map(|ty| ty.to_string())
            .collect();
        if kinds.is_empty() {
            eprintln!("'{}' matches no known identifier format", identifier);
        } else {
            eprintln!("'{}' looks like: {}", identifier, kinds.join(", "));
        }
    }

    match format {
        OutputFormat::Table => print_validations_table(&reports),
        OutputFormat::Json => print_json(&reports),
        OutputFormat::Csv => print_validations_csv(&reports)?,
        OutputFormat::Markdown => print_validations_markdown(&reports),
        OutputFormat::Xml => print_validations_xml(&reports)?,
    }

    Ok(())
}

/// One report for the requested type, or one per known format.
///
/// Surrounding whitespace is ignored, matching [`classify_identifier`].
fn build_reports(identifier: &str, identifier_type: Option<&str>) -> Vec<ValidationReport> {
    let identifier = identifier.trim();
    match identifier_type {
        Some(ty) => vec![ValidationReport {
            identifier: identifier.to_string(),
            identifier_type: ty.to_string(),
            valid: validate_identifier(identifier, ty),
        }],
        None => FORMATS
            .iter()
            .map(|ty| ValidationReport {
                identifier: identifier.to_string(),
                identifier_type: ty.to_string(),
                valid: is_valid_identifier(identifier, *ty),
            })
            .collect(),
    }
}
