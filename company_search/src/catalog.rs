//! Company catalogs: the candidate lists handed to the search engine.
//!
//! Catalogs come from JSON, YAML, or CSV files, or from the seed YAML
//! embedded at compile time. JSON and YAML use a top-level `companies` list; CSV uses a
//! `name,ticker,lei,figi,permid` header where empty cells mean "not set".

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::company::Company;
use crate::error::SearchError;

/// Top-level structure for JSON and YAML catalog files.
#[derive(Serialize, Deserialize, Debug)]
pub struct CatalogFile {
    pub companies: Vec<Company>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Yaml,
    Csv,
}

impl CatalogFormat {
    /// Detect the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, SearchError> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase());

        match ext.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("yml") | Some("yaml") => Ok(Self::Yaml),
            Some("csv") => Ok(Self::Csv),
            _ => Err(SearchError::UnsupportedCatalogFormat(path.to_path_buf())),
        }
    }
}

/// Parse catalog content.
///
/// Identifier fields are trimmed and blank values become `None`. Records
/// whose name is blank are skipped with a warning.
pub fn parse_catalog(content: &str, format: CatalogFormat) -> Result<Vec<Company>, SearchError> {
    let raw: Vec<Company> = match format {
        CatalogFormat::Json => serde_json::from_str::<CatalogFile>(content)?.companies,
        CatalogFormat::Yaml => serde_yml::from_str::<CatalogFile>(content)?.companies,
        CatalogFormat::Csv => {
            let mut reader = csv::ReaderBuilder::new()
                .trim(csv::Trim::All)
                .from_reader(content.as_bytes());
            reader
                .deserialize::<Company>()
                .collect::<Result<Vec<_>, _>>()?
        }
    };

    let mut companies = Vec::with_capacity(raw.len());
    for (index, company) in raw.into_iter().enumerate() {
        let company = company.normalized();
        if company.name.is_empty() {
            tracing::warn!("Skipping catalog record {} with blank name", index + 1);
            continue;
        }
        companies.push(company);
    }

    Ok(companies)
}

/// Load a catalog file, picking the parser from its extension.
pub fn load_catalog(path: &Path) -> Result<Vec<Company>, SearchError> {
    let format = CatalogFormat::from_path(path)?;
    let content = std::fs::read_to_string(path).map_err(|source| SearchError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let companies = parse_catalog(&content, format)?;
    tracing::info!("Loaded {} companies from {}", companies.len(), path.display());
    Ok(companies)
}

/// Load the seed catalog embedded at compile time.
pub fn load_default_catalog() -> Result<Vec<Company>, SearchError> {
    let yaml_content = include_str!("../../seed_data/companies.yml");
    parse_catalog(yaml_content, CatalogFormat::Yaml)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identifier::IdentifierType;
    use crate::validation::is_valid_identifier;
    use std::path::PathBuf;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            CatalogFormat::from_path(&PathBuf::from("a/companies.JSON")).unwrap(),
            CatalogFormat::Json
        );
        assert_eq!(
            CatalogFormat::from_path(&PathBuf::from("companies.yaml")).unwrap(),
            CatalogFormat::Yaml
        );
        assert_eq!(
            CatalogFormat::from_path(&PathBuf::from("companies.csv")).unwrap(),
            CatalogFormat::Csv
        );
    }

    #[test]
    fn test_format_unsupported() {
        let err = CatalogFormat::from_path(&PathBuf::from("companies.xlsx")).unwrap_err();
        assert!(matches!(err, SearchError::UnsupportedCatalogFormat(_)));
        assert!(CatalogFormat::from_path(&PathBuf::from("companies")).is_err());
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
companies:
  - name: "Apple Inc."
    ticker: "AAPL"
    lei: "HWUPKR0MPOU8FGXBT394"
  - name: "Shell plc"
"#;
        let companies = parse_catalog(yaml, CatalogFormat::Yaml).unwrap();
        assert_eq!(companies.len(), 2);
        assert_eq!(companies[0].ticker.as_deref(), Some("AAPL"));
        assert!(companies[1].ticker.is_none());
    }

    #[test]
    fn test_parse_json_blank_fields_become_none() {
        let json = r#"{"companies": [{"name": "Exxon Mobil Corp", "ticker": "XOM", "figi": "  "}]}"#;
        let companies = parse_catalog(json, CatalogFormat::Json).unwrap();
        assert_eq!(companies[0].figi, None);
    }

    #[test]
    fn test_parse_csv_empty_cells() {
        let csv = "name,ticker,lei,figi,permid\n\
                   Microsoft Corp,MSFT,,BBG000BPH459,4295907168\n\
                   Private Co,,,,\n";
        let companies = parse_catalog(csv, CatalogFormat::Csv).unwrap();
        assert_eq!(companies.len(), 2);
        assert_eq!(companies[0].lei, None);
        assert_eq!(companies[0].permid.as_deref(), Some("4295907168"));
        assert_eq!(companies[1].ticker, None);
    }

    #[test]
    fn test_blank_name_skipped() {
        let yaml = r#"
companies:
  - name: "  "
    ticker: "XXX"
  - name: "Valid"
"#;
        let companies = parse_catalog(yaml, CatalogFormat::Yaml).unwrap();
        assert_eq!(companies.len(), 1);
        assert_eq!(companies[0].name, "Valid");
    }

    #[test]
    fn test_malformed_yaml() {
        let result = parse_catalog("companies: [name: ", CatalogFormat::Yaml);
        assert!(matches!(result, Err(SearchError::Yaml(_))));
    }

    #[test]
    fn test_missing_file() {
        let err = load_catalog(&PathBuf::from("does/not/exist.json")).unwrap_err();
        assert!(matches!(err, SearchError::Io { .. }));
    }

    #[test]
    fn test_load_default_catalog_identifiers_valid() {
        let companies = load_default_catalog().unwrap();
        assert!(!companies.is_empty());

        for company in &companies {
            for ty in [
                IdentifierType::Ticker,
                IdentifierType::Lei,
                IdentifierType::Figi,
                IdentifierType::Permid,
            ] {
                if let Some(value) = company.identifier(ty) {
                    assert!(
                        is_valid_identifier(value, ty),
                        "{} has invalid {}: {}",
                        company.name,
                        ty,
                        value
                    );
                }
            }
        }
    }
}
