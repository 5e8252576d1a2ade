//! Error types for the library layer.
//!
//! Only catalog loading, policy configuration, and query sanitizing can
//! fail. The matching, suggestion, and validator functions are total.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while loading candidate data, reading configuration,
/// or sanitizing user-provided input.
#[derive(Error, Debug)]
pub enum SearchError {
    /// User-provided input failed validation.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// An identifier type tag was not one of `ticker|lei|figi|permid|name`.
    #[error("Unknown identifier type '{0}'. Valid values: ticker, lei, figi, permid, name")]
    UnknownIdentifierType(String),
    /// A match policy value is out of range.
    #[error("Invalid match policy: {0}")]
    InvalidPolicy(String),
    /// Reading a catalog or policy file failed.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to parse catalog YAML: {0}")]
    Yaml(#[from] serde_yml::Error),
    #[error("Failed to parse catalog CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("Failed to parse match policy TOML: {0}")]
    Toml(#[from] toml::de::Error),
    /// The catalog file extension is not `.json`, `.yml`/`.yaml` or `.csv`.
    #[error("Unsupported catalog format for {}. Expected .json, .yml, .yaml or .csv", .0.display())]
    UnsupportedCatalogFormat(PathBuf),
}
