use std::sync::LazyLock;

use regex::Regex;

use crate::error::SearchError;
use crate::identifier::IdentifierType;

pub const MAX_QUERY_LENGTH: usize = 100;

static LEI_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"^[A-Z0-9]{20}$"));
static TICKER_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"^[A-Z]{1,6}$"));
static FIGI_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"^BBG[A-Z0-9]{9}$"));
static PERMID_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"^[0-9]{10,12}$"));

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("identifier pattern is a valid regex")
}

/// Check `identifier` against the format for `identifier_type`.
///
/// `identifier_type` must be one of the exact tags `lei`, `ticker`, `figi` or
/// `permid`. Any other tag, including `"name"` and differently cased tags,
/// returns `false`.
pub fn validate_identifier(identifier: &str, identifier_type: &str) -> bool {
    let ty = match identifier_type {
        "lei" => IdentifierType::Lei,
        "ticker" => IdentifierType::Ticker,
        "figi" => IdentifierType::Figi,
        "permid" => IdentifierType::Permid,
        _ => return false,
    };
    is_valid_identifier(identifier, ty)
}

/// Typed form of [`validate_identifier`]. No lookup against any data source.
pub fn is_valid_identifier(identifier: &str, identifier_type: IdentifierType) -> bool {
    match identifier_type {
        IdentifierType::Lei => LEI_RE.is_match(&identifier.to_uppercase()),
        IdentifierType::Ticker => TICKER_RE.is_match(&identifier.to_uppercase()),
        IdentifierType::Figi => FIGI_RE.is_match(&identifier.to_uppercase()),
        IdentifierType::Permid => PERMID_RE.is_match(identifier),
        IdentifierType::Name => false,
    }
}

/// Every identifier format `identifier` satisfies, highest priority first.
///
/// Formats overlap rarely: a 20-digit string is a valid LEI but too long for
/// a PermID, and FIGIs are 12 characters while LEIs are 20.
pub fn classify_identifier(identifier: &str) -> Vec<IdentifierType> {
    let trimmed = identifier.trim();
    IdentifierType::ALL
        .into_iter()
        .filter(|ty| is_valid_identifier(trimmed, *ty))
        .collect()
}

/// Strip ASCII control characters (0x00-0x1F except space 0x20), trim whitespace,
/// and enforce a byte-length limit.
pub fn sanitize_text(input: &str, max_len: usize) -> Result<String, SearchError> {
    if input.len() > max_len {
        return Err(SearchError::InvalidInput(format!(
            "input exceeds maximum length of {} bytes",
            max_len
        )));
    }
    let sanitized: String = input
        .chars()
        .filter(|c| !c.is_ascii_control() || *c == ' ')
        .collect::<String>()
        .trim()
        .to_string();
    if sanitized.is_empty() {
        return Err(SearchError::InvalidInput(
            "input is empty after sanitization".to_string(),
        ));
    }
    Ok(sanitized)
}

/// Validate a search query typed by a user before handing it to the engine.
pub fn sanitize_query(input: &str) -> Result<String, SearchError> {
    sanitize_text(input, MAX_QUERY_LENGTH)
}

/// Trim a query and enforce [`MAX_QUERY_LENGTH`], leaving its characters as typed.
///
/// A blank query passes through as `""`; the engine returns no results for it.
pub fn bounded_query(input: &str) -> Result<&str, SearchError> {
    if input.len() > MAX_QUERY_LENGTH {
        return Err(SearchError::InvalidInput(format!(
            "query exceeds maximum length of {} bytes",
            MAX_QUERY_LENGTH
        )));
    }
    Ok(input.trim())
}
