//! Tunable match policy.
//!
//! The confidence caps and query-length guards are ranking policy, not
//! identifier protocol. Defaults live in named constants and can be
//! overridden from a TOML file:
//!
//! ```toml
//! name_cap = 0.75
//! lei_partial_min_query_len = 6
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SearchError;
use crate::identifier::IdentifierType;

/// Confidence assigned to any exact identifier match.
pub const EXACT_MATCH_CONFIDENCE: f64 = 1.0;
/// Upper bound on a name-substring match.
pub const DEFAULT_NAME_CAP: f64 = 0.8;
/// Upper bound on a partial ticker match.
pub const DEFAULT_TICKER_PARTIAL_CAP: f64 = 0.7;
/// Upper bound on a partial LEI match.
pub const DEFAULT_LEI_PARTIAL_CAP: f64 = 0.6;
/// Shortest query that may produce a partial LEI match.
pub const DEFAULT_LEI_PARTIAL_MIN_QUERY_LEN: usize = 4;
/// Shortest query that produces any suggestion.
pub const DEFAULT_SUGGESTION_MIN_QUERY_LEN: usize = 2;
/// Shortest query that produces LEI suggestions.
pub const DEFAULT_LEI_SUGGESTION_MIN_QUERY_LEN: usize = 4;
/// Number of LEI characters shown before the ellipsis in a suggestion.
pub const DEFAULT_LEI_SUGGESTION_PREFIX_LEN: usize = 12;
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct MatchPolicy {
    pub name_cap: f64,
    pub ticker_partial_cap: f64,
    pub lei_partial_cap: f64,
    pub lei_partial_min_query_len: usize,
    pub suggestion_min_query_len: usize,
    pub lei_suggestion_min_query_len: usize,
    pub lei_suggestion_prefix_len: usize,
    pub default_suggestion_limit: usize,
}

impl Default for MatchPolicy {
    fn default() -> Self {
        Self {
            name_cap: DEFAULT_NAME_CAP,
            ticker_partial_cap: DEFAULT_TICKER_PARTIAL_CAP,
            lei_partial_cap: DEFAULT_LEI_PARTIAL_CAP,
            lei_partial_min_query_len: DEFAULT_LEI_PARTIAL_MIN_QUERY_LEN,
            suggestion_min_query_len: DEFAULT_SUGGESTION_MIN_QUERY_LEN,
            lei_suggestion_min_query_len: DEFAULT_LEI_SUGGESTION_MIN_QUERY_LEN,
            lei_suggestion_prefix_len: DEFAULT_LEI_SUGGESTION_PREFIX_LEN,
            default_suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
        }
    }
}

impl MatchPolicy {
    /// Parse and validate a policy from TOML. Missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, SearchError> {
        let policy: MatchPolicy = toml::from_str(content)?;
        policy.validate()?;
        Ok(policy)
    }

    /// Read a policy TOML file from disk.
    pub fn load(path: &Path) -> Result<Self, SearchError> {
        let content = std::fs::read_to_string(path).map_err(|source| SearchError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let policy = Self::from_toml_str(&content)?;
        tracing::info!("Loaded match policy from {}", path.display());
        Ok(policy)
    }

    pub fn validate(&self) -> Result<(), SearchError> {
        let caps = [
            ("name_cap", self.name_cap),
            ("ticker_partial_cap", self.ticker_partial_cap),
            ("lei_partial_cap", self.lei_partial_cap),
        ];
        for (field, cap) in caps {
            if !(0.0..=1.0).contains(&cap) {
                return Err(SearchError::InvalidPolicy(format!(
                    "{} must be within [0, 1], got {}",
                    field, cap
                )));
            }
        }

        let lengths = [
            ("lei_partial_min_query_len", self.lei_partial_min_query_len),
            ("suggestion_min_query_len", self.suggestion_min_query_len),
            ("lei_suggestion_min_query_len", self.lei_suggestion_min_query_len),
            ("lei_suggestion_prefix_len", self.lei_suggestion_prefix_len),
        ];
        for (field, len) in lengths {
            if len == 0 {
                return Err(SearchError::InvalidPolicy(format!("{} must be >= 1", field)));
            }
        }

        Ok(())
    }

    /// Confidence ceiling for a substring match on `identifier_type`.
    ///
    /// FIGI and PermID only match exactly, so their ceiling is zero.
    pub fn partial_cap(&self, identifier_type: IdentifierType) -> f64 {
        match identifier_type {
            IdentifierType::Name => self.name_cap,
            IdentifierType::Ticker => self.ticker_partial_cap,
            IdentifierType::Lei => self.lei_partial_cap,
            IdentifierType::Figi | IdentifierType::Permid => 0.0,
        }
    }

    /// Shortest normalized query allowed to substring-match `identifier_type`.
    pub fn partial_min_query_len(&self, identifier_type: IdentifierType) -> usize {
        match identifier_type {
            IdentifierType::Lei => self.lei_partial_min_query_len,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_constants() {
        let policy = MatchPolicy::default();
        assert_eq!(policy.name_cap, 0.8);
        assert_eq!(policy.ticker_partial_cap, 0.7);
        assert_eq!(policy.lei_partial_cap, 0.6);
        assert_eq!(policy.lei_partial_min_query_len, 4);
        assert_eq!(policy.suggestion_min_query_len, 2);
        assert_eq!(policy.lei_suggestion_prefix_len, 12);
        assert_eq!(policy.default_suggestion_limit, 5);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let policy = MatchPolicy::from_toml_str("name_cap = 0.5\n").unwrap();
        assert_eq!(policy.name_cap, 0.5);
        assert_eq!(policy.ticker_partial_cap, DEFAULT_TICKER_PARTIAL_CAP);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(MatchPolicy::from_toml_str("").unwrap(), MatchPolicy::default());
    }

    #[test]
    fn test_cap_out_of_range_rejected() {
        let err = MatchPolicy::from_toml_str("lei_partial_cap = 1.5\n").unwrap_err();
        assert!(matches!(err, SearchError::InvalidPolicy(_)));
    }

    #[test]
    fn test_zero_length_rejected() {
        let err = MatchPolicy::from_toml_str("suggestion_min_query_len = 0\n").unwrap_err();
        assert!(matches!(err, SearchError::InvalidPolicy(_)));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = MatchPolicy::from_toml_str("fuzz_factor = 2\n").unwrap_err();
        assert!(matches!(err, SearchError::Toml(_)));
    }

    #[test]
    fn test_partial_cap_lookup() {
        let policy = MatchPolicy::default();
        assert_eq!(policy.partial_cap(IdentifierType::Name), 0.8);
        assert_eq!(policy.partial_cap(IdentifierType::Permid), 0.0);
        assert_eq!(policy.partial_min_query_len(IdentifierType::Lei), 4);
        assert_eq!(policy.partial_min_query_len(IdentifierType::Ticker), 1);
    }
}
