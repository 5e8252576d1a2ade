//! Identifier kinds a company can be matched on.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// The company field a match was attributed to.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum IdentifierType {
    /// Exchange ticker symbol.
    Ticker,
    /// Legal Entity Identifier (20 alphanumeric characters).
    Lei,
    /// Financial Instrument Global Identifier (`BBG` + 9 alphanumerics).
    Figi,
    /// Refinitiv permanent identifier (10-12 digits).
    Permid,
    /// Company display name.
    Name,
}

/// Tie-break weights used when two matches share a confidence.
/// Higher sorts first.
pub const TYPE_PRIORITY: &[(IdentifierType, u8)] = &[
    (IdentifierType::Ticker, 5),
    (IdentifierType::Lei, 4),
    (IdentifierType::Figi, 3),
    (IdentifierType::Permid, 2),
    (IdentifierType::Name, 1),
];

impl IdentifierType {
    /// All identifier types, highest priority first.
    pub const ALL: [IdentifierType; 5] = [
        IdentifierType::Ticker,
        IdentifierType::Lei,
        IdentifierType::Figi,
        IdentifierType::Permid,
        IdentifierType::Name,
    ];

    /// Tie-break weight from [`TYPE_PRIORITY`].
    pub fn priority(self) -> u8 {
        TYPE_PRIORITY
            .iter()
            .find(|(ty, _)| *ty == self)
            .map(|(_, weight)| *weight)
            .unwrap_or(0)
    }

    /// Lowercase tag used on the wire and in CLI arguments.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ticker => "ticker",
            Self::Lei => "lei",
            Self::Figi => "figi",
            Self::Permid => "permid",
            Self::Name => "name",
        }
    }
}

impl fmt::Display for IdentifierType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdentifierType {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ticker" => Ok(Self::Ticker),
            "lei" => Ok(Self::Lei),
            "figi" => Ok(Self::Figi),
            "permid" => Ok(Self::Permid),
            "name" => Ok(Self::Name),
            _ => Err(SearchError::UnknownIdentifierType(s.to_string())),
        }
    }
}
