//! Company records supplied to the search engine.

use serde::{Deserialize, Serialize};

use crate::identifier::IdentifierType;

/// A company with optional market identifiers.
///
/// Records are read-only input to the engine; search results borrow them
/// rather than copying.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Company {
    /// Display name.
    pub name: String,

    /// Exchange ticker symbol.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticker: Option<String>,

    /// Legal Entity Identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lei: Option<String>,

    /// Financial Instrument Global Identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub figi: Option<String>,

    /// Refinitiv PermID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permid: Option<String>,
}

impl Company {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    pub fn with_ticker(mut self, ticker: &str) -> Self {
        self.ticker = Some(ticker.to_string());
        self
    }

    pub fn with_lei(mut self, lei: &str) -> Self {
        self.lei = Some(lei.to_string());
        self
    }

    pub fn with_figi(mut self, figi: &str) -> Self {
        self.figi = Some(figi.to_string());
        self
    }

    pub fn with_permid(mut self, permid: &str) -> Self {
        self.permid = Some(permid.to_string());
        self
    }

    /// The value of the field backing `identifier_type`, if set.
    pub fn identifier(&self, identifier_type: IdentifierType) -> Option<&str> {
        match identifier_type {
            IdentifierType::Ticker => self.ticker.as_deref(),
            IdentifierType::Lei => self.lei.as_deref(),
            IdentifierType::Figi => self.figi.as_deref(),
            IdentifierType::Permid => self.permid.as_deref(),
            IdentifierType::Name => Some(self.name.as_str()),
        }
    }

    /// Replace blank identifier strings with `None` and trim the rest.
    pub(crate) fn normalized(mut self) -> Self {
        fn clean(value: Option<String>) -> Option<String> {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        }

        self.name = self.name.trim().to_string();
        self.ticker = clean(self.ticker);
        self.lei = clean(self.lei);
        self.figi = clean(self.figi);
        self.permid = clean(self.permid);
        self
    }
}
