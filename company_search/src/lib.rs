//! Identifier-based company search for the emissions dashboard.
//!
//! Ranks a caller-supplied company list against a free-text query across
//! ticker, LEI, FIGI, PermID and name, offers autocomplete suggestions, and
//! validates identifier formats. Everything here is synchronous and pure;
//! only catalog and policy loading touch the filesystem.

pub mod catalog;
pub mod company;
pub mod error;
pub mod identifier;
pub mod matching;
pub mod policy;
pub mod suggest;
pub mod validation;

pub use catalog::{load_catalog, load_default_catalog, parse_catalog, CatalogFormat};
pub use company::Company;
pub use error::SearchError;
pub use identifier::IdentifierType;
pub use matching::{search, CompanySearch, MatchResult};
pub use policy::MatchPolicy;
pub use suggest::search_suggestions;
pub use validation::{classify_identifier, is_valid_identifier, validate_identifier};
