//! Multi-field company matching with confidence scoring.
//!
//! Each company is tested against [`MATCH_RULES`] in order and contributes at
//! most one result: the first rule that fires. Results are then ranked by
//! confidence, with [`IdentifierType::priority`] breaking ties.

use std::cmp::Ordering;

use serde::Serialize;

use crate::company::Company;
use crate::identifier::IdentifierType;
use crate::policy::{MatchPolicy, EXACT_MATCH_CONFIDENCE};
use crate::suggest;

/// How a rule compares the query with a company field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// Field equals the query (case-insensitive).
    Exact,
    /// Field contains the query (case-insensitive).
    Partial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchRule {
    pub identifier_type: IdentifierType,
    pub kind: RuleKind,
}

const fn rule(identifier_type: IdentifierType, kind: RuleKind) -> MatchRule {
    MatchRule {
        identifier_type,
        kind,
    }
}

/// Rules in evaluation order. A name substring outranks a partial ticker,
/// which outranks a partial LEI.
pub const MATCH_RULES: [MatchRule; 7] = [
    rule(IdentifierType::Ticker, RuleKind::Exact),
    rule(IdentifierType::Lei, RuleKind::Exact),
    rule(IdentifierType::Figi, RuleKind::Exact),
    rule(IdentifierType::Permid, RuleKind::Exact),
    rule(IdentifierType::Name, RuleKind::Partial),
    rule(IdentifierType::Ticker, RuleKind::Partial),
    rule(IdentifierType::Lei, RuleKind::Partial),
];

/// A ranked hit for one company.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult<'a> {
    pub company: &'a Company,
    /// The company field value that triggered the match.
    pub matched_identifier: String,
    pub identifier_type: IdentifierType,
    pub confidence: f64,
}

impl MatchRule {
    /// Confidence for this rule, or `None` if it does not fire.
    ///
    /// `query` must already be trimmed and lowercased, and `query_len` is its
    /// length in characters.
    fn evaluate(
        &self,
        company: &Company,
        query: &str,
        query_len: usize,
        policy: &MatchPolicy,
    ) -> Option<f64> {
        let field = company.identifier(self.identifier_type)?.to_lowercase();

        match self.kind {
            RuleKind::Exact => (field == query).then_some(EXACT_MATCH_CONFIDENCE),
            RuleKind::Partial => {
                if query_len < policy.partial_min_query_len(self.identifier_type) {
                    return None;
                }
                if !field.contains(query) {
                    return None;
                }
                let ratio = query_len as f64 / field.chars().count() as f64;
                let cap = policy.partial_cap(self.identifier_type).clamp(0.0, 1.0);
                Some(ratio.min(cap))
            }
        }
    }
}

/// Search engine bound to a [`MatchPolicy`]. Holds no state between calls.
#[derive(Debug, Clone, Default)]
pub struct CompanySearch {
    policy: MatchPolicy,
}

impl CompanySearch {
    pub fn new(policy: MatchPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &MatchPolicy {
        &self.policy
    }

    /// Rank `companies` against `query`.
    ///
    /// Returns an empty vec for a blank query or an empty company list.
    pub fn search<'a>(&self, companies: &'a [Company], query: &str) -> Vec<MatchResult<'a>> {
        let query = query.trim().to_lowercase();
        if query.is_empty() || companies.is_empty() {
            return Vec::new();
        }
        let query_len = query.chars().count();

        let mut results: Vec<MatchResult<'a>> = companies
            .iter()
            .filter_map(|company| self.match_company(company, &query, query_len))
            .collect();

        sort_results(&mut results);

        tracing::debug!(
            query = %query,
            candidates = companies.len(),
            hits = results.len(),
            "company search"
        );

        results
    }

    /// Autocomplete strings for `partial_query`. See [`suggest::suggestions`].
    pub fn suggestions(
        &self,
        companies: &[Company],
        partial_query: &str,
        limit: usize,
    ) -> Vec<String> {
        suggest::suggestions(companies, partial_query, limit, &self.policy)
    }

    fn match_company<'a>(
        &self,
        company: &'a Company,
        query: &str,
        query_len: usize,
    ) -> Option<MatchResult<'a>> {
        MATCH_RULES.iter().find_map(|rule| {
            let confidence = rule.evaluate(company, query, query_len, &self.policy)?;
            let matched_identifier = company.identifier(rule.identifier_type)?.to_string();
            Some(MatchResult {
                company,
                matched_identifier,
                identifier_type: rule.identifier_type,
                confidence,
            })
        })
    }
}

/// Sort by confidence (descending), then identifier priority (descending).
///
/// The sort is stable, so equal entries keep candidate order.
pub fn sort_results(results: &mut [MatchResult<'_>]) {
    results.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(Ordering::Equal)
            .then_with(|| {
                b.identifier_type
                    .priority()
                    .cmp(&a.identifier_type.priority())
            })
    });
}

/// [`CompanySearch::search`] with the default policy.
pub fn search<'a>(companies: &'a [Company], query: &str) -> Vec<MatchResult<'a>> {
    CompanySearch::default().search(companies, query)
}
