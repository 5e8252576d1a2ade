//! Autocomplete suggestions built from company identifiers and names.

use std::collections::HashSet;

use crate::company::Company;
use crate::policy::MatchPolicy;

/// Marker appended to truncated LEI suggestions.
pub const LEI_ELLIPSIS: &str = "...";

/// Prefix-match `partial_query` against tickers, LEIs and names.
///
/// Per company the order is ticker, LEI, name. LEIs are only offered once the
/// query reaches `policy.lei_suggestion_min_query_len` characters and are
/// shortened to `policy.lei_suggestion_prefix_len` characters plus
/// [`LEI_ELLIPSIS`]. Duplicates are dropped and at most `limit` strings are
/// returned in first-seen order.
pub fn suggestions(
    companies: &[Company],
    partial_query: &str,
    limit: usize,
    policy: &MatchPolicy,
) -> Vec<String> {
    let query = partial_query.trim().to_lowercase();
    let query_len = query.chars().count();
    if query_len < policy.suggestion_min_query_len || limit == 0 {
        return Vec::new();
    }
    let include_lei = query_len >= policy.lei_suggestion_min_query_len;

    let mut seen: HashSet<String> = HashSet::new();
    let mut out: Vec<String> = Vec::with_capacity(limit);

    'companies: for company in companies {
        let candidates = [
            company
                .ticker
                .as_deref()
                .filter(|ticker| starts_with_ignore_case(ticker, &query))
                .map(str::to_string),
            company
                .lei
                .as_deref()
                .filter(|lei| include_lei && starts_with_ignore_case(lei, &query))
                .map(|lei| truncate_lei(lei, policy.lei_suggestion_prefix_len)),
            Some(company.name.as_str())
                .filter(|name| starts_with_ignore_case(name, &query))
                .map(str::to_string),
        ];

        for suggestion in candidates.into_iter().flatten() {
            if seen.insert(suggestion.clone()) {
                out.push(suggestion);
                if out.len() >= limit {
                    break 'companies;
                }
            }
        }
    }

    tracing::debug!(query = %query, suggestions = out.len(), "search suggestions");
    out
}

/// [`suggestions`] with the default policy.
pub fn search_suggestions(companies: &[Company], partial_query: &str, limit: usize) -> Vec<String> {
    suggestions(companies, partial_query, limit, &MatchPolicy::default())
}

fn starts_with_ignore_case(value: &str, lowercase_prefix: &str) -> bool {
    value.to_lowercase().starts_with(lowercase_prefix)
}

fn truncate_lei(lei: &str, prefix_len: usize) -> String {
    let prefix: String = lei.chars().take(prefix_len).collect();
    format!("{}{}", prefix, LEI_ELLIPSIS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::DEFAULT_SUGGESTION_LIMIT;

    fn sample() -> Vec<Company> {
        vec![
            Company::new("Microsoft Corp")
                .with_ticker("MSFT")
                .with_lei("INR2EJN1ERAN0W5ZP974"),
            Company::new("Morgan Stanley").with_ticker("MS"),
            Company::new("MSCI Inc").with_ticker("MSCI"),
        ]
    }

    #[test]
    fn test_single_char_returns_empty() {
        assert!(search_suggestions(&sample(), "m", DEFAULT_SUGGESTION_LIMIT).is_empty());
        assert!(search_suggestions(&sample(), " m ", DEFAULT_SUGGESTION_LIMIT).is_empty());
    }

    #[test]
    fn test_two_chars_prefix_matches_in_order() {
        let out = search_suggestions(&sample(), "MS", DEFAULT_SUGGESTION_LIMIT);
        assert!(out.contains(&"MSFT".to_string()));
        assert_eq!(out, vec!["MSFT", "MS", "MSCI", "MSCI Inc"]);
    }

    #[test]
    fn test_name_prefix_not_substring() {
        let companies = vec![Company::new("Microsoft Corp").with_ticker("MSFT")];
        let out = search_suggestions(&companies, "mi", DEFAULT_SUGGESTION_LIMIT);
        assert_eq!(out, vec!["Microsoft Corp"]);
        assert!(search_suggestions(&companies, "soft", DEFAULT_SUGGESTION_LIMIT).is_empty());
    }

    #[test]
    fn test_lei_suggestion_truncated() {
        let out = search_suggestions(&sample(), "inr2", DEFAULT_SUGGESTION_LIMIT);
        assert_eq!(out, vec!["INR2EJN1ERAN..."]);
    }

    #[test]
    fn test_lei_needs_four_chars() {
        let out = search_suggestions(&sample(), "inr", DEFAULT_SUGGESTION_LIMIT);
        assert!(out.is_empty());
    }

    #[test]
    fn test_limit_respected() {
        let out = search_suggestions(&sample(), "ms", 2);
        assert_eq!(out, vec!["MSFT", "MS"]);
        assert!(search_suggestions(&sample(), "ms", 0).is_empty());
    }

    #[test]
    fn test_dedup_across_companies() {
        let companies = vec![
            Company::new("Shell plc").with_ticker("SHEL"),
            Company::new("Shell plc").with_ticker("SHEL"),
        ];
        let out = search_suggestions(&companies, "sh", DEFAULT_SUGGESTION_LIMIT);
        assert_eq!(out, vec!["SHEL", "Shell plc"]);
    }
}
