//! Boolean query string rendering, following Google search operator
//! conventions.

use std::collections::BTreeSet;

use crate::search_query::{JoinOperator, SearchQuery};

pub const GOOGLE_SEARCH_ENDPOINT: &'static str = "https://www.google.com/search?q=";


/// Wraps a term in double quotes, escaping any embedded quote character.
/// Terms are trimmed at the ingestion boundary, not here.
pub fn quote(term: &str) -> String {
    format!("\"{}\"", term.replace('"', "\\\""))
}

/// Combines the terms of one facet group.
///
/// A single term stays unparenthesized; two or more terms are joined with the
/// operator and wrapped in one pair of parentheses, so groups from different
/// facets can be mixed without ambiguous precedence.
pub fn join_group(terms: &[String], op: JoinOperator) -> String {
    match terms {
        [] => String::new(),
        [single] => single.clone(),
        _ => format!("({})", terms.join(&format!(" {} ", op.as_str()))),
    }
}

fn quoted(terms: &BTreeSet<String>) -> Vec<String> {
    terms.iter().map(|term| quote(term)).collect()
}

/// Renders one query snapshot into the final boolean search string.
///
/// Types, locations and excludes are always OR-joined; the keyword join
/// operator is caller-selectable. The exclude group is negated as a unit with
/// a prefixed minus and appended after the positive clause with plain
/// whitespace, matching how the search engine treats adjacent clauses.
/// Absent facets are omitted; with no facets at all the result is empty.
pub fn build_query_string(query: &SearchQuery) -> String {
    let site = query.site.trim();
    let site_part = if site.is_empty() {
        String::new()
    } else {
        format!("site:{site}")
    };

    let type_part = join_group(&quoted(&query.types), JoinOperator::Or);
    let kw_part = join_group(&quoted(&query.keywords), query.keyword_join);
    let loc_part = join_group(&quoted(&query.locations), JoinOperator::Or);

    let exclude_group = join_group(&quoted(&query.excludes), JoinOperator::Or);
    let exclude_part = if exclude_group.is_empty() {
        String::new()
    } else {
        format!("-{exclude_group}")
    };

    let positive = [site_part, type_part, kw_part, loc_part]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<String>>()
        .join(" AND ");

    [positive, exclude_part]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<String>>()
        .join(" ")
}

/// Search engine link for a built query, or `None` when there is nothing to
/// search for and the UI should render an inert control.
pub fn google_search_url(query_string: &str) -> Option<String> {
    if query_string.trim().is_empty() {
        return None;
    }
    Some(format!(
        "{GOOGLE_SEARCH_ENDPOINT}{}",
        urlencoding::encode(query_string)
    ))
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn terms(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|item| item.to_string()).collect()
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|item| item.to_string()).collect()
    }

    #[test]
    fn quote_wraps_in_double_quotes() {
        assert_eq!(quote("react"), "\"react\"");
    }

    #[test]
    fn quote_escapes_embedded_quotes() {
        assert_eq!(quote("he said \"hi\""), "\"he said \\\"hi\\\"\"");
    }

    #[test]
    fn join_group_of_nothing_is_empty() {
        assert_eq!(join_group(&[], JoinOperator::Or), "");
    }

    #[test]
    fn join_group_of_one_stays_unparenthesized() {
        assert_eq!(join_group(&strings(&["x"]), JoinOperator::And), "x");
    }

    #[test]
    fn join_group_of_two_is_parenthesized() {
        assert_eq!(
            join_group(&strings(&["a", "b"]), JoinOperator::And),
            "(a AND b)"
        );
    }

    #[test]
    fn join_group_of_three_uses_one_pair_of_parentheses() {
        assert_eq!(
            join_group(&strings(&["a", "b", "c"]), JoinOperator::Or),
            "(a OR b OR c)"
        );
    }

    #[test]
    fn empty_query_builds_empty_string() {
        assert_eq!(build_query_string(&SearchQuery::default()), "");
    }

    #[test]
    fn build_is_deterministic() {
        let query = SearchQuery {
            site: "github.com".to_string(),
            types: terms(&["frontend"]),
            keywords: terms(&["react", "typescript"]),
            keyword_join: JoinOperator::Or,
            ..Default::default()
        };
        assert_eq!(build_query_string(&query), build_query_string(&query));
    }

    #[test]
    fn positive_facets_are_and_joined() {
        let query = SearchQuery {
            site: "github.com".to_string(),
            types: terms(&["frontend"]),
            keywords: terms(&["react", "typescript"]),
            keyword_join: JoinOperator::Or,
            ..Default::default()
        };
        assert_eq!(
            build_query_string(&query),
            "site:github.com AND \"frontend\" AND (\"react\" OR \"typescript\")"
        );
    }

    #[test]
    fn excludes_are_negated_as_one_or_group() {
        let query = SearchQuery {
            site: "github.com".to_string(),
            types: terms(&["frontend"]),
            keywords: terms(&["react", "typescript"]),
            keyword_join: JoinOperator::Or,
            excludes: terms(&["recruiter", "hiring"]),
            ..Default::default()
        };
        assert_eq!(
            build_query_string(&query),
            "site:github.com AND \"frontend\" AND (\"react\" OR \"typescript\") \
             -(\"hiring\" OR \"recruiter\")"
        );
    }

    #[test]
    fn single_term_groups_stay_unparenthesized_in_full_query() {
        let query = SearchQuery {
            site: "github.com".to_string(),
            types: terms(&["frontend"]),
            keywords: terms(&["python"]),
            keyword_join: JoinOperator::And,
            locations: terms(&["london"]),
            ..Default::default()
        };
        assert_eq!(
            build_query_string(&query),
            "site:github.com AND \"frontend\" AND \"python\" AND \"london\""
        );
    }

    #[test]
    fn single_exclude_is_prefixed_without_parentheses() {
        let query = SearchQuery {
            site: "github.com".to_string(),
            excludes: terms(&["recruiter"]),
            ..Default::default()
        };
        assert_eq!(build_query_string(&query), "site:github.com -\"recruiter\"");
    }

    #[test]
    fn site_is_trimmed_and_blank_site_is_omitted() {
        let query = SearchQuery {
            site: "  github.com  ".to_string(),
            keywords: terms(&["rust"]),
            ..Default::default()
        };
        assert_eq!(build_query_string(&query), "site:github.com AND \"rust\"");

        let query = SearchQuery {
            site: "   ".to_string(),
            keywords: terms(&["rust"]),
            ..Default::default()
        };
        assert_eq!(build_query_string(&query), "\"rust\"");
    }

    #[test]
    fn excludes_without_positive_clause_stand_alone() {
        let query = SearchQuery {
            excludes: terms(&["recruiter", "hiring"]),
            ..Default::default()
        };
        assert_eq!(
            build_query_string(&query),
            "-(\"hiring\" OR \"recruiter\")"
        );
    }

    #[test]
    fn search_url_percent_encodes_the_query() {
        let url = google_search_url("site:github.com AND \"rust\"");
        assert_eq!(
            url.as_deref(),
            Some("https://www.google.com/search?q=site%3Agithub.com%20AND%20%22rust%22")
        );
    }

    #[test]
    fn search_url_is_inert_for_empty_queries() {
        assert_eq!(google_search_url(""), None);
        assert_eq!(google_search_url("   "), None);
    }
}
