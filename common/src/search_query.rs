//! Shared search query model.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};


/// How the terms of one facet group are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum JoinOperator {
    And,
    #[default]
    Or,
}

impl JoinOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            JoinOperator::And => "AND",
            JoinOperator::Or => "OR",
        }
    }
}


/// One snapshot of the user's facet selections, assembled fresh per
/// evaluation. Term sets are deduplicated by construction; iteration order is
/// the sorted order, which keeps query rendering deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SearchQuery {
    pub site: String,
    pub types: BTreeSet<String>,
    pub keywords: BTreeSet<String>,
    pub keyword_join: JoinOperator,
    pub locations: BTreeSet<String>,
    pub excludes: BTreeSet<String>,
}
