//! Domain model types for the monitoring engine.

use models_minerals::{LinkCounts, UserContext};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use utoipa::ToSchema;

/// Which store actually served a read, so a false-empty from a lagging
/// replica is distinguishable from a true-empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReadSource {
    Replica,
    Fallback,
}

/// A resolved read together with its provenance.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved<T> {
    pub value: T,
    pub source: ReadSource,
}

/// The resolver's per-read state: either the replica serves the read, or the
/// read is re-issued against the Recordbook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadMode {
    ReplicaOnly,
    Fallback,
}

/// The cache identity a portfolio is stored under. Organization-scoped when
/// the caller has one, so members of the same org share an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortfolioKey {
    Organization(i64),
    User(String),
}

impl PortfolioKey {
    pub fn for_user(user_context: &UserContext) -> Self {
        match user_context.organization_id {
            Some(organization_id) => PortfolioKey::Organization(organization_id),
            None => PortfolioKey::User(user_context.user_id.clone()),
        }
    }
}

impl fmt::Display for PortfolioKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortfolioKey::Organization(id) => write!(f, "org:{id}"),
            PortfolioKey::User(id) => write!(f, "user:{id}"),
        }
    }
}

/// Which store served each of the three lookup passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct PassSources {
    pub wells: ReadSource,
    pub documents: ReadSource,
    pub filings: ReadSource,
}

/// The full aggregation result for one portfolio: one entry per property,
/// zeros included, plus read provenance.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct LinkedActivityReport {
    /// Link counts keyed by property record id.
    pub counts: HashMap<String, LinkCounts>,
    pub sources: PassSources,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portfolio_key_prefers_the_organization() {
        let with_org = UserContext {
            user_id: "auth0|abc".to_string(),
            organization_id: Some(42),
        };
        assert_eq!(
            PortfolioKey::for_user(&with_org),
            PortfolioKey::Organization(42)
        );
        assert_eq!(PortfolioKey::for_user(&with_org).to_string(), "org:42");

        let without_org = UserContext {
            user_id: "auth0|abc".to_string(),
            organization_id: None,
        };
        assert_eq!(
            PortfolioKey::for_user(&without_org),
            PortfolioKey::User("auth0|abc".to_string())
        );
        assert_eq!(
            PortfolioKey::for_user(&without_org).to_string(),
            "user:auth0|abc"
        );
    }
}
