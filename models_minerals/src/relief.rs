//! Relief types carried by regulatory docket filings.

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// The regulatory category of a docket filing.
///
/// Stored as text in both backing stores; unrecognized values are carried
/// through in `Other` so they stay visible downstream instead of failing the
/// row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(from = "String", into = "String")]
pub enum ReliefType {
    Pooling,
    Spacing,
    IncreasedDensity,
    HorizontalWell,
    LocationException,
    Unitization,
    ChangeOfOperator,
    Other(String),
}

impl ReliefType {
    /// Whether a filing of this type is worth surfacing when it merely sits
    /// in a neighboring section. Direct matches count regardless of type;
    /// adjacent matches only count for these.
    pub fn counts_when_adjacent(&self) -> bool {
        matches!(
            self,
            ReliefType::Pooling
                | ReliefType::Spacing
                | ReliefType::IncreasedDensity
                | ReliefType::HorizontalWell
        )
    }
}

impl From<String> for ReliefType {
    fn from(raw: String) -> Self {
        match raw.to_uppercase().as_str() {
            "POOLING" => ReliefType::Pooling,
            "SPACING" => ReliefType::Spacing,
            "INCREASED_DENSITY" => ReliefType::IncreasedDensity,
            "HORIZONTAL_WELL" => ReliefType::HorizontalWell,
            "LOCATION_EXCEPTION" => ReliefType::LocationException,
            "UNITIZATION" => ReliefType::Unitization,
            "CHANGE_OF_OPERATOR" => ReliefType::ChangeOfOperator,
            _ => ReliefType::Other(raw),
        }
    }
}

impl From<&str> for ReliefType {
    fn from(raw: &str) -> Self {
        ReliefType::from(raw.to_string())
    }
}

impl From<ReliefType> for String {
    fn from(relief: ReliefType) -> Self {
        relief.to_string()
    }
}

impl fmt::Display for ReliefType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReliefType::Pooling => write!(f, "POOLING"),
            ReliefType::Spacing => write!(f, "SPACING"),
            ReliefType::IncreasedDensity => write!(f, "INCREASED_DENSITY"),
            ReliefType::HorizontalWell => write!(f, "HORIZONTAL_WELL"),
            ReliefType::LocationException => write!(f, "LOCATION_EXCEPTION"),
            ReliefType::Unitization => write!(f, "UNITIZATION"),
            ReliefType::ChangeOfOperator => write!(f, "CHANGE_OF_OPERATOR"),
            ReliefType::Other(raw) => write!(f, "{raw}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacent_whitelist_is_exactly_four_types() {
        let whitelisted = [
            ReliefType::Pooling,
            ReliefType::Spacing,
            ReliefType::IncreasedDensity,
            ReliefType::HorizontalWell,
        ];
        for relief in &whitelisted {
            assert!(relief.counts_when_adjacent(), "{relief}");
        }
        for relief in [
            ReliefType::LocationException,
            ReliefType::Unitization,
            ReliefType::ChangeOfOperator,
            ReliefType::Other("PROBATE".to_string()),
        ] {
            assert!(!relief.counts_when_adjacent(), "{relief}");
        }
    }

    #[test]
    fn parses_case_insensitively_and_round_trips() {
        assert_eq!(ReliefType::from("pooling"), ReliefType::Pooling);
        assert_eq!(ReliefType::from("SPACING"), ReliefType::Spacing);
        assert_eq!(
            ReliefType::from("increased_density"),
            ReliefType::IncreasedDensity
        );
        assert_eq!(String::from(ReliefType::HorizontalWell), "HORIZONTAL_WELL");
    }

    #[test]
    fn unknown_values_are_preserved() {
        let relief = ReliefType::from("PROBATE");
        assert_eq!(relief, ReliefType::Other("PROBATE".to_string()));
        assert_eq!(relief.to_string(), "PROBATE");
    }
}
