//! Typed filter expressions for Recordbook queries.
//!
//! Every query the platform sends is built from these combinators; nothing
//! hand-assembles filter JSON at a call site.

use models_minerals::StrLocation;
use serde::Serialize;
use serde_json::Value;

/// A Recordbook filter expression.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Filter {
    Eq { field: String, value: Value },
    In { field: String, values: Vec<Value> },
    /// Matches list-valued fields containing `value`.
    Contains { field: String, value: Value },
    And { filters: Vec<Filter> },
    Or { filters: Vec<Filter> },
}

impl Filter {
    pub fn eq(field: &str, value: impl Into<Value>) -> Self {
        Filter::Eq {
            field: field.to_string(),
            value: value.into(),
        }
    }

    pub fn is_in<V: Into<Value>>(field: &str, values: impl IntoIterator<Item = V>) -> Self {
        Filter::In {
            field: field.to_string(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(field: &str, value: impl Into<Value>) -> Self {
        Filter::Contains {
            field: field.to_string(),
            value: value.into(),
        }
    }

    pub fn and(filters: impl IntoIterator<Item = Filter>) -> Self {
        Filter::And {
            filters: filters.into_iter().collect(),
        }
    }

    pub fn or(filters: impl IntoIterator<Item = Filter>) -> Self {
        Filter::Or {
            filters: filters.into_iter().collect(),
        }
    }

    /// The clause matching one exact STR cell.
    pub fn at_location(location: &StrLocation) -> Self {
        Filter::and([
            Filter::eq("section", location.section as i64),
            Filter::eq("township", location.township.as_str()),
            Filter::eq("range", location.range.as_str()),
            Filter::eq("meridian", location.meridian.as_str()),
        ])
    }

    /// The clause matching any of the given STR cells.
    pub fn at_any_location(locations: &[StrLocation]) -> Self {
        Filter::or(locations.iter().map(Filter::at_location))
    }
}

/// The JSON object a location takes inside a list-valued location field.
pub fn location_value(location: &StrLocation) -> Value {
    serde_json::json!({
        "section": location.section,
        "township": location.township,
        "range": location.range,
        "meridian": location.meridian,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(section: i32) -> StrLocation {
        StrLocation::new(section, "9N", "5W", "IM").unwrap()
    }

    #[test]
    fn location_clause_binds_all_four_fields() {
        let filter = Filter::at_location(&loc(15));
        let json = serde_json::to_value(&filter).unwrap();
        assert_eq!(json["op"], "and");
        let fields: Vec<&str> = json["filters"]
            .as_array()
            .unwrap()
            .iter()
            .map(|f| f["field"].as_str().unwrap())
            .collect();
        assert_eq!(fields, ["section", "township", "range", "meridian"]);
    }

    #[test]
    fn any_location_is_an_or_of_clauses() {
        let filter = Filter::at_any_location(&[loc(15), loc(16)]);
        let json = serde_json::to_value(&filter).unwrap();
        assert_eq!(json["op"], "or");
        assert_eq!(json["filters"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn in_clause_serializes_values() {
        let filter = Filter::is_in("record_id", ["prop_1", "prop_2"]);
        let json = serde_json::to_value(&filter).unwrap();
        assert_eq!(json["op"], "in");
        assert_eq!(json["values"], serde_json::json!(["prop_1", "prop_2"]));
    }
}
