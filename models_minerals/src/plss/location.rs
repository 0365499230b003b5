//! Canonical Section-Township-Range-Meridian locations.
//!
//! Raw STR tokens arrive in inconsistent shapes ("7N", "07N", "7 N") from the
//! replica, the Recordbook, and user-entered property records. Everything that
//! compares locations goes through the canonical form defined here.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;
use utoipa::ToSchema;

use crate::plss::adjacency;

/// The survey meridians this platform operates against.
pub const KNOWN_MERIDIANS: [&str; 2] = ["IM", "CM"];

static TOWNSHIP_RANGE: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^(\d{1,2})([NSEW])$").expect("static pattern"));

/// Errors raised while building or resolving a location.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocationError {
    /// PLSS sections run 1 through 36; anything else cannot exist in a township.
    #[error("section {0} is outside the valid range 1-36")]
    InvalidSection(i32),
}

/// A fully canonical STR location.
///
/// Two locations refer to the same square-mile section if and only if they are
/// equal. The canonical form has no leading zeros and no interior whitespace in
/// the township/range tokens, and an uppercase meridian.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct StrLocation {
    /// Section number, 1-36 within the township.
    pub section: i16,
    /// Township token, e.g. "9N".
    pub township: String,
    /// Range token, e.g. "5W".
    pub range: String,
    /// Survey meridian, e.g. "IM".
    pub meridian: String,
}

impl StrLocation {
    /// Builds a canonical location from raw tokens.
    ///
    /// Township/range/meridian tokens are normalized; tokens that do not match
    /// the expected pattern are carried through unchanged so they stay visible
    /// in logs, but such a location will never match a stored record.
    pub fn new(
        section: i32,
        township: &str,
        range: &str,
        meridian: &str,
    ) -> Result<Self, LocationError> {
        if !(1..=36).contains(&section) {
            return Err(LocationError::InvalidSection(section));
        }

        Ok(StrLocation {
            section: section as i16,
            township: normalize_township_range(township),
            range: normalize_township_range(range),
            meridian: normalize_meridian(meridian),
        })
    }

    /// Whether the meridian token is one the platform recognizes.
    pub fn has_known_meridian(&self) -> bool {
        KNOWN_MERIDIANS.contains(&self.meridian.as_str())
    }

    /// The locations of the sections sharing an edge with this one, within the
    /// same township/range block. A location on the block boundary only sees
    /// its in-block neighbors.
    pub fn neighbors(&self) -> Vec<StrLocation> {
        let sections = adjacency::neighbor_sections(self.section)
            .expect("section was validated on construction");

        sections
            .iter()
            .map(|&section| StrLocation {
                section,
                township: self.township.clone(),
                range: self.range.clone(),
                meridian: self.meridian.clone(),
            })
            .collect()
    }
}

impl fmt::Display for StrLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "S{}-T{}-R{}-{}",
            self.section, self.township, self.range, self.meridian
        )
    }
}

/// Canonicalizes a township or range token.
///
/// Interior whitespace is removed and leading zeros stripped, so "07 N"
/// becomes "7N". A token that still fails the `^\d{1,2}[NSEW]$` pattern is
/// returned unchanged: callers treat a non-canonical token as "matches
/// nothing" rather than an error.
pub fn normalize_township_range(raw: &str) -> String {
    let compact: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase();

    let stripped = match compact.find(|c: char| c != '0') {
        Some(idx) => &compact[idx..],
        None => compact.as_str(),
    };

    match TOWNSHIP_RANGE.captures(stripped) {
        Some(caps) => format!("{}{}", &caps[1], &caps[2]),
        None => raw.to_string(),
    }
}

/// Canonicalizes a meridian token: trimmed and uppercased.
///
/// Unknown meridians are passed through so a bad record is diagnosable; they
/// will simply never match a stored location.
pub fn normalize_meridian(raw: &str) -> String {
    raw.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn township_range_forms_are_equivalent() {
        for raw in ["7N", "07N", "7 N", "07 N", " 7n "] {
            assert_eq!(normalize_township_range(raw.trim()), "7N", "raw: {raw:?}");
        }
        assert_eq!(normalize_township_range("12W"), "12W");
        assert_eq!(normalize_township_range("012W"), "12W");
    }

    #[test]
    fn normalization_is_idempotent() {
        for raw in ["7N", "07N", "7 N", "12W", "0 4 E", "garbage", "123N"] {
            let once = normalize_township_range(raw);
            assert_eq!(normalize_township_range(&once), once, "raw: {raw:?}");
        }
        for raw in ["im", " CM ", "weird"] {
            let once = normalize_meridian(raw);
            assert_eq!(normalize_meridian(&once), once, "raw: {raw:?}");
        }
    }

    #[test]
    fn non_matching_tokens_pass_through_unchanged() {
        assert_eq!(normalize_township_range("123N"), "123N");
        assert_eq!(normalize_township_range("N7"), "N7");
        assert_eq!(normalize_township_range(""), "");
        assert_eq!(normalize_township_range("7X"), "7X");
    }

    #[test]
    fn meridian_is_uppercased_and_unknown_passes_through() {
        assert_eq!(normalize_meridian("im"), "IM");
        assert_eq!(normalize_meridian(" cm"), "CM");
        assert_eq!(normalize_meridian("pm"), "PM");

        let loc = StrLocation::new(1, "1N", "1W", "pm").unwrap();
        assert!(!loc.has_known_meridian());
        let loc = StrLocation::new(1, "1N", "1W", "im").unwrap();
        assert!(loc.has_known_meridian());
    }

    #[test]
    fn section_bounds_are_enforced() {
        assert_eq!(
            StrLocation::new(0, "9N", "5W", "IM"),
            Err(LocationError::InvalidSection(0))
        );
        assert_eq!(
            StrLocation::new(37, "9N", "5W", "IM"),
            Err(LocationError::InvalidSection(37))
        );
        assert_eq!(
            StrLocation::new(-3, "9N", "5W", "IM"),
            Err(LocationError::InvalidSection(-3))
        );
        assert!(StrLocation::new(1, "9N", "5W", "IM").is_ok());
        assert!(StrLocation::new(36, "9N", "5W", "IM").is_ok());
    }

    #[test]
    fn equivalent_raw_forms_build_equal_locations() {
        let a = StrLocation::new(15, "9N", "5W", "IM").unwrap();
        let b = StrLocation::new(15, "09 N", "05W", "im").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "S15-T9N-R5W-IM");
    }

    #[test]
    fn neighbors_stay_in_the_same_township_and_range() {
        let loc = StrLocation::new(1, "9N", "5W", "IM").unwrap();
        let neighbors = loc.neighbors();
        assert_eq!(neighbors.len(), 2);
        for n in &neighbors {
            assert_eq!(n.township, "9N");
            assert_eq!(n.range, "5W");
            assert_eq!(n.meridian, "IM");
        }
    }
}
