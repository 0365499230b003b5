//! Merges the three lookup passes into per-property link counts.
//!
//! Pure functions over fully collected row sets. Dedup happens here and not
//! in the query layer because the rules differ by pass: well and document
//! rows dedup by link id, filings dedup by (filing, property) pair so one
//! filing can legitimately count for several properties.

use models_minerals::{Filing, LinkCounts, Property, PropertyLink, StrLocation};
use std::collections::{HashMap, HashSet};

/// Builds the per-property counts for a portfolio.
///
/// Every property appears in the output exactly once, including properties
/// with no location and properties with no matches. Rows naming a property
/// outside the portfolio are dropped.
pub fn aggregate(
    properties: &[Property],
    well_links: &[PropertyLink],
    document_links: &[PropertyLink],
    filings: &[Filing],
) -> HashMap<String, LinkCounts> {
    let mut counts: HashMap<String, LinkCounts> = properties
        .iter()
        .map(|property| (property.record_id.clone(), LinkCounts::default()))
        .collect();

    count_links(&mut counts, well_links, |entry| &mut entry.wells);
    count_links(&mut counts, document_links, |entry| &mut entry.documents);
    count_filings(&mut counts, properties, filings);

    counts
}

/// Counts link rows after dropping duplicates.
///
/// The same link can come back from more than one query chunk when chunk
/// location sets overlap a well's neighbors, so dedup runs over the full
/// collected set before any increment.
fn count_links<F>(counts: &mut HashMap<String, LinkCounts>, links: &[PropertyLink], field: F)
where
    F: Fn(&mut LinkCounts) -> &mut u32,
{
    let mut seen: HashSet<&str> = HashSet::new();

    for link in links {
        if !seen.insert(link.id.as_str()) {
            continue;
        }
        if let Some(entry) = counts.get_mut(&link.property_record_id) {
            *field(entry) += 1;
        }
    }
}

/// Applies the two-tier filing rules.
///
/// Direct primary-STR matches and additional-section matches count for any
/// relief type; a filing that merely sits in a neighboring section counts
/// only for the adjacent-notice relief types. A filing is counted at most
/// once per property no matter how many paths match it.
fn count_filings(
    counts: &mut HashMap<String, LinkCounts>,
    properties: &[Property],
    filings: &[Filing],
) {
    // The same filing can arrive from both the primary-location and the
    // additional-section query families.
    let mut unique: HashMap<&str, &Filing> = HashMap::new();
    for filing in filings {
        unique.entry(filing.record_id.as_str()).or_insert(filing);
    }

    let mut by_primary: HashMap<&StrLocation, Vec<&Filing>> = HashMap::new();
    let mut by_additional: HashMap<&StrLocation, Vec<&Filing>> = HashMap::new();
    for filing in unique.values() {
        if let Some(location) = &filing.location {
            by_primary.entry(location).or_default().push(filing);
        }
        for location in &filing.additional_locations {
            by_additional.entry(location).or_default().push(filing);
        }
    }

    for property in properties {
        let Some(location) = &property.location else {
            continue;
        };

        let mut matched: HashSet<&str> = HashSet::new();

        // Direct match on the primary STR, any relief type.
        if let Some(direct) = by_primary.get(location) {
            for filing in direct {
                matched.insert(filing.record_id.as_str());
            }
        }

        // Direct match against the filing's additional sections, any relief
        // type.
        if let Some(additional) = by_additional.get(location) {
            for filing in additional {
                matched.insert(filing.record_id.as_str());
            }
        }

        // Adjacent match on the primary STR, whitelisted relief types only.
        for neighbor in location.neighbors() {
            if let Some(adjacent) = by_primary.get(&neighbor) {
                for filing in adjacent {
                    if filing.relief_type.counts_when_adjacent() {
                        matched.insert(filing.record_id.as_str());
                    }
                }
            }
        }

        let entry = counts
            .get_mut(&property.record_id)
            .expect("every portfolio property was seeded above");
        entry.filings += matched.len() as u32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models_minerals::ReliefType;

    fn location(section: i32) -> StrLocation {
        StrLocation::new(section, "9N", "5W", "IM").unwrap()
    }

    fn property(record_id: &str, section: Option<i32>) -> Property {
        Property {
            record_id: record_id.to_string(),
            user_id: "auth0|owner".to_string(),
            organization_id: None,
            name: None,
            location: section.map(|s| location(s)),
        }
    }

    fn link(id: &str, property_record_id: &str) -> PropertyLink {
        PropertyLink {
            id: id.to_string(),
            property_record_id: property_record_id.to_string(),
        }
    }

    fn filing(record_id: &str, relief_type: ReliefType, section: Option<i32>) -> Filing {
        Filing {
            record_id: record_id.to_string(),
            relief_type,
            location: section.map(|s| location(s)),
            additional_locations: vec![],
        }
    }

    #[test]
    fn every_property_appears_exactly_once_with_zeros() {
        let properties = vec![
            property("prop_located", Some(15)),
            property("prop_no_str", None),
        ];

        let counts = aggregate(&properties, &[], &[], &[]);

        assert_eq!(counts.len(), 2);
        assert_eq!(counts["prop_located"], LinkCounts::default());
        assert_eq!(counts["prop_no_str"], LinkCounts::default());
    }

    #[test]
    fn duplicate_link_rows_count_once() {
        let properties = vec![property("prop_a", Some(15))];
        let well_links = vec![
            link("link_1", "prop_a"),
            link("link_1", "prop_a"),
            link("link_2", "prop_a"),
        ];
        let document_links = vec![link("doc_link_1", "prop_a"), link("doc_link_1", "prop_a")];

        let counts = aggregate(&properties, &well_links, &document_links, &[]);

        assert_eq!(counts["prop_a"].wells, 2);
        assert_eq!(counts["prop_a"].documents, 1);
    }

    #[test]
    fn links_for_unknown_properties_are_dropped() {
        let properties = vec![property("prop_a", Some(15))];
        let well_links = vec![link("link_1", "prop_a"), link("link_2", "someone_else")];

        let counts = aggregate(&properties, &well_links, &[], &[]);

        assert_eq!(counts.len(), 1);
        assert_eq!(counts["prop_a"].wells, 1);
    }

    #[test]
    fn direct_and_whitelisted_adjacent_filings_both_count() {
        // Property at S15-T9N-R5W-IM; spacing filed on 15 itself and pooling
        // on neighboring 16.
        let properties = vec![property("prop_a", Some(15))];
        let filings = vec![
            filing("filing_spacing", ReliefType::Spacing, Some(15)),
            filing("filing_pooling", ReliefType::Pooling, Some(16)),
        ];

        let counts = aggregate(&properties, &[], &[], &filings);

        assert_eq!(counts["prop_a"].filings, 2);
    }

    #[test]
    fn non_whitelisted_adjacent_filings_do_not_count() {
        let properties = vec![property("prop_a", Some(15))];
        let filings = vec![
            filing("filing_spacing", ReliefType::Spacing, Some(15)),
            filing("filing_pooling", ReliefType::Pooling, Some(16)),
            filing(
                "filing_probate",
                ReliefType::Other("PROBATE".to_string()),
                Some(16),
            ),
        ];

        let counts = aggregate(&properties, &[], &[], &filings);

        // The probate filing next door changes nothing.
        assert_eq!(counts["prop_a"].filings, 2);
    }

    #[test]
    fn non_whitelisted_direct_filings_still_count() {
        let properties = vec![property("prop_a", Some(15))];
        let filings = vec![filing(
            "filing_probate",
            ReliefType::Other("PROBATE".to_string()),
            Some(15),
        )];

        let counts = aggregate(&properties, &[], &[], &filings);

        assert_eq!(counts["prop_a"].filings, 1);
    }

    #[test]
    fn one_filing_counts_for_direct_and_adjacent_properties() {
        // Section 15 and its neighbor 16: a spacing filing on 15 is a direct
        // match for prop_on_15 and an adjacent match for prop_on_16.
        let properties = vec![property("prop_on_15", Some(15)), property("prop_on_16", Some(16))];
        let filings = vec![filing("filing_spacing", ReliefType::Spacing, Some(15))];

        let counts = aggregate(&properties, &[], &[], &filings);

        assert_eq!(counts["prop_on_15"].filings, 1);
        assert_eq!(counts["prop_on_16"].filings, 1);
    }

    #[test]
    fn a_filing_never_counts_twice_for_the_same_property() {
        // Primary STR matches directly and the additional-section list names
        // the same section again; the row also arrives twice from
        // overlapping queries.
        let mut duplicated = filing("filing_spacing", ReliefType::Spacing, Some(15));
        duplicated.additional_locations = vec![location(15)];

        let properties = vec![property("prop_a", Some(15))];
        let filings = vec![duplicated.clone(), duplicated];

        let counts = aggregate(&properties, &[], &[], &filings);

        assert_eq!(counts["prop_a"].filings, 1);
    }

    #[test]
    fn additional_sections_match_without_the_whitelist() {
        // A change-of-operator filing whose primary STR is far away but whose
        // additional sections include the property's section counts, because
        // additional-section matches use the direct rule.
        let mut distant = filing("filing_operator", ReliefType::ChangeOfOperator, Some(31));
        distant.additional_locations = vec![location(15)];

        let properties = vec![property("prop_a", Some(15))];
        let filings = vec![distant];

        let counts = aggregate(&properties, &[], &[], &filings);

        assert_eq!(counts["prop_a"].filings, 1);
    }

    #[test]
    fn adjacency_does_not_apply_to_additional_sections() {
        // Additional sections use the direct rule only: listing a neighbor of
        // the property's section is not a match.
        let mut nearby = filing("filing_pooling", ReliefType::Pooling, Some(31));
        nearby.additional_locations = vec![location(16)];

        let properties = vec![property("prop_a", Some(15))];
        let filings = vec![nearby];

        let counts = aggregate(&properties, &[], &[], &filings);

        assert_eq!(counts["prop_a"].filings, 0);
    }

    #[test]
    fn locations_in_other_townships_never_match() {
        let other_township = Filing {
            record_id: "filing_far".to_string(),
            relief_type: ReliefType::Spacing,
            location: Some(StrLocation::new(15, "8N", "5W", "IM").unwrap()),
            additional_locations: vec![],
        };

        let properties = vec![property("prop_a", Some(15))];
        let counts = aggregate(&properties, &[], &[], &[other_township]);

        assert_eq!(counts["prop_a"].filings, 0);
    }
}
