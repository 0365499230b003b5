//! Section adjacency within a single township/range block.
//!
//! PLSS numbers the 36 sections of a township boustrophedon-style: the top
//! row runs 1-6 east to west, the second row 7-12 west to east, and so on.
//! "Adjacent" here means sharing an edge; corner-touching sections are not
//! adjacent. The relation is encoded as a literal table rather than derived
//! from grid math at runtime.
//!
//! Layout, west to east:
//!
//! ```text
//!  6  5  4  3  2  1
//!  7  8  9 10 11 12
//! 18 17 16 15 14 13
//! 19 20 21 22 23 24
//! 30 29 28 27 26 25
//! 31 32 33 34 35 36
//! ```

use crate::plss::location::LocationError;

/// Edge-sharing neighbors for sections 1 through 36, indexed by `section - 1`.
static NEIGHBORS: [&[i16]; 36] = [
    &[2, 12],             // 1
    &[1, 3, 11],          // 2
    &[2, 4, 10],          // 3
    &[3, 5, 9],           // 4
    &[4, 6, 8],           // 5
    &[5, 7],              // 6
    &[6, 8, 18],          // 7
    &[5, 7, 9, 17],       // 8
    &[4, 8, 10, 16],      // 9
    &[3, 9, 11, 15],      // 10
    &[2, 10, 12, 14],     // 11
    &[1, 11, 13],         // 12
    &[12, 14, 24],        // 13
    &[11, 13, 15, 23],    // 14
    &[10, 14, 16, 22],    // 15
    &[9, 15, 17, 21],     // 16
    &[8, 16, 18, 20],     // 17
    &[7, 17, 19],         // 18
    &[18, 20, 30],        // 19
    &[17, 19, 21, 29],    // 20
    &[16, 20, 22, 28],    // 21
    &[15, 21, 23, 27],    // 22
    &[14, 22, 24, 26],    // 23
    &[13, 23, 25],        // 24
    &[24, 26, 36],        // 25
    &[23, 25, 27, 35],    // 26
    &[22, 26, 28, 34],    // 27
    &[21, 27, 29, 33],    // 28
    &[20, 28, 30, 32],    // 29
    &[19, 29, 31],        // 30
    &[30, 32],            // 31
    &[29, 31, 33],        // 32
    &[28, 32, 34],        // 33
    &[27, 33, 35],        // 34
    &[26, 34, 36],        // 35
    &[25, 35],            // 36
];

/// Returns the sections sharing an edge with `section` in the same
/// township/range block.
pub fn neighbor_sections(section: i16) -> Result<&'static [i16], LocationError> {
    if !(1..=36).contains(&section) {
        return Err(LocationError::InvalidSection(section as i32));
    }
    Ok(NEIGHBORS[(section - 1) as usize])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacency_is_symmetric() {
        for section in 1..=36i16 {
            for &neighbor in neighbor_sections(section).unwrap() {
                assert!(
                    neighbor_sections(neighbor).unwrap().contains(&section),
                    "{neighbor} does not list {section} back"
                );
            }
        }
    }

    #[test]
    fn corner_edge_and_interior_counts() {
        for corner in [1, 6, 31, 36] {
            assert_eq!(neighbor_sections(corner).unwrap().len(), 2, "{corner}");
        }
        // Edge sections (non-corner boundary).
        for edge in [2, 3, 4, 5, 7, 12, 13, 18, 19, 24, 25, 30, 32, 33, 34, 35] {
            assert_eq!(neighbor_sections(edge).unwrap().len(), 3, "{edge}");
        }
        // Everything else is interior.
        for interior in [8, 9, 10, 11, 14, 15, 16, 17, 20, 21, 22, 23, 26, 27, 28, 29] {
            assert_eq!(neighbor_sections(interior).unwrap().len(), 4, "{interior}");
        }
    }

    #[test]
    fn known_neighbor_sets() {
        assert_eq!(neighbor_sections(15).unwrap(), &[10, 14, 16, 22]);
        assert_eq!(neighbor_sections(1).unwrap(), &[2, 12]);
        assert_eq!(neighbor_sections(12).unwrap(), &[1, 11, 13]);
        assert_eq!(neighbor_sections(36).unwrap(), &[25, 35]);
        // 15 and 16 share an edge in the third row.
        assert!(neighbor_sections(15).unwrap().contains(&16));
    }

    #[test]
    fn out_of_range_sections_are_rejected() {
        assert_eq!(neighbor_sections(0), Err(LocationError::InvalidSection(0)));
        assert_eq!(
            neighbor_sections(37),
            Err(LocationError::InvalidSection(37))
        );
    }
}
