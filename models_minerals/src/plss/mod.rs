//! Public Land Survey System location types shared across all layers.

pub mod adjacency;
pub mod location;

pub use adjacency::neighbor_sections;
pub use location::{
    normalize_meridian, normalize_township_range, LocationError, StrLocation, KNOWN_MERIDIANS,
};
