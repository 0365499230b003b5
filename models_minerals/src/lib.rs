//! Minerals Models
//!
//! This crate defines the data models shared across the minerals platform:
//!
//! - **plss**: Section-Township-Range-Meridian location types, normalization,
//!   and section adjacency
//! - **relief**: regulatory relief-type enumeration for docket filings
//! - **property / well / filing / link**: record models shared between the
//!   replica, the Recordbook client, and the monitoring service
//! - **user**: the caller identity passed through the gateway

pub mod filing;
pub mod link;
pub mod plss;
pub mod property;
pub mod relief;
pub mod user;
pub mod well;

// Re-export commonly used types for convenience
pub use filing::Filing;
pub use link::{LinkCounts, LinkStatus, PropertyLink};
pub use plss::{LocationError, StrLocation};
pub use property::Property;
pub use relief::ReliefType;
pub use user::UserContext;
pub use well::{Well, WellStatus};
