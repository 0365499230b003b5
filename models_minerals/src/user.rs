//! Caller identity forwarded by the gateway.

use serde::{Deserialize, Serialize};

/// The authenticated caller, as established by the gateway in front of this
/// service. Session validation happens upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserContext {
    pub user_id: String,
    pub organization_id: Option<i64>,
}
