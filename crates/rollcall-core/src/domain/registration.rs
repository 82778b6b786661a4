use serde::{Deserialize, Serialize};

/// One stored roster row: a normalized address and the instant it was
/// recorded, as UTC epoch seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub email: String,
    pub registered_at: i64,
}
