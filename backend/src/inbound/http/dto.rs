//! Response bodies shared across handler modules.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Confirmation body returned by deletes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
