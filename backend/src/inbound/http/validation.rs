//! Shared request-parsing helpers for inbound HTTP adapters.

use serde::{Deserialize, Deserializer};
use tracing::debug;

use crate::domain::{Error, RecordValidationError};

/// Deserialize a field that distinguishes "absent" from "null".
///
/// Use with `#[serde(default, deserialize_with = "nullable")]`: an absent
/// field stays `None`, an explicit `null` becomes `Some(None)`.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Map a record validation failure to the generic per-kind client error.
///
/// Field-level reasons are logged, never returned.
pub(crate) fn invalid_record(kind: &'static str) -> impl Fn(RecordValidationError) -> Error {
    move |reason| {
        debug!(kind, %reason, "rejected invalid record payload");
        Error::invalid_request(format!("Invalid {kind} data"))
    }
}
