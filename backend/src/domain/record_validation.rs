//! Field-level validation shared by the record drafts.

use thiserror::Error;

/// Validation errors raised when building record drafts or updates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordValidationError {
    /// A required text field was empty once trimmed.
    #[error("{field} must not be empty")]
    BlankField { field: &'static str },
    /// A volunteer was marked checked in without a check-in time.
    #[error("a checked-in volunteer must have a check-in time")]
    MissingCheckIn,
    /// A volunteer's check-in time precedes their last check-out.
    #[error("check-in time must not precede the last check-out")]
    CheckInBeforeCheckOut,
}

/// Trim a required text field, rejecting blank values.
pub(crate) fn required_text(
    field: &'static str,
    value: &str,
) -> Result<String, RecordValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(RecordValidationError::BlankField { field });
    }
    Ok(trimmed.to_owned())
}

/// Trim an optional text field; blank values collapse to `None`.
pub(crate) fn optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_owned)
}
