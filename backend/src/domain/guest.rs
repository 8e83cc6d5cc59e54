//! Guest visit records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::GuestId;
use super::record_validation::{RecordValidationError, optional_text, required_text};

/// A registered guest visit. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guest {
    pub id: GuestId,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub purpose: Option<String>,
    pub wants_newsletter: bool,
    pub visited_at: DateTime<Utc>,
}

impl Guest {
    /// Newsletter opt-in as shown in exports.
    #[must_use]
    pub const fn newsletter_label(&self) -> &'static str {
        if self.wants_newsletter { "Yes" } else { "No" }
    }
}

/// Validated payload for registering a guest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGuest {
    first_name: String,
    last_name: String,
    email: Option<String>,
    phone: Option<String>,
    purpose: Option<String>,
    wants_newsletter: bool,
}

/// Unvalidated guest fields as received from a client.
#[derive(Debug, Clone, Copy, Default)]
pub struct GuestDraft<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub purpose: Option<&'a str>,
    pub wants_newsletter: Option<bool>,
}

impl NewGuest {
    /// Validate a draft. First and last name are required; blank optional
    /// fields are dropped and the newsletter flag defaults to false.
    pub fn try_new(draft: GuestDraft<'_>) -> Result<Self, RecordValidationError> {
        Ok(Self {
            first_name: required_text("firstName", draft.first_name)?,
            last_name: required_text("lastName", draft.last_name)?,
            email: optional_text(draft.email),
            phone: optional_text(draft.phone),
            purpose: optional_text(draft.purpose),
            wants_newsletter: draft.wants_newsletter.unwrap_or(false),
        })
    }

    /// Build the stored record, stamping the visit time.
    #[must_use]
    pub fn into_guest(self, id: GuestId, visited_at: DateTime<Utc>) -> Guest {
        Guest {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            purpose: self.purpose,
            wants_newsletter: self.wants_newsletter,
            visited_at,
        }
    }
}
