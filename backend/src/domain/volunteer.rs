//! Volunteer records and their check-in/check-out log entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::record_validation::{RecordValidationError, optional_text, required_text};
use super::{VolunteerId, VolunteerLogId};

/// A volunteer known to the front desk.
///
/// ## Invariants
/// - When `is_checked_in` is true, `last_check_in` is set and is not earlier
///   than `last_check_out`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Volunteer {
    pub id: VolunteerId,
    pub name: String,
    pub role: String,
    pub photo_url: Option<String>,
    pub is_checked_in: bool,
    pub last_check_in: Option<DateTime<Utc>>,
    pub last_check_out: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Volunteer {
    /// Current attendance state.
    #[must_use]
    pub fn status(&self) -> VolunteerStatus {
        if self.is_checked_in {
            VolunteerStatus::CheckedIn
        } else {
            VolunteerStatus::Available
        }
    }

    /// Check the attendance invariant.
    pub fn validate_attendance(&self) -> Result<(), RecordValidationError> {
        if !self.is_checked_in {
            return Ok(());
        }
        let check_in = self
            .last_check_in
            .ok_or(RecordValidationError::MissingCheckIn)?;
        match self.last_check_out {
            Some(check_out) if check_in < check_out => {
                Err(RecordValidationError::CheckInBeforeCheckOut)
            }
            _ => Ok(()),
        }
    }
}

/// Attendance state derived from [`Volunteer::is_checked_in`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VolunteerStatus {
    Available,
    CheckedIn,
}

impl VolunteerStatus {
    /// Label shown in exports and the spreadsheet sync.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::CheckedIn => "Checked In",
        }
    }
}

/// Validated payload for registering a volunteer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVolunteer {
    name: String,
    role: String,
    photo_url: Option<String>,
}

impl NewVolunteer {
    /// Validate and build a draft. Name and role are required.
    ///
    /// # Examples
    /// ```
    /// use chrono::Utc;
    /// use frontdesk::domain::{NewVolunteer, VolunteerId};
    ///
    /// let draft = NewVolunteer::try_new(" Sarah Johnson ", "Regular Volunteer", None)
    ///     .expect("valid draft");
    /// let volunteer = draft.into_volunteer(VolunteerId::new(1), Utc::now());
    /// assert_eq!(volunteer.name, "Sarah Johnson");
    /// assert!(NewVolunteer::try_new("", "Regular Volunteer", None).is_err());
    /// ```
    pub fn try_new(
        name: &str,
        role: &str,
        photo_url: Option<&str>,
    ) -> Result<Self, RecordValidationError> {
        Ok(Self {
            name: required_text("name", name)?,
            role: required_text("role", role)?,
            photo_url: optional_text(photo_url),
        })
    }

    /// Build the stored record with creation defaults.
    #[must_use]
    pub fn into_volunteer(self, id: VolunteerId, now: DateTime<Utc>) -> Volunteer {
        Volunteer {
            id,
            name: self.name,
            role: self.role,
            photo_url: self.photo_url,
            is_checked_in: false,
            last_check_in: None,
            last_check_out: None,
            created_at: now,
        }
    }
}

/// Partial update of the mutable volunteer fields.
///
/// `None` leaves a field untouched. For nullable fields `Some(None)` clears
/// the stored value. `id` and `created_at` are not represented and can never
/// be overwritten.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VolunteerUpdate {
    pub name: Option<String>,
    pub role: Option<String>,
    pub photo_url: Option<Option<String>>,
    pub is_checked_in: Option<bool>,
    pub last_check_in: Option<Option<DateTime<Utc>>>,
    pub last_check_out: Option<Option<DateTime<Utc>>>,
}

impl VolunteerUpdate {
    /// Trim supplied text fields, rejecting blank names and roles.
    pub fn validated(self) -> Result<Self, RecordValidationError> {
        let name = self
            .name
            .as_deref()
            .map(|name| required_text("name", name))
            .transpose()?;
        let role = self
            .role
            .as_deref()
            .map(|role| required_text("role", role))
            .transpose()?;
        let photo_url = self
            .photo_url
            .map(|photo_url| optional_text(photo_url.as_deref()));
        Ok(Self {
            name,
            role,
            photo_url,
            ..self
        })
    }

    /// Shallow-merge the supplied fields into `volunteer`.
    pub fn merge_into(&self, volunteer: &mut Volunteer) {
        if let Some(name) = &self.name {
            volunteer.name.clone_from(name);
        }
        if let Some(role) = &self.role {
            volunteer.role.clone_from(role);
        }
        if let Some(photo_url) = &self.photo_url {
            volunteer.photo_url.clone_from(photo_url);
        }
        if let Some(is_checked_in) = self.is_checked_in {
            volunteer.is_checked_in = is_checked_in;
        }
        if let Some(last_check_in) = self.last_check_in {
            volunteer.last_check_in = last_check_in;
        }
        if let Some(last_check_out) = self.last_check_out {
            volunteer.last_check_out = last_check_out;
        }
    }

    /// Return a copy of `volunteer` with the update applied.
    #[must_use]
    pub fn applied_to(&self, volunteer: &Volunteer) -> Volunteer {
        let mut merged = volunteer.clone();
        self.merge_into(&mut merged);
        merged
    }
}

/// Kind of volunteer log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolunteerAction {
    CheckIn,
    CheckOut,
}

impl VolunteerAction {
    /// Wire name of the action.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CheckIn => "check_in",
            Self::CheckOut => "check_out",
        }
    }
}

/// Append-only record of a check-in or check-out.
///
/// `minutes_worked` is only set on check-out entries and keeps its historical
/// `hoursWorked` name on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolunteerLog {
    pub id: VolunteerLogId,
    pub volunteer_id: VolunteerId,
    pub action: VolunteerAction,
    pub timestamp: DateTime<Utc>,
    pub activity: Option<String>,
    #[serde(rename = "hoursWorked")]
    pub minutes_worked: Option<i64>,
}

/// Payload for appending a volunteer log entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVolunteerLog {
    pub volunteer_id: VolunteerId,
    pub action: VolunteerAction,
    pub activity: Option<String>,
    pub minutes_worked: Option<i64>,
}

impl NewVolunteerLog {
    /// Draft a check-in entry.
    #[must_use]
    pub fn check_in(volunteer_id: VolunteerId) -> Self {
        Self {
            volunteer_id,
            action: VolunteerAction::CheckIn,
            activity: None,
            minutes_worked: None,
        }
    }

    /// Draft a check-out entry. A blank activity is stored as absent.
    #[must_use]
    pub fn check_out(volunteer_id: VolunteerId, activity: Option<&str>, minutes: i64) -> Self {
        Self {
            volunteer_id,
            action: VolunteerAction::CheckOut,
            activity: optional_text(activity),
            minutes_worked: Some(minutes),
        }
    }

    /// Build the stored entry stamped with `timestamp`.
    #[must_use]
    pub fn into_log(self, id: VolunteerLogId, timestamp: DateTime<Utc>) -> VolunteerLog {
        VolunteerLog {
            id,
            volunteer_id: self.volunteer_id,
            action: self.action,
            timestamp,
            activity: self.activity,
            minutes_worked: self.minutes_worked,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use rstest::{fixture, rstest};
    use serde_json::json;

    #[fixture]
    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 9, 0, 0)
            .single()
            .expect("valid timestamp")
    }

    #[fixture]
    fn volunteer(now: DateTime<Utc>) -> Volunteer {
        NewVolunteer::try_new("Mike Chen", "Team Leader", None)
            .expect("valid draft")
            .into_volunteer(VolunteerId::new(1), now)
    }

    #[rstest]
    fn new_volunteer_starts_available(volunteer: Volunteer) {
        assert_eq!(volunteer.status(), VolunteerStatus::Available);
        assert!(volunteer.last_check_in.is_none());
        assert!(volunteer.photo_url.is_none());
    }

    #[rstest]
    #[case("", "Coordinator")]
    #[case("Lisa Wong", "  ")]
    fn new_volunteer_requires_name_and_role(#[case] name: &str, #[case] role: &str) {
        assert!(NewVolunteer::try_new(name, role, None).is_err());
    }

    #[rstest]
    fn update_never_touches_identity(volunteer: Volunteer) {
        let update = VolunteerUpdate {
            name: Some("Michael Chen".to_owned()),
            photo_url: Some(Some("https://example.com/m.png".to_owned())),
            ..VolunteerUpdate::default()
        };
        let merged = update.applied_to(&volunteer);
        assert_eq!(merged.id, volunteer.id);
        assert_eq!(merged.created_at, volunteer.created_at);
        assert_eq!(merged.name, "Michael Chen");
        assert_eq!(merged.role, "Team Leader");
    }

    #[rstest]
    fn update_can_clear_photo(mut volunteer: Volunteer) {
        volunteer.photo_url = Some("https://example.com/m.png".to_owned());
        let update = VolunteerUpdate {
            photo_url: Some(Some("   ".to_owned())),
            ..VolunteerUpdate::default()
        }
        .validated()
        .expect("valid update");
        assert!(update.applied_to(&volunteer).photo_url.is_none());
    }

    #[rstest]
    fn update_rejects_blank_name() {
        let update = VolunteerUpdate {
            name: Some(" ".to_owned()),
            ..VolunteerUpdate::default()
        };
        assert_eq!(
            update.validated(),
            Err(RecordValidationError::BlankField { field: "name" })
        );
    }

    #[rstest]
    fn checked_in_requires_check_in_time(mut volunteer: Volunteer) {
        volunteer.is_checked_in = true;
        assert_eq!(
            volunteer.validate_attendance(),
            Err(RecordValidationError::MissingCheckIn)
        );
    }

    #[rstest]
    fn checked_in_must_follow_last_check_out(mut volunteer: Volunteer, now: DateTime<Utc>) {
        volunteer.is_checked_in = true;
        volunteer.last_check_in = Some(now);
        volunteer.last_check_out = Some(now + Duration::minutes(5));
        assert_eq!(
            volunteer.validate_attendance(),
            Err(RecordValidationError::CheckInBeforeCheckOut)
        );

        volunteer.last_check_out = Some(now - Duration::minutes(5));
        assert_eq!(volunteer.validate_attendance(), Ok(()));
    }

    #[rstest]
    fn volunteer_serialises_camel_case(volunteer: Volunteer) {
        let value = serde_json::to_value(&volunteer).expect("serialise volunteer");
        assert_eq!(value.get("isCheckedIn"), Some(&json!(false)));
        assert_eq!(value.get("photoUrl"), Some(&json!(null)));
        assert_eq!(value.get("createdAt"), Some(&json!("2026-03-14T09:00:00Z")));
    }

    #[rstest]
    fn check_out_log_carries_minutes_as_hours_worked(now: DateTime<Utc>) {
        let log = NewVolunteerLog::check_out(VolunteerId::new(4), Some("Cleaned"), 42)
            .into_log(VolunteerLogId::new(9), now);
        let value = serde_json::to_value(&log).expect("serialise log");
        assert_eq!(value.get("action"), Some(&json!("check_out")));
        assert_eq!(value.get("hoursWorked"), Some(&json!(42)));
        assert_eq!(value.get("activity"), Some(&json!("Cleaned")));
    }

    #[rstest]
    fn blank_activity_is_absent() {
        let draft = NewVolunteerLog::check_out(VolunteerId::new(1), Some(""), 0);
        assert!(draft.activity.is_none());
    }
}
