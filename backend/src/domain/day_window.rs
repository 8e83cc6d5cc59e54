//! Local calendar-day boundaries used by the "today" filters.

use chrono::{
    DateTime, FixedOffset, LocalResult, NaiveDate, NaiveTime, Offset, TimeDelta, TimeZone, Utc,
};
use mockable::Clock;

/// Half-open interval `[start, end)` covering one local calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl DayWindow {
    /// The local day containing the clock's current time.
    pub fn today(clock: &dyn Clock) -> Self {
        Self::containing(&clock.local())
    }

    /// The day containing `instant` in the instant's own time zone.
    ///
    /// # Examples
    /// ```
    /// use chrono::{FixedOffset, TimeZone};
    /// use frontdesk::domain::DayWindow;
    ///
    /// let tz = FixedOffset::east_opt(2 * 3600).expect("valid offset");
    /// let noon = tz.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).single().expect("valid time");
    /// let window = DayWindow::containing(&noon);
    /// assert_eq!(window.start().to_rfc3339(), "2026-05-31T22:00:00+00:00");
    /// ```
    pub fn containing<Tz: TimeZone>(instant: &DateTime<Tz>) -> Self {
        let tz = instant.timezone();
        let fallback = instant.offset().fix();
        let date = instant.date_naive();
        let start = local_midnight(&tz, fallback, date);
        let end = date
            .succ_opt()
            .map_or(DateTime::<Utc>::MAX_UTC, |next| {
                local_midnight(&tz, fallback, next)
            });
        Self { start, end }
    }

    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Whether `instant` falls inside the window.
    #[must_use]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }
}

/// First instant of `date` in `tz`.
///
/// Ambiguous midnights resolve to the earlier instant. A midnight skipped by
/// a DST transition falls back to the offset observed at the reference
/// instant.
fn local_midnight<Tz: TimeZone>(
    tz: &Tz,
    fallback: FixedOffset,
    date: NaiveDate,
) -> DateTime<Utc> {
    let naive = date.and_time(NaiveTime::MIN);
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(midnight) | LocalResult::Ambiguous(midnight, _) => {
            midnight.with_timezone(&Utc)
        }
        LocalResult::None => {
            naive.and_utc() - TimeDelta::seconds(i64::from(fallback.local_minus_utc()))
        }
    }
}
