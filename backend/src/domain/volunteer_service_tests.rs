//! Tests for the volunteer service.

use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use rstest::{fixture, rstest};

use super::*;
use crate::domain::ports::{MockSyncNotifier, MockVolunteerRepository, SyncNotifierError};
use crate::domain::{ErrorCode, VolunteerAction};
use crate::outbound::memory::InMemoryStore;
use crate::test_support::{MutableClock, RecordingSyncNotifier};

#[fixture]
fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 4, 20, 13, 0, 0)
        .single()
        .expect("valid timestamp")
}

struct Harness {
    clock: Arc<MutableClock>,
    notifier: Arc<RecordingSyncNotifier>,
    service: VolunteerService<InMemoryStore>,
}

#[fixture]
fn harness(start: DateTime<Utc>) -> Harness {
    let clock = Arc::new(MutableClock::new(start));
    let notifier = Arc::new(RecordingSyncNotifier::default());
    let store = Arc::new(InMemoryStore::new(clock.clone()));
    let service = VolunteerService::new(store, notifier.clone(), clock.clone());
    Harness {
        clock,
        notifier,
        service,
    }
}

fn draft(name: &str) -> NewVolunteer {
    NewVolunteer::try_new(name, "Regular Volunteer", None).expect("valid draft")
}

#[rstest]
#[tokio::test]
async fn check_in_then_check_out_records_minutes_and_activity(harness: Harness) {
    let volunteer = harness
        .service
        .create(draft("Sarah Johnson"))
        .await
        .expect("create volunteer");

    let checked_in = harness
        .service
        .check_in(volunteer.id)
        .await
        .expect("check in");
    assert!(checked_in.is_checked_in);

    harness.clock.advance(std::time::Duration::from_secs(95 * 60 + 30));
    let checked_out = harness
        .service
        .check_out(volunteer.id, Some("Cleaned".to_owned()))
        .await
        .expect("check out");
    assert!(!checked_out.is_checked_in);
    assert!(checked_out.last_check_out >= checked_out.last_check_in);

    let logs = harness
        .service
        .volunteer_logs(volunteer.id)
        .await
        .expect("logs");
    let actions: Vec<_> = logs.iter().map(|log| log.action).collect();
    assert_eq!(actions, [VolunteerAction::CheckIn, VolunteerAction::CheckOut]);
    assert_eq!(logs[1].activity.as_deref(), Some("Cleaned"));
    assert_eq!(logs[1].minutes_worked, Some(95));
}

#[rstest]
#[tokio::test]
async fn check_out_without_check_in_records_zero_minutes(harness: Harness) {
    let volunteer = harness
        .service
        .create(draft("Mike Chen"))
        .await
        .expect("create volunteer");
    harness
        .service
        .check_out(volunteer.id, None)
        .await
        .expect("check out");

    let logs = harness
        .service
        .volunteer_logs(volunteer.id)
        .await
        .expect("logs");
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].minutes_worked, Some(0));
    assert!(logs[0].activity.is_none());
}

#[rstest]
#[tokio::test]
async fn repeated_check_in_is_permitted(harness: Harness, start: DateTime<Utc>) {
    let volunteer = harness
        .service
        .create(draft("Anna Lopez"))
        .await
        .expect("create volunteer");
    harness.service.check_in(volunteer.id).await.expect("first");
    harness.clock.advance(std::time::Duration::from_secs(600));
    let again = harness.service.check_in(volunteer.id).await.expect("second");

    assert_eq!(again.last_check_in, Some(start + Duration::minutes(10)));
    let logs = harness
        .service
        .volunteer_logs(volunteer.id)
        .await
        .expect("logs");
    assert_eq!(logs.len(), 2);
}

#[rstest]
#[tokio::test]
async fn every_mutation_pushes_a_volunteer_snapshot(harness: Harness) {
    let volunteer = harness
        .service
        .create(draft("David Kim"))
        .await
        .expect("create volunteer");
    harness.service.check_in(volunteer.id).await.expect("check in");
    harness
        .service
        .delete(volunteer.id)
        .await
        .expect("delete volunteer");

    let kinds: Vec<_> = harness
        .notifier
        .snapshots()
        .iter()
        .map(SyncSnapshot::kind)
        .collect();
    assert_eq!(kinds, ["volunteers"; 3]);
    assert_eq!(
        harness.notifier.snapshots().last(),
        Some(&SyncSnapshot::Volunteers {
            volunteers: Vec::new(),
            logs: Vec::new(),
        })
    );
}

#[rstest]
#[tokio::test]
async fn update_rejects_check_in_flag_without_time(harness: Harness) {
    let volunteer = harness
        .service
        .create(draft("Lisa Wong"))
        .await
        .expect("create volunteer");
    let update = VolunteerUpdate {
        is_checked_in: Some(true),
        ..VolunteerUpdate::default()
    };
    let error = harness
        .service
        .update(volunteer.id, update)
        .await
        .expect_err("invariant violation");
    assert_eq!(error.code(), ErrorCode::InvalidRequest);
    assert_eq!(error.message(), "Invalid volunteer data");
}

#[rstest]
#[tokio::test]
async fn update_merges_supplied_fields(harness: Harness) {
    let volunteer = harness
        .service
        .create(draft("Lisa Wong"))
        .await
        .expect("create volunteer");
    let update = VolunteerUpdate {
        role: Some("Coordinator".to_owned()),
        ..VolunteerUpdate::default()
    };
    let updated = harness
        .service
        .update(volunteer.id, update)
        .await
        .expect("update");
    assert_eq!(updated.role, "Coordinator");
    assert_eq!(updated.name, "Lisa Wong");
    assert_eq!(updated.created_at, volunteer.created_at);
}

#[rstest]
#[case::check_in(true)]
#[case::check_out(false)]
#[tokio::test]
async fn attendance_on_missing_volunteer_is_not_found(#[case] check_in: bool) {
    let mut repo = MockVolunteerRepository::new();
    repo.expect_find_volunteer().times(1).returning(|_| None);
    repo.expect_update_volunteer().times(0);
    repo.expect_append_volunteer_log().times(0);
    let mut notifier = MockSyncNotifier::new();
    notifier.expect_notify().times(0);

    let service = VolunteerService::new(
        Arc::new(repo),
        Arc::new(notifier),
        Arc::new(MutableClock::new(Utc::now())),
    );
    let id = VolunteerId::new(99);
    let result = if check_in {
        service.check_in(id).await
    } else {
        service.check_out(id, None).await
    };

    let error = result.expect_err("missing volunteer");
    assert_eq!(error.code(), ErrorCode::NotFound);
    assert_eq!(error.message(), "Volunteer not found");
}

#[rstest]
#[tokio::test]
async fn sync_failure_does_not_fail_the_mutation(start: DateTime<Utc>) {
    let clock = Arc::new(MutableClock::new(start));
    let mut notifier = MockSyncNotifier::new();
    notifier
        .expect_notify()
        .times(1)
        .returning(|_| Err(SyncNotifierError::transport("connection refused")));
    let service = VolunteerService::new(
        Arc::new(InMemoryStore::new(clock.clone())),
        Arc::new(notifier),
        clock,
    );

    let volunteer = service
        .create(draft("Sarah Johnson"))
        .await
        .expect("create succeeds despite sync failure");
    let listed = service.list().await.expect("list");
    assert_eq!(listed, vec![volunteer]);
}

#[rstest]
#[tokio::test]
async fn delete_missing_volunteer_is_not_found(harness: Harness) {
    let error = harness
        .service
        .delete(VolunteerId::new(7))
        .await
        .expect_err("missing");
    assert_eq!(error.code(), ErrorCode::NotFound);
    assert!(harness.notifier.snapshots().is_empty());
}
