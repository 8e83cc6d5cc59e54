//! Snapshots pushed to the spreadsheet sync after each mutation.

use tracing::{debug, warn};

use super::ports::SyncNotifier;
use super::{Employee, EmployeeLog, Guest, Volunteer, VolunteerLog};

/// Complete current collection for one record kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncSnapshot {
    Volunteers {
        volunteers: Vec<Volunteer>,
        logs: Vec<VolunteerLog>,
    },
    Guests {
        guests: Vec<Guest>,
    },
    Employees {
        employees: Vec<Employee>,
        logs: Vec<EmployeeLog>,
    },
}

impl SyncSnapshot {
    /// Record kind carried by the snapshot.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Volunteers { .. } => "volunteers",
            Self::Guests { .. } => "guests",
            Self::Employees { .. } => "employees",
        }
    }
}

/// Push `snapshot`, logging and swallowing any failure.
///
/// The triggering mutation is already committed, so a failed push never
/// becomes an error for the caller.
pub(crate) async fn publish(notifier: &dyn SyncNotifier, snapshot: SyncSnapshot) {
    let kind = snapshot.kind();
    match notifier.notify(&snapshot).await {
        Ok(()) => debug!(kind, "sync snapshot delivered"),
        Err(error) => warn!(kind, error = %error, "sync snapshot failed"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{MockSyncNotifier, SyncNotifierError};

    #[tokio::test]
    async fn publish_swallows_notifier_errors() {
        let mut notifier = MockSyncNotifier::new();
        notifier
            .expect_notify()
            .times(1)
            .returning(|_| Err(SyncNotifierError::rejected(500_u16)));

        publish(&notifier, SyncSnapshot::Guests { guests: Vec::new() }).await;
    }

    #[test]
    fn kind_names_the_collection() {
        let snapshot = SyncSnapshot::Employees {
            employees: Vec::new(),
            logs: Vec::new(),
        };
        assert_eq!(snapshot.kind(), "employees");
    }
}
