//! Sync notifier double recording every snapshot it receives.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::SyncSnapshot;
use crate::domain::ports::{SyncNotifier, SyncNotifierError};

/// Records snapshots in arrival order; optionally fails every call after
/// recording it.
#[derive(Default)]
pub struct RecordingSyncNotifier {
    snapshots: Mutex<Vec<SyncSnapshot>>,
    fail: bool,
}

impl RecordingSyncNotifier {
    /// A notifier that records then reports a transport failure.
    pub fn failing() -> Self {
        Self {
            snapshots: Mutex::default(),
            fail: true,
        }
    }

    /// Snapshots received so far.
    pub fn snapshots(&self) -> Vec<SyncSnapshot> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<SyncSnapshot>> {
        match self.snapshots.lock() {
            Ok(guard) => guard,
            Err(_) => panic!("snapshot mutex"),
        }
    }
}

#[async_trait]
impl SyncNotifier for RecordingSyncNotifier {
    async fn notify(&self, snapshot: &SyncSnapshot) -> Result<(), SyncNotifierError> {
        self.lock().push(snapshot.clone());
        if self.fail {
            return Err(SyncNotifierError::transport("recording notifier set to fail"));
        }
        Ok(())
    }
}
