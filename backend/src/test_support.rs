//! Test doubles shared by unit tests (in `src/`) and integration tests (in
//! `tests/`). Compiled for tests and with the `test-support` feature.

mod clock;
mod sync_notifier;

pub use clock::MutableClock;
pub use sync_notifier::RecordingSyncNotifier;
