//! In-memory entity store.
//!
//! Holds every record for the lifetime of the process. Nothing survives a
//! restart.

mod store;

pub use store::InMemoryStore;
