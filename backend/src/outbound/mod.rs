//! Outbound adapters implementing the driven ports.
//!
//! - **memory**: the in-memory entity store behind every repository port.
//! - **webhook**: reqwest-backed spreadsheet sync notifier.
//!
//! Adapters translate between domain types and their storage or wire
//! representation. They contain no business rules.

pub mod memory;
pub mod webhook;
