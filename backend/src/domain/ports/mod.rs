//! Domain ports for the hexagonal boundary.
//!
//! Driven ports (`*Repository`, [`SyncNotifier`]) are implemented by outbound
//! adapters. Driving ports (`*Command`, `*Query`) are implemented by the
//! domain services and consumed by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod employee_command;
mod employee_query;
mod employee_repository;
mod guest_command;
mod guest_query;
mod guest_repository;
mod report_query;
mod sync_notifier;
mod volunteer_command;
mod volunteer_query;
mod volunteer_repository;

pub use employee_command::EmployeeCommand;
#[cfg(test)]
pub use employee_command::MockEmployeeCommand;
pub use employee_query::EmployeeQuery;
#[cfg(test)]
pub use employee_query::MockEmployeeQuery;
pub use employee_repository::EmployeeRepository;
#[cfg(test)]
pub use employee_repository::MockEmployeeRepository;
pub use guest_command::GuestCommand;
#[cfg(test)]
pub use guest_command::MockGuestCommand;
pub use guest_query::GuestQuery;
#[cfg(test)]
pub use guest_query::MockGuestQuery;
pub use guest_repository::GuestRepository;
#[cfg(test)]
pub use guest_repository::MockGuestRepository;
#[cfg(test)]
pub use report_query::MockReportQuery;
pub use report_query::{DashboardStats, EmployeeExport, ReportQuery, VolunteerExport};
#[cfg(test)]
pub use sync_notifier::MockSyncNotifier;
pub use sync_notifier::{NoOpSyncNotifier, SyncNotifier, SyncNotifierError};
#[cfg(test)]
pub use volunteer_command::MockVolunteerCommand;
pub use volunteer_command::VolunteerCommand;
#[cfg(test)]
pub use volunteer_query::MockVolunteerQuery;
pub use volunteer_query::VolunteerQuery;
#[cfg(test)]
pub use volunteer_repository::MockVolunteerRepository;
pub use volunteer_repository::VolunteerRepository;
