//! Front-desk domain: records, attendance rules, and services.
//!
//! Purpose: define the volunteer, guest, and employee records, the pure
//! attendance bookkeeping over them, and the services that implement the
//! driving ports. Nothing here knows about HTTP or the concrete store.
//!
//! Public surface:
//! - Records: [`Volunteer`], [`VolunteerLog`], [`Guest`], [`Employee`],
//!   [`EmployeeLog`] and their validated drafts.
//! - [`Error`] / [`ErrorCode`]: transport-agnostic failure payload.
//! - Services: [`VolunteerService`], [`GuestService`], [`EmployeeService`],
//!   [`ReportService`].

pub mod attendance;
mod day_window;
mod employee;
mod employee_service;
mod error;
mod guest;
mod guest_service;
pub mod ports;
mod record_id;
mod record_validation;
mod report_service;
mod sample_roster;
mod sync;
mod trace_id;
mod volunteer;
mod volunteer_service;

pub use self::day_window::DayWindow;
pub use self::employee::{
    ClockStatus, Employee, EmployeeAction, EmployeeDaySummary, EmployeeLog, NewEmployee,
};
pub use self::employee_service::EmployeeService;
pub use self::error::{Error, ErrorCode};
pub use self::guest::{Guest, GuestDraft, NewGuest};
pub use self::guest_service::GuestService;
pub use self::record_id::{EmployeeId, EmployeeLogId, GuestId, VolunteerId, VolunteerLogId};
pub use self::record_validation::RecordValidationError;
pub use self::report_service::ReportService;
pub use self::sample_roster::seed_sample_roster;
pub use self::sync::SyncSnapshot;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::volunteer::{
    NewVolunteer, NewVolunteerLog, Volunteer, VolunteerAction, VolunteerLog, VolunteerStatus,
    VolunteerUpdate,
};
pub use self::volunteer_service::VolunteerService;
