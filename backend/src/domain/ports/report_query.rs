//! Driving port for dashboard counters and export snapshots.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{Employee, EmployeeLog, Error, Guest, Volunteer, VolunteerLog};

/// Dashboard counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    /// Volunteers currently checked in.
    pub volunteers: usize,
    /// Guests who visited today.
    pub guests: usize,
    /// Active employees.
    pub employees: usize,
}

/// Volunteers and all their logs, as exported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VolunteerExport {
    pub volunteers: Vec<Volunteer>,
    pub logs: Vec<VolunteerLog>,
}

/// Employees and all their logs, as exported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeExport {
    pub employees: Vec<Employee>,
    pub logs: Vec<EmployeeLog>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReportQuery: Send + Sync {
    async fn dashboard_stats(&self) -> Result<DashboardStats, Error>;

    async fn volunteer_export(&self) -> Result<VolunteerExport, Error>;

    async fn guest_export(&self) -> Result<Vec<Guest>, Error>;

    async fn employee_export(&self) -> Result<EmployeeExport, Error>;
}
