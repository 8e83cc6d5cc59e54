//! Driving port for employee reads.

use async_trait::async_trait;

use crate::domain::{Employee, EmployeeDaySummary, EmployeeLog, Error};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeQuery: Send + Sync {
    async fn list(&self) -> Result<Vec<Employee>, Error>;

    /// Clock entries recorded during the current local day.
    async fn todays_logs(&self) -> Result<Vec<EmployeeLog>, Error>;

    /// Derived clock status and worked minutes for every employee today.
    async fn todays_summary(&self) -> Result<Vec<EmployeeDaySummary>, Error>;
}
