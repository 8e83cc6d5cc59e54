//! Driving port for employee roster changes and clock entries.

use async_trait::async_trait;

use crate::domain::{Employee, EmployeeId, EmployeeLog, Error, NewEmployee};

/// Employee mutations exposed to inbound adapters.
///
/// Clocking in or out always appends a log; repeated entries of the same
/// kind are accepted.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeCommand: Send + Sync {
    async fn create(&self, draft: NewEmployee) -> Result<Employee, Error>;

    /// Delete an employee and its logs.
    async fn delete(&self, id: EmployeeId) -> Result<(), Error>;

    async fn clock_in(&self, id: EmployeeId) -> Result<EmployeeLog, Error>;

    async fn clock_out(&self, id: EmployeeId) -> Result<EmployeeLog, Error>;
}
