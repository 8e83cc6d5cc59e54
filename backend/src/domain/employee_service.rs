//! Employee domain service.
//!
//! Clock state is never stored; it is derived from today's logs whenever it
//! is read.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::attendance::{clock_status, paired_minutes};
use crate::domain::ports::{EmployeeCommand, EmployeeQuery, EmployeeRepository, SyncNotifier};
use crate::domain::sync::{SyncSnapshot, publish};
use crate::domain::{
    Employee, EmployeeAction, EmployeeDaySummary, EmployeeId, EmployeeLog, Error, NewEmployee,
};

const NOT_FOUND: &str = "Employee not found";

/// Employee service implementing [`EmployeeCommand`] and [`EmployeeQuery`].
#[derive(Clone)]
pub struct EmployeeService<R> {
    repo: Arc<R>,
    notifier: Arc<dyn SyncNotifier>,
}

impl<R> EmployeeService<R> {
    pub fn new(repo: Arc<R>, notifier: Arc<dyn SyncNotifier>) -> Self {
        Self { repo, notifier }
    }
}

impl<R> EmployeeService<R>
where
    R: EmployeeRepository,
{
    async fn sync(&self) {
        let snapshot = SyncSnapshot::Employees {
            employees: self.repo.list_employees(),
            logs: self.repo.list_employee_logs(None),
        };
        publish(self.notifier.as_ref(), snapshot).await;
    }

    async fn clock(&self, id: EmployeeId, action: EmployeeAction) -> Result<EmployeeLog, Error> {
        if self.repo.find_employee(id).is_none() {
            return Err(Error::not_found(NOT_FOUND));
        }
        let log = self.repo.append_employee_log(id, action);
        info!(employee_id = %id, action = action.as_str(), "employee clock entry recorded");
        self.sync().await;
        Ok(log)
    }
}

#[async_trait]
impl<R> EmployeeCommand for EmployeeService<R>
where
    R: EmployeeRepository,
{
    async fn create(&self, draft: NewEmployee) -> Result<Employee, Error> {
        let employee = self.repo.create_employee(draft);
        info!(employee_id = %employee.id, "employee added");
        self.sync().await;
        Ok(employee)
    }

    async fn delete(&self, id: EmployeeId) -> Result<(), Error> {
        if !self.repo.delete_employee(id) {
            return Err(Error::not_found(NOT_FOUND));
        }
        info!(employee_id = %id, "employee deleted");
        self.sync().await;
        Ok(())
    }

    async fn clock_in(&self, id: EmployeeId) -> Result<EmployeeLog, Error> {
        self.clock(id, EmployeeAction::ClockIn).await
    }

    async fn clock_out(&self, id: EmployeeId) -> Result<EmployeeLog, Error> {
        self.clock(id, EmployeeAction::ClockOut).await
    }
}

#[async_trait]
impl<R> EmployeeQuery for EmployeeService<R>
where
    R: EmployeeRepository,
{
    async fn list(&self) -> Result<Vec<Employee>, Error> {
        Ok(self.repo.list_employees())
    }

    async fn todays_logs(&self) -> Result<Vec<EmployeeLog>, Error> {
        Ok(self.repo.todays_employee_logs())
    }

    async fn todays_summary(&self) -> Result<Vec<EmployeeDaySummary>, Error> {
        let logs = self.repo.todays_employee_logs();
        let summaries = self
            .repo
            .list_employees()
            .into_iter()
            .map(|employee| {
                let own: Vec<EmployeeLog> = logs
                    .iter()
                    .filter(|log| log.employee_id == employee.id)
                    .cloned()
                    .collect();
                EmployeeDaySummary {
                    status: clock_status(&own),
                    worked_minutes: paired_minutes(&own),
                    employee,
                }
            })
            .collect();
        Ok(summaries)
    }
}

#[cfg(test)]
#[path = "employee_service_tests.rs"]
mod tests;
