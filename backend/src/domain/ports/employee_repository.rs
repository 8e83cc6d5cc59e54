//! Driven port for employee and clock log storage.

use crate::domain::{
    Employee, EmployeeAction, EmployeeId, EmployeeLog, EmployeeLogId, NewEmployee,
};

/// Storage of employees and their clock logs.
#[cfg_attr(test, mockall::automock)]
pub trait EmployeeRepository: Send + Sync {
    /// Store a new employee and return it with its assigned id.
    fn create_employee(&self, draft: NewEmployee) -> Employee;

    fn find_employee(&self, id: EmployeeId) -> Option<Employee>;

    /// All employees in creation order.
    fn list_employees(&self) -> Vec<Employee>;

    /// Delete an employee together with every log referencing it.
    ///
    /// Returns whether the employee existed.
    fn delete_employee(&self, id: EmployeeId) -> bool;

    /// Append a clock entry stamped with the current time.
    fn append_employee_log(&self, employee_id: EmployeeId, action: EmployeeAction) -> EmployeeLog;

    /// Logs in creation order, optionally restricted to one employee.
    fn list_employee_logs(&self, employee_id: Option<EmployeeId>) -> Vec<EmployeeLog>;

    /// Logs whose timestamp falls within the current local day.
    fn todays_employee_logs(&self) -> Vec<EmployeeLog>;

    /// Delete a single log entry. Returns whether it existed.
    fn delete_employee_log(&self, id: EmployeeLogId) -> bool;
}
