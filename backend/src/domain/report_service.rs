//! Dashboard counters and export snapshots.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{
    DashboardStats, EmployeeExport, EmployeeRepository, GuestRepository, ReportQuery,
    VolunteerExport, VolunteerRepository,
};
use crate::domain::{Error, Guest};

/// Read-only service implementing [`ReportQuery`] across every record kind.
#[derive(Clone)]
pub struct ReportService<V, G, E> {
    volunteers: Arc<V>,
    guests: Arc<G>,
    employees: Arc<E>,
}

impl<V, G, E> ReportService<V, G, E> {
    pub fn new(volunteers: Arc<V>, guests: Arc<G>, employees: Arc<E>) -> Self {
        Self {
            volunteers,
            guests,
            employees,
        }
    }
}

#[async_trait]
impl<V, G, E> ReportQuery for ReportService<V, G, E>
where
    V: VolunteerRepository,
    G: GuestRepository,
    E: EmployeeRepository,
{
    async fn dashboard_stats(&self) -> Result<DashboardStats, Error> {
        let volunteers = self
            .volunteers
            .list_volunteers()
            .iter()
            .filter(|volunteer| volunteer.is_checked_in)
            .count();
        let guests = self.guests.todays_guests().len();
        let employees = self
            .employees
            .list_employees()
            .iter()
            .filter(|employee| employee.is_active)
            .count();
        Ok(DashboardStats {
            volunteers,
            guests,
            employees,
        })
    }

    async fn volunteer_export(&self) -> Result<VolunteerExport, Error> {
        Ok(VolunteerExport {
            volunteers: self.volunteers.list_volunteers(),
            logs: self.volunteers.list_volunteer_logs(None),
        })
    }

    async fn guest_export(&self) -> Result<Vec<Guest>, Error> {
        Ok(self.guests.list_guests())
    }

    async fn employee_export(&self) -> Result<EmployeeExport, Error> {
        Ok(EmployeeExport {
            employees: self.employees.list_employees(),
            logs: self.employees.list_employee_logs(None),
        })
    }
}
