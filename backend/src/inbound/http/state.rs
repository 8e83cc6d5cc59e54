//! Shared HTTP adapter state.
//!
//! Handlers receive this through `actix_web::web::Data`, so they depend only
//! on driving ports and stay testable without a real store.

use std::sync::Arc;

use mockable::Clock;

use crate::domain::ports::{
    EmployeeCommand, EmployeeQuery, EmployeeRepository, GuestCommand, GuestQuery,
    GuestRepository, ReportQuery, SyncNotifier, VolunteerCommand, VolunteerQuery,
    VolunteerRepository,
};
use crate::domain::{EmployeeService, GuestService, ReportService, VolunteerService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub volunteers: Arc<dyn VolunteerCommand>,
    pub volunteers_query: Arc<dyn VolunteerQuery>,
    pub guests: Arc<dyn GuestCommand>,
    pub guests_query: Arc<dyn GuestQuery>,
    pub employees: Arc<dyn EmployeeCommand>,
    pub employees_query: Arc<dyn EmployeeQuery>,
    pub reports: Arc<dyn ReportQuery>,
}

impl HttpState {
    /// Wire every driving port to the domain services over a single store.
    pub fn over_store<S>(
        store: Arc<S>,
        notifier: Arc<dyn SyncNotifier>,
        clock: Arc<dyn Clock>,
    ) -> Self
    where
        S: VolunteerRepository + GuestRepository + EmployeeRepository + 'static,
    {
        let volunteers = Arc::new(VolunteerService::new(
            store.clone(),
            notifier.clone(),
            clock,
        ));
        let guests = Arc::new(GuestService::new(store.clone(), notifier.clone()));
        let employees = Arc::new(EmployeeService::new(store.clone(), notifier));
        let reports = Arc::new(ReportService::new(store.clone(), store.clone(), store));
        Self {
            volunteers: volunteers.clone(),
            volunteers_query: volunteers,
            guests: guests.clone(),
            guests_query: guests,
            employees: employees.clone(),
            employees_query: employees,
            reports,
        }
    }
}
