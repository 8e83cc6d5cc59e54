//! Mutex-guarded tables implementing the repository ports.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use mockable::Clock;

use crate::domain::ports::{EmployeeRepository, GuestRepository, VolunteerRepository};
use crate::domain::{
    DayWindow, Employee, EmployeeAction, EmployeeId, EmployeeLog, EmployeeLogId, Guest, GuestId,
    NewEmployee, NewGuest, NewVolunteer, NewVolunteerLog, Volunteer, VolunteerId, VolunteerLog,
    VolunteerLogId, VolunteerUpdate,
};

/// One record kind keyed by its raw id.
///
/// Ids come from a counter starting at 1 that never rewinds, so deleted ids
/// are never handed out again. `BTreeMap` ordering by id is creation order.
#[derive(Debug)]
struct Table<T> {
    next_id: u64,
    rows: BTreeMap<u64, T>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            next_id: 1,
            rows: BTreeMap::new(),
        }
    }
}

impl<T: Clone> Table<T> {
    fn insert_with(&mut self, build: impl FnOnce(u64) -> T) -> T {
        let id = self.next_id;
        self.next_id += 1;
        let row = build(id);
        self.rows.insert(id, row.clone());
        row
    }

    fn get(&self, id: u64) -> Option<T> {
        self.rows.get(&id).cloned()
    }

    fn all(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }

    fn matching(&self, keep: impl Fn(&T) -> bool) -> Vec<T> {
        self.rows.values().filter(|row| keep(row)).cloned().collect()
    }

    fn remove(&mut self, id: u64) -> bool {
        self.rows.remove(&id).is_some()
    }
}

#[derive(Debug, Default)]
struct Tables {
    volunteers: Table<Volunteer>,
    volunteer_logs: Table<VolunteerLog>,
    guests: Table<Guest>,
    employees: Table<Employee>,
    employee_logs: Table<EmployeeLog>,
}

/// Process-local store for every record kind.
///
/// Each operation holds one lock for its whole duration, so single calls are
/// atomic. Sequences of calls are not coordinated.
pub struct InMemoryStore {
    clock: Arc<dyn Clock>,
    tables: Mutex<Tables>,
}

impl InMemoryStore {
    /// Create an empty store stamping records with `clock`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            tables: Mutex::new(Tables::default()),
        }
    }

    fn tables(&self) -> MutexGuard<'_, Tables> {
        // A poisoned lock still guards usable tables.
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn today(&self) -> DayWindow {
        DayWindow::today(self.clock.as_ref())
    }
}

impl VolunteerRepository for InMemoryStore {
    fn create_volunteer(&self, draft: NewVolunteer) -> Volunteer {
        let now = self.clock.utc();
        self.tables()
            .volunteers
            .insert_with(|id| draft.into_volunteer(VolunteerId::new(id), now))
    }

    fn find_volunteer(&self, id: VolunteerId) -> Option<Volunteer> {
        self.tables().volunteers.get(id.get())
    }

    fn list_volunteers(&self) -> Vec<Volunteer> {
        self.tables().volunteers.all()
    }

    fn update_volunteer(&self, id: VolunteerId, update: &VolunteerUpdate) -> Option<Volunteer> {
        let mut tables = self.tables();
        let volunteer = tables.volunteers.rows.get_mut(&id.get())?;
        update.merge_into(volunteer);
        Some(volunteer.clone())
    }

    fn delete_volunteer(&self, id: VolunteerId) -> bool {
        let mut tables = self.tables();
        if !tables.volunteers.remove(id.get()) {
            return false;
        }
        tables
            .volunteer_logs
            .rows
            .retain(|_, log| log.volunteer_id != id);
        true
    }

    fn append_volunteer_log(&self, draft: NewVolunteerLog) -> VolunteerLog {
        let now = self.clock.utc();
        self.tables()
            .volunteer_logs
            .insert_with(|id| draft.into_log(VolunteerLogId::new(id), now))
    }

    fn list_volunteer_logs(&self, volunteer_id: Option<VolunteerId>) -> Vec<VolunteerLog> {
        let tables = self.tables();
        match volunteer_id {
            Some(volunteer_id) => tables
                .volunteer_logs
                .matching(|log| log.volunteer_id == volunteer_id),
            None => tables.volunteer_logs.all(),
        }
    }

    fn delete_volunteer_log(&self, id: VolunteerLogId) -> bool {
        self.tables().volunteer_logs.remove(id.get())
    }
}

impl GuestRepository for InMemoryStore {
    fn create_guest(&self, draft: NewGuest) -> Guest {
        let now = self.clock.utc();
        self.tables()
            .guests
            .insert_with(|id| draft.into_guest(GuestId::new(id), now))
    }

    fn find_guest(&self, id: GuestId) -> Option<Guest> {
        self.tables().guests.get(id.get())
    }

    fn list_guests(&self) -> Vec<Guest> {
        self.tables().guests.all()
    }

    fn todays_guests(&self) -> Vec<Guest> {
        let today = self.today();
        self.tables()
            .guests
            .matching(|guest| today.contains(guest.visited_at))
    }

    fn delete_guest(&self, id: GuestId) -> bool {
        self.tables().guests.remove(id.get())
    }
}

impl EmployeeRepository for InMemoryStore {
    fn create_employee(&self, draft: NewEmployee) -> Employee {
        let now = self.clock.utc();
        self.tables()
            .employees
            .insert_with(|id| draft.into_employee(EmployeeId::new(id), now))
    }

    fn find_employee(&self, id: EmployeeId) -> Option<Employee> {
        self.tables().employees.get(id.get())
    }

    fn list_employees(&self) -> Vec<Employee> {
        self.tables().employees.all()
    }

    fn delete_employee(&self, id: EmployeeId) -> bool {
        let mut tables = self.tables();
        if !tables.employees.remove(id.get()) {
            return false;
        }
        tables
            .employee_logs
            .rows
            .retain(|_, log| log.employee_id != id);
        true
    }

    fn append_employee_log(&self, employee_id: EmployeeId, action: EmployeeAction) -> EmployeeLog {
        let timestamp = self.clock.utc();
        self.tables().employee_logs.insert_with(|id| EmployeeLog {
            id: EmployeeLogId::new(id),
            employee_id,
            action,
            timestamp,
        })
    }

    fn list_employee_logs(&self, employee_id: Option<EmployeeId>) -> Vec<EmployeeLog> {
        let tables = self.tables();
        match employee_id {
            Some(employee_id) => tables
                .employee_logs
                .matching(|log| log.employee_id == employee_id),
            None => tables.employee_logs.all(),
        }
    }

    fn todays_employee_logs(&self) -> Vec<EmployeeLog> {
        let today = self.today();
        self.tables()
            .employee_logs
            .matching(|log| today.contains(log.timestamp))
    }

    fn delete_employee_log(&self, id: EmployeeLogId) -> bool {
        self.tables().employee_logs.remove(id.get())
    }
}
