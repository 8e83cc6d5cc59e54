//! Demonstration roster seeded at startup when enabled.

use tracing::info;

use crate::domain::ports::{EmployeeRepository, VolunteerRepository};
use crate::domain::{NewEmployee, NewVolunteer, RecordValidationError};

const VOLUNTEERS: [(&str, &str); 5] = [
    ("Sarah Johnson", "Regular Volunteer"),
    ("Mike Chen", "Team Leader"),
    ("Anna Lopez", "New Volunteer"),
    ("David Kim", "Regular Volunteer"),
    ("Lisa Wong", "Coordinator"),
];

const EMPLOYEES: [(&str, &str); 3] = [
    ("John Doe", "Manager"),
    ("Jane Smith", "Coordinator"),
    ("David Brown", "Assistant"),
];

/// Insert the sample volunteers and employees.
///
/// Records are created directly in the store, so no sync snapshot is pushed.
pub fn seed_sample_roster<S>(store: &S) -> Result<(), RecordValidationError>
where
    S: VolunteerRepository + EmployeeRepository,
{
    for (name, role) in VOLUNTEERS {
        store.create_volunteer(NewVolunteer::try_new(name, role, None)?);
    }
    for (name, role) in EMPLOYEES {
        store.create_employee(NewEmployee::try_new(name, role, Some(true))?);
    }
    info!(
        volunteers = VOLUNTEERS.len(),
        employees = EMPLOYEES.len(),
        "seeded sample roster"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outbound::memory::InMemoryStore;
    use crate::test_support::MutableClock;
    use chrono::Utc;
    use std::sync::Arc;

    #[test]
    fn seeds_five_volunteers_and_three_active_employees() {
        let store = InMemoryStore::new(Arc::new(MutableClock::new(Utc::now())));
        seed_sample_roster(&store).expect("seed roster");

        let volunteers = store.list_volunteers();
        assert_eq!(volunteers.len(), 5);
        assert_eq!(volunteers[1].name, "Mike Chen");
        assert!(volunteers.iter().all(|volunteer| !volunteer.is_checked_in));

        let employees = store.list_employees();
        assert_eq!(employees.len(), 3);
        assert!(employees.iter().all(|employee| employee.is_active));
    }
}
