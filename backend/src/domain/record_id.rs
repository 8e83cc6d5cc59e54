//! Synthetic integer identifiers assigned by the entity store.
//!
//! Each record kind has its own identifier newtype so a volunteer id can never
//! be passed where an employee id is expected. Identifiers are assigned from a
//! per-kind counter starting at 1 and are never reused.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! define_record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Wrap a raw identifier value.
            #[must_use]
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            /// Return the raw identifier value.
            #[must_use]
            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_record_id! {
    /// Identifier of a [`crate::domain::Volunteer`].
    VolunteerId
}

define_record_id! {
    /// Identifier of a [`crate::domain::VolunteerLog`].
    VolunteerLogId
}

define_record_id! {
    /// Identifier of a [`crate::domain::Guest`].
    GuestId
}

define_record_id! {
    /// Identifier of a [`crate::domain::Employee`].
    EmployeeId
}

define_record_id! {
    /// Identifier of a [`crate::domain::EmployeeLog`].
    EmployeeLogId
}
