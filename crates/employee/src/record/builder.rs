//! Initialization window for [`Employee`].

use std::fmt;
use std::sync::Arc;

use chrono::NaiveDate;
use mockable::{Clock, DefaultClock};

use super::Employee;
use crate::{LastName, ValidationError};

/// Collects the fields assigned while an [`Employee`] is being created.
///
/// The last name is init-only: it can be supplied here and nowhere else.
/// Validation runs in [`EmployeeBuilder::build`] in field order (id, last
/// name, birth date) and stops at the first failure.
#[must_use]
pub struct EmployeeBuilder {
    id: i32,
    first_name: Option<String>,
    last_name: Option<String>,
    birth_date: Option<NaiveDate>,
    clock: Option<Arc<dyn Clock>>,
}

impl EmployeeBuilder {
    pub(super) const fn new(id: i32) -> Self {
        Self {
            id,
            first_name: None,
            last_name: None,
            birth_date: None,
            clock: None,
        }
    }

    /// Set the given name.
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    /// Set the family name; it must not be blank.
    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    /// Set or clear the family name.
    ///
    /// `None` leaves the last name unset without validation.
    pub fn maybe_last_name(mut self, last_name: Option<impl Into<String>>) -> Self {
        self.last_name = last_name.map(Into::into);
        self
    }

    /// Set the birth date, validated against the builder's clock.
    pub const fn birth_date(mut self, birth_date: NaiveDate) -> Self {
        self.birth_date = Some(birth_date);
        self
    }

    /// Use `clock` instead of the system clock for "today".
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Validate the collected fields and create the employee.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] raised by the id, the last
    /// name, or the birth date.
    pub fn build(self) -> Result<Employee, ValidationError> {
        let Self {
            id,
            first_name,
            last_name,
            birth_date,
            clock: clock_override,
        } = self;

        let clock = clock_override.unwrap_or_else(|| Arc::new(DefaultClock) as Arc<dyn Clock>);
        let mut employee = Employee::with_clock(id, clock)?;
        employee.first_name = first_name;
        employee.last_name = last_name.map(LastName::new).transpose()?;
        if let Some(date) = birth_date {
            employee.set_birth_date(date)?;
        }
        Ok(employee)
    }
}

impl fmt::Debug for EmployeeBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmployeeBuilder")
            .field("id", &self.id)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("birth_date", &self.birth_date)
            .finish_non_exhaustive()
    }
}
