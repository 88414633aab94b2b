//! Employee aggregate record.
//!
//! Purpose: hold one staff member's identity, names, birth date, salary, and
//! free-form metadata, and derive age, status, and full name from them.
//!
//! Not safe for concurrent mutation: the full-name cache is a
//! [`std::cell::OnceCell`], so the type is not `Sync`. Callers sharing an
//! employee across threads must serialize access themselves.

mod builder;

use std::cell::OnceCell;
use std::fmt;
use std::sync::Arc;

use chrono::NaiveDate;
use mockable::{Clock, DefaultClock};
use rust_decimal::Decimal;
use tracing::debug;

pub use builder::EmployeeBuilder;

use crate::{
    BirthDate, EmployeeId, EmployeeStatus, LastName, Metadata, SummarySettings, ValidationError,
};

/// One staff member.
///
/// ## Invariants
/// - `id` is positive and never changes.
/// - `last_name` is only assigned through [`EmployeeBuilder`] and never
///   changes afterwards.
/// - `salary` is always zero.
/// - Every stored birth date passed validation at assignment time.
/// - The first call to [`Employee::full_name`] freezes its value.
///
/// # Examples
///
/// ```
/// use employee::{Employee, ValidationError};
///
/// # fn main() -> Result<(), ValidationError> {
/// let employee = Employee::builder(101)
///     .first_name("Ivan")
///     .last_name("Petrov")
///     .build()?;
/// assert_eq!(employee.full_name(), "Ivan Petrov");
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Employee {
    id: EmployeeId,
    first_name: Option<String>,
    last_name: Option<LastName>,
    birth_date: BirthDate,
    salary: Decimal,
    metadata: Metadata,
    full_name: OnceCell<String>,
    clock: Arc<dyn Clock>,
}

impl Employee {
    /// Create an employee with the given id using the system clock.
    ///
    /// Names are unset, metadata is empty, salary is zero, and the birth date
    /// holds the [`BirthDate::default`] placeholder. Until a birth date is
    /// set, [`Employee::age`] and [`Employee::status`] are derived from that
    /// placeholder and carry no meaning.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NonPositiveId`] when `id` is not positive.
    pub fn new(id: i32) -> Result<Self, ValidationError> {
        Self::with_clock(id, Arc::new(DefaultClock))
    }

    /// Create an employee whose notion of "today" comes from `clock`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NonPositiveId`] when `id` is not positive.
    pub fn with_clock(id: i32, clock: Arc<dyn Clock>) -> Result<Self, ValidationError> {
        let employee_id = EmployeeId::new(id)?;
        Ok(Self {
            id: employee_id,
            first_name: None,
            last_name: None,
            birth_date: BirthDate::default(),
            salary: Decimal::ZERO,
            metadata: Metadata::default(),
            full_name: OnceCell::new(),
            clock,
        })
    }

    /// Start the initialization window for an employee with the given id.
    ///
    /// The builder is the only place a last name can be assigned.
    pub const fn builder(id: i32) -> EmployeeBuilder {
        EmployeeBuilder::new(id)
    }

    /// Stable employee identifier.
    #[must_use]
    pub const fn id(&self) -> EmployeeId {
        self.id
    }

    /// Given name, if set.
    #[must_use]
    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    /// Replace the given name. Does not affect an already-read full name.
    pub fn set_first_name(&mut self, first_name: Option<impl Into<String>>) {
        self.first_name = first_name.map(Into::into);
    }

    /// Family name, if one was supplied at construction.
    #[must_use]
    pub const fn last_name(&self) -> Option<&LastName> {
        self.last_name.as_ref()
    }

    /// Stored birth date.
    #[must_use]
    pub const fn birth_date(&self) -> NaiveDate {
        self.birth_date.date()
    }

    /// Validate and store a new birth date.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::BirthDateInFuture`] or
    /// [`ValidationError::BirthDateTooEarly`]; the previous birth date is kept.
    pub fn set_birth_date(&mut self, date: NaiveDate) -> Result<(), ValidationError> {
        let today = self.today();
        let birth_date = BirthDate::new(date, today).inspect_err(|error| {
            debug!(employee_id = %self.id, %date, %error, "rejected birth date");
        })?;
        self.birth_date = birth_date;
        debug!(employee_id = %self.id, %date, "updated birth date");
        Ok(())
    }

    /// Completed years since the birth date, recomputed from the clock.
    #[must_use]
    pub fn age(&self) -> i32 {
        self.birth_date.age_on(self.today())
    }

    /// Seniority band for the current [`Employee::age`].
    #[must_use]
    pub fn status(&self) -> EmployeeStatus {
        EmployeeStatus::from_age(self.age())
    }

    /// `"{first} {last}"`, computed on first read and cached.
    ///
    /// Absent names render as the empty string. Later changes to the first
    /// name do not alter the cached value.
    #[must_use]
    pub fn full_name(&self) -> &str {
        self.full_name.get_or_init(|| {
            let full_name = format!(
                "{} {}",
                self.first_name().unwrap_or_default(),
                self.last_name.as_ref().map_or("", LastName::as_str),
            );
            debug!(employee_id = %self.id, %full_name, "memoized full name");
            full_name
        })
    }

    /// Current salary; always zero.
    #[must_use]
    pub const fn salary(&self) -> Decimal {
        self.salary
    }

    /// Look up a metadata value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.metadata.get(key)
    }

    /// Upsert a metadata value, or remove the key when `value` is `None`.
    pub fn set(&mut self, key: impl Into<String>, value: Option<impl Into<String>>) {
        self.metadata.set(key, value);
    }

    /// Read-only view of all metadata entries.
    #[must_use]
    pub const fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// One-line summary using the default [`SummarySettings`].
    #[must_use]
    pub fn describe(&self) -> String {
        self.describe_with(&SummarySettings::default())
    }

    /// One-line summary: id, full name, age, status, salary.
    ///
    /// Reading the full name here memoizes it like [`Employee::full_name`].
    #[must_use]
    pub fn describe_with(&self, settings: &SummarySettings) -> String {
        format!(
            "ID: {}, {}, Age: {}, Status: {}, Salary: {}",
            self.id,
            self.full_name(),
            self.age(),
            self.status(),
            settings.format_currency(self.salary),
        )
    }

    fn today(&self) -> NaiveDate {
        self.clock.local().date_naive()
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl fmt::Debug for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Employee")
            .field("id", &self.id)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("birth_date", &self.birth_date)
            .field("salary", &self.salary)
            .field("metadata", &self.metadata)
            .field("full_name", &self.full_name.get())
            .finish_non_exhaustive()
    }
}
