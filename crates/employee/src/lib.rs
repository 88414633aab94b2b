//! Validated in-memory employee record.
//!
//! The crate models one staff member as a single value object with
//! constrained construction, an init-only last name, a memoized full name,
//! a free-form metadata bag, and age-derived seniority.
//!
//! # Overview
//!
//! - [`Employee::new`] and [`Employee::builder`] reject non-positive ids
//! - [`EmployeeBuilder::last_name`] is the only way to assign a last name
//! - [`Employee::set_birth_date`] re-validates on every assignment
//! - [`Employee::age`] and [`Employee::status`] follow a [`mockable::Clock`]
//! - [`Employee::full_name`] is computed once and then frozen
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use employee::{Employee, ValidationError};
//!
//! # fn main() -> Result<(), ValidationError> {
//! let mut employee = Employee::builder(101)
//!     .first_name("Ivan")
//!     .last_name("Petrov")
//!     .build()?;
//! employee.set("phone", Some("+7-123-456-78-90"));
//!
//! assert_eq!(employee.full_name(), "Ivan Petrov");
//! assert_eq!(employee.get("phone"), Some("+7-123-456-78-90"));
//! assert_eq!(employee.get("email"), None);
//!
//! let future = NaiveDate::from_ymd_opt(9999, 1, 1).unwrap_or_default();
//! assert!(employee.set_birth_date(future).is_err());
//! # Ok(())
//! # }
//! ```

mod birth_date;
mod error;
mod identity;
mod metadata;
mod record;
mod settings;
mod status;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use birth_date::{BirthDate, MIN_BIRTH_YEAR};
pub use error::ValidationError;
pub use identity::{EmployeeId, LastName};
pub use metadata::Metadata;
pub use record::{Employee, EmployeeBuilder};
pub use settings::SummarySettings;
pub use status::{EmployeeStatus, MIDDLE_MAX_AGE, MIDDLE_MIN_AGE};
