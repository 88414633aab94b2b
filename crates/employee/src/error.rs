//! Error types for the employee crate.
//!
//! Every precondition violation surfaces as a [`ValidationError`] at the
//! point of the offending call. Failed calls leave the employee untouched.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors returned when an input violates an employee precondition.
///
/// Each variant maps to exactly one field; see [`ValidationError::field`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The employee id was zero or negative.
    #[error("employee id must be positive, got {value}")]
    NonPositiveId {
        /// The rejected id.
        value: i32,
    },

    /// A last name was supplied but is empty or whitespace-only.
    #[error("last name must not be empty or whitespace")]
    BlankLastName,

    /// The birth date lies after the current day.
    #[error("birth date {date} is in the future (today is {today})")]
    BirthDateInFuture {
        /// The rejected birth date.
        date: NaiveDate,
        /// The current day according to the employee's clock.
        today: NaiveDate,
    },

    /// The birth date falls before the earliest accepted year.
    #[error("birth date {date} is before the year {min_year}")]
    BirthDateTooEarly {
        /// The rejected birth date.
        date: NaiveDate,
        /// Earliest accepted birth year.
        min_year: i32,
    },
}

impl ValidationError {
    /// Name of the field the error refers to.
    ///
    /// # Examples
    ///
    /// ```
    /// use employee::ValidationError;
    ///
    /// let err = ValidationError::NonPositiveId { value: 0 };
    /// assert_eq!(err.field(), "id");
    /// ```
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::NonPositiveId { .. } => "id",
            Self::BlankLastName => "last_name",
            Self::BirthDateInFuture { .. } | Self::BirthDateTooEarly { .. } => "birth_date",
        }
    }
}
