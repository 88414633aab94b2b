//! Seniority classification derived from age.

use std::fmt;

/// Youngest age classified as [`EmployeeStatus::Middle`].
pub const MIDDLE_MIN_AGE: i32 = 25;
/// Oldest age classified as [`EmployeeStatus::Middle`].
pub const MIDDLE_MAX_AGE: i32 = 40;

/// Seniority band of an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmployeeStatus {
    /// Younger than [`MIDDLE_MIN_AGE`], including negative ages.
    Junior,
    /// Between [`MIDDLE_MIN_AGE`] and [`MIDDLE_MAX_AGE`] inclusive.
    Middle,
    /// Older than [`MIDDLE_MAX_AGE`].
    Senior,
}

impl EmployeeStatus {
    /// Classify an age in completed years.
    ///
    /// # Examples
    ///
    /// ```
    /// use employee::EmployeeStatus;
    ///
    /// assert_eq!(EmployeeStatus::from_age(24), EmployeeStatus::Junior);
    /// assert_eq!(EmployeeStatus::from_age(40), EmployeeStatus::Middle);
    /// assert_eq!(EmployeeStatus::from_age(41), EmployeeStatus::Senior);
    /// ```
    #[must_use]
    pub const fn from_age(age: i32) -> Self {
        match age {
            i32::MIN..MIDDLE_MIN_AGE => Self::Junior,
            MIDDLE_MIN_AGE..=MIDDLE_MAX_AGE => Self::Middle,
            _ => Self::Senior,
        }
    }

    /// Label used in summaries.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Junior => "Junior",
            Self::Middle => "Middle",
            Self::Senior => "Senior",
        }
    }
}

impl fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
