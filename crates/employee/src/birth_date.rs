//! Birth date validation and completed-years age.

use std::fmt;

use chrono::{Datelike, Months, NaiveDate};

use crate::ValidationError;

/// Earliest accepted birth year.
pub const MIN_BIRTH_YEAR: i32 = 1900;

/// Calendar birth date of an employee.
///
/// ## Invariants
/// - Year is at least [`MIN_BIRTH_YEAR`] and the date is not after the day
///   it was validated against. The default value (the Unix epoch) is the
///   placeholder used before a birth date is assigned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BirthDate(NaiveDate);

impl BirthDate {
    /// Validate `date` against `today`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::BirthDateInFuture`] when `date` is after
    /// `today`, then [`ValidationError::BirthDateTooEarly`] when its year is
    /// before [`MIN_BIRTH_YEAR`].
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use employee::BirthDate;
    ///
    /// let today = NaiveDate::from_ymd_opt(2024, 5, 15).unwrap_or_default();
    /// let born = NaiveDate::from_ymd_opt(1990, 5, 15).unwrap_or_default();
    /// let birth_date = BirthDate::new(born, today).map(|value| value.age_on(today));
    /// assert_eq!(birth_date, Ok(34));
    /// ```
    pub fn new(date: NaiveDate, today: NaiveDate) -> Result<Self, ValidationError> {
        if date > today {
            return Err(ValidationError::BirthDateInFuture { date, today });
        }
        if date.year() < MIN_BIRTH_YEAR {
            return Err(ValidationError::BirthDateTooEarly {
                date,
                min_year: MIN_BIRTH_YEAR,
            });
        }
        Ok(Self(date))
    }

    /// The underlying calendar date.
    #[must_use]
    #[rustfmt::skip]
    pub const fn date(self) -> NaiveDate { self.0 }

    /// Completed years between the birth date and `today`.
    ///
    /// The year difference is reduced by one when the birth date falls after
    /// `today` moved back by that many years, so a birthday not yet reached
    /// this year does not count. Anniversaries of 29 February land on
    /// 28 February in common years.
    #[must_use]
    pub fn age_on(self, today: NaiveDate) -> i32 {
        let age = today.year() - self.0.year();
        let birthday_pending =
            shift_back_years(today, age).is_some_and(|anniversary| self.0 > anniversary);
        if birthday_pending { age - 1 } else { age }
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<BirthDate> for NaiveDate {
    fn from(value: BirthDate) -> Self {
        value.0
    }
}

fn shift_back_years(day: NaiveDate, years: i32) -> Option<NaiveDate> {
    let months = Months::new(years.unsigned_abs().checked_mul(12)?);
    if years >= 0 {
        day.checked_sub_months(months)
    } else {
        day.checked_add_months(months)
    }
}
