//! Identity newtypes for the employee record.
//!
//! Purpose: keep the id and last name invariants in the types so the
//! aggregate never holds an unchecked value.

use std::fmt;

use crate::ValidationError;

/// Positive employee identifier.
///
/// ## Invariants
/// - The wrapped value is strictly greater than zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EmployeeId(i32);

impl EmployeeId {
    /// Validate and construct an [`EmployeeId`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NonPositiveId`] when `raw` is zero or
    /// negative.
    ///
    /// # Examples
    ///
    /// ```
    /// use employee::EmployeeId;
    ///
    /// assert_eq!(EmployeeId::new(101).map(EmployeeId::get), Ok(101));
    /// assert!(EmployeeId::new(0).is_err());
    /// ```
    pub const fn new(raw: i32) -> Result<Self, ValidationError> {
        if raw <= 0 {
            return Err(ValidationError::NonPositiveId { value: raw });
        }
        Ok(Self(raw))
    }

    /// Access the raw integer value.
    #[must_use]
    #[rustfmt::skip]
    pub const fn get(self) -> i32 { self.0 }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<EmployeeId> for i32 {
    fn from(value: EmployeeId) -> Self {
        value.0
    }
}

impl TryFrom<i32> for EmployeeId {
    type Error = ValidationError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Family name of an employee.
///
/// ## Invariants
/// - Non-empty once trimmed of whitespace. The text, including any
///   surrounding whitespace, is kept as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LastName(String);

impl LastName {
    /// Validate and construct a [`LastName`] from owned input.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::BlankLastName`] when the value is empty or
    /// whitespace-only.
    pub fn new(last_name: impl Into<String>) -> Result<Self, ValidationError> {
        Self::from_owned(last_name.into())
    }

    fn from_owned(last_name: String) -> Result<Self, ValidationError> {
        if last_name.trim().is_empty() {
            return Err(ValidationError::BlankLastName);
        }
        Ok(Self(last_name))
    }

    /// Borrow the name as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for LastName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for LastName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<LastName> for String {
    fn from(value: LastName) -> Self {
        value.0
    }
}

impl TryFrom<String> for LastName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}
