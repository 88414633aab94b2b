//! Free-form key/value attributes attached to an employee.

use std::collections::BTreeMap;

use tracing::debug;

/// Ordinal string map of additional employee attributes.
///
/// ## Invariants
/// - No key maps to an absent value; absence is represented by removal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata(BTreeMap<String, String>);

impl Metadata {
    /// Look up the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Insert or overwrite `key`, or remove it when `value` is `None`.
    ///
    /// Removing a key that is not present is a no-op.
    ///
    /// # Examples
    ///
    /// ```
    /// use employee::Metadata;
    ///
    /// let mut metadata = Metadata::default();
    /// metadata.set("phone", Some("+7-123-456-78-90"));
    /// assert_eq!(metadata.get("phone"), Some("+7-123-456-78-90"));
    ///
    /// metadata.set("phone", None::<String>);
    /// assert_eq!(metadata.get("phone"), None);
    /// ```
    pub fn set(&mut self, key: impl Into<String>, value: Option<impl Into<String>>) {
        let owned_key = key.into();
        match value {
            Some(new_value) => {
                self.0.insert(owned_key, new_value.into());
            }
            None => {
                if self.0.remove(&owned_key).is_some() {
                    debug!(key = %owned_key, "removed employee metadata entry");
                }
            }
        }
    }

    /// Whether `key` has a value.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no entries are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate entries in ordinal key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }
}
