use std::sync::Arc;
use std::time::SystemTime;

use crate::clock;

/// Represents a stored value with its optional expiration time
#[derive(Debug, Clone)]
pub struct Entry {
    value: Arc<str>,
    expires_at: Option<SystemTime>,
}

impl Entry {
    /// Creates a new entry. `None` means the entry never expires.
    pub fn new(value: impl Into<Arc<str>>, expires_at: Option<SystemTime>) -> Self {
        Self {
            value: value.into(),
            expires_at,
        }
    }

    /// Returns the stored value as a string slice
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the deadline, or `None` if the entry never expires
    pub fn expires_at(&self) -> Option<SystemTime> {
        self.expires_at
    }

    /// Checks if this entry has expired, comparing whole seconds.
    ///
    /// A deadline that falls inside the current second is still live.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(clock::now_secs())
    }

    pub(crate) fn is_expired_at(&self, now_secs: i64) -> bool {
        match self.expires_at {
            Some(deadline) => clock::unix_secs(deadline) < now_secs,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn test_entry_without_deadline_never_expires() {
        let entry = Entry::new("test_value", None);

        assert_eq!(entry.value(), "test_value");
        assert_eq!(entry.expires_at(), None);
        assert!(!entry.is_expired());
        assert!(!entry.is_expired_at(i64::MAX));
    }

    #[test]
    fn test_entry_not_expired() {
        let entry = Entry::new(
            "test_value",
            Some(SystemTime::now() + Duration::from_secs(60)),
        );

        assert!(!entry.is_expired());
    }

    #[test]
    fn test_entry_expired() {
        let entry = Entry::new(
            "test_value",
            Some(SystemTime::now() - Duration::from_secs(2)),
        );

        assert!(entry.is_expired());
    }

    #[test]
    fn test_epoch_deadline_is_a_real_deadline() {
        let entry = Entry::new("v", Some(UNIX_EPOCH));
        assert!(entry.is_expired());
    }

    #[test]
    fn test_same_second_is_still_live() {
        let entry = Entry::new("v", Some(UNIX_EPOCH + Duration::from_millis(10_100)));

        assert!(!entry.is_expired_at(10));
        assert!(entry.is_expired_at(11));
    }
}
