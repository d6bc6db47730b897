//! Test data factories for creating valid test fixtures.
//!
//! Each factory function creates a complete, valid object with sensible defaults.
//! Use the closure parameter to override specific fields as needed.

use chrono::NaiveDateTime;

use crate::domain::entities::waitlist_entry::{WaitlistEntry, WaitlistStatus};

/// Create a test waitlist entry with sensible defaults.
pub fn create_test_entry(overrides: impl FnOnce(&mut WaitlistEntry)) -> WaitlistEntry {
    let mut entry = WaitlistEntry {
        id: 1,
        email: "user@example.com".to_string(),
        status: WaitlistStatus::Pending,
        created_at: test_datetime(),
    };
    overrides(&mut entry);
    entry
}

/// Fixed timestamp for reproducible tests.
pub fn test_datetime() -> NaiveDateTime {
    chrono::DateTime::from_timestamp(1_735_689_600, 0)
        .unwrap()
        .naive_utc()
}
