//! Shared fixtures for contract tests
//!
//! Dates here are chosen around June 2024, where 2024-06-10 is a Monday.

#![allow(dead_code)]

use chrono::NaiveDate;
use contacts_core::{Assistant, AssistantConfig, BirthdayConfig, ContactStore, FixedClock};

/// Build a date, panicking on invalid input
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// Monday 2024-06-10
pub fn monday() -> NaiveDate {
    date(2024, 6, 10)
}

/// Store holding one contact per `(name, birthday)` pair, in order
pub fn store_with_birthdays(entries: &[(&str, &str)]) -> ContactStore {
    let mut store = ContactStore::new();
    for (name, birthday) in entries {
        store.add_or_update(name, None).expect("add succeeds");
        store.set_birthday(name, birthday).expect("birthday is valid");
    }
    store
}

/// Names of the contacts reported by an upcoming birthday query
pub fn names(upcoming: &[contacts_core::UpcomingBirthday]) -> Vec<&str> {
    upcoming.iter().map(|u| u.name.as_str()).collect()
}

/// Assistant pinned to `today`
pub fn assistant_on(today: NaiveDate, shift_weekends: bool) -> Assistant {
    let config = AssistantConfig::new().with_birthdays(BirthdayConfig {
        window_days: 7,
        shift_weekends,
    });
    Assistant::new(config, Box::new(FixedClock(today))).expect("config is valid")
}
