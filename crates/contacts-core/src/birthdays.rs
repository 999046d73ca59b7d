//! Upcoming birthday computation
//!
//! Given a reference date, a birthday is "upcoming" when its next
//! occurrence falls inside the inclusive window
//! `reference ..= reference + days`.
//!
//! ## Rules
//!
//! 1. The occurrence is built in the reference year.
//! 2. Feb 29 resolves to Feb 28 in non-leap years.
//! 3. With weekend shift enabled, Saturday and Sunday move to the next Monday.
//! 4. If the (shifted) occurrence is already before the reference date, the
//!    occurrence in the following year is used instead, so late-December
//!    reference dates still see early-January birthdays. With the weekend
//!    shift, a late-December occurrence of the previous year that moves into
//!    January counts as well.
//! 5. The window test runs after the shift: a birthday shifted out of the
//!    window is not reported.

use std::fmt;

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::record::{BIRTHDAY_FORMAT, Birthday};

/// Default window length in days
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// Parameters of the upcoming birthday query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthdayWindow {
    /// Length of the window in days, counted from the reference date
    pub days: u32,
    /// Move weekend occurrences to the following Monday
    pub shift_weekends: bool,
}

impl BirthdayWindow {
    /// Create a window of `days` days without weekend shift
    pub fn new(days: u32) -> Self {
        Self {
            days,
            shift_weekends: false,
        }
    }

    /// Enable or disable the weekend shift
    pub fn with_weekend_shift(mut self, shift_weekends: bool) -> Self {
        self.shift_weekends = shift_weekends;
        self
    }

    /// Last day of the window starting at `reference`
    pub fn end(&self, reference: NaiveDate) -> NaiveDate {
        reference
            .checked_add_days(Days::new(u64::from(self.days)))
            .unwrap_or(NaiveDate::MAX)
    }

    /// Date on which `birthday` should be celebrated, if it is inside the
    /// window starting at `reference`
    pub fn celebration_date(&self, birthday: &Birthday, reference: NaiveDate) -> Option<NaiveDate> {
        let date = next_occurrence(birthday.date(), reference, self.shift_weekends)?;
        (date <= self.end(reference)).then_some(date)
    }
}

impl Default for BirthdayWindow {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_DAYS)
    }
}

/// A contact whose birthday falls inside the window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    pub date: NaiveDate,
}

impl UpcomingBirthday {
    /// Date rendered as `DD.MM.YYYY`
    pub fn date_string(&self) -> String {
        self.date.format(BIRTHDAY_FORMAT).to_string()
    }
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.date_string())
    }
}

/// Occurrence of `birthday` in `year`, with Feb 29 mapped to Feb 28 in
/// non-leap years
///
/// Returns `None` only when `year` is outside chrono's supported range.
pub fn occurrence_in_year(birthday: NaiveDate, year: i32) -> Option<NaiveDate> {
    birthday.with_year(year).or_else(|| {
        // with_year only fails for Feb 29 into a non-leap year
        (birthday.month() == 2 && birthday.day() == 29)
            .then(|| NaiveDate::from_ymd_opt(year, 2, 28))
            .flatten()
    })
}

/// Move a Saturday or Sunday to the following Monday
pub fn shift_off_weekend(date: NaiveDate) -> NaiveDate {
    let days = match date.weekday() {
        Weekday::Sat => 2,
        Weekday::Sun => 1,
        _ => return date,
    };
    date.checked_add_days(Days::new(days)).unwrap_or(date)
}

/// First occurrence of `birthday` on or after `reference`
pub fn next_occurrence(birthday: NaiveDate, reference: NaiveDate, shift_weekends: bool) -> Option<NaiveDate> {
    let celebrate = |year: i32| {
        occurrence_in_year(birthday, year).map(|date| {
            if shift_weekends {
                shift_off_weekend(date)
            } else {
                date
            }
        })
    };

    // A late-December weekend birthday can be celebrated in January
    let first_year = if shift_weekends {
        reference.year() - 1
    } else {
        reference.year()
    };

    (first_year..=reference.year() + 1)
        .filter_map(|year| celebrate(year))
        .find(|date| *date >= reference)
}
