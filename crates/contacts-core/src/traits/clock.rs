// # Clock Trait
//
// Defines where "today" comes from.
//
// ## Purpose
//
// The upcoming birthday query is relative to the current date. Taking the
// date from a trait object keeps the assistant deterministic under test:
// production uses `SystemClock`, tests pin the date with `FixedClock`.

use chrono::{Local, NaiveDate};

/// Source of the current date
pub trait Clock: Send + Sync {
    /// Today's date
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the local system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock that always returns the same date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        assert_eq!(FixedClock(date).today(), date);
    }
}
