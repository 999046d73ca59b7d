// # Record Fields
//
// Independently validated value types that make up a contact record.
//
// Each type can only be built through `parse`, so a value that exists is
// always valid:
// - `Name`: non-empty
// - `Phone`: exactly `PHONE_DIGITS` ASCII digits
// - `Birthday`: a real calendar date written as `DD.MM.YYYY`

use std::fmt;

use chrono::NaiveDate;

use crate::error::{Error, Result};

/// Number of digits a phone number must have
pub const PHONE_DIGITS: usize = 10;

/// Display format for birthdays
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// Contact name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    /// Parse a contact name
    pub fn parse(value: &str) -> Result<Self> {
        if value.trim().is_empty() {
            return Err(Error::validation("Name cannot be empty."));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Phone number
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Parse a phone number
    ///
    /// Accepts exactly [`PHONE_DIGITS`] ASCII digits, nothing else.
    pub fn parse(value: &str) -> Result<Self> {
        if value.len() != PHONE_DIGITS || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::validation(format!(
                "Phone number must be {} digits.",
                PHONE_DIGITS
            )));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Birthday date
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday written as `DD.MM.YYYY`
    ///
    /// Day and month may have one or two digits, the year must have four.
    /// Impossible dates such as `31.04.2024` or `29.02.2023` are rejected.
    pub fn parse(value: &str) -> Result<Self> {
        let invalid = || Error::validation("Invalid date format. Use DD.MM.YYYY");

        let mut parts = value.split('.');
        let (Some(day), Some(month), Some(year), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };

        let numeric = |part: &str, min: usize, max: usize| {
            (min..=max).contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
        };
        if !numeric(day, 1, 2) || !numeric(month, 1, 2) || !numeric(year, 4, 4) {
            return Err(invalid());
        }

        let day: u32 = day.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        if year < 1 {
            return Err(invalid());
        }

        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(invalid)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for Birthday {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}
