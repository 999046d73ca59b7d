// # Contact Record
//
// A record holds one contact: an immutable name, an ordered list of phones
// and an optional birthday. All field validation happens in `fields`; the
// record only decides how validated values are combined.
//
// ## Atomicity
//
// Every mutating method validates its input before touching the record, so a
// failed call leaves the record exactly as it was.

pub mod fields;

use std::fmt;

pub use fields::{BIRTHDAY_FORMAT, Birthday, Name, PHONE_DIGITS, Phone};

use crate::error::{Error, Result};

/// A single contact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday
    pub fn new(name: &str) -> Result<Self> {
        Ok(Self::with_name(Name::parse(name)?))
    }

    pub(crate) fn with_name(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone
    ///
    /// Duplicates are allowed.
    pub fn add_phone(&mut self, phone: &str) -> Result<()> {
        let phone = Phone::parse(phone)?;
        self.push_phone(phone);
        Ok(())
    }

    pub(crate) fn push_phone(&mut self, phone: Phone) {
        self.phones.push(phone);
    }

    /// Find a phone by its digits
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Remove the first matching phone
    pub fn remove_phone(&mut self, phone: &str) -> Result<()> {
        let index = self.phone_index(phone)?;
        self.phones.remove(index);
        Ok(())
    }

    /// Replace `old` with `new`
    ///
    /// `old` is removed and `new` appended at the end of the list. Fails with
    /// `NotFound` when `old` is missing and with `Validation` when `new` is
    /// malformed; in both cases the phone list is untouched.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<()> {
        let index = self.phone_index(old)?;
        let new = Phone::parse(new)?;
        self.phones.remove(index);
        self.phones.push(new);
        Ok(())
    }

    /// Parse and store a `DD.MM.YYYY` birthday, replacing any previous one
    pub fn set_birthday(&mut self, value: &str) -> Result<()> {
        self.birthday = Some(Birthday::parse(value)?);
        Ok(())
    }

    fn phone_index(&self, phone: &str) -> Result<usize> {
        self.phones
            .iter()
            .position(|p| p.as_str() == phone)
            .ok_or_else(Error::phone_not_found)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        let birthday = self
            .birthday
            .map(|b| b.to_string())
            .unwrap_or_else(|| "N/A".to_string());

        write!(
            f,
            "Contact name: {}, phones: {}, birthday: {}",
            self.name, phones, birthday
        )
    }
}
