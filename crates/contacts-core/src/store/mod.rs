// # Contact Store
//
// In-memory collection of records keyed by contact name.
//
// ## Purpose
//
// The store is the only owner of records. Callers reach records through
// the operations below; there is no raw access to the underlying list.
//
// ## Ordering
//
// Records are kept in insertion order so `list_all` and
// `upcoming_birthdays` produce deterministic output. Deleting a record
// keeps the order of the remaining ones.
//
// ## Crash Behavior
//
// - Nothing is persisted; all contacts are lost when the process exits

use chrono::NaiveDate;
use tracing::debug;

use crate::birthdays::{BirthdayWindow, UpcomingBirthday};
use crate::error::{Error, Result};
use crate::record::{Birthday, Name, Phone, Record};

/// Result of [`ContactStore::add_or_update`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A new record was created
    Added,
    /// An existing record was reused
    Updated,
}

impl Outcome {
    /// User-facing message for the outcome
    pub fn message(&self) -> &'static str {
        match self {
            Self::Added => "Contact added.",
            Self::Updated => "Contact updated.",
        }
    }
}

/// Result of [`ContactStore::list_all`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactListing {
    /// The store holds no contacts
    Empty,
    /// Rendered records in insertion order
    Contacts(Vec<String>),
}

/// In-memory contact store
///
/// # Example
///
/// ```rust
/// use contacts_core::store::{ContactStore, Outcome};
///
/// let mut store = ContactStore::new();
/// assert_eq!(store.add_or_update("Alice", Some("1234567890")).unwrap(), Outcome::Added);
/// assert_eq!(store.add_or_update("Alice", None).unwrap(), Outcome::Updated);
///
/// let alice = store.find("Alice").unwrap();
/// assert_eq!(alice.phones().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ContactStore {
    records: Vec<Record>,
}

impl ContactStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of records in the store
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Create the contact if it is unknown, then append `phone` if given
    ///
    /// An empty `phone` is treated as absent. The name and phone are both
    /// validated before the store is touched, so a malformed phone never
    /// leaves behind a freshly created record.
    pub fn add_or_update(&mut self, name: &str, phone: Option<&str>) -> Result<Outcome> {
        let phone = phone
            .filter(|p| !p.is_empty())
            .map(Phone::parse)
            .transpose()?;

        let (record, outcome) = match self.position(name) {
            Some(index) => (&mut self.records[index], Outcome::Updated),
            None => {
                let record = Record::with_name(Name::parse(name)?);
                self.records.push(record);
                let last = self.records.len() - 1;
                (&mut self.records[last], Outcome::Added)
            }
        };

        if let Some(phone) = phone {
            record.push_phone(phone);
        }

        debug!(name, ?outcome, "Contact stored");
        Ok(outcome)
    }

    /// Look up a contact by name
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name().as_str() == name)
    }

    /// Remove a contact permanently
    pub fn delete(&mut self, name: &str) -> Result<()> {
        let index = self.position(name).ok_or_else(Error::contact_not_found)?;
        self.records.remove(index);
        debug!(name, "Contact deleted");
        Ok(())
    }

    /// Replace one of a contact's phones
    pub fn change_phone(&mut self, name: &str, old: &str, new: &str) -> Result<()> {
        self.record_mut(name)?.edit_phone(old, new)?;
        debug!(name, "Phone changed");
        Ok(())
    }

    /// Remove one of a contact's phones
    pub fn remove_phone(&mut self, name: &str, phone: &str) -> Result<()> {
        self.record_mut(name)?.remove_phone(phone)?;
        debug!(name, "Phone removed");
        Ok(())
    }

    /// Set a contact's birthday from a `DD.MM.YYYY` string
    pub fn set_birthday(&mut self, name: &str, value: &str) -> Result<()> {
        self.record_mut(name)?.set_birthday(value)?;
        debug!(name, "Birthday set");
        Ok(())
    }

    /// Get a contact's birthday
    ///
    /// Returns `Ok(None)` when the contact exists but has no birthday.
    pub fn get_birthday(&self, name: &str) -> Result<Option<&Birthday>> {
        self.find(name)
            .map(Record::birthday)
            .ok_or_else(Error::contact_not_found)
    }

    /// Render every contact in insertion order
    pub fn list_all(&self) -> ContactListing {
        if self.records.is_empty() {
            return ContactListing::Empty;
        }
        ContactListing::Contacts(self.records.iter().map(Record::to_string).collect())
    }

    /// Contacts whose birthday falls inside `window`, starting at `reference`
    ///
    /// Results follow store order; each carries the date the birthday will
    /// be celebrated on (after any weekend shift).
    pub fn upcoming_birthdays(&self, reference: NaiveDate, window: BirthdayWindow) -> Vec<UpcomingBirthday> {
        let upcoming: Vec<_> = self
            .records
            .iter()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let date = window.celebration_date(birthday, reference)?;
                Some(UpcomingBirthday {
                    name: record.name().to_string(),
                    date,
                })
            })
            .collect();

        debug!(
            %reference,
            days = window.days,
            shift_weekends = window.shift_weekends,
            found = upcoming.len(),
            "Computed upcoming birthdays"
        );
        upcoming
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name().as_str() == name)
    }

    fn record_mut(&mut self, name: &str) -> Result<&mut Record> {
        self.records
            .iter_mut()
            .find(|r| r.name().as_str() == name)
            .ok_or_else(Error::contact_not_found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_store_basic() {
        let mut store = ContactStore::new();

        // Initially empty
        assert!(store.is_empty());
        assert_eq!(store.list_all(), ContactListing::Empty);

        assert_eq!(store.add_or_update("Alice", Some("1234567890")).unwrap(), Outcome::Added);
        assert_eq!(store.len(), 1);

        let alice = store.find("Alice").unwrap();
        assert_eq!(alice.phones().len(), 1);
        assert_eq!(alice.phones()[0].as_str(), "1234567890");

        // Delete
        store.delete("Alice").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_or_update_appends_in_order() {
        let mut store = ContactStore::new();
        store.add_or_update("Alice", Some("1234567890")).unwrap();
        assert_eq!(
            store.add_or_update("Alice", Some("0987654321")).unwrap(),
            Outcome::Updated
        );

        let phones: Vec<_> = store
            .find("Alice")
            .unwrap()
            .phones()
            .iter()
            .map(Phone::as_str)
            .collect();
        assert_eq!(phones, ["1234567890", "0987654321"]);
    }

    #[test]
    fn test_add_without_phone() {
        let mut store = ContactStore::new();
        assert_eq!(store.add_or_update("Bob", None).unwrap(), Outcome::Added);
        assert_eq!(store.add_or_update("Bob", Some("")).unwrap(), Outcome::Updated);
        assert!(store.find("Bob").unwrap().phones().is_empty());
    }

    #[test]
    fn test_add_invalid_phone_creates_nothing() {
        let mut store = ContactStore::new();
        let err = store.add_or_update("Alice", Some("123")).unwrap_err();

        assert!(matches!(err, Error::Validation(_)));
        assert!(store.find("Alice").is_none());
    }

    #[test]
    fn test_unknown_contact_errors() {
        let mut store = ContactStore::new();
        assert!(matches!(store.delete("Bob"), Err(Error::NotFound(_))));
        assert!(matches!(
            store.change_phone("Bob", "1234567890", "0987654321"),
            Err(Error::NotFound(_))
        ));
        assert!(matches!(
            store.remove_phone("Bob", "1234567890"),
            Err(Error::NotFound(_))
        ));
        assert!(matches!(store.set_birthday("Bob", "01.01.2000"), Err(Error::NotFound(_))));
        assert!(matches!(store.get_birthday("Bob"), Err(Error::NotFound(_))));
        assert!(store.is_empty());
    }

    #[test]
    fn test_birthday_round_trip() {
        let mut store = ContactStore::new();
        store.add_or_update("Alice", None).unwrap();
        assert_eq!(store.get_birthday("Alice").unwrap(), None);

        store.set_birthday("Alice", "13.06.1990").unwrap();
        let rendered = store.get_birthday("Alice").unwrap().unwrap().to_string();
        assert_eq!(rendered, "13.06.1990");
        assert_eq!(
            Birthday::parse(&rendered).unwrap().date(),
            date(1990, 6, 13)
        );
    }

    #[test]
    fn test_delete_preserves_order() {
        let mut store = ContactStore::new();
        for name in ["Alice", "Bob", "Carol"] {
            store.add_or_update(name, None).unwrap();
        }
        store.delete("Bob").unwrap();

        let ContactListing::Contacts(lines) = store.list_all() else {
            panic!("store should not be empty");
        };
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Contact name: Alice,"));
        assert!(lines[1].starts_with("Contact name: Carol,"));
    }

    #[test]
    fn test_upcoming_birthdays_in_store_order() {
        let mut store = ContactStore::new();
        store.add_or_update("Carol", None).unwrap();
        store.add_or_update("Alice", None).unwrap();
        store.add_or_update("Dave", None).unwrap();
        store.set_birthday("Carol", "15.06.1985").unwrap();
        store.set_birthday("Alice", "11.06.1990").unwrap();

        let upcoming = store.upcoming_birthdays(date(2024, 6, 10), BirthdayWindow::default());
        let names: Vec<_> = upcoming.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, ["Carol", "Alice"]);
    }
}
