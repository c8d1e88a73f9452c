use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::contact::{Contact, ContactDetails, ContactPatch};
use super::*;

/// In-memory contact store, keyed by name.
///
/// Entries keep insertion order so listings and the saved file stay stable
/// between runs. Lookups are linear.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactBook {
    entries: Vec<Contact>,
}

impl ContactBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Contact> {
        self.entries.iter()
    }

    pub fn get(&self, name: &str) -> Option<&Contact> {
        self.entries.iter().find(|c| c.name == name)
    }

    fn get_index_by_name(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|c| c.name == name)
    }

    /// Inserts `contact`, replacing any entry with the same name in place.
    /// Returns the replaced contact.
    pub fn upsert(&mut self, contact: Contact) -> Option<Contact> {
        match self.get_index_by_name(&contact.name) {
            Some(index) => Some(std::mem::replace(&mut self.entries[index], contact)),
            None => {
                self.entries.push(contact);
                None
            }
        }
    }

    /// Applies `patch` to the contact called `name`.
    ///
    /// The patch is validated before anything is written, so a failed update
    /// leaves the contact untouched.
    pub fn update(&mut self, name: &str, patch: ContactPatch) -> Result<&Contact, AppError> {
        let index = self
            .get_index_by_name(name)
            .ok_or_else(|| AppError::NotFound("Contact".to_string()))?;

        patch.validate()?;

        let contact = &mut self.entries[index];
        patch.apply_to(contact);
        Ok(&*contact)
    }
}

impl<'a> IntoIterator for &'a ContactBook {
    type Item = &'a Contact;
    type IntoIter = std::slice::Iter<'a, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Contact> for ContactBook {
    fn from_iter<I: IntoIterator<Item = Contact>>(iter: I) -> Self {
        let mut book = ContactBook::new();
        for contact in iter {
            book.upsert(contact);
        }
        book
    }
}

// Persisted as a JSON object: { "<name>": { "phone": .., "email": .. }, .. }
impl Serialize for ContactBook {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for contact in &self.entries {
            map.serialize_entry(&contact.name, &contact.details())?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ContactBook {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ContactBookVisitor)
    }
}

struct ContactBookVisitor;

impl<'de> Visitor<'de> for ContactBookVisitor {
    type Value = ContactBook;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object mapping contact names to {phone, email}")
    }

    // Walks entries in file order; a repeated name keeps its first position.
    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut book = ContactBook::new();
        while let Some((name, details)) = access.next_entry::<String, ContactDetails>()? {
            book.upsert(Contact::from_details(name, details));
        }
        Ok(book)
    }
}
