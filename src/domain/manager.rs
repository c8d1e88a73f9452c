use log::{debug, info};

use super::book::ContactBook;
use super::contact::{Contact, ContactPatch};
use super::*;

/// Owns the in-memory contact book for the whole session together with the
/// storage it is loaded from and saved to.
pub struct ContactManager {
    pub mem: ContactBook,
    pub storage: Box<dyn ContactStore>,
}

impl ContactManager {
    /// Starts with an empty book; call [`ContactManager::load`] to populate it.
    pub fn new(storage: Box<dyn ContactStore>) -> Self {
        Self {
            mem: ContactBook::new(),
            storage,
        }
    }

    pub fn contact_list(&self) -> Vec<&Contact> {
        self.mem.iter().collect()
    }

    /// Validates and upserts. Returns the contact that was overwritten, if any.
    pub fn add_contact(&mut self, contact: Contact) -> Result<Option<Contact>, AppError> {
        contact.validate()?;

        let replaced = self.mem.upsert(contact);
        if let Some(old) = &replaced {
            debug!("overwrote existing contact {:?}", old.name);
        }
        Ok(replaced)
    }

    pub fn find(&self, name: &str) -> Result<&Contact, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::EmptyField("Search name".to_string()));
        }

        self.mem
            .get(name)
            .ok_or_else(|| AppError::NotFound("Contact".to_string()))
    }

    pub fn update_contact(
        &mut self,
        name: &str,
        patch: ContactPatch,
    ) -> Result<&Contact, AppError> {
        self.mem.update(name.trim(), patch)
    }

    /// Replaces the book with what storage holds. On failure the book is left empty.
    pub fn load(&mut self) -> Result<(), AppError> {
        self.mem = ContactBook::new();
        self.mem = self.storage.load()?;
        info!("loaded {} contact(s)", self.mem.len());
        Ok(())
    }

    pub fn save(&self) -> Result<(), AppError> {
        self.storage.save(&self.mem)?;
        info!("saved {} contact(s)", self.mem.len());
        Ok(())
    }
}
