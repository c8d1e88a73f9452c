use serde::{Deserialize, Serialize};

use super::*;
use crate::validation::{validate_email, validate_name, validate_phone};

/// A named record holding a phone number and an email address.
///
/// The name is the key of the contact book, so it is not part of the
/// persisted value; see [`ContactDetails`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub name: String,
    pub phone: String,
    pub email: String,
}

/// Value half of a persisted `name -> {phone, email}` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    pub phone: String,
    pub email: String,
}

/// Replacement fields for an update. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactPatch {
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl Contact {
    pub fn new(name: &str, phone: &str, email: &str) -> Self {
        Contact {
            name: name.to_string(),
            phone: phone.to_string(),
            email: email.to_string(),
        }
    }

    pub fn from_details(name: String, details: ContactDetails) -> Self {
        Contact {
            name,
            phone: details.phone,
            email: details.email,
        }
    }

    pub fn details(&self) -> ContactDetails {
        ContactDetails {
            phone: self.phone.clone(),
            email: self.email.clone(),
        }
    }

    /// Checks name, phone and email in that order and stops at the first failure.
    pub fn validate(&self) -> Result<(), AppError> {
        validate_name(&self.name)?;
        validate_phone(&self.phone)?;
        validate_email(&self.email)
    }
}

impl ContactPatch {
    /// Blank strings mean "keep the current value".
    pub fn from_input(phone: &str, email: &str) -> Self {
        let keep_if_blank = |s: &str| {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        };

        ContactPatch {
            phone: keep_if_blank(phone),
            email: keep_if_blank(email),
        }
    }

    /// Validates every supplied field. Nothing may be applied unless this passes.
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(phone) = &self.phone {
            validate_phone(phone)?;
        }
        if let Some(email) = &self.email {
            validate_email(email)?;
        }
        Ok(())
    }

    pub(crate) fn apply_to(self, contact: &mut Contact) {
        if let Some(phone) = self.phone {
            contact.phone = phone;
        }
        if let Some(email) = self.email {
            contact.email = email;
        }
    }
}
