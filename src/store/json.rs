use super::*;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fmt::Display;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

const INDENT: &[u8] = b"    ";

/// Stores the contact book as a pretty-printed JSON object keyed by name.
pub struct JsonStore {
    pub path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_error(&self, err: impl Display) -> AppError {
        AppError::PersistenceRead(format!("{}: {}", self.path.display(), err))
    }

    fn write_error(&self, err: impl Display) -> AppError {
        AppError::PersistenceWrite(format!("{}: {}", self.path.display(), err))
    }

    fn write_file(&self, data: &[u8]) -> Result<(), AppError> {
        create_file_parent(&self.path)?;

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;

        file.write_all(data)?;
        Ok(())
    }
}

pub fn to_pretty_json(contacts: &ContactBook) -> Result<Vec<u8>, serde_json::Error> {
    let mut data = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut data, PrettyFormatter::with_indent(INDENT));
    contacts.serialize(&mut serializer)?;
    data.push(b'\n');
    Ok(data)
}

impl ContactStore for JsonStore {
    fn load(&self) -> Result<ContactBook, AppError> {
        if !fs::exists(&self.path).map_err(|e| self.read_error(e))? {
            return Ok(ContactBook::new());
        }

        let data = fs::read_to_string(&self.path).map_err(|e| self.read_error(e))?;

        // serde_json will give an error if data is empty
        if data.trim().is_empty() {
            return Ok(ContactBook::new());
        }

        serde_json::from_str(&data).map_err(|e| self.read_error(e))
    }

    fn save(&self, contacts: &ContactBook) -> Result<(), AppError> {
        let data = to_pretty_json(contacts).map_err(|e| self.write_error(e))?;

        self.write_file(&data).map_err(|e| match e {
            AppError::Io(io) => self.write_error(io),
            other => other,
        })
    }
}
