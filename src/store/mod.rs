pub mod json;
pub mod memory;

use crate::domain::book::ContactBook;
use crate::errors::AppError;
use std::fs;
use std::path::Path;

pub trait ContactStore {
    fn load(&self) -> Result<ContactBook, AppError>;

    fn save(&self, contacts: &ContactBook) -> Result<(), AppError>;
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
