use core::fmt;

use crate::cli::menu::MENU_RANGE;

#[derive(Debug)]
pub enum AppError {
    /// A required field was blank after trimming. Holds the field label.
    EmptyField(String),
    InvalidFormat(String),
    NotFound(String),
    PersistenceRead(String),
    PersistenceWrite(String),
    /// Menu input that is an integer outside the menu range, as typed.
    InvalidMenuChoice(String),
    /// Menu input that is not a number at all.
    ParseInt(std::num::ParseIntError),
    Io(std::io::Error),
    /// The input stream was closed while a line was expected.
    EndOfInput,
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<std::num::ParseIntError> for AppError {
    fn from(err: std::num::ParseIntError) -> Self {
        AppError::ParseInt(err)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (low, high) = (*MENU_RANGE.start(), *MENU_RANGE.end());
        match self {
            AppError::EmptyField(field) => write!(f, "{} cannot be empty", field),
            AppError::InvalidFormat(msg) => write!(f, "{}", msg),
            AppError::NotFound(item) => write!(f, "{} not found", item),
            AppError::PersistenceRead(msg) => write!(f, "Error loading contacts: {}", msg),
            AppError::PersistenceWrite(msg) => write!(f, "Error saving contacts: {}", msg),
            AppError::InvalidMenuChoice(choice) => write!(
                f,
                "Invalid choice {}. Please select a number between {} and {}.",
                choice, low, high
            ),
            AppError::ParseInt(_) => write!(
                f,
                "Invalid input. Please enter a number between {} and {}.",
                low, high
            ),
            AppError::Io(e) => {
                write!(f, "I/O error while accessing a file or resource: {}", e)
            }
            AppError::EndOfInput => write!(f, "Input closed"),
        }
    }
}

impl std::error::Error for AppError {}
