use std::env;
use std::path::PathBuf;

pub const DEFAULT_DATA_FILE: &str = "contacts.json";
pub const DATA_FILE_ENV: &str = "CONTACTS_FILE";
pub const DOTENV_FILE: &str = ".env";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
        }
    }
}

impl Config {
    /// Lets `CONTACTS_FILE` override the data file.
    ///
    /// Only a `.env` in the working directory is read; parent directories are
    /// never searched. Variables already set in the environment win over it.
    pub fn from_env() -> Self {
        dotenv::from_path(DOTENV_FILE).ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        match lookup(DATA_FILE_ENV).filter(|v| !v.trim().is_empty()) {
            Some(path) => Self {
                data_file: PathBuf::from(path),
            },
            None => Self::default(),
        }
    }
}
