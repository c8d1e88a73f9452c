use log::{debug, info, warn};
use std::num::{IntErrorKind, ParseIntError};
use std::ops::RangeInclusive;
use std::str::FromStr;

use super::console::Console;
use super::handlers;
use crate::config::Config;
use crate::domain::manager::ContactManager;
use crate::errors::AppError;
use crate::store::json::JsonStore;

pub const MENU_RANGE: RangeInclusive<i64> = 1..=5;

const FAREWELL: &str = "Exiting the program. Goodbye!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Search,
    Update,
    View,
    Exit,
}

impl TryFrom<i64> for MenuChoice {
    type Error = AppError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(MenuChoice::Add),
            2 => Ok(MenuChoice::Search),
            3 => Ok(MenuChoice::Update),
            4 => Ok(MenuChoice::View),
            5 => Ok(MenuChoice::Exit),
            other => Err(AppError::InvalidMenuChoice(other.to_string())),
        }
    }
}

impl FromStr for MenuChoice {
    type Err = AppError;

    /// Non-numeric input is a `ParseInt` error. Any integer outside the menu
    /// range, including ones too large for `i64`, is an `InvalidMenuChoice`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        match input.parse::<i64>() {
            Ok(value) => MenuChoice::try_from(value),
            Err(e) if is_overflow(&e) => Err(AppError::InvalidMenuChoice(input.to_string())),
            Err(e) => Err(e.into()),
        }
    }
}

fn is_overflow(err: &ParseIntError) -> bool {
    matches!(
        err.kind(),
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow
    )
}

pub fn show_menu(console: &mut dyn Console) -> Result<(), AppError> {
    console.print_line("")?;
    console.print_line("--- Contact Management System ---")?;
    console.print_line("1. Add Contact")?;
    console.print_line("2. Search Contact")?;
    console.print_line("3. Update Contact")?;
    console.print_line("4. View All Contacts")?;
    console.print_line("5. Exit")
}

fn report(console: &mut dyn Console, err: &AppError) -> Result<(), AppError> {
    console.print_line(&format!("Error: {}", err))
}

/// Runs the menu until Exit is chosen or the input is closed.
///
/// Handler failures are reported as a single line and the loop continues.
/// Only a broken console ends the loop with an error.
pub fn run_menu(manager: &mut ContactManager, console: &mut dyn Console) -> Result<(), AppError> {
    loop {
        show_menu(console)?;

        let choice = console
            .prompt("Choose an option (1-5): ")
            .and_then(|input| input.parse::<MenuChoice>());
        debug!("menu choice: {:?}", choice);

        let outcome = match choice {
            Ok(MenuChoice::Exit) => break,
            Ok(MenuChoice::Add) => {
                handlers::add_contact(manager, console).and_then(|()| manager.save())
            }
            Ok(MenuChoice::Search) => handlers::search_contact(manager, console),
            Ok(MenuChoice::Update) => {
                handlers::update_contact(manager, console).and_then(|()| manager.save())
            }
            Ok(MenuChoice::View) => handlers::view_contacts(manager, console),
            Err(e) => Err(e),
        };

        match outcome {
            Ok(()) => {}
            Err(AppError::EndOfInput) => {
                info!("input closed, leaving menu");
                break;
            }
            Err(AppError::Io(e)) => return Err(AppError::Io(e)),
            Err(e) => {
                if matches!(e, AppError::PersistenceWrite(_)) {
                    warn!("{}", e);
                }
                report(console, &e)?;
            }
        }
    }

    console.print_line(FAREWELL)
}

/// Loads the contact file named by `config` and runs the menu on `console`.
///
/// An unreadable or corrupt file is reported and the session starts empty.
pub fn start_session(config: &Config, console: &mut dyn Console) -> Result<(), AppError> {
    info!("using contact file {}", config.data_file.display());

    let mut manager = ContactManager::new(Box::new(JsonStore::new(&config.data_file)));
    if let Err(e) = manager.load() {
        warn!("{}", e);
        report(console, &e)?;
    }

    run_menu(&mut manager, console)
}
