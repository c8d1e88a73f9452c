pub use crate::cli::{
    command::Cli,
    console::{Console, Terminal},
    menu::{MenuChoice, run_menu, start_session},
};
pub use crate::config::Config;
pub use crate::domain::{
    book::ContactBook,
    contact::{Contact, ContactPatch},
    manager::ContactManager,
};
pub use crate::errors::AppError;
pub use crate::store::{ContactStore, json::JsonStore, memory::MemStore};
