pub mod command;
pub mod console;
pub mod handlers;
pub mod menu;
