use clap::Parser;

/// The contact book takes no options; everything happens in the interactive menu.
#[derive(Parser, Debug)]
#[command(
    name = "contact-book",
    version,
    about = "Simple Contact Book",
    long_about = "Simple Contact Book\n\nAdd, search, update and view contacts from an interactive menu. \
    Contacts are kept in ./contacts.json (override with CONTACTS_FILE)."
)]
pub struct Cli {}
