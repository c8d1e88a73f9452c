use super::console::Console;
use crate::domain::contact::{Contact, ContactPatch};
use crate::domain::manager::ContactManager;
use crate::errors::AppError;
use crate::validation::{validate_email, validate_name, validate_phone};

pub fn display_contact(contact: &Contact) -> [String; 3] {
    [
        format!("Name: {}", contact.name),
        format!("Phone: {}", contact.phone),
        format!("Email: {}", contact.email),
    ]
}

/// Prompts for name, phone and email, validating each as it is entered.
///
/// An existing name is overwritten (upsert); the message says "updated"
/// instead of "added" when that happens.
pub fn add_contact(
    manager: &mut ContactManager,
    console: &mut dyn Console,
) -> Result<(), AppError> {
    let name = console.prompt("Enter contact name: ")?;
    validate_name(&name)?;

    let phone = console.prompt("Enter contact phone number: ")?;
    validate_phone(&phone)?;

    let email = console.prompt("Enter contact email: ")?;
    validate_email(&email)?;

    let replaced = manager.add_contact(Contact::new(&name, &phone, &email))?;

    let action = if replaced.is_some() { "updated" } else { "added" };
    console.print_line(&format!("Contact {} {} successfully!", name, action))
}

pub fn search_contact(manager: &ContactManager, console: &mut dyn Console) -> Result<(), AppError> {
    let name = console.prompt("Enter name to search: ")?;
    let contact = manager.find(&name)?;

    for line in display_contact(contact) {
        console.print_line(&line)?;
    }
    Ok(())
}

/// Blank answers keep the current value. All supplied fields are validated
/// before any of them is written.
pub fn update_contact(
    manager: &mut ContactManager,
    console: &mut dyn Console,
) -> Result<(), AppError> {
    let name = console.prompt("Enter name of contact to update: ")?;
    if manager.mem.get(&name).is_none() {
        return Err(AppError::NotFound("Contact".to_string()));
    }

    console.print_line("Leave fields blank to keep current values.")?;
    let phone = console.prompt("Enter new phone number: ")?;
    let email = console.prompt("Enter new email: ")?;

    manager.update_contact(&name, ContactPatch::from_input(&phone, &email))?;

    console.print_line(&format!("Contact {} updated successfully!", name))
}

pub fn view_contacts(manager: &ContactManager, console: &mut dyn Console) -> Result<(), AppError> {
    if manager.mem.is_empty() {
        return console.print_line("No contacts available.");
    }

    for c in manager.contact_list() {
        console.print_line(&format!(
            "Name: {}, Phone: {}, Email: {}",
            c.name, c.phone, c.email
        ))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::cli::console::Terminal;
    use crate::store::memory::MemStore;

    type Handler = fn(&mut ContactManager, &mut dyn Console) -> Result<(), AppError>;

    fn manager() -> ContactManager {
        ContactManager::new(Box::new(MemStore::new()))
    }

    fn run(
        manager: &mut ContactManager,
        input: &str,
        handler: Handler,
    ) -> (Result<(), AppError>, String) {
        let mut console = Terminal::new(Cursor::new(input.to_string()), Vec::new());
        let result = handler(manager, &mut console);
        let output = String::from_utf8_lossy(&console.into_writer()).into_owned();
        (result, output)
    }

    fn search(manager: &mut ContactManager, console: &mut dyn Console) -> Result<(), AppError> {
        search_contact(manager, console)
    }

    fn view(manager: &mut ContactManager, console: &mut dyn Console) -> Result<(), AppError> {
        view_contacts(manager, console)
    }

    #[test]
    fn add_then_search_shows_fields() -> Result<(), AppError> {
        let mut manager = manager();

        let (result, output) = run(&mut manager, " Alice \n5551234\na@b.com\n", add_contact);
        result?;
        assert!(output.contains("Contact Alice added successfully!"));

        let (result, output) = run(&mut manager, "Alice\n", search);
        result?;
        assert!(output.contains("Name: Alice\n"));
        assert!(output.contains("Phone: 5551234\n"));
        assert!(output.contains("Email: a@b.com\n"));
        Ok(())
    }

    #[test]
    fn add_with_bad_phone_stores_nothing() {
        let mut manager = manager();

        let (result, output) = run(&mut manager, "Alice\n12a4\na@b.com\n", add_contact);

        assert!(matches!(result, Err(AppError::InvalidFormat(_))));
        // Stops before asking for the email
        assert!(!output.contains("Enter contact email"));
        assert!(manager.mem.is_empty());
    }

    #[test]
    fn add_with_blank_name_stops_immediately() {
        let mut manager = manager();

        let (result, output) = run(&mut manager, "   \n", add_contact);

        assert!(matches!(result, Err(AppError::EmptyField(_))));
        assert!(!output.contains("phone"));
    }

    #[test]
    fn add_with_bad_email_stores_nothing() {
        let mut manager = manager();

        let (result, _) = run(&mut manager, "Alice\n5551234\nalice-at-home\n", add_contact);

        assert!(matches!(result, Err(AppError::InvalidFormat(_))));
        assert!(manager.mem.is_empty());
    }

    #[test]
    fn add_over_existing_name_reports_update() -> Result<(), AppError> {
        let mut manager = manager();
        manager.add_contact(Contact::new("Alice", "5551234", "a@b.com"))?;

        let (result, output) = run(&mut manager, "Alice\n999\nz@z.io\n", add_contact);
        result?;

        assert!(output.contains("Contact Alice updated successfully!"));
        assert_eq!(manager.find("Alice")?.phone, "999");
        Ok(())
    }

    #[test]
    fn search_blank_and_missing() {
        let mut manager = manager();

        let (result, _) = run(&mut manager, "\n", search);
        assert!(matches!(result, Err(AppError::EmptyField(_))));

        let (result, _) = run(&mut manager, "Alice\n", search);
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[test]
    fn update_missing_name_asks_nothing_more() {
        let mut manager = manager();

        let (result, output) = run(&mut manager, "Ghost\n123\nx@y.com\n", update_contact);

        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert!(!output.contains("Enter new phone number"));
        assert!(manager.mem.is_empty());
    }

    #[test]
    fn update_blank_phone_keeps_phone() -> Result<(), AppError> {
        let mut manager = manager();
        manager.add_contact(Contact::new("Alice", "5551234", "a@b.com"))?;

        let (result, output) = run(&mut manager, "Alice\n\nx@y.com\n", update_contact);
        result?;

        assert!(
            output.contains("Leave fields blank to keep current values.")
        );
        assert!(output.contains("Contact Alice updated successfully!"));
        assert_eq!(
            manager.find("Alice")?,
            &Contact::new("Alice", "5551234", "x@y.com")
        );
        Ok(())
    }

    #[test]
    fn update_with_bad_email_keeps_new_phone_out() -> Result<(), AppError> {
        let mut manager = manager();
        manager.add_contact(Contact::new("Alice", "5551234", "a@b.com"))?;

        let (result, _) = run(&mut manager, "Alice\n777\nbroken\n", update_contact);

        assert!(matches!(result, Err(AppError::InvalidFormat(_))));
        assert_eq!(manager.find("Alice")?.phone, "5551234");
        Ok(())
    }

    #[test]
    fn view_empty_and_populated() -> Result<(), AppError> {
        let mut manager = manager();

        let (result, output) = run(&mut manager, "", view);
        result?;
        assert_eq!(output, "No contacts available.\n");

        manager.add_contact(Contact::new("Zed", "1", "z@z.io"))?;
        manager.add_contact(Contact::new("Alice", "5551234", "a@b.com"))?;

        let (result, output) = run(&mut manager, "", view);
        result?;
        assert_eq!(
            output,
            "Name: Zed, Phone: 1, Email: z@z.io\nName: Alice, Phone: 5551234, Email: a@b.com\n"
        );
        Ok(())
    }
}
