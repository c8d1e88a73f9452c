use crate::errors::AppError;

pub const PHONE_REQ: &str = "Phone number must contain only digits";
pub const EMAIL_REQ: &str = "Invalid email format";

pub fn validate_name(name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::EmptyField("Name".to_string()));
    }
    Ok(())
}

pub fn validate_phone(phone: &str) -> Result<(), AppError> {
    // Must be non-empty
    // Every character must be a decimal digit
    if phone.is_empty() || !phone.chars().all(|c| c.is_ascii_digit()) {
        return Err(AppError::InvalidFormat(PHONE_REQ.to_string()));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), AppError> {
    // Only requires an '@' and a '.' somewhere, in any order
    if !(email.contains('@') && email.contains('.')) {
        return Err(AppError::InvalidFormat(EMAIL_REQ.to_string()));
    }
    Ok(())
}
