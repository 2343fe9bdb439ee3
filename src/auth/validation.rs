//! Input validation for chatter user registration.
//!
//! This module provides validation functions for usernames, passwords,
//! cellphone numbers, and person names.

use thiserror::Error;

/// Maximum username length.
pub const MAX_USERNAME_LENGTH: usize = 5;

/// Minimum password length.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum password length.
pub const MAX_PASSWORD_LENGTH: usize = 32;

/// International dialing prefix required for cellphone numbers.
pub const PHONE_PREFIX: &str = "+27";

/// Number of digits required after the dialing prefix.
pub const PHONE_DIGITS: usize = 9;

/// Validation errors.
///
/// Each variant carries the canonical feedback text surfaced to the caller
/// for that field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Username is missing an underscore or too long.
    #[error("Username is not correctly formatted, please ensure that your username contains an underscore and is no more than five characters in length.")]
    UsernameFormat,

    /// Password does not meet complexity requirements.
    #[error("Password is not correctly formatted, please ensure that the password contains at least eight characters, a capital letter, a number, and a special character.")]
    PasswordComplexity,

    /// Cellphone number does not match the international format.
    #[error("Cellphone number is incorrectly formatted or does not contain an international code, please correct the number and try again.")]
    CellPhoneFormat,

    /// First name is empty or contains non-letters.
    #[error("First name is invalid, please ensure it is not empty and contains only letters.")]
    FirstNameInvalid,

    /// Last name is empty or contains non-letters.
    #[error("Last name is invalid, please ensure it is not empty and contains only letters.")]
    LastNameInvalid,
}

/// Validate a username.
///
/// Requirements:
/// - Not blank
/// - Contains an underscore (`_`)
/// - At most 5 characters
///
/// # Examples
///
/// ```
/// use chatter::auth::validation::validate_username;
///
/// assert!(validate_username("kyl_1").is_ok());
/// assert!(validate_username("kyle!!!!!!!").is_err()); // too long, no underscore
/// ```
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username.trim().is_empty() {
        return Err(ValidationError::UsernameFormat);
    }

    if !username.contains('_') || username.len() > MAX_USERNAME_LENGTH {
        return Err(ValidationError::UsernameFormat);
    }

    Ok(())
}

/// Validate a password.
///
/// Requirements:
/// - Length: 8-32 characters
/// - At least one capital letter, one digit, and one special character
///
/// Each character is classified into at most one category, tested in
/// order: uppercase, then digit, then special (not alphanumeric).
///
/// # Examples
///
/// ```
/// use chatter::auth::validation::validate_password;
///
/// assert!(validate_password("Ch&&sec@ke99!").is_ok());
/// assert!(validate_password("password").is_err()); // no capital, digit, or special
/// ```
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.trim().is_empty() {
        return Err(ValidationError::PasswordComplexity);
    }

    let length_acceptable =
        password.len() >= MIN_PASSWORD_LENGTH && password.len() <= MAX_PASSWORD_LENGTH;

    let mut has_capital = false;
    let mut has_digit = false;
    let mut has_special = false;

    for c in password.chars() {
        if c.is_uppercase() {
            has_capital = true;
        } else if c.is_ascii_digit() {
            has_digit = true;
        } else if !c.is_alphanumeric() {
            has_special = true;
        }
    }

    if length_acceptable && has_capital && has_digit && has_special {
        Ok(())
    } else {
        Err(ValidationError::PasswordComplexity)
    }
}

/// Validate a cellphone number.
///
/// Requirements:
/// - Starts with the `+27` international code
/// - Followed by exactly 9 digits
///
/// # Examples
///
/// ```
/// use chatter::auth::validation::validate_cell_phone;
///
/// assert!(validate_cell_phone("+27838968976").is_ok());
/// assert!(validate_cell_phone("0838968976").is_err()); // missing international code
/// ```
pub fn validate_cell_phone(cell_phone: &str) -> Result<(), ValidationError> {
    if cell_phone.trim().is_empty() {
        return Err(ValidationError::CellPhoneFormat);
    }

    let valid = match cell_phone.strip_prefix(PHONE_PREFIX) {
        Some(rest) => rest.len() == PHONE_DIGITS && rest.chars().all(|c| c.is_ascii_digit()),
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(ValidationError::CellPhoneFormat)
    }
}

/// Check if a string is a valid person name.
///
/// A name must be non-empty after trimming and contain only ASCII letters.
pub fn is_valid_person_name(name: &str) -> bool {
    !name.trim().is_empty() && name.chars().all(|c| c.is_ascii_alphabetic())
}

/// Validate a first name.
pub fn validate_first_name(first_name: &str) -> Result<(), ValidationError> {
    if is_valid_person_name(first_name) {
        Ok(())
    } else {
        Err(ValidationError::FirstNameInvalid)
    }
}

/// Validate a last name.
pub fn validate_last_name(last_name: &str) -> Result<(), ValidationError> {
    if is_valid_person_name(last_name) {
        Ok(())
    } else {
        Err(ValidationError::LastNameInvalid)
    }
}
