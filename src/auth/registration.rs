//! User registration for chatter.
//!
//! A single user's credential fields, stored only through validating
//! setters, plus the combined registration operation.

use tracing::info;

use crate::auth::validation::{
    validate_cell_phone, validate_first_name, validate_last_name, validate_password,
    validate_username, ValidationError,
};

/// The five registration fields, in the fixed order they are validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationField {
    /// Login username.
    Username,
    /// Login password.
    Password,
    /// Cellphone number.
    CellPhone,
    /// First name.
    FirstName,
    /// Last name.
    LastName,
}

impl RegistrationField {
    /// Canonical feedback text when this field validates.
    pub fn success_message(&self) -> &'static str {
        match self {
            RegistrationField::Username => "Username successfully captured",
            RegistrationField::Password => "Password successfully captured",
            RegistrationField::CellPhone => "Cellphone number successfully captured",
            RegistrationField::FirstName => "First name successfully captured",
            RegistrationField::LastName => "Last name successfully captured",
        }
    }
}

/// Outcome of a registration attempt.
///
/// Always carries exactly five per-field results in field order; the
/// overall status is derived from them.
#[derive(Debug, Clone)]
pub struct RegistrationOutcome {
    fields: Vec<(RegistrationField, Result<(), ValidationError>)>,
}

impl RegistrationOutcome {
    /// Whether every field validated.
    pub fn succeeded(&self) -> bool {
        self.fields.iter().all(|(_, r)| r.is_ok())
    }

    /// The per-field results, in field order.
    pub fn field_results(&self) -> &[(RegistrationField, Result<(), ValidationError>)] {
        &self.fields
    }

    /// The five per-field feedback messages, in field order.
    pub fn field_messages(&self) -> Vec<String> {
        self.fields
            .iter()
            .map(|(field, result)| match result {
                Ok(()) => field.success_message().to_string(),
                Err(e) => e.to_string(),
            })
            .collect()
    }

    /// The overall status message.
    pub fn status_message(&self) -> &'static str {
        if self.succeeded() {
            "Registration Successful"
        } else {
            "Registration Failed"
        }
    }

    /// All six messages: five per-field entries followed by the status.
    pub fn messages(&self) -> Vec<String> {
        let mut messages = self.field_messages();
        messages.push(self.status_message().to_string());
        messages
    }
}

/// A single user's registration record.
///
/// All fields start unset. Each field is mutated only through its
/// validating setter: a valid value is stored, an invalid one clears
/// the field back to unset.
#[derive(Debug, Clone, Default)]
pub struct Registration {
    username: Option<String>,
    password: Option<String>,
    cell_phone: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
}

/// Store `value` into `slot` if `check` passes, otherwise clear the slot.
fn store_field(
    slot: &mut Option<String>,
    value: &str,
    check: impl Fn(&str) -> Result<(), ValidationError>,
) -> Result<(), ValidationError> {
    match check(value) {
        Ok(()) => {
            *slot = Some(value.to_string());
            Ok(())
        }
        Err(e) => {
            *slot = None;
            Err(e)
        }
    }
}

impl Registration {
    /// Create an empty registration record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the username if it is correctly formatted.
    pub fn set_username(&mut self, username: &str) -> bool {
        store_field(&mut self.username, username, validate_username).is_ok()
    }

    /// Set the password if it meets complexity requirements.
    pub fn set_password(&mut self, password: &str) -> bool {
        store_field(&mut self.password, password, validate_password).is_ok()
    }

    /// Set the cellphone number if it is correctly formatted.
    pub fn set_cell_phone(&mut self, cell_phone: &str) -> bool {
        store_field(&mut self.cell_phone, cell_phone, validate_cell_phone).is_ok()
    }

    /// Set the first name if it contains only letters and is non-empty.
    pub fn set_first_name(&mut self, first_name: &str) -> bool {
        store_field(&mut self.first_name, first_name, validate_first_name).is_ok()
    }

    /// Set the last name if it contains only letters and is non-empty.
    pub fn set_last_name(&mut self, last_name: &str) -> bool {
        store_field(&mut self.last_name, last_name, validate_last_name).is_ok()
    }

    /// The stored username, if set.
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// The stored password, if set.
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    /// The stored cellphone number, if set.
    pub fn cell_phone(&self) -> Option<&str> {
        self.cell_phone.as_deref()
    }

    /// The stored first name, if set.
    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    /// The stored last name, if set.
    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    /// Register a user by running all five validating setters in fixed
    /// field order.
    ///
    /// Every field is attempted regardless of earlier failures, so the
    /// outcome always carries feedback for all five fields plus the
    /// overall status.
    ///
    /// # Examples
    ///
    /// ```
    /// use chatter::auth::Registration;
    ///
    /// let mut registration = Registration::new();
    /// let outcome = registration.register(
    ///     "kyl_1",
    ///     "Ch&&sec@ke99!",
    ///     "+27838968976",
    ///     "Kyle",
    ///     "Smith",
    /// );
    /// assert!(outcome.succeeded());
    /// assert_eq!(outcome.messages().len(), 6);
    /// ```
    pub fn register(
        &mut self,
        username: &str,
        password: &str,
        cell_phone: &str,
        first_name: &str,
        last_name: &str,
    ) -> RegistrationOutcome {
        let fields = vec![
            (
                RegistrationField::Username,
                store_field(&mut self.username, username, validate_username),
            ),
            (
                RegistrationField::Password,
                store_field(&mut self.password, password, validate_password),
            ),
            (
                RegistrationField::CellPhone,
                store_field(&mut self.cell_phone, cell_phone, validate_cell_phone),
            ),
            (
                RegistrationField::FirstName,
                store_field(&mut self.first_name, first_name, validate_first_name),
            ),
            (
                RegistrationField::LastName,
                store_field(&mut self.last_name, last_name, validate_last_name),
            ),
        ];

        let outcome = RegistrationOutcome { fields };

        if outcome.succeeded() {
            info!(username = %username, "New user registered");
        }

        outcome
    }
}
