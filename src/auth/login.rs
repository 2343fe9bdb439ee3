//! Login verification for chatter.
//!
//! Compares attempted credentials against a registration record and
//! surfaces a status message for the last attempt.

use crate::auth::Registration;

/// Fixed feedback text when credentials do not match.
pub const LOGIN_MISMATCH_MESSAGE: &str =
    "Username & Password do not match our records, please try again.";

/// Verifies login attempts against one registration record.
#[derive(Debug)]
pub struct Login<'a> {
    registration: &'a Registration,
    access_granted: bool,
}

impl<'a> Login<'a> {
    /// Create a verifier bound to the given registration record.
    pub fn new(registration: &'a Registration) -> Self {
        Self {
            registration,
            access_granted: false,
        }
    }

    /// Attempt to log in with the given credentials.
    ///
    /// Returns true iff both the username and the password exactly match
    /// the stored values. Unset stored fields never match. The result is
    /// remembered for [`status_message`](Self::status_message).
    pub fn attempt(&mut self, username: &str, password: &str) -> bool {
        self.access_granted = self.registration.username() == Some(username)
            && self.registration.password() == Some(password);
        self.access_granted
    }

    /// Whether the last attempt succeeded. False before any attempt.
    pub fn access_granted(&self) -> bool {
        self.access_granted
    }

    /// Status message for the last login attempt.
    ///
    /// A successful attempt yields a personalized welcome; anything else,
    /// including no attempt at all, yields the mismatch text.
    pub fn status_message(&self) -> String {
        if self.access_granted {
            format!(
                "Welcome {} {},\nit is great to see you.",
                self.registration.first_name().unwrap_or(""),
                self.registration.last_name().unwrap_or(""),
            )
        } else {
            LOGIN_MISMATCH_MESSAGE.to_string()
        }
    }

    /// The username of the bound registration record, if set.
    pub fn username(&self) -> Option<&str> {
        self.registration.username()
    }
}
