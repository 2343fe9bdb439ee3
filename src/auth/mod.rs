//! Authentication module for chatter.
//!
//! This module provides registration field validation, the registration
//! record, and login verification.

mod login;
mod registration;
pub mod validation;

pub use login::{Login, LOGIN_MISMATCH_MESSAGE};
pub use registration::{Registration, RegistrationField, RegistrationOutcome};
pub use validation::ValidationError;
