//! chatter - single-session chat prototype
//!
//! Validated user registration, login verification, and an in-memory
//! message store with optional flat-file persistence.

pub mod auth;
pub mod config;
pub mod error;
pub mod logging;
pub mod message;

pub use auth::{
    Login, Registration, RegistrationField, RegistrationOutcome, ValidationError,
    LOGIN_MISMATCH_MESSAGE,
};
pub use config::Config;
pub use error::{ChatterError, Result};
pub use message::{
    check_payload_length, check_recipient, Message, MessageArchive, MessageStatus, MessageStore,
    PayloadVerdict, RecipientVerdict, SendError, MAX_PAYLOAD_LENGTH, SEND_SUCCESS_MESSAGE,
};
