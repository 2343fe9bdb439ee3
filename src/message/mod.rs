//! Messaging module for chatter.
//!
//! This module provides the message record, the in-memory status
//! collections, and the flat-file archive.

mod archive;
mod store;
mod types;

pub use archive::MessageArchive;
pub use store::{MessageStore, SendError, SEND_SUCCESS_MESSAGE};
pub use types::{
    check_payload_length, check_recipient, Message, MessageStatus, PayloadVerdict,
    RecipientVerdict, LEGACY_RECIPIENT, MAX_PAYLOAD_LENGTH, MESSAGE_ID_LENGTH,
};
