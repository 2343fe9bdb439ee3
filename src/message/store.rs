//! In-memory message collections for chatter.
//!
//! One `MessageStore` holds the session's messages partitioned by
//! status, plus the running count of successful sends. The store is an
//! explicit value owned by the session; operations take it by reference.

use thiserror::Error;
use tracing::info;

use crate::message::archive::MessageArchive;
use crate::message::types::{
    check_payload_length, check_recipient, Message, MessageStatus, PayloadVerdict,
    RecipientVerdict,
};
use crate::Result;

/// Fixed feedback text for a successful send.
pub const SEND_SUCCESS_MESSAGE: &str = "Message successfully sent.";

/// Reasons a send is rejected.
///
/// Checks run in this order; the first failure wins.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SendError {
    /// Payload exceeds the length limit.
    #[error("Failed to send message: Payload too long")]
    PayloadTooLong,

    /// Recipient number is not acceptable.
    #[error("Failed to send message: Invalid recipient")]
    InvalidRecipient,

    /// Message ID is not 10 decimal digits.
    #[error("Failed to send message: Invalid message ID")]
    InvalidId,

    /// Payload is blank.
    #[error("Failed to send message: Message content cannot be empty")]
    EmptyContent,
}

/// Session-wide message collections partitioned by status.
#[derive(Debug, Default)]
pub struct MessageStore {
    sent: Vec<Message>,
    stored: Vec<Message>,
    disregarded: Vec<Message>,
    sent_counter: u32,
}

impl MessageStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn collection_mut(&mut self, status: MessageStatus) -> &mut Vec<Message> {
        match status {
            MessageStatus::Sent => &mut self.sent,
            MessageStatus::Stored => &mut self.stored,
            MessageStatus::Disregarded => &mut self.disregarded,
        }
    }

    /// Add a message to a status collection.
    ///
    /// Any existing entry with the same ID is replaced.
    pub fn add(&mut self, message: Message, status: MessageStatus) {
        let collection = self.collection_mut(status);
        collection.retain(|m| m.id() != message.id());
        collection.push(message);
    }

    /// Send a message.
    ///
    /// Validates the payload length, recipient, ID format, and content
    /// in that order. On success the message receives the next send
    /// index and its derived hash, and a copy joins the sent collection.
    /// Sending the same message again assigns a fresh index; the counter
    /// never rewinds.
    pub fn send(&mut self, message: &mut Message) -> std::result::Result<(), SendError> {
        if let PayloadVerdict::TooLong { .. } = check_payload_length(message.payload()) {
            return Err(SendError::PayloadTooLong);
        }

        if check_recipient(message.recipient()) != RecipientVerdict::Captured {
            return Err(SendError::InvalidRecipient);
        }

        if !Message::is_valid_id(message.id()) {
            return Err(SendError::InvalidId);
        }

        if message.payload().trim().is_empty() {
            return Err(SendError::EmptyContent);
        }

        self.sent_counter += 1;
        message.set_index(self.sent_counter);
        message.set_hash(Message::compute_hash(
            message.id(),
            message.index(),
            message.payload(),
        ));
        self.add(message.clone(), MessageStatus::Sent);

        info!(id = %message.id(), index = message.index(), "Message sent");
        Ok(())
    }

    /// Persist a message through the archive.
    ///
    /// A message that has never been sent (index 0) is a draft and also
    /// joins the stored collection. Returns the name of the persisted
    /// unit.
    pub fn store_draft(&mut self, message: &Message, archive: &MessageArchive) -> Result<String> {
        let file_name = archive.save(message)?;

        if message.index() == 0 {
            self.add(message.clone(), MessageStatus::Stored);
        }

        info!(id = %message.id(), file = %file_name, "Message stored");
        Ok(file_name)
    }

    /// Add a message to the disregarded collection.
    pub fn disregard(&mut self, message: Message) {
        self.add(message, MessageStatus::Disregarded);
    }

    /// Number of successful sends since the last reset.
    ///
    /// Counts send operations, not surviving entries; deleting a sent
    /// message does not decrease it.
    pub fn total_sent(&self) -> u32 {
        self.sent_counter
    }

    /// The message with the longest payload among sent and stored
    /// messages. Ties go to the first encountered, sent before stored.
    pub fn longest_message(&self) -> Option<&Message> {
        let mut longest: Option<&Message> = None;
        let mut max_length = 0;

        for msg in self.sent.iter().chain(self.stored.iter()) {
            let length = msg.payload().chars().count();
            if longest.is_none() || length > max_length {
                longest = Some(msg);
                max_length = length;
            }
        }

        longest
    }

    /// Find a message by exact ID across all three collections,
    /// searching sent, then stored, then disregarded.
    pub fn search_by_id(&self, id: &str) -> Option<&Message> {
        self.sent
            .iter()
            .chain(self.stored.iter())
            .chain(self.disregarded.iter())
            .find(|m| m.id() == id)
    }

    /// All sent and stored messages addressed to the given recipient,
    /// in encounter order, each tagged with its source collection.
    pub fn search_by_recipient(&self, recipient: &str) -> Vec<(MessageStatus, &Message)> {
        let sent = self
            .sent
            .iter()
            .filter(|m| m.recipient() == recipient)
            .map(|m| (MessageStatus::Sent, m));
        let stored = self
            .stored
            .iter()
            .filter(|m| m.recipient() == recipient)
            .map(|m| (MessageStatus::Stored, m));

        sent.chain(stored).collect()
    }

    /// Remove the first message whose hash matches, scanning stored,
    /// then sent, then disregarded.
    ///
    /// Returns the removed message and its source collection, or `None`
    /// if no hash matches anywhere.
    pub fn delete_by_hash(&mut self, hash: &str) -> Option<(MessageStatus, Message)> {
        for status in [
            MessageStatus::Stored,
            MessageStatus::Sent,
            MessageStatus::Disregarded,
        ] {
            let collection = self.collection_mut(status);
            if let Some(pos) = collection.iter().position(|m| m.hash() == hash) {
                return Some((status, collection.remove(pos)));
            }
        }

        None
    }

    /// Full report of the sent collection.
    pub fn report(&self) -> String {
        let mut report = String::from("--- Sent Messages Report ---\n");

        if self.sent.is_empty() {
            report.push_str("No messages have been sent.");
            return report;
        }

        for msg in &self.sent {
            report.push_str(&format!("Sender: {}\n", msg.sender()));
            report.push_str(&format!("Recipient: {}\n", msg.recipient()));
            report.push_str(&format!("Message ID: {}\n", msg.id()));
            report.push_str(&format!("Message Hash: {}\n", msg.hash()));
            report.push_str(&format!("Message: {}\n", msg.payload()));
            report.push_str("---------------------------\n");
        }

        report
    }

    /// Short preview listing of sent messages for the given user.
    pub fn sent_summary(&self, current_user: &str) -> String {
        if self.sent.is_empty() {
            return "No messages have been sent.".to_string();
        }

        let mut summary = format!("Sent Messages (Sender: {current_user}):\n");
        for msg in &self.sent {
            let preview: String = msg.payload().chars().take(30).collect();
            summary.push_str(&format!(
                "To: {}, Message: \"{}...\"\n",
                msg.recipient(),
                preview
            ));
        }

        summary
    }

    /// Load persisted messages from the archive into the stored
    /// collection.
    ///
    /// Units without a sender get `fallback_sender`. A message whose ID
    /// is already in the stored collection is skipped; the first loaded
    /// record wins. Returns the number of messages added.
    pub fn load_stored(&mut self, archive: &MessageArchive, fallback_sender: &str) -> Result<usize> {
        let mut added = 0;

        for message in archive.load_all(fallback_sender)? {
            if self.stored.iter().any(|m| m.id() == message.id()) {
                continue;
            }
            self.stored.push(message);
            added += 1;
        }

        info!(count = added, "Loaded stored messages from archive");
        Ok(added)
    }

    /// Clear all collections and zero the send counter.
    ///
    /// Fresh-session semantics; used for test isolation.
    pub fn reset(&mut self) {
        self.sent.clear();
        self.stored.clear();
        self.disregarded.clear();
        self.sent_counter = 0;
    }

    /// The sent collection, in send order.
    pub fn sent(&self) -> &[Message] {
        &self.sent
    }

    /// The stored collection.
    pub fn stored(&self) -> &[Message] {
        &self.stored
    }

    /// The disregarded collection.
    pub fn disregarded(&self) -> &[Message] {
        &self.disregarded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_message(payload: &str) -> Message {
        Message::new("+27718693002", payload, "kyl_1")
    }

    #[test]
    fn test_send_success() {
        let mut store = MessageStore::new();
        let mut msg = valid_message("Hi Mike, can you join us for dinner tonight");

        assert_eq!(store.send(&mut msg), Ok(()));
        assert_eq!(msg.index(), 1);
        assert!(!msg.hash().is_empty());
        assert_eq!(store.sent().len(), 1);
        assert_eq!(store.total_sent(), 1);
        assert_eq!(SEND_SUCCESS_MESSAGE, "Message successfully sent.");
    }

    #[test]
    fn test_send_assigns_expected_hash() {
        let mut store = MessageStore::new();
        let mut msg = valid_message("Hi Mike, can you join us for dinner tonight");

        store.send(&mut msg).unwrap();
        let expected = Message::compute_hash(msg.id(), 1, msg.payload());
        assert_eq!(msg.hash(), expected);
    }

    #[test]
    fn test_send_invalid_recipient() {
        let mut store = MessageStore::new();
        let mut msg = Message::new("08575975889", "Hi Keegan, did you receive the payment?", "kyl_1");

        assert_eq!(store.send(&mut msg), Err(SendError::InvalidRecipient));
        assert_eq!(msg.index(), 0);
        assert_eq!(msg.hash(), "");
        assert_eq!(store.total_sent(), 0);
        assert!(store.sent().is_empty());
    }

    #[test]
    fn test_send_payload_too_long() {
        let mut store = MessageStore::new();
        let mut msg = valid_message(&"a".repeat(251));

        assert_eq!(store.send(&mut msg), Err(SendError::PayloadTooLong));
        assert_eq!(store.total_sent(), 0);
    }

    #[test]
    fn test_send_empty_payload() {
        let mut store = MessageStore::new();
        let mut msg = valid_message("   ");

        assert_eq!(store.send(&mut msg), Err(SendError::EmptyContent));
        assert_eq!(store.total_sent(), 0);
    }

    #[test]
    fn test_send_invalid_id() {
        let mut store = MessageStore::new();
        let mut msg = Message::from_parts("123", "+27718693002", "Hello there", 0, "", "kyl_1");

        assert_eq!(store.send(&mut msg), Err(SendError::InvalidId));
    }

    #[test]
    fn test_send_twice_keeps_counting() {
        let mut store = MessageStore::new();
        let mut msg = valid_message("Hello again");

        store.send(&mut msg).unwrap();
        assert_eq!(msg.index(), 1);
        store.send(&mut msg).unwrap();
        assert_eq!(msg.index(), 2);
        assert_eq!(store.total_sent(), 2);
        // Replace-on-add keeps a single entry for the ID
        assert_eq!(store.sent().len(), 1);
        assert_eq!(store.sent()[0].index(), 2);
    }

    #[test]
    fn test_send_error_display() {
        assert_eq!(
            SendError::PayloadTooLong.to_string(),
            "Failed to send message: Payload too long"
        );
        assert_eq!(
            SendError::InvalidRecipient.to_string(),
            "Failed to send message: Invalid recipient"
        );
        assert_eq!(
            SendError::InvalidId.to_string(),
            "Failed to send message: Invalid message ID"
        );
        assert_eq!(
            SendError::EmptyContent.to_string(),
            "Failed to send message: Message content cannot be empty"
        );
    }

    #[test]
    fn test_add_replaces_same_id() {
        let mut store = MessageStore::new();
        let msg = valid_message("first");
        let mut replacement = msg.clone();
        replacement.set_sender("oth_r");

        store.add(msg, MessageStatus::Stored);
        store.add(replacement, MessageStatus::Stored);

        assert_eq!(store.stored().len(), 1);
        assert_eq!(store.stored()[0].sender(), "oth_r");
    }

    #[test]
    fn test_disregard() {
        let mut store = MessageStore::new();
        let msg = valid_message("Yohoooo, I am at your gate.");

        store.disregard(msg.clone());
        assert_eq!(store.disregarded().len(), 1);
        assert_eq!(msg.index(), 0);
    }

    #[test]
    fn test_longest_message_spans_sent_and_stored() {
        let mut store = MessageStore::new();
        let mut short = valid_message("Did you get the cake?");
        store.send(&mut short).unwrap();

        let long = Message::new(
            "+27838884567",
            "Where are you? You are late! I have asked you to be on time.",
            "kyl_1",
        );
        store.add(long.clone(), MessageStatus::Stored);

        let longest = store.longest_message().unwrap();
        assert_eq!(longest.payload(), long.payload());
    }

    #[test]
    fn test_longest_message_ignores_disregarded() {
        let mut store = MessageStore::new();
        let mut sent = valid_message("short");
        store.send(&mut sent).unwrap();
        store.disregard(valid_message(
            "a very long disregarded payload that would otherwise win",
        ));

        assert_eq!(store.longest_message().unwrap().payload(), "short");
    }

    #[test]
    fn test_longest_message_empty() {
        let store = MessageStore::new();
        assert!(store.longest_message().is_none());
    }

    #[test]
    fn test_search_by_id_across_collections() {
        let mut store = MessageStore::new();
        let msg = valid_message("find me");
        let id = msg.id().to_string();
        store.disregard(msg);

        assert!(store.search_by_id(&id).is_some());
        assert!(store.search_by_id("0000000000").is_none());
    }

    #[test]
    fn test_search_by_recipient() {
        let mut store = MessageStore::new();
        let mut sent = Message::new("+27838884567", "It is dinner time!", "kyl_1");
        store.send(&mut sent).unwrap();
        store.add(
            Message::new("+27838884567", "Ok, I am leaving without you.", "kyl_1"),
            MessageStatus::Stored,
        );
        store.add(
            Message::new("+27000000000", "different recipient", "kyl_1"),
            MessageStatus::Stored,
        );

        let hits = store.search_by_recipient("+27838884567");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].0, MessageStatus::Sent);
        assert_eq!(hits[1].0, MessageStatus::Stored);
    }

    #[test]
    fn test_delete_by_hash_prefers_stored() {
        let mut store = MessageStore::new();

        let mut stored = Message::new("+27838884567", "Where are you?", "kyl_1");
        stored.set_hash("AA:0:WHEREYOU?");
        store.add(stored, MessageStatus::Stored);

        let mut sent = Message::new("+27718693002", "Where are you?", "kyl_1");
        sent.set_hash("AA:0:WHEREYOU?");
        store.add(sent, MessageStatus::Sent);

        let (status, removed) = store.delete_by_hash("AA:0:WHEREYOU?").unwrap();
        assert_eq!(status, MessageStatus::Stored);
        assert_eq!(removed.recipient(), "+27838884567");
        assert_eq!(store.stored().len(), 0);
        assert_eq!(store.sent().len(), 1);
    }

    #[test]
    fn test_delete_by_hash_second_call_misses() {
        let mut store = MessageStore::new();
        let mut msg = valid_message("Did you get the cake?");
        store.send(&mut msg).unwrap();
        let hash = msg.hash().to_string();

        assert!(store.delete_by_hash(&hash).is_some());
        assert!(store.delete_by_hash(&hash).is_none());
    }

    #[test]
    fn test_delete_by_hash_skips_unhashed_records() {
        let mut store = MessageStore::new();
        store.add(valid_message("draft without hash"), MessageStatus::Stored);

        assert!(store.delete_by_hash("AA:0:SOMETHING").is_none());
        assert_eq!(store.stored().len(), 1);
    }

    #[test]
    fn test_report_lists_sent_messages() {
        let mut store = MessageStore::new();
        let mut msg = valid_message("Did you get the cake?");
        store.send(&mut msg).unwrap();

        let report = store.report();
        assert!(report.starts_with("--- Sent Messages Report ---"));
        assert!(report.contains("Sender: kyl_1"));
        assert!(report.contains("Recipient: +27718693002"));
        assert!(report.contains(&format!("Message ID: {}", msg.id())));
        assert!(report.contains(&format!("Message Hash: {}", msg.hash())));
        assert!(report.contains("Message: Did you get the cake?"));
    }

    #[test]
    fn test_report_empty() {
        let store = MessageStore::new();
        assert!(store.report().contains("No messages have been sent."));
    }

    #[test]
    fn test_sent_summary() {
        let mut store = MessageStore::new();
        let mut msg = valid_message("Hi Mike, can you join us for dinner tonight");
        store.send(&mut msg).unwrap();

        let summary = store.sent_summary("kyl_1");
        assert!(summary.starts_with("Sent Messages (Sender: kyl_1):"));
        assert!(summary.contains("To: +27718693002"));
        assert!(summary.contains("Hi Mike, can you join us for"));
    }

    #[test]
    fn test_reset() {
        let mut store = MessageStore::new();
        let mut msg = valid_message("Hello there");
        store.send(&mut msg).unwrap();
        store.disregard(valid_message("noise"));

        store.reset();
        assert!(store.sent().is_empty());
        assert!(store.stored().is_empty());
        assert!(store.disregarded().is_empty());
        assert_eq!(store.total_sent(), 0);
    }
}
