//! Message types for chatter.

use std::fmt;

use rand::Rng;

/// Maximum length for a message payload.
pub const MAX_PAYLOAD_LENGTH: usize = 250;

/// Legacy 10-digit recipient number accepted without the international
/// code. Scoped to this exact value; no other prefix-less number passes.
pub const LEGACY_RECIPIENT: &str = "0838884567";

/// Number of digits in a message ID.
pub const MESSAGE_ID_LENGTH: usize = 10;

/// Status collections a message can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStatus {
    /// Successfully sent.
    Sent,
    /// Stored for later.
    Stored,
    /// Disregarded by the user.
    Disregarded,
}

impl MessageStatus {
    /// Collection name used in user-facing reports.
    pub fn collection_name(&self) -> &'static str {
        match self {
            MessageStatus::Sent => "Sent Messages",
            MessageStatus::Stored => "Stored Messages",
            MessageStatus::Disregarded => "Disregarded Messages",
        }
    }
}

impl fmt::Display for MessageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageStatus::Sent => write!(f, "Sent"),
            MessageStatus::Stored => write!(f, "Stored"),
            MessageStatus::Disregarded => write!(f, "Disregarded"),
        }
    }
}

/// Verdict of the payload length check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadVerdict {
    /// Payload fits within the limit.
    Ready,
    /// Payload exceeds the limit by `excess` characters.
    TooLong {
        /// Characters over the limit.
        excess: usize,
    },
}

impl fmt::Display for PayloadVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayloadVerdict::Ready => write!(f, "Message ready to send."),
            PayloadVerdict::TooLong { excess } => write!(
                f,
                "Message exceeds {MAX_PAYLOAD_LENGTH} characters by {excess}, please reduce size."
            ),
        }
    }
}

/// Verdict of the recipient number check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipientVerdict {
    /// Recipient number accepted.
    Captured,
    /// Recipient number rejected.
    InvalidFormat,
}

impl fmt::Display for RecipientVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecipientVerdict::Captured => write!(f, "Cell phone number successfully captured."),
            RecipientVerdict::InvalidFormat => write!(
                f,
                "Cell phone number is incorrectly formatted or does not contain an international code. Please correct the number and try again."
            ),
        }
    }
}

/// Check a payload against the length limit.
///
/// # Examples
///
/// ```
/// use chatter::message::{check_payload_length, PayloadVerdict};
///
/// assert_eq!(check_payload_length("Hello"), PayloadVerdict::Ready);
/// assert_eq!(
///     check_payload_length(&"a".repeat(251)),
///     PayloadVerdict::TooLong { excess: 1 }
/// );
/// ```
pub fn check_payload_length(payload: &str) -> PayloadVerdict {
    let length = payload.chars().count();
    if length <= MAX_PAYLOAD_LENGTH {
        PayloadVerdict::Ready
    } else {
        PayloadVerdict::TooLong {
            excess: length - MAX_PAYLOAD_LENGTH,
        }
    }
}

/// Check a recipient cell number.
///
/// Accepts `+27` followed by exactly 9 digits, or the single legacy
/// number carried without its international code.
pub fn check_recipient(recipient: &str) -> RecipientVerdict {
    if recipient.trim().is_empty() {
        return RecipientVerdict::InvalidFormat;
    }

    let international = match recipient.strip_prefix("+27") {
        Some(rest) => rest.len() == 9 && rest.chars().all(|c| c.is_ascii_digit()),
        None => false,
    };

    if international || recipient == LEGACY_RECIPIENT {
        RecipientVerdict::Captured
    } else {
        RecipientVerdict::InvalidFormat
    }
}

/// One chat message.
///
/// The id, recipient, and payload are fixed at construction. The index
/// stays 0 and the hash empty until the message is sent (or the fields
/// are assigned explicitly, e.g. when rebuilding from a persisted unit).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    id: String,
    recipient: String,
    payload: String,
    sender: String,
    index: u32,
    hash: String,
}

impl Message {
    /// Create a new message with a freshly generated 10-digit ID.
    ///
    /// IDs are drawn uniformly at random; collisions are possible and
    /// resolved by first-match search semantics.
    pub fn new(
        recipient: impl Into<String>,
        payload: impl Into<String>,
        sender: impl Into<String>,
    ) -> Self {
        let mut rng = rand::rng();
        let id: u64 = rng.random_range(0..10_000_000_000);

        Self {
            id: format!("{id:010}"),
            recipient: recipient.into(),
            payload: payload.into(),
            sender: sender.into(),
            index: 0,
            hash: String::new(),
        }
    }

    /// Rebuild a message from previously persisted fields.
    pub fn from_parts(
        id: impl Into<String>,
        recipient: impl Into<String>,
        payload: impl Into<String>,
        index: u32,
        hash: impl Into<String>,
        sender: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            recipient: recipient.into(),
            payload: payload.into(),
            sender: sender.into(),
            index,
            hash: hash.into(),
        }
    }

    /// Check that an ID is exactly 10 decimal digits.
    pub fn is_valid_id(id: &str) -> bool {
        id.len() == MESSAGE_ID_LENGTH && id.chars().all(|c| c.is_ascii_digit())
    }

    /// Derive the message hash from an ID, index, and payload.
    ///
    /// The hash is the first two ID characters, the index, and the first
    /// and last words of the trimmed payload, joined with colons and
    /// uppercased. An ID shorter than two characters or a blank payload
    /// yields an empty hash.
    ///
    /// # Examples
    ///
    /// ```
    /// use chatter::message::Message;
    ///
    /// let hash = Message::compute_hash(
    ///     "0012345678",
    ///     0,
    ///     "Hi Mike, can you join us for dinner tonight",
    /// );
    /// assert_eq!(hash, "00:0:HITONIGHT");
    /// ```
    pub fn compute_hash(id: &str, index: u32, payload: &str) -> String {
        if id.chars().count() < 2 || payload.trim().is_empty() {
            return String::new();
        }

        let prefix: String = id.chars().take(2).collect();
        let words: Vec<&str> = payload.split_whitespace().collect();

        let hash = match (words.first(), words.last()) {
            (Some(first), Some(last)) => format!("{prefix}:{index}:{first}{last}"),
            _ => format!("{prefix}:{index}:"),
        };

        hash.to_uppercase()
    }

    /// Notification text announcing the generated ID.
    pub fn id_notification(&self) -> String {
        format!("Message ID generated: {}", self.id)
    }

    /// The message ID.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The recipient cell number.
    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    /// The message payload.
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// The sender username.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// The send index; 0 while the message has never been sent.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// The message hash; empty until derived.
    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// Re-assign the sender username.
    pub fn set_sender(&mut self, sender: impl Into<String>) {
        self.sender = sender.into();
    }

    /// Assign the send index.
    pub fn set_index(&mut self, index: u32) {
        self.index = index;
    }

    /// Assign the hash.
    pub fn set_hash(&mut self, hash: impl Into<String>) {
        self.hash = hash.into();
    }
}
