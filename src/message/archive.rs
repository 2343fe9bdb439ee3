//! Flat-file message persistence for chatter.
//!
//! Each message is persisted as one JSON unit in a single directory:
//! `message_{index}.json` for sent messages, `message_draft_{id}.json`
//! for drafts that have never been sent (index 0), so multiple drafts
//! cannot clobber one filename.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::message::types::Message;
use crate::{ChatterError, Result};

/// On-disk shape of one persisted message unit.
///
/// Older units may lack `SENDER_USERNAME`; the loader substitutes a
/// fallback sender for those.
#[derive(Debug, Serialize, Deserialize)]
struct MessageUnit {
    #[serde(rename = "MESSAGE_ID")]
    id: String,
    #[serde(rename = "MESSAGE_RECIPIENT")]
    recipient: String,
    #[serde(rename = "MESSAGE_PAYLOAD")]
    payload: String,
    #[serde(rename = "MESSAGE_INDEX")]
    index: u32,
    #[serde(rename = "MESSAGE_HASH", default)]
    hash: String,
    #[serde(rename = "SENDER_USERNAME", default)]
    sender: Option<String>,
}

/// Directory-backed archive of persisted message units.
#[derive(Debug, Clone)]
pub struct MessageArchive {
    /// Directory holding the message units.
    base_path: PathBuf,
}

impl MessageArchive {
    /// Create an archive rooted at the given directory.
    ///
    /// The directory is created if it doesn't exist.
    pub fn new(base_path: impl Into<PathBuf>) -> Result<Self> {
        let base_path = base_path.into();
        fs::create_dir_all(&base_path)?;

        Ok(Self { base_path })
    }

    /// The archive directory.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Unit filename for a message.
    ///
    /// Sent messages are keyed by index, drafts by ID.
    pub fn file_name(message: &Message) -> String {
        if message.index() == 0 {
            format!("message_draft_{}.json", message.id())
        } else {
            format!("message_{}.json", message.index())
        }
    }

    /// Check whether a filename follows either unit naming pattern.
    fn is_unit_name(name: &str) -> bool {
        let Some(stem) = name.strip_suffix(".json") else {
            return false;
        };
        let Some(rest) = stem.strip_prefix("message_") else {
            return false;
        };
        let digits = rest.strip_prefix("draft_").unwrap_or(rest);

        !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
    }

    /// Persist a message as one JSON unit.
    ///
    /// Returns the unit filename.
    pub fn save(&self, message: &Message) -> Result<String> {
        let unit = MessageUnit {
            id: message.id().to_string(),
            recipient: message.recipient().to_string(),
            payload: message.payload().to_string(),
            index: message.index(),
            hash: message.hash().to_string(),
            sender: Some(message.sender().to_string()),
        };

        let file_name = Self::file_name(message);
        let content = serde_json::to_string(&unit)
            .map_err(|e| ChatterError::Storage(format!("encoding {file_name}: {e}")))?;
        fs::write(self.base_path.join(&file_name), content)?;

        Ok(file_name)
    }

    /// Load every recognized message unit in the archive directory.
    ///
    /// Units without a sender get `fallback_sender`. Files that cannot
    /// be read or decoded are skipped with a warning; they never fail
    /// the batch. Entries are visited in filename order.
    pub fn load_all(&self, fallback_sender: &str) -> Result<Vec<Message>> {
        let mut names: Vec<String> = fs::read_dir(&self.base_path)?
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|name| Self::is_unit_name(name))
            .collect();
        names.sort();

        let mut messages = Vec::with_capacity(names.len());

        for name in names {
            let path = self.base_path.join(&name);
            let content = match fs::read_to_string(&path) {
                Ok(content) => content,
                Err(e) => {
                    warn!(file = %name, error = %e, "Skipping unreadable message unit");
                    continue;
                }
            };

            let unit: MessageUnit = match serde_json::from_str(&content) {
                Ok(unit) => unit,
                Err(e) => {
                    warn!(file = %name, error = %e, "Skipping undecodable message unit");
                    continue;
                }
            };

            let sender = unit.sender.unwrap_or_else(|| fallback_sender.to_string());
            messages.push(Message::from_parts(
                unit.id,
                unit.recipient,
                unit.payload,
                unit.index,
                unit.hash,
                sender,
            ));
        }

        Ok(messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_archive() -> (TempDir, MessageArchive) {
        let temp_dir = TempDir::new().unwrap();
        let archive = MessageArchive::new(temp_dir.path()).unwrap();
        (temp_dir, archive)
    }

    #[test]
    fn test_new_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let archive_path = temp_dir.path().join("messages");

        assert!(!archive_path.exists());

        let archive = MessageArchive::new(&archive_path).unwrap();

        assert!(archive_path.exists());
        assert_eq!(archive.base_path(), archive_path);
    }

    #[test]
    fn test_file_name_draft_keyed_by_id() {
        let msg = Message::from_parts("0012345678", "+27718693002", "draft", 0, "", "kyl_1");
        assert_eq!(
            MessageArchive::file_name(&msg),
            "message_draft_0012345678.json"
        );
    }

    #[test]
    fn test_file_name_sent_keyed_by_index() {
        let msg = Message::from_parts("0012345678", "+27718693002", "sent", 4, "00:4:SENTSENT", "kyl_1");
        assert_eq!(MessageArchive::file_name(&msg), "message_4.json");
    }

    #[test]
    fn test_is_unit_name() {
        assert!(MessageArchive::is_unit_name("message_1.json"));
        assert!(MessageArchive::is_unit_name("message_42.json"));
        assert!(MessageArchive::is_unit_name("message_draft_0012345678.json"));
        assert!(!MessageArchive::is_unit_name("message_.json"));
        assert!(!MessageArchive::is_unit_name("message_1.txt"));
        assert!(!MessageArchive::is_unit_name("note.json"));
        assert!(!MessageArchive::is_unit_name("message_draft_.json"));
        assert!(!MessageArchive::is_unit_name("message_abc.json"));
    }

    #[test]
    fn test_save_writes_unit_keys() {
        let (_temp_dir, archive) = setup_archive();
        let msg = Message::from_parts(
            "0012345678",
            "+27718693002",
            "This is a draft.",
            0,
            "",
            "kyl_1",
        );

        let file_name = archive.save(&msg).unwrap();
        assert_eq!(file_name, "message_draft_0012345678.json");

        let content = fs::read_to_string(archive.base_path().join(&file_name)).unwrap();
        assert!(content.contains("\"MESSAGE_ID\":\"0012345678\""));
        assert!(content.contains("\"MESSAGE_INDEX\":0"));
        assert!(content.contains("\"MESSAGE_HASH\":\"\""));
        assert!(content.contains("\"MESSAGE_PAYLOAD\":\"This is a draft.\""));
        assert!(content.contains("\"SENDER_USERNAME\":\"kyl_1\""));
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let (_temp_dir, archive) = setup_archive();
        let msg = Message::from_parts(
            "0012345678",
            "+27718693002",
            "Hi Mike, can you join us for dinner tonight",
            1,
            "00:1:HITONIGHT",
            "kyl_1",
        );

        archive.save(&msg).unwrap();
        let loaded = archive.load_all("fallback").unwrap();

        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0], msg);
    }

    #[test]
    fn test_load_substitutes_fallback_sender() {
        let (_temp_dir, archive) = setup_archive();
        // Unit written without a SENDER_USERNAME key
        fs::write(
            archive.base_path().join("message_draft_0012345678.json"),
            r#"{"MESSAGE_ID":"0012345678","MESSAGE_RECIPIENT":"+27718693002","MESSAGE_PAYLOAD":"old unit","MESSAGE_INDEX":0,"MESSAGE_HASH":""}"#,
        )
        .unwrap();

        let loaded = archive.load_all("legacy_user").unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].sender(), "legacy_user");
    }

    #[test]
    fn test_load_skips_undecodable_units() {
        let (_temp_dir, archive) = setup_archive();
        fs::write(archive.base_path().join("message_1.json"), "not json").unwrap();

        let msg = Message::from_parts("0012345678", "+27718693002", "good", 2, "00:2:GOODGOOD", "kyl_1");
        archive.save(&msg).unwrap();

        let loaded = archive.load_all("fallback").unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].payload(), "good");
    }

    #[test]
    fn test_load_ignores_unrelated_files() {
        let (_temp_dir, archive) = setup_archive();
        fs::write(archive.base_path().join("notes.txt"), "not a unit").unwrap();
        fs::write(archive.base_path().join("message_abc.json"), "{}").unwrap();

        let loaded = archive.load_all("fallback").unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_load_empty_directory() {
        let (_temp_dir, archive) = setup_archive();
        assert!(archive.load_all("fallback").unwrap().is_empty());
    }

    #[test]
    fn test_two_drafts_do_not_collide() {
        let (_temp_dir, archive) = setup_archive();
        let a = Message::from_parts("0000000001", "+27718693002", "draft one", 0, "", "kyl_1");
        let b = Message::from_parts("0000000002", "+27718693002", "draft two", 0, "", "kyl_1");

        archive.save(&a).unwrap();
        archive.save(&b).unwrap();

        let loaded = archive.load_all("fallback").unwrap();
        assert_eq!(loaded.len(), 2);
    }
}
