//! Conversation log entry types.
//!
//! The backend keeps an in-memory conversation log and serves it as a JSON
//! array. Each element carries a speaker role and the spoken text, plus a
//! few optional call-metadata fields.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Speaker role for a log entry.
///
/// The backend emits lowercase role strings. Roles we do not know about are
/// preserved as [`Role::Other`] rather than failing the whole fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    /// System message (instructions, service notices).
    System,
    /// The caller.
    User,
    /// The assistant's response.
    Assistant,
    /// Any other speaker identifier, kept verbatim.
    Other(String),
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        match s.as_str() {
            "system" => Self::System,
            "user" => Self::User,
            "assistant" => Self::Assistant,
            _ => Self::Other(s),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::System => "system".into(),
            Role::User => "user".into(),
            Role::Assistant => "assistant".into(),
            Role::Other(s) => s,
        }
    }
}

impl Role {
    /// Display label for the speaker.
    pub fn label(&self) -> &str {
        match self {
            Self::System => "system",
            Self::User => "user",
            Self::Assistant => "assistant",
            Self::Other(s) => s,
        }
    }
}

/// A single entry in the conversation log.
///
/// Ordering is arrival order from the API and must be preserved. Only `role`
/// and `content` are guaranteed; everything else is optional call metadata
/// the backend may or may not attach. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Speaker role.
    pub role: Role,
    /// Spoken or generated text.
    pub content: String,
    /// RFC 3339 timestamp, kept verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    /// Caller phone number for this call.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caller_number: Option<String>,
    /// Call identifier assigned by the telephony provider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_sid: Option<String>,
}

impl LogEntry {
    /// Create an entry with just a role and content.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: None,
            caller_number: None,
            call_sid: None,
        }
    }

    /// Get the timestamp formatted for display (HH:MM in local time).
    ///
    /// Falls back to the raw string when it is not valid RFC 3339, and to
    /// an empty string when there is no timestamp at all.
    pub fn time_str(&self) -> String {
        match &self.timestamp {
            Some(raw) => match DateTime::parse_from_rfc3339(raw) {
                Ok(ts) => {
                    let local: DateTime<Local> = ts.into();
                    local.format("%H:%M").to_string()
                }
                Err(_) => raw.clone(),
            },
            None => String::new(),
        }
    }
}

/// Most recent caller number in the log, if any entry carries one.
pub fn latest_caller(entries: &[LogEntry]) -> Option<&str> {
    entries
        .iter()
        .rev()
        .find_map(|e| e.caller_number.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_from_string() {
        assert_eq!(Role::from("user".to_string()), Role::User);
        assert_eq!(Role::from("assistant".to_string()), Role::Assistant);
        assert_eq!(Role::from("system".to_string()), Role::System);
        assert_eq!(
            Role::from("operator".to_string()),
            Role::Other("operator".to_string())
        );
    }

    #[test]
    fn test_role_label_round_trip() {
        for role in [Role::System, Role::User, Role::Assistant] {
            let s: String = role.clone().into();
            assert_eq!(Role::from(s), role);
        }
        assert_eq!(Role::Other("operator".into()).label(), "operator");
    }

    #[test]
    fn test_entry_deserializes_minimal() {
        let entry: LogEntry = serde_json::from_str(r#"{"role":"user","content":"Hello"}"#).unwrap();
        assert_eq!(entry.role, Role::User);
        assert_eq!(entry.content, "Hello");
        assert!(entry.timestamp.is_none());
        assert!(entry.caller_number.is_none());
    }

    #[test]
    fn test_entry_ignores_unknown_fields() {
        let json = r#"{
            "role": "assistant",
            "content": "Hi there",
            "timestamp": "2024-03-01T12:34:56+00:00",
            "call_sid": "CA123",
            "caller_number": "+15551234567",
            "ai_response": "Hi there",
            "audio_url": "https://example.com/audio.mp3"
        }"#;
        let entry: LogEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.role, Role::Assistant);
        assert_eq!(entry.call_sid.as_deref(), Some("CA123"));
        assert_eq!(entry.caller_number.as_deref(), Some("+15551234567"));
    }

    #[test]
    fn test_time_str_formats_rfc3339() {
        let mut entry = LogEntry::new(Role::User, "hi");
        entry.timestamp = Some("2024-03-01T12:34:56+00:00".into());
        let time = entry.time_str();
        // HH:MM in local time; exact value depends on the test host's zone
        assert_eq!(time.len(), 5);
        assert!(time.contains(':'));
    }

    #[test]
    fn test_time_str_falls_back_to_raw() {
        let mut entry = LogEntry::new(Role::User, "hi");
        entry.timestamp = Some("yesterday".into());
        assert_eq!(entry.time_str(), "yesterday");

        entry.timestamp = None;
        assert_eq!(entry.time_str(), "");
    }

    #[test]
    fn test_latest_caller() {
        let mut first = LogEntry::new(Role::User, "hello");
        first.caller_number = Some("+15550001111".into());
        let middle = LogEntry::new(Role::Assistant, "hi");
        let mut last = LogEntry::new(Role::User, "bye");
        last.caller_number = Some("+15552223333".into());

        let entries = vec![first, middle, last];
        assert_eq!(latest_caller(&entries), Some("+15552223333"));

        let no_callers = vec![LogEntry::new(Role::User, "hello")];
        assert_eq!(latest_caller(&no_callers), None);
        assert_eq!(latest_caller(&[]), None);
    }
}
