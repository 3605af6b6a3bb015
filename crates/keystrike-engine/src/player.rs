//! The player record the landing page stores before the game starts.
//! Read once at startup for the pilot label; never written here.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Name shown when no usable record exists.
pub const GUEST: &str = "GUEST";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    pub name: String,
    /// ISO-8601 time the record was written.
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub session_id: String,
}

impl PlayerRecord {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Upper-cased display name, falling back to `GUEST` when the record is
    /// absent, malformed or has a blank name.
    pub fn display_name(stored: Option<&str>) -> String {
        let Some(json) = stored else {
            return GUEST.to_string();
        };
        match Self::from_json(json) {
            Ok(record) if !record.name.trim().is_empty() => record.name.trim().to_uppercase(),
            Ok(_) => GUEST.to_string(),
            Err(err) => {
                log::warn!("unreadable player record, using {GUEST}: {err}");
                GUEST.to_string()
            }
        }
    }
}

/// HUD label for a display name.
pub fn pilot_label(display_name: &str) -> String {
    format!("NAME: {display_name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_full_record() {
        let json = r#"{"name":"Ripley","timestamp":"2026-10-19T08:00:00Z","sessionId":"abc"}"#;
        let record = PlayerRecord::from_json(json).unwrap();
        assert_eq!(record.session_id, "abc");
        assert_eq!(PlayerRecord::display_name(Some(json)), "RIPLEY");
    }

    #[test]
    fn falls_back_to_guest() {
        assert_eq!(PlayerRecord::display_name(None), GUEST);
        assert_eq!(PlayerRecord::display_name(Some("{}")), GUEST);
        assert_eq!(PlayerRecord::display_name(Some("not json")), GUEST);
        assert_eq!(PlayerRecord::display_name(Some(r#"{"name":"  "}"#)), GUEST);
        assert_eq!(PlayerRecord::display_name(Some(r#"{"name":42}"#)), GUEST);
    }

    #[test]
    fn label_format() {
        assert_eq!(pilot_label("RIPLEY"), "NAME: RIPLEY");
    }
}
