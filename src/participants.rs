//! Participant records and the picker row formatters.
//!
//! The picker widget shows one row per participant (avatar plus name) and a
//! plain-text collapsed view. Records with no id are the placeholder entry.

use serde::Deserialize;

/// Fallback avatar for participants without one of their own.
pub const DEFAULT_AVATAR: &str = "/static/default_avatar.png";

/// One selectable participant. `id == None` marks the placeholder row.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Participant {
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl Participant {
    pub fn placeholder(label: &str) -> Self {
        Self {
            id: None,
            name: label.to_string(),
            avatar: None,
        }
    }
}

/// Rendered form of a dropdown row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerRow {
    /// Plain label, no decoration.
    Placeholder(String),
    /// Avatar thumbnail followed by the display name.
    User { avatar: String, label: String },
}

/// Dropdown row for a participant: placeholder entries render as their bare
/// label, real users get an avatar (their own, or the default) and the name.
pub fn format_result(user: &Participant) -> PickerRow {
    if user.id.is_none() {
        return PickerRow::Placeholder(user.name.clone());
    }
    let avatar = user
        .avatar
        .clone()
        .unwrap_or_else(|| DEFAULT_AVATAR.to_string());
    PickerRow::User {
        avatar,
        label: user.name.clone(),
    }
}

/// Collapsed/selected view: always the label text, never the avatar.
pub fn format_selection(user: &Participant) -> String {
    user.name.clone()
}

/// Decode a roster from host-provided JSON (`[{id, name, avatar?}]`).
pub fn decode_roster(json: &str) -> Result<Vec<Participant>, serde_json::Error> {
    serde_json::from_str(json)
}
