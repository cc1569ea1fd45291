use serde::{Deserialize, Deserializer, Serialize};

/// Availability HipChat falls back to when the user has none set.
pub const DEFAULT_SHOW: &str = "chat";

/// The Atlassian HipChat API user object, as far as a status update needs it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HipChatUser {
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "nullable")]
    pub presence: Presence,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub mention_name: String,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub timezone: String,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub email: String,
}

/// Status line and availability. Both are always sent, even when empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Presence {
    #[serde(default, deserialize_with = "nullable")]
    pub status: String,
    #[serde(default, deserialize_with = "nullable")]
    pub show: String,
}

impl HipChatUser {
    /// Replace the status line, keeping any availability the user already has.
    pub fn merge_status(&mut self, status: String) {
        self.presence.status = status;
        if self.presence.show.is_empty() {
            self.presence.show = DEFAULT_SHOW.to_string();
        }
    }
}

/// Treat an explicit `null` the same as a missing field.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
