use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::emotion::EmotionLabel;

const MESSAGE_ID_SUFFIX_LEN: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Ai,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emotion: Option<EmotionLabel>,
}

impl ChatMessage {
    pub fn new(text: impl Into<String>, sender: Sender, emotion: Option<EmotionLabel>) -> Self {
        Self::at(text, sender, emotion, Utc::now())
    }

    pub fn at(text: impl Into<String>, sender: Sender, emotion: Option<EmotionLabel>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: generate_message_id_at(timestamp),
            text: text.into(),
            sender,
            timestamp,
            emotion,
        }
    }

    pub fn is_from_user(&self) -> bool {
        self.sender == Sender::User
    }
}

pub fn generate_message_id() -> String {
    generate_message_id_at(Utc::now())
}

fn generate_message_id_at(timestamp: DateTime<Utc>) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("msg_{}_{}", timestamp.timestamp_millis(), &suffix[..MESSAGE_ID_SUFFIX_LEN])
}

/// Hour and minute, 24h clock.
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%H:%M").to_string()
}
