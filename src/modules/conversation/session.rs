use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::Serialize;

use crate::config::CompanionConfig;
use crate::modules::character::CharacterState;
use crate::modules::chat::{sanitize_input, ChatError, ChatMessage, Sender, SessionId, TranscriptStore};
use crate::modules::emotion::{EmotionAnalysis, EmotionClassifier, EmotionDetector};

pub const REPLY_FAILURE_MESSAGE: &str = "I'm sorry, I'm having trouble connecting right now. Can you try again?";

const FALLBACK_RESPONSES: [&str; 4] = [
    "That's interesting! Tell me more about that.",
    "I'm here to chat with you! What's on your mind?",
    "I love talking with you! What would you like to discuss?",
    "That sounds wonderful! I'm so glad you shared that with me.",
];

#[derive(Debug, Clone, Serialize)]
pub struct MessageOutcome {
    pub message: ChatMessage,
    pub analysis: Option<EmotionAnalysis>,
    pub animated: bool,
}

/// One conversation between a user and the companion character.
///
/// User messages and model replies are run through the detector, stored in
/// the transcript with their emotion, and may trigger a character reaction.
/// Canned text (welcome, fallback, apology) is stored as is.
pub struct ConversationSession<D: EmotionDetector = EmotionClassifier> {
    pub session_id: SessionId,
    pub config: CompanionConfig,
    character: CharacterState,
    detector: D,
    fallback_cursor: usize,
}

impl ConversationSession<EmotionClassifier> {
    pub fn new(config: CompanionConfig) -> Self {
        Self::new_with_id(config, uuid::Uuid::new_v4().to_string())
    }

    pub fn new_with_id(config: CompanionConfig, session_id: SessionId) -> Self {
        Self::with_detector(config, session_id, EmotionClassifier::new())
    }
}

impl<D: EmotionDetector> ConversationSession<D> {
    pub fn with_detector(config: CompanionConfig, session_id: SessionId, detector: D) -> Self {
        info!("Opening conversation session {} with {}", session_id, config.character.name);
        Self {
            session_id,
            config,
            character: CharacterState::new(),
            detector,
            fallback_cursor: 0,
        }
    }

    pub fn receive_user_message(&mut self, text: &str, now: DateTime<Utc>) -> Result<MessageOutcome, ChatError> {
        let sanitized = sanitize_input(text);
        if sanitized.is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        self.record(sanitized, Sender::User, now)
    }

    pub fn record_reply(&mut self, text: &str, now: DateTime<Utc>) -> Result<MessageOutcome, ChatError> {
        let reply = text.trim();
        if reply.is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        self.record(reply.to_string(), Sender::Ai, now)
    }

    /// Stores the apology shown when the reply backend failed. Not classified.
    pub fn record_reply_failure(&mut self, now: DateTime<Utc>) -> Result<MessageOutcome, ChatError> {
        self.record_canned(REPLY_FAILURE_MESSAGE.to_string(), now)
    }

    /// Canned reply used when no language-model backend is available.
    pub fn fallback_reply(&mut self, now: DateTime<Utc>) -> Result<MessageOutcome, ChatError> {
        let reply = if self.fallback_cursor == 0 {
            format!(
                "Hello! I'm {}, your anime companion! How are you feeling today?",
                self.config.character.name
            )
        } else {
            FALLBACK_RESPONSES[(self.fallback_cursor - 1) % FALLBACK_RESPONSES.len()].to_string()
        };
        self.fallback_cursor = (self.fallback_cursor % FALLBACK_RESPONSES.len()) + 1;

        self.record_canned(reply, now)
    }

    /// Answers with the next canned reply when `features.auto_response` is on.
    pub fn auto_reply(&mut self, now: DateTime<Utc>) -> Result<Option<MessageOutcome>, ChatError> {
        if !self.config.features.auto_response {
            return Ok(None);
        }

        self.fallback_reply(now).map(Some)
    }

    /// Greets the user. Returns `None` when the transcript already has messages.
    pub fn welcome(&mut self, now: DateTime<Utc>) -> Result<Option<ChatMessage>, ChatError> {
        if TranscriptStore::get_message_count(&self.session_id)? > 0 {
            return Ok(None);
        }

        let text = format!(
            "Hello! I'm {}, your emotional anime companion! I'm here to chat with you and respond to your emotions. How are you feeling today? 😊",
            self.config.character.name
        );
        Ok(Some(self.record_canned(text, now)?.message))
    }

    pub fn character(&mut self, now: DateTime<Utc>) -> CharacterState {
        self.character.settle(now);
        self.character.clone()
    }

    pub fn transcript(&self) -> Result<Vec<ChatMessage>, ChatError> {
        TranscriptStore::get_all(&self.session_id)
    }

    pub fn clear(&mut self) -> Result<(), ChatError> {
        self.character = CharacterState::new();
        TranscriptStore::clear(&self.session_id)
    }

    pub fn close(self) -> Result<(), ChatError> {
        info!("Closing conversation session {}", self.session_id);
        TranscriptStore::remove_session(&self.session_id)
    }

    fn record_canned(&mut self, text: String, now: DateTime<Utc>) -> Result<MessageOutcome, ChatError> {
        self.character.settle(now);

        let message = ChatMessage::at(text, Sender::Ai, None, now);
        TranscriptStore::insert_bounded(&self.session_id, message.clone(), self.config.chat.max_messages)?;

        Ok(MessageOutcome {
            message,
            analysis: None,
            animated: false,
        })
    }

    fn record(&mut self, text: String, sender: Sender, now: DateTime<Utc>) -> Result<MessageOutcome, ChatError> {
        self.character.settle(now);

        let analysis = if self.config.features.emotion_detection {
            Some(self.detector.detect(&text))
        } else {
            None
        };

        let animated = match &analysis {
            Some(analysis) => self.character.react(analysis, now, self.config.animation.window()),
            None => false,
        };

        if let Some(analysis) = &analysis {
            debug!(
                "Session {}: {:?} message classified as {} (confidence {:.2}, intensity {:.2}, animated {})",
                self.session_id, sender, analysis.primary_emotion, analysis.confidence, analysis.intensity, animated
            );
        }

        let message = ChatMessage::at(text, sender, analysis.map(|a| a.primary_emotion), now);
        TranscriptStore::insert_bounded(&self.session_id, message.clone(), self.config.chat.max_messages)?;

        Ok(MessageOutcome {
            message,
            analysis,
            animated,
        })
    }
}
