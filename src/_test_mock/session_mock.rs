use crate::modules::chat::message::{ChatMessage, Sender};
use crate::modules::chat::transcript::SessionId;
use crate::modules::emotion::{EmotionAnalysis, EmotionDetector, EmotionLabel};
use std::collections::HashMap;

pub struct TranscriptTestHelpers;

impl TranscriptTestHelpers {
    pub fn test_session_id() -> SessionId {
        format!("test-session-{}", uuid::Uuid::new_v4())
    }

    pub fn message(text: &str, sender: Sender) -> ChatMessage {
        ChatMessage::new(text, sender, None)
    }
}

pub struct MockEmotionDetector {
    responses: HashMap<String, EmotionAnalysis>,
    default_response: EmotionAnalysis,
}

impl MockEmotionDetector {
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            default_response: EmotionAnalysis::default(),
        }
    }

    pub fn with_response(mut self, text: &str, response: EmotionAnalysis) -> Self {
        self.responses.insert(text.to_string(), response);
        self
    }

    pub fn with_default_response(mut self, response: EmotionAnalysis) -> Self {
        self.default_response = response;
        self
    }

    pub fn angry() -> Self {
        Self::new().with_default_response(EmotionAnalysis::new(EmotionLabel::Angry, 0.9, 0.8))
    }

    pub fn neutral() -> Self {
        Self::new()
    }
}

impl EmotionDetector for MockEmotionDetector {
    fn detect(&self, text: &str) -> EmotionAnalysis {
        self.responses.get(text).copied().unwrap_or(self.default_response)
    }
}
