pub mod config;
pub mod modules;
pub mod api;

#[cfg(test)]
mod _test_mock;

pub use config::{CompanionConfig, CharacterConfig, ChatConfig, AnimationConfig, ConfigError};
pub use modules::emotion::{
    classify, intensity_label, should_animate, EmotionAnalysis, EmotionClassifier, EmotionDetector, EmotionLabel,
    IntensityLabel,
};
pub use modules::chat::{ChatError, ChatMessage, Sender, TranscriptStore};
pub use modules::character::{Animation, CharacterState};
pub use modules::conversation::{ConversationSession, MessageOutcome};
