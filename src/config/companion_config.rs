use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Longest accepted reaction window (one hour).
pub const MAX_ANIMATION_WINDOW_MS: u64 = 60 * 60 * 1000;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Appearance {
    pub hair_color: String,
    pub eye_color: String,
    pub outfit: String,
}

impl Appearance {
    pub fn new(hair_color: impl Into<String>, eye_color: impl Into<String>, outfit: impl Into<String>) -> Self {
        Self {
            hair_color: hair_color.into(),
            eye_color: eye_color.into(),
            outfit: outfit.into(),
        }
    }
}

impl Default for Appearance {
    fn default() -> Self {
        Self::new("#8B4513", "#4169E1", "casual")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterConfig {
    pub name: String,
    pub appearance: Appearance,
    pub animation_speed: f32,
    pub transition_duration: f32,
}

impl Default for CharacterConfig {
    fn default() -> Self {
        Self {
            name: "Mag".to_string(),
            appearance: Appearance::default(),
            animation_speed: 1.0,
            transition_duration: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    pub max_messages: usize,
    pub typing_speed_ms: u64,
}

impl ChatConfig {
    /// Delay between revealed characters when a reply is typed out.
    pub fn typing_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.typing_speed_ms)
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            max_messages: 100,
            typing_speed_ms: 50,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub window_ms: u64,
}

impl AnimationConfig {
    pub fn new(window_ms: impl Into<u64>) -> Self {
        Self {
            window_ms: window_ms.into(),
        }
    }

    /// Reaction window, clamped to `MAX_ANIMATION_WINDOW_MS`.
    pub fn window(&self) -> chrono::Duration {
        let window_ms = self.window_ms.min(MAX_ANIMATION_WINDOW_MS);
        chrono::Duration::milliseconds(i64::try_from(window_ms).unwrap_or(i64::MAX))
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self { window_ms: 2000 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureFlags {
    pub auto_response: bool,
    pub emotion_detection: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            auto_response: true,
            emotion_detection: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanionConfig {
    pub character: CharacterConfig,
    pub chat: ChatConfig,
    pub animation: AnimationConfig,
    pub features: FeatureFlags,
}

impl CompanionConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: CompanionConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chat.max_messages == 0 {
            return Err(ConfigError::Invalid("chat.max_messages must be greater than 0".to_string()));
        }

        if self.animation.window_ms == 0 {
            return Err(ConfigError::Invalid("animation.window_ms must be greater than 0".to_string()));
        }

        if self.animation.window_ms > MAX_ANIMATION_WINDOW_MS {
            return Err(ConfigError::Invalid(format!(
                "animation.window_ms is {}, but must be at most {}",
                self.animation.window_ms, MAX_ANIMATION_WINDOW_MS
            )));
        }

        let speeds = [
            ("character.animation_speed", self.character.animation_speed),
            ("character.transition_duration", self.character.transition_duration),
        ];

        for (name, value) in speeds {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "'{}' has value {}, but must be a positive number",
                    name, value
                )));
            }
        }

        Ok(())
    }
}
