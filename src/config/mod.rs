pub mod companion_config;

pub use companion_config::{
    AnimationConfig, Appearance, CharacterConfig, ChatConfig, CompanionConfig, ConfigError, FeatureFlags,
    MAX_ANIMATION_WINDOW_MS,
};
