use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::emotion::{EmotionAnalysis, EmotionLabel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Animation {
    Idle,
    Happy,
    Sad,
    Angry,
    Surprised,
    Excited,
    Worried,
    Confused,
    Wave,
    Nod,
    ShakeHead,
}

impl Animation {
    pub fn for_emotion(emotion: EmotionLabel) -> Self {
        match emotion {
            EmotionLabel::Happy => Animation::Happy,
            EmotionLabel::Sad => Animation::Sad,
            EmotionLabel::Angry => Animation::Angry,
            EmotionLabel::Surprised => Animation::Surprised,
            EmotionLabel::Excited => Animation::Excited,
            EmotionLabel::Worried => Animation::Worried,
            EmotionLabel::Confused => Animation::Confused,
            EmotionLabel::Neutral => Animation::Idle,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Animation::Idle => "idle",
            Animation::Happy => "happy",
            Animation::Sad => "sad",
            Animation::Angry => "angry",
            Animation::Surprised => "surprised",
            Animation::Excited => "excited",
            Animation::Worried => "worried",
            Animation::Confused => "confused",
            Animation::Wave => "wave",
            Animation::Nod => "nod",
            Animation::ShakeHead => "shake_head",
        }
    }
}

impl Default for Animation {
    fn default() -> Self {
        Animation::Idle
    }
}

/// What the on-screen character is currently showing.
///
/// A reaction sets `is_animating` until `animating_until`; the owner calls
/// [`CharacterState::settle`] to clear it once that instant has passed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterState {
    pub emotion: EmotionLabel,
    pub is_animating: bool,
    pub current_animation: Animation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animating_until: Option<DateTime<Utc>>,
}

impl CharacterState {
    pub fn new() -> Self {
        Self {
            emotion: EmotionLabel::Neutral,
            is_animating: false,
            current_animation: Animation::Idle,
            animating_until: None,
        }
    }

    /// Returns true when the analysis was strong enough to trigger a reaction.
    pub fn react(&mut self, analysis: &EmotionAnalysis, now: DateTime<Utc>, window: Duration) -> bool {
        if !analysis.should_animate() {
            return false;
        }

        self.emotion = analysis.primary_emotion;
        self.is_animating = true;
        self.current_animation = Animation::for_emotion(analysis.primary_emotion);
        self.animating_until = Some(now.checked_add_signed(window).unwrap_or(DateTime::<Utc>::MAX_UTC));

        true
    }

    pub fn settle(&mut self, now: DateTime<Utc>) {
        if let Some(until) = self.animating_until {
            if now >= until {
                self.is_animating = false;
                self.current_animation = Animation::Idle;
                self.animating_until = None;
            }
        }
    }

    pub fn set_emotion(&mut self, emotion: EmotionLabel) {
        self.emotion = emotion;
    }

    pub fn set_is_animating(&mut self, is_animating: bool) {
        self.is_animating = is_animating;
        if !is_animating {
            self.animating_until = None;
        }
    }

    pub fn set_current_animation(&mut self, animation: Animation) {
        self.current_animation = animation;
    }
}

impl Default for CharacterState {
    fn default() -> Self {
        Self::new()
    }
}
