use serde::{Deserialize, Serialize};
use std::fmt;

use super::label::EmotionLabel;

const SUBTLE_CEILING: f32 = 0.3;
const MODERATE_CEILING: f32 = 0.6;

/// Confidence must be strictly above this for a reaction.
pub const ANIMATION_CONFIDENCE_THRESHOLD: f32 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntensityLabel {
    Subtle,
    Moderate,
    Intense,
}

impl IntensityLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            IntensityLabel::Subtle => "subtle",
            IntensityLabel::Moderate => "moderate",
            IntensityLabel::Intense => "intense",
        }
    }
}

impl fmt::Display for IntensityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Buckets an intensity score. The emotion does not affect the bucket.
pub fn intensity_label(_emotion: EmotionLabel, intensity: f32) -> IntensityLabel {
    if intensity < SUBTLE_CEILING {
        IntensityLabel::Subtle
    } else if intensity < MODERATE_CEILING {
        IntensityLabel::Moderate
    } else {
        IntensityLabel::Intense
    }
}

pub fn should_animate(emotion: EmotionLabel, confidence: f32) -> bool {
    confidence > ANIMATION_CONFIDENCE_THRESHOLD && emotion != EmotionLabel::Neutral
}
