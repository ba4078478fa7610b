use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionLabel {
    Happy,
    Sad,
    Angry,
    Surprised,
    Neutral,
    Excited,
    Worried,
    Confused,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown emotion label: {0}")]
pub struct UnknownEmotionLabel(pub String);

impl EmotionLabel {
    /// Canonical order. Score ties are broken by position in this array.
    pub const ALL: [EmotionLabel; 8] = [
        EmotionLabel::Happy,
        EmotionLabel::Sad,
        EmotionLabel::Angry,
        EmotionLabel::Surprised,
        EmotionLabel::Neutral,
        EmotionLabel::Excited,
        EmotionLabel::Worried,
        EmotionLabel::Confused,
    ];

    pub fn index(self) -> usize {
        match self {
            EmotionLabel::Happy => 0,
            EmotionLabel::Sad => 1,
            EmotionLabel::Angry => 2,
            EmotionLabel::Surprised => 3,
            EmotionLabel::Neutral => 4,
            EmotionLabel::Excited => 5,
            EmotionLabel::Worried => 6,
            EmotionLabel::Confused => 7,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionLabel::Happy => "happy",
            EmotionLabel::Sad => "sad",
            EmotionLabel::Angry => "angry",
            EmotionLabel::Surprised => "surprised",
            EmotionLabel::Neutral => "neutral",
            EmotionLabel::Excited => "excited",
            EmotionLabel::Worried => "worried",
            EmotionLabel::Confused => "confused",
        }
    }
}

impl Default for EmotionLabel {
    fn default() -> Self {
        EmotionLabel::Neutral
    }
}

impl fmt::Display for EmotionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmotionLabel {
    type Err = UnknownEmotionLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        EmotionLabel::ALL
            .iter()
            .copied()
            .find(|label| label.as_str() == wanted)
            .ok_or_else(|| UnknownEmotionLabel(s.to_string()))
    }
}
