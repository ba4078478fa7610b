use super::label::EmotionLabel;

pub const POSITIVE_WORDS: [&str; 8] = ["good", "great", "awesome", "wonderful", "amazing", "love", "like", "enjoy"];

pub const NEGATIVE_WORDS: [&str; 7] = ["bad", "terrible", "awful", "hate", "dislike", "horrible", "worst"];

pub type KeywordEntry = (EmotionLabel, &'static [&'static str]);

/// Lowercase substrings counted as evidence for each label.
pub struct KeywordTable {
    entries: [KeywordEntry; 8],
}

static STANDARD_TABLE: KeywordTable = KeywordTable::new([
    (
        EmotionLabel::Happy,
        &["happy", "joy", "great", "wonderful", "amazing", "love", "like", "good", "positive"],
    ),
    (
        EmotionLabel::Sad,
        &["sad", "depressed", "unhappy", "sorry", "regret", "miss", "lonely", "hurt", "pain", "negative"],
    ),
    (
        EmotionLabel::Angry,
        &["angry", "mad", "furious", "hate", "annoyed", "frustrated", "upset", "irritated", "rage"],
    ),
    (
        EmotionLabel::Surprised,
        &["surprised", "shocked", "amazed", "wow", "what", "unexpected", "sudden", "astonished"],
    ),
    (
        EmotionLabel::Neutral,
        &["okay", "fine", "alright", "normal", "regular", "standard", "usual"],
    ),
    (
        EmotionLabel::Excited,
        &["excited", "thrilled", "eager", "enthusiastic", "pumped", "energetic", "motivated"],
    ),
    (
        EmotionLabel::Worried,
        &["worried", "anxious", "concerned", "nervous", "scared", "afraid", "fear", "stress"],
    ),
    (
        EmotionLabel::Confused,
        &["confused", "puzzled", "unsure", "uncertain", "doubt", "question"],
    ),
]);

impl KeywordTable {
    /// Keywords must be lowercase; matching runs against lowercased text.
    pub const fn new(entries: [KeywordEntry; 8]) -> Self {
        Self { entries }
    }

    pub fn standard() -> &'static KeywordTable {
        &STANDARD_TABLE
    }

    pub fn keywords_for(&self, label: EmotionLabel) -> &'static [&'static str] {
        self.entries
            .iter()
            .find(|(entry_label, _)| *entry_label == label)
            .map(|(_, keywords)| *keywords)
            .unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (EmotionLabel, &'static [&'static str])> + '_ {
        self.entries.iter().copied()
    }
}
