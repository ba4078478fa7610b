use serde::{Deserialize, Serialize};

use super::intensity::{intensity_label, should_animate, IntensityLabel};
use super::keywords::{KeywordTable, NEGATIVE_WORDS, POSITIVE_WORDS};
use super::label::EmotionLabel;

const KEYWORD_WEIGHT: f32 = 1.0;

const EXCLAMATION_EXCITED_BOOST: f32 = 0.5;
const EXCLAMATION_HAPPY_BOOST: f32 = 0.3;
const QUESTION_CONFUSED_BOOST: f32 = 0.5;
const QUESTION_SURPRISED_BOOST: f32 = 0.3;

const POSITIVE_HAPPY_BOOST: f32 = 0.5;
const NEGATIVE_SAD_BOOST: f32 = 0.5;
const NEGATIVE_ANGRY_BOOST: f32 = 0.3;

/// Confidence reported when nothing in the text scored.
const NO_SIGNAL_CONFIDENCE: f32 = 0.5;

/// Raw winning score at which intensity saturates.
const INTENSITY_SATURATION: f32 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmotionAnalysis {
    pub primary_emotion: EmotionLabel,
    pub confidence: f32,
    pub intensity: f32,
}

impl EmotionAnalysis {
    pub fn new(primary_emotion: EmotionLabel, confidence: f32, intensity: f32) -> Self {
        Self {
            primary_emotion,
            confidence,
            intensity,
        }
    }

    pub fn intensity_label(&self) -> IntensityLabel {
        intensity_label(self.primary_emotion, self.intensity)
    }

    pub fn should_animate(&self) -> bool {
        should_animate(self.primary_emotion, self.confidence)
    }
}

impl Default for EmotionAnalysis {
    fn default() -> Self {
        Self::new(EmotionLabel::Neutral, NO_SIGNAL_CONFIDENCE, 0.0)
    }
}

/// Per-label score accumulator, indexed in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EmotionScores([f32; 8]);

impl EmotionScores {
    pub fn get(&self, label: EmotionLabel) -> f32 {
        self.0[label.index()]
    }

    pub fn add(&mut self, label: EmotionLabel, amount: f32) {
        self.0[label.index()] += amount;
    }

    pub fn total(&self) -> f32 {
        self.0.iter().sum()
    }

    /// Highest-scoring label; on a tie the label earliest in
    /// `EmotionLabel::ALL` wins.
    pub fn leader(&self) -> (EmotionLabel, f32) {
        let mut best = (EmotionLabel::ALL[0], self.get(EmotionLabel::ALL[0]));
        for label in EmotionLabel::ALL.iter().copied().skip(1) {
            let score = self.get(label);
            if score > best.1 {
                best = (label, score);
            }
        }
        best
    }

    pub fn iter(&self) -> impl Iterator<Item = (EmotionLabel, f32)> + '_ {
        EmotionLabel::ALL.into_iter().map(move |label| (label, self.get(label)))
    }
}

pub trait EmotionDetector {
    fn detect(&self, text: &str) -> EmotionAnalysis;
}

/// Keyword and punctuation scoring over a static keyword table.
#[derive(Clone, Copy)]
pub struct EmotionClassifier {
    table: &'static KeywordTable,
}

impl EmotionClassifier {
    pub fn new() -> Self {
        Self {
            table: KeywordTable::standard(),
        }
    }

    pub fn with_table(table: &'static KeywordTable) -> Self {
        Self { table }
    }

    pub fn scores(&self, text: &str) -> EmotionScores {
        let lower_text = text.to_lowercase();
        let mut scores = EmotionScores::default();

        for (label, keywords) in self.table.iter() {
            for keyword in keywords {
                if lower_text.contains(keyword) {
                    scores.add(label, KEYWORD_WEIGHT);
                }
            }
        }

        let exclamation_count = text.matches('!').count() as f32;
        let question_count = text.matches('?').count() as f32;

        if exclamation_count > 0.0 {
            scores.add(EmotionLabel::Excited, exclamation_count * EXCLAMATION_EXCITED_BOOST);
            scores.add(EmotionLabel::Happy, exclamation_count * EXCLAMATION_HAPPY_BOOST);
        }

        if question_count > 0.0 {
            scores.add(EmotionLabel::Confused, question_count * QUESTION_CONFUSED_BOOST);
            scores.add(EmotionLabel::Surprised, question_count * QUESTION_SURPRISED_BOOST);
        }

        for word in POSITIVE_WORDS {
            if lower_text.contains(word) {
                scores.add(EmotionLabel::Happy, POSITIVE_HAPPY_BOOST);
            }
        }

        for word in NEGATIVE_WORDS {
            if lower_text.contains(word) {
                scores.add(EmotionLabel::Sad, NEGATIVE_SAD_BOOST);
                scores.add(EmotionLabel::Angry, NEGATIVE_ANGRY_BOOST);
            }
        }

        scores
    }

    pub fn classify(&self, text: &str) -> EmotionAnalysis {
        let scores = self.scores(text);
        let (leader, max_score) = scores.leader();
        let total_score = scores.total();

        let primary_emotion = if max_score > 0.0 { leader } else { EmotionLabel::Neutral };

        let confidence = if total_score > 0.0 {
            max_score / total_score
        } else {
            NO_SIGNAL_CONFIDENCE
        };

        let intensity = (max_score / INTENSITY_SATURATION).min(1.0);

        EmotionAnalysis::new(primary_emotion, confidence, intensity)
    }
}

impl Default for EmotionClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl EmotionDetector for EmotionClassifier {
    fn detect(&self, text: &str) -> EmotionAnalysis {
        self.classify(text)
    }
}

pub fn classify(text: &str) -> EmotionAnalysis {
    EmotionClassifier::new().classify(text)
}

#[cfg(test)]
mod tests {
    use super::{classify, EmotionClassifier, EmotionScores};
    use crate::modules::emotion::keywords::KeywordTable;
    use crate::modules::emotion::label::EmotionLabel;

    static EXAM_TABLE: KeywordTable = KeywordTable::new([
        (EmotionLabel::Happy, &["passed"]),
        (EmotionLabel::Sad, &["failed"]),
        (EmotionLabel::Angry, &[]),
        (EmotionLabel::Surprised, &[]),
        (EmotionLabel::Neutral, &[]),
        (EmotionLabel::Excited, &[]),
        (EmotionLabel::Worried, &["exam"]),
        (EmotionLabel::Confused, &[]),
    ]);

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_empty_input_is_neutral() {
        let analysis = classify("");
        assert_eq!(analysis.primary_emotion, EmotionLabel::Neutral);
        assert_eq!(analysis.confidence, 0.5);
        assert_eq!(analysis.intensity, 0.0);
    }

    #[test]
    fn test_keyword_scores_are_substring_matches() {
        let scores = EmotionClassifier::new().scores("a nomadic life");
        assert!(approx(scores.get(EmotionLabel::Angry), 1.0));
        assert_eq!(scores.total(), 1.0);
    }

    #[test]
    fn test_keyword_matching_ignores_case() {
        let analysis = classify("I feel SAD");
        assert_eq!(analysis.primary_emotion, EmotionLabel::Sad);
        assert!(approx(analysis.confidence, 1.0));
    }

    #[test]
    fn test_each_keyword_counts_once() {
        let scores = EmotionClassifier::new().scores("sad sad sad");
        assert!(approx(scores.get(EmotionLabel::Sad), 1.0));
    }

    #[test]
    fn test_punctuation_boosts() {
        let scores = EmotionClassifier::new().scores("!!??");
        assert!(approx(scores.get(EmotionLabel::Excited), 1.0));
        assert!(approx(scores.get(EmotionLabel::Happy), 0.6));
        assert!(approx(scores.get(EmotionLabel::Confused), 1.0));
        assert!(approx(scores.get(EmotionLabel::Surprised), 0.6));
    }

    #[test]
    fn test_polarity_words_stack_with_keywords() {
        // "awful" is only a polarity word; "hate" is both an angry keyword and a negative word.
        let scores = EmotionClassifier::new().scores("awful, I hate it");
        assert!(approx(scores.get(EmotionLabel::Sad), 1.0));
        assert!(approx(scores.get(EmotionLabel::Angry), 1.0 + 0.3 + 0.3));
    }

    #[test]
    fn test_leader_prefers_canonical_order_on_tie() {
        let mut scores = EmotionScores::default();
        scores.add(EmotionLabel::Confused, 2.0);
        scores.add(EmotionLabel::Sad, 2.0);
        scores.add(EmotionLabel::Worried, 2.0);
        assert_eq!(scores.leader(), (EmotionLabel::Sad, 2.0));
    }

    #[test]
    fn test_leader_of_empty_scores() {
        let scores = EmotionScores::default();
        assert_eq!(scores.leader(), (EmotionLabel::Happy, 0.0));
        assert_eq!(classify("xyz").primary_emotion, EmotionLabel::Neutral);
    }

    #[test]
    fn test_custom_keyword_table() {
        let classifier = EmotionClassifier::with_table(&EXAM_TABLE);
        assert_eq!(classifier.classify("the exam is tomorrow").primary_emotion, EmotionLabel::Worried);
        assert_eq!(classifier.classify("I passed").primary_emotion, EmotionLabel::Happy);
        assert_eq!(classifier.classify("I am so sad").primary_emotion, EmotionLabel::Neutral);
    }

    #[test]
    fn test_intensity_saturates() {
        let analysis = classify("!!!!!!!!!!");
        assert_eq!(analysis.primary_emotion, EmotionLabel::Excited);
        assert_eq!(analysis.intensity, 1.0);
    }

    #[test]
    fn test_analysis_serializes_camel_case() {
        let json = serde_json::to_value(classify("")).unwrap();
        assert_eq!(json["primaryEmotion"], "neutral");
        assert_eq!(json["confidence"], 0.5);
        assert_eq!(json["intensity"], 0.0);
    }
}
