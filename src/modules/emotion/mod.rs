pub mod label;
pub mod keywords;
pub mod classifier;
pub mod intensity;

pub use label::{EmotionLabel, UnknownEmotionLabel};
pub use keywords::{KeywordEntry, KeywordTable, NEGATIVE_WORDS, POSITIVE_WORDS};
pub use classifier::{classify, EmotionAnalysis, EmotionClassifier, EmotionDetector, EmotionScores};
pub use intensity::{intensity_label, should_animate, IntensityLabel};
