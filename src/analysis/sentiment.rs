//! Polarity scoring and three-way sentiment labels.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::SentimentThresholds;

/// Scores text with a compound polarity in `[-1, 1]`.
///
/// Any `Fn(&str) -> f64` is a scorer, which keeps tests free of lexicon
/// details:
///
/// ```rust
/// use chatlens::analysis::PolarityScorer;
///
/// let always_happy = |_: &str| 0.9;
/// assert_eq!(always_happy.compound("anything"), 0.9);
/// ```
pub trait PolarityScorer {
    /// Compound polarity of `text`.
    fn compound(&self, text: &str) -> f64;
}

impl<F> PolarityScorer for F
where
    F: Fn(&str) -> f64,
{
    fn compound(&self, text: &str) -> f64 {
        self(text)
    }
}

/// VADER lexicon scorer.
#[derive(Debug, Clone, Copy, Default)]
pub struct VaderScorer;

impl VaderScorer {
    /// Creates a scorer backed by the bundled VADER lexicon.
    pub fn new() -> Self {
        Self
    }
}

impl PolarityScorer for VaderScorer {
    fn compound(&self, text: &str) -> f64 {
        // The analyzer only borrows the crate's static lexicons
        let analyzer = vader_sentiment::SentimentIntensityAnalyzer::new();
        analyzer
            .polarity_scores(text)
            .get("compound")
            .copied()
            .unwrap_or(0.0)
    }
}

/// Sentiment category of one message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    /// Every label, in reporting order.
    pub const ALL: [Self; 3] = [Self::Positive, Self::Neutral, Self::Negative];

    /// Labels a compound score: strictly above `positive` is Positive,
    /// strictly below `negative` is Negative, anything else Neutral.
    pub fn classify(score: f64, thresholds: &SentimentThresholds) -> Self {
        if score > thresholds.positive {
            Self::Positive
        } else if score < thresholds.negative {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Neutral => "Neutral",
            Self::Negative => "Negative",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compound score and label of one record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SentimentScore {
    pub compound: f64,
    pub label: SentimentLabel,
}

/// Number of records per label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentCounts {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

impl SentimentCounts {
    /// Counts one record under `label`.
    pub fn record(&mut self, label: SentimentLabel) {
        match label {
            SentimentLabel::Positive => self.positive += 1,
            SentimentLabel::Neutral => self.neutral += 1,
            SentimentLabel::Negative => self.negative += 1,
        }
    }

    /// Count for one label.
    pub fn get(&self, label: SentimentLabel) -> usize {
        match label {
            SentimentLabel::Positive => self.positive,
            SentimentLabel::Neutral => self.neutral,
            SentimentLabel::Negative => self.negative,
        }
    }

    /// `(label, count)` for Positive, Neutral, Negative in that order.
    pub fn entries(&self) -> [(SentimentLabel, usize); 3] {
        SentimentLabel::ALL.map(|label| (label, self.get(label)))
    }

    /// Sum over all labels.
    pub fn total(&self) -> usize {
        self.positive + self.neutral + self.negative
    }
}

impl FromIterator<SentimentLabel> for SentimentCounts {
    fn from_iter<I: IntoIterator<Item = SentimentLabel>>(iter: I) -> Self {
        let mut counts = Self::default();
        for label in iter {
            counts.record(label);
        }
        counts
    }
}
