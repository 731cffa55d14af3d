//! Heuristic conversion-potential scorer
//!
//! Combines five sub-scores (length, emotion, structure, CTA, specificity)
//! into a weighted 1-100 total. The score is a rule-based proxy, not a
//! prediction.

use serde::{Deserialize, Serialize};

use crate::lexicon::{
    count_terms, CTA_PHRASES, EMOTION_TRIGGERS, PERCENT, STRUCTURE_MARKERS, TIMEFRAME, WORD,
};

/// Sub-score weights: length, emotion, structure, cta, specificity
pub const WEIGHTS: [f64; 5] = [0.20, 0.25, 0.20, 0.15, 0.20];

const EMOTION_SATURATION: f64 = 15.0;
const STRUCTURE_SATURATION: f64 = 8.0;
const CTA_SATURATION: f64 = 4.0;
const SPECIFICITY_SATURATION: f64 = 15.0;

/// Result of scoring a piece of copy
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    /// Weighted total in [1, 100]; 0 only for blank input
    pub total_score: f64,
    pub length_score: f64,
    pub emotion_score: f64,
    pub structure_score: f64,
    pub cta_score: f64,
    pub specificity_score: f64,
}

/// Coarse label for a total score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Weak,
    Promising,
    Strong,
}

impl ScoreReport {
    pub fn band(&self) -> ScoreBand {
        if self.total_score < 40.0 {
            ScoreBand::Weak
        } else if self.total_score < 70.0 {
            ScoreBand::Promising
        } else {
            ScoreBand::Strong
        }
    }

    /// Sub-scores in weight order
    pub fn sub_scores(&self) -> [f64; 5] {
        [
            self.length_score,
            self.emotion_score,
            self.structure_score,
            self.cta_score,
            self.specificity_score,
        ]
    }
}

/// Score a piece of copy. Never fails; blank text yields an all-zero report.
pub fn score(text: &str) -> ScoreReport {
    if text.trim().is_empty() {
        return ScoreReport::default();
    }

    let lowered = text.to_lowercase();
    let words = WORD.find_iter(text).count();

    let length = length_score(words);
    let emotion = saturate(count_terms(&lowered, &EMOTION_TRIGGERS), EMOTION_SATURATION);
    let structure = saturate(count_terms(&lowered, &STRUCTURE_MARKERS), STRUCTURE_SATURATION);

    let mut cta_hits = count_terms(&lowered, &CTA_PHRASES);
    if lowered.contains("http://") || lowered.contains("https://") {
        cta_hits += 1;
    }
    let cta = saturate(cta_hits, CTA_SATURATION);

    let specificity = saturate(specificity_hits(text), SPECIFICITY_SATURATION);

    let subs = [length, emotion, structure, cta, specificity];
    let total: f64 = subs.iter().zip(WEIGHTS.iter()).map(|(s, w)| s * w).sum();

    tracing::debug!(words, total, "scored copy");

    ScoreReport {
        total_score: round1(total.clamp(1.0, 100.0)),
        length_score: round1(length),
        emotion_score: round1(emotion),
        structure_score: round1(structure),
        cta_score: round1(cta),
        specificity_score: round1(specificity),
    }
}

/// Piecewise-linear length score over the word count
pub fn length_score(words: usize) -> f64 {
    let n = words as f64;
    if words < 80 {
        20.0
    } else if words < 200 {
        20.0 + (n - 80.0) / 120.0 * 40.0
    } else if words <= 1500 {
        60.0 + (n - 200.0) / 1300.0 * 30.0
    } else {
        let penalty = 30.0 * ((n - 1500.0) / 1500.0).min(1.0);
        90.0 - penalty
    }
}

/// Digits, percentages, dollar signs and timeframe words
fn specificity_hits(text: &str) -> usize {
    let digits = text.chars().filter(|c| c.is_ascii_digit()).count();
    let percents = PERCENT.find_iter(text).count();
    let dollars = text.matches('$').count();
    let timeframes = TIMEFRAME.find_iter(text).count();
    digits + percents + dollars + timeframes
}

fn saturate(hits: usize, saturation: f64) -> f64 {
    (hits as f64 / saturation).min(1.0) * 100.0
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
