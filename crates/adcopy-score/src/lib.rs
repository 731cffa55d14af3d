//! adcopy score: heuristic copy scoring and campaign analytics
//!
//! # Example
//!
//! ```ignore
//! use adcopy_score::score;
//!
//! let report = score("Buy now! Limited time secret discount, 50% off today, click here.");
//! println!("Score: {} ({:?})", report.total_score, report.band());
//! ```

pub mod campaign;
pub mod lexicon;
pub mod scorer;

pub use ab_test::{compare, AbComparison, AbWinner, VariantStats};
pub use campaign::{
    analyze, CampaignAnalysis, CampaignHistory, CampaignInput, CampaignMetrics, CampaignRecord,
    CampaignVerdict, Channel, HistorySummary, RoasTrend, DEFAULT_HISTORY_LIMIT,
};
pub use scorer::{score, ScoreBand, ScoreReport};

/// Score several variants; each call is independent
pub fn score_all<S: AsRef<str>>(texts: &[S]) -> Vec<ScoreReport> {
    texts.iter().map(|t| score(t.as_ref())).collect()
}

/// Index of the highest-scoring variant; ties go to the earliest
pub fn best_variant<S: AsRef<str>>(texts: &[S]) -> Option<usize> {
    best_report(&score_all(texts))
}

/// Same rule as [`best_variant`] over reports already computed
pub fn best_report(reports: &[ScoreReport]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, report) in reports.iter().enumerate() {
        match best {
            Some((_, top)) if report.total_score <= top => {}
            _ => best = Some((i, report.total_score)),
        }
    }
    best.map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_best_variant() {
        let variants = [
            "plain words",
            "Discover the secret. Click here to buy now. 30 days, 100% guarantee.",
            "",
        ];
        assert_eq!(best_variant(&variants), Some(1));
        assert_eq!(best_variant::<&str>(&[]), None);
    }

    #[test]
    fn test_best_report_prefers_earliest_tie() {
        let reports = score_all(&["Buy now.", "plain", "Buy now."]);
        assert_eq!(best_report(&reports), Some(0));
        assert_eq!(best_report(&reports), best_variant(&["Buy now.", "plain", "Buy now."]));
        assert_eq!(best_report(&[]), None);
    }
}
