//! Integration tests for adcopy-score.

use adcopy_score::lexicon::{CTA_PHRASES, EMOTION_TRIGGERS, STRUCTURE_MARKERS};
use adcopy_score::{
    analyze, best_variant, compare, score, AbWinner, CampaignHistory, CampaignInput,
    CampaignVerdict, Channel, RoasTrend, ScoreBand, ScoreReport, VariantStats,
};

fn filler(words: usize) -> String {
    vec!["plain"; words].join(" ")
}

// =============================================================================
// Scorer
// =============================================================================

#[test]
fn test_short_promo_line() {
    let report = score("Buy now! Limited time secret discount — 50% off today, click here.");

    assert_eq!(report.length_score, 20.0);
    assert_eq!(report.cta_score, 50.0);
    assert_eq!(report.emotion_score, 20.0);
    assert_eq!(report.structure_score, 0.0);
    // "5", "0" and "50%"
    assert_eq!(report.specificity_score, 20.0);
    assert_eq!(report.total_score, 20.5);
    assert_eq!(report.band(), ScoreBand::Weak);
}

#[test]
fn test_blank_text_scores_zero() {
    assert_eq!(score(""), ScoreReport::default());
    assert_eq!(score("   \n\t "), ScoreReport::default());
}

#[test]
fn test_length_curve() {
    let at = |n| score(&filler(n)).length_score;
    assert!(at(90) < at(300));
    assert!(at(300) < at(800));
    assert!(at(3000) < at(800));
}

#[test]
fn test_saturated_text_clamps_to_100() {
    let mut text = String::new();
    for _ in 0..20 {
        text.push_str(&EMOTION_TRIGGERS.join(" "));
        text.push(' ');
        text.push_str(&STRUCTURE_MARKERS.join(" "));
        text.push(' ');
        text.push_str(&CTA_PHRASES.join(" "));
        text.push_str(" $1,000,000 99% 30 days https://example.com ");
    }

    let report = score(&text);
    assert!(report.total_score <= 100.0);
    assert!(report.total_score >= 1.0);
    assert_eq!(report.emotion_score, 100.0);
    assert_eq!(report.cta_score, 100.0);
    assert_eq!(report.band(), ScoreBand::Strong);
}

#[test]
fn test_tiny_text_never_below_one() {
    let report = score("hi");
    assert_eq!(report.total_score, 4.0);
    let report = score(".");
    assert_eq!(report.total_score, 4.0);
}

#[test]
fn test_scoring_is_repeatable() {
    let text = "Discover the proven system. Order now and save 20% in 7 days.";
    assert_eq!(score(text), score(text));
}

#[test]
fn test_best_of_variants() {
    let variants = vec![
        filler(10),
        "Claim your free bonus today. Guarantee included. 60 days.".to_string(),
    ];
    assert_eq!(best_variant(&variants), Some(1));
}

// =============================================================================
// Campaigns
// =============================================================================

fn campaign(channel: Channel, spend: f64, revenue: f64) -> CampaignInput {
    CampaignInput {
        channel,
        campaign_name: Some("Spring test".to_string()),
        source_name: None,
        spend,
        clicks: 200,
        conversions: 4,
        revenue,
    }
}

#[test]
fn test_campaign_verdicts() {
    let strong = analyze(&campaign(Channel::BannerSolo, 100.0, 250.0)).unwrap();
    assert_eq!(strong.verdict, CampaignVerdict::Strong);
    assert!((strong.metrics.roas - 2.5).abs() < 1e-9);
    assert!((strong.metrics.cpc - 0.5).abs() < 1e-9);
    assert!((strong.metrics.conversion_rate - 2.0).abs() < 1e-9);

    let mut lost = campaign(Channel::Classifieds, 50.0, 0.0);
    lost.conversions = 0;
    assert_eq!(analyze(&lost).unwrap().verdict, CampaignVerdict::LossNoConversions);
}

#[test]
fn test_campaign_rejects_bad_money() {
    let err = analyze(&campaign(Channel::Affiliate, f64::NAN, 10.0)).unwrap_err();
    assert_eq!(err.code(), "INVALID_CAMPAIGN");
}

#[test]
fn test_history_flow() {
    let mut history = CampaignHistory::new(3);
    history.record(&campaign(Channel::Classifieds, 100.0, 50.0)).unwrap();
    history.record(&campaign(Channel::Affiliate, 100.0, 60.0)).unwrap();
    history.record(&campaign(Channel::Affiliate, 100.0, 300.0)).unwrap();
    history.record(&campaign(Channel::Affiliate, 100.0, 400.0)).unwrap();

    // oldest (the classifieds run) was evicted
    assert_eq!(history.len(), 3);
    assert_eq!(history.channels(), vec![Channel::Affiliate]);
    assert_eq!(history.trend(), RoasTrend::Improving);

    let summary = history.summary();
    assert_eq!(summary.count, 3);
    assert!((summary.blended_roas - 760.0 / 300.0).abs() < 1e-9);

    history.clear();
    assert!(history.is_empty());
    assert_eq!(history.trend(), RoasTrend::Stable);
}

// =============================================================================
// A/B
// =============================================================================

#[test]
fn test_ab_small_sample_is_inconclusive() {
    let result = compare(VariantStats::new(40, 2), VariantStats::new(40, 3)).unwrap();
    assert!(!result.significant);
    assert_eq!(result.winner, AbWinner::Inconclusive);
}

#[test]
fn test_ab_control_wins() {
    let result = compare(VariantStats::new(2000, 200), VariantStats::new(2000, 120)).unwrap();
    assert!(result.significant);
    assert_eq!(result.winner, AbWinner::A);
    assert!(result.absolute_lift < 0.0);
}
