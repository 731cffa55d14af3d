//! Campaign performance analysis and a bounded, caller-owned history.
//!
//! Computes the usual paid-traffic ratios (CPC, CPA, EPC, conversion rate,
//! ROAS) for a single test and keeps recent results for comparison.

use std::collections::VecDeque;

use adcopy_core::AdcopyError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Traffic channel a campaign ran on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Channel {
    #[serde(rename = "Affiliate offer", alias = "affiliate")]
    Affiliate,
    #[serde(rename = "Banner / Solo Ads", alias = "banner_solo")]
    BannerSolo,
    #[serde(rename = "Free Classifieds", alias = "classifieds")]
    Classifieds,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Affiliate, Channel::BannerSolo, Channel::Classifieds];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Affiliate => "Affiliate offer",
            Self::BannerSolo => "Banner / Solo Ads",
            Self::Classifieds => "Free Classifieds",
        }
    }
}

/// Raw numbers for one campaign test
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignInput {
    pub channel: Channel,
    #[serde(default)]
    pub campaign_name: Option<String>,
    #[serde(default)]
    pub source_name: Option<String>,
    /// Ad spend in dollars
    pub spend: f64,
    pub clicks: u64,
    pub conversions: u64,
    /// Revenue in dollars
    pub revenue: f64,
}

/// Derived ratios; a ratio with a zero divisor is reported as 0
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CampaignMetrics {
    pub cpc: f64,
    pub cpa: f64,
    pub epc: f64,
    /// Percentage, 0-100
    pub conversion_rate: f64,
    pub roas: f64,
}

/// Verdict derived from ROAS and conversions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CampaignVerdict {
    LossNoConversions,
    BelowBreakEven,
    NearBreakEven,
    Strong,
}

impl CampaignVerdict {
    pub fn message(&self) -> &'static str {
        match self {
            Self::LossNoConversions => "This test lost money and produced no conversions. Consider changing the offer, angle, or traffic source.",
            Self::BelowBreakEven => "ROAS is below break-even. Look for ways to improve your messaging, targeting, or back-end monetization.",
            Self::NearBreakEven => "You are near or above break-even. Tighten the funnel and consider controlled scaling.",
            Self::Strong => "Strong ROAS. Monitor closely and scale carefully without violating any platform rules.",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignAnalysis {
    pub metrics: CampaignMetrics,
    pub verdict: CampaignVerdict,
    pub message: String,
}

/// Analyze a campaign test
pub fn analyze(input: &CampaignInput) -> Result<CampaignAnalysis, AdcopyError> {
    for (field, value) in [("spend", input.spend), ("revenue", input.revenue)] {
        if !value.is_finite() || value < 0.0 {
            return Err(AdcopyError::Campaign(format!(
                "{} must be a non-negative amount, got {}",
                field, value
            )));
        }
    }

    let clicks = input.clicks as f64;
    let conversions = input.conversions as f64;
    let ratio = |num: f64, den: f64| if den > 0.0 { num / den } else { 0.0 };

    let metrics = CampaignMetrics {
        cpc: ratio(input.spend, clicks),
        cpa: ratio(input.spend, conversions),
        epc: ratio(input.revenue, clicks),
        conversion_rate: ratio(conversions * 100.0, clicks),
        roas: ratio(input.revenue, input.spend),
    };

    let verdict = if metrics.roas < 1.0 && input.conversions == 0 {
        CampaignVerdict::LossNoConversions
    } else if metrics.roas < 1.0 {
        CampaignVerdict::BelowBreakEven
    } else if metrics.roas < 2.0 {
        CampaignVerdict::NearBreakEven
    } else {
        CampaignVerdict::Strong
    };

    Ok(CampaignAnalysis {
        metrics,
        verdict,
        message: verdict.message().to_string(),
    })
}

/// History size used when the caller does not choose one
pub const DEFAULT_HISTORY_LIMIT: usize = 200;

/// One analyzed campaign kept in history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignRecord {
    pub id: Uuid,
    pub recorded_at: DateTime<Utc>,
    pub channel: Channel,
    pub campaign: String,
    pub source: String,
    pub spend: f64,
    pub clicks: u64,
    pub conversions: u64,
    pub revenue: f64,
    pub metrics: CampaignMetrics,
    pub verdict: CampaignVerdict,
}

/// ROAS direction across the history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoasTrend {
    Improving,
    Stable,
    Declining,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistorySummary {
    pub count: usize,
    pub total_spend: f64,
    pub total_revenue: f64,
    /// Revenue over spend for the whole history
    pub blended_roas: f64,
    pub trend: RoasTrend,
}

/// Bounded campaign history; the oldest record is dropped when full
#[derive(Debug, Clone)]
pub struct CampaignHistory {
    records: VecDeque<CampaignRecord>,
    max_records: usize,
}

impl CampaignHistory {
    pub fn new(max_records: usize) -> Self {
        Self {
            records: VecDeque::new(),
            max_records: max_records.max(1),
        }
    }

    /// Analyze `input` and append it to the history
    pub fn record(&mut self, input: &CampaignInput) -> Result<CampaignRecord, AdcopyError> {
        let analysis = analyze(input)?;

        let record = CampaignRecord {
            id: Uuid::new_v4(),
            recorded_at: Utc::now(),
            channel: input.channel,
            campaign: non_blank(&input.campaign_name).unwrap_or("(unnamed)").to_string(),
            source: non_blank(&input.source_name).unwrap_or("(unspecified)").to_string(),
            spend: input.spend,
            clicks: input.clicks,
            conversions: input.conversions,
            revenue: input.revenue,
            metrics: analysis.metrics,
            verdict: analysis.verdict,
        };

        self.records.push_back(record.clone());
        if self.records.len() > self.max_records {
            self.records.pop_front();
        }

        tracing::debug!(
            channel = record.channel.label(),
            roas = record.metrics.roas,
            "campaign recorded"
        );
        Ok(record)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order, optionally restricted to one channel
    pub fn list(&self, channel: Option<Channel>) -> Vec<&CampaignRecord> {
        self.records
            .iter()
            .filter(|r| channel.map_or(true, |c| r.channel == c))
            .collect()
    }

    /// Distinct channels present, sorted
    pub fn channels(&self) -> Vec<Channel> {
        let mut channels: Vec<Channel> = self.records.iter().map(|r| r.channel).collect();
        channels.sort();
        channels.dedup();
        channels
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Compare mean ROAS of the older half against the newer half
    pub fn trend(&self) -> RoasTrend {
        if self.records.len() < 2 {
            return RoasTrend::Stable;
        }

        let roas: Vec<f64> = self.records.iter().map(|r| r.metrics.roas).collect();
        let half = roas.len() / 2;
        let mean = |slice: &[f64]| slice.iter().sum::<f64>() / slice.len() as f64;
        let diff = mean(&roas[half..]) - mean(&roas[..half]);

        if diff > 0.1 {
            RoasTrend::Improving
        } else if diff < -0.1 {
            RoasTrend::Declining
        } else {
            RoasTrend::Stable
        }
    }

    pub fn summary(&self) -> HistorySummary {
        let total_spend: f64 = self.records.iter().map(|r| r.spend).sum();
        let total_revenue: f64 = self.records.iter().map(|r| r.revenue).sum();
        HistorySummary {
            count: self.records.len(),
            total_spend,
            total_revenue,
            blended_roas: if total_spend > 0.0 { total_revenue / total_spend } else { 0.0 },
            trend: self.trend(),
        }
    }
}

impl Default for CampaignHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
