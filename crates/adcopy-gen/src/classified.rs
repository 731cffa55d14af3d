//! Classified ad generator
//!
//! Short headline + one-paragraph body, cycling through three patterns.

use std::ops::RangeInclusive;

use adcopy_core::CopyBrief;
use serde::{Deserialize, Serialize};

use crate::resolve::ResolvedBrief;

/// Ad counts a caller should accept
pub const CLASSIFIED_COUNT_RANGE: RangeInclusive<usize> = 3..=8;

const MAX_DESCRIPTION_CHARS: usize = 220;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifiedOptions {
    pub location: String,
    pub count: usize,
}

impl Default for ClassifiedOptions {
    fn default() -> Self {
        Self {
            location: "Online / Worldwide".to_string(),
            count: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedAd {
    /// 1-based
    pub index: usize,
    pub headline: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedAds {
    pub style: String,
    pub style_note: String,
    pub ads: Vec<ClassifiedAd>,
}

impl ClassifiedAds {
    pub fn render(&self) -> String {
        let mut out = format!("Style influence: {} – {}\n", self.style, self.style_note);
        for ad in &self.ads {
            out.push_str(&format!("\nAd {}: {}\n{}\n---\n", ad.index, ad.headline, ad.body));
        }
        out
    }
}

/// Trim a description to classified length, counting chars not bytes
pub fn shorten_description(description: &str) -> String {
    let trimmed = description.trim();
    if trimmed.chars().count() > MAX_DESCRIPTION_CHARS {
        let head: String = trimmed.chars().take(MAX_DESCRIPTION_CHARS - 3).collect();
        format!("{}...", head)
    } else {
        trimmed.to_string()
    }
}

pub fn generate_classified_ads(brief: &CopyBrief, options: &ClassifiedOptions) -> ClassifiedAds {
    let resolved = ResolvedBrief::new(brief);
    let product = &brief.product_name;
    let audience = &resolved.audience_label;
    let description = shorten_description(&brief.product_description);
    let contact = brief.call_to_action.trim();

    let ads = (0..options.count)
        .map(|i| {
            let (headline, middle) = match i % 3 {
                0 => (
                    format!("{} – {}", resolved.base_benefit, product),
                    format!("Perfect for {} in {}.", audience, options.location.trim()),
                ),
                1 => (
                    format!("{}: {}", product, resolved.extra_benefit()),
                    format!("If you're {}, this was built for you.", audience.to_lowercase()),
                ),
                _ => (
                    format!("{} – Limited Spots for {}", product, audience),
                    "Serious inquiries only. No hype, just results.".to_string(),
                ),
            };

            let body = [description.as_str(), middle.as_str(), contact]
                .iter()
                .map(|line| line.trim())
                .filter(|line| !line.is_empty())
                .collect::<Vec<_>>()
                .join(" ");

            ClassifiedAd {
                index: i + 1,
                headline,
                body,
            }
        })
        .collect();

    tracing::debug!(count = options.count, "classified ads generated");

    ClassifiedAds {
        style: brief.master_style.label().to_string(),
        style_note: brief.master_style.classified_hint().to_string(),
        ads,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorten_description() {
        let long = "x".repeat(300);
        let short = shorten_description(&long);
        assert_eq!(short.chars().count(), 220);
        assert!(short.ends_with("..."));

        let exact = "y".repeat(220);
        assert_eq!(shorten_description(&exact), exact);

        // multibyte input is cut on a char boundary
        let accents = "é".repeat(230);
        assert_eq!(shorten_description(&accents).chars().count(), 220);
    }

    #[test]
    fn test_patterns_cycle() {
        let brief = CopyBrief::new("LeadBox", "Leads on autopilot.", "Visit LeadBox.com")
            .with_audience("Local plumbers")
            .with_benefits(["More leads", "Less cold calling"]);
        let ads = generate_classified_ads(&brief, &ClassifiedOptions::default());

        assert_eq!(ads.ads.len(), 5);
        assert_eq!(ads.ads[0].headline, "More leads – LeadBox");
        assert_eq!(
            ads.ads[0].body,
            "Leads on autopilot. Perfect for Local plumbers in Online / Worldwide. Visit LeadBox.com"
        );
        assert_eq!(ads.ads[1].headline, "LeadBox: Less cold calling");
        assert!(ads.ads[1].body.contains("If you're local plumbers, this was built for you."));
        assert_eq!(ads.ads[2].headline, "LeadBox – Limited Spots for Local plumbers");
        assert_eq!(ads.ads[3].headline, ads.ads[0].headline);
        assert_eq!(ads.ads[4].index, 5);
    }

    #[test]
    fn test_style_note_fallback() {
        let brief = CopyBrief::new("P", "d", "c")
            .with_style(adcopy_core::MasterStyle::JayAbraham);
        let options = ClassifiedOptions {
            count: 3,
            ..Default::default()
        };
        let ads = generate_classified_ads(&brief, &options);
        assert_eq!(
            ads.style_note,
            "classic direct response style adapted for short classified ads."
        );
        assert!(ads.render().starts_with("Style influence: Jay Abraham – classic"));
    }
}
