//! Brief resolution shared by every generator.
//!
//! Fills blank audience/benefits from the niche preset, normalizes the
//! audience phrase, strips the call to action and looks up the style and
//! awareness sentences.

use adcopy_core::{CopyBrief, NichePreset};

/// A brief with every default applied
#[derive(Debug, Clone)]
pub struct ResolvedBrief<'a> {
    pub brief: &'a CopyBrief,
    pub preset: &'static NichePreset,
    /// Normalized phrase that reads after "If you're"
    pub audience_short: String,
    /// Raw first audience line, or the niche's plural label
    pub audience_label: String,
    pub base_benefit: String,
    /// Brief benefits, or the niche defaults when the brief has none
    pub benefits: Vec<String>,
    pub style_flavor: &'static str,
    pub awareness_angle: &'static str,
    /// Call to action without trailing periods
    pub cta: String,
}

impl<'a> ResolvedBrief<'a> {
    pub fn new(brief: &'a CopyBrief) -> Self {
        let preset = brief.niche.preset();

        let audience_line = brief.audience_first_line().unwrap_or(preset.audience);
        let audience_label = brief
            .audience_first_line()
            .unwrap_or(preset.headline_audience)
            .to_string();

        let benefits: Vec<String> = if brief.benefits.is_empty() {
            preset.benefits.iter().map(|b| b.to_string()).collect()
        } else {
            brief.benefits.clone()
        };
        let base_benefit = benefits
            .first()
            .cloned()
            .unwrap_or_else(|| preset.benefits[0].to_string());

        Self {
            brief,
            preset,
            audience_short: normalize_audience(audience_line),
            audience_label,
            base_benefit,
            benefits,
            style_flavor: brief.master_style.flavor(),
            awareness_angle: brief.awareness.angle(),
            cta: strip_cta(&brief.call_to_action),
        }
    }

    /// Second benefit, falling back to the base benefit
    pub fn extra_benefit(&self) -> &str {
        self.benefits.get(1).unwrap_or(&self.base_benefit)
    }

    /// Call to action as a finished sentence
    pub fn cta_sentence(&self) -> String {
        format!("{}.", self.cta)
    }
}

/// Turn an audience line into a phrase that reads after "If you're"
///
/// Lines that already open with an article (or with "someone") are kept;
/// descriptive clauses get "someone like", bare nouns get "someone who is".
pub fn normalize_audience(line: &str) -> String {
    let line = line.trim();
    let lowered = line.to_lowercase();
    let first_word = lowered.split_whitespace().next().unwrap_or("");

    if matches!(first_word, "a" | "an" | "the" | "someone") {
        line.to_string()
    } else if lowered.contains(" who ") || lowered.contains(" and ") {
        format!("someone like {}", line)
    } else {
        format!("someone who is {}", line)
    }
}

/// Trim whitespace and every trailing period
pub fn strip_cta(cta: &str) -> String {
    cta.trim().trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use adcopy_core::Niche;

    #[test]
    fn test_normalize_audience() {
        assert_eq!(normalize_audience("busy parents"), "someone who is busy parents");
        assert_eq!(
            normalize_audience("parents who work late"),
            "someone like parents who work late"
        );
        assert_eq!(normalize_audience("moms and dads"), "someone like moms and dads");
        assert_eq!(normalize_audience("A new coach"), "A new coach");
        assert_eq!(normalize_audience("the weekend warrior"), "the weekend warrior");
        assert_eq!(
            normalize_audience("someone who needs what you offer"),
            "someone who needs what you offer"
        );
        // "anxious" starts with "an" but is not the article
        assert_eq!(normalize_audience("anxious founders"), "someone who is anxious founders");
    }

    #[test]
    fn test_strip_cta() {
        assert_eq!(strip_cta("Click here to buy."), "Click here to buy");
        assert_eq!(strip_cta("  Join today...  "), "Join today");
        assert_eq!(strip_cta("Sign up"), "Sign up");
    }

    #[test]
    fn test_blank_fields_use_niche_preset() {
        let brief = CopyBrief::new("GlowFit", "A plan.", "Go").with_niche(Niche::HealthFitness);
        let resolved = ResolvedBrief::new(&brief);

        assert_eq!(resolved.audience_short, Niche::HealthFitness.preset().audience);
        assert_eq!(resolved.audience_label, "busy adults");
        assert_eq!(resolved.base_benefit, Niche::HealthFitness.preset().benefits[0]);
        assert_eq!(resolved.benefits.len(), 3);
    }

    #[test]
    fn test_generic_fallbacks() {
        let brief = CopyBrief::new("X", "Y", "Z");
        let resolved = ResolvedBrief::new(&brief);
        assert_eq!(resolved.audience_short, "someone who needs what you offer");
        assert_eq!(resolved.audience_label, "ambitious entrepreneurs");
        assert_eq!(resolved.base_benefit, "get better results with less effort and stress");
    }

    #[test]
    fn test_extra_benefit() {
        let brief = CopyBrief::new("X", "Y", "Z").with_benefits(["only one"]);
        let resolved = ResolvedBrief::new(&brief);
        assert_eq!(resolved.extra_benefit(), "only one");
    }
}
