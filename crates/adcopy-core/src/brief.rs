//! Copy brief: the structured input every generator works from.
//!
//! A brief is transient. It is built by the caller, handed to a generator and
//! dropped. Required-field validation is the caller's job; generators accept
//! whatever they are given and interpolate it as-is.

use serde::{Deserialize, Serialize};

use crate::catalog::{AwarenessLevel, MasterStyle, Niche, Tone};
use crate::error::AdcopyError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CopyBrief {
    pub product_name: String,
    pub product_description: String,
    /// Free-text audience; only the first line is used in sentences
    #[serde(default)]
    pub audience: String,
    #[serde(default)]
    pub tone: Tone,
    /// Ordered: the first entry is the primary benefit, the second the secondary
    #[serde(default)]
    pub benefits: Vec<String>,
    pub call_to_action: String,
    #[serde(default)]
    pub awareness: AwarenessLevel,
    #[serde(default)]
    pub master_style: MasterStyle,
    #[serde(default)]
    pub niche: Niche,
}

impl CopyBrief {
    pub fn new(
        product_name: impl Into<String>,
        product_description: impl Into<String>,
        call_to_action: impl Into<String>,
    ) -> Self {
        Self {
            product_name: product_name.into(),
            product_description: product_description.into(),
            call_to_action: call_to_action.into(),
            ..Default::default()
        }
    }

    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = audience.into();
        self
    }

    pub fn with_benefits<I, S>(mut self, benefits: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.benefits = benefits.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    pub fn with_awareness(mut self, awareness: AwarenessLevel) -> Self {
        self.awareness = awareness;
        self
    }

    pub fn with_style(mut self, style: MasterStyle) -> Self {
        self.master_style = style;
        self
    }

    pub fn with_niche(mut self, niche: Niche) -> Self {
        self.niche = niche;
        self
    }

    /// Check the fields a caller must supply before invoking a generator
    pub fn validate(&self) -> Result<(), AdcopyError> {
        let mut missing = Vec::new();
        if self.product_name.trim().is_empty() {
            missing.push("product_name");
        }
        if self.product_description.trim().is_empty() {
            missing.push("product_description");
        }
        if self.call_to_action.trim().is_empty() {
            missing.push("call_to_action");
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(AdcopyError::InvalidBrief(format!(
                "missing required field(s): {}",
                missing.join(", ")
            )))
        }
    }

    /// First audience line, trimmed; `None` when the audience is blank
    pub fn audience_first_line(&self) -> Option<&str> {
        self.audience
            .lines()
            .next()
            .map(str::trim)
            .filter(|line| !line.is_empty())
    }
}

/// Split a one-benefit-per-line text block into a benefit list
pub fn parse_benefit_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
