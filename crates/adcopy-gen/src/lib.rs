//! Rule-based copy generation.
//!
//! Turns a [`CopyBrief`] into headlines plus a four-section sales letter,
//! email sequences and classified ads. Output is fully deterministic: the
//! same brief always yields the same text.
//!
//! LLM engines sit behind the [`LlmProvider`] seam in [`engine`]; the
//! rule-based output is always the fallback.

pub mod classified;
pub mod email_sequence;
pub mod engine;
pub mod headlines;
pub mod prompts;
pub mod resolve;
pub mod sales_letter;
pub mod templates;

pub use classified::{
    generate_classified_ads, ClassifiedAd, ClassifiedAds, ClassifiedOptions, CLASSIFIED_COUNT_RANGE,
};
pub use email_sequence::{
    generate_email_sequence, EmailMessage, EmailSequence, EmailSequenceOptions, SequenceArchetype,
    EMAIL_COUNT_RANGE,
};
pub use engine::{
    generate_classifieds, generate_copy, generate_emails, ClassifiedOutcome, CopyOutcome,
    EmailOutcome, Engine, LlmProvider,
};
pub use prompts::PromptRenderer;
pub use resolve::ResolvedBrief;
pub use templates::TemplatesFile;

use adcopy_core::{fingerprint, CopyBrief};
use serde::{Deserialize, Serialize};

/// Headlines and sales letter for one brief
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedCopy {
    pub headlines: Vec<String>,
    pub sales_copy: String,
    /// `blake3:<hex>` over headlines and sales copy
    pub fingerprint: String,
}

/// Generate headlines and a sales letter from a brief
///
/// Never fails: blank fields are filled from the niche preset and required
/// fields are interpolated as given. Validate the brief first if empty
/// output is unacceptable.
pub fn generate_headlines_and_copy(brief: &CopyBrief) -> GeneratedCopy {
    let resolved = ResolvedBrief::new(brief);
    let headlines = headlines::build_headlines(&resolved);
    let sales_copy = sales_letter::build_sales_letter(&resolved);

    let mut parts: Vec<&str> = headlines.iter().map(String::as_str).collect();
    parts.push(&sales_copy);
    let fingerprint = fingerprint(&parts);

    tracing::debug!(
        product = %brief.product_name,
        style = %brief.master_style,
        headlines = headlines.len(),
        "copy generated"
    );

    GeneratedCopy {
        headlines,
        sales_copy,
        fingerprint,
    }
}
