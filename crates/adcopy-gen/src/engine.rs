//! Engine selection with rule-based fallback.
//!
//! The rule-based generators always work. An LLM engine is used only when a
//! provider for it is wired in; a missing provider or a failed completion
//! falls back to the rule-based output and says so in `notice`.

use std::fmt;
use std::str::FromStr;

use adcopy_core::{fingerprint, AdcopyError, CopyBrief};
use serde::{Deserialize, Serialize};

use crate::classified::{generate_classified_ads, ClassifiedAds, ClassifiedOptions};
use crate::email_sequence::{generate_email_sequence, EmailSequence, EmailSequenceOptions};
use crate::prompts::PromptRenderer;
use crate::generate_headlines_and_copy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Engine {
    #[default]
    #[serde(rename = "rule-based")]
    RuleBased,
    #[serde(rename = "openai")]
    OpenAi,
    #[serde(rename = "gemini")]
    Gemini,
}

impl Engine {
    pub const ALL: [Engine; 3] = [Engine::RuleBased, Engine::OpenAi, Engine::Gemini];

    pub fn as_str(&self) -> &'static str {
        match self {
            Engine::RuleBased => "rule-based",
            Engine::OpenAi => "openai",
            Engine::Gemini => "gemini",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Engine::RuleBased => "Rule-based",
            Engine::OpenAi => "OpenAI",
            Engine::Gemini => "Gemini",
        }
    }
}

impl FromStr for Engine {
    type Err = AdcopyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['_', ' '], "-").as_str() {
            "rule-based" | "rulebased" | "rules" | "local" => Ok(Engine::RuleBased),
            "openai" | "gpt" => Ok(Engine::OpenAi),
            "gemini" | "google" => Ok(Engine::Gemini),
            other => Err(AdcopyError::Config(format!("unknown engine '{}'", other))),
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A text-completion backend
///
/// Implementations wrap a hosted model. Errors should be `AdcopyError::Provider`.
/// `complete` may block for the whole request; async callers run it on a
/// blocking thread (`tokio::task::spawn_blocking`).
pub trait LlmProvider: Send + Sync {
    fn engine(&self) -> Engine;
    fn complete(&self, prompt: &str) -> Result<String, AdcopyError>;
}

/// Result of a copy request under a chosen engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CopyOutcome {
    pub requested: Engine,
    pub used: Engine,
    pub headlines: Vec<String>,
    pub sales_copy: String,
    /// Model output, present only when an LLM engine answered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_text: Option<String>,
    /// Why the requested engine was not used
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    pub fingerprint: String,
}

impl CopyOutcome {
    pub fn fell_back(&self) -> bool {
        self.requested != self.used
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailOutcome {
    pub requested: Engine,
    pub used: Engine,
    pub sequence: EmailSequence,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedOutcome {
    pub requested: Engine,
    pub used: Engine,
    pub ads: ClassifiedAds,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

// ============================================================================
// Dispatch
// ============================================================================

/// Ask the provider for text, or explain why it could not be used
fn try_provider<F>(
    engine: Engine,
    provider: Option<&dyn LlmProvider>,
    build_prompt: F,
) -> Result<String, String>
where
    F: FnOnce() -> Result<String, AdcopyError>,
{
    let provider = match provider {
        Some(p) if p.engine() == engine => p,
        Some(p) => {
            return Err(format!(
                "{} requested but the configured provider is {}",
                engine.label(),
                p.engine().label()
            ))
        }
        None => return Err(format!("{} is not configured", engine.label())),
    };

    let prompt = build_prompt().map_err(|e| e.to_string())?;
    match provider.complete(&prompt) {
        Ok(text) if !text.trim().is_empty() => Ok(text.trim().to_string()),
        Ok(_) => Err(format!("{} returned an empty response", engine.label())),
        Err(e) => Err(format!("{} generation failed: {}", engine.label(), e)),
    }
}

fn fallback_notice(reason: &str) -> String {
    format!("{}. Falling back to rule-based output.", reason)
}

/// Generate headlines and sales copy with the requested engine
///
/// The rule-based draft is always produced; it is also the seed of the LLM
/// prompt.
pub fn generate_copy(
    brief: &CopyBrief,
    engine: Engine,
    provider: Option<&dyn LlmProvider>,
) -> CopyOutcome {
    let draft = generate_headlines_and_copy(brief);

    if engine == Engine::RuleBased {
        return CopyOutcome {
            requested: engine,
            used: Engine::RuleBased,
            headlines: draft.headlines,
            sales_copy: draft.sales_copy,
            ai_text: None,
            notice: None,
            fingerprint: draft.fingerprint,
        };
    }

    let result = try_provider(engine, provider, || {
        PromptRenderer::builtin()?.copy_prompt(brief, &draft.sales_copy)
    });

    match result {
        Ok(text) => CopyOutcome {
            requested: engine,
            used: engine,
            fingerprint: fingerprint(&[text.as_str()]),
            headlines: draft.headlines,
            sales_copy: draft.sales_copy,
            ai_text: Some(text),
            notice: None,
        },
        Err(reason) => {
            tracing::warn!(engine = %engine, reason = %reason, "copy engine fallback");
            CopyOutcome {
                requested: engine,
                used: Engine::RuleBased,
                headlines: draft.headlines,
                sales_copy: draft.sales_copy,
                ai_text: None,
                notice: Some(fallback_notice(&reason)),
                fingerprint: draft.fingerprint,
            }
        }
    }
}

pub fn generate_emails(
    brief: &CopyBrief,
    options: &EmailSequenceOptions,
    engine: Engine,
    provider: Option<&dyn LlmProvider>,
) -> EmailOutcome {
    let sequence = generate_email_sequence(brief, options);
    let rendered = sequence.render();

    if engine == Engine::RuleBased {
        return EmailOutcome {
            requested: engine,
            used: engine,
            sequence,
            text: rendered,
            notice: None,
        };
    }

    match try_provider(engine, provider, || {
        PromptRenderer::builtin()?.email_prompt(brief, options)
    }) {
        Ok(text) => EmailOutcome {
            requested: engine,
            used: engine,
            sequence,
            text,
            notice: None,
        },
        Err(reason) => {
            tracing::warn!(engine = %engine, reason = %reason, "email engine fallback");
            EmailOutcome {
                requested: engine,
                used: Engine::RuleBased,
                sequence,
                text: rendered,
                notice: Some(fallback_notice(&reason)),
            }
        }
    }
}

pub fn generate_classifieds(
    brief: &CopyBrief,
    options: &ClassifiedOptions,
    engine: Engine,
    provider: Option<&dyn LlmProvider>,
) -> ClassifiedOutcome {
    let ads = generate_classified_ads(brief, options);
    let rendered = ads.render();

    if engine == Engine::RuleBased {
        return ClassifiedOutcome {
            requested: engine,
            used: engine,
            ads,
            text: rendered,
            notice: None,
        };
    }

    match try_provider(engine, provider, || {
        PromptRenderer::builtin()?.classified_prompt(brief, options)
    }) {
        Ok(text) => ClassifiedOutcome {
            requested: engine,
            used: engine,
            ads,
            text,
            notice: None,
        },
        Err(reason) => {
            tracing::warn!(engine = %engine, reason = %reason, "classified engine fallback");
            ClassifiedOutcome {
                requested: engine,
                used: Engine::RuleBased,
                ads,
                text: rendered,
                notice: Some(fallback_notice(&reason)),
            }
        }
    }
}
