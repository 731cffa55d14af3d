//! Prompt rendering for the LLM engines.
//!
//! Uses Handlebars with HTML escaping turned off (prompts are plain text)
//! and two helpers:
//! - join: Join an array with a separator
//! - bullets: One "- item" line per array entry

use adcopy_core::{AdcopyError, CopyBrief, MasterStyle};
use handlebars::{Context, Handlebars, Helper, HelperDef, HelperResult, Output, RenderContext};
use serde_json::{json, Value};

use crate::classified::{shorten_description, ClassifiedOptions};
use crate::email_sequence::EmailSequenceOptions;
use crate::templates::TemplatesFile;

pub const COPY_TEMPLATE: &str = "copy";
pub const EMAIL_TEMPLATE: &str = "email_sequence";
pub const CLASSIFIED_TEMPLATE: &str = "classified";

/// Compiled prompt set with helpers registered
pub struct PromptRenderer {
    handlebars: Handlebars<'static>,
    templates: TemplatesFile,
}

impl PromptRenderer {
    pub fn new(templates: TemplatesFile) -> Result<Self, AdcopyError> {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(false);
        handlebars.register_escape_fn(handlebars::no_escape);

        handlebars.register_helper("join", Box::new(JoinHelper));
        handlebars.register_helper("bullets", Box::new(BulletsHelper));

        for (name, template) in &templates.templates {
            handlebars
                .register_template_string(name, &template.template)
                .map_err(|e| AdcopyError::Template(format!("{}: {}", name, e)))?;
        }

        Ok(PromptRenderer { handlebars, templates })
    }

    pub fn builtin() -> Result<Self, AdcopyError> {
        Self::new(TemplatesFile::builtin()?)
    }

    /// Render a named template with data
    pub fn render(&self, template_name: &str, data: &Value) -> Result<String, AdcopyError> {
        if self.templates.get(template_name).is_none() {
            return Err(AdcopyError::Template(format!(
                "unknown template '{}'",
                template_name
            )));
        }
        self.handlebars
            .render(template_name, data)
            .map(|text| text.trim().to_string())
            .map_err(|e| AdcopyError::Template(format!("render {}: {}", template_name, e)))
    }

    /// Headline + sales letter prompt, seeded with the rule-based draft
    pub fn copy_prompt(&self, brief: &CopyBrief, draft: &str) -> Result<String, AdcopyError> {
        let mut data = brief_data(brief);
        data["draft"] = json!(draft);
        self.render(COPY_TEMPLATE, &data)
    }

    pub fn email_prompt(
        &self,
        brief: &CopyBrief,
        options: &EmailSequenceOptions,
    ) -> Result<String, AdcopyError> {
        let mut data = brief_data(brief);
        data["goal"] = json!(options.goal);
        data["archetype"] = json!(options.archetype.label());
        data["count"] = json!(options.count);
        self.render(EMAIL_TEMPLATE, &data)
    }

    pub fn classified_prompt(
        &self,
        brief: &CopyBrief,
        options: &ClassifiedOptions,
    ) -> Result<String, AdcopyError> {
        let mut data = brief_data(brief);
        data["product_description"] = json!(shorten_description(&brief.product_description));
        data["audience"] = json!(brief.audience_first_line().unwrap_or(""));
        data["style_note"] = json!(brief.master_style.classified_hint());
        data["location"] = json!(options.location);
        data["count"] = json!(options.count);
        self.render(CLASSIFIED_TEMPLATE, &data)
    }
}

fn brief_data(brief: &CopyBrief) -> Value {
    let masters: Vec<String> = MasterStyle::ALL
        .iter()
        .filter(|style| **style != MasterStyle::HybridMix)
        .map(|style| style.label().to_string())
        .collect();

    json!({
        "masters": masters,
        "style": brief.master_style.label(),
        "product_name": brief.product_name,
        "product_description": brief.product_description,
        "audience": brief.audience,
        "tone": brief.tone.label(),
        "benefits": brief.benefits,
        "call_to_action": brief.call_to_action,
        "awareness": brief.awareness.label(),
        "niche": brief.niche.label(),
    })
}

// ============================================================================
// Helpers
// ============================================================================

fn string_items(h: &Helper<'_>) -> Vec<String> {
    h.param(0)
        .and_then(|v| v.value().as_array())
        .map(|arr| {
            arr.iter()
                .map(|v| v.as_str().map(String::from).unwrap_or_else(|| v.to_string()))
                .collect()
        })
        .unwrap_or_default()
}

/// Join an array with a separator
struct JoinHelper;

impl HelperDef for JoinHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _r: &'reg Handlebars<'reg>,
        _ctx: &'rc Context,
        _rc: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        let separator = h.param(1).and_then(|v| v.value().as_str()).unwrap_or(", ");
        out.write(&string_items(h).join(separator))?;
        Ok(())
    }
}

/// Render an array as dash bullets, one per line
struct BulletsHelper;

impl HelperDef for BulletsHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _r: &'reg Handlebars<'reg>,
        _ctx: &'rc Context,
        _rc: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        let lines: Vec<String> = string_items(h)
            .into_iter()
            .map(|item| format!("- {}", item))
            .collect();
        out.write(&lines.join("\n"))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::email_sequence::SequenceArchetype;

    fn brief() -> CopyBrief {
        CopyBrief::new("GlowFit", "Workouts & meal plans <10 min>", "Start now")
            .with_audience("busy parents")
            .with_benefits(["Lose weight fast", "Save time"])
    }

    #[test]
    fn test_copy_prompt_embeds_draft_unescaped() {
        let renderer = PromptRenderer::builtin().unwrap();
        let prompt = renderer.copy_prompt(&brief(), "DRAFT BODY").unwrap();

        assert!(prompt.starts_with("You are a legendary direct response copywriter"));
        assert!(prompt.contains("Workouts & meal plans <10 min>"));
        assert!(prompt.contains("Lose weight fast, Save time"));
        assert!(prompt.contains("DRAFT BODY"));
        assert!(prompt.contains("- Gary Halbert\n- David Ogilvy\n- Dan Kennedy"));
        assert!(!prompt.contains("- Hybrid Mix"));
    }

    #[test]
    fn test_empty_benefits_render_na() {
        let renderer = PromptRenderer::builtin().unwrap();
        let brief = CopyBrief::new("P", "d", "c");
        let prompt = renderer.copy_prompt(&brief, "").unwrap();
        assert!(prompt.contains("Benefits:\nN/A"));
    }

    #[test]
    fn test_email_prompt() {
        let renderer = PromptRenderer::builtin().unwrap();
        let options = EmailSequenceOptions {
            goal: "Book calls".to_string(),
            archetype: SequenceArchetype::Nurture,
            count: 4,
        };
        let prompt = renderer.email_prompt(&brief(), &options).unwrap();
        assert!(prompt.contains("Write a 4-email sequence"));
        assert!(prompt.contains("Aim at this sequence goal: Book calls"));
        assert!(prompt.contains("Nurture / Value-First"));
        assert!(prompt.contains("- Lose weight fast\n- Save time"));
        assert!(prompt.ends_with("(Continue up to Email 4)"));
    }

    #[test]
    fn test_classified_prompt() {
        let renderer = PromptRenderer::builtin().unwrap();
        let options = ClassifiedOptions {
            location: "Austin, TX".to_string(),
            count: 3,
        };
        let prompt = renderer.classified_prompt(&brief(), &options).unwrap();
        assert!(prompt.contains("Write 3 different classified ads"));
        assert!(prompt.contains("Austin, TX"));
        assert!(prompt.contains("emotional, direct-mail style"));
    }

    #[test]
    fn test_unknown_template() {
        let renderer = PromptRenderer::builtin().unwrap();
        let err = renderer.render("vsl", &json!({})).unwrap_err();
        assert!(err.to_string().starts_with("TEMPLATE/"));
    }
}
