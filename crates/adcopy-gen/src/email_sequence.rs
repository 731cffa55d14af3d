//! Email sequence generator
//!
//! Produces `count` subject/body pairs for a sequence archetype. Each
//! archetype has a small set of per-position patterns filled from the
//! resolved brief.

use std::fmt;
use std::ops::RangeInclusive;

use adcopy_core::CopyBrief;
use serde::{Deserialize, Serialize};

use crate::resolve::ResolvedBrief;

/// Sequence lengths a caller should accept
pub const EMAIL_COUNT_RANGE: RangeInclusive<usize> = 3..=10;

const SEPARATOR_WIDTH: usize = 40;

/// Kind of sequence being written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SequenceArchetype {
    Welcome,
    #[default]
    Launch,
    Nurture,
    Reengagement,
    /// Promo sequence without a specific archetype; written like nurture
    Generic,
}

impl SequenceArchetype {
    pub const ALL: [SequenceArchetype; 5] = [
        SequenceArchetype::Welcome,
        SequenceArchetype::Launch,
        SequenceArchetype::Nurture,
        SequenceArchetype::Reengagement,
        SequenceArchetype::Generic,
    ];

    /// Keyword match on the label; anything unrecognized is generic
    pub fn from_label(label: &str) -> Self {
        let lowered = label.to_lowercase();
        if lowered.contains("launch") {
            Self::Launch
        } else if lowered.contains("welcome") {
            Self::Welcome
        } else if lowered.contains("nurture") {
            Self::Nurture
        } else if lowered.contains("re-engage") || lowered.contains("reengage") {
            Self::Reengagement
        } else {
            Self::Generic
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Welcome => "Welcome / Indoctrination",
            Self::Launch => "Launch / Open Cart",
            Self::Nurture => "Nurture / Value-First",
            Self::Reengagement => "Re-engagement / Win-back",
            Self::Generic => "Generic Promo Sequence",
        }
    }
}

impl From<String> for SequenceArchetype {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl From<SequenceArchetype> for String {
    fn from(archetype: SequenceArchetype) -> Self {
        archetype.label().to_string()
    }
}

impl fmt::Display for SequenceArchetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailSequenceOptions {
    /// What the sequence should achieve, e.g. "Sell the main offer"
    pub goal: String,
    pub archetype: SequenceArchetype,
    pub count: usize,
}

impl Default for EmailSequenceOptions {
    fn default() -> Self {
        Self {
            goal: "Sell the main offer".to_string(),
            archetype: SequenceArchetype::Launch,
            count: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailMessage {
    /// 1-based position in the sequence
    pub index: usize,
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailSequence {
    pub style: String,
    pub archetype: SequenceArchetype,
    pub goal: String,
    pub tone: String,
    pub style_note: String,
    pub emails: Vec<EmailMessage>,
}

impl EmailSequence {
    /// Plain-text rendering with a header and dashed separators
    pub fn render(&self) -> String {
        let mut lines = vec![
            format!(
                "[{}-inspired email sequence] ({}, {})",
                self.style, self.archetype, self.goal
            ),
            format!("Tone: {}", self.tone),
            format!("Style note: {}", self.style_note),
            String::new(),
        ];

        for email in &self.emails {
            lines.push(format!("Email {}:", email.index));
            lines.push(format!("Subject: {}", email.subject));
            lines.push(String::new());
            lines.push(email.body.clone());
            lines.push(format!("\n{}\n", "-".repeat(SEPARATOR_WIDTH)));
        }

        lines.join("\n")
    }
}

pub fn generate_email_sequence(brief: &CopyBrief, options: &EmailSequenceOptions) -> EmailSequence {
    let resolved = ResolvedBrief::new(brief);

    let emails = (1..=options.count)
        .map(|index| {
            let (subject, body) = write_email(&resolved, options, index);
            EmailMessage {
                index,
                subject,
                body: body.trim().to_string(),
            }
        })
        .collect();

    tracing::debug!(
        archetype = options.archetype.label(),
        count = options.count,
        "email sequence generated"
    );

    EmailSequence {
        style: brief.master_style.label().to_string(),
        archetype: options.archetype,
        goal: options.goal.clone(),
        tone: brief.tone.label().to_string(),
        style_note: brief.master_style.email_note().to_string(),
        emails,
    }
}

fn write_email(
    r: &ResolvedBrief<'_>,
    options: &EmailSequenceOptions,
    index: usize,
) -> (String, String) {
    let product = &r.brief.product_name;
    let audience = &r.audience_label;
    let audience_lower = audience.to_lowercase();
    let main = r.base_benefit.to_lowercase();
    let goal = options.goal.to_lowercase();
    let cta = r.cta_sentence();

    match options.archetype {
        SequenceArchetype::Welcome => match index {
            1 => (
                format!("Welcome - here's your {} insider advantage", product),
                format!(
                    "Hey there,\n\nThanks for joining us. If you're like most {}, you've been looking for a simple way to {}.\n\n{} was built for exactly that.\n\nIn the next few days, I'll show you how to:\n- {}\n- {}\n- Turn what you already know into real results\n\nFor now, take 30 seconds and {}",
                    audience, main, product, r.base_benefit, r.extra_benefit(), cta
                ),
            ),
            2 => (
                format!("The big problem nobody told {} about", audience),
                format!(
                    "Hey,\n\nLet's talk about the real problem.\n\nMost {} don't fail because they're lazy. They fail because nobody gave them a simple, proven path.\n\nThat's what {} gives you:\n- Clarity on what actually matters\n- A step-by-step way to use it\n- Confidence that you're not guessing anymore\n\nIf that sounds like what you've been missing, {}",
                    audience_lower, product, cta
                ),
            ),
            _ => (
                format!("Quick win: one simple move to {}", main),
                format!(
                    "Hey,\n\nHere's a quick win for you:\n\nPick just one tiny piece of {} and put it into action today.\nDon't wait for \"perfect\" - just start.\n\nYou'll be shocked at how fast small moves add up.\n\nWhen you're ready to lean in fully, {}",
                    product, cta
                ),
            ),
        },
        SequenceArchetype::Launch => {
            if index == 1 {
                (
                    format!("NEW: {} is live - built for {}", product, audience),
                    format!(
                        "Hey,\n\nThis is the first time I'm opening up {} to {}.\n\nIf you've ever wanted to {} without the usual frustration and guesswork,\nthis is your early chance.\n\nRight now, you can:\n- Be among the first to use it\n- Lock in early pricing\n- Start seeing results before everyone else\n\nGet the full story and details here:\n{}",
                        product, audience, main, cta
                    ),
                )
            } else if index == 2 {
                (
                    format!("The real reason {} struggle with {}", audience, goal),
                    format!(
                        "Hey,\n\nLet's be blunt.\n\nMost {} are stuck because they're trying to fix the wrong problem.\n\n{} attacks the real issue:\n- It simplifies your path to {}\n- It shows you exactly what to do next\n- It turns \"someday\" into a concrete plan\n\nThis window won't stay open forever.\n{}",
                        audience_lower, product, main, cta
                    ),
                )
            } else if index == options.count {
                (
                    format!("Last call: {} {} window closing", product, options.goal),
                    format!(
                        "Hey,\n\nThis is your last reminder.\n\nThe current opportunity for {} is closing, and once it does, you'll either:\n- Have taken your shot, or\n- Be watching others get results while you're still \"thinking about it.\"\n\nIf {} matters to you, do this now:\n{}",
                        product, main, cta
                    ),
                )
            } else {
                (
                    format!("See {} in action (real-world benefits)", product),
                    format!(
                        "Hey,\n\nQuick snapshot of what {} can do for you:\n\nImagine waking up knowing exactly how to {}, without wondering what to try next.\nImagine having a clear, simple path laid out for you.\n\nThat's what this was built for.\n\nSee it laid out here:\n{}",
                        product, main, cta
                    ),
                )
            }
        }
        SequenceArchetype::Reengagement => match index {
            1 => (
                format!("Still interested in {}?", main),
                format!(
                    "Hey,\n\nYou grabbed information about {} before, but never fully jumped in.\n\nTotally normal.\n\nIf {} is still important to you, now's a good time to take another look.\n\nHere's the direct link:\n{}",
                    product, main, cta
                ),
            ),
            _ => (
                "If you're still reading this, here's your next move".to_string(),
                format!(
                    "Hey,\n\nThe fact that you're opening this email tells me you still care about {}.\n\nYou don't need more noise... you need one clear action.\n\nHere it is:\n{}",
                    main, cta
                ),
            ),
        },
        SequenceArchetype::Nurture | SequenceArchetype::Generic => match index {
            1 => (
                format!("What every {} should know about {}", audience, main),
                format!(
                    "Hey,\n\nIf you're like most {}, you've been promised the world and given almost nothing.\n\n{} is different because:\n- It focuses on {}\n- It respects your time\n- It gives you a clear, usable process\n\nIn the next emails, I'll show you how to think about {} like the top {} style marketers would.\n\nFor now, take a look at what's possible:\n{}",
                    audience, product, main, goal, r.brief.master_style.label(), cta
                ),
            ),
            2 => (
                format!("The \"quiet\" mistake that kills {}", goal),
                format!(
                    "Hey,\n\nThere's a mistake almost nobody talks about.\n\nMost people try to fix {} by adding more complexity:\nmore tools, more tricks, more hacks.\n\n{} flips that on its head by stripping things down to what actually works.\n\nIf you want less noise and more results, start here:\n{}",
                    goal, product, cta
                ),
            ),
            _ => (
                format!("Ready to {} the smarter way?", main),
                format!(
                    "Hey,\n\nYou don't need another theory.\n\nYou need something that's:\n- Simple\n- Proven\n- Built for {}\n\nThat's what {} was designed to be.\n\nCheck it out while it's still fresh in your mind:\n{}",
                    audience_lower, product, cta
                ),
            ),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adcopy_core::{MasterStyle, Tone};

    fn brief() -> CopyBrief {
        CopyBrief::new("GlowFit", "A 10-minute home workout plan.", "Start your trial.")
            .with_audience("busy parents")
            .with_benefits(["Lose weight fast", "Save time"])
            .with_tone(Tone::Friendly)
            .with_style(MasterStyle::DavidOgilvy)
    }

    #[test]
    fn test_archetype_from_label() {
        assert_eq!(SequenceArchetype::from_label("Launch / Open Cart"), SequenceArchetype::Launch);
        assert_eq!(
            SequenceArchetype::from_label("Re-engagement / Win-back"),
            SequenceArchetype::Reengagement
        );
        assert_eq!(SequenceArchetype::from_label("welcome"), SequenceArchetype::Welcome);
        assert_eq!(SequenceArchetype::from_label("whatever"), SequenceArchetype::Generic);
    }

    #[test]
    fn test_launch_sequence_has_last_call() {
        let options = EmailSequenceOptions {
            goal: "Sell the main offer".to_string(),
            archetype: SequenceArchetype::Launch,
            count: 5,
        };
        let seq = generate_email_sequence(&brief(), &options);

        assert_eq!(seq.emails.len(), 5);
        assert_eq!(seq.emails[0].subject, "NEW: GlowFit is live - built for busy parents");
        assert_eq!(seq.emails[2].subject, "See GlowFit in action (real-world benefits)");
        assert_eq!(seq.emails[4].subject, "Last call: GlowFit Sell the main offer window closing");
        assert!(seq.emails.iter().all(|e| e.body.ends_with("Start your trial.")));
    }

    #[test]
    fn test_welcome_uses_both_benefits() {
        let options = EmailSequenceOptions {
            archetype: SequenceArchetype::Welcome,
            count: 3,
            ..Default::default()
        };
        let seq = generate_email_sequence(&brief(), &options);
        assert!(seq.emails[0].body.contains("- Lose weight fast\n- Save time"));
        assert_eq!(seq.emails[2].subject, "Quick win: one simple move to lose weight fast");
    }

    #[test]
    fn test_render_layout() {
        let options = EmailSequenceOptions {
            archetype: SequenceArchetype::Reengagement,
            count: 3,
            ..Default::default()
        };
        let seq = generate_email_sequence(&brief(), &options);
        let text = seq.render();

        assert!(text.starts_with(
            "[David Ogilvy-inspired email sequence] (Re-engagement / Win-back, Sell the main offer)\nTone: Friendly & Conversational\nStyle note: Expect clarity, specifics, and strong benefits.\n"
        ));
        assert_eq!(text.matches("Subject: ").count(), 3);
        assert_eq!(text.matches(&"-".repeat(40)).count(), 3);
    }
}
