//! Lookup catalog: tones, awareness levels, master styles and niches.
//!
//! Every table is a closed enum with an explicit fallback arm. Labels parse
//! leniently (case, spacing and punctuation are ignored) and unknown labels
//! resolve to the fallback instead of failing, so the generators stay total
//! over their input domain.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowercase, alphanumeric-only key used for lenient label matching
fn label_key(label: &str) -> String {
    label
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(|c| c.to_lowercase())
        .collect()
}

// ============================================================================
// Tone
// ============================================================================

/// Desired voice of the generated copy
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Tone {
    #[default]
    DirectNoBs,
    Friendly,
    Premium,
    Urgent,
    Calm,
    /// Any tone label outside the fixed set, kept verbatim
    Unlisted(String),
}

impl Tone {
    pub const ALL: [Tone; 5] = [
        Tone::DirectNoBs,
        Tone::Friendly,
        Tone::Premium,
        Tone::Urgent,
        Tone::Calm,
    ];

    pub fn from_label(label: &str) -> Self {
        match label_key(label).as_str() {
            "" | "direct" | "directnobs" | "nobs" => Self::DirectNoBs,
            "friendly" | "friendlyconversational" | "conversational" => Self::Friendly,
            "premium" | "highend" | "highendpremium" => Self::Premium,
            "urgent" | "urgenthypey" | "hype" => Self::Urgent,
            "calm" | "calmprofessional" | "calmreassuring" | "professional" => Self::Calm,
            _ => Self::Unlisted(label.trim().to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::DirectNoBs => "Direct & No-BS",
            Self::Friendly => "Friendly & Conversational",
            Self::Premium => "High-End / Premium",
            Self::Urgent => "Urgent & Hypey",
            Self::Calm => "Calm & Professional",
            Self::Unlisted(label) => label,
        }
    }
}

impl From<String> for Tone {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl From<Tone> for String {
    fn from(tone: Tone) -> Self {
        tone.label().to_string()
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Awareness level
// ============================================================================

/// Schwartz awareness stage of the prospect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AwarenessLevel {
    Unaware,
    ProblemAware,
    #[default]
    SolutionAware,
    ProductAware,
    MostAware,
}

impl AwarenessLevel {
    pub const ALL: [AwarenessLevel; 5] = [
        AwarenessLevel::Unaware,
        AwarenessLevel::ProblemAware,
        AwarenessLevel::SolutionAware,
        AwarenessLevel::ProductAware,
        AwarenessLevel::MostAware,
    ];

    /// Unknown labels land on the most-aware angle; a blank label is the
    /// same as leaving the field out
    pub fn from_label(label: &str) -> Self {
        match label_key(label).as_str() {
            "" => Self::default(),
            "unaware" => Self::Unaware,
            "problemaware" | "problem" => Self::ProblemAware,
            "solutionaware" | "solution" => Self::SolutionAware,
            "productaware" | "product" => Self::ProductAware,
            _ => Self::MostAware,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Unaware => "Unaware",
            Self::ProblemAware => "Problem-aware",
            Self::SolutionAware => "Solution-aware",
            Self::ProductAware => "Product-aware",
            Self::MostAware => "Most-aware",
        }
    }

    /// Rhetorical strategy sentence for this stage
    pub fn angle(&self) -> &'static str {
        match self {
            Self::Unaware => {
                "lead with curiosity and a bold, intriguing promise that wakes them up."
            }
            Self::ProblemAware => {
                "agitate the pain they already feel and show you truly understand it."
            }
            Self::SolutionAware => "contrast old frustrating solutions with your better approach.",
            Self::ProductAware => {
                "stack proof, specifics, and reasons to act today with your product."
            }
            Self::MostAware => {
                "reinforce the offer, sweeten the deal, and remove every ounce of risk."
            }
        }
    }
}

impl From<String> for AwarenessLevel {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl From<AwarenessLevel> for String {
    fn from(level: AwarenessLevel) -> Self {
        level.label().to_string()
    }
}

impl fmt::Display for AwarenessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Master style
// ============================================================================

/// Copywriter persona whose style flavors the output
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MasterStyle {
    #[default]
    GaryHalbert,
    DavidOgilvy,
    DanKennedy,
    ClaudeHopkins,
    JoeSugarman,
    EugeneSchwartz,
    JohnCarlton,
    JayAbraham,
    RobertBly,
    NevilleMedhora,
    JoannaWiebe,
    HybridMix,
    /// A persona outside the catalog; resolved through the fallback strings
    Unlisted(String),
}

impl MasterStyle {
    pub const ALL: [MasterStyle; 12] = [
        MasterStyle::GaryHalbert,
        MasterStyle::DavidOgilvy,
        MasterStyle::DanKennedy,
        MasterStyle::ClaudeHopkins,
        MasterStyle::JoeSugarman,
        MasterStyle::EugeneSchwartz,
        MasterStyle::JohnCarlton,
        MasterStyle::JayAbraham,
        MasterStyle::RobertBly,
        MasterStyle::NevilleMedhora,
        MasterStyle::JoannaWiebe,
        MasterStyle::HybridMix,
    ];

    pub fn from_label(label: &str) -> Self {
        match label_key(label).as_str() {
            "garyhalbert" | "halbert" => Self::GaryHalbert,
            "davidogilvy" | "ogilvy" => Self::DavidOgilvy,
            "dankennedy" | "kennedy" => Self::DanKennedy,
            "claudehopkins" | "hopkins" => Self::ClaudeHopkins,
            "joesugarman" | "sugarman" => Self::JoeSugarman,
            "eugeneschwartz" | "schwartz" => Self::EugeneSchwartz,
            "johncarlton" | "carlton" => Self::JohnCarlton,
            "jayabraham" | "abraham" => Self::JayAbraham,
            "robertbly" | "bly" => Self::RobertBly,
            "nevillemedhora" | "medhora" => Self::NevilleMedhora,
            "joannawiebe" | "wiebe" => Self::JoannaWiebe,
            "hybridmix" | "hybrid" => Self::HybridMix,
            _ => Self::Unlisted(label.trim().to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::GaryHalbert => "Gary Halbert",
            Self::DavidOgilvy => "David Ogilvy",
            Self::DanKennedy => "Dan Kennedy",
            Self::ClaudeHopkins => "Claude Hopkins",
            Self::JoeSugarman => "Joe Sugarman",
            Self::EugeneSchwartz => "Eugene Schwartz",
            Self::JohnCarlton => "John Carlton",
            Self::JayAbraham => "Jay Abraham",
            Self::RobertBly => "Robert Bly",
            Self::NevilleMedhora => "Neville Medhora",
            Self::JoannaWiebe => "Joanna Wiebe",
            Self::HybridMix => "Hybrid Mix",
            Self::Unlisted(label) => label,
        }
    }

    /// One-sentence description of the persona's style
    pub fn flavor(&self) -> &'static str {
        match self {
            Self::GaryHalbert => "raw, emotional, almost letter-style copy that pokes at greed, fear, curiosity, and desire.",
            Self::DavidOgilvy => "research-driven clarity with a focus on specific, credible benefits.",
            Self::DanKennedy => "no-BS direct response copy with strong offers, deadlines, and risk reversal.",
            Self::ClaudeHopkins => "scientific advertising with testable claims and strong self-interest appeals.",
            Self::JoeSugarman => "slippery-slide storytelling with curiosity and sensory details.",
            Self::EugeneSchwartz => "desire-intensifying copy tuned to market awareness and sophistication.",
            Self::JohnCarlton => "punchy, street-wise hooks with vivid payoff and urgency.",
            Self::JayAbraham => "preeminence, value stacking, and strategic leverage of every advantage.",
            Self::RobertBly => "4 U's: Useful, Urgent, Unique, Ultra-specific, with clear benefits.",
            Self::NevilleMedhora => "simple, scannable, human copy with a hint of humor.",
            Self::JoannaWiebe => "voice-of-customer phrasing and sharp conversion-focused microcopy.",
            Self::HybridMix => "a blend of classic direct response aggression and modern conversion copy.",
            Self::Unlisted(_) => "classic direct response flavor.",
        }
    }

    /// Persona opening line for the ATTENTION section
    pub fn hook(&self) -> Option<&'static str> {
        let hook = match self {
            Self::GaryHalbert => "Let me tell you a quick story about the one letter that changes everything.",
            Self::DavidOgilvy => "Here are the facts, plainly stated, so you can judge for yourself.",
            Self::DanKennedy => "No fluff. No hand-holding. Just the offer and why it matters right now.",
            Self::ClaudeHopkins => "Every claim below can be tested, measured, and proven in your own business.",
            Self::JoeSugarman => "Read the next sentence. Then the one after it. You will see why.",
            Self::EugeneSchwartz => "You already want this result. Let's make that desire impossible to ignore.",
            Self::JohnCarlton => "Listen up, because this is the part most marketers skip.",
            Self::JayAbraham => "You are sitting on more leverage than you realize.",
            Self::RobertBly => "Useful, urgent, unique, and specific: that is the promise on this page.",
            Self::NevilleMedhora => "Okay, quick one. This won't take long.",
            Self::JoannaWiebe => "You told us what you wanted. Here it is, in your own words.",
            Self::HybridMix => "Old-school persuasion, new-school precision.",
            Self::Unlisted(_) => return None,
        };
        Some(hook)
    }

    /// Style note printed at the top of an email sequence
    pub fn email_note(&self) -> &'static str {
        match self {
            Self::GaryHalbert => "Expect drama, storytelling, and emotional hooks.",
            Self::DavidOgilvy => "Expect clarity, specifics, and strong benefits.",
            Self::DanKennedy => "Expect no-BS, money/results-focused messaging.",
            Self::JoeSugarman => "Expect curiosity and slippery-slide storytelling.",
            Self::EugeneSchwartz => "Expect awareness-based buildup of desire.",
            Self::JohnCarlton => "Expect punchy, conversational, street-smart lines.",
            Self::JayAbraham => "Expect preeminence and value stacking.",
            Self::RobertBly => "Expect clear structure and practical benefits.",
            Self::NevilleMedhora => "Expect short, fun, human-sounding emails.",
            Self::JoannaWiebe => "Expect voice-of-customer-driven, sharp microcopy.",
            Self::HybridMix => "Expect a balanced blend of old-school and modern persuasion.",
            Self::ClaudeHopkins | Self::Unlisted(_) => "Classic direct response tone.",
        }
    }

    /// Style hint for short classified ads
    pub fn classified_hint(&self) -> &'static str {
        match self {
            Self::GaryHalbert => "emotional, direct-mail style with a strong hook and clear self-interest.",
            Self::DavidOgilvy => "clear benefit, specific promise, and respect for the reader's intelligence.",
            Self::DanKennedy => "no-BS, direct response tone with focus on money, time, and results.",
            Self::JohnCarlton => "punchy, street-wise language with urgency and vivid payoff.",
            Self::JoeSugarman => "curiosity and a conversational 'slippery slide' feel.",
            Self::RobertBly => "simple, useful, ultra-specific phrasing.",
            Self::NevilleMedhora => "short, funny, human lines that feel like a friend wrote them.",
            _ => "classic direct response style adapted for short classified ads.",
        }
    }
}

impl From<String> for MasterStyle {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl From<MasterStyle> for String {
    fn from(style: MasterStyle) -> Self {
        style.label().to_string()
    }
}

impl fmt::Display for MasterStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Niche
// ============================================================================

/// Defaults applied when a brief leaves audience or benefits blank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NichePreset {
    /// Audience sentence used inside "If you're ..."
    pub audience: &'static str,
    /// Plural audience label used in headlines, emails and ads
    pub headline_audience: &'static str,
    pub benefits: [&'static str; 3],
    /// Sentence appended after the call to action
    pub closing: &'static str,
}

const HEALTH_FITNESS: NichePreset = NichePreset {
    audience: "a busy adult who wants to get in shape without living at the gym",
    headline_audience: "busy adults",
    benefits: [
        "lose stubborn weight without starving yourself",
        "get more energy in the next 14 days",
        "build a routine you actually stick to",
    ],
    closing: "Your healthier, stronger self is one decision away.",
};

const MAKE_MONEY_ONLINE: NichePreset = NichePreset {
    audience: "an aspiring entrepreneur who wants a real online income stream",
    headline_audience: "aspiring online earners",
    benefits: [
        "make your first online sale faster",
        "build income that does not depend on a boss",
        "stop wasting money on shiny objects",
    ],
    closing: "The sooner you start, the sooner the results start stacking up.",
};

const BUSINESS_COACHING: NichePreset = NichePreset {
    audience: "a coach or consultant who is ready to fill their calendar with ideal clients",
    headline_audience: "coaches and consultants",
    benefits: [
        "book more qualified sales calls",
        "raise your rates with confidence",
        "stop chasing clients who never buy",
    ],
    closing: "Your next ideal client is already looking for you.",
};

const ECOMMERCE: NichePreset = NichePreset {
    audience: "an online store owner who is tired of abandoned carts",
    headline_audience: "store owners",
    benefits: [
        "turn more visitors into paying customers",
        "lift your average order value",
        "win back shoppers who left without buying",
    ],
    closing: "Every day you wait is another day of sales left on the table.",
};

const RELATIONSHIPS_DATING: NichePreset = NichePreset {
    audience: "a single adult who wants a relationship that actually lasts",
    headline_audience: "singles",
    benefits: [
        "attract partners who are genuinely interested",
        "walk into every date with confidence",
        "stop repeating the same heartbreak",
    ],
    closing: "The right connection starts with a single step.",
};

const PERSONAL_DEVELOPMENT: NichePreset = NichePreset {
    audience: "an ambitious person who knows they are capable of more",
    headline_audience: "ambitious achievers",
    benefits: [
        "build habits that stick for good",
        "get clear on what you really want",
        "stop procrastinating on what matters",
    ],
    closing: "The person you want to become is waiting on this decision.",
};

const FINANCE_INVESTING: NichePreset = NichePreset {
    audience: "a hard-working earner who wants their money to finally work for them",
    headline_audience: "everyday investors",
    benefits: [
        "grow your savings without risky bets",
        "get out of debt faster",
        "make confident money decisions",
    ],
    closing: "Your future self will thank you for acting now.",
};

const LOCAL_SERVICES: NichePreset = NichePreset {
    audience: "a local business owner who needs more customers walking through the door",
    headline_audience: "local business owners",
    benefits: [
        "get more calls from local customers",
        "stand out from every competitor in town",
        "fill your schedule during slow seasons",
    ],
    closing: "Your neighbors are searching for exactly what you offer.",
};

const GENERIC: NichePreset = NichePreset {
    audience: "someone who needs what you offer",
    headline_audience: "ambitious entrepreneurs",
    benefits: [
        "get better results with less effort and stress",
        "save hours every single week",
        "feel confident about every next step",
    ],
    closing: "Take the first step and see the difference for yourself.",
};

/// Market category selecting audience, benefit and closing defaults
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Niche {
    HealthFitness,
    MakeMoneyOnline,
    BusinessCoaching,
    Ecommerce,
    RelationshipsDating,
    PersonalDevelopment,
    FinanceInvesting,
    LocalServices,
    #[default]
    Generic,
}

impl Niche {
    pub const ALL: [Niche; 9] = [
        Niche::HealthFitness,
        Niche::MakeMoneyOnline,
        Niche::BusinessCoaching,
        Niche::Ecommerce,
        Niche::RelationshipsDating,
        Niche::PersonalDevelopment,
        Niche::FinanceInvesting,
        Niche::LocalServices,
        Niche::Generic,
    ];

    pub fn from_label(label: &str) -> Self {
        match label_key(label).as_str() {
            "healthfitness" | "health" | "fitness" | "weightloss" => Self::HealthFitness,
            "makemoneyonline" | "mmo" | "businessopportunity" | "bizopp" => Self::MakeMoneyOnline,
            "businesscoaching" | "coaching" | "consulting" => Self::BusinessCoaching,
            "ecommerce" | "ecom" | "onlinestore" => Self::Ecommerce,
            "relationshipsdating" | "relationships" | "dating" => Self::RelationshipsDating,
            "personaldevelopment" | "selfimprovement" | "selfhelp" => Self::PersonalDevelopment,
            "financeinvesting" | "finance" | "investing" | "personalfinance" => {
                Self::FinanceInvesting
            }
            "localservices" | "local" | "localbusiness" => Self::LocalServices,
            _ => Self::Generic,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::HealthFitness => "Health & Fitness",
            Self::MakeMoneyOnline => "Make Money Online",
            Self::BusinessCoaching => "Business & Coaching",
            Self::Ecommerce => "E-commerce",
            Self::RelationshipsDating => "Relationships & Dating",
            Self::PersonalDevelopment => "Personal Development",
            Self::FinanceInvesting => "Finance & Investing",
            Self::LocalServices => "Local Services",
            Self::Generic => "General",
        }
    }

    pub fn preset(&self) -> &'static NichePreset {
        match self {
            Self::HealthFitness => &HEALTH_FITNESS,
            Self::MakeMoneyOnline => &MAKE_MONEY_ONLINE,
            Self::BusinessCoaching => &BUSINESS_COACHING,
            Self::Ecommerce => &ECOMMERCE,
            Self::RelationshipsDating => &RELATIONSHIPS_DATING,
            Self::PersonalDevelopment => &PERSONAL_DEVELOPMENT,
            Self::FinanceInvesting => &FINANCE_INVESTING,
            Self::LocalServices => &LOCAL_SERVICES,
            Self::Generic => &GENERIC,
        }
    }
}

impl From<String> for Niche {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl From<Niche> for String {
    fn from(niche: Niche) -> Self {
        niche.label().to_string()
    }
}

impl fmt::Display for Niche {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
