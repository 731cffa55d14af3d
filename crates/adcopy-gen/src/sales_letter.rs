//! Long-form sales letter in four labelled sections:
//! ATTENTION, INTEREST, DESIRE, ACTION.

use crate::resolve::ResolvedBrief;

/// Bullet used when the brief lists no benefits
pub const DEFAULT_BULLET: &str = "Clear, measurable results";

pub fn build_sales_letter(resolved: &ResolvedBrief<'_>) -> String {
    let brief = resolved.brief;

    let header = format!(
        "[{}-inspired angle – {}]",
        brief.master_style.label(),
        resolved.style_flavor
    );

    let mut attention = Vec::new();
    if let Some(hook) = brief.master_style.hook() {
        attention.push(hook.to_string());
    }
    attention.push(format!(
        "If you're {}, there's a good chance the problem is not you...",
        resolved.audience_short
    ));
    attention.push("it's the message you're putting in front of your market.".to_string());
    attention.push(
        "Your prospects have heard every generic promise before, and they have learned to tune them out."
            .to_string(),
    );

    let interest = format!(
        "{} is built to fix that.\n\n{}\n\nInstead of shouting into the void, you start speaking directly to what your prospects already care about most. You {}",
        brief.product_name, brief.product_description, resolved.awareness_angle
    );

    let bullets = if brief.benefits.is_empty() {
        format!("- {}", DEFAULT_BULLET)
    } else {
        brief
            .benefits
            .iter()
            .map(|b| format!("- {}", b))
            .collect::<Vec<_>>()
            .join("\n")
    };
    let desire = format!(
        "Here is what that looks like when it is working for you:\n\n{}",
        bullets
    );

    let action = format!(
        "If you're serious about {} and ready to use copy that finally matches the value you deliver, this is your move:\n\n{}\n\n{}",
        resolved.base_benefit.to_lowercase(),
        resolved.cta_sentence(),
        resolved.preset.closing
    );

    let sections = [
        header,
        format!("ATTENTION\n\n{}", attention.join("\n")),
        format!("INTEREST\n\n{}", interest),
        format!("DESIRE\n\n{}", desire),
        format!("ACTION\n\n{}", action),
    ];

    let mut letter = sections.join("\n\n");
    letter.push('\n');
    letter
}
