//! Headline patterns
//!
//! Five fixed patterns, plus a sixth when the brief names a second benefit.
//! Order is part of the contract.

use crate::resolve::ResolvedBrief;

pub fn build_headlines(resolved: &ResolvedBrief<'_>) -> Vec<String> {
    let product = &resolved.brief.product_name;
    let base = &resolved.base_benefit;
    let base_lower = base.to_lowercase();

    let obstacle = if base_lower.contains("without") {
        "roadblocks"
    } else {
        "stress"
    };

    let mut headlines = vec![
        format!("{} — without the usual {}", base, obstacle),
        format!(
            "How to {} with {} (Even If You Feel You've Tried Everything)",
            base_lower, product
        ),
        format!(
            "The {} Shortcut That Quietly Turns Cold Traffic into Buyers",
            product
        ),
        format!(
            "New for {}: {} That Finally Makes Your Traffic Pay",
            resolved.audience_label, product
        ),
        format!(
            "Use {} to {} in the Next 30 Days... Or Less",
            product, base_lower
        ),
    ];

    if let Some(second) = resolved.brief.benefits.get(1) {
        headlines.push(format!(
            "Turn {} into your unfair advantage with {}",
            second.to_lowercase(),
            product
        ));
    }

    headlines
}
