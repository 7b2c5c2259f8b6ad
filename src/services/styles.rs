// Style Catalog
// Static per-style presentation metadata and score ranges.
// New styles are additive entries here plus a substitution table; no new control flow.

use crate::models::VariationStyle;

#[derive(Debug, Clone)]
pub struct StyleProfile {
    pub style: VariationStyle,
    pub label: &'static str,
    pub description: &'static str,
    pub color: &'static str,
    /// Half-open range [lo, hi) sampled for the readability score.
    pub readability: (i32, i32),
    /// Half-open range [lo, hi) sampled for the similarity score.
    pub similarity: (i32, i32),
}

pub const PROFILES: [StyleProfile; 5] = [
    StyleProfile {
        style: VariationStyle::Academic,
        label: "Academic",
        description: "Formal academic style with scholarly language",
        color: "#8B5CF6",
        readability: (70, 90),
        similarity: (60, 90),
    },
    StyleProfile {
        style: VariationStyle::Conversational,
        label: "Conversational",
        description: "Casual and friendly tone",
        color: "#0EA5E9",
        readability: (80, 100),
        similarity: (50, 80),
    },
    StyleProfile {
        style: VariationStyle::Creative,
        label: "Creative",
        description: "Creative and engaging style",
        color: "#D946EF",
        readability: (75, 95),
        similarity: (40, 70),
    },
    StyleProfile {
        style: VariationStyle::Concise,
        label: "Concise",
        description: "Clear and direct style",
        color: "#F97316",
        readability: (85, 100),
        similarity: (70, 100),
    },
    StyleProfile {
        style: VariationStyle::Business,
        label: "Business",
        description: "Professional tone with workplace vocabulary",
        color: "#10B981",
        readability: (65, 85),
        similarity: (60, 85),
    },
];

pub fn profile_for(style: VariationStyle) -> &'static StyleProfile {
    PROFILES
        .iter()
        .find(|p| p.style == style)
        .unwrap_or(&PROFILES[0])
}
