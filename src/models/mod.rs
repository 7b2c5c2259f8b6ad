// WriteRight Data Models
// Shared result types for detection and humanized variations

use serde::{Deserialize, Serialize};

// ============ Variation Styles ============

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariationStyle {
    Academic,
    Conversational,
    Creative,
    Concise,
    Business,
}

impl VariationStyle {
    pub const ALL: [VariationStyle; 5] = [
        VariationStyle::Academic,
        VariationStyle::Conversational,
        VariationStyle::Creative,
        VariationStyle::Concise,
        VariationStyle::Business,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            VariationStyle::Academic => "academic",
            VariationStyle::Conversational => "conversational",
            VariationStyle::Creative => "creative",
            VariationStyle::Concise => "concise",
            VariationStyle::Business => "business",
        }
    }

    /// Lenient parsing for CLI flags and config values.
    /// "casual" is accepted as a legacy alias for conversational.
    pub fn parse(val: &str) -> Option<Self> {
        match val.trim().to_lowercase().as_str() {
            "academic" => Some(VariationStyle::Academic),
            "conversational" | "casual" => Some(VariationStyle::Conversational),
            "creative" => Some(VariationStyle::Creative),
            "concise" => Some(VariationStyle::Concise),
            "business" => Some(VariationStyle::Business),
            _ => None,
        }
    }
}

// ============ Humanized Variation ============

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Variation {
    #[serde(rename = "type")]
    pub style: VariationStyle,
    pub text: String,
    pub label: String,
    pub description: String,
    pub color: String,
    pub readability_score: i32,
    pub similarity_score: i32,
}

// ============ Detection Result ============

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DetectionResult {
    pub score: i32,
    pub ai_generated: i32,
    pub human_written: i32,
    pub ai_source: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_parse_lenient() {
        assert_eq!(VariationStyle::parse("Academic"), Some(VariationStyle::Academic));
        assert_eq!(VariationStyle::parse(" concise "), Some(VariationStyle::Concise));
        assert_eq!(VariationStyle::parse("casual"), Some(VariationStyle::Conversational));
        assert_eq!(VariationStyle::parse("poetic"), None);
    }

    #[test]
    fn test_variation_serializes_camel_case() {
        let variation = Variation {
            style: VariationStyle::Business,
            text: "Leverage the outcome.".to_string(),
            label: "Business".to_string(),
            description: "Professional business tone".to_string(),
            color: "#10B981".to_string(),
            readability_score: 72,
            similarity_score: 68,
        };

        let json = serde_json::to_string(&variation).unwrap();
        assert!(json.contains("\"type\":\"business\""));
        assert!(json.contains("\"readabilityScore\":72"));

        let parsed: Variation = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, variation);
    }

    #[test]
    fn test_detection_result_round_trip() {
        let result = DetectionResult {
            score: 64,
            ai_generated: 55,
            human_written: 45,
            ai_source: "Claude".to_string(),
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"aiGenerated\":55"));
        let parsed: DetectionResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);
    }
}
