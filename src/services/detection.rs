// Detection Simulation Service
// Synthetic plagiarism/AI-origin scores from uniform draws in fixed ranges,
// plus the derived risk band and content statistics shown alongside them.

use rand::rngs::StdRng;
use rand::Rng;

use crate::models::DetectionResult;

pub const AI_SOURCES: [&str; 5] = ["ChatGPT-3.5", "ChatGPT-4", "Claude", "Bard", "Jasper"];

/// Plagiarism score range [lo, hi).
const SCORE_RANGE: (i32, i32) = (20, 100);
/// AI-generated share range [lo, hi); human share is the complement.
const AI_GENERATED_RANGE: (i32, i32) = (40, 100);

/// Draw a synthetic detection result. Always succeeds; consumes randomness
/// and nothing else.
pub fn simulate_detection(rng: &mut StdRng) -> DetectionResult {
    let score = rng.gen_range(SCORE_RANGE.0..SCORE_RANGE.1);
    let ai_generated = rng.gen_range(AI_GENERATED_RANGE.0..AI_GENERATED_RANGE.1);
    let ai_source = AI_SOURCES[rng.gen_range(0..AI_SOURCES.len())];

    DetectionResult {
        score,
        ai_generated,
        human_written: 100 - ai_generated,
        ai_source: ai_source.to_string(),
    }
}

// ============ Presentation Helpers ============

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

impl RiskLevel {
    pub fn from_score(score: i32) -> Self {
        if score > 80 {
            RiskLevel::High
        } else if score > 50 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::High => "High Risk",
            RiskLevel::Medium => "Medium Risk",
            RiskLevel::Low => "Low Risk",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            RiskLevel::High => {
                "Content has significant plagiarism issues that need immediate attention."
            }
            RiskLevel::Medium => "Content contains some plagiarized elements that should be revised.",
            RiskLevel::Low => {
                "Content appears to be mostly original with minimal plagiarism concerns."
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentStats {
    pub char_count: usize,
    pub word_count: usize,
    pub reading_time_minutes: i32,
}

impl ContentStats {
    pub fn of(text: &str) -> Self {
        let char_count = text.chars().count();
        let reading_time_minutes = std::cmp::max(1, (char_count as f64 / 1000.0).round() as i32);
        Self {
            char_count,
            word_count: text.split_whitespace().count(),
            reading_time_minutes,
        }
    }
}
