use rand::rngs::StdRng;
use rand::SeedableRng;

use write_right_lib::models::VariationStyle;
use write_right_lib::services::config_store::AnalysisConfig;
use write_right_lib::services::detection::{ContentStats, RiskLevel};
use write_right_lib::services::session::{AnalyzerSession, SessionError};
use write_right_lib::services::styles::profile_for;

fn session_with_seed(seed: u64) -> AnalyzerSession {
    let config = AnalysisConfig {
        delay_ms: 0,
        styles: VariationStyle::ALL.to_vec(),
    };
    AnalyzerSession::with_rng(config, StdRng::seed_from_u64(seed))
}

const SAMPLE: &str = "I think that this is good. \
                      We met in order to make a decision due to the fact that the plan was very important. \
                      The old house, with its broken windows, stood alone.";

#[tokio::test]
async fn analyze_produces_one_variation_per_style() {
    let mut session = session_with_seed(42);
    session.set_input(SAMPLE);
    assert!(session.analyze().await.unwrap());

    let state = session.state();
    assert!(state.results_ready);
    assert!(!state.analyzing);
    assert!(state.request_id.is_some());
    assert_eq!(state.variations.len(), VariationStyle::ALL.len());

    for (style, variation) in VariationStyle::ALL.iter().zip(state.variations.iter()) {
        assert_eq!(variation.style, *style);
        assert!(!variation.text.is_empty());

        let profile = profile_for(*style);
        assert!(
            variation.readability_score >= profile.readability.0
                && variation.readability_score < profile.readability.1
        );
        assert!(
            variation.similarity_score >= profile.similarity.0
                && variation.similarity_score < profile.similarity.1
        );
    }

    let detection = state.detection.as_ref().unwrap();
    assert_eq!(detection.ai_generated + detection.human_written, 100);
    assert!(detection.score >= 20 && detection.score < 100);
}

#[tokio::test]
async fn academic_and_concise_substitutions_apply() {
    let mut session = session_with_seed(7);
    session.set_input(SAMPLE);
    session.analyze().await.unwrap();

    let state = session.state();
    let academic = state
        .variations
        .iter()
        .find(|v| v.style == VariationStyle::Academic)
        .unwrap();
    assert!(academic.text.contains("postulate"));
    assert!(!academic.text.to_lowercase().contains("good"));

    let concise = state
        .variations
        .iter()
        .find(|v| v.style == VariationStyle::Concise)
        .unwrap();
    assert!(!concise.text.contains("in order to"));
    assert!(!concise.text.contains("due to the fact that"));
}

#[tokio::test]
async fn refresh_reroll_leaves_other_styles_untouched() {
    let mut session = session_with_seed(9);
    session.set_input(SAMPLE);
    session.analyze().await.unwrap();

    let before = session.state().variations.clone();
    assert!(session.refresh(VariationStyle::Business));

    for (old, new) in before.iter().zip(session.state().variations.iter()) {
        if old.style != VariationStyle::Business {
            assert_eq!(old, new);
        }
    }
}

#[tokio::test]
async fn select_then_reset_round_trip() {
    let mut session = session_with_seed(21);
    session.set_input(SAMPLE);
    session.analyze().await.unwrap();

    assert!(session.select(VariationStyle::Academic));
    let adopted = session.state().input_text.clone();
    assert!(adopted.contains("postulate"));
    assert_ne!(adopted, SAMPLE);

    session.reset();
    let state = session.state();
    assert_eq!(state.input_text, "");
    assert!(state.variations.is_empty());
    assert!(state.detection.is_none());
    assert!(!state.results_ready);
}

#[tokio::test]
async fn blank_input_never_reaches_results() {
    let mut session = session_with_seed(3);
    session.set_input("  \n ");
    assert_eq!(session.analyze().await, Err(SessionError::EmptyInput));
    assert!(!session.state().results_ready);
    assert!(session.state().variations.is_empty());
}

#[test]
fn risk_and_stats_presentation_values() {
    assert_eq!(RiskLevel::from_score(81), RiskLevel::High);
    assert_eq!(RiskLevel::from_score(80), RiskLevel::Medium);
    assert_eq!(RiskLevel::from_score(50), RiskLevel::Low);

    let stats = ContentStats::of(&"a".repeat(2600));
    assert_eq!(stats.reading_time_minutes, 3);
}
