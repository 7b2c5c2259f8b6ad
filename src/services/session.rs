// Session Orchestration Service
// Explicit state object with one entry point per user action (analyze,
// refresh, select, reset). Analysis commits are gated on an epoch ticket so a
// completion scheduled before a reset or a newer analysis cannot overwrite
// current state.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::{DetectionResult, Variation, VariationStyle};
use crate::services::config_store::AnalysisConfig;
use crate::services::detection::simulate_detection;
use crate::services::rewrite::generate_variation;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("input text is empty")]
    EmptyInput,
}

#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub input_text: String,
    pub analyzing: bool,
    pub results_ready: bool,
    pub request_id: Option<String>,
    pub detection: Option<DetectionResult>,
    pub variations: Vec<Variation>,
    /// Bumped on every begin/reset; pending completions from older epochs
    /// are dropped at commit time.
    pub epoch: u64,
}

/// Handle returned by `begin_analysis`, bound to the epoch it was issued in.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AnalysisTicket {
    epoch: u64,
}

pub struct AnalyzerSession {
    config: AnalysisConfig,
    rng: StdRng,
    state: SessionState,
}

impl AnalyzerSession {
    pub fn new(config: AnalysisConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Construct with a caller-supplied RNG so tests can seed it.
    pub fn with_rng(config: AnalysisConfig, rng: StdRng) -> Self {
        Self {
            config,
            rng,
            state: SessionState::default(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.state.input_text = text.into();
    }

    /// Validate input and mark the session analyzing. Bumping the epoch here
    /// invalidates any ticket issued earlier.
    pub fn begin_analysis(&mut self) -> Result<AnalysisTicket, SessionError> {
        if self.state.input_text.trim().is_empty() {
            return Err(SessionError::EmptyInput);
        }

        self.state.epoch += 1;
        self.state.analyzing = true;
        info!(epoch = self.state.epoch, chars = self.state.input_text.chars().count(), "analysis.started");

        Ok(AnalysisTicket { epoch: self.state.epoch })
    }

    /// Commit detection plus one variation per configured style, only if the
    /// ticket is still current. Stale tickets are dropped.
    pub fn complete_analysis(&mut self, ticket: AnalysisTicket) -> bool {
        if ticket.epoch != self.state.epoch || !self.state.analyzing {
            warn!(
                ticket_epoch = ticket.epoch,
                current_epoch = self.state.epoch,
                "analysis.stale_ticket_dropped"
            );
            return false;
        }

        let detection = simulate_detection(&mut self.rng);
        let variations: Vec<Variation> = self
            .config
            .styles
            .iter()
            .map(|style| generate_variation(*style, &self.state.input_text, &mut self.rng))
            .collect();

        let request_id = Uuid::new_v4().to_string();
        info!(
            request_id = %request_id,
            score = detection.score,
            variations = variations.len(),
            "analysis.committed"
        );

        self.state.detection = Some(detection);
        self.state.variations = variations;
        self.state.request_id = Some(request_id);
        self.state.analyzing = false;
        self.state.results_ready = true;
        true
    }

    /// Full analyze action: validate, wait out the simulated latency, commit.
    pub async fn analyze(&mut self) -> Result<bool, SessionError> {
        let ticket = self.begin_analysis()?;
        tokio::time::sleep(Duration::from_millis(self.config.delay_ms)).await;
        Ok(self.complete_analysis(ticket))
    }

    /// Re-roll a single style in place. Every other entry is untouched.
    /// Returns false when no results hold that style.
    pub fn refresh(&mut self, style: VariationStyle) -> bool {
        let input = self.state.input_text.clone();
        let Some(slot) = self
            .state
            .variations
            .iter_mut()
            .find(|v| v.style == style)
        else {
            return false;
        };

        *slot = generate_variation(style, &input, &mut self.rng);
        info!(style = style.as_str(), "variation.refreshed");
        true
    }

    /// Adopt a variation's text as the working input. The results view stays
    /// as-is.
    pub fn select(&mut self, style: VariationStyle) -> bool {
        let Some(variation) = self.state.variations.iter().find(|v| v.style == style) else {
            return false;
        };

        self.state.input_text = variation.text.clone();
        info!(style = style.as_str(), "variation.selected");
        true
    }

    /// Return to the initial state. The epoch bump kills pending completions.
    pub fn reset(&mut self) {
        let epoch = self.state.epoch + 1;
        self.state = SessionState {
            epoch,
            ..SessionState::default()
        };
        info!(epoch, "session.reset");
    }
}
