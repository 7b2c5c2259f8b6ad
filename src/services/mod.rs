// WriteRight Core Services

pub mod config_store;
pub mod detection;
pub mod rewrite;
pub mod session;
pub mod styles;

pub use config_store::*;
pub use styles::*;

// Re-export the service entry points
pub use detection::{simulate_detection, ContentStats, RiskLevel, AI_SOURCES};
pub use rewrite::{apply_rules, generate_variation, rules_for, split_sentences, RewriteRule};
pub use session::{AnalysisTicket, AnalyzerSession, SessionError, SessionState};
