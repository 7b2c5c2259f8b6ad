// Rewrite Module
// Style-driven text variation generation:
// - tables: ordered substitution tables and clause pools per style
// - sentence: terminal-punctuation sentence splitter
// - engine: substitution pass + structural transforms + score sampling

pub mod engine;
pub mod sentence;
pub mod tables;

pub use engine::{apply_rules, generate_variation};
pub use sentence::split_sentences;
pub use tables::{rules_for, RewriteRule};
