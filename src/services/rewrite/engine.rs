// Variation Generation Engine
// Applies a style's substitution table over a single buffer, then the style's
// structural transform, then samples the synthetic scores. Total for every
// input string; callers guard blank input before invoking.

use rand::rngs::StdRng;
use rand::Rng;
use regex::Regex;

use super::sentence::split_sentences;
use super::tables::{
    self, RewriteRule, BUSINESS_CLAUSES, CREATIVE_CLAUSES, FILLER_OPENERS,
};
use crate::models::{Variation, VariationStyle};
use crate::services::styles::profile_for;

const FILLER_OPENER_PROBABILITY: f64 = 0.4;
const SENTENCE_SPLICE_PROBABILITY: f64 = 0.3;

/// Run rules in table order over one buffer. Overlapping rules are not
/// resolved against each other; a later rule sees the output of earlier ones.
pub fn apply_rules(text: &str, rules: &[RewriteRule]) -> String {
    let mut out = text.to_string();
    for rule in rules {
        out = rule.matcher.replace_all(&out, rule.replacement).into_owned();
    }
    out
}

/// Generate one humanized variation of `input_text` for `style`.
pub fn generate_variation(
    style: VariationStyle,
    input_text: &str,
    rng: &mut StdRng,
) -> Variation {
    let substituted = apply_rules(input_text, tables::rules_for(style));

    let text = match style {
        VariationStyle::Academic => substituted,
        VariationStyle::Conversational => conversational_transform(&substituted, rng),
        VariationStyle::Creative => creative_transform(&substituted, rng),
        VariationStyle::Concise => concise_transform(&substituted),
        VariationStyle::Business => business_transform(&substituted, rng),
    };

    let profile = profile_for(style);
    Variation {
        style,
        text,
        label: profile.label.to_string(),
        description: profile.description.to_string(),
        color: profile.color.to_string(),
        readability_score: rng.gen_range(profile.readability.0..profile.readability.1),
        similarity_score: rng.gen_range(profile.similarity.0..profile.similarity.1),
    }
}

/// Fold contractions, then sometimes prepend a filler opener and lowercase
/// the first letter of the rest so the sentence still flows.
fn conversational_transform(text: &str, rng: &mut StdRng) -> String {
    let folded = apply_rules(text, tables::contraction_rules());
    if folded.is_empty() || rng.gen::<f64>() >= FILLER_OPENER_PROBABILITY {
        return folded;
    }

    let opener = FILLER_OPENERS[rng.gen_range(0..FILLER_OPENERS.len())];
    let mut chars = folded.chars();
    match chars.next() {
        Some(first) => format!("{}{}{}", opener, first.to_lowercase(), chars.as_str()),
        None => folded,
    }
}

/// Per sentence, sometimes splice a descriptive clause at the first comma
/// before the midpoint, else the first space after the 10th character.
fn creative_transform(text: &str, rng: &mut StdRng) -> String {
    let sentences = split_sentences(text);
    if sentences.is_empty() {
        return text.to_string();
    }

    let spliced: Vec<String> = sentences
        .iter()
        .map(|sentence| {
            if rng.gen::<f64>() >= SENTENCE_SPLICE_PROBABILITY {
                return sentence.clone();
            }
            let clause = CREATIVE_CLAUSES[rng.gen_range(0..CREATIVE_CLAUSES.len())];
            splice_clause(sentence, clause)
        })
        .collect();

    spliced.join(" ")
}

/// Per sentence, sometimes append a jargon clause before the terminal
/// punctuation.
fn business_transform(text: &str, rng: &mut StdRng) -> String {
    let sentences = split_sentences(text);
    if sentences.is_empty() {
        return text.to_string();
    }

    let appended: Vec<String> = sentences
        .iter()
        .map(|sentence| {
            if rng.gen::<f64>() >= SENTENCE_SPLICE_PROBABILITY {
                return sentence.clone();
            }
            let clause = BUSINESS_CLAUSES[rng.gen_range(0..BUSINESS_CLAUSES.len())];
            append_jargon(sentence, clause)
        })
        .collect();

    appended.join(" ")
}

/// Strip intensifier adverbs, fold nominalizations, collapse doubled spaces.
fn concise_transform(text: &str) -> String {
    let stripped = apply_rules(text, tables::intensifier_rules());
    let folded = apply_rules(&stripped, tables::nominalization_rules());

    let ws_re = Regex::new(r" {2,}").unwrap();
    ws_re.replace_all(&folded, " ").trim().to_string()
}

enum SplicePoint {
    AfterComma(usize),
    AtSpace(usize),
}

fn splice_point(sentence: &str) -> Option<SplicePoint> {
    if let Some(pos) = sentence.find(',') {
        if pos < sentence.len() / 2 {
            return Some(SplicePoint::AfterComma(pos));
        }
    }

    let mut seen = 0usize;
    for (idx, ch) in sentence.char_indices() {
        seen += 1;
        if seen > 10 && ch == ' ' {
            return Some(SplicePoint::AtSpace(idx));
        }
    }

    None
}

fn splice_clause(sentence: &str, clause: &str) -> String {
    match splice_point(sentence) {
        Some(SplicePoint::AfterComma(pos)) => {
            format!("{} {},{}", &sentence[..=pos], clause, &sentence[pos + 1..])
        }
        Some(SplicePoint::AtSpace(pos)) => {
            format!("{}, {},{}", &sentence[..pos], clause, &sentence[pos..])
        }
        None => sentence.to_string(),
    }
}

fn append_jargon(sentence: &str, clause: &str) -> String {
    let body = sentence.trim_end_matches(['.', '!', '?']);
    if body.len() == sentence.len() {
        return format!("{}, {}", sentence, clause);
    }
    let punctuation = &sentence[body.len()..];
    format!("{}, {}{}", body, clause, punctuation)
}
