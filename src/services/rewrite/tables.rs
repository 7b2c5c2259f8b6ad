// Substitution Tables
// Ordered (phrase, replacement) pairs per style, compiled once into
// case-insensitive whole-word matchers. Rules run sequentially over a single
// buffer, so a later rule may rewrite text produced by an earlier one; tables
// are never normalized to a fixed point.

use regex::Regex;
use std::sync::OnceLock;

use crate::models::VariationStyle;

#[derive(Debug)]
pub struct RewriteRule {
    pub matcher: Regex,
    pub replacement: &'static str,
}

/// `look at` never fires: the earlier `look` rule rewrites its span first.
/// Kept in table order anyway; dictionary order is the contract.
const ACADEMIC_TABLE: &[(&str, &str)] = &[
    ("show", "demonstrate"),
    ("use", "utilize"),
    ("make", "formulate"),
    ("think", "postulate"),
    ("big", "substantial"),
    ("small", "minimal"),
    ("good", "advantageous"),
    ("bad", "detrimental"),
    ("important", "significant"),
    ("start", "commence"),
    ("end", "conclude"),
    ("get", "acquire"),
    ("find", "ascertain"),
    ("help", "facilitate"),
    ("change", "modify"),
    ("look", "examine"),
    ("need", "require"),
    ("want", "desire"),
    ("look at", "scrutinize"),
    ("also", "additionally"),
    ("but", "however"),
    ("so", "consequently"),
];

const CONVERSATIONAL_TABLE: &[(&str, &str)] = &[
    ("therefore", "so"),
    ("however", "but"),
    ("furthermore", "also"),
    ("demonstrate", "show"),
    ("utilize", "use"),
    ("obtain", "get"),
    ("purchase", "buy"),
    ("sufficient", "enough"),
    ("assistance", "help"),
    ("attempt", "try"),
    ("inquire", "ask"),
    ("comprehend", "understand"),
    ("request", "ask for"),
    ("commence", "start"),
    ("terminate", "end"),
    ("consequently", "so"),
    ("additionally", "also"),
    ("subsequently", "later"),
];

const CREATIVE_TABLE: &[(&str, &str)] = &[
    ("see", "visualize"),
    ("big", "enormous"),
    ("small", "tiny"),
    ("walk", "stroll"),
    ("run", "dash"),
    ("happy", "ecstatic"),
    ("sad", "melancholic"),
    ("angry", "furious"),
    ("scared", "terrified"),
    ("tired", "exhausted"),
    ("house", "dwelling"),
    ("car", "vehicle"),
    ("good", "spectacular"),
    ("bad", "dreadful"),
    ("nice", "delightful"),
    ("mean", "cruel"),
    ("old", "ancient"),
    ("new", "fresh"),
    ("look", "gaze"),
    ("beautiful", "stunning"),
];

const CONCISE_TABLE: &[(&str, &str)] = &[
    ("in order to", "to"),
    ("for the purpose of", "to"),
    ("due to the fact that", "because"),
    ("in spite of the fact that", "although"),
    ("in the event that", "if"),
    ("in my opinion", "I think"),
    ("as a matter of fact", "actually"),
    ("at this point in time", "now"),
    ("at the present time", "currently"),
    ("for the most part", "mostly"),
    ("in a manner of speaking", "somewhat"),
    ("in the final analysis", "finally"),
    ("until such time as", "until"),
    ("for all intents and purposes", "effectively"),
];

const BUSINESS_TABLE: &[(&str, &str)] = &[
    ("use", "leverage"),
    ("improve", "streamline"),
    ("help", "enable"),
    ("start", "initiate"),
    ("finish", "finalize"),
    ("goal", "objective"),
    ("idea", "proposal"),
    ("problem", "challenge"),
    ("result", "outcome"),
    ("plan", "strategy"),
    ("customer", "client"),
    ("meeting", "sync"),
    ("talk", "connect"),
    ("check", "review"),
    ("important", "mission-critical"),
    ("agree", "align"),
];

/// Contraction folding applied as a second pass for the conversational style.
const CONTRACTION_TABLE: &[(&str, &str)] = &[
    ("is not", "isn't"),
    ("are not", "aren't"),
    ("was not", "wasn't"),
    ("were not", "weren't"),
    ("do not", "don't"),
    ("does not", "doesn't"),
    ("did not", "didn't"),
    ("cannot", "can't"),
    ("can not", "can't"),
    ("will not", "won't"),
    ("would not", "wouldn't"),
    ("should not", "shouldn't"),
    ("could not", "couldn't"),
    ("have not", "haven't"),
    ("has not", "hasn't"),
    ("it is", "it's"),
    ("that is", "that's"),
    ("they are", "they're"),
    ("we are", "we're"),
    ("you are", "you're"),
    ("I am", "I'm"),
];

/// Nominalization folding applied after the wordy-phrase pass for concise.
const NOMINALIZATION_TABLE: &[(&str, &str)] = &[
    ("make a decision", "decide"),
    ("come to a conclusion", "conclude"),
    ("conduct an analysis", "analyze"),
    ("carry out an evaluation", "evaluate"),
    ("provide assistance", "assist"),
    ("give consideration to", "consider"),
    ("perform an assessment", "assess"),
    ("reach an agreement", "agree"),
];

/// Intensifier adverbs stripped (with their trailing whitespace) for concise.
const INTENSIFIERS: &[&str] = &[
    "very",
    "really",
    "quite",
    "extremely",
    "absolutely",
    "basically",
    "totally",
    "literally",
    "definitely",
    "certainly",
];

pub const FILLER_OPENERS: &[&str] = &["Well, ", "So, ", "Honestly, ", "You know, ", "Look, "];

pub const CREATIVE_CLAUSES: &[&str] = &[
    "shimmering with possibility",
    "like a scene from a half-remembered dream",
    "alive with color",
    "quiet as falling snow",
    "brimming with restless energy",
    "painted in broad strokes",
];

pub const BUSINESS_CLAUSES: &[&str] = &[
    "going forward",
    "at the end of the day",
    "from a strategic standpoint",
    "across all key verticals",
    "in line with our roadmap",
    "per the latest alignment",
];

fn compile_table(entries: &[(&str, &'static str)]) -> Vec<RewriteRule> {
    entries
        .iter()
        .map(|&(phrase, replacement)| RewriteRule {
            matcher: Regex::new(&format!(r"(?i)\b{}\b", regex::escape(phrase)))
                .expect("rewrite rule regex"),
            replacement,
        })
        .collect()
}

fn compile_strip_rules(words: &[&str]) -> Vec<RewriteRule> {
    words
        .iter()
        .map(|word| RewriteRule {
            matcher: Regex::new(&format!(r"(?i)\b{}\s+", regex::escape(word)))
                .expect("strip rule regex"),
            replacement: "",
        })
        .collect()
}

static ACADEMIC_RULES: OnceLock<Vec<RewriteRule>> = OnceLock::new();
static CONVERSATIONAL_RULES: OnceLock<Vec<RewriteRule>> = OnceLock::new();
static CREATIVE_RULES: OnceLock<Vec<RewriteRule>> = OnceLock::new();
static CONCISE_RULES: OnceLock<Vec<RewriteRule>> = OnceLock::new();
static BUSINESS_RULES: OnceLock<Vec<RewriteRule>> = OnceLock::new();
static CONTRACTION_RULES: OnceLock<Vec<RewriteRule>> = OnceLock::new();
static NOMINALIZATION_RULES: OnceLock<Vec<RewriteRule>> = OnceLock::new();
static INTENSIFIER_RULES: OnceLock<Vec<RewriteRule>> = OnceLock::new();

/// The primary substitution table for a style.
pub fn rules_for(style: VariationStyle) -> &'static [RewriteRule] {
    match style {
        VariationStyle::Academic => ACADEMIC_RULES.get_or_init(|| compile_table(ACADEMIC_TABLE)),
        VariationStyle::Conversational => {
            CONVERSATIONAL_RULES.get_or_init(|| compile_table(CONVERSATIONAL_TABLE))
        }
        VariationStyle::Creative => CREATIVE_RULES.get_or_init(|| compile_table(CREATIVE_TABLE)),
        VariationStyle::Concise => CONCISE_RULES.get_or_init(|| compile_table(CONCISE_TABLE)),
        VariationStyle::Business => BUSINESS_RULES.get_or_init(|| compile_table(BUSINESS_TABLE)),
    }
}

pub fn contraction_rules() -> &'static [RewriteRule] {
    CONTRACTION_RULES.get_or_init(|| compile_table(CONTRACTION_TABLE))
}

pub fn nominalization_rules() -> &'static [RewriteRule] {
    NOMINALIZATION_RULES.get_or_init(|| compile_table(NOMINALIZATION_TABLE))
}

pub fn intensifier_rules() -> &'static [RewriteRule] {
    INTENSIFIER_RULES.get_or_init(|| compile_strip_rules(INTENSIFIERS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_tables_compile() {
        for style in VariationStyle::ALL {
            assert!(!rules_for(style).is_empty());
        }
        assert!(!contraction_rules().is_empty());
        assert!(!nominalization_rules().is_empty());
        assert!(!intensifier_rules().is_empty());
    }

    #[test]
    fn test_rules_match_whole_words_only() {
        let rules = rules_for(VariationStyle::Academic);
        // "show" must not match inside "showcase"
        let show = rules.iter().find(|r| r.replacement == "demonstrate").unwrap();
        assert!(show.matcher.is_match("We show results"));
        assert!(show.matcher.is_match("We SHOW results"));
        assert!(!show.matcher.is_match("The showcase opened"));
    }

    #[test]
    fn test_academic_keeps_dead_look_at_entry_after_look() {
        let phrases: Vec<&str> = ACADEMIC_TABLE.iter().map(|(p, _)| *p).collect();
        let look = phrases.iter().position(|p| *p == "look").unwrap();
        let look_at = phrases.iter().position(|p| *p == "look at").unwrap();
        assert!(look < look_at);
    }
}
