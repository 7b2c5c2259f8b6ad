use std::io::Read;

use anyhow::{bail, Context};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::warn;

use write_right_lib::models::{DetectionResult, Variation, VariationStyle};
use write_right_lib::services::config_store::ConfigStore;
use write_right_lib::services::detection::{ContentStats, RiskLevel};
use write_right_lib::services::session::AnalyzerSession;

fn preview(s: &str, max_chars: usize) -> String {
    let mut out: String = s.chars().take(max_chars).collect();
    if s.chars().count() > max_chars {
        out.push_str("...");
    }
    out.replace('\n', " ")
}

fn parse_arg_value(args: &[String], key: &str) -> Option<String> {
    args.iter()
        .position(|a| a == key)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn has_flag(args: &[String], key: &str) -> bool {
    args.iter().any(|a| a == key)
}

fn parse_style(val: &str) -> anyhow::Result<VariationStyle> {
    match VariationStyle::parse(val) {
        Some(style) => Ok(style),
        None => bail!(
            "unknown style '{}' (expected one of: academic, conversational, creative, concise, business)",
            val
        ),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    write_right_lib::init_logging();

    let args: Vec<String> = std::env::args().collect();
    if has_flag(&args, "--help") || has_flag(&args, "-h") {
        eprintln!(
            "Usage:\n  writeRight [--file <path>] [--seed <u64>] [--delay-ms <n>] [--style <name>] [--refresh <name>] [--out <json_path>]\n\nNotes:\n  - Reads stdin when no --file is given.\n  - `--style` limits generation to a single style; default is all five.\n  - `--refresh` re-rolls that style once after the analysis completes."
        );
        return Ok(());
    }

    let text = match parse_arg_value(&args, "--file") {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("read file failed: {}", path))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("read stdin failed")?;
            buf
        }
    };
    let text = text.trim_end().to_string();

    let mut config = match ConfigStore::default_config_dir() {
        Some(dir) => {
            let store = ConfigStore::new(dir);
            match store.load() {
                Ok(app) => {
                    // First run: persist the defaults so there is a file to edit
                    if !store.exists() {
                        if let Err(e) = store.save(&app) {
                            warn!(error = %e, "config.init_failed");
                        }
                    }
                    app.analysis
                }
                Err(e) => {
                    warn!(error = %e, "config.load_failed_using_defaults");
                    Default::default()
                }
            }
        }
        None => Default::default(),
    };

    if let Some(delay) = parse_arg_value(&args, "--delay-ms") {
        config.delay_ms = delay
            .parse()
            .with_context(|| format!("invalid --delay-ms value: {}", delay))?;
    }
    if let Some(style) = parse_arg_value(&args, "--style") {
        config.styles = vec![parse_style(&style)?];
    }
    let refresh_style = match parse_arg_value(&args, "--refresh") {
        Some(val) => Some(parse_style(&val)?),
        None => None,
    };
    let out_path = parse_arg_value(&args, "--out");

    let mut session = match parse_arg_value(&args, "--seed") {
        Some(seed) => {
            let seed: u64 = seed
                .parse()
                .with_context(|| format!("invalid --seed value: {}", seed))?;
            AnalyzerSession::with_rng(config, StdRng::seed_from_u64(seed))
        }
        None => AnalyzerSession::new(config),
    };

    session.set_input(text);
    session.analyze().await?;

    if let Some(style) = refresh_style {
        session.refresh(style);
    }

    let state = session.state();
    let stats = ContentStats::of(&state.input_text);

    println!(
        "Request: {}",
        state.request_id.as_deref().unwrap_or("(none)")
    );
    if let Some(detection) = &state.detection {
        let risk = RiskLevel::from_score(detection.score);
        println!("Plagiarism score: {}% [{}]", detection.score, risk.label());
        println!("  {}", risk.description());
        println!(
            "AI source: {} ({}% AI / {}% human)",
            detection.ai_source, detection.ai_generated, detection.human_written
        );
    }
    println!(
        "Content: {} chars, {} words, ~{} min read",
        stats.char_count, stats.word_count, stats.reading_time_minutes
    );
    println!();

    println!("Variations: {}", state.variations.len());
    for variation in &state.variations {
        println!(
            "[{:<14}] readability={} similarity={}  {}",
            variation.label,
            variation.readability_score,
            variation.similarity_score,
            preview(&variation.text, 120)
        );
    }

    if let Some(out_path) = out_path {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Output {
            request_id: Option<String>,
            detection: Option<DetectionResult>,
            risk: Option<String>,
            stats: ContentStats,
            variations: Vec<Variation>,
        }

        let out = Output {
            request_id: state.request_id.clone(),
            detection: state.detection.clone(),
            risk: state
                .detection
                .as_ref()
                .map(|d| RiskLevel::from_score(d.score).label().to_string()),
            stats,
            variations: state.variations.clone(),
        };

        let json = serde_json::to_string_pretty(&out)?;
        std::fs::write(&out_path, json)
            .with_context(|| format!("write out failed: {}", out_path))?;
        println!();
        println!("Wrote JSON: {}", out_path);
    }

    Ok(())
}
