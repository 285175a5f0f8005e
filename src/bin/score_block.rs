//! Score an exported block of analytics payloads
//!
//! Reads a JSON array of payloads, scores every user in parallel, and writes
//! a per-user CSV plus a score-band distribution to the console.

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::Instant;

use rayon::prelude::*;

use wealthtracker_engine::metrics::load_payload_block;
use wealthtracker_engine::scoring::ScoreLabel;
use wealthtracker_engine::{score, FreedomScoreInput, FreedomScoreResult};

fn main() {
    env_logger::init();

    let input_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "payload_block.json".to_string());

    let start = Instant::now();
    println!("Loading payloads from {}...", input_path);

    let payloads = load_payload_block(Path::new(&input_path)).expect("Failed to load payloads");
    println!("Loaded {} payloads in {:?}", payloads.len(), start.elapsed());

    println!("Scoring...");
    let score_start = Instant::now();

    let results: Vec<FreedomScoreResult> = payloads
        .par_iter()
        .map(|payload| score(&FreedomScoreInput::from(payload)))
        .collect();

    println!("Scoring complete in {:?}", score_start.elapsed());

    // Write per-user output
    let output_path = "score_block_output.csv";
    let mut file = File::create(output_path).expect("Failed to create output file");

    writeln!(
        file,
        "Index,Score,Label,NetWorth,EmergencyFund,SavingsRate,DebtManagement,Diversification,Suggestions"
    )
    .unwrap();

    for (i, result) in results.iter().enumerate() {
        writeln!(
            file,
            "{},{},{},{:.2},{:.2},{:.2},{:.2},{:.2},{}",
            i,
            result.score,
            result.label.as_str(),
            result.components.net_worth,
            result.components.emergency_fund,
            result.components.savings_rate,
            result.components.debt_management,
            result.components.diversification,
            result.suggestions.len(),
        )
        .unwrap();
    }

    println!("Output written to {}", output_path);

    // Score-band distribution
    let bands = [
        ScoreLabel::Excellent,
        ScoreLabel::Good,
        ScoreLabel::Fair,
        ScoreLabel::NeedsWork,
    ];
    println!("\nBlock Summary:");
    for band in bands {
        let count = results.iter().filter(|r| r.label == band).count();
        println!("  {:>10}: {}", band.as_str(), count);
    }

    if !results.is_empty() {
        let mean = results.iter().map(|r| r.score as f64).sum::<f64>() / results.len() as f64;
        println!("  Mean score: {:.1}", mean);
    }

    println!("\nTotal time: {:?}", start.elapsed());
}
