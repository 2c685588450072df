// src/main.rs
mod extractors;
mod roster;
mod sampling;
mod storage;
mod utils;

use std::path::Path;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use extractors::member;
use extractors::MemberExtractor;
use roster::models::AgeBrackets;
use storage::{BracketSelection, SelectionReport, StorageManager};
use utils::AppError;

/// Command Line Interface for the roster sampler
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the roster PDF
    #[arg(short, long, default_value = "members.pdf")]
    input: String,

    /// Total number of members to select across all age groups
    #[arg(short, long, default_value_t = 80)]
    target: usize,

    /// Ascending age breakpoints separating the age groups
    #[arg(long, value_delimiter = ',', default_values_t = [32u32, 47, 67])]
    breakpoints: Vec<u32>,

    /// Seed for the selection RNG (system-sourced if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Directory for the JSON selection report (stdout only if omitted)
    #[arg(short, long)]
    output_dir: Option<String>,

    /// Debug mode - save extracted text and pattern match spans
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::info!("Starting roster sampling for args: {:?}", args);

    let brackets = AgeBrackets::new(args.breakpoints)?;

    let mut rng = match args.seed {
        Some(seed) => {
            tracing::debug!("Seeding selection RNG with {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    // 3. Read the document and recover the bracketed roster
    println!("Parsing members from PDF...");
    let text = roster::document::read_document_text(Path::new(&args.input))?;

    if args.debug {
        let debug_dir = Path::new(args.output_dir.as_deref().unwrap_or(".")).join("debug");
        utils::text_debug::dump_extraction_debug(&text, &debug_dir, member::layout_patterns())?;
    }

    let extractor = MemberExtractor::new();
    let buckets = extractor.extract(&text, &brackets)?.into_buckets();

    let total: usize = buckets.iter().map(Vec::len).sum();
    println!("Found {} members", total);
    println!(
        "Randomly selecting {} members evenly distributed among age groups",
        args.target
    );

    if total == 0 {
        tracing::warn!("No members matched any layout pattern; nothing to select");
    }

    // 4. Sample every bracket, the overflow bracket and empty ones included
    let mut selections = Vec::with_capacity(buckets.len());
    for (label, bucket) in brackets.labels().into_iter().zip(buckets) {
        let names: Vec<String> = bucket.into_iter().map(|m| m.name).collect();
        let selected = sampling::select_members(&mut rng, &label, &names, total, args.target);
        selections.push(BracketSelection {
            label,
            population: names.len(),
            selected,
        });
    }

    println!();
    println!("- Done -");

    // 5. Optionally persist the selection report
    if let Some(dir) = &args.output_dir {
        let report = SelectionReport {
            source: args.input.clone(),
            total_members: total,
            target: args.target,
            brackets: selections,
        };
        let storage = StorageManager::new(dir)?;
        storage.save_selection(&report)?;
    }

    Ok(())
}
