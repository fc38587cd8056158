use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

use mirrors::analyzer::{PalindromeAnalyzer, PalindromePhrase, PalindromeWord, TextAnalysis};
use mirrors::input::{CandidateReader, InputConfig};
use mirrors::report::{write_run_stats, AnalysisRecord, RunStats};

#[derive(Parser, Debug)]
#[command(name = "mirrors")]
#[command(about = "Palindrome analyzer for interactive text")]
#[command(version)]
struct Args {
    /// Text inputs to analyze, one record each
    texts: Vec<String>,

    /// Input file contributing one record per non-blank line (repeatable)
    #[arg(long)]
    input: Vec<PathBuf>,

    /// Emit one JSON record per input instead of readable blocks
    #[arg(long)]
    json: bool,

    /// Also report palindrome words in each input
    #[arg(long)]
    words: bool,

    /// Also report multi-word palindrome phrases in each input
    #[arg(long)]
    phrases: bool,

    /// Abort on first error
    #[arg(long)]
    fail_fast: bool,

    /// Write aggregate run statistics as JSON to this path
    #[arg(long)]
    stats_out: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // WHY: structured JSON logging on stderr keeps stdout machine-parseable
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .json()
        .init();

    let args = Args::parse();

    info!("Starting mirrors");
    info!(?args, "Parsed CLI arguments");

    // WHY: validate early to fail with a clear usage error
    if args.texts.is_empty() && args.input.is_empty() {
        anyhow::bail!("No inputs: supply TEXT arguments and/or --input files");
    }

    // Gather inputs: positional texts first, then file lines in order
    let mut inputs: Vec<(String, String)> = args
        .texts
        .iter()
        .map(|text| (text.clone(), "arg".to_string()))
        .collect();
    let mut records: Vec<AnalysisRecord> = Vec::new();

    if !args.input.is_empty() {
        let reader = CandidateReader::new(InputConfig {
            fail_fast: args.fail_fast,
            ..Default::default()
        });
        let read_results = reader.read_batch(&args.input).await?;

        for (candidates, stats) in read_results {
            if let Some(ref error) = stats.read_error {
                records.push(AnalysisRecord::failed(&stats.source, error));
            }
            for line in candidates {
                inputs.push((line, stats.source.clone()));
            }
        }
    }

    info!("Collected {} analysis inputs", inputs.len());

    let analyzer = PalindromeAnalyzer::with_default_rules()?;

    for (text, source) in &inputs {
        let started = Instant::now();
        let analysis = analyzer.analyze(text);
        let word_hits = args.words.then(|| analyzer.palindrome_words(text));
        let phrase_hits = args.phrases.then(|| analyzer.palindrome_phrases(text));
        let elapsed_ms = started.elapsed().as_millis() as u64;

        let record = AnalysisRecord::from_analysis(
            text,
            source,
            &analysis,
            word_hits.as_deref(),
            phrase_hits.as_deref(),
            elapsed_ms,
        );

        if args.json {
            println!("{}", serde_json::to_string(&record)?);
        } else {
            print_analysis(text, &analysis);
            if let Some(words) = &word_hits {
                print_word_hits(words);
            }
            if let Some(phrases) = &phrase_hits {
                print_phrase_hits(phrases);
            }
        }

        records.push(record);
    }

    let stats = RunStats::from_records(records);
    info!(
        "Analysis complete: {} palindromes, {} non-palindromes, {} failed",
        stats.palindromes, stats.non_palindromes, stats.failed
    );

    if !args.json {
        println!();
        println!(
            "Analyzed {} inputs: {} palindromes, {} non-palindromes",
            stats.total_inputs - stats.failed,
            stats.palindromes,
            stats.non_palindromes
        );
        if stats.failed > 0 {
            println!("Failed input sources: {}", stats.failed);
        }
    }

    if let Some(stats_path) = &args.stats_out {
        write_run_stats(stats_path, &stats).await?;
        info!("Wrote run statistics to {}", stats_path.display());
    }

    Ok(())
}

fn print_analysis(text: &str, analysis: &TextAnalysis) {
    if analysis.is_palindrome {
        println!("'{text}' is a palindrome");
        if !analysis.normalized.is_empty() {
            println!("  normalized: {}", analysis.normalized);
            println!("  reversed:   {}", analysis.reversed());
        }
    } else {
        println!("'{text}' is not a palindrome");
        if let Some(mismatch) = &analysis.mismatch {
            println!(
                "  first mismatch: '{}' != '{}' at ({}, {})",
                mismatch.left_char, mismatch.right_char, mismatch.left_index, mismatch.right_index
            );
        }
        println!(
            "  longest palindrome: '{}' at {} (length {})",
            analysis.longest.substring,
            analysis.longest.start,
            analysis.longest.len()
        );
    }
}

fn print_word_hits(words: &[PalindromeWord]) {
    println!("  palindrome words: {}", words.len());
    for word in words {
        println!("    '{}' -> '{}'", word.original, word.normalized);
    }
}

fn print_phrase_hits(phrases: &[PalindromePhrase]) {
    println!("  palindrome phrases: {}", phrases.len());
    for phrase in phrases {
        println!(
            "    '{}' -> '{}' ({} words)",
            phrase.phrase, phrase.normalized, phrase.word_count
        );
    }
}
