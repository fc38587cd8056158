// Serializable run reporting for batch analysis
// Record shapes follow the per-file stats emitted by the CLI's JSON output

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::analyzer::{LongestPalindrome, MismatchReport, PalindromePhrase, PalindromeWord, TextAnalysis};

/// First mismatched character pair, in normalized character positions
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MismatchRecord {
    pub left_index: usize,
    pub right_index: usize,
    pub left_char: char,
    pub right_char: char,
}

impl From<&MismatchReport> for MismatchRecord {
    fn from(report: &MismatchReport) -> Self {
        Self {
            left_index: report.left_index,
            right_index: report.right_index,
            left_char: report.left_char,
            right_char: report.right_char,
        }
    }
}

/// Longest palindromic substring of the normalized form
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LongestRecord {
    pub substring: String,
    pub start: usize,
    pub length: usize,
}

impl From<&LongestPalindrome> for LongestRecord {
    fn from(longest: &LongestPalindrome) -> Self {
        Self {
            substring: longest.substring.clone(),
            start: longest.start,
            length: longest.len(),
        }
    }
}

/// Per-input analysis record
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AnalysisRecord {
    /// Raw input text as supplied
    pub input: String,
    /// Where the input came from: "arg" or an input file path
    pub source: String,
    pub palindrome: bool,
    pub normalized: String,
    /// Character length of the normalized form
    pub normalized_len: u64,
    pub mismatch: Option<MismatchRecord>,
    pub longest: LongestRecord,
    /// Palindrome word count, present when the word scan ran
    #[serde(skip_serializing_if = "Option::is_none")]
    pub palindrome_words: Option<u64>,
    /// Palindrome phrase count, present when the phrase scan ran
    #[serde(skip_serializing_if = "Option::is_none")]
    pub palindrome_phrases: Option<u64>,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
    /// Processing status (success, failed)
    pub status: String,
    /// Error message if the input could not be acquired
    pub error: Option<String>,
}

impl AnalysisRecord {
    /// Build a record from a completed analysis
    pub fn from_analysis(
        input: &str,
        source: &str,
        analysis: &TextAnalysis,
        words: Option<&[PalindromeWord]>,
        phrases: Option<&[PalindromePhrase]>,
        processing_time_ms: u64,
    ) -> Self {
        Self {
            input: input.to_string(),
            source: source.to_string(),
            palindrome: analysis.is_palindrome,
            normalized: analysis.normalized.clone(),
            normalized_len: analysis.normalized_len() as u64,
            mismatch: analysis.mismatch.as_ref().map(MismatchRecord::from),
            longest: LongestRecord::from(&analysis.longest),
            palindrome_words: words.map(|w| w.len() as u64),
            palindrome_phrases: phrases.map(|p| p.len() as u64),
            processing_time_ms,
            status: "success".to_string(),
            error: None,
        }
    }

    /// Build a record for an input source that could not be read
    pub fn failed(source: &str, error: &str) -> Self {
        Self {
            input: String::new(),
            source: source.to_string(),
            palindrome: false,
            normalized: String::new(),
            normalized_len: 0,
            mismatch: None,
            longest: LongestRecord {
                substring: String::new(),
                start: 0,
                length: 0,
            },
            palindrome_words: None,
            palindrome_phrases: None,
            processing_time_ms: 0,
            status: "failed".to_string(),
            error: Some(error.to_string()),
        }
    }
}

/// Aggregate statistics for one run
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RunStats {
    pub total_inputs: u64,
    pub palindromes: u64,
    pub non_palindromes: u64,
    pub failed: u64,
    /// Normalized characters processed across all successful inputs
    pub chars_processed: u64,
    pub total_time_ms: u64,
    pub records: Vec<AnalysisRecord>,
}

impl RunStats {
    pub fn from_records(records: Vec<AnalysisRecord>) -> Self {
        let mut palindromes = 0u64;
        let mut non_palindromes = 0u64;
        let mut failed = 0u64;
        let mut chars_processed = 0u64;
        let mut total_time_ms = 0u64;

        for record in &records {
            if record.status == "failed" {
                failed += 1;
            } else if record.palindrome {
                palindromes += 1;
            } else {
                non_palindromes += 1;
            }
            chars_processed += record.normalized_len;
            total_time_ms += record.processing_time_ms;
        }

        Self {
            total_inputs: records.len() as u64,
            palindromes,
            non_palindromes,
            failed,
            chars_processed,
            total_time_ms,
            records,
        }
    }
}

/// Write run statistics as pretty-printed JSON
pub async fn write_run_stats(stats_path: &Path, stats: &RunStats) -> Result<()> {
    let json = serde_json::to_vec_pretty(stats)?;
    tokio::fs::write(stats_path, json).await?;
    Ok(())
}
