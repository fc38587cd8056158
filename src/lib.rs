pub mod analyzer;
pub mod input;
pub mod report;

// Re-export main types for convenient access
pub use analyzer::{
    find_first_mismatch, is_palindrome, longest_palindromic_substring, normalize, normalize_into,
    AnalyzerRules, LongestPalindrome, MismatchReport, PalindromeAnalyzer, PalindromePhrase,
    PalindromeWord, TextAnalysis,
};

// Re-export input reading utilities
pub use input::{CandidateReader, InputConfig, InputStats};

// Re-export run reporting types and functions
pub use report::{write_run_stats, AnalysisRecord, LongestRecord, MismatchRecord, RunStats};
