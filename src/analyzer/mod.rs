// Palindrome analysis interface: one normalization pass feeding the
// predicate, the mismatch locator, and the longest-substring finder

use anyhow::Result;

pub mod longest;
pub mod mismatch;
pub mod normalization;
pub mod words;

// Re-export core types
pub use longest::{longest_palindromic_substring, LongestPalindrome};
pub use mismatch::{find_first_mismatch, MismatchReport};
pub use normalization::{normalize, normalize_into};
pub use words::{PalindromePhrase, PalindromeWord};

/// Whether `text` reads identically forwards and backwards after
/// normalization
///
/// Empty and single-character normalized text are palindromes.
pub fn is_palindrome(text: &str) -> bool {
    let chars: Vec<char> = normalize(text).chars().collect();
    is_mirrored(&chars)
}

/// Two-pointer equality-with-own-reverse check over normalized characters
pub(crate) fn is_mirrored(chars: &[char]) -> bool {
    mismatch::first_mismatch_in(chars).is_none()
}

/// Configuration for word and phrase scanning
#[derive(Debug, Clone)]
pub struct AnalyzerRules {
    /// Minimum normalized length for a word to be reported
    pub min_word_len: usize,
    /// Smallest phrase window, in words
    pub phrase_min_words: usize,
    /// Largest phrase window, in words
    pub phrase_max_words: usize,
}

impl Default for AnalyzerRules {
    fn default() -> Self {
        Self {
            min_word_len: 1,
            phrase_min_words: 2,
            phrase_max_words: 5,
        }
    }
}

/// Full analysis of one input: verdict, canonical form, first mismatch for
/// non-palindromes, and the longest palindromic substring
///
/// `is_palindrome` holds exactly when `mismatch` is `None`; both are derived
/// from a single normalization pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextAnalysis {
    pub normalized: String,
    pub is_palindrome: bool,
    pub mismatch: Option<MismatchReport>,
    pub longest: LongestPalindrome,
}

impl TextAnalysis {
    /// Character length of the normalized form
    pub fn normalized_len(&self) -> usize {
        self.normalized.chars().count()
    }

    /// Normalized form read back-to-front, for mirror-structure display
    pub fn reversed(&self) -> String {
        self.normalized.chars().rev().collect()
    }
}

/// Main analyzer interface
pub struct PalindromeAnalyzer {
    rules: AnalyzerRules,
}

impl PalindromeAnalyzer {
    /// Create a new analyzer with custom rules
    pub fn new(rules: AnalyzerRules) -> Result<Self> {
        if rules.phrase_min_words == 0 {
            anyhow::bail!("phrase window must span at least one word");
        }
        if rules.phrase_max_words < rules.phrase_min_words {
            anyhow::bail!(
                "phrase window is inverted: {}..={}",
                rules.phrase_min_words,
                rules.phrase_max_words
            );
        }
        Ok(Self { rules })
    }

    /// Create an analyzer with default rules
    pub fn with_default_rules() -> Result<Self> {
        Self::new(AnalyzerRules::default())
    }

    /// Analyze one input with a single normalization pass
    pub fn analyze(&self, text: &str) -> TextAnalysis {
        let normalized = normalize(text);
        let chars: Vec<char> = normalized.chars().collect();
        let mismatch = mismatch::first_mismatch_in(&chars);
        let longest = longest::longest_in(&chars);

        TextAnalysis {
            is_palindrome: mismatch.is_none(),
            normalized,
            mismatch,
            longest,
        }
    }

    /// Scan for individual palindrome words, honoring `min_word_len`
    pub fn palindrome_words(&self, text: &str) -> Vec<PalindromeWord> {
        words::palindrome_words(text, self.rules.min_word_len)
    }

    /// Scan for multi-word palindrome phrases within the configured window
    pub fn palindrome_phrases(&self, text: &str) -> Vec<PalindromePhrase> {
        words::palindrome_phrases(
            text,
            self.rules.phrase_min_words,
            self.rules.phrase_max_words,
        )
    }
}
