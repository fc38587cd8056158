// Palindrome word and phrase scanning over whitespace-tokenized raw text
// Offsets index the raw input so callers can slice the original back out

use super::is_mirrored;
use super::normalization::normalize;

/// A single word whose normalized form is palindromic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PalindromeWord {
    /// Word as it appeared in the raw text
    pub original: String,
    /// Lower-cased alphanumeric form that passed the palindrome test
    pub normalized: String,
    /// Byte offset of the word in the raw text
    pub offset: usize,
}

/// A run of consecutive words whose concatenated normalized form is palindromic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PalindromePhrase {
    /// Raw text slice covering the window, original spacing preserved
    pub phrase: String,
    pub normalized: String,
    /// Index of the window's first word in the whitespace tokenization
    pub start_word: usize,
    pub word_count: usize,
}

/// Tokenize on Unicode whitespace, keeping each word's byte offset
pub(crate) fn words_with_offsets(text: &str) -> Vec<(usize, &str)> {
    let mut words = Vec::new();
    let mut start = None;

    for (idx, ch) in text.char_indices() {
        if ch.is_whitespace() {
            if let Some(s) = start.take() {
                words.push((s, &text[s..idx]));
            }
        } else if start.is_none() {
            start = Some(idx);
        }
    }
    if let Some(s) = start {
        words.push((s, &text[s..]));
    }
    words
}

/// Report every word whose normalized form is a palindrome of at least
/// `min_len` characters
pub(crate) fn palindrome_words(text: &str, min_len: usize) -> Vec<PalindromeWord> {
    let mut found = Vec::new();

    for (offset, word) in words_with_offsets(text) {
        let normalized = normalize(word);
        let chars: Vec<char> = normalized.chars().collect();
        if chars.is_empty() || chars.len() < min_len {
            continue;
        }
        if is_mirrored(&chars) {
            found.push(PalindromeWord {
                original: word.to_string(),
                normalized,
                offset,
            });
        }
    }
    found
}

/// Report every window of `min_words..=max_words` consecutive words whose
/// concatenated normalized form is a non-empty palindrome
///
/// Windows are enumerated shortest-first, then by start position, so the
/// report groups shorter phrases ahead of longer ones.
pub(crate) fn palindrome_phrases(
    text: &str,
    min_words: usize,
    max_words: usize,
) -> Vec<PalindromePhrase> {
    let words = words_with_offsets(text);
    let mut normalized_words = Vec::with_capacity(words.len());
    for (_, word) in &words {
        normalized_words.push(normalize(word));
    }

    let mut found = Vec::new();
    for window in min_words..=max_words {
        if window > words.len() {
            break;
        }
        for i in 0..=(words.len() - window) {
            let normalized: String = normalized_words[i..i + window].concat();
            let chars: Vec<char> = normalized.chars().collect();
            if chars.is_empty() || !is_mirrored(&chars) {
                continue;
            }

            // slice the raw text so interior spacing survives
            let (phrase_start, _) = words[i];
            let (last_start, last_word) = words[i + window - 1];
            let phrase = text[phrase_start..last_start + last_word.len()].to_string();

            found.push(PalindromePhrase {
                phrase,
                normalized,
                start_word: i,
                word_count: window,
            });
        }
    }
    found
}
