// Two-pointer mismatch location over the normalized character sequence

use super::normalization::normalize;

/// First position pair, scanning from both ends inward, where the normalized
/// text disagrees with itself
///
/// Indices are 0-based character positions into the normalized sequence,
/// not byte offsets into the raw input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MismatchReport {
    pub left_index: usize,
    pub right_index: usize,
    pub left_char: char,
    pub right_char: char,
}

/// Locate the first mismatched character pair in the normalized form of `text`
///
/// Returns `None` when the text is a palindrome, including the empty and
/// single-character cases.
pub fn find_first_mismatch(text: &str) -> Option<MismatchReport> {
    let chars: Vec<char> = normalize(text).chars().collect();
    first_mismatch_in(&chars)
}

/// Two-pointer scan over an already-normalized character sequence
/// WHY: cursors stop once they cross or meet - the unchecked half is the
/// mirror image of the half already checked
pub(crate) fn first_mismatch_in(chars: &[char]) -> Option<MismatchReport> {
    if chars.is_empty() {
        return None;
    }

    let mut i = 0;
    let mut j = chars.len() - 1;
    while i < j {
        if chars[i] != chars[j] {
            return Some(MismatchReport {
                left_index: i,
                right_index: j,
                left_char: chars[i],
                right_char: chars[j],
            });
        }
        i += 1;
        j -= 1;
    }
    None
}
