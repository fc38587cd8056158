// Property-level tests tying the four analysis operations together

use mirrors::{
    find_first_mismatch, is_palindrome, longest_palindromic_substring, normalize,
};

const SAMPLE_INPUTS: &[&str] = &[
    "",
    "x",
    "racecar",
    "hello",
    "babad",
    "cbbd",
    "A man, a plan, a canal: Panama",
    "Was it a car or a cat I saw?",
    "No 'X' in Nixon",
    "Room 101",
    "Été: Été",
    "?!., --",
    "abcdefg",
];

#[test]
fn test_normalization_is_idempotent() {
    for input in SAMPLE_INPUTS {
        let once = normalize(input);
        assert_eq!(normalize(&once), once, "not a fixed point for {input:?}");
    }
}

#[test]
fn test_predicate_matches_reverse_equality() {
    for input in SAMPLE_INPUTS {
        let normalized = normalize(input);
        let reversed: String = normalized.chars().rev().collect();
        assert_eq!(
            is_palindrome(input),
            normalized == reversed,
            "predicate disagrees with reverse equality for {input:?}"
        );
    }
}

#[test]
fn test_mismatch_absent_iff_palindrome() {
    for input in SAMPLE_INPUTS {
        assert_eq!(
            find_first_mismatch(input).is_none(),
            is_palindrome(input),
            "mismatch/predicate disagreement for {input:?}"
        );
    }
}

#[test]
fn test_mismatch_indices_point_at_differing_chars() {
    for input in SAMPLE_INPUTS {
        if let Some(report) = find_first_mismatch(input) {
            let chars: Vec<char> = normalize(input).chars().collect();
            assert!(report.left_index < report.right_index);
            assert_eq!(chars[report.left_index], report.left_char);
            assert_eq!(chars[report.right_index], report.right_char);
            assert_ne!(report.left_char, report.right_char);
            // cursors advance in lock-step from both ends
            assert_eq!(report.right_index, chars.len() - 1 - report.left_index);
            // everything outside the reported pair agreed
            for k in 0..report.left_index {
                assert_eq!(chars[k], chars[chars.len() - 1 - k]);
            }
        }
    }
}

#[test]
fn test_longest_result_is_a_palindrome() {
    for input in SAMPLE_INPUTS {
        let result = longest_palindromic_substring(input);
        assert!(
            is_palindrome(&result.substring),
            "longest result {:?} for {input:?} is not a palindrome",
            result.substring
        );
    }
}

#[test]
fn test_longest_result_is_maximal_and_leftmost() {
    for input in SAMPLE_INPUTS {
        let result = longest_palindromic_substring(input);
        let chars: Vec<char> = normalize(input).chars().collect();
        let best_len = result.substring.chars().count();

        for i in 0..chars.len() {
            for j in i..chars.len() {
                let candidate: String = chars[i..=j].iter().collect();
                let len = j - i + 1;
                if len > best_len {
                    assert!(
                        !is_palindrome(&candidate),
                        "missed longer palindrome {candidate:?} in {input:?}"
                    );
                } else if len == best_len && is_palindrome(&candidate) {
                    assert!(
                        result.start <= i,
                        "tie not broken leftmost for {input:?}: reported {} found {}",
                        result.start,
                        i
                    );
                }
            }
        }
    }
}

#[test]
fn test_empty_input_contract() {
    assert_eq!(normalize(""), "");
    assert!(is_palindrome(""));
    assert!(find_first_mismatch("").is_none());

    let result = longest_palindromic_substring("");
    assert_eq!(result.substring, "");
    assert_eq!(result.start, 0);
}

#[test]
fn test_concrete_scenarios() {
    assert!(is_palindrome("A man, a plan, a canal: Panama"));
    assert!(is_palindrome("Was it a car or a cat I saw?"));

    assert!(!is_palindrome("hello"));
    let report = find_first_mismatch("hello").unwrap();
    assert_eq!(
        (report.left_index, report.right_index, report.left_char, report.right_char),
        (0, 4, 'h', 'o')
    );

    let result = longest_palindromic_substring("racecar");
    assert_eq!((result.substring.as_str(), result.start), ("racecar", 0));

    let result = longest_palindromic_substring("babad");
    assert_eq!((result.substring.as_str(), result.start), ("bab", 0));
}

#[test]
fn test_single_char_fallback() {
    let result = longest_palindromic_substring("xyz!");
    assert_eq!(result.substring, "x");
    assert_eq!(result.start, 0);
}
