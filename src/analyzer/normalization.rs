// WHY: standalone normalization logic enabling zero-allocation batch processing
// Every other analysis operation is defined over this canonical form

/// Normalize text to its canonical comparable form: lower-cased, alphanumeric-only
///
/// Characters are kept if and only if they are alphanumeric per Unicode
/// classification, lower-cased on retention, relative order preserved.
/// Never fails; input with no alphanumeric characters yields an empty string.
pub fn normalize(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    normalize_into(text, &mut result);
    result
}

/// Normalize text into supplied buffer to avoid allocation
/// WHY: enables buffer reuse when analyzing many lines in a batch
pub fn normalize_into(text: &str, buffer: &mut String) {
    buffer.clear();
    buffer.reserve(text.len());

    for ch in text.chars() {
        if ch.is_alphanumeric() {
            // WHY: to_lowercase yields an iterator - some characters expand
            // to multiple code points (e.g. 'İ' -> "i\u{307}")
            for lowered in ch.to_lowercase() {
                buffer.push(lowered);
            }
        }
    }
}
