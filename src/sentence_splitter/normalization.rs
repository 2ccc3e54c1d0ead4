// WHY: quote normalization runs before partitioning so the scanner only ever
// sees ASCII delimiters; kept separate so it stays independently testable

/// Map typographic quotation marks to their ASCII equivalents:
/// U+201C/U+201D become `"`, U+2018/U+2019 become `'`.
/// All other characters pass through unchanged.
pub fn normalize_quotes(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    normalize_quotes_into(text, &mut result);
    result
}

/// Normalize into a supplied buffer to avoid allocation.
pub fn normalize_quotes_into(text: &str, buffer: &mut String) {
    buffer.clear();
    buffer.reserve(text.len());

    for ch in text.chars() {
        match ch {
            '\u{201C}' | '\u{201D}' => buffer.push('"'),
            '\u{2018}' | '\u{2019}' => buffer.push('\''),
            _ => buffer.push(ch),
        }
    }
}
