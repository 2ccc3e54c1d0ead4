/// Separator placed between output items: exactly one blank line.
pub const SENTENCE_SEPARATOR: &str = "\n\n";

/// Join items with one blank line between consecutive items, no trailing
/// separator. Zero items yields an empty string.
pub fn join_with_blank_lines<S: AsRef<str>>(items: &[S]) -> String {
    let mut result = String::new();
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            result.push_str(SENTENCE_SEPARATOR);
        }
        result.push_str(item.as_ref());
    }
    result
}
