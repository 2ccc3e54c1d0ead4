// WHY: standalone merge logic so the paragraph transform is testable without the CLI
// Dual API (allocating + into-buffer) matches the splitter-side normalization helpers

/// Collapse multi-line input into a single-line paragraph.
///
/// Lines are trimmed, blank lines dropped, survivors joined with one space,
/// and any interior whitespace run collapsed to a single space. All-blank
/// input yields an empty string. Idempotent: merging already-merged text is
/// a no-op.
pub fn merge_lines_to_paragraph(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    merge_lines_to_paragraph_into(text, &mut result);
    result
}

/// Merge into a supplied buffer to avoid allocation in batch scenarios.
pub fn merge_lines_to_paragraph_into(text: &str, buffer: &mut String) {
    buffer.clear();
    buffer.reserve(text.len());

    // Trimming every line and joining with single spaces is equivalent to one
    // pass that collapses whitespace runs (newlines included) and trims ends.
    let mut prev_was_space = false;
    for ch in text.chars() {
        if ch.is_whitespace() {
            // No leading space, and at most one space per run
            if !buffer.is_empty() && !prev_was_space {
                buffer.push(' ');
                prev_was_space = true;
            }
        } else {
            buffer.push(ch);
            prev_was_space = false;
        }
    }

    if buffer.ends_with(' ') {
        buffer.pop();
    }
}
