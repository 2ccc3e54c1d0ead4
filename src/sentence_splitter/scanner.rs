// WHY: explicit code-point scan instead of regex patterns so the nearest-match
// and unterminated-quote policies are auditable and testable on their own

use tracing::debug;

/// A maximal quoted or unquoted span of normalized text.
///
/// Segments partition the input contiguously and exhaustively:
/// reassembling them in order (delimiters included for quoted segments)
/// reconstructs the input exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text outside any quoted span. May contain quote characters that never
    /// found a matching closer.
    Unquoted(&'a str),
    /// Interior of a quoted span, delimiters stripped. `quote` is the
    /// delimiter character (`"` or `'`) on both ends.
    Quoted { quote: char, inner: &'a str },
}

impl Segment<'_> {
    /// Source text of this segment, delimiters included.
    pub fn reconstruct(&self) -> String {
        match self {
            Segment::Unquoted(span) => (*span).to_string(),
            Segment::Quoted { quote, inner } => format!("{quote}{inner}{quote}"),
        }
    }
}

fn is_quote_delimiter(ch: char) -> bool {
    ch == '"' || ch == '\''
}

/// Partition normalized text into alternating unquoted and quoted segments.
///
/// A quoted span opens at a `"` or `'` outside any span and closes at the
/// nearest following occurrence of the same character. An opener with no
/// matching closer before end-of-input is not a span at all: the character
/// stays in the surrounding unquoted segment and scanning continues, rather
/// than the span swallowing the rest of the text.
pub fn partition_quotes(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut segment_start = 0;
    let mut resume_at = 0;

    for (i, ch) in text.char_indices() {
        if i < resume_at || !is_quote_delimiter(ch) {
            continue;
        }

        let interior_start = i + ch.len_utf8();
        let Some(offset) = text[interior_start..].find(ch) else {
            // Unterminated opener: degrade to ordinary text
            continue;
        };
        let close = interior_start + offset;

        if i > segment_start {
            segments.push(Segment::Unquoted(&text[segment_start..i]));
        }
        segments.push(Segment::Quoted {
            quote: ch,
            inner: &text[interior_start..close],
        });

        resume_at = close + ch.len_utf8();
        segment_start = resume_at;
    }

    if segment_start < text.len() {
        segments.push(Segment::Unquoted(&text[segment_start..]));
    }

    debug!(
        segments = segments.len(),
        bytes = text.len(),
        "partitioned text into quote segments"
    );
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_no_quotes() {
        let segments = partition_quotes("plain text only.");
        assert_eq!(segments, vec![Segment::Unquoted("plain text only.")]);
    }

    #[test]
    fn test_partition_quoted_middle() {
        let segments = partition_quotes("He said \"Stop. Go now!\" then left.");
        assert_eq!(
            segments,
            vec![
                Segment::Unquoted("He said "),
                Segment::Quoted { quote: '"', inner: "Stop. Go now!" },
                Segment::Unquoted(" then left."),
            ]
        );
    }

    #[test]
    fn test_partition_single_quote_span() {
        let segments = partition_quotes("a 'b c' d");
        assert_eq!(
            segments,
            vec![
                Segment::Unquoted("a "),
                Segment::Quoted { quote: '\'', inner: "b c" },
                Segment::Unquoted(" d"),
            ]
        );
    }

    #[test]
    fn test_partition_closes_at_nearest_match() {
        // Non-greedy: the first closer wins, the second pair forms its own span
        let segments = partition_quotes("\"a\" b \"c\"");
        assert_eq!(
            segments,
            vec![
                Segment::Quoted { quote: '"', inner: "a" },
                Segment::Unquoted(" b "),
                Segment::Quoted { quote: '"', inner: "c" },
            ]
        );
    }

    #[test]
    fn test_partition_unterminated_quote_degrades() {
        let segments = partition_quotes("\"Unterminated quote starts here.");
        assert_eq!(
            segments,
            vec![Segment::Unquoted("\"Unterminated quote starts here.")]
        );
    }

    #[test]
    fn test_partition_unterminated_after_closed_pair() {
        let segments = partition_quotes("\"done\" and \"dangling");
        assert_eq!(
            segments,
            vec![
                Segment::Quoted { quote: '"', inner: "done" },
                Segment::Unquoted(" and \"dangling"),
            ]
        );
    }

    #[test]
    fn test_partition_other_quote_kind_inside_span() {
        // A double-quoted span may contain an unpaired single quote and vice versa
        let segments = partition_quotes("say \"it's fine\" now");
        assert_eq!(
            segments,
            vec![
                Segment::Unquoted("say "),
                Segment::Quoted { quote: '"', inner: "it's fine" },
                Segment::Unquoted(" now"),
            ]
        );
    }

    #[test]
    fn test_partition_empty_quoted_span() {
        let segments = partition_quotes("an \"\" empty pair");
        assert_eq!(
            segments,
            vec![
                Segment::Unquoted("an "),
                Segment::Quoted { quote: '"', inner: "" },
                Segment::Unquoted(" empty pair"),
            ]
        );
    }

    #[test]
    fn test_partition_empty_input() {
        assert!(partition_quotes("").is_empty());
    }

    #[test]
    fn test_partition_reconstructs_input() {
        let inputs = [
            "He said \"Stop. Go now!\" then left.",
            "\"leading\" and trailing \"quotes\"",
            "unmatched \" here",
            "mixed 'single \"double\" inside' text",
            "no quotes at all",
        ];
        for input in inputs {
            let rebuilt: String = partition_quotes(input)
                .iter()
                .map(Segment::reconstruct)
                .collect();
            assert_eq!(rebuilt, input, "segments must partition exhaustively");
        }
    }
}
