//! The trailing-backslash line transform.

use mdpipe::LinePreprocessor;

/// Replacement inserted in place of a consumed trailing backslash.
pub const HARD_BREAK_MARKER: &str = "<br>";

/// Preprocessor that rewrites a trailing backslash into [`HARD_BREAK_MARKER`].
///
/// The check is a plain suffix match on the line's final character; exactly
/// one backslash is consumed and whatever precedes it stays untouched, so
/// `a\\` becomes `a\<br>`. No escape sequences are recognized, and a
/// backslash followed by trailing whitespace is not a break. Output has the
/// same number of lines as input, in the same order.
///
/// # Example
///
/// ```
/// use mdpipe::LinePreprocessor;
/// use mdpipe_hardbreak::HardBreakPreprocessor;
///
/// let pp = HardBreakPreprocessor::new();
/// let output = pp.run(vec![
///     "forced break\\".to_owned(),
///     "plain line".to_owned(),
/// ]);
/// assert_eq!(output, vec!["forced break<br>", "plain line"]);
/// ```
#[derive(Debug, Default)]
pub struct HardBreakPreprocessor;

impl HardBreakPreprocessor {
    /// Create a new preprocessor.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl LinePreprocessor for HardBreakPreprocessor {
    fn run(&self, lines: Vec<String>) -> Vec<String> {
        lines.into_iter().map(break_line).collect()
    }
}

/// Rewrite a single line, consuming at most one trailing backslash.
fn break_line(line: String) -> String {
    match line.strip_suffix('\\') {
        Some(prefix) => format!("{prefix}{HARD_BREAK_MARKER}"),
        None => line,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use pulldown_cmark::{Event, Parser};

    use super::*;

    fn lines(input: &[&str]) -> Vec<String> {
        input.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn test_trailing_backslash_becomes_marker() {
        let pp = HardBreakPreprocessor::new();
        assert_eq!(pp.run(lines(&["hello\\"])), lines(&["hello<br>"]));
    }

    #[test]
    fn test_plain_line_unchanged() {
        let pp = HardBreakPreprocessor::new();
        assert_eq!(pp.run(lines(&["hello"])), lines(&["hello"]));
    }

    #[test]
    fn test_double_backslash_loses_exactly_one() {
        // Plain suffix match: one backslash consumed, the rest preserved.
        let pp = HardBreakPreprocessor::new();
        assert_eq!(pp.run(lines(&["a\\\\"])), lines(&["a\\<br>"]));
        assert_eq!(pp.run(lines(&["b\\\\\\"])), lines(&["b\\\\<br>"]));
    }

    #[test]
    fn test_lone_backslash_becomes_marker() {
        let pp = HardBreakPreprocessor::new();
        assert_eq!(pp.run(lines(&["\\"])), lines(&["<br>"]));
    }

    #[test]
    fn test_backslash_then_whitespace_is_not_a_break() {
        let pp = HardBreakPreprocessor::new();
        assert_eq!(pp.run(lines(&["x\\ "])), lines(&["x\\ "]));
        assert_eq!(pp.run(lines(&["x\\\t"])), lines(&["x\\\t"]));
    }

    #[test]
    fn test_empty_line_unchanged() {
        let pp = HardBreakPreprocessor::new();
        assert_eq!(pp.run(lines(&[""])), lines(&[""]));
    }

    #[test]
    fn test_empty_input() {
        let pp = HardBreakPreprocessor::new();
        assert_eq!(pp.run(Vec::new()), Vec::<String>::new());
    }

    #[test]
    fn test_lines_are_independent() {
        let pp = HardBreakPreprocessor::new();
        assert_eq!(
            pp.run(lines(&["line1\\", "line2", "line3\\"])),
            lines(&["line1<br>", "line2", "line3<br>"])
        );
    }

    #[test]
    fn test_length_and_order_preserved() {
        let pp = HardBreakPreprocessor::new();
        let input = lines(&["a\\", "", "b", "\\", "c\\\\", "d "]);
        let output = pp.run(input.clone());

        assert_eq!(output.len(), input.len());
        assert_eq!(output, lines(&["a<br>", "", "b", "<br>", "c\\<br>", "d "]));
    }

    #[test]
    fn test_idempotent_on_transformed_output() {
        // The marker does not end in a backslash, so a second pass is a no-op.
        let pp = HardBreakPreprocessor::new();
        let input = lines(&["hello\\", "plain", "\\", "a\\\\"]);

        let once = pp.run(input);
        let twice = pp.run(once.clone());
        assert_eq!(twice, once);
    }

    #[test]
    fn test_marker_survives_commonmark_parse() {
        let pp = HardBreakPreprocessor::new();
        let output = pp.run(lines(&["roses are red\\", "violets are blue"]));
        let document = output.join("\n");

        let events: Vec<Event> = Parser::new(&document).collect();
        assert!(
            events
                .iter()
                .any(|e| matches!(e, Event::InlineHtml(html) if html.as_ref() == HARD_BREAK_MARKER)),
            "expected {HARD_BREAK_MARKER} to pass through as inline HTML, got {events:?}"
        );
    }
}
