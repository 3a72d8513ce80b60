use xi_rope::Rope;

use super::span::Span;

/// A reference to a single line in the rope with its byte span.
#[derive(Debug, Clone)]
pub struct LineRef {
    /// Byte span of this line in the rope (includes newline if present).
    pub span: Span,
    /// The line text, newline included.
    pub text: String,
}

/// Returns an iterator over lines with their byte spans.
///
/// Uses `lines_raw` to preserve newline characters, so consecutive spans
/// tile the whole rope without gaps.
pub fn lines_with_spans(rope: &Rope) -> impl Iterator<Item = LineRef> + '_ {
    let mut offset = 0usize;
    rope.lines_raw(..).map(move |line| {
        let start = offset;
        offset += line.len();
        LineRef {
            span: Span { start, end: offset },
            text: line.into_owned(),
        }
    })
}

/// End offset of the line containing `offset`, newline included.
pub fn line_end(rope: &Rope, offset: usize) -> usize {
    lines_with_spans(rope)
        .find(|line| line.span.contains(offset))
        .map(|line| line.span.end)
        .unwrap_or(rope.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn spans_tile_the_rope() {
        let rope = Rope::from("a\nbc\n\nd");
        let spans: Vec<_> = lines_with_spans(&rope).map(|l| l.span).collect();
        assert_eq!(
            spans,
            vec![
                Span::new(0, 2),
                Span::new(2, 5),
                Span::new(5, 6),
                Span::new(6, 7)
            ]
        );
    }

    #[test]
    fn line_end_includes_newline() {
        let rope = Rope::from("- a\n  - b\n");
        assert_eq!(line_end(&rope, 0), 4);
        assert_eq!(line_end(&rope, 6), 10);
        assert_eq!(line_end(&rope, 99), 10);
    }
}
