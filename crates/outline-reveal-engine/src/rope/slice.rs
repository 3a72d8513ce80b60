use xi_rope::Rope;

use super::span::Span;

/// Extracts the text for a span from the rope as an owned String.
///
/// This allocates; prefer working with spans where possible. Inverted or
/// out-of-range spans are clamped to the rope.
pub fn slice_to_string(rope: &Rope, sp: Span) -> String {
    let end = sp.end.min(rope.len());
    let start = sp.start.min(end);
    rope.slice_to_cow(start..end).into_owned()
}

/// Extracts text for a span, truncating to `max` bytes with "..." suffix if needed.
///
/// Used for log output.
pub fn preview(rope: &Rope, sp: Span, max: usize) -> String {
    let mut s = slice_to_string(rope, sp);
    if s.len() > max {
        let mut cut = max;
        while !s.is_char_boundary(cut) {
            cut -= 1;
        }
        s.truncate(cut);
        s.push_str("...");
    }
    s
}

/// True when the span holds nothing but whitespace (or nothing at all).
pub fn is_blank(rope: &Rope, sp: Span) -> bool {
    sp.is_empty() || slice_to_string(rope, sp).trim().is_empty()
}

/// Number of characters (not bytes) covered by the span.
pub fn char_count(rope: &Rope, sp: Span) -> usize {
    slice_to_string(rope, sp).chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_short_text_unchanged() {
        let rope = Rope::from("hello");
        assert_eq!(preview(&rope, Span::new(0, 5), 10), "hello");
    }

    #[test]
    fn preview_truncates_long_text() {
        let rope = Rope::from("hello world");
        assert_eq!(preview(&rope, Span::new(0, 11), 5), "hello...");
    }

    #[test]
    fn preview_respects_char_boundaries() {
        let rope = Rope::from("héllo");
        // 'é' is two bytes starting at offset 1
        assert_eq!(preview(&rope, Span::new(0, 6), 2), "h...");
    }

    #[test]
    fn slice_to_string_partial_span() {
        let rope = Rope::from("hello world");
        assert_eq!(slice_to_string(&rope, Span::new(6, 11)), "world");
    }

    #[test]
    fn slice_clamps_out_of_range_spans() {
        let rope = Rope::from("abc");
        assert_eq!(slice_to_string(&rope, Span::new(1, 99)), "bc");
        assert_eq!(slice_to_string(&rope, Span::new(2, 1)), "");
    }

    #[test]
    fn blank_detection() {
        let rope = Rope::from("a \n\t\n b");
        assert!(is_blank(&rope, Span::new(1, 5)));
        assert!(!is_blank(&rope, Span::new(1, 7)));
        assert!(is_blank(&rope, Span::new(3, 3)));
        assert!(is_blank(&rope, Span::new(4, 2)));
    }

    #[test]
    fn char_count_counts_chars() {
        let rope = Rope::from("héllo");
        assert_eq!(char_count(&rope, Span::new(0, 6)), 5);
    }
}
