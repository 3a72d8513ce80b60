pub mod lines;
pub mod slice;
pub mod span;

pub use lines::{LineRef, line_end, lines_with_spans};
pub use slice::{char_count, is_blank, preview, slice_to_string};
pub use span::Span;
