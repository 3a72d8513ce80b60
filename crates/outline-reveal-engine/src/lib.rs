//! # outline-reveal-engine
//!
//! Incremental reveal of outline slides. A slide is parsed into a
//! [`Document`], the [scanner](scan) picks the headings, top-level list items
//! and `# pause` markers that act as boundaries, the [segmenter](segment)
//! turns them into disjoint byte ranges, and a [`RevealCursor`] hides those
//! ranges and shows them again one step at a time.
//!
//! Drawing is left to a [`RevealHost`]; [`DisplayState`] is a ready-made
//! in-memory host.
//!
//! ```
//! use outline_reveal_engine::{DisplayState, Document, RevealCursor, RevealOptions};
//!
//! let doc = Document::parse("# pause\nHello\n# pause\nWorld");
//! let mut display = DisplayState::new(&doc);
//! let mut cursor = RevealCursor::new(RevealOptions::default());
//!
//! cursor.init(&doc, &mut display);
//! assert_eq!(cursor.len(), 2);
//!
//! cursor.jump_to_end(&mut display);
//! assert!(!cursor.has_more());
//! ```

pub mod cursor;
pub mod display;
pub mod document;
pub mod fold;
pub mod host;
pub mod options;
pub mod rope;
pub mod scan;
pub mod segment;

#[cfg(test)]
pub mod tests;

pub use cursor::{CursorState, RevealCursor};
pub use display::{DisplayState, Visibility};
pub use document::{Document, Node, NodeKind, Section};
pub use fold::FoldController;
pub use host::{FoldHost, OverlayHost, OverlayId, RevealHost};
pub use options::{Color, ColorError, RevealOptions};
pub use rope::Span;
pub use scan::{ScanEntry, ScanKind, scan};
pub use segment::{Segment, segment};
