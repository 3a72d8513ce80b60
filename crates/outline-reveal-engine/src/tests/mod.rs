//! Shared helpers for unit tests.

use crate::display::{DisplayState, Visibility};
use crate::document::Document;
use crate::options::RevealOptions;

/// Options that put any non-empty slide into large-text mode.
pub fn large_text_options() -> RevealOptions {
    RevealOptions {
        large_text_threshold: 0,
        ..RevealOptions::default()
    }
}

/// The text a reader would currently see: hidden and folded-away bytes
/// removed, faded bytes kept.
pub fn revealed_text(doc: &Document, display: &DisplayState) -> String {
    doc.text()
        .char_indices()
        .filter(|&(offset, _)| {
            display.style_at(offset) != Visibility::Hidden && !display.is_folded_away(offset)
        })
        .map(|(_, c)| c)
        .collect()
}
