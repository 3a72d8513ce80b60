//! # Grammar Rules
//!
//! Each function takes a `&mut Parser` and uses its methods to inspect the
//! current token, consume tokens, and build tree structure with markers.
//!
//! ## Module Structure
//!
//! - [`block`] - Line-level elements (sections, headlines, items, comments, keywords)
//! - [`inline`] - Inline elements (bracket links)
//!
//! ## Outline Shape
//!
//! ```text
//! ROOT
//!   PARAGRAPH / LIST_ITEM / COMMENT / KEYWORD   (preamble before the first headline)
//!   SECTION
//!     HEADING                                   (`* Title`)
//!     ...blocks...
//!     SECTION                                   (`** Nested`)
//! ```
//!
//! ## Error Recovery
//!
//! Grammar functions are lenient: anything that doesn't match a construct
//! becomes paragraph text. The tree always preserves all input bytes.

mod block;
mod inline;

use crate::parser::Parser;
use crate::syntax_kind::SyntaxKind;

/// Parse the root document.
///
/// Blocks before the first headline sit directly under ROOT; every headline
/// opens a SECTION.
pub fn root(p: &mut Parser<'_, '_>) {
    let m = p.start();

    while !p.at_end() {
        match block::headline_level(p) {
            Some(level) => block::section(p, level),
            None => block::block(p, None),
        }
    }

    m.complete(p, SyntaxKind::ROOT);
}
