//! # Inline-Level Grammar
//!
//! The only inline construct the outline tree cares about is the bracket link,
//! because image links decide which reveal spans carry embedded images:
//!
//! - `[[target]]`
//! - `[[target][description]]`
//!
//! Everything else inside a line stays as flat tokens of the enclosing node.
//!
//! ## Error Tolerance
//!
//! - `[[` followed directly by `]]` or the end of the line stays plain text
//! - An unclosed `[[target` still produces a LINK node up to the end of line

use crate::parser::Parser;
use crate::syntax_kind::SyntaxKind;

/// Parse inline content until newline or EOF.
pub fn inline_until_newline(p: &mut Parser<'_, '_>) {
    while !p.at_end() && !p.at(SyntaxKind::NEWLINE) {
        if p.at(SyntaxKind::LBRACKET) && p.nth(1) == SyntaxKind::LBRACKET {
            link(p);
        } else {
            p.bump();
        }
    }
}

fn at_link_stop(p: &Parser<'_, '_>) -> bool {
    p.at_end() || p.at(SyntaxKind::NEWLINE) || p.at(SyntaxKind::RBRACKET)
}

/// Parse a bracket link: [[target]] or [[target][description]]
fn link(p: &mut Parser<'_, '_>) {
    let m = p.start();

    p.bump(); // [
    p.bump(); // [

    if at_link_stop(p) {
        m.abandon(p);
        return;
    }

    let target = p.start();
    while !at_link_stop(p) {
        p.bump();
    }
    target.complete(p, SyntaxKind::LINK_TARGET);

    if p.eat(SyntaxKind::RBRACKET) {
        if p.eat(SyntaxKind::LBRACKET) {
            let description = p.start();
            while !at_link_stop(p) {
                p.bump();
            }
            description.complete(p, SyntaxKind::LINK_DESCRIPTION);
            p.eat(SyntaxKind::RBRACKET);
        }
        p.eat(SyntaxKind::RBRACKET);
    }

    m.complete(p, SyntaxKind::LINK);
}
