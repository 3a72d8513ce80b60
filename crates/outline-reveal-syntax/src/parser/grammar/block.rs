//! Line-level grammar rules.

use crate::parser::Parser;
use crate::syntax_kind::SyntaxKind;

use super::inline;

/// What a line is, judged from its first tokens only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    Blank,
    Headline,
    Comment,
    Keyword,
    ListItem,
    Paragraph,
}

fn line_kind(p: &Parser<'_, '_>) -> LineKind {
    if p.at_blank_line() {
        return LineKind::Blank;
    }
    if headline_level(p).is_some() {
        return LineKind::Headline;
    }

    let i = usize::from(p.at(SyntaxKind::WHITESPACE));
    let ends_marker = matches!(
        p.nth(i + 1),
        SyntaxKind::WHITESPACE | SyntaxKind::NEWLINE | SyntaxKind::EOF
    );

    match p.nth(i) {
        SyntaxKind::HASH if ends_marker => LineKind::Comment,
        SyntaxKind::HASH_PLUS if is_keyword(p, i + 1) => LineKind::Keyword,
        SyntaxKind::DASH | SyntaxKind::PLUS if ends_marker => LineKind::ListItem,
        // `*` only bullets when indented; at column 0 it is a headline
        SyntaxKind::STARS if i == 1 && p.nth_text(i) == "*" && ends_marker => LineKind::ListItem,
        SyntaxKind::TEXT if is_counter(p.nth_text(i)) && ends_marker => LineKind::ListItem,
        _ => LineKind::Paragraph,
    }
}

/// `KEY:` must follow `#+` directly, without whitespace inside the key.
fn is_keyword(p: &Parser<'_, '_>, key_start: usize) -> bool {
    let mut n = key_start;
    loop {
        match p.nth(n) {
            SyntaxKind::COLON => return n > key_start,
            SyntaxKind::WHITESPACE | SyntaxKind::NEWLINE | SyntaxKind::EOF => return false,
            _ => n += 1,
        }
    }
}

/// Ordered bullet such as `1.` or `12)`.
fn is_counter(text: &str) -> bool {
    match text.strip_suffix(['.', ')']) {
        Some(digits) => !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()),
        None => false,
    }
}

/// Level of the headline starting at the current token, if any.
pub fn headline_level(p: &Parser<'_, '_>) -> Option<usize> {
    if p.at_line_start() && p.at(SyntaxKind::STARS) && p.nth(1) == SyntaxKind::WHITESPACE {
        Some(p.nth_text(0).len())
    } else {
        None
    }
}

/// Parse a section: a headline and everything until the next headline of
/// the same or a shallower level.
pub fn section(p: &mut Parser<'_, '_>, level: usize) {
    let m = p.start();

    headline(p);

    while !p.at_end() {
        match headline_level(p) {
            Some(next) if next <= level => break,
            Some(next) => section(p, next),
            None => block(p, None),
        }
    }

    m.complete(p, SyntaxKind::SECTION);
}

fn headline(p: &mut Parser<'_, '_>) {
    let m = p.start();

    p.bump(); // stars
    p.eat(SyntaxKind::WHITESPACE);
    inline::inline_until_newline(p);
    p.eat(SyntaxKind::NEWLINE);

    m.complete(p, SyntaxKind::HEADING);
}

/// Parse one block element, skipping any blank lines before it.
///
/// `parent_indent` is the bullet indentation of the enclosing list item;
/// paragraph lines at or left of it belong to the parent's siblings.
pub fn block(p: &mut Parser<'_, '_>, parent_indent: Option<usize>) {
    while p.at_blank_line() {
        p.eat(SyntaxKind::WHITESPACE);
        p.bump();
    }

    if p.at_end() {
        return;
    }

    match line_kind(p) {
        LineKind::Blank | LineKind::Headline => {}
        LineKind::Comment => comment(p),
        LineKind::Keyword => keyword(p),
        LineKind::ListItem => list_item(p),
        LineKind::Paragraph => paragraph(p, parent_indent),
    }
}

/// Parse a comment line.
fn comment(p: &mut Parser<'_, '_>) {
    let m = p.start();

    p.eat(SyntaxKind::WHITESPACE);
    p.bump(); // #
    p.bump_until_newline();
    p.eat(SyntaxKind::NEWLINE);

    m.complete(p, SyntaxKind::COMMENT);
}

/// Parse a `#+KEY: value` line.
fn keyword(p: &mut Parser<'_, '_>) {
    let m = p.start();

    p.eat(SyntaxKind::WHITESPACE);
    p.bump(); // #+

    let key = p.start();
    while !p.at_end() && !p.at(SyntaxKind::COLON) {
        p.bump();
    }
    key.complete(p, SyntaxKind::KEYWORD_KEY);

    p.eat(SyntaxKind::COLON);
    p.eat(SyntaxKind::WHITESPACE);

    let value = p.start();
    p.bump_until_newline();
    value.complete(p, SyntaxKind::KEYWORD_VALUE);

    p.eat(SyntaxKind::NEWLINE);

    m.complete(p, SyntaxKind::KEYWORD);
}

/// Parse a list item with its continuation lines and nested items.
///
/// The item owns every following line indented deeper than its bullet,
/// including blank lines between them. Trailing blank lines are left to
/// the parent.
fn list_item(p: &mut Parser<'_, '_>) {
    let indent = p.line_indent();
    let m = p.start();

    p.eat(SyntaxKind::WHITESPACE);
    p.bump(); // bullet
    inline::inline_until_newline(p);
    p.eat(SyntaxKind::NEWLINE);

    while let Some((_, next_indent)) = p.next_content_line() {
        if next_indent <= indent {
            break;
        }
        block(p, Some(indent));
    }

    m.complete(p, SyntaxKind::LIST_ITEM);
}

/// Parse a paragraph (default block).
fn paragraph(p: &mut Parser<'_, '_>, parent_indent: Option<usize>) {
    let m = p.start();

    loop {
        inline::inline_until_newline(p);

        if !p.eat(SyntaxKind::NEWLINE) || p.at_end() {
            break;
        }

        if parent_indent.is_some_and(|parent| p.line_indent() <= parent) {
            break;
        }

        // Blank lines, headlines and other constructs interrupt paragraphs
        if line_kind(p) != LineKind::Paragraph {
            break;
        }
    }

    m.complete(p, SyntaxKind::PARAGRAPH);
}
