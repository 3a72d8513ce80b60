//! # Lexer - Tokenizing Outline Source
//!
//! This module provides the first stage of parsing: breaking source text into
//! tokens using the [Logos] lexer generator.
//!
//! [Logos]: https://docs.rs/logos
//!
//! ## The Lossless Guarantee
//!
//! **Every byte in the input appears in exactly one token**. Nothing is
//! skipped, so offsets computed from the tree line up with the source text:
//!
//! ```
//! use outline_reveal_syntax::lexer::lex;
//!
//! let input = "* Slide\n# pause\n- item\n";
//! let tokens = lex(input);
//!
//! let reconstructed: String = tokens.iter().map(|t| t.text).collect();
//! assert_eq!(input, reconstructed);
//! ```
//!
//! ## Token Design
//!
//! Tokens are minimal and context-free. The lexer doesn't know whether `*`
//! opens a headline or an indented bullet, or whether `#` opens a comment;
//! that is decided by the grammar from the token's position in the line.
//!
//! - `*`, `**`, ... → `STARS` (headlines, indented bullets)
//! - `-`, `+` → `DASH`, `PLUS` (bullets)
//! - `#` → `HASH` (comments), `#+` → `HASH_PLUS` (keywords)
//! - `:` → `COLON` (keyword separator)
//! - `[`, `]` → bracket tokens (links)
//!
//! Everything else becomes `TEXT` tokens grouped into runs, so ordered
//! bullets such as `12.` arrive as a single `TEXT` token.

use logos::Logos;

use crate::syntax_kind::SyntaxKind;

/// Token kinds produced by the Logos lexer.
///
/// This enum exists separately from [`SyntaxKind`] because Logos needs to
/// derive on it. Each variant maps to a corresponding `SyntaxKind` token.
///
/// [`SyntaxKind`]: crate::syntax_kind::SyntaxKind
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Horizontal whitespace (spaces, tabs)
    #[regex(r"[ \t]+")]
    Whitespace,

    /// Line ending (LF or CRLF)
    #[regex(r"\r?\n")]
    Newline,

    /// A run of `*`
    #[regex(r"\*+")]
    Stars,

    /// `-` bullet
    #[token("-")]
    Dash,

    /// `+` bullet
    #[token("+")]
    Plus,

    /// `#` comment opener
    #[token("#")]
    Hash,

    /// `#+` keyword opener
    #[token("#+")]
    HashPlus,

    /// `:` keyword separator
    #[token(":")]
    Colon,

    /// `[` for links
    #[token("[")]
    LBracket,

    /// `]` for links
    #[token("]")]
    RBracket,

    /// Plain text - anything not matched by other rules
    #[regex(r"[^\s\[\]:*#+-]+")]
    Text,
}

impl TokenKind {
    /// Convert to SyntaxKind.
    pub fn to_syntax_kind(self) -> SyntaxKind {
        match self {
            TokenKind::Whitespace => SyntaxKind::WHITESPACE,
            TokenKind::Newline => SyntaxKind::NEWLINE,
            TokenKind::Stars => SyntaxKind::STARS,
            TokenKind::Dash => SyntaxKind::DASH,
            TokenKind::Plus => SyntaxKind::PLUS,
            TokenKind::Hash => SyntaxKind::HASH,
            TokenKind::HashPlus => SyntaxKind::HASH_PLUS,
            TokenKind::Colon => SyntaxKind::COLON,
            TokenKind::LBracket => SyntaxKind::LBRACKET,
            TokenKind::RBracket => SyntaxKind::RBRACKET,
            TokenKind::Text => SyntaxKind::TEXT,
        }
    }
}

/// A lexed token with its kind and text slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
}

/// Lex the input into a sequence of tokens.
///
/// Guarantees that all bytes from the input appear in the output tokens.
pub fn lex(input: &str) -> Vec<Token<'_>> {
    lex_with_spans(input)
        .into_iter()
        .map(|(token, _)| token)
        .collect()
}

/// Lex and return tokens along with their byte spans.
pub fn lex_with_spans(input: &str) -> Vec<(Token<'_>, std::ops::Range<usize>)> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(input);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let text = lexer.slice();
        let kind = match result {
            Ok(token_kind) => token_kind.to_syntax_kind(),
            // Unrecognized bytes (a lone `\r`, for instance) stay in the tree as TEXT
            Err(()) => SyntaxKind::TEXT,
        };
        tokens.push((Token { kind, text }, span));
    }

    tokens
}
