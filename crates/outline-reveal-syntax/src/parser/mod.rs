//! # Parser - Event-Based Tree Construction
//!
//! This module implements the core parsing logic, transforming a token stream
//! into a syntax tree using the **event-based** architecture from rust-analyzer.
//!
//! Instead of building the tree during recursive descent, grammar rules emit a
//! flat list of **events** ([`Event`]). The [`Sink`] then builds the Rowan tree
//! from those events. Outlines nest arbitrarily deep (sections in sections,
//! items in items), and the flat event list keeps tree construction separate
//! from the line-oriented decisions the grammar has to make.
//!
//! ## The Marker System
//!
//! `parser.start()` returns a [`Marker`] that **must** be either completed with
//! `marker.complete(parser, KIND)` or abandoned with `marker.abandon(parser)`.
//! Dropping a marker without doing either panics, which catches grammar bugs
//! rather than producing corrupt trees.
//!
//! ```ignore
//! let m = p.start();
//! p.bump();
//! m.complete(p, SyntaxKind::COMMENT);
//! ```
//!
//! ## Public API
//!
//! The main entry point is [`parse`]:
//!
//! ```
//! use outline_reveal_syntax::parse;
//!
//! let tree = parse("* Slide\n- item\n");
//! println!("{:#?}", tree);
//! ```

pub mod event;
pub mod sink;

mod grammar;

use crate::lexer::{Token, lex};
use crate::syntax_kind::{SyntaxKind, SyntaxNode};
use event::Event;
use sink::Sink;

/// The parser state machine.
///
/// Holds the token stream, current position, and accumulated events.
/// Grammar functions receive `&mut Parser` and use its methods to:
///
/// - Inspect tokens: `current()`, `nth()`, `at()`, `at_end()`
/// - Inspect lines: `at_line_start()`, `line_indent()`, `at_blank_line()`
/// - Consume tokens: `bump()`, `eat()`
/// - Build structure: `start()` → `Marker` → `complete()`/`abandon()`
pub struct Parser<'t, 'input> {
    tokens: &'t [Token<'input>],
    pos: usize,
    events: Vec<Event>,
}

impl<'t, 'input> Parser<'t, 'input> {
    /// Create a new parser from a slice of tokens.
    pub fn new(tokens: &'t [Token<'input>]) -> Self {
        Self {
            tokens,
            pos: 0,
            events: Vec::new(),
        }
    }

    /// Parse the tokens and return a syntax tree.
    pub fn parse(mut self) -> SyntaxNode {
        grammar::root(&mut self);
        let sink = Sink::new(self.tokens, self.events);
        sink.finish()
    }

    /// Start a new node and return a marker.
    pub fn start(&mut self) -> Marker {
        let pos = self.events.len();
        self.events.push(Event::Placeholder);
        Marker {
            pos,
            completed: false,
        }
    }

    /// Current token kind, or EOF if past end.
    pub fn current(&self) -> SyntaxKind {
        self.nth(0)
    }

    /// Look ahead n tokens.
    pub fn nth(&self, n: usize) -> SyntaxKind {
        self.tokens
            .get(self.pos + n)
            .map(|t| t.kind)
            .unwrap_or(SyntaxKind::EOF)
    }

    /// Text of the token n positions ahead, or `""` past the end.
    pub fn nth_text(&self, n: usize) -> &'input str {
        self.tokens.get(self.pos + n).map(|t| t.text).unwrap_or("")
    }

    /// Check if at end of input.
    pub fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Check if current token is of given kind.
    pub fn at(&self, kind: SyntaxKind) -> bool {
        self.current() == kind
    }

    /// Consume the current token if it matches.
    pub fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Consume the current token unconditionally.
    pub fn bump(&mut self) {
        if !self.at_end() {
            let kind = self.current();
            self.events.push(Event::token(kind));
            self.pos += 1;
        }
    }

    /// Consume tokens up to (not including) the next newline.
    pub fn bump_until_newline(&mut self) {
        while !self.at_end() && !self.at(SyntaxKind::NEWLINE) {
            self.bump();
        }
    }

    /// Check if we're at the start of a line (after newline or at start).
    pub fn at_line_start(&self) -> bool {
        if self.pos == 0 {
            return true;
        }
        self.tokens
            .get(self.pos - 1)
            .map(|t| t.kind == SyntaxKind::NEWLINE)
            .unwrap_or(false)
    }

    /// Width in bytes of the indentation starting at the current token.
    pub fn line_indent(&self) -> usize {
        if self.at(SyntaxKind::WHITESPACE) {
            self.nth_text(0).len()
        } else {
            0
        }
    }

    /// Check if the line starting at the current token holds only whitespace.
    pub fn at_blank_line(&self) -> bool {
        match self.current() {
            SyntaxKind::NEWLINE => true,
            SyntaxKind::WHITESPACE => {
                matches!(self.nth(1), SyntaxKind::NEWLINE | SyntaxKind::EOF)
            }
            _ => false,
        }
    }

    /// Find the next line that holds more than whitespace.
    ///
    /// Returns the token offset where that line starts and its indentation,
    /// or `None` when only blank lines remain.
    pub fn next_content_line(&self) -> Option<(usize, usize)> {
        let mut n = 0;
        loop {
            match (self.nth(n), self.nth(n + 1)) {
                (SyntaxKind::EOF, _) | (SyntaxKind::WHITESPACE, SyntaxKind::EOF) => return None,
                (SyntaxKind::NEWLINE, _) => n += 1,
                (SyntaxKind::WHITESPACE, SyntaxKind::NEWLINE) => n += 2,
                (SyntaxKind::WHITESPACE, _) => return Some((n, self.nth_text(n).len())),
                _ => return Some((n, 0)),
            }
        }
    }
}

/// A marker for a node being constructed.
///
/// When you call `parser.start()`, a `Placeholder` event is pushed and you get
/// a `Marker` pointing to it. The `#[must_use]` attribute and the `Drop` impl
/// together enforce that every marker is either:
///
/// - **Completed** via `marker.complete(parser, KIND)` - converts the
///   placeholder to a `Start` event and pushes a `Finish` event
/// - **Abandoned** via `marker.abandon(parser)` - removes the placeholder
///   (only works if nothing was pushed after it)
#[must_use = "Markers must be completed or abandoned, dropping them is a bug"]
pub struct Marker {
    /// Position in the events vector where our Placeholder lives
    pos: usize,
    /// Tracks whether complete() or abandon() was called
    completed: bool,
}

impl Marker {
    /// Complete this marker, creating a node of the given kind.
    pub fn complete(mut self, p: &mut Parser<'_, '_>, kind: SyntaxKind) {
        self.completed = true;
        let event_at_pos = &mut p.events[self.pos];
        assert!(matches!(event_at_pos, Event::Placeholder));
        *event_at_pos = Event::start(kind);
        p.events.push(Event::Finish);
    }

    /// Abandon this marker without creating a node.
    ///
    /// If other events were pushed after `start()`, the placeholder becomes
    /// inert and is ignored by the Sink.
    pub fn abandon(mut self, p: &mut Parser<'_, '_>) {
        self.completed = true;
        if self.pos == p.events.len() - 1 {
            match p.events.pop() {
                Some(Event::Placeholder) => {}
                _ => unreachable!(),
            }
        }
    }
}

impl Drop for Marker {
    fn drop(&mut self) {
        if !self.completed && !std::thread::panicking() {
            panic!("Marker must be either completed or abandoned");
        }
    }
}

/// Parse outline source into a syntax tree.
pub fn parse(source: &str) -> SyntaxNode {
    let tokens = lex(source);
    let parser = Parser::new(&tokens);
    parser.parse()
}
