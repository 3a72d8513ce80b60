//! # outline-reveal-syntax
//!
//! A lossless outline syntax tree using [Rowan] + [Logos], following the
//! [rust-analyzer] architecture model.
//!
//! [Rowan]: https://docs.rs/rowan
//! [Logos]: https://docs.rs/logos
//! [rust-analyzer]: https://rust-analyzer.github.io/book/contributing/syntax.html
//!
//! ## Why a Lossless CST?
//!
//! Reveal segments are byte ranges into the original text. A concrete syntax
//! tree keeps **every byte** of the source (indentation, blank lines, comment
//! markers), so node offsets can be used directly as segment boundaries and
//! the text between two nodes can be sliced back out of the source.
//!
//! ## Architecture Overview
//!
//! ```text
//! Source Text → Lexer → Tokens → Parser → Events → Sink → Rowan Tree
//!               (Logos)          (Grammar)        (GreenNodeBuilder)
//! ```
//!
//! - [`lexer`] turns text into context-free tokens
//! - [`parser`] emits Start/Token/Finish events from line-level grammar rules
//! - the sink builds an immutable, cheaply cloneable Rowan tree
//!
//! ## Recognised Constructs
//!
//! | Construct | Example | Node |
//! |-----------|---------|------|
//! | Headline + subtree | `** Title` | `SECTION` / `HEADING` |
//! | List item | `- text`, `+ text`, `  * text`, `1. text` | `LIST_ITEM` |
//! | Comment line | `# pause` | `COMMENT` |
//! | Keyword line | `#+BEAMER: \pause` | `KEYWORD` |
//! | Paragraph | anything else | `PARAGRAPH` |
//! | Bracket link | `[[file:img.png][alt]]` | `LINK` |
//!
//! ## Quick Start
//!
//! ```
//! use outline_reveal_syntax::{parse, SyntaxKind};
//!
//! let tree = parse("* Slide\n# pause\n");
//!
//! assert_eq!(tree.text().to_string(), "* Slide\n# pause\n");
//!
//! let section = tree.children().next().unwrap();
//! assert_eq!(section.kind(), SyntaxKind::SECTION);
//! ```

pub mod lexer;
pub mod parser;
pub mod syntax_kind;

pub use parser::parse;
pub use syntax_kind::{OutlineLang, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};
