//! SyntaxKind enum for all tokens and nodes in the outline CST.
//!
//! Following the rust-analyzer model, all tokens and nodes share a single enum.
//! Every byte in the source must appear as a token in the tree.

/// All syntax kinds for the outline CST.
///
/// This enum represents both tokens (lexer output) and composite nodes (parser output).
/// The `repr(u16)` ensures efficient storage in rowan's green tree.
///
/// We use SCREAMING_CASE following the rust-analyzer convention for SyntaxKind.
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // === Tokens (lexer output) ===
    /// Horizontal whitespace (spaces, tabs)
    WHITESPACE,
    /// Line ending
    NEWLINE,
    /// Plain text content
    TEXT,
    /// A run of `*` characters (headline stars, indented bullets)
    STARS,
    /// `-` bullet
    DASH,
    /// `+` bullet
    PLUS,
    /// `#` opening a comment line
    HASH,
    /// `#+` opening a keyword line
    HASH_PLUS,
    /// `:` separating a keyword from its value
    COLON,
    /// `[` for links
    LBRACKET,
    /// `]` for links
    RBRACKET,
    /// End of file marker
    EOF,

    // === Composite Nodes (parser output) ===
    /// Root document node
    ROOT,
    /// A heading together with everything nested under it
    SECTION,
    /// The headline line of a section (`** Title`)
    HEADING,
    /// Individual list item, including nested items and continuation lines
    LIST_ITEM,
    /// Paragraph block
    PARAGRAPH,
    /// Comment line (`# text`)
    COMMENT,
    /// Keyword line (`#+KEY: value`)
    KEYWORD,
    /// The `KEY` part of a keyword line
    KEYWORD_KEY,
    /// The `value` part of a keyword line
    KEYWORD_VALUE,
    /// Bracket link (`[[target]]` or `[[target][description]]`)
    LINK,
    /// Target of a bracket link
    LINK_TARGET,
    /// Description of a bracket link
    LINK_DESCRIPTION,
}

impl SyntaxKind {
    /// Returns true if this kind represents a token (lexer output).
    pub fn is_token(self) -> bool {
        (self as u16) <= (Self::EOF as u16)
    }

    /// Returns true if this kind represents a composite node.
    pub fn is_node(self) -> bool {
        !self.is_token()
    }

    /// Returns true if this kind is trivia (whitespace/newlines).
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::WHITESPACE | Self::NEWLINE)
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

/// Language definition for rowan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OutlineLang {}

impl rowan::Language for OutlineLang {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        assert!(raw.0 <= SyntaxKind::LINK_DESCRIPTION as u16);
        // SAFETY: We check bounds above and SyntaxKind is repr(u16)
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type alias for our syntax nodes.
pub type SyntaxNode = rowan::SyntaxNode<OutlineLang>;
/// Type alias for our syntax tokens.
pub type SyntaxToken = rowan::SyntaxToken<OutlineLang>;
/// Type alias for syntax elements (node or token).
pub type SyntaxElement = rowan::SyntaxElement<OutlineLang>;
