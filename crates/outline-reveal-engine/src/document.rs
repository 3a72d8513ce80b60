//! The outline document as the reveal engine sees it.
//!
//! A [`Document`] holds the source text in an `xi_rope::Rope` plus a flat,
//! pre-order list of the nodes the scanner cares about: headings, list
//! items, comment lines and `#+KEY: value` directives. Headline sections and
//! image links are kept alongside so the cursor can size the first slide and
//! dim embedded pictures.
//!
//! Every node stores a [`Span`] into the rope, never copied text (apart from
//! the small key/value strings of comments and directives).

use log::warn;
use outline_reveal_syntax::{SyntaxKind, SyntaxNode};
use serde::Serialize;
use xi_rope::Rope;

use crate::rope::{self, Span};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NodeKind {
    Heading,
    ListItem,
    Comment,
    Directive,
}

/// One outline element, with its byte range in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    pub kind: NodeKind,
    pub span: Span,
    /// Offset from the start of a list item to its first non-blank character.
    pub indent: Option<usize>,
    /// Directive key, e.g. `PAUSE` or `BEAMER`.
    pub key: Option<String>,
    /// Comment text after `#`, directive value, or heading title.
    pub value: Option<String>,
}

impl Node {
    pub fn heading(span: Span, title: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Heading,
            span,
            indent: None,
            key: None,
            value: Some(title.into()),
        }
    }

    pub fn list_item(span: Span, indent: usize) -> Self {
        Self {
            kind: NodeKind::ListItem,
            span,
            indent: Some(indent),
            key: None,
            value: None,
        }
    }

    pub fn comment(span: Span, text: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Comment,
            span,
            indent: None,
            key: None,
            value: Some(text.into()),
        }
    }

    pub fn directive(span: Span, key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Directive,
            span,
            indent: None,
            key: Some(key.into()),
            value: Some(value.into()),
        }
    }

    /// True for `# pause`, `#+PAUSE:` and `#+BEAMER: \pause`.
    pub fn is_pause_marker(&self) -> bool {
        let value = self.value.as_deref().map(str::trim);
        match self.kind {
            NodeKind::Comment => value == Some("pause"),
            NodeKind::Directive => match self.key.as_deref() {
                Some(key) if key.eq_ignore_ascii_case("PAUSE") => true,
                Some(key) if key.eq_ignore_ascii_case("BEAMER") => value == Some("\\pause"),
                _ => false,
            },
            NodeKind::Heading | NodeKind::ListItem => false,
        }
    }

    /// Well-formed nodes carry the metadata their kind needs.
    fn has_required_fields(&self) -> bool {
        match self.kind {
            NodeKind::ListItem => self.indent.is_some(),
            NodeKind::Directive => self.key.is_some(),
            NodeKind::Heading | NodeKind::Comment => true,
        }
    }
}

/// A headline together with its subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Section {
    pub level: usize,
    /// The headline line only.
    pub heading: Span,
    /// Headline plus everything up to the next headline of equal or
    /// shallower level.
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct Document {
    rope: Rope,
    nodes: Vec<Node>,
    sections: Vec<Section>,
    images: Vec<Span>,
}

impl Document {
    /// Parse outline text into a document.
    pub fn parse(text: &str) -> Self {
        let tree = outline_reveal_syntax::parse(text);
        let collected = Collected::from_tree(&tree);
        Self::from_parts(text, collected.nodes, collected.sections, collected.images)
    }

    /// Build a document from nodes produced elsewhere.
    ///
    /// Nodes must be in document order and inside the text. Anything
    /// malformed is dropped with a warning instead of failing the slide.
    pub fn from_parts(
        text: &str,
        mut nodes: Vec<Node>,
        mut sections: Vec<Section>,
        mut images: Vec<Span>,
    ) -> Self {
        let in_bounds = |span: Span| {
            span.start <= span.end
                && span.end <= text.len()
                && text.is_char_boundary(span.start)
                && text.is_char_boundary(span.end)
        };

        nodes.retain(|node| {
            let ok = in_bounds(node.span) && node.has_required_fields();
            if !ok {
                warn!("dropping malformed {:?} node at {:?}", node.kind, node.span);
            }
            ok
        });

        let starts: Vec<usize> = nodes.iter().map(|node| node.span.start).collect();
        let mut keep = longest_ordered_run(&starts).into_iter();
        nodes.retain(|node| {
            let ok = keep.next().unwrap_or(false);
            if !ok {
                warn!("dropping out-of-order {:?} node at {:?}", node.kind, node.span);
            }
            ok
        });

        sections.retain(|section| {
            let ok = in_bounds(section.span) && section.span.encloses(section.heading);
            if !ok {
                warn!("dropping malformed section at {:?}", section.span);
            }
            ok
        });

        images.retain(|&image| {
            let ok = in_bounds(image);
            if !ok {
                warn!("dropping malformed image span {image:?}");
            }
            ok
        });

        Self {
            rope: Rope::from(text),
            nodes,
            sections,
            images,
        }
    }

    pub fn rope(&self) -> &Rope {
        &self.rope
    }

    /// Document length in bytes; also the end offset of the last segment.
    pub fn len(&self) -> usize {
        self.rope.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rope.is_empty()
    }

    pub fn text(&self) -> String {
        String::from(&self.rope)
    }

    pub fn slice(&self, span: Span) -> String {
        rope::slice_to_string(&self.rope, span)
    }

    pub fn is_blank(&self, span: Span) -> bool {
        rope::is_blank(&self.rope, span)
    }

    pub fn char_count(&self, span: Span) -> usize {
        rope::char_count(&self.rope, span)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn images(&self) -> &[Span] {
        &self.images
    }

    /// Image links lying entirely within `span`.
    pub fn images_in(&self, span: Span) -> impl Iterator<Item = Span> + '_ {
        self.images
            .iter()
            .copied()
            .filter(move |&image| span.encloses(image))
    }

    /// The first headline's subtree, or the whole document when there is no
    /// headline.
    pub fn first_section_span(&self) -> Span {
        self.sections
            .first()
            .map_or(Span::new(0, self.len()), |section| section.span)
    }

    /// The `#+FADING-ELEMENTS:` setting of the first section, if present and
    /// understood.
    pub fn fading_override(&self) -> Option<bool> {
        let scope = self.first_section_span();
        let directive = self.nodes.iter().find(|node| {
            node.kind == NodeKind::Directive
                && scope.encloses(node.span)
                && node
                    .key
                    .as_deref()
                    .is_some_and(|key| key.eq_ignore_ascii_case("FADING-ELEMENTS"))
        })?;

        let value = directive.value.as_deref().unwrap_or_default();
        let flag = parse_flag(value);
        if flag.is_none() {
            warn!("ignoring FADING-ELEMENTS value {value:?}; expected t or nil");
        }
        flag
    }
}

/// Marks the longest non-decreasing subsequence of `starts`, so one
/// misplaced node costs only itself. Ties go to the earliest run.
fn longest_ordered_run(starts: &[usize]) -> Vec<bool> {
    // tails[k]: index ending the best run of length k + 1 seen so far
    let mut tails: Vec<usize> = Vec::new();
    let mut prev: Vec<Option<usize>> = Vec::with_capacity(starts.len());
    let mut best: Option<(usize, usize)> = None;

    for (i, &start) in starts.iter().enumerate() {
        let pos = tails.partition_point(|&t| starts[t] <= start);
        prev.push(pos.checked_sub(1).map(|p| tails[p]));
        if pos == tails.len() {
            tails.push(i);
        } else {
            tails[pos] = i;
        }
        if best.is_none_or(|(len, _)| pos + 1 > len) {
            best = Some((pos + 1, i));
        }
    }

    let mut keep = vec![false; starts.len()];
    let mut cursor = best.map(|(_, last)| last);
    while let Some(i) = cursor {
        keep[i] = true;
        cursor = prev[i];
    }
    keep
}

/// Interpret a directive value as a boolean.
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "t" | "true" | "yes" | "on" | "1" => Some(true),
        "nil" | "false" | "no" | "off" | "0" | "()" => Some(false),
        _ => None,
    }
}

const IMAGE_EXTENSIONS: [&str; 7] = ["png", "jpg", "jpeg", "gif", "svg", "webp", "bmp"];

/// True when a link target points at a picture.
pub fn is_image_target(target: &str) -> bool {
    let target = target.trim();
    let path = target.strip_prefix("file:").unwrap_or(target);
    match path.rsplit_once('.') {
        Some((stem, ext)) => {
            !stem.is_empty() && IMAGE_EXTENSIONS.iter().any(|known| ext.eq_ignore_ascii_case(known))
        }
        None => false,
    }
}

#[derive(Default)]
struct Collected {
    nodes: Vec<Node>,
    sections: Vec<Section>,
    images: Vec<Span>,
}

impl Collected {
    /// Walk the tree in pre-order, so parents come before their children.
    fn from_tree(tree: &SyntaxNode) -> Self {
        let mut out = Self::default();

        for node in tree.descendants() {
            match node.kind() {
                SyntaxKind::SECTION => out.section(&node),
                SyntaxKind::HEADING => {
                    let text = node.text().to_string();
                    let title = text.trim_start_matches('*').trim();
                    out.nodes.push(Node::heading(span_of(&node), title));
                }
                SyntaxKind::LIST_ITEM => {
                    let indent = node
                        .first_token()
                        .filter(|token| token.kind() == SyntaxKind::WHITESPACE)
                        .map_or(0, |token| token.text().len());
                    out.nodes.push(Node::list_item(span_of(&node), indent));
                }
                SyntaxKind::COMMENT => {
                    let text = node.text().to_string();
                    let body = text.trim().strip_prefix('#').unwrap_or_default().trim();
                    out.nodes.push(Node::comment(span_of(&node), body));
                }
                SyntaxKind::KEYWORD => {
                    let key = child_text(&node, SyntaxKind::KEYWORD_KEY);
                    let value = child_text(&node, SyntaxKind::KEYWORD_VALUE);
                    out.nodes
                        .push(Node::directive(span_of(&node), key.trim(), value.trim()));
                }
                SyntaxKind::LINK => {
                    if is_image_target(&child_text(&node, SyntaxKind::LINK_TARGET)) {
                        out.images.push(span_of(&node));
                    }
                }
                _ => {}
            }
        }

        out
    }

    fn section(&mut self, node: &SyntaxNode) {
        let Some(heading) = node.children().find(|n| n.kind() == SyntaxKind::HEADING) else {
            return;
        };
        let level = heading
            .first_token()
            .filter(|token| token.kind() == SyntaxKind::STARS)
            .map_or(1, |token| token.text().len());

        self.sections.push(Section {
            level,
            heading: span_of(&heading),
            span: span_of(node),
        });
    }
}

fn span_of(node: &SyntaxNode) -> Span {
    let range = node.text_range();
    Span::new(range.start().into(), range.end().into())
}

fn child_text(node: &SyntaxNode, kind: SyntaxKind) -> String {
    node.children()
        .find(|child| child.kind() == kind)
        .map(|child| child.text().to_string())
        .unwrap_or_default()
}
