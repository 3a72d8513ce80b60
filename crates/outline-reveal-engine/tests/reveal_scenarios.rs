use insta::assert_snapshot;
use outline_reveal_engine::{
    DisplayState, Document, Node, RevealCursor, RevealOptions, Span, Visibility, scan, segment,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn visible_text(doc: &Document, display: &DisplayState) -> String {
    doc.text()
        .char_indices()
        .filter(|&(offset, _)| {
            display.style_at(offset) != Visibility::Hidden && !display.is_folded_away(offset)
        })
        .map(|(_, c)| c)
        .collect()
}

fn segment_texts(doc: &Document, cursor: &RevealCursor) -> Vec<String> {
    cursor.segments().iter().map(|s| doc.slice(*s)).collect()
}

fn start(input: &str, options: RevealOptions) -> (Document, DisplayState, RevealCursor) {
    let doc = Document::parse(input);
    let mut display = DisplayState::new(&doc);
    let mut cursor = RevealCursor::new(options);
    cursor.init(&doc, &mut display);
    (doc, display, cursor)
}

#[test]
fn two_pauses_two_gaps() {
    let (doc, mut display, mut cursor) =
        start("# pause\nHello\n# pause\nWorld", RevealOptions::default());

    assert_eq!(segment_texts(&doc, &cursor), vec!["Hello\n", "World"]);
    assert_eq!(visible_text(&doc, &display), "");

    cursor.advance(&mut display);
    assert_eq!(visible_text(&doc, &display), "Hello\n");
    cursor.advance(&mut display);
    assert_eq!(visible_text(&doc, &display), "Hello\nWorld");
    assert!(!cursor.has_more());
}

#[test]
fn list_items_reveal_and_fold_one_at_a_time() {
    let input = "- one\n  detail one\n- two\n  detail two\n- three\n  detail three\n";
    let options = RevealOptions {
        large_text_threshold: 10,
        ..RevealOptions::default()
    };
    let (doc, mut display, mut cursor) = start(input, options);

    assert!(cursor.is_large_text());
    assert_eq!(
        segment_texts(&doc, &cursor),
        vec![
            "- one\n  detail one\n",
            "- two\n  detail two\n",
            "- three\n  detail three\n",
        ]
    );

    cursor.advance(&mut display);
    assert_eq!(visible_text(&doc, &display), "- one\n  detail one\n");
    cursor.advance(&mut display);
    assert_eq!(
        visible_text(&doc, &display),
        "- one\n  detail one\n- two\n  detail two\n"
    );
    assert_eq!(display.folded_items(), 0);

    // current reached fold_age: the first item collapses to its first line
    cursor.advance(&mut display);
    assert!(display.is_folded(cursor.segments()[0]));
    assert_eq!(display.folded_items(), 1);
    assert_eq!(visible_text(&doc, &display), "- one\n- two\n  detail two\n- three\n  detail three\n");
    assert!(!cursor.has_more());
}

#[test]
fn heading_then_marker_emits_nothing_for_the_pair() {
    let (doc, _, cursor) = start("* Slide\n# pause\nrest of slide\n", RevealOptions::default());
    assert_eq!(segment_texts(&doc, &cursor), vec!["rest of slide\n"]);
}

#[test]
fn reveal_progression() {
    let (doc, mut display, mut cursor) = start(
        "* Agenda\n- intro\n- demo\n# pause\nQuestions?\n",
        RevealOptions::default(),
    );

    let mut steps = vec![format!("[0] {:?}", visible_text(&doc, &display))];
    while cursor.advance(&mut display) {
        steps.push(format!(
            "[{}] {:?}",
            cursor.current(),
            visible_text(&doc, &display)
        ));
    }

    assert_snapshot!(steps.join("\n"), @r#"
    [0] "* Agenda\n"
    [1] "* Agenda\n- intro\n"
    [2] "* Agenda\n- intro\n- demo\n"
    [3] "* Agenda\n- intro\n- demo\nQuestions?\n"
    "#);
}

#[rstest]
#[case("")]
#[case("* Only a heading\n")]
#[case("Plain paragraph.\n\nAnother one.\n")]
#[case("* A\ntext\n** B\nmore text\n# just a comment\n")]
fn nothing_to_reveal(#[case] input: &str) {
    let (doc, _, cursor) = start(input, RevealOptions::default());
    assert!(segment(&scan(&doc, true), &doc).is_empty());
    assert!(!cursor.has_more());
}

#[rstest]
#[case("# pause\n\n   \n# pause\n", 0)]
#[case("# pause\n  x  \n# pause\n", 1)]
#[case("#+PAUSE:\n\t\n#+BEAMER: \\pause\n", 0)]
#[case("#+PAUSE:\nword\n#+BEAMER: \\pause\n", 1)]
fn blank_gaps_between_markers(#[case] input: &str, #[case] expected: usize) {
    let doc = Document::parse(input);
    assert_eq!(segment(&scan(&doc, true), &doc).len(), expected);
}

#[rstest]
#[case("* A\n- a\n  - a1\n# pause\nx\n* B\n- b\n# pause\n\ny\n")]
#[case("# pause\n- a\n  # pause\n  inner\n- b\n  - b1\n    # pause\n    deep\ntail\n")]
#[case("intro\n# pause\n1. one\n2) two\n   + nested\n# pause\n* H\n#+PAUSE:\nend")]
fn segments_are_disjoint_ordered_and_respect_headings(#[case] input: &str) {
    let doc = Document::parse(input);
    for first_level_only in [true, false] {
        let segments = segment(&scan(&doc, first_level_only), &doc);
        for pair in segments.windows(2) {
            assert!(pair[0].end <= pair[1].start, "{pair:?}");
            assert!(pair[0].start < pair[1].start, "{pair:?}");
        }
        for seg in &segments {
            assert!(!seg.is_empty());
            for section in doc.sections() {
                let heading = section.heading;
                assert!(
                    seg.end <= heading.start || seg.start >= heading.end,
                    "{seg:?} crosses {heading:?}"
                );
            }
        }
    }
}

#[test]
fn advancing_past_the_end_changes_nothing() {
    let (doc, mut display, mut cursor) = start("- a\n- b\n# pause\nc\n", RevealOptions::default());
    let n = cursor.len();
    for _ in 0..n {
        cursor.advance(&mut display);
    }
    assert!(!cursor.has_more());

    let before = visible_text(&doc, &display);
    assert!(!cursor.advance(&mut display));
    assert_eq!(cursor.current(), n);
    assert_eq!(visible_text(&doc, &display), before);
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(3)]
#[case(9)]
fn reset_clears_every_style(#[case] steps: usize) {
    let input = "* Slide\n#+FADING-ELEMENTS: t\n- a\n- b\n# pause\nc\n- d\n  [[pic.png]]\n";
    let (doc, mut display, mut cursor) = start(input, RevealOptions::default());
    assert!(cursor.is_large_text());

    for _ in 0..steps {
        cursor.advance(&mut display);
    }
    cursor.reset(&mut display);

    assert_eq!(cursor.current(), 0);
    assert_eq!(display.live_overlays(), 0);
    assert_eq!(display.styled_overlays(), 0);
    assert_eq!(display.dimmed_images(), 0);
    assert_eq!(display.folded_items(), 0);
    assert_eq!(visible_text(&doc, &display), input);
}

#[test]
fn fading_directive_overrides_size() {
    let long_items: String = (0..40).map(|i| format!("- item number {i}\n")).collect();

    let (_, _, cursor) = start(&long_items, RevealOptions::default());
    assert!(cursor.is_large_text());

    let (_, _, cursor) = start(
        &format!("#+FADING-ELEMENTS: nil\n{long_items}"),
        RevealOptions::default(),
    );
    assert!(!cursor.is_large_text());
}

#[test]
fn malformed_external_nodes_do_not_break_ordering() {
    let text = "- a\n# pause\nb\n- c\n";
    let nodes = vec![
        Node::list_item(Span::new(0, 4), 0),
        Node::comment(Span::new(4, 12), "pause"),
        Node::comment(Span::new(14, 3), "pause"),
        Node::list_item(Span::new(14, 18), 0),
        Node::list_item(Span::new(16, 400), 0),
    ];
    let doc = Document::from_parts(text, nodes, vec![], vec![]);
    let mut display = DisplayState::new(&doc);
    let mut cursor = RevealCursor::default();
    cursor.init(&doc, &mut display);

    assert_eq!(segment_texts(&doc, &cursor), vec!["- a\n", "b\n", "- c\n"]);
}

#[test]
fn single_displaced_node_costs_only_itself() {
    let text = "- a\n# pause\nb\n- c\n- d\n";
    let nodes = vec![
        Node::list_item(Span::new(0, 4), 0),
        Node::comment(Span::new(18, 22), "pause"),
        Node::comment(Span::new(4, 12), "pause"),
        Node::list_item(Span::new(14, 18), 0),
        Node::list_item(Span::new(18, 22), 0),
    ];
    let doc = Document::from_parts(text, nodes, vec![], vec![]);
    let mut display = DisplayState::new(&doc);
    let mut cursor = RevealCursor::default();
    cursor.init(&doc, &mut display);

    assert_eq!(
        segment_texts(&doc, &cursor),
        vec!["- a\n", "b\n", "- c\n", "- d\n"]
    );
    assert_eq!(visible_text(&doc, &display), "");
}

#[rstest]
#[case("- a\n  - a1\n  tail of a\n- b\n")]
#[case("* S\n- a\n  - a1\n    - a2\n    a1 tail\n  a tail\n- b\n  - b1\n  b tail\n")]
fn nested_mode_hides_everything_until_revealed(#[case] input: &str) {
    let options = RevealOptions {
        accept_first_level_only: false,
        ..RevealOptions::default()
    };
    let (doc, mut display, mut cursor) = start(input, options);
    let headings: String = doc
        .sections()
        .iter()
        .map(|section| doc.slice(section.heading))
        .collect();

    assert_eq!(visible_text(&doc, &display), headings);

    cursor.jump_to_end(&mut display);
    assert_eq!(visible_text(&doc, &display), input);
}
