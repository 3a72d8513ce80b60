use outline_reveal_engine::Document;

/// Split a talk into slides at its level-1 headlines.
///
/// Text before the first headline becomes a slide of its own unless it is
/// blank. A talk without headlines is a single slide.
pub fn split_slides(text: &str) -> Vec<String> {
    let doc = Document::parse(text);
    let starts: Vec<usize> = doc
        .sections()
        .iter()
        .filter(|section| section.level == 1)
        .map(|section| section.span.start)
        .collect();

    let Some(&first) = starts.first() else {
        return vec![text.to_string()];
    };

    let mut slides = Vec::with_capacity(starts.len() + 1);
    if !text[..first].trim().is_empty() {
        slides.push(text[..first].to_string());
    }

    let ends = starts.iter().skip(1).copied().chain([text.len()]);
    for (start, end) in starts.iter().copied().zip(ends) {
        slides.push(text[start..end].to_string());
    }

    slides
}
