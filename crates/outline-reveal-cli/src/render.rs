//! Turns a slide and its display state into styled terminal lines.

use outline_reveal_engine::{DisplayState, Document, Visibility};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Render the visible part of `doc`.
///
/// Hidden and folded-away bytes are left out, a folded item ends with `…`,
/// faded text takes its fade colour and image links become placeholders.
pub fn render(doc: &Document, display: &DisplayState) -> Vec<Line<'static>> {
    let text = doc.text();
    let mut out = LineBuilder::default();
    let mut chars = text.char_indices().peekable();

    while let Some((offset, c)) = chars.next() {
        if display.is_folded_away(offset) {
            continue;
        }
        let style = match display.style_at(offset) {
            Visibility::Hidden => continue,
            Visibility::Visible => Style::default(),
            Visibility::Faded(color) => Style::default().fg(Color::Rgb(color.r, color.g, color.b)),
        };

        if let Some(&image) = doc.images().iter().find(|image| image.start == offset) {
            let label = if display.is_image_dimmed(image) {
                "[image hidden]".to_string()
            } else {
                format!("[image: {}]", link_target(&doc.slice(image)))
            };
            out.push_str(&label, style.add_modifier(Modifier::ITALIC));
            while chars.next_if(|&(next, _)| next < image.end).is_some() {}
            continue;
        }

        match c {
            '\n' => {
                if display.is_folded_away(offset + 1) {
                    out.push_str(" …", style);
                }
                out.newline();
            }
            '\r' => {}
            _ => out.push_char(c, style),
        }
    }

    out.finish()
}

/// `[[target][description]]` → `target`.
fn link_target(link: &str) -> &str {
    let inner = link.trim_start_matches('[');
    inner.split(']').next().unwrap_or(inner)
}

#[derive(Default)]
struct LineBuilder {
    lines: Vec<Line<'static>>,
    spans: Vec<Span<'static>>,
    run: String,
    style: Style,
}

impl LineBuilder {
    fn push_char(&mut self, c: char, style: Style) {
        self.restyle(style);
        self.run.push(c);
    }

    fn push_str(&mut self, s: &str, style: Style) {
        self.restyle(style);
        self.run.push_str(s);
    }

    fn restyle(&mut self, style: Style) {
        if style != self.style {
            self.flush();
            self.style = style;
        }
    }

    fn flush(&mut self) {
        if !self.run.is_empty() {
            let run = std::mem::take(&mut self.run);
            self.spans.push(Span::styled(run, self.style));
        }
    }

    fn newline(&mut self) {
        self.flush();
        self.lines.push(Line::from(std::mem::take(&mut self.spans)));
    }

    fn finish(mut self) -> Vec<Line<'static>> {
        self.flush();
        if !self.spans.is_empty() {
            self.lines.push(Line::from(self.spans));
        }
        self.lines
    }
}
