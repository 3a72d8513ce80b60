use std::ops::ControlFlow;
use std::time::Duration;

use log::{debug, info};
use outline_reveal_config::Config;
use outline_reveal_engine::{DisplayState, Document, RevealCursor};

use crate::slides::split_slides;

/// What the UI needs to draw one frame.
pub struct View<'a> {
    pub slide: &'a Document,
    pub display: &'a DisplayState,
    pub slide_number: usize,
    pub slide_count: usize,
    /// Segments revealed so far and in total.
    pub progress: (usize, usize),
}

/// A running presentation: the slides, the one on screen and its cursor.
pub struct App {
    slides: Vec<Document>,
    index: usize,
    display: DisplayState,
    cursor: RevealCursor,
    pace: Duration,
}

impl App {
    /// `start_slide` counts from 1 and is clamped to the talk.
    pub fn new(text: &str, config: &Config, start_slide: usize) -> Self {
        let slides: Vec<Document> = split_slides(text)
            .iter()
            .map(|slide| Document::parse(slide))
            .collect();
        let index = start_slide.saturating_sub(1).min(slides.len().saturating_sub(1));
        info!("presenting {} slides, starting at {}", slides.len(), index + 1);

        let display = DisplayState::new(&slides[index]);
        let mut app = Self {
            slides,
            index,
            display,
            cursor: RevealCursor::new(config.reveal.clone()),
            pace: config.presenter.pace(),
        };
        app.enter(index);
        app
    }

    pub fn view(&self) -> View<'_> {
        View {
            slide: &self.slides[self.index],
            display: &self.display,
            slide_number: self.index + 1,
            slide_count: self.slides.len(),
            progress: (self.cursor.current(), self.cursor.len()),
        }
    }

    pub fn pace(&self) -> Duration {
        self.pace
    }

    /// Reveal the next segment, or move to the next slide once the current
    /// one is fully shown.
    pub fn next(&mut self) {
        if self.cursor.has_more() {
            self.cursor.advance(&mut self.display);
        } else if self.index + 1 < self.slides.len() {
            self.enter(self.index + 1);
        }
    }

    pub fn previous(&mut self) {
        if self.index > 0 {
            self.enter(self.index - 1);
        }
    }

    /// Hide everything on the current slide again.
    pub fn restart(&mut self) {
        self.cursor.reset(&mut self.display);
        self.cursor.init(&self.slides[self.index], &mut self.display);
    }

    /// Reveal the rest of the slide, calling `between` after each step.
    pub fn jump_to_end_with<F>(&mut self, mut between: F)
    where
        F: FnMut(View<'_>) -> ControlFlow<()>,
    {
        let Self {
            slides,
            index,
            display,
            cursor,
            ..
        } = self;
        let slide = &slides[*index];
        let slide_number = *index + 1;
        let slide_count = slides.len();
        let total = cursor.len();
        let mut revealed = cursor.current();

        cursor.jump_to_end_with(display, |display| {
            revealed += 1;
            between(View {
                slide,
                display,
                slide_number,
                slide_count,
                progress: (revealed, total),
            })
        });
    }

    /// Leave the presentation with the host back in its original state.
    pub fn finish(&mut self) {
        self.cursor.end(&mut self.display);
    }

    fn enter(&mut self, index: usize) {
        self.cursor.reset(&mut self.display);
        self.index = index;
        self.display = DisplayState::new(&self.slides[index]);
        self.cursor.init(&self.slides[index], &mut self.display);
        debug!("slide {}: {} segments", index + 1, self.cursor.len());
    }
}
