use crate::{
    deck::slide::{SlideRecord, default_slide},
    foundation::core::unix_millis,
    foundation::error::{DeckError, DeckResult},
};

/// Ordered, never-empty slide collection owned by the editing surface.
#[derive(Clone, Debug, PartialEq)]
pub struct SlideDeck {
    slides: Vec<SlideRecord>,
}

impl Default for SlideDeck {
    fn default() -> Self {
        Self::new()
    }
}

impl SlideDeck {
    /// Deck holding a single default slide with id `"1"`.
    pub fn new() -> Self {
        Self {
            slides: vec![default_slide("1")],
        }
    }

    /// Wrap existing slides. Rejects an empty list.
    pub fn from_slides(slides: Vec<SlideRecord>) -> DeckResult<Self> {
        if slides.is_empty() {
            return Err(DeckError::validation("a deck needs at least one slide"));
        }
        Ok(Self { slides })
    }

    /// Number of slides (always `>= 1`).
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always `false`; present for API symmetry with collections.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Slides in order.
    pub fn as_slice(&self) -> &[SlideRecord] {
        &self.slides
    }

    /// Iterate slides in order.
    pub fn iter(&self) -> std::slice::Iter<'_, SlideRecord> {
        self.slides.iter()
    }

    /// Consume the deck.
    pub fn into_vec(self) -> Vec<SlideRecord> {
        self.slides
    }

    /// Slide at `index`.
    pub fn get(&self, index: usize) -> Option<&SlideRecord> {
        self.slides.get(index)
    }

    /// Mutable slide at `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut SlideRecord> {
        self.slides.get_mut(index)
    }

    /// Apply `f` to the slide at `index`.
    pub fn update<R>(
        &mut self,
        index: usize,
        f: impl FnOnce(&mut SlideRecord) -> R,
    ) -> DeckResult<R> {
        let len = self.slides.len();
        let slide = self.slides.get_mut(index).ok_or_else(|| {
            DeckError::validation(format!("slide index {index} out of range for {len} slides"))
        })?;
        Ok(f(slide))
    }

    /// Append a default slide with a fresh id; returns its index.
    pub fn add_slide(&mut self) -> usize {
        let id = self.fresh_id();
        self.slides.push(default_slide(id));
        self.slides.len() - 1
    }

    /// Remove and return the slide at `index`. The last remaining slide cannot be removed.
    pub fn remove_slide(&mut self, index: usize) -> DeckResult<SlideRecord> {
        if self.slides.len() == 1 {
            return Err(DeckError::validation("cannot delete the last slide"));
        }
        if index >= self.slides.len() {
            return Err(DeckError::validation(format!(
                "slide index {index} out of range for {} slides",
                self.slides.len()
            )));
        }
        Ok(self.slides.remove(index))
    }

    /// Replace everything with a fresh one-slide deck, returning the old slides.
    pub fn reset(&mut self) -> Vec<SlideRecord> {
        std::mem::replace(&mut self.slides, vec![default_slide("1")])
    }

    fn fresh_id(&self) -> String {
        let mut candidate = unix_millis();
        loop {
            let id = candidate.to_string();
            if !self.slides.iter().any(|s| s.id == id) {
                return id;
            }
            candidate = candidate.wrapping_add(1);
        }
    }
}

impl<'a> IntoIterator for &'a SlideDeck {
    type Item = &'a SlideRecord;
    type IntoIter = std::slice::Iter<'a, SlideRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.slides.iter()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/deck/collection.rs"]
mod tests;
