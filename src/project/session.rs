use crate::{
    assets::store::{BlobHandle, BlobStore},
    deck::collection::SlideDeck,
    foundation::error::{DeckError, DeckResult},
    project::codec::{ArchiveOpts, LoadedProject, deserialize_project, serialize_project},
};

/// Editing session: the slide deck, the shared audio track and the store owning their blobs.
///
/// The session is the single owner of every handle referenced by its deck and audio slot, and
/// releases handles as soon as nothing references them anymore.
#[derive(Debug)]
pub struct ProjectSession<S: BlobStore> {
    store: S,
    deck: SlideDeck,
    audio: Option<BlobHandle>,
}

impl<S: BlobStore> ProjectSession<S> {
    /// Fresh one-slide session backed by `store`.
    pub fn new(store: S) -> Self {
        Self {
            store,
            deck: SlideDeck::new(),
            audio: None,
        }
    }

    /// Current slides.
    pub fn deck(&self) -> &SlideDeck {
        &self.deck
    }

    /// Mutable slides. Image references must go through the `*_slide_image` methods so handles
    /// stay accounted for.
    pub fn deck_mut(&mut self) -> &mut SlideDeck {
        &mut self.deck
    }

    /// Shared audio handle.
    pub fn audio(&self) -> Option<&BlobHandle> {
        self.audio.as_ref()
    }

    /// Backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the session, returning its store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Serialize the whole session to `.ppproj` bytes.
    pub fn save(&self, opts: &ArchiveOpts) -> DeckResult<Vec<u8>> {
        serialize_project(
            self.deck.as_slice(),
            self.audio.as_ref().map(BlobHandle::as_str),
            &self.store,
            opts,
        )
    }

    /// Replace the session contents with the project in `bytes`.
    ///
    /// On error the session is left exactly as it was. On success every handle the previous
    /// contents referenced is released.
    #[tracing::instrument(skip_all, fields(bytes = bytes.len()))]
    pub fn open(&mut self, bytes: &[u8]) -> DeckResult<()> {
        let loaded = deserialize_project(bytes, &mut self.store)?;
        let minted = loaded.handles();
        let LoadedProject { slides, audio, .. } = loaded;
        let deck = match SlideDeck::from_slides(slides) {
            Ok(deck) => deck,
            Err(e) => {
                release_all(&mut self.store, minted);
                return Err(DeckError::invalid_project(e.to_string()));
            }
        };

        let old_deck = std::mem::replace(&mut self.deck, deck);
        let old_audio = std::mem::replace(&mut self.audio, audio);
        self.release_slides(old_deck.iter().filter_map(|s| s.custom_image.clone()));
        if let Some(h) = old_audio {
            self.store.release(&h);
        }
        tracing::info!(slides = self.deck.len(), "project opened");
        Ok(())
    }

    /// Drop everything and start over with a single default slide.
    pub fn reset(&mut self) {
        let old = self.deck.reset();
        self.release_slides(old.into_iter().filter_map(|s| s.custom_image));
        if let Some(h) = self.audio.take() {
            self.store.release(&h);
        }
    }

    /// Store `bytes` and set them as the custom image of slide `index`.
    ///
    /// Any image the slide referenced before is released.
    pub fn set_slide_image(
        &mut self,
        index: usize,
        bytes: Vec<u8>,
        mime: Option<&str>,
    ) -> DeckResult<BlobHandle> {
        if self.deck.get(index).is_none() {
            return Err(DeckError::validation(format!(
                "slide index {index} out of range for {} slides",
                self.deck.len()
            )));
        }
        let handle = self.store.create(bytes, mime)?;
        let previous = self.deck.update(index, |s| {
            let prev = s.custom_image.take();
            s.set_custom_image(handle.as_str());
            prev
        })?;
        self.release_slides(previous);
        Ok(handle)
    }

    /// Switch slide `index` back to the named background `token`, releasing its image.
    pub fn clear_slide_image(&mut self, index: usize, token: &str) -> DeckResult<()> {
        let previous = self.deck.update(index, |s| s.set_background(token))?;
        self.release_slides(previous);
        Ok(())
    }

    /// Remove slide `index`, releasing its image.
    pub fn remove_slide(&mut self, index: usize) -> DeckResult<()> {
        let removed = self.deck.remove_slide(index)?;
        self.release_slides(removed.custom_image);
        Ok(())
    }

    /// Store `bytes` as the shared audio track, replacing (and releasing) the current one.
    pub fn set_audio(&mut self, bytes: Vec<u8>, mime: Option<&str>) -> DeckResult<BlobHandle> {
        let handle = self.store.create(bytes, mime)?;
        if let Some(old) = self.audio.replace(handle.clone()) {
            self.store.release(&old);
        }
        Ok(handle)
    }

    /// Drop the shared audio track.
    pub fn remove_audio(&mut self) {
        if let Some(h) = self.audio.take() {
            self.store.release(&h);
        }
    }

    fn release_slides(&mut self, refs: impl IntoIterator<Item = String>) {
        let handles = refs
            .into_iter()
            .filter(|r| self.store.is_local(r))
            .filter_map(|r| BlobHandle::parse(&r))
            .collect::<Vec<_>>();
        release_all(&mut self.store, handles);
    }
}

fn release_all<S: BlobStore + ?Sized>(store: &mut S, handles: Vec<BlobHandle>) {
    for h in handles {
        store.release(&h);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/project/session.rs"]
mod tests;
