use std::time::Duration;

use crate::{
    deck::slide::SlideRecord,
    foundation::error::{DeckError, DeckResult},
    playback::timer::delay_duration,
};

/// Outcome of an auto-advance timer firing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackEvent {
    /// Moved on to the slide at this index.
    Advanced(usize),
    /// The last slide elapsed; playback stopped.
    Finished {
        /// A screen recording was attached to this run and must be stopped by the caller.
        stop_recording: bool,
    },
}

/// Presentation cursor and play/record state.
///
/// Timers live with the caller: ask [`Playback::auto_advance_due`] after every slide change,
/// arm a timer for the returned delay, and report back through [`Playback::on_timer_elapsed`].
/// Re-arm (cancelling the old timer) whenever the index or play state changes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Playback {
    index: usize,
    playing: bool,
    recording: bool,
}

impl Playback {
    /// Stopped playback positioned at the first slide.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current slide index.
    pub fn current(&self) -> usize {
        self.index
    }

    /// Whether the presentation is running.
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Whether a screen recording is tied to this run.
    pub fn is_recording(&self) -> bool {
        self.recording
    }

    /// Start presenting from the current slide.
    pub fn start(&mut self, recording: bool) {
        self.playing = true;
        self.recording = recording;
        tracing::debug!(index = self.index, recording, "playback started");
    }

    /// Stop presenting. Returns whether a recording was attached.
    pub fn stop(&mut self) -> bool {
        self.playing = false;
        std::mem::take(&mut self.recording)
    }

    /// Step forward, staying on the last slide.
    pub fn next(&mut self, len: usize) -> usize {
        if self.index + 1 < len {
            self.index += 1;
        }
        self.index
    }

    /// Step back, staying on the first slide.
    pub fn prev(&mut self) -> usize {
        self.index = self.index.saturating_sub(1);
        self.index
    }

    /// Jump to `index`.
    pub fn go_to(&mut self, index: usize, len: usize) -> DeckResult<usize> {
        if index >= len {
            return Err(DeckError::validation(format!(
                "slide index {index} out of range for {len} slides"
            )));
        }
        self.index = index;
        Ok(index)
    }

    /// Pull the cursor back inside a deck that shrank to `len` slides.
    pub fn clamp_to(&mut self, len: usize) {
        self.index = self.index.min(len.saturating_sub(1));
    }

    /// Delay after which the current slide should advance, if a timer is needed.
    pub fn auto_advance_due(&self, slides: &[SlideRecord]) -> Option<Duration> {
        if !self.playing {
            return None;
        }
        let slide = slides.get(self.index)?;
        if !slide.auto_advance {
            return None;
        }
        Some(delay_duration(f64::from(slide.auto_advance_delay_secs())))
    }

    /// Handle an elapsed auto-advance timer for a deck of `len` slides.
    pub fn on_timer_elapsed(&mut self, len: usize) -> PlaybackEvent {
        if self.index + 1 < len {
            self.index += 1;
            return PlaybackEvent::Advanced(self.index);
        }
        let stop_recording = self.stop();
        tracing::debug!(stop_recording, "playback reached the last slide");
        PlaybackEvent::Finished { stop_recording }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/player.rs"]
mod tests;
