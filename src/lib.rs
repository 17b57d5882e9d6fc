//! ppdeck is the editing core of a slideshow editor.
//!
//! It covers two concerns that carry the editor's nontrivial invariants:
//!
//! - the virtual-canvas coordinate engine: every stored position and size lives on a fixed
//!   1920x1080 canvas, is clamped/snapped on write, and is migrated from the older
//!   percentage-based layout on read;
//! - the project archive codec: a slide collection plus shared audio round-trips through a
//!   `.ppproj` zip container, embedding local binary assets under `assets/` with per-asset
//!   best-effort semantics.
//!
//! Around those sit the slide record and collection, playback timing, a blob-store abstraction for
//! session-local binary handles, and a small preferences store.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Binary assets: blob handles, blob stores and content sniffing.
pub mod assets;
/// Slide records and the slide collection.
pub mod deck;
pub mod layout;
/// Presentation playback and auto-advance timing.
pub mod playback;
/// User preferences.
pub mod prefs;
pub mod project;

pub use crate::foundation::core::{
    MIN_ELEMENT_SIZE, Placement, Point, Rect, TextRole, VIRTUAL_HEIGHT, VIRTUAL_WIDTH, Vec2,
    unix_millis,
};
pub use crate::foundation::error::{DeckError, DeckResult};

pub use crate::assets::media::{MediaType, normalize_rel_path, sniff_media};
pub use crate::assets::store::{BLOB_PREFIX, BlobHandle, BlobStore, MemoryBlobStore};
pub use crate::deck::collection::SlideDeck;
pub use crate::deck::slide::{SlideRecord, StoredLayout, TextStyle, default_slide};
pub use crate::deck::tokens::{SlideTransition, TextAnimation};
pub use crate::layout::canvas::{compute_scale, legacy_to_virtual, normalize_position, normalize_size};
pub use crate::layout::interaction::{ResizeHandle, drag_to, grab_offset, resize};
pub use crate::layout::placement::{default_placement, resolve_placement};
pub use crate::playback::player::{Playback, PlaybackEvent};
pub use crate::playback::timer::{
    TIMER_DEFAULT_DELAY_SECS, TIMER_MAX_DELAY_SECS, TIMER_MIN_DELAY_SECS, total_presentation_time,
    validate_delay,
};
pub use crate::prefs::store::{KeyValueStore, MemoryKeyValueStore, Theme};
pub use crate::project::codec::{
    ArchiveOpts, Compression, LoadedProject, deserialize_project, inspect_project,
    serialize_project,
};
pub use crate::project::manifest::{FORMAT_VERSION, PROJECT_EXTENSION, ProjectManifest};
pub use crate::project::session::ProjectSession;
