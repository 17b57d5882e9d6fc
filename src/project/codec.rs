//! Project archive codec: slide collection + shared audio <-> `.ppproj` bytes.
//!
//! The container is a zip file holding `project.json` and raw asset entries under `assets/`.
//! Asset failures are isolated: a broken image or audio track is logged and dropped, the rest of
//! the project still saves or opens. Only a missing/unreadable container or manifest is fatal.

use std::{
    collections::HashSet,
    io::{Cursor, Read, Seek, Write},
    sync::Arc,
};

use anyhow::Context as _;
use zip::{ZipArchive, ZipWriter, write::SimpleFileOptions};

use crate::{
    assets::media::sniff_media,
    assets::store::{BlobHandle, BlobStore},
    deck::slide::SlideRecord,
    foundation::core::unix_millis,
    foundation::error::{DeckError, DeckResult},
    project::manifest::{ASSETS_DIR, AudioEntry, FORMAT_VERSION, MANIFEST_ENTRY, ProjectManifest},
};

/// Compression applied to archive entries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Compression {
    /// Deflate every entry.
    #[default]
    Deflated,
    /// Store entries uncompressed.
    Stored,
}

impl Compression {
    fn method(self) -> zip::CompressionMethod {
        match self {
            Compression::Deflated => zip::CompressionMethod::Deflated,
            Compression::Stored => zip::CompressionMethod::Stored,
        }
    }
}

/// Options for [`serialize_project`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArchiveOpts {
    /// Entry compression.
    pub compression: Compression,
    /// Indent `project.json`.
    pub pretty_manifest: bool,
    /// Fixed creation time; `None` reads the wall clock.
    pub timestamp_ms: Option<u64>,
    /// Display name recorded for the embedded audio track.
    pub audio_display_name: String,
}

impl Default for ArchiveOpts {
    fn default() -> Self {
        Self {
            compression: Compression::Deflated,
            pretty_manifest: true,
            timestamp_ms: None,
            audio_display_name: "music.mp3".to_string(),
        }
    }
}

/// A project reconstructed from archive bytes.
///
/// Every local handle in here was freshly minted by the store passed to [`deserialize_project`];
/// the caller owns them and must release them when the project is replaced.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadedProject {
    /// Manifest version tag.
    pub version: String,
    /// Manifest creation time (ms since epoch).
    pub timestamp: u64,
    /// Slides in manifest order; embedded images now point at local handles.
    pub slides: Vec<SlideRecord>,
    /// Handle to the shared audio track, if it could be restored.
    pub audio: Option<BlobHandle>,
    /// Display name of the audio track as recorded in the manifest.
    pub audio_display_name: Option<String>,
    minted: Vec<BlobHandle>,
}

impl LoadedProject {
    /// Every handle this load minted in the store, in creation order.
    pub fn handles(&self) -> Vec<BlobHandle> {
        self.minted.clone()
    }
}

/// One entry of an archive listing.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ArchiveEntryInfo {
    /// Entry name.
    pub name: String,
    /// Uncompressed size in bytes.
    pub size: u64,
    /// Compressed size in bytes.
    pub compressed_size: u64,
}

/// Manifest and entry listing of an archive, without materializing any asset.
#[derive(Clone, Debug, PartialEq)]
pub struct ArchiveSummary {
    /// Parsed manifest (asset paths untouched).
    pub manifest: ProjectManifest,
    /// All container entries in archive order.
    pub entries: Vec<ArchiveEntryInfo>,
}

/// Serialize `slides` and the optional shared `audio` reference into `.ppproj` bytes.
///
/// Local (`blob:`) images and audio are embedded under `assets/` and the manifest copy of each
/// slide is rewritten to point at its entry; the caller's slides are not touched. An asset whose
/// bytes cannot be read is skipped with a warning and recorded as `null`. Non-local references
/// are written through unchanged.
#[tracing::instrument(skip_all, fields(slides = slides.len()))]
pub fn serialize_project<S>(
    slides: &[SlideRecord],
    audio: Option<&str>,
    store: &S,
    opts: &ArchiveOpts,
) -> DeckResult<Vec<u8>>
where
    S: BlobStore + ?Sized,
{
    let ts = opts.timestamp_ms.unwrap_or_else(unix_millis);
    let mut names = EntryNames::default();
    let mut assets = Vec::<(String, Arc<Vec<u8>>)>::new();

    let mut out_slides = Vec::with_capacity(slides.len());
    for slide in slides {
        let mut s = slide.clone();
        if let Some(reference) = slide.custom_image.as_deref().filter(|r| store.is_local(r)) {
            s.custom_image = match read_local(store, reference) {
                Ok(bytes) => {
                    let path = names.claim(&format!("img_{}_{ts}", file_safe(&slide.id)));
                    assets.push((path.clone(), bytes));
                    Some(path)
                }
                Err(e) => {
                    tracing::warn!(slide = %slide.id, error = %e, "skipping slide image");
                    None
                }
            };
        }
        out_slides.push(s);
    }

    let audio_entry = match audio.filter(|r| store.is_local(r)) {
        None => None,
        Some(reference) => match read_local(store, reference) {
            Ok(bytes) => {
                let path = names.claim(&format!("music_{ts}"));
                assets.push((path.clone(), bytes));
                Some(AudioEntry {
                    path,
                    display_name: opts.audio_display_name.clone(),
                })
            }
            Err(e) => {
                tracing::warn!(error = %e, "skipping project audio");
                None
            }
        },
    };

    let manifest = ProjectManifest {
        version: FORMAT_VERSION.to_string(),
        slides: out_slides,
        audio: audio_entry,
        timestamp: ts,
    };
    let manifest_json = if opts.pretty_manifest {
        serde_json::to_vec_pretty(&manifest)
    } else {
        serde_json::to_vec(&manifest)
    }
    .map_err(|e| DeckError::serde(format!("encode manifest: {e}")))?;

    let options = SimpleFileOptions::default().compression_method(opts.compression.method());
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    write_entry(&mut zip, MANIFEST_ENTRY, &manifest_json, options)?;
    for (path, bytes) in &assets {
        write_entry(&mut zip, path, bytes, options)?;
    }
    let cursor = zip.finish().context("finalize project archive")?;

    tracing::debug!(assets = assets.len(), "project serialized");
    Ok(cursor.into_inner())
}

/// Rebuild a project from `.ppproj` bytes, minting fresh handles in `store`.
///
/// Fails with [`DeckError::InvalidProject`] when the container cannot be opened or the manifest
/// is missing, unparseable or has no slides; no handle is created in that case. Individual assets
/// that cannot be extracted leave their field `None`, as do local handles left over from the
/// session that wrote the archive.
#[tracing::instrument(skip_all, fields(bytes = bytes.len()))]
pub fn deserialize_project<S>(bytes: &[u8], store: &mut S) -> DeckResult<LoadedProject>
where
    S: BlobStore + ?Sized,
{
    let mut archive = open_archive(bytes)?;
    let manifest = read_manifest(&mut archive)?;
    if !manifest.is_same_major_version() {
        tracing::warn!(version = %manifest.version, "project written by a different format version");
    }

    let mut minted = Vec::new();
    let mut slides = Vec::with_capacity(manifest.slides.len());
    for mut slide in manifest.slides {
        if let Some(path) = slide
            .custom_image
            .take_if(|r| r.starts_with(ASSETS_DIR))
        {
            slide.custom_image = match materialize(&mut archive, &path, store) {
                Ok(handle) => {
                    minted.push(handle.clone());
                    Some(handle.into_string())
                }
                Err(e) => {
                    tracing::warn!(slide = %slide.id, %path, error = %e, "dropping slide image");
                    None
                }
            };
        } else if let Some(stale) = slide.custom_image.take_if(|r| store.is_local(r)) {
            // Handle from the session that wrote the archive; it cannot resolve here.
            tracing::warn!(slide = %slide.id, reference = %stale, "dropping stale image handle");
        }
        slides.push(slide);
    }

    let mut audio_display_name = None;
    let audio = match manifest.audio.filter(|a| !a.path.is_empty()) {
        None => None,
        Some(entry) => {
            audio_display_name = Some(entry.display_name.clone());
            match materialize(&mut archive, &entry.path, store) {
                Ok(handle) => {
                    minted.push(handle.clone());
                    Some(handle)
                }
                Err(e) => {
                    tracing::warn!(path = %entry.path, error = %e, "dropping project audio");
                    None
                }
            }
        }
    };

    Ok(LoadedProject {
        version: manifest.version,
        timestamp: manifest.timestamp,
        slides,
        audio,
        audio_display_name,
        minted,
    })
}

/// Read the manifest and list entries without touching any blob store.
pub fn inspect_project(bytes: &[u8]) -> DeckResult<ArchiveSummary> {
    let mut archive = open_archive(bytes)?;
    let manifest = read_manifest(&mut archive)?;
    let mut entries = Vec::with_capacity(archive.len());
    for i in 0..archive.len() {
        let file = archive
            .by_index(i)
            .map_err(|e| DeckError::invalid_project(format!("unreadable entry #{i}: {e}")))?;
        entries.push(ArchiveEntryInfo {
            name: file.name().to_string(),
            size: file.size(),
            compressed_size: file.compressed_size(),
        });
    }
    Ok(ArchiveSummary { manifest, entries })
}

fn open_archive(bytes: &[u8]) -> DeckResult<ZipArchive<Cursor<&[u8]>>> {
    ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| DeckError::invalid_project(format!("not a project container: {e}")))
}

fn read_manifest<R: Read + Seek>(archive: &mut ZipArchive<R>) -> DeckResult<ProjectManifest> {
    let mut file = archive
        .by_name(MANIFEST_ENTRY)
        .map_err(|_| DeckError::invalid_project(format!("missing {MANIFEST_ENTRY}")))?;
    let mut text = String::new();
    file.read_to_string(&mut text)
        .map_err(|e| DeckError::invalid_project(format!("unreadable {MANIFEST_ENTRY}: {e}")))?;

    let manifest: ProjectManifest = serde_json::from_str(&text)
        .map_err(|e| DeckError::invalid_project(format!("malformed {MANIFEST_ENTRY}: {e}")))?;
    if manifest.slides.is_empty() {
        return Err(DeckError::invalid_project("project contains no slides"));
    }
    Ok(manifest)
}

fn materialize<R, S>(
    archive: &mut ZipArchive<R>,
    path: &str,
    store: &mut S,
) -> DeckResult<BlobHandle>
where
    R: Read + Seek,
    S: BlobStore + ?Sized,
{
    let mut file = archive
        .by_name(path)
        .map_err(|e| DeckError::asset(format!("entry '{path}': {e}")))?;
    let mut bytes = Vec::with_capacity(usize::try_from(file.size()).unwrap_or(0));
    file.read_to_end(&mut bytes)
        .map_err(|e| DeckError::asset(format!("read entry '{path}': {e}")))?;
    let media = sniff_media(&bytes);
    store.create(bytes, Some(media.mime))
}

fn read_local<S: BlobStore + ?Sized>(store: &S, reference: &str) -> DeckResult<Arc<Vec<u8>>> {
    let handle = BlobHandle::parse(reference)
        .ok_or_else(|| DeckError::asset(format!("'{reference}' is not a blob handle")))?;
    store.read(&handle)
}

fn write_entry<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    name: &str,
    bytes: &[u8],
    options: SimpleFileOptions,
) -> DeckResult<()> {
    zip.start_file(name, options)
        .with_context(|| format!("start archive entry '{name}'"))?;
    zip.write_all(bytes)
        .with_context(|| format!("write archive entry '{name}'"))?;
    Ok(())
}

#[derive(Default)]
struct EntryNames {
    taken: HashSet<String>,
}

impl EntryNames {
    /// Reserve `assets/<stem>.bin`, suffixing `_2`, `_3`, ... on collision.
    fn claim(&mut self, stem: &str) -> String {
        let mut path = format!("{ASSETS_DIR}{stem}.bin");
        let mut n = 2;
        while self.taken.contains(&path) {
            path = format!("{ASSETS_DIR}{stem}_{n}.bin");
            n += 1;
        }
        self.taken.insert(path.clone());
        path
    }
}

fn file_safe(id: &str) -> String {
    id.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/project/codec.rs"]
mod tests;
