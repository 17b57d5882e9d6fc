use std::{collections::HashMap, sync::Arc};

use crate::foundation::error::{DeckError, DeckResult};

/// Prefix shared by every session-local binary resource handle.
pub const BLOB_PREFIX: &str = "blob:";

#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
/// Locally dereferenceable handle to binary data held by a [`BlobStore`].
///
/// Handles are only meaningful for the store (and session) that minted them.
pub struct BlobHandle(String);

impl BlobHandle {
    /// Interpret `reference` as a handle if it carries the [`BLOB_PREFIX`].
    pub fn parse(reference: &str) -> Option<Self> {
        reference
            .starts_with(BLOB_PREFIX)
            .then(|| Self(reference.to_string()))
    }

    /// Handle text, as stored in slide records.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the handle text.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for BlobHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Binary-resource collaborator: turns bytes into handles and back.
///
/// Every handle returned by [`BlobStore::create`] stays alive until [`BlobStore::release`] is
/// called for it; the store never frees handles on its own.
pub trait BlobStore {
    /// Store `bytes` and mint a fresh handle.
    fn create(&mut self, bytes: Vec<u8>, mime: Option<&str>) -> DeckResult<BlobHandle>;

    /// Fetch the bytes behind `handle`.
    fn read(&self, handle: &BlobHandle) -> DeckResult<Arc<Vec<u8>>>;

    /// Free `handle`. Returns `false` if it was unknown or already released.
    fn release(&mut self, handle: &BlobHandle) -> bool;

    /// Whether `reference` names a session-local resource this kind of store manages.
    fn is_local(&self, reference: &str) -> bool {
        reference.starts_with(BLOB_PREFIX)
    }
}

#[derive(Clone, Debug)]
struct StoredBlob {
    bytes: Arc<Vec<u8>>,
    mime: Option<String>,
}

/// In-process [`BlobStore`] handing out `blob:ppdeck/<n>` handles.
///
/// Handle numbers are never reused, so a released handle cannot alias newer data.
#[derive(Clone, Debug, Default)]
pub struct MemoryBlobStore {
    next_id: u64,
    blobs: HashMap<String, StoredBlob>,
}

impl MemoryBlobStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live handles.
    pub fn len(&self) -> usize {
        self.blobs.len()
    }

    /// Whether no handle is live.
    pub fn is_empty(&self) -> bool {
        self.blobs.is_empty()
    }

    /// Sum of the byte lengths of all live blobs.
    pub fn total_bytes(&self) -> usize {
        self.blobs.values().map(|b| b.bytes.len()).sum()
    }

    /// Whether `handle` is still live.
    pub fn contains(&self, handle: &BlobHandle) -> bool {
        self.blobs.contains_key(handle.as_str())
    }

    /// MIME type recorded at creation, if any.
    pub fn mime(&self, handle: &BlobHandle) -> Option<&str> {
        self.blobs.get(handle.as_str())?.mime.as_deref()
    }
}

impl BlobStore for MemoryBlobStore {
    fn create(&mut self, bytes: Vec<u8>, mime: Option<&str>) -> DeckResult<BlobHandle> {
        self.next_id += 1;
        let handle = BlobHandle(format!("{BLOB_PREFIX}ppdeck/{}", self.next_id));
        tracing::debug!(%handle, len = bytes.len(), "blob created");
        self.blobs.insert(
            handle.0.clone(),
            StoredBlob {
                bytes: Arc::new(bytes),
                mime: mime.map(str::to_owned),
            },
        );
        Ok(handle)
    }

    fn read(&self, handle: &BlobHandle) -> DeckResult<Arc<Vec<u8>>> {
        self.blobs
            .get(handle.as_str())
            .map(|b| Arc::clone(&b.bytes))
            .ok_or_else(|| DeckError::asset(format!("unknown or released blob '{handle}'")))
    }

    fn release(&mut self, handle: &BlobHandle) -> bool {
        let released = self.blobs.remove(handle.as_str()).is_some();
        if released {
            tracing::debug!(%handle, "blob released");
        }
        released
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/store.rs"]
mod tests;
