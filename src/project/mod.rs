//! Project archive (`.ppproj`) encoding and the editing session built on it.

/// Archive serialization and deserialization.
pub mod codec;
/// `project.json` document model.
pub mod manifest;
/// Handle-owning editing session.
pub mod session;
