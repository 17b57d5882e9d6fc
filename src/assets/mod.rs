/// Content sniffing and relative path normalization.
pub mod media;
/// Blob handles and the blob store collaborator.
pub mod store;
