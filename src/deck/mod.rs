//! Slide records and the ordered slide collection.

/// Never-empty ordered slide collection.
pub mod collection;
pub(crate) mod lenient;
/// Persisted slide record.
pub mod slide;
/// Transition and text animation tokens.
pub mod tokens;
