/// Shared geometry types and canvas constants.
pub mod core;
/// Error type and result alias.
pub mod error;
