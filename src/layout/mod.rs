//! Virtual-canvas coordinate engine.
//!
//! All persisted geometry lives on a fixed 1920x1080 virtual canvas; rendering multiplies by a
//! single uniform scale factor derived from the viewport width.

/// Clamping, snapping and scale computation on the virtual canvas.
pub mod canvas;
/// Pointer-driven move and resize of text blocks.
pub mod interaction;
/// Stored-layout resolution, including migration of percentage-based layouts.
pub mod placement;
