/// Presentation cursor and auto-advance scheduling.
pub mod player;
/// Auto-advance delay bounds and presentation timing.
pub mod timer;
