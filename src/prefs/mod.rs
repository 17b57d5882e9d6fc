/// Key-value preference persistence and the UI theme.
pub mod store;
