/// State management module
///
/// This module handles all application state, including:
/// - Shared data structures (data.rs)
/// - The catalog state and its derived views (catalog.rs)
/// - The watch-later list (watch_later.rs)
/// - The local key-value store (store.rs)
/// - Sample data used when the source is down (fallback.rs)

pub mod catalog;
pub mod data;
pub mod fallback;
pub mod store;
pub mod watch_later;
