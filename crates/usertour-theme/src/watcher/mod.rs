//! File watcher for live theme preview.
//!
//! Uses the `notify` crate to watch a theme file for changes, with a 500ms
//! debounce. [`ThemeReloader`] feeds every reload into a preview pipeline.

mod file_watcher;
mod reloader;


pub use file_watcher::ThemeFileWatcher;
pub use reloader::ThemeReloader;
