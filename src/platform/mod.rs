//! Platform abstraction layer
//!
//! Handles browser/native differences for storage:
//! - LocalStorage on web
//! - A directory of JSON files on native

#[cfg(not(target_arch = "wasm32"))]
mod file;
#[cfg(target_arch = "wasm32")]
mod local;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStorage;
#[cfg(target_arch = "wasm32")]
pub use local::LocalStorage;
