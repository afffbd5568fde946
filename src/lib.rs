pub mod config;
pub mod dom;
pub mod format;
pub mod manifest;
pub mod report;
pub mod request;

#[cfg(target_arch = "wasm32")]
pub mod wasm;
