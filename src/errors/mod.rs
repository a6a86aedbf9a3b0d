//! Error types for homo-webview

pub mod types;

pub use types::*;
