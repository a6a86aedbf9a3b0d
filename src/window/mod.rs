//! Embedded webview window

pub mod bridge;
pub mod launcher;

pub use bridge::*;
pub use launcher::*;
