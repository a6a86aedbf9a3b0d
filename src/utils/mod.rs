//! Utility functions and helpers used throughout homo-webview

pub mod logging;
