//! Configuration management for homo-webview

pub mod app_config;

pub use app_config::*;
