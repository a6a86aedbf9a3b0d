//! homo-webview - chat window shell
//!
//! Opens a native webview on a loopback HTTP server that serves the bundled
//! UI, and answers messages posted by the page over the IPC channel.

pub mod assets;
pub mod cli;
pub mod config;
pub mod errors;
pub mod rpc;
pub mod server;
pub mod utils;
pub mod window;

// Re-export commonly used types
pub use assets::AssetStore;
pub use errors::*;
pub use rpc::{Dispatcher, MessageHandler, ReplySink};

/// homo-webview version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "homo-webview";
