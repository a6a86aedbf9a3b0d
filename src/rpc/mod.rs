//! UI to host messaging
//!
//! The page posts raw strings over the webview IPC channel. The
//! [`Dispatcher`] matches them by prefix and answers through a
//! [`ReplySink`], which pushes a JSON envelope back into the page.

pub mod dispatcher;
pub mod reply;

pub use dispatcher::*;
pub use reply::*;
