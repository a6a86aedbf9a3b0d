//! Local asset server
//!
//! Serves the [`AssetStore`](crate::assets::AssetStore) over HTTP on a
//! loopback address with an OS-assigned port.

pub mod app;
pub mod middleware;
pub mod routes;

pub use app::*;

use crate::assets::AssetStore;
use crate::errors::Result;
use std::sync::Arc;

/// Start the asset server in the background and return its base URL.
///
/// Must be called from within a tokio runtime. The server is supervised:
/// if its accept loop ever ends, the process exits.
pub fn start_server(store: Arc<AssetStore>) -> Result<String> {
    let server = AssetServer::start(store)?;
    let url = server.url();
    server.supervise();
    Ok(url)
}
