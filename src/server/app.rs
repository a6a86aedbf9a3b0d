//! Asset server implementation

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::task::JoinHandle;
use warp::Filter;

use crate::assets::AssetStore;
use crate::config::ServerConfig;
use crate::errors::{HomoError, Result};

/// A running asset server
pub struct AssetServer {
    addr: SocketAddr,
    task: JoinHandle<()>,
}

impl AssetServer {
    /// Bind on loopback with an ephemeral port and spawn the accept loop
    pub fn start(store: Arc<AssetStore>) -> Result<Self> {
        Self::start_with_config(&ServerConfig::default(), store)
    }

    pub fn start_with_config(config: &ServerConfig, store: Arc<AssetStore>) -> Result<Self> {
        if !config.bind_address.is_loopback() {
            return Err(HomoError::Bind(format!(
                "refusing to bind non-loopback address {}",
                config.bind_address
            )));
        }

        let logging = crate::server::middleware::logging::with_request_logging();
        let routes = crate::server::routes::create_routes(store).with(logging);

        let (addr, server) = warp::serve(routes).try_bind_ephemeral(config.socket_addr())?;
        log::info!("Asset server listening on http://{}", addr);

        let task = tokio::spawn(server);
        Ok(Self { addr, task })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Base URL of the server, e.g. `http://127.0.0.1:49152`
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Watch the accept loop for the rest of the process; its end is fatal
    pub fn supervise(self) {
        let task = self.task;
        tokio::spawn(async move {
            match task.await {
                Ok(()) => log::error!("Asset server stopped accepting connections"),
                // Runtime shutdown, not a server failure
                Err(e) if e.is_cancelled() => return,
                Err(e) => log::error!("Asset server task failed: {}", e),
            }
            std::process::exit(1);
        });
    }

    /// Stop the accept loop without exiting
    pub fn abort(self) {
        self.task.abort();
    }
}
