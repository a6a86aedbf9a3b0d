//! HTTP routes for the asset server

pub mod static_files;

use crate::assets::AssetStore;
use std::sync::Arc;

/// Create all server routes
pub fn create_routes(
    store: Arc<AssetStore>,
) -> impl warp::Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    static_files::create_static_routes(store)
}
