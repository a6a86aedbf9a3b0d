//! Request middleware for the asset server

pub mod logging;
