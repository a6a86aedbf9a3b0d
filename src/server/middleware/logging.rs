//! HTTP request logging middleware

/// Create a request logging filter using warp's built-in logging
pub fn with_request_logging() -> warp::filters::log::Log<impl Fn(warp::filters::log::Info) + Clone>
{
    warp::log::custom(|info| {
        let status = info.status();
        let elapsed_ms = info.elapsed().as_millis();

        if status.is_client_error() || status.is_server_error() {
            log::debug!(
                "{} {} - {} {}ms",
                info.method(),
                info.path(),
                status,
                elapsed_ms
            );
        } else {
            log::trace!(
                "{} {} - {} {}ms",
                info.method(),
                info.path(),
                status,
                elapsed_ms
            );
        }
    })
}
