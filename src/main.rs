fn main() {
    if let Err(e) = homo_webview::cli::run() {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}
