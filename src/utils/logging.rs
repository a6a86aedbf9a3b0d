//! Logging initialization for homo-webview

use anyhow::Result;
use chrono::{DateTime, Local};
use env_logger::{Builder, Env, WriteStyle};
use std::io::Write;

/// Wall-clock format used in every log line
pub const TIMESTAMP_FORMAT: &str = "%H:%M:%S";

/// Install the process logger: colored output, `%H:%M:%S` timestamps,
/// level from `RUST_LOG` (default `info`). Later calls are no-ops.
pub fn init_logging() -> Result<()> {
    let result = Builder::from_env(Env::default().default_filter_or("info"))
        .write_style(WriteStyle::Always)
        .format(|buf, record| {
            let style = buf.default_level_style(record.level());
            writeln!(
                buf,
                "{} {style}{:<5}{style:#} {}",
                format_timestamp(&Local::now()),
                record.level(),
                record.args()
            )
        })
        .try_init();

    if let Err(e) = result {
        log::debug!("Logger already initialized: {}", e);
        return Ok(());
    }

    log_panics::init();

    log::debug!("homo-webview logging initialized");
    Ok(())
}

pub fn format_timestamp(time: &DateTime<Local>) -> String {
    time.format(TIMESTAMP_FORMAT).to_string()
}
