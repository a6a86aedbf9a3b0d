//! Command Line Interface module

pub mod args;

pub use args::*;

use anyhow::Result;

/// Parse arguments and run the window until it is closed
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    crate::window::launch(cli.debug)
}
