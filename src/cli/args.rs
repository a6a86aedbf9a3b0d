//! Command line argument parsing

use clap::Parser;
use clap::builder::BoolishValueParser;

#[derive(Parser, Debug)]
#[command(author, long_about = None)]
#[command(name = crate::APP_NAME, version = crate::VERSION)]
#[command(about = "Homo chat window backed by a loopback asset server")]
pub struct Cli {
    /// Start homo webview in debug mode
    #[arg(
        short = 'd',
        long = "debug",
        env = "HOMO_WEBVIEW_DEBUG",
        action = clap::ArgAction::SetTrue,
        value_parser = BoolishValueParser::new()
    )]
    pub debug: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
