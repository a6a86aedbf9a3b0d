//! Command line parsing tests

use clap::{CommandFactory, Parser};
use homo_webview::cli::Cli;
use std::sync::Mutex;

const DEBUG_ENV: &str = "HOMO_WEBVIEW_DEBUG";

/// Serializes every test in this binary that parses arguments, since
/// parsing reads `HOMO_WEBVIEW_DEBUG` from the process environment
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn set_debug_env(value: Option<&str>) {
    // SAFETY: callers hold ENV_LOCK, and nothing else in this binary
    // touches the environment
    unsafe {
        match value {
            Some(value) => std::env::set_var(DEBUG_ENV, value),
            None => std::env::remove_var(DEBUG_ENV),
        }
    }
}

#[test]
fn test_debug_defaults_off() {
    let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let saved = std::env::var(DEBUG_ENV).ok();
    set_debug_env(None);

    let cli = Cli::try_parse_from(["homo-webview"]).unwrap();
    assert!(!cli.debug);

    set_debug_env(saved.as_deref());
}

#[test]
fn test_debug_env_override_accepts_boolish_values() {
    let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let saved = std::env::var(DEBUG_ENV).ok();

    let cases = [
        ("1", true),
        ("true", true),
        ("TRUE", true),
        ("t", true),
        ("yes", true),
        ("0", false),
        ("false", false),
        ("f", false),
        ("off", false),
    ];
    for (value, expected) in cases {
        set_debug_env(Some(value));
        let cli = Cli::try_parse_from(["homo-webview"])
            .unwrap_or_else(|e| panic!("{}={} rejected: {}", DEBUG_ENV, value, e));
        assert_eq!(cli.debug, expected, "{}={}", DEBUG_ENV, value);
    }

    // The command line flag still wins over a false environment value
    set_debug_env(Some("0"));
    let cli = Cli::try_parse_from(["homo-webview", "--debug"]).unwrap();
    assert!(cli.debug);

    set_debug_env(saved.as_deref());
}

#[test]
fn test_debug_long_and_short_flags() {
    let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());

    let cli = Cli::try_parse_from(["homo-webview", "--debug"]).unwrap();
    assert!(cli.debug);

    let cli = Cli::try_parse_from(["homo-webview", "-d"]).unwrap();
    assert!(cli.debug);
}

#[test]
fn test_unknown_arguments_rejected() {
    let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());

    assert!(Cli::try_parse_from(["homo-webview", "--port", "8080"]).is_err());
    assert!(Cli::try_parse_from(["homo-webview", "serve"]).is_err());
}

#[test]
fn test_cli_definition_is_valid() {
    Cli::command().debug_assert();

    let command = Cli::command();
    assert_eq!(command.get_name(), homo_webview::APP_NAME);
    assert_eq!(command.get_version(), Some(homo_webview::VERSION));

    let debug = command
        .get_arguments()
        .find(|arg| arg.get_id() == "debug")
        .unwrap();
    assert_eq!(debug.get_env(), Some(std::ffi::OsStr::new(DEBUG_ENV)));
}
