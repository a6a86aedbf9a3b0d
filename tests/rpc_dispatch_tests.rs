//! Dispatcher and reply tests using a recording sink in place of the webview

use homo_webview::errors::{HomoError, Result};
use homo_webview::rpc::{
    Dispatcher, Envelope, GREETING, MESSAGE_PREFIX, MessageHandler, ReplySink, send_reply,
};
use std::sync::{Arc, Mutex};

/// Records every script instead of evaluating it
#[derive(Default)]
struct RecordingSink {
    scripts: Mutex<Vec<String>>,
}

impl RecordingSink {
    fn scripts(&self) -> Vec<String> {
        self.scripts.lock().unwrap().clone()
    }
}

impl ReplySink for RecordingSink {
    fn eval(&self, script: &str) -> Result<()> {
        self.scripts.lock().unwrap().push(script.to_string());
        Ok(())
    }
}

/// Sink whose page has gone away
struct ClosedSink;

impl ReplySink for ClosedSink {
    fn eval(&self, _script: &str) -> Result<()> {
        Err(HomoError::Script("event loop closed".to_string()))
    }
}

/// Pull the envelope back out of `chatWindow.talk(<json>, "message")`
fn envelope_of(script: &str) -> Envelope {
    let json = script
        .strip_prefix("chatWindow.talk(")
        .and_then(|rest| rest.strip_suffix(", \"message\")"))
        .expect("unexpected reply script shape");
    serde_json::from_str(json).unwrap()
}

#[test]
fn test_message_gets_canned_reply() {
    let sink = Arc::new(RecordingSink::default());
    let dispatcher = Dispatcher::with_default_routes(sink.clone());

    dispatcher.on_message("message:hello");

    let scripts = sink.scripts();
    assert_eq!(scripts.len(), 1);
    assert_eq!(envelope_of(&scripts[0]).message.says, vec![GREETING.to_string()]);
}

#[test]
fn test_reply_ignores_user_text() {
    let sink = Arc::new(RecordingSink::default());
    let dispatcher = Dispatcher::with_default_routes(sink.clone());

    for text in ["", "hello", "你好吗", "message:nested", "a\nb"] {
        dispatcher.on_message(&format!("{}{}", MESSAGE_PREFIX, text));
    }

    let scripts = sink.scripts();
    assert_eq!(scripts.len(), 5);
    assert!(scripts.iter().all(|s| s == &scripts[0]));
}

#[test]
fn test_unrecognized_payloads_do_nothing() {
    let sink = Arc::new(RecordingSink::default());
    let dispatcher = Dispatcher::with_default_routes(sink.clone());

    for raw in ["ping", "", "message", " message:hi", "MESSAGE:hi", "msg:hi"] {
        assert!(!dispatcher.dispatch(raw), "{:?} should not match", raw);
    }
    assert!(sink.scripts().is_empty());
}

#[test]
fn test_closed_sink_is_swallowed() {
    let dispatcher = Dispatcher::with_default_routes(ClosedSink);
    assert!(dispatcher.dispatch("message:hello"));
}

#[test]
fn test_send_reply_script_shape() {
    let sink = RecordingSink::default();
    send_reply(&sink, &["one", "two"]);

    assert_eq!(
        sink.scripts(),
        vec![r#"chatWindow.talk({"message":{"says":["one","two"]}}, "message")"#.to_string()]
    );
}

#[test]
fn test_additional_routes_extend_dispatch() {
    let sink = Arc::new(RecordingSink::default());
    let dispatcher = Dispatcher::with_default_routes(sink.clone())
        .route("echo:", |text, sink| send_reply(sink, &[text]));

    assert!(dispatcher.dispatch("echo:round trip"));
    assert!(dispatcher.dispatch("message:hi"));

    let scripts = sink.scripts();
    assert_eq!(envelope_of(&scripts[0]).message.says, vec!["round trip"]);
    assert_eq!(envelope_of(&scripts[1]).message.says, vec![GREETING]);
}
