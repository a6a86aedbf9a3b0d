//! Reply envelope codec

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::errors::Result;

/// JavaScript function in the page that renders a reply
pub const TALK_FUNCTION: &str = "chatWindow.talk";

/// Inner payload of a reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Says {
    pub says: Vec<String>,
}

/// `{"message":{"says":[...]}}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    pub message: Says,
}

impl Envelope {
    pub fn new<S: AsRef<str>>(messages: &[S]) -> Self {
        Self {
            message: Says {
                says: messages.iter().map(|m| m.as_ref().to_string()).collect(),
            },
        }
    }
}

/// Serialize `messages` into the reply envelope
pub fn encode<S: AsRef<str>>(messages: &[S]) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(&Envelope::new(messages))?)
}

/// Script that hands the envelope to the page
pub fn reply_script<S: AsRef<str>>(messages: &[S]) -> Result<String> {
    let envelope = serde_json::to_string(&Envelope::new(messages))?;
    Ok(format!("{}({}, \"message\")", TALK_FUNCTION, envelope))
}

/// Somewhere a script can be evaluated, normally the page's JS context
pub trait ReplySink: Send + Sync {
    fn eval(&self, script: &str) -> Result<()>;
}

impl<T: ReplySink + ?Sized> ReplySink for Arc<T> {
    fn eval(&self, script: &str) -> Result<()> {
        (**self).eval(script)
    }
}

/// Push `messages` into the page. Failures are logged and the reply dropped.
pub fn send_reply<S: AsRef<str>>(sink: &dyn ReplySink, messages: &[S]) {
    let script = match reply_script(messages) {
        Ok(script) => script,
        Err(e) => {
            log::warn!("send_reply: envelope serialization failed: {}", e);
            return;
        }
    };

    if let Err(e) = sink.eval(&script) {
        log::warn!("send_reply: script evaluation failed: {}", e);
    }
}
