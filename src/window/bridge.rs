//! Bridge from the IPC callback back into the page
//!
//! Webviews are tied to the event-loop thread, so replies are sent as user
//! events through the loop's proxy and evaluated there.

use std::sync::Mutex;
use tao::event_loop::EventLoopProxy;

use crate::errors::{HomoError, Result};
use crate::rpc::ReplySink;

/// Events delivered to the window's event loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserEvent {
    /// Evaluate a script in the page
    EvaluateScript(String),
}

/// [`ReplySink`] that forwards scripts to the event loop
pub struct ScriptProxy {
    proxy: Mutex<EventLoopProxy<UserEvent>>,
}

impl ScriptProxy {
    pub fn new(proxy: EventLoopProxy<UserEvent>) -> Self {
        Self {
            proxy: Mutex::new(proxy),
        }
    }
}

impl ReplySink for ScriptProxy {
    fn eval(&self, script: &str) -> Result<()> {
        let proxy = self
            .proxy
            .lock()
            .map_err(|_| HomoError::Script("event loop proxy lock poisoned".to_string()))?;
        proxy
            .send_event(UserEvent::EvaluateScript(script.to_string()))
            .map_err(|_| HomoError::Script("event loop closed".to_string()))
    }
}
