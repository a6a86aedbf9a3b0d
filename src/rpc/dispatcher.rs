//! Prefix-based dispatch of UI payloads

use super::reply::{ReplySink, send_reply};

/// Prefix of chat messages typed by the user
pub const MESSAGE_PREFIX: &str = "message:";

/// Fixed acknowledgement sent for every chat message
pub const GREETING: &str = "你好";

/// Receiver of raw strings posted by the page
pub trait MessageHandler {
    fn on_message(&self, raw: &str);
}

/// Handler for one prefix; receives the payload with the prefix removed
pub type RouteHandler = Box<dyn Fn(&str, &dyn ReplySink) + Send + Sync>;

struct Route {
    prefix: String,
    handler: RouteHandler,
}

/// Ordered list of (prefix, handler) routes; the first match wins
pub struct Dispatcher<S: ReplySink> {
    sink: S,
    routes: Vec<Route>,
}

impl<S: ReplySink> Dispatcher<S> {
    /// Dispatcher with no routes
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            routes: Vec::new(),
        }
    }

    /// Dispatcher answering `message:` payloads with [`GREETING`]
    pub fn with_default_routes(sink: S) -> Self {
        Self::new(sink).route(MESSAGE_PREFIX, handle_chat_message)
    }

    /// Append a route matched after all existing ones
    pub fn route<F>(mut self, prefix: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&str, &dyn ReplySink) + Send + Sync + 'static,
    {
        self.routes.push(Route {
            prefix: prefix.into(),
            handler: Box::new(handler),
        });
        self
    }

    /// Route `raw` to the first matching handler. Returns whether one ran;
    /// unmatched payloads are ignored without logging.
    pub fn dispatch(&self, raw: &str) -> bool {
        for route in &self.routes {
            if let Some(rest) = raw.strip_prefix(route.prefix.as_str()) {
                (route.handler)(rest, &self.sink);
                return true;
            }
        }
        false
    }

    pub fn prefixes(&self) -> Vec<&str> {
        self.routes.iter().map(|r| r.prefix.as_str()).collect()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

impl<S: ReplySink> MessageHandler for Dispatcher<S> {
    fn on_message(&self, raw: &str) {
        self.dispatch(raw);
    }
}

fn handle_chat_message(text: &str, sink: &dyn ReplySink) {
    log::info!("sent message: {}", text);
    send_reply(sink, &[GREETING]);
}
