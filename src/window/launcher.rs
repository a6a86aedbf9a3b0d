//! Window launcher
//!
//! Starts the asset server, opens the webview window on it and blocks on
//! the event loop until the window is closed.

use anyhow::Result;
use std::sync::Arc;
use tao::{
    dpi::LogicalSize,
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop, EventLoopBuilder},
    platform::run_return::EventLoopExtRunReturn,
    window::{Window, WindowBuilder},
};
use wry::{WebView, WebViewBuilder};

use super::bridge::{ScriptProxy, UserEvent};
use crate::assets::AssetStore;
use crate::config::WindowConfig;
use crate::rpc::{Dispatcher, MessageHandler};

/// Lifecycle of a launch; transitions are strictly linear
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchState {
    Init,
    ServerStarted,
    WindowRunning,
    Closed,
}

impl LaunchState {
    /// Next state; `Closed` is terminal
    pub fn advance(self) -> Self {
        match self {
            LaunchState::Init => LaunchState::ServerStarted,
            LaunchState::ServerStarted => LaunchState::WindowRunning,
            LaunchState::WindowRunning | LaunchState::Closed => LaunchState::Closed,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == LaunchState::Closed
    }
}

/// Window and webview kept alive for the duration of the event loop.
/// Dropping it releases both, the webview first.
pub struct WindowSession {
    webview: WebView,
    window: Window,
}

impl WindowSession {
    pub fn webview(&self) -> &WebView {
        &self.webview
    }

    pub fn window(&self) -> &Window {
        &self.window
    }
}

impl Drop for WindowSession {
    fn drop(&mut self) {
        log::debug!("Releasing window resources");
    }
}

/// Launch the chat window and block until it is closed
pub fn launch(debug: bool) -> Result<()> {
    crate::utils::logging::init_logging()?;

    let mut state = LaunchState::Init;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("homo-assets")
        .build()?;

    let url = {
        let _guard = runtime.enter();
        crate::server::start_server(Arc::new(AssetStore::bundled()))?
    };
    state = transition(state);

    if debug {
        log::info!("Running in debug mode");
    }

    let config = WindowConfig::for_url(url, debug);
    let mut event_loop = EventLoopBuilder::<UserEvent>::with_user_event().build();
    let dispatcher = Dispatcher::with_default_routes(ScriptProxy::new(event_loop.create_proxy()));
    let session = open_window(&config, &event_loop, dispatcher)?;
    state = transition(state);

    run_event_loop(&mut event_loop, &session);

    drop(session);
    transition(state);

    runtime.shutdown_background();
    Ok(())
}

fn transition(state: LaunchState) -> LaunchState {
    let next = state.advance();
    log::debug!("Launcher: {:?} -> {:?}", state, next);
    next
}

/// Build the window and its webview, wiring `handler` as the IPC callback
pub fn open_window<H>(
    config: &WindowConfig,
    event_loop: &EventLoop<UserEvent>,
    handler: H,
) -> crate::errors::Result<WindowSession>
where
    H: MessageHandler + 'static,
{
    let window = WindowBuilder::new()
        .with_title(&config.title)
        .with_inner_size(LogicalSize::new(config.width, config.height))
        .build(event_loop)?;

    let builder = WebViewBuilder::new()
        .with_url(&config.url)
        .with_devtools(config.debug)
        .with_ipc_handler(move |request| handler.on_message(request.body()));

    let webview = build_webview(builder, &window)?;
    log::info!("Window opened on {}", config.url);

    Ok(WindowSession { webview, window })
}

#[cfg(not(target_os = "linux"))]
fn build_webview(builder: WebViewBuilder<'_>, window: &Window) -> crate::errors::Result<WebView> {
    Ok(builder.build(window)?)
}

#[cfg(target_os = "linux")]
fn build_webview(builder: WebViewBuilder<'_>, window: &Window) -> crate::errors::Result<WebView> {
    use tao::platform::unix::WindowExtUnix;
    use wry::WebViewBuilderExtUnix;

    let vbox = window
        .default_vbox()
        .ok_or_else(|| crate::errors::HomoError::Window("GTK container not available".to_string()))?;
    Ok(builder.build_gtk(vbox)?)
}

/// Run the event loop until the window is closed
fn run_event_loop(event_loop: &mut EventLoop<UserEvent>, session: &WindowSession) {
    let window_id = session.window().id();

    event_loop.run_return(|event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                window_id: id,
                ..
            } if id == window_id => {
                log::info!("Window close requested");
                *control_flow = ControlFlow::Exit;
            }
            Event::UserEvent(UserEvent::EvaluateScript(script)) => {
                if let Err(e) = session.webview().evaluate_script(&script) {
                    log::warn!("send_reply: script evaluation failed: {}", e);
                }
            }
            _ => {}
        }
    });
}
