//! WebView-based embedding using `wry` + `tao`.
//!
//! Architecture:
//! - `with_initialization_script(CHROME_JS)` injects the screen's chrome
//!   (progress bar + toolbar) on EVERY page. On Windows WebView2 this uses
//!   AddScriptToExecuteOnDocumentCreatedAsync.
//! - IPC from JS → Rust via `window.ipc.postMessage()`: control presses,
//!   progress reports, navigation lifecycle events.
//! - Rust → webview operations (navigation, script evaluation) go through
//!   `EventLoopProxy` user events, so the screen can issue them from any
//!   callback.
//!
//! The demo window is the root of its own presentation, so `is_modal()` is
//! false and no Done control is injected; it also has no separate
//! navigation bar, so only the toolbar slot of the layout is rendered.

use std::sync::{Arc, Mutex};
use std::time::Instant;

use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder, EventLoopProxy};
use tao::window::WindowBuilder;
use wry::WebViewBuilder;

use crate::host::HostChrome;
use crate::platform;
use crate::screen::WebScreen;
use crate::surface::{ProgressToken, WebSurface};
use crate::types::button::ButtonKind;
use crate::types::config::ScreenConfig;
use crate::types::navigation::NavigationEvent;

#[derive(Debug)]
enum UserEvent {
    LoadUrl(String),
    EvalScript(String),
    /// Done control pressed: restore chrome and close the window.
    Dismiss,
}

/// Injected on every page: renders the progress bar and toolbar, forwards
/// control presses, and reports load progress and navigation lifecycle.
const CHROME_JS: &str = r#"
(function(){
  if (window.__ws_init) return;
  window.__ws_init = true;
  function ipc(cmd, data){
    data = data || {};
    data.cmd = cmd;
    if (window.ipc) window.ipc.postMessage(JSON.stringify(data));
  }
  var LABELS = { back:'←', forward:'→', reload:'⟳', stop:'✕', share:'↑', done:'Done' };
  function ensureChrome(){
    if (document.getElementById('__ws_progress')) return;
    var bar = document.createElement('div');
    bar.id = '__ws_progress';
    bar.style.cssText = 'position:fixed;top:0;left:0;height:3px;width:0;background:#1f6feb;opacity:0;z-index:2147483647;transition:width 120ms ease,opacity 300ms ease';
    var tb = document.createElement('div');
    tb.id = '__ws_toolbar';
    tb.style.cssText = 'position:fixed;bottom:0;left:0;right:0;height:40px;display:flex;align-items:center;padding:0 12px;background:rgba(22,27,34,0.96);color:#e6edf3;font:14px -apple-system,"Segoe UI",sans-serif;z-index:2147483647';
    document.documentElement.appendChild(bar);
    document.documentElement.appendChild(tb);
  }
  window.__ws_updateChrome = function(state){
    ensureChrome();
    var tb = document.getElementById('__ws_toolbar');
    tb.style.display = state.toolbar_hidden ? 'none' : 'flex';
    tb.innerHTML = '';
    state.toolbar.forEach(function(item){
      if (item.kind === 'spacer') {
        var sp = document.createElement('div');
        sp.style.flex = '1';
        tb.appendChild(sp);
        return;
      }
      var b = document.createElement('button');
      b.textContent = LABELS[item.kind] || item.kind;
      b.disabled = !item.enabled;
      b.style.cssText = 'background:none;border:none;color:inherit;font:inherit;padding:6px 10px;cursor:pointer';
      if (!item.enabled) b.style.opacity = '0.4';
      b.addEventListener('click', function(){ ipc('control', {kind: item.kind}); });
      tb.appendChild(b);
    });
    if (state.tint) {
      document.getElementById('__ws_progress').style.background = state.tint;
      tb.style.color = state.tint;
    }
  };
  window.__ws_setProgress = function(fraction, opacity){
    ensureChrome();
    var bar = document.getElementById('__ws_progress');
    bar.style.width = (fraction * 100) + '%';
    bar.style.opacity = opacity;
  };
  ipc('nav', {event:'started', back: history.length > 1});
  document.addEventListener('readystatechange', function(){
    if (document.readyState === 'interactive') ipc('progress', {value: 0.6});
  });
  window.addEventListener('load', function(){
    ipc('progress', {value: 1.0});
    ipc('nav', {event:'finished', back: history.length > 1});
    ipc('ui_ready', {});
  });
  if (document.readyState === 'complete') ipc('ui_ready', {});
})();
"#;

/// `WebSurface` over the wry webview.
///
/// Navigation calls are delivered as user events (the webview lives on the
/// event loop); loading/back-forward state is fed back from the injected
/// JS via IPC.
pub struct WrySurface {
    proxy: EventLoopProxy<UserEvent>,
    loading: bool,
    can_back: bool,
    can_forward: bool,
    progress: f64,
    next_token: u64,
    subscriber: Option<ProgressToken>,
}

impl WrySurface {
    fn new(proxy: EventLoopProxy<UserEvent>) -> Self {
        Self {
            proxy,
            loading: false,
            can_back: false,
            can_forward: false,
            progress: 0.0,
            next_token: 0,
            subscriber: None,
        }
    }

    fn send(&self, event: UserEvent) {
        let _ = self.proxy.send_event(event);
    }

    fn set_history(&mut self, can_back: bool, can_forward: bool) {
        self.can_back = can_back;
        self.can_forward = can_forward;
    }

    fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    fn set_progress(&mut self, value: f64) {
        self.progress = value.clamp(0.0, 1.0);
    }

    fn subscribed(&self) -> bool {
        self.subscriber.is_some()
    }
}

impl WebSurface for WrySurface {
    fn load(&mut self, url: &str) {
        self.loading = true;
        self.progress = 0.0;
        self.send(UserEvent::LoadUrl(url.to_string()));
    }

    fn reload(&mut self) {
        self.loading = true;
        self.progress = 0.0;
        self.send(UserEvent::EvalScript("location.reload()".to_string()));
    }

    fn stop_loading(&mut self) {
        self.loading = false;
        self.send(UserEvent::EvalScript("window.stop()".to_string()));
    }

    fn go_back(&mut self) {
        self.send(UserEvent::EvalScript("history.back()".to_string()));
    }

    fn go_forward(&mut self) {
        self.send(UserEvent::EvalScript("history.forward()".to_string()));
    }

    fn can_go_back(&self) -> bool {
        self.can_back
    }

    fn can_go_forward(&self) -> bool {
        self.can_forward
    }

    fn is_loading(&self) -> bool {
        self.loading
    }

    fn estimated_progress(&self) -> f64 {
        self.progress
    }

    fn subscribe_progress(&mut self) -> ProgressToken {
        self.next_token += 1;
        let token = ProgressToken(self.next_token);
        self.subscriber = Some(token);
        token
    }

    fn unsubscribe_progress(&mut self, token: ProgressToken) {
        if self.subscriber == Some(token) {
            self.subscriber = None;
        }
    }
}

/// `HostChrome` for the demo window: bar state lives in injected CSS, the
/// share action goes to the platform handler, Done closes the window.
pub struct WindowHost {
    proxy: EventLoopProxy<UserEvent>,
    nav_tint: String,
    nav_hidden: bool,
    toolbar_tint: String,
    toolbar_hidden: bool,
}

impl WindowHost {
    fn new(proxy: EventLoopProxy<UserEvent>) -> Self {
        Self {
            proxy,
            nav_tint: "#1f6feb".to_string(),
            nav_hidden: false,
            toolbar_tint: "#1f6feb".to_string(),
            toolbar_hidden: false,
        }
    }
}

impl HostChrome for WindowHost {
    fn navigation_bar_tint(&self) -> String {
        self.nav_tint.clone()
    }

    fn set_navigation_bar_tint(&mut self, color: &str) {
        self.nav_tint = color.to_string();
    }

    fn navigation_bar_hidden(&self) -> bool {
        self.nav_hidden
    }

    fn set_navigation_bar_hidden(&mut self, hidden: bool, _animated: bool) {
        self.nav_hidden = hidden;
    }

    fn toolbar_tint(&self) -> String {
        self.toolbar_tint.clone()
    }

    fn set_toolbar_tint(&mut self, color: &str) {
        self.toolbar_tint = color.to_string();
    }

    fn toolbar_hidden(&self) -> bool {
        self.toolbar_hidden
    }

    fn set_toolbar_hidden(&mut self, hidden: bool, _animated: bool) {
        self.toolbar_hidden = hidden;
        let display = if hidden { "none" } else { "flex" };
        let js = format!(
            "var t=document.getElementById('__ws_toolbar');if(t)t.style.display='{}'",
            display
        );
        let _ = self.proxy.send_event(UserEvent::EvalScript(js));
    }

    fn is_modal(&self) -> bool {
        // The demo window is the root of its presentation.
        false
    }

    fn share_url(&mut self, url: &str) {
        if let Err(err) = platform::open_url(url) {
            eprintln!("[SHARE] {}: {}", url, err);
        }
    }

    fn dismiss(&mut self) {
        let _ = self.proxy.send_event(UserEvent::Dismiss);
    }
}

type Screen = WebScreen<WrySurface, WindowHost>;

// ─── IPC handler ───

fn handle_ipc(screen: &mut Screen, message: &str) -> Option<UserEvent> {
    let msg: serde_json::Value = serde_json::from_str(message).ok()?;
    let cmd = msg.get("cmd")?.as_str()?;

    match cmd {
        "ui_ready" => {
            // Chrome JS just loaded on a page — push current state.
            let script = format!("{};{}", chrome_script(screen), progress_script(screen));
            Some(UserEvent::EvalScript(script))
        }

        "control" => {
            let kind: ButtonKind = serde_json::from_value(msg.get("kind")?.clone()).ok()?;
            screen.activate(kind);
            Some(UserEvent::EvalScript(chrome_script(screen)))
        }

        "progress" => {
            let value = msg.get("value").and_then(|v| v.as_f64())?;
            screen.surface_mut().set_progress(value);
            if screen.surface().subscribed() {
                screen.progress_changed(value);
            }
            Some(UserEvent::EvalScript(progress_script(screen)))
        }

        "nav" => {
            let event: NavigationEvent = serde_json::from_value(msg.get("event")?.clone()).ok()?;
            let can_back = msg.get("back").and_then(|v| v.as_bool()).unwrap_or(false);
            // Forward entries are invisible to the injected JS; a back
            // navigation is the only thing that creates one.
            let can_forward = screen.surface().can_go_forward();
            screen.surface_mut().set_history(can_back, can_forward);
            screen
                .surface_mut()
                .set_loading(event == NavigationEvent::Started);
            screen.navigation_event(event);
            Some(UserEvent::EvalScript(chrome_script(screen)))
        }

        _ => None,
    }
}

/// Script pushing the assembled toolbar (kinds + enablement) into the page.
fn chrome_script(screen: &Screen) -> String {
    use crate::controls::ControlRegistryTrait;

    let toolbar: Vec<serde_json::Value> = screen
        .layout()
        .toolbar
        .iter()
        .map(|kind| {
            serde_json::json!({
                "kind": kind,
                "enabled": kind.is_actionable() && screen.registry().is_enabled(*kind),
            })
        })
        .collect();
    let state = serde_json::json!({
        "toolbar": toolbar,
        "toolbar_hidden": screen.host().map(|h| h.toolbar_hidden()).unwrap_or(false),
        "tint": screen.config().tint_color,
    });
    format!("if(window.__ws_updateChrome)__ws_updateChrome({})", state)
}

fn progress_script(screen: &Screen) -> String {
    format!(
        "if(window.__ws_setProgress)__ws_setProgress({:.4},{:.4})",
        screen.progress().fraction(),
        screen.progress().opacity()
    )
}

// ─── Main entry point ───

pub fn run(config: ScreenConfig) {
    let event_loop: EventLoop<UserEvent> = EventLoopBuilder::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let surface = WrySurface::new(proxy.clone());
    let host = WindowHost::new(proxy.clone());
    let mut screen = Screen::new(config, surface, Some(host));
    // Queued LoadUrl/EvalScript events are delivered once the loop runs.
    screen.mount();
    screen.will_appear();
    let screen = Arc::new(Mutex::new(screen));

    let window = WindowBuilder::new()
        .with_title("WebScreen")
        .with_inner_size(tao::dpi::LogicalSize::new(1024.0, 768.0))
        .build(&event_loop)
        .expect("Failed to create window");

    let ipc_state = screen.clone();
    let ipc_proxy = proxy.clone();

    let builder = WebViewBuilder::new()
        .with_initialization_script(CHROME_JS)
        .with_url("about:blank")
        .with_ipc_handler(move |msg: wry::http::Request<String>| {
            let body = msg.body().as_str();
            let mut s = ipc_state.lock().unwrap();
            if let Some(event) = handle_ipc(&mut s, body) {
                let _ = ipc_proxy.send_event(event);
            }
        })
        .with_devtools(cfg!(debug_assertions));

    #[cfg(target_os = "linux")]
    let webview = {
        use tao::platform::unix::WindowExtUnix;
        use wry::WebViewBuilderExtUnix;
        let vbox = window.default_vbox().expect("Failed to get GTK vbox");
        builder.build_gtk(vbox).expect("Failed to create WebView")
    };

    #[cfg(not(target_os = "linux"))]
    let webview = builder.build(&window).expect("Failed to create WebView");

    let mut last_tick = Instant::now();

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::NewEvents(_) => {
                let now = Instant::now();
                let elapsed = now - last_tick;
                last_tick = now;
                let mut s = screen.lock().unwrap();
                if s.progress().animating() {
                    s.tick(elapsed);
                    let _ = webview.evaluate_script(&progress_script(&s));
                }
                if s.progress().animating() {
                    *control_flow = ControlFlow::WaitUntil(
                        now + std::time::Duration::from_millis(16),
                    );
                }
            }

            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                screen.lock().unwrap().will_disappear();
                *control_flow = ControlFlow::Exit;
            }

            Event::UserEvent(user_event) => match user_event {
                UserEvent::LoadUrl(url) => {
                    eprintln!("[LOAD] {}", url);
                    let _ = webview.load_url(&url);
                }
                UserEvent::EvalScript(js) => {
                    let _ = webview.evaluate_script(&js);
                }
                UserEvent::Dismiss => {
                    screen.lock().unwrap().will_disappear();
                    *control_flow = ControlFlow::Exit;
                }
            },

            _ => {}
        }
    });
}
