//! The web screen itself — glue between surface, chrome, and controls.
//!
//! Lifecycle mirrors a navigation-driven host: `mount` once when the
//! screen is created, `will_appear` / `will_disappear` on every show and
//! hide, `navigation_event` / `progress_changed` as the surface reports,
//! and `activate` when the user presses a control.

use std::time::Duration;

use crate::controls::ControlRegistry;
use crate::host::HostChrome;
use crate::layout::ChromeLayout;
use crate::progress::ProgressBar;
use crate::surface::{ProgressToken, WebSurface};
use crate::sync::ChromeSync;
use crate::types::button::ButtonKind;
use crate::types::chrome::is_valid_hex_color;
use crate::types::config::ScreenConfig;
use crate::types::navigation::NavigationEvent;

/// One embedded web-browser screen.
///
/// Owns its surface and progress bar for its whole lifetime; the host
/// chrome is optional, and without one every chrome operation is a no-op.
pub struct WebScreen<S: WebSurface, H: HostChrome> {
    config: ScreenConfig,
    surface: S,
    host: Option<H>,
    registry: ControlRegistry,
    layout: ChromeLayout,
    sync: ChromeSync,
    progress: ProgressBar,
    progress_token: Option<ProgressToken>,
    mounted: bool,
}

impl<S: WebSurface, H: HostChrome> WebScreen<S, H> {
    pub fn new(config: ScreenConfig, surface: S, host: Option<H>) -> Self {
        Self {
            config,
            surface,
            host,
            registry: ControlRegistry::new(),
            layout: ChromeLayout::default(),
            sync: ChromeSync::new(),
            progress: ProgressBar::new(),
            progress_token: None,
            mounted: false,
        }
    }

    /// One-time setup: capture the host chrome, subscribe to progress
    /// changes, assemble the control layout, and issue the initial load.
    /// Without a configured URL the load is skipped and the screen stays
    /// blank.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;

        if let Some(host) = &self.host {
            self.sync.capture(host);
        }

        self.progress_token = Some(self.surface.subscribe_progress());

        let is_modal = self.host.as_ref().is_some_and(|h| h.is_modal());
        self.layout = ChromeLayout::assemble(&self.config, is_modal);
        self.layout.register_controls(&mut self.registry);

        if let Err(err) = self.config.validate() {
            eprintln!("[SCREEN] {}", err);
        }
        if let Some(url) = &self.config.url {
            self.surface.load(url);
        }
    }

    /// Override the host chrome for this screen: bars forced visible,
    /// accent tint applied to the progress bar and both bars.
    pub fn will_appear(&mut self) {
        let tint = self
            .config
            .tint_color
            .as_deref()
            .filter(|t| is_valid_hex_color(t));

        if let Some(tint) = tint {
            self.progress.set_tint_color(tint);
        }
        if let Some(host) = &mut self.host {
            self.sync.apply(host, tint);
        }
    }

    /// Put the host chrome back the way the first `mount` found it.
    pub fn will_disappear(&mut self) {
        if let Some(host) = &mut self.host {
            self.sync.restore(host);
        }
    }

    /// Progress-change notification from the surface.
    pub fn progress_changed(&mut self, value: f64) {
        self.progress.set_progress(value);
    }

    /// Step the progress bar's hold/fade animation.
    pub fn tick(&mut self, elapsed: Duration) {
        self.progress.tick(elapsed);
    }

    /// Navigation lifecycle event from the surface. Failures are not
    /// surfaced to the user; every event just refreshes control state.
    pub fn navigation_event(&mut self, event: NavigationEvent) {
        if let NavigationEvent::FailedProvisional | NavigationEvent::Failed = event {
            eprintln!("[SCREEN] navigation failed");
        }
        self.layout.refresh(&self.surface, &mut self.registry);
    }

    /// Dispatch a control press. Fire-and-forget against the surface and
    /// host; a disabled or inapplicable control does nothing.
    pub fn activate(&mut self, kind: ButtonKind) {
        match kind {
            ButtonKind::Back => {
                if self.surface.can_go_back() {
                    self.surface.go_back();
                }
            }
            ButtonKind::Forward => {
                if self.surface.can_go_forward() {
                    self.surface.go_forward();
                }
            }
            ButtonKind::Reload => {
                self.surface.stop_loading();
                self.surface.reload();
            }
            ButtonKind::Stop => {
                self.surface.stop_loading();
            }
            ButtonKind::Share => {
                if let (Some(url), Some(host)) = (&self.config.url, &mut self.host) {
                    host.share_url(url);
                }
            }
            ButtonKind::Done => {
                if let Some(host) = &mut self.host {
                    host.dismiss();
                }
            }
            ButtonKind::Spacer => {}
        }
    }

    pub fn config(&self) -> &ScreenConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn host(&self) -> Option<&H> {
        self.host.as_ref()
    }

    pub fn layout(&self) -> &ChromeLayout {
        &self.layout
    }

    pub fn registry(&self) -> &ControlRegistry {
        &self.registry
    }

    pub fn progress(&self) -> &ProgressBar {
        &self.progress
    }

    pub fn chrome_sync(&self) -> &ChromeSync {
        &self.sync
    }
}

impl<S: WebSurface, H: HostChrome> Drop for WebScreen<S, H> {
    /// The progress subscription must never outlive the screen.
    fn drop(&mut self) {
        if let Some(token) = self.progress_token.take() {
            self.surface.unsubscribe_progress(token);
        }
    }
}
