use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use webscreen::host::HostChrome;
use webscreen::surface::{ProgressToken, WebSurface};
use webscreen::types::button::{ButtonKind, DonePlacement};
use webscreen::types::config::ScreenConfig;
use webscreen::types::navigation::NavigationEvent;
use webscreen::WebScreen;

/// Recording fake for the embedded web surface. The unsubscription count
/// is shared so it stays observable after the screen (which owns the
/// surface) is dropped.
#[derive(Default)]
struct FakeSurface {
    loading: bool,
    can_back: bool,
    can_forward: bool,
    loaded: Vec<String>,
    calls: Vec<&'static str>,
    subscriptions: u32,
    unsubscriptions: Rc<Cell<u32>>,
}

impl WebSurface for FakeSurface {
    fn load(&mut self, url: &str) {
        self.loaded.push(url.to_string());
    }
    fn reload(&mut self) {
        self.calls.push("reload");
    }
    fn stop_loading(&mut self) {
        self.calls.push("stop");
    }
    fn go_back(&mut self) {
        self.calls.push("back");
    }
    fn go_forward(&mut self) {
        self.calls.push("forward");
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
        0.0
    }
    fn subscribe_progress(&mut self) -> ProgressToken {
        self.subscriptions += 1;
        ProgressToken(u64::from(self.subscriptions))
    }
    fn unsubscribe_progress(&mut self, _token: ProgressToken) {
        self.unsubscriptions.set(self.unsubscriptions.get() + 1);
    }
}

/// Recording fake for the host's navigation chrome.
struct FakeHost {
    nav_tint: String,
    nav_hidden: bool,
    toolbar_tint: String,
    toolbar_hidden: bool,
    modal: bool,
    shared: Vec<String>,
    dismissed: bool,
}

impl FakeHost {
    fn new() -> Self {
        Self {
            nav_tint: "#aabbcc".to_string(),
            nav_hidden: true,
            toolbar_tint: "#112233".to_string(),
            toolbar_hidden: true,
            modal: false,
            shared: Vec::new(),
            dismissed: false,
        }
    }
}

impl HostChrome for FakeHost {
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
    }
    fn is_modal(&self) -> bool {
        self.modal
    }
    fn share_url(&mut self, url: &str) {
        self.shared.push(url.to_string());
    }
    fn dismiss(&mut self) {
        self.dismissed = true;
    }
}

fn screen_with(
    config: ScreenConfig,
    surface: FakeSurface,
    host: Option<FakeHost>,
) -> WebScreen<FakeSurface, FakeHost> {
    WebScreen::new(config, surface, host)
}

// === Mount ===

#[test]
fn test_mount_loads_configured_url() {
    let mut screen = screen_with(
        ScreenConfig::with_url("https://example.com"),
        FakeSurface::default(),
        Some(FakeHost::new()),
    );
    screen.mount();
    assert_eq!(screen.surface().loaded, vec!["https://example.com"]);
}

#[test]
fn test_mount_without_url_skips_load() {
    let mut screen = screen_with(
        ScreenConfig::default(),
        FakeSurface::default(),
        Some(FakeHost::new()),
    );
    screen.mount();
    assert!(screen.surface().loaded.is_empty());
}

#[test]
fn test_mount_is_one_shot() {
    let mut screen = screen_with(
        ScreenConfig::with_url("https://example.com"),
        FakeSurface::default(),
        None,
    );
    screen.mount();
    screen.mount();
    assert_eq!(screen.surface().loaded.len(), 1);
    assert_eq!(screen.surface().subscriptions, 1);
}

#[test]
fn test_mount_assembles_default_toolbar() {
    let mut screen = screen_with(
        ScreenConfig::with_url("https://example.com"),
        FakeSurface::default(),
        Some(FakeHost::new()),
    );
    screen.mount();
    assert_eq!(screen.layout().toolbar.len(), 7);
}

#[test]
fn test_modal_mount_injects_done() {
    let mut host = FakeHost::new();
    host.modal = true;
    let config = ScreenConfig {
        done_placement: DonePlacement::Left,
        ..ScreenConfig::with_url("https://example.com")
    };
    let mut screen = screen_with(config, FakeSurface::default(), Some(host));
    screen.mount();
    assert_eq!(screen.layout().left, vec![ButtonKind::Done]);
}

#[test]
fn test_pushed_mount_injects_no_done() {
    let config = ScreenConfig {
        done_placement: DonePlacement::Left,
        ..ScreenConfig::with_url("https://example.com")
    };
    let mut screen = screen_with(config, FakeSurface::default(), Some(FakeHost::new()));
    screen.mount();
    assert!(screen.layout().left.is_empty());
}

// === Progress subscription ===

#[test]
fn test_drop_releases_progress_subscription() {
    let surface = FakeSurface::default();
    let unsubscriptions = surface.unsubscriptions.clone();

    let mut screen = screen_with(ScreenConfig::with_url("https://example.com"), surface, None);
    screen.mount();
    assert_eq!(screen.surface().subscriptions, 1);
    assert_eq!(unsubscriptions.get(), 0);

    drop(screen);
    assert_eq!(unsubscriptions.get(), 1);
}

#[test]
fn test_unmounted_screen_drops_without_unsubscribing() {
    let surface = FakeSurface::default();
    let unsubscriptions = surface.unsubscriptions.clone();

    let screen = screen_with(ScreenConfig::with_url("https://example.com"), surface, None);
    drop(screen);
    assert_eq!(unsubscriptions.get(), 0);
}

#[test]
fn test_progress_updates_drive_the_bar() {
    let mut screen = screen_with(
        ScreenConfig::with_url("https://example.com"),
        FakeSurface::default(),
        None,
    );
    screen.mount();

    screen.progress_changed(0.0);
    screen.progress_changed(0.5);
    assert_eq!(screen.progress().fraction(), 0.5);
    assert_eq!(screen.progress().opacity(), 1.0);

    screen.progress_changed(1.0);
    screen.tick(Duration::from_secs(1));
    assert_eq!(screen.progress().fraction(), 0.0);
    assert_eq!(screen.progress().opacity(), 0.0);
}

// === Chrome show/hide ===

#[test]
fn test_appear_forces_bars_visible_and_tints() {
    let config = ScreenConfig {
        tint_color: Some("#ff8800".to_string()),
        ..ScreenConfig::with_url("https://example.com")
    };
    let mut screen = screen_with(config, FakeSurface::default(), Some(FakeHost::new()));
    screen.mount();
    screen.will_appear();

    let host = screen.host().unwrap();
    assert!(!host.nav_hidden);
    assert!(!host.toolbar_hidden);
    assert_eq!(host.nav_tint, "#ff8800");
    assert_eq!(host.toolbar_tint, "#ff8800");
    assert_eq!(screen.progress().tint_color(), Some("#ff8800"));
}

#[test]
fn test_disappear_restores_pre_show_chrome() {
    let config = ScreenConfig {
        tint_color: Some("#ff8800".to_string()),
        ..ScreenConfig::with_url("https://example.com")
    };
    let mut screen = screen_with(config, FakeSurface::default(), Some(FakeHost::new()));
    screen.mount();
    screen.will_appear();
    screen.will_disappear();

    let host = screen.host().unwrap();
    assert_eq!(host.nav_tint, "#aabbcc");
    assert!(host.nav_hidden);
    assert_eq!(host.toolbar_tint, "#112233");
    assert!(host.toolbar_hidden);
}

#[test]
fn test_restore_survives_repeated_show_hide_cycles() {
    let config = ScreenConfig {
        tint_color: Some("#ff8800".to_string()),
        ..ScreenConfig::with_url("https://example.com")
    };
    let mut screen = screen_with(config, FakeSurface::default(), Some(FakeHost::new()));
    screen.mount();

    for _ in 0..3 {
        screen.will_appear();
        screen.will_disappear();
    }

    let host = screen.host().unwrap();
    assert_eq!(host.nav_tint, "#aabbcc");
    assert!(host.nav_hidden);
}

#[test]
fn test_invalid_tint_is_ignored_but_bars_still_shown() {
    let config = ScreenConfig {
        tint_color: Some("orange".to_string()),
        ..ScreenConfig::with_url("https://example.com")
    };
    let mut screen = screen_with(config, FakeSurface::default(), Some(FakeHost::new()));
    screen.mount();
    screen.will_appear();

    let host = screen.host().unwrap();
    assert!(!host.nav_hidden);
    assert_eq!(host.nav_tint, "#aabbcc");
    assert!(screen.progress().tint_color().is_none());
}

#[test]
fn test_no_host_makes_chrome_operations_noops() {
    let mut screen = screen_with(
        ScreenConfig::with_url("https://example.com"),
        FakeSurface::default(),
        None,
    );
    screen.mount();
    screen.will_appear();
    screen.will_disappear();
    assert!(!screen.chrome_sync().captured());
}

// === Navigation events ===

#[test]
fn test_started_event_shows_stop() {
    let mut screen = screen_with(
        ScreenConfig::with_url("https://example.com"),
        FakeSurface::default(),
        None,
    );
    screen.mount();
    screen.surface_mut().loading = true;
    screen.navigation_event(NavigationEvent::Started);
    assert!(screen.layout().toolbar.contains(&ButtonKind::Stop));
    assert!(!screen.layout().toolbar.contains(&ButtonKind::Reload));
}

#[test]
fn test_finished_event_shows_reload() {
    let mut screen = screen_with(
        ScreenConfig::with_url("https://example.com"),
        FakeSurface::default(),
        None,
    );
    screen.mount();
    screen.surface_mut().loading = true;
    screen.navigation_event(NavigationEvent::Started);
    screen.surface_mut().loading = false;
    screen.navigation_event(NavigationEvent::Finished);
    assert!(screen.layout().toolbar.contains(&ButtonKind::Reload));
    assert!(!screen.layout().toolbar.contains(&ButtonKind::Stop));
}

#[test]
fn test_failed_event_shows_reload() {
    let mut screen = screen_with(
        ScreenConfig::with_url("https://example.com"),
        FakeSurface::default(),
        None,
    );
    screen.mount();
    screen.surface_mut().loading = true;
    screen.navigation_event(NavigationEvent::Started);
    screen.surface_mut().loading = false;
    screen.navigation_event(NavigationEvent::Failed);
    assert!(screen.layout().toolbar.contains(&ButtonKind::Reload));
}

#[test]
fn test_events_refresh_back_forward_enablement() {
    use webscreen::controls::ControlRegistryTrait;

    let mut screen = screen_with(
        ScreenConfig::with_url("https://example.com"),
        FakeSurface::default(),
        None,
    );
    screen.mount();
    screen.surface_mut().can_back = true;
    screen.navigation_event(NavigationEvent::Finished);
    assert!(screen.registry().is_enabled(ButtonKind::Back));
    assert!(!screen.registry().is_enabled(ButtonKind::Forward));
}

// === Control actions ===

#[test]
fn test_back_is_noop_without_history() {
    let mut screen = screen_with(
        ScreenConfig::with_url("https://example.com"),
        FakeSurface::default(),
        None,
    );
    screen.mount();
    screen.activate(ButtonKind::Back);
    assert!(screen.surface().calls.is_empty());
}

#[test]
fn test_back_navigates_with_history() {
    let mut screen = screen_with(
        ScreenConfig::with_url("https://example.com"),
        FakeSurface::default(),
        None,
    );
    screen.mount();
    screen.surface_mut().can_back = true;
    screen.activate(ButtonKind::Back);
    assert_eq!(screen.surface().calls, vec!["back"]);
}

#[test]
fn test_forward_navigates_only_with_forward_entry() {
    let mut screen = screen_with(
        ScreenConfig::with_url("https://example.com"),
        FakeSurface::default(),
        None,
    );
    screen.mount();
    screen.activate(ButtonKind::Forward);
    assert!(screen.surface().calls.is_empty());

    screen.surface_mut().can_forward = true;
    screen.activate(ButtonKind::Forward);
    assert_eq!(screen.surface().calls, vec!["forward"]);
}

#[test]
fn test_reload_cancels_then_reloads() {
    let mut screen = screen_with(
        ScreenConfig::with_url("https://example.com"),
        FakeSurface::default(),
        None,
    );
    screen.mount();
    screen.activate(ButtonKind::Reload);
    assert_eq!(screen.surface().calls, vec!["stop", "reload"]);
}

#[test]
fn test_stop_only_cancels() {
    let mut screen = screen_with(
        ScreenConfig::with_url("https://example.com"),
        FakeSurface::default(),
        None,
    );
    screen.mount();
    screen.activate(ButtonKind::Stop);
    assert_eq!(screen.surface().calls, vec!["stop"]);
}

#[test]
fn test_share_presents_configured_url() {
    let mut screen = screen_with(
        ScreenConfig::with_url("https://example.com"),
        FakeSurface::default(),
        Some(FakeHost::new()),
    );
    screen.mount();
    screen.activate(ButtonKind::Share);
    assert_eq!(screen.host().unwrap().shared, vec!["https://example.com"]);
}

#[test]
fn test_share_is_noop_without_url() {
    let mut screen = screen_with(
        ScreenConfig::default(),
        FakeSurface::default(),
        Some(FakeHost::new()),
    );
    screen.mount();
    screen.activate(ButtonKind::Share);
    assert!(screen.host().unwrap().shared.is_empty());
}

#[test]
fn test_done_dismisses() {
    let mut screen = screen_with(
        ScreenConfig::with_url("https://example.com"),
        FakeSurface::default(),
        Some(FakeHost::new()),
    );
    screen.mount();
    screen.activate(ButtonKind::Done);
    assert!(screen.host().unwrap().dismissed);
}

#[test]
fn test_spacer_does_nothing() {
    let mut screen = screen_with(
        ScreenConfig::with_url("https://example.com"),
        FakeSurface::default(),
        Some(FakeHost::new()),
    );
    screen.mount();
    screen.activate(ButtonKind::Spacer);
    assert!(screen.surface().calls.is_empty());
    assert!(screen.host().unwrap().shared.is_empty());
    assert!(!screen.host().unwrap().dismissed);
}
