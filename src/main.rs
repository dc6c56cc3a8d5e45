//! WebScreen demo binary.
//!
//! With the `gui` feature (default) this opens a window and embeds the
//! screen in a real webview. Without it, a console demo drives the
//! component's state machinery against printing fakes.

#[cfg(feature = "gui")]
fn main() {
    let url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "https://example.com".to_string());
    let mut config = webscreen::ScreenConfig::with_url(&url);
    config.tint_color = Some("#1f6feb".to_string());
    webscreen::ui::run(config);
}

#[cfg(not(feature = "gui"))]
fn main() {
    use std::time::Duration;

    use webscreen::host::HostChrome;
    use webscreen::surface::{ProgressToken, WebSurface};
    use webscreen::types::button::ButtonKind;
    use webscreen::types::navigation::NavigationEvent;
    use webscreen::{ScreenConfig, WebScreen};

    struct ConsoleSurface {
        loading: bool,
    }

    impl WebSurface for ConsoleSurface {
        fn load(&mut self, url: &str) {
            println!("  surface: load {}", url);
            self.loading = true;
        }
        fn reload(&mut self) {
            println!("  surface: reload");
            self.loading = true;
        }
        fn stop_loading(&mut self) {
            println!("  surface: stop");
            self.loading = false;
        }
        fn go_back(&mut self) {
            println!("  surface: back");
        }
        fn go_forward(&mut self) {
            println!("  surface: forward");
        }
        fn can_go_back(&self) -> bool {
            true
        }
        fn can_go_forward(&self) -> bool {
            false
        }
        fn is_loading(&self) -> bool {
            self.loading
        }
        fn estimated_progress(&self) -> f64 {
            if self.loading {
                0.5
            } else {
                1.0
            }
        }
        fn subscribe_progress(&mut self) -> ProgressToken {
            ProgressToken(1)
        }
        fn unsubscribe_progress(&mut self, _token: ProgressToken) {}
    }

    struct ConsoleHost;

    impl HostChrome for ConsoleHost {
        fn navigation_bar_tint(&self) -> String {
            "#000000".to_string()
        }
        fn set_navigation_bar_tint(&mut self, color: &str) {
            println!("  host: nav bar tint {}", color);
        }
        fn navigation_bar_hidden(&self) -> bool {
            false
        }
        fn set_navigation_bar_hidden(&mut self, hidden: bool, _animated: bool) {
            println!("  host: nav bar hidden {}", hidden);
        }
        fn toolbar_tint(&self) -> String {
            "#000000".to_string()
        }
        fn set_toolbar_tint(&mut self, color: &str) {
            println!("  host: toolbar tint {}", color);
        }
        fn toolbar_hidden(&self) -> bool {
            true
        }
        fn set_toolbar_hidden(&mut self, hidden: bool, _animated: bool) {
            println!("  host: toolbar hidden {}", hidden);
        }
        fn is_modal(&self) -> bool {
            true
        }
        fn share_url(&mut self, url: &str) {
            println!("  host: share {}", url);
        }
        fn dismiss(&mut self) {
            println!("  host: dismiss");
        }
    }

    println!("webscreen v{} — console demo", env!("CARGO_PKG_VERSION"));
    println!();

    let mut config = ScreenConfig::with_url("https://example.com");
    config.tint_color = Some("#1f6feb".to_string());

    let mut screen = WebScreen::new(config, ConsoleSurface { loading: false }, Some(ConsoleHost));

    println!("mount:");
    screen.mount();
    println!("toolbar layout: {:?}", screen.layout().toolbar);

    println!("will_appear:");
    screen.will_appear();

    println!("load cycle:");
    screen.navigation_event(NavigationEvent::Started);
    for value in [0.3, 0.7, 1.0] {
        screen.progress_changed(value);
        println!(
            "  progress {:.1} (opacity {:.1})",
            screen.progress().fraction(),
            screen.progress().opacity()
        );
    }
    screen.surface_mut().loading = false;
    screen.navigation_event(NavigationEvent::Finished);
    screen.tick(Duration::from_millis(700));
    println!(
        "  after fade: fraction {:.1}, opacity {:.1}",
        screen.progress().fraction(),
        screen.progress().opacity()
    );

    println!("controls:");
    screen.activate(ButtonKind::Back);
    screen.activate(ButtonKind::Share);
    screen.activate(ButtonKind::Done);

    println!("will_disappear:");
    screen.will_disappear();
}
