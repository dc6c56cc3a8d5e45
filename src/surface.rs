//! Capability interface over the embedded web-rendering engine.
//!
//! The screen never talks to a concrete engine directly; everything goes
//! through this trait so the component can be driven by `wry` in the GUI
//! build and by fakes in tests. All calls are fire-and-forget: the engine
//! handles its own failures and reports them only as navigation events.

/// Handle for an estimated-progress subscription.
///
/// Returned by [`WebSurface::subscribe_progress`] and handed back to
/// [`WebSurface::unsubscribe_progress`] on screen teardown, so a
/// subscription can never outlive the screen that opened it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressToken(pub u64);

/// The embedded web surface consumed by the screen.
pub trait WebSurface {
    /// Issue the initial navigation request.
    fn load(&mut self, url: &str);
    /// Cancel any in-flight load, then reload the current resource.
    fn reload(&mut self);
    /// Cancel the in-flight load.
    fn stop_loading(&mut self);
    fn go_back(&mut self);
    fn go_forward(&mut self);

    fn can_go_back(&self) -> bool;
    fn can_go_forward(&self) -> bool;
    fn is_loading(&self) -> bool;
    /// Load progress in 0.0..=1.0, observed via change notification.
    fn estimated_progress(&self) -> f64;

    /// Start delivering progress-change notifications.
    fn subscribe_progress(&mut self) -> ProgressToken;
    /// Stop delivering progress-change notifications for `token`.
    fn unsubscribe_progress(&mut self, token: ProgressToken);
}
