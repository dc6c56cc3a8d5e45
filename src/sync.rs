//! Chrome state synchronization — capture, override, restore.
//!
//! The host's bar tint and visibility are captured once per presentation
//! cycle, overridden while the screen is visible, and written back when it
//! disappears. Host mutations made while the screen is up are not tracked;
//! restore always returns the bars to their pre-capture state.

use crate::host::HostChrome;
use crate::types::chrome::BarSnapshot;

/// Snapshot holder for the navigation bar and toolbar.
#[derive(Debug, Default)]
pub struct ChromeSync {
    navigation_bar: Option<BarSnapshot>,
    toolbar: Option<BarSnapshot>,
}

impl ChromeSync {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture both bars. Only the first call per presentation cycle takes
    /// a snapshot; later calls are no-ops until [`ChromeSync::clear`].
    pub fn capture<H: HostChrome>(&mut self, host: &H) {
        if self.navigation_bar.is_none() {
            self.navigation_bar = Some(BarSnapshot {
                tint_color: host.navigation_bar_tint(),
                hidden: host.navigation_bar_hidden(),
            });
        }
        if self.toolbar.is_none() {
            self.toolbar = Some(BarSnapshot {
                tint_color: host.toolbar_tint(),
                hidden: host.toolbar_hidden(),
            });
        }
    }

    /// Override the host chrome for the screen: both bars forced visible,
    /// and the accent tint (when configured) applied to each.
    pub fn apply<H: HostChrome>(&self, host: &mut H, tint: Option<&str>) {
        host.set_navigation_bar_hidden(false, true);
        host.set_toolbar_hidden(false, true);

        if let Some(tint) = tint {
            host.set_navigation_bar_tint(tint);
            host.set_toolbar_tint(tint);
        }
    }

    /// Write the captured tint and visibility back to the host. Does
    /// nothing when no snapshot was taken.
    pub fn restore<H: HostChrome>(&self, host: &mut H) {
        if let Some(bar) = &self.navigation_bar {
            host.set_navigation_bar_tint(&bar.tint_color);
            host.set_navigation_bar_hidden(bar.hidden, true);
        }
        if let Some(bar) = &self.toolbar {
            host.set_toolbar_tint(&bar.tint_color);
            host.set_toolbar_hidden(bar.hidden, true);
        }
    }

    /// Drop the snapshots so the next capture takes fresh ones.
    pub fn clear(&mut self) {
        self.navigation_bar = None;
        self.toolbar = None;
    }

    pub fn captured(&self) -> bool {
        self.navigation_bar.is_some() && self.toolbar.is_some()
    }

    pub fn navigation_bar(&self) -> Option<&BarSnapshot> {
        self.navigation_bar.as_ref()
    }

    pub fn toolbar(&self) -> Option<&BarSnapshot> {
        self.toolbar.as_ref()
    }
}
