//! Chrome layout assembly — which controls go where.
//!
//! Building a layout is a pure function of the configuration plus the
//! presentation mode, so re-running it with unchanged inputs always yields
//! an identical result: no duplicated Done, no extra spacers.

use crate::controls::ControlRegistryTrait;
use crate::surface::WebSurface;
use crate::types::button::{ButtonKind, DonePlacement};
use crate::types::config::ScreenConfig;

/// The three ordered control slots of the screen's chrome.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChromeLayout {
    pub left: Vec<ButtonKind>,
    pub right: Vec<ButtonKind>,
    pub toolbar: Vec<ButtonKind>,
}

impl ChromeLayout {
    /// Build the layout from `config`. Modal presentation injects a single
    /// Done control at the head of the list named by the configured
    /// placement; existing Done entries in that list are deduplicated
    /// first. `DonePlacement::None` never injects.
    pub fn assemble(config: &ScreenConfig, is_modal: bool) -> Self {
        let mut left = config.left_items.clone();
        let mut right = config.right_items.clone();

        if is_modal {
            match config.done_placement {
                DonePlacement::Left => inject_done(&mut left),
                DonePlacement::Right => inject_done(&mut right),
                DonePlacement::None => {}
            }
        }

        Self {
            left,
            right,
            toolbar: interleave_spacers(&config.toolbar_items),
        }
    }

    /// Refresh control state from the web surface: Back/Forward enablement,
    /// and the Reload/Stop swap in every slot. Runs on each navigation
    /// lifecycle event (start, finish, fail).
    pub fn refresh<S, R>(&mut self, surface: &S, registry: &mut R)
    where
        S: WebSurface,
        R: ControlRegistryTrait,
    {
        registry.set_enabled(ButtonKind::Back, surface.can_go_back());
        registry.set_enabled(ButtonKind::Forward, surface.can_go_forward());

        let loading = surface.is_loading();
        for slot in [&mut self.left, &mut self.right, &mut self.toolbar] {
            for kind in slot.iter_mut() {
                if matches!(kind, ButtonKind::Reload | ButtonKind::Stop) {
                    *kind = if loading {
                        ButtonKind::Stop
                    } else {
                        ButtonKind::Reload
                    };
                }
            }
        }
    }

    /// Materialize every kind the layout references in `registry`, so each
    /// shared instance exists before first render. Stop is created alongside
    /// Reload since the pair swaps during loads.
    pub fn register_controls<R: ControlRegistryTrait>(&self, registry: &mut R) {
        for kind in self.left.iter().chain(&self.right).chain(&self.toolbar) {
            registry.control(*kind);
            if matches!(kind, ButtonKind::Reload | ButtonKind::Stop) {
                registry.control(ButtonKind::Reload);
                registry.control(ButtonKind::Stop);
            }
        }
    }
}

fn inject_done(items: &mut Vec<ButtonKind>) {
    items.retain(|k| *k != ButtonKind::Done);
    items.insert(0, ButtonKind::Done);
}

/// A spacer between every adjacent pair: N kinds become 2N-1 entries.
/// For N <= 1 there is no pair to separate, so nothing is inserted (the
/// naive `0..n-1` loop underflows at N = 0).
fn interleave_spacers(items: &[ButtonKind]) -> Vec<ButtonKind> {
    let mut out = Vec::with_capacity(items.len().saturating_mul(2));
    for (i, kind) in items.iter().enumerate() {
        if i > 0 {
            out.push(ButtonKind::Spacer);
        }
        out.push(*kind);
    }
    out
}
