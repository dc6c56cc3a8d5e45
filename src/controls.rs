//! Control Registry — shared interactive control instances, one per kind.
//!
//! Call sites never construct controls themselves; the registry creates
//! each one on first access and hands out the same instance across layout
//! rebuilds. Enablement is mutated in place, never by recreating.

use std::collections::HashMap;

use crate::types::button::ButtonKind;

/// One interactive control. Long-lived; enablement changes in place as
/// navigation state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    pub kind: ButtonKind,
    pub enabled: bool,
}

impl Control {
    fn new(kind: ButtonKind) -> Self {
        // Spacers are inert from birth.
        Self {
            kind,
            enabled: kind.is_actionable(),
        }
    }
}

/// Trait defining the control registry interface.
pub trait ControlRegistryTrait {
    /// The shared control for `kind`, created on first access.
    fn control(&mut self, kind: ButtonKind) -> &mut Control;
    /// The shared control for `kind`, or `None` if never accessed.
    fn get(&self, kind: ButtonKind) -> Option<&Control>;
    fn set_enabled(&mut self, kind: ButtonKind, enabled: bool);
    fn is_enabled(&self, kind: ButtonKind) -> bool;
    /// Number of controls created so far.
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool;
}

/// Lazily populated registry of shared controls.
pub struct ControlRegistry {
    controls: HashMap<ButtonKind, Control>,
}

impl ControlRegistry {
    pub fn new() -> Self {
        Self {
            controls: HashMap::new(),
        }
    }
}

impl Default for ControlRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ControlRegistryTrait for ControlRegistry {
    fn control(&mut self, kind: ButtonKind) -> &mut Control {
        self.controls.entry(kind).or_insert_with(|| Control::new(kind))
    }

    fn get(&self, kind: ButtonKind) -> Option<&Control> {
        self.controls.get(&kind)
    }

    fn set_enabled(&mut self, kind: ButtonKind, enabled: bool) {
        self.control(kind).enabled = enabled;
    }

    fn is_enabled(&self, kind: ButtonKind) -> bool {
        self.controls.get(&kind).is_some_and(|c| c.enabled)
    }

    fn len(&self) -> usize {
        self.controls.len()
    }

    fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }
}
