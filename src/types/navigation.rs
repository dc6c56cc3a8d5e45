use serde::{Deserialize, Serialize};

/// Navigation lifecycle events delivered by the embedded web surface.
///
/// Failures are not surfaced to the user by this layer; their only effect
/// is a control-state refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NavigationEvent {
    Started,
    Finished,
    FailedProvisional,
    Failed,
}
