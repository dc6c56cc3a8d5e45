// WebScreen shared type definitions
// Each submodule defines types used across the component.

pub mod button;
pub mod chrome;
pub mod config;
pub mod errors;
pub mod navigation;
