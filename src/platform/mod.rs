// WebScreen platform abstraction
// Hands a URL to the operating system's share/open handler.
//
// Uses `cfg(target_os)` for conditional compilation to select the correct
// platform-specific implementation at compile time.

use std::io;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

/// Open `url` with the platform handler.
///
/// - **Linux**: `xdg-open`
/// - **macOS**: `open`
/// - **Windows**: `cmd /C start`
pub fn open_url(url: &str) -> io::Result<()> {
    #[cfg(target_os = "linux")]
    {
        linux::open_url(url)
    }
    #[cfg(target_os = "macos")]
    {
        macos::open_url(url)
    }
    #[cfg(target_os = "windows")]
    {
        windows::open_url(url)
    }
}
