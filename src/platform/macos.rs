// WebScreen platform handler for macOS: open.

use std::io;
use std::process::Command;

/// Open `url` with the system default handler.
pub fn open_url(url: &str) -> io::Result<()> {
    Command::new("open").arg(url).spawn().map(|_| ())
}
