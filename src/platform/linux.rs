// WebScreen platform handler for Linux: xdg-open.

use std::io;
use std::process::Command;

/// Open `url` with the desktop's default handler.
pub fn open_url(url: &str) -> io::Result<()> {
    Command::new("xdg-open").arg(url).spawn().map(|_| ())
}
