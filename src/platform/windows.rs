// WebScreen platform handler for Windows: cmd /C start.

use std::io;
use std::process::Command;

/// Open `url` with the system default handler.
pub fn open_url(url: &str) -> io::Result<()> {
    Command::new("cmd").args(["/C", "start", "", url]).spawn().map(|_| ())
}
