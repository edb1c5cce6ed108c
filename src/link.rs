// SPDX-License-Identifier: MPL-2.0
//! Opens outbound store links in the system browser.
//!
//! The launcher process is spawned detached; the application neither waits
//! for it nor reads its output.

use crate::error::{Error, Result};
use std::process::{Command, Stdio};

#[cfg(target_os = "linux")]
fn launcher(url: &str) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(url);
    cmd
}

#[cfg(target_os = "macos")]
fn launcher(url: &str) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(url);
    cmd
}

#[cfg(target_os = "windows")]
fn launcher(url: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", "", url]);
    cmd
}

/// Opens `url` in a new browsing context.
pub fn open_in_browser(url: &str) -> Result<()> {
    launcher(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|err| Error::Link(format!("failed to launch browser for {}: {}", url, err)))?;
    Ok(())
}
