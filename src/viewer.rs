// viewer.rs - External Image Viewer Launcher
//
// Opens a saved screenshot in the platform's default image viewer.
// The file is decode-checked first so an unreadable or truncated PNG
// surfaces as an error dialog instead of a blank viewer window.

use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result};
use log::info;

/// Open `path` in the default image viewer.
pub fn open(path: &Path) -> Result<()> {
    image::open(path)
        .with_context(|| format!("failed to read screenshot {}", path.display()))?;

    info!("Opening {} in the default viewer", path.display());
    spawn_viewer(path)
        .with_context(|| format!("failed to launch a viewer for {}", path.display()))?;
    Ok(())
}

#[cfg(target_os = "windows")]
fn spawn_viewer(path: &Path) -> std::io::Result<()> {
    // Empty first argument is the window title slot of `start`.
    Command::new("cmd")
        .args(["/C", "start", ""])
        .arg(path)
        .spawn()
        .map(|_| ())
}

#[cfg(target_os = "macos")]
fn spawn_viewer(path: &Path) -> std::io::Result<()> {
    Command::new("open").arg(path).spawn().map(|_| ())
}

#[cfg(all(not(target_os = "windows"), not(target_os = "macos")))]
fn spawn_viewer(path: &Path) -> std::io::Result<()> {
    Command::new("xdg-open").arg(path).spawn().map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gone.png");

        assert!(open(&path).is_err());
    }

    #[test]
    fn undecodable_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("not-a-png.png");
        std::fs::write(&path, b"definitely not image data").unwrap();

        assert!(open(&path).is_err());
    }
}
