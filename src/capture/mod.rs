// capture/mod.rs - Screenshot Capture Engine
//
// One-shot full-screen and region capture, persisted as PNG files.
// The actual pixel grab is delegated to the `screenshots` crate, which
// wraps the platform screen-access APIs.

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use image::RgbaImage;
use log::{debug, info};
use screenshots::Screen;

/// Screen region to capture, in screen pixel coordinates.
///
/// `left,top` is inclusive, `right,bottom` is exclusive: a box from
/// (10,10) to (110,60) describes a 100x50 pixel area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl BoundingBox {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Normalize a pointer drag into a box, regardless of drag direction.
    pub fn from_drag(anchor: (i32, i32), release: (i32, i32)) -> Self {
        Self {
            left: anchor.0.min(release.0),
            top: anchor.1.min(release.1),
            right: anchor.0.max(release.0),
            bottom: anchor.1.max(release.1),
        }
    }

    /// A box is valid when it has positive width and height.
    pub fn is_valid(&self) -> bool {
        self.right > self.left && self.bottom > self.top
    }

    pub fn width(&self) -> u32 {
        (self.right - self.left).max(0) as u32
    }

    pub fn height(&self) -> u32 {
        (self.bottom - self.top).max(0) as u32
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {})-({}, {})",
            self.left, self.top, self.right, self.bottom
        )
    }
}

/// A screenshot that has been written to disk.
#[derive(Debug, Clone)]
pub struct SavedScreenshot {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// Grab the entire visible screen and persist it at `path` as PNG.
///
/// An existing file at `path` is overwritten.
pub fn capture_full_screen(path: &Path) -> Result<SavedScreenshot> {
    let frame = grab_screen()?;
    save_frame(frame, path)
}

/// Grab exactly the region described by `bbox` and persist it at `path`.
///
/// The box is validated up front: a degenerate box fails before any
/// pixel is grabbed or any file is written.
pub fn capture_region(path: &Path, bbox: BoundingBox) -> Result<SavedScreenshot> {
    if !bbox.is_valid() {
        bail!(
            "invalid capture region {}: width and height must be positive",
            bbox
        );
    }

    let frame = grab_screen()?;
    let region = crop_to_box(&frame, bbox)?;
    save_frame(region, path)
}

/// Pixel size of the primary display, used to size the selection overlay.
pub fn screen_dimensions() -> Result<(u32, u32)> {
    let screen = primary_screen()?;
    Ok((screen.display_info.width, screen.display_info.height))
}

fn primary_screen() -> Result<Screen> {
    let screens = Screen::all().context("screen access is unavailable")?;
    screens
        .into_iter()
        .next()
        .ok_or_else(|| anyhow!("no screen found"))
}

fn grab_screen() -> Result<RgbaImage> {
    let screen = primary_screen()?;
    debug!(
        "Grabbing screen at ({}, {}), {}x{}",
        screen.display_info.x,
        screen.display_info.y,
        screen.display_info.width,
        screen.display_info.height
    );
    let captured = screen.capture().context("failed to capture the screen")?;
    // `screenshots` pins an older `image`, so rebuild the frame from the
    // raw RGBA buffer instead of passing its buffer type through.
    frame_from_raw(captured.width(), captured.height(), captured.into_raw())
}

fn frame_from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<RgbaImage> {
    RgbaImage::from_raw(width, height, data)
        .ok_or_else(|| anyhow!("captured frame does not match {}x{} pixels", width, height))
}

/// Crop a full-screen frame down to `bbox`.
///
/// The box must already be non-degenerate; a box reaching outside the
/// frame is rejected rather than silently clamped.
fn crop_to_box(frame: &RgbaImage, bbox: BoundingBox) -> Result<RgbaImage> {
    let (frame_width, frame_height) = frame.dimensions();
    let in_bounds = bbox.left >= 0
        && bbox.top >= 0
        && bbox.right <= frame_width as i32
        && bbox.bottom <= frame_height as i32;
    if !in_bounds {
        bail!(
            "capture region {} lies outside the {}x{} screen",
            bbox,
            frame_width,
            frame_height
        );
    }

    let cropped = image::imageops::crop_imm(
        frame,
        bbox.left as u32,
        bbox.top as u32,
        bbox.width(),
        bbox.height(),
    );
    Ok(cropped.to_image())
}

fn save_frame(frame: RgbaImage, path: &Path) -> Result<SavedScreenshot> {
    let (width, height) = frame.dimensions();
    frame
        .save(path)
        .with_context(|| format!("failed to save screenshot to {}", path.display()))?;
    info!(
        "Screenshot saved to {} ({}x{})",
        path.display(),
        width,
        height
    );
    Ok(SavedScreenshot {
        path: path.to_path_buf(),
        width,
        height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn checker_frame(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| {
            if (x + y) % 2 == 0 {
                Rgba([255, 255, 255, 255])
            } else {
                Rgba([0, 0, 0, 255])
            }
        })
    }

    #[test]
    fn drag_direction_does_not_matter() {
        let down_right = BoundingBox::from_drag((20, 50), (50, 80));
        let up_left = BoundingBox::from_drag((50, 50), (20, 80));

        assert_eq!(down_right, BoundingBox::new(20, 50, 50, 80));
        assert_eq!(up_left, BoundingBox::new(20, 50, 50, 80));
    }

    #[test]
    fn degenerate_boxes_are_invalid() {
        assert!(!BoundingBox::new(10, 10, 10, 60).is_valid());
        assert!(!BoundingBox::new(10, 10, 110, 10).is_valid());
        assert!(!BoundingBox::new(110, 10, 10, 60).is_valid());
        assert!(BoundingBox::new(10, 10, 110, 60).is_valid());
    }

    #[test]
    fn box_dimensions_follow_the_exclusive_convention() {
        let bbox = BoundingBox::new(10, 10, 110, 60);
        assert_eq!(bbox.width(), 100);
        assert_eq!(bbox.height(), 50);
    }

    #[test]
    fn crop_matches_box_dimensions() {
        let frame = checker_frame(200, 120);
        let cropped = crop_to_box(&frame, BoundingBox::new(10, 10, 110, 60)).unwrap();

        assert_eq!(cropped.dimensions(), (100, 50));
        // Pixel (10,10) of the frame becomes (0,0) of the crop.
        assert_eq!(cropped.get_pixel(0, 0), frame.get_pixel(10, 10));
        assert_eq!(cropped.get_pixel(99, 49), frame.get_pixel(109, 59));
    }

    #[test]
    fn crop_rejects_boxes_outside_the_frame() {
        let frame = checker_frame(100, 100);

        assert!(crop_to_box(&frame, BoundingBox::new(-5, 0, 50, 50)).is_err());
        assert!(crop_to_box(&frame, BoundingBox::new(0, 0, 101, 50)).is_err());
        assert!(crop_to_box(&frame, BoundingBox::new(0, 60, 50, 101)).is_err());
        assert!(crop_to_box(&frame, BoundingBox::new(0, 0, 100, 100)).is_ok());
    }

    #[test]
    fn raw_rgba_buffer_rebuilds_into_a_frame() {
        let source = checker_frame(8, 6);
        let raw = source.clone().into_raw();

        let frame = frame_from_raw(8, 6, raw).unwrap();

        assert_eq!(frame.dimensions(), (8, 6));
        assert_eq!(frame.get_pixel(3, 2), source.get_pixel(3, 2));
    }

    #[test]
    fn undersized_raw_buffer_is_an_error() {
        assert!(frame_from_raw(8, 6, vec![0u8; 10]).is_err());
    }

    #[test]
    fn save_overwrites_an_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.png");
        std::fs::write(&path, b"stale content").unwrap();

        let saved = save_frame(checker_frame(10, 10), &path).unwrap();

        assert_eq!(saved.path, path);
        assert_eq!((saved.width, saved.height), (10, 10));
        let reloaded = image::open(&path).unwrap();
        assert_eq!(reloaded.width(), 10);
        assert_eq!(reloaded.height(), 10);
    }

    #[test]
    fn invalid_region_writes_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rejected.png");

        let result = capture_region(&path, BoundingBox::new(110, 10, 10, 60));

        assert!(result.is_err());
        assert!(!path.exists());
    }
}
