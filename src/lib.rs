//! SnapFrame - Screenshot Capture Library
//!
//! This library provides the core functionality for screenshot capture:
//! the capture engine, output path generation, selection geometry and
//! the external viewer launcher. The GUI lives in the binary.

pub mod capture;
pub mod savepath;
pub mod selection;
pub mod viewer;

// Re-export commonly used types
pub use capture::{BoundingBox, SavedScreenshot};
pub use selection::SelectionSession;
