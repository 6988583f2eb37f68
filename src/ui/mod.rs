// ui/mod.rs - Iced User Interface Components
//
// The selection overlay canvas and the shared visual theme.
// Window management and message routing live in main.rs.

pub mod overlay;
pub mod theme;

pub use overlay::SelectionEvent;
pub use theme::SnapFrameColors;
