// selection.rs - Region Selection Geometry
//
// Transient state of an in-progress drag on the selection overlay.
// A session lives from pointer-down to pointer-up; the overlay widget
// owns it and turns the released drag into a BoundingBox.

use crate::capture::BoundingBox;

/// An in-progress drag: the anchor where the pointer went down and the
/// position it has most recently moved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionSession {
    anchor: (i32, i32),
    current: (i32, i32),
}

impl SelectionSession {
    /// Start a session at the pointer-down position.
    pub fn begin(x: i32, y: i32) -> Self {
        Self {
            anchor: (x, y),
            current: (x, y),
        }
    }

    /// Track the pointer while dragging.
    pub fn drag_to(&mut self, x: i32, y: i32) {
        self.current = (x, y);
    }

    pub fn anchor(&self) -> (i32, i32) {
        self.anchor
    }

    pub fn current(&self) -> (i32, i32) {
        self.current
    }

    /// The normalized box for the drag so far, or `None` while the drag
    /// is degenerate (zero width or height).
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        let bbox = BoundingBox::from_drag(self.anchor, self.current);
        bbox.is_valid().then_some(bbox)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upward_left_drag_normalizes() {
        let mut session = SelectionSession::begin(50, 50);
        session.drag_to(20, 80);

        assert_eq!(
            session.bounding_box(),
            Some(BoundingBox::new(20, 50, 50, 80))
        );
    }

    #[test]
    fn downward_right_drag_normalizes_to_the_same_box() {
        let mut session = SelectionSession::begin(20, 50);
        session.drag_to(50, 80);

        assert_eq!(
            session.bounding_box(),
            Some(BoundingBox::new(20, 50, 50, 80))
        );
    }

    #[test]
    fn click_without_drag_is_degenerate() {
        let session = SelectionSession::begin(100, 100);
        assert_eq!(session.bounding_box(), None);
    }

    #[test]
    fn zero_width_or_height_drags_are_degenerate() {
        let mut horizontal = SelectionSession::begin(10, 40);
        horizontal.drag_to(90, 40);
        assert_eq!(horizontal.bounding_box(), None);

        let mut vertical = SelectionSession::begin(10, 40);
        vertical.drag_to(10, 90);
        assert_eq!(vertical.bounding_box(), None);
    }

    #[test]
    fn the_latest_drag_position_wins() {
        let mut session = SelectionSession::begin(0, 0);
        session.drag_to(300, 10);
        session.drag_to(40, 60);

        assert_eq!(session.bounding_box(), Some(BoundingBox::new(0, 0, 40, 60)));
    }
}
