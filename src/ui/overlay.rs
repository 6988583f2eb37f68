// ui/overlay.rs - Region Selection Overlay
//
// Full-screen transparent canvas that lets the user drag out a capture
// rectangle. Press starts a selection session, every move redraws the
// rubber-band rectangle, release hands the normalized box back to the
// shell (or signals an invalid selection for a degenerate drag).

use iced::mouse;
use iced::widget::canvas::{self, event, Canvas, Frame, Geometry, Path, Stroke, Text};
use iced::{Element, Length, Point, Rectangle, Renderer, Size, Theme};

use snapframe::capture::BoundingBox;
use snapframe::selection::SelectionSession;

use super::theme::SnapFrameColors;

/// Outcome of an overlay interaction.
#[derive(Debug, Clone)]
pub enum SelectionEvent {
    /// A valid rectangle was dragged out and released.
    Finished(BoundingBox),
    /// The drag collapsed to zero width or height.
    Invalid,
}

/// Canvas program drawing the dimmed screen and the live selection.
pub struct RegionSelector;

/// The overlay as a full-window element.
pub fn view() -> Element<'static, SelectionEvent> {
    Canvas::new(RegionSelector)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

impl canvas::Program<SelectionEvent> for RegionSelector {
    type State = Option<SelectionSession>;

    fn update(
        &self,
        state: &mut Self::State,
        event: canvas::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> (event::Status, Option<SelectionEvent>) {
        let canvas::Event::Mouse(mouse_event) = event else {
            return (event::Status::Ignored, None);
        };

        match mouse_event {
            mouse::Event::ButtonPressed(mouse::Button::Left) => {
                let Some(position) = cursor.position_in(bounds) else {
                    return (event::Status::Ignored, None);
                };
                *state = Some(SelectionSession::begin(
                    position.x.round() as i32,
                    position.y.round() as i32,
                ));
                (event::Status::Captured, None)
            }

            mouse::Event::CursorMoved { .. } => {
                match (state.as_mut(), cursor.position_in(bounds)) {
                    (Some(session), Some(position)) => {
                        session.drag_to(position.x.round() as i32, position.y.round() as i32);
                        (event::Status::Captured, None)
                    }
                    _ => (event::Status::Ignored, None),
                }
            }

            mouse::Event::ButtonReleased(mouse::Button::Left) => match state.take() {
                Some(session) => {
                    let outcome = match session.bounding_box() {
                        Some(bbox) => SelectionEvent::Finished(bbox),
                        None => SelectionEvent::Invalid,
                    };
                    (event::Status::Captured, Some(outcome))
                }
                None => (event::Status::Ignored, None),
            },

            _ => (event::Status::Ignored, None),
        }
    }

    fn draw(
        &self,
        state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        // Dim the live screen so the selection stands out.
        frame.fill_rectangle(Point::ORIGIN, bounds.size(), SnapFrameColors::OVERLAY_DIM);

        if let Some(session) = state {
            let bbox = BoundingBox::from_drag(session.anchor(), session.current());
            let top_left = Point::new(bbox.left as f32, bbox.top as f32);
            let size = Size::new(bbox.width() as f32, bbox.height() as f32);

            frame.fill_rectangle(top_left, size, SnapFrameColors::SELECTION_FILL);
            frame.stroke(
                &Path::rectangle(top_left, size),
                Stroke::default()
                    .with_width(2.0)
                    .with_color(SnapFrameColors::ACCENT),
            );

            frame.fill_text(Text {
                content: format!("{}x{}", bbox.width(), bbox.height()),
                position: Point::new(top_left.x + 4.0, (top_left.y - 20.0).max(4.0)),
                color: SnapFrameColors::TEXT_PRIMARY,
                size: 14.0.into(),
                ..Text::default()
            });
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if cursor.is_over(bounds) {
            mouse::Interaction::Crosshair
        } else {
            mouse::Interaction::default()
        }
    }
}
