// ui/theme.rs - SnapFrame Visual Theme
//
// Defines the color palette and widget styles shared by the main
// window and the selection overlay.

use iced::widget::{button, container, text_input};
use iced::{Background, Border, Color, Theme};

/// Color palette for SnapFrame
pub struct SnapFrameColors;

impl SnapFrameColors {
    // Background colors
    pub const BG_PRIMARY: Color = Color::from_rgb(0.10, 0.10, 0.13);
    pub const BG_INPUT: Color = Color::from_rgb(0.16, 0.16, 0.20);

    // Text colors
    pub const TEXT_PRIMARY: Color = Color::from_rgb(0.92, 0.92, 0.95);
    pub const TEXT_SECONDARY: Color = Color::from_rgb(0.70, 0.70, 0.75);
    pub const TEXT_MUTED: Color = Color::from_rgb(0.48, 0.48, 0.55);

    // Action colors
    pub const CAPTURE_GREEN: Color = Color::from_rgb(0.30, 0.69, 0.31);
    pub const CAPTURE_GREEN_ACTIVE: Color = Color::from_rgb(0.22, 0.56, 0.24);
    pub const QUIT_RED: Color = Color::from_rgb(0.83, 0.18, 0.18);
    pub const QUIT_RED_ACTIVE: Color = Color::from_rgb(0.72, 0.11, 0.11);
    pub const DISABLED: Color = Color::from_rgb(0.25, 0.25, 0.30);

    // Overlay colors
    pub const ACCENT: Color = Color::from_rgb(0.0, 0.66, 1.0);
    pub const OVERLAY_DIM: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.35,
    };
    pub const SELECTION_FILL: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 0.08,
    };
}

/// Opaque background for the main window (the daemon itself renders a
/// transparent base so the overlay can show the live screen).
pub fn main_background(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(SnapFrameColors::BG_PRIMARY)),
        text_color: Some(SnapFrameColors::TEXT_PRIMARY),
        ..Default::default()
    }
}

/// Dark text input for the custom filename field.
pub fn name_input(_theme: &Theme, status: text_input::Status) -> text_input::Style {
    let border_color = match status {
        text_input::Status::Focused => SnapFrameColors::ACCENT,
        text_input::Status::Hovered => SnapFrameColors::TEXT_MUTED,
        _ => SnapFrameColors::DISABLED,
    };

    text_input::Style {
        background: Background::Color(SnapFrameColors::BG_INPUT),
        border: Border {
            radius: 6.0.into(),
            width: 1.0,
            color: border_color,
        },
        icon: SnapFrameColors::TEXT_MUTED,
        placeholder: SnapFrameColors::TEXT_MUTED,
        value: SnapFrameColors::TEXT_PRIMARY,
        selection: SnapFrameColors::ACCENT,
    }
}

/// Green action button used for the capture and view actions.
pub fn capture_button(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            SnapFrameColors::CAPTURE_GREEN_ACTIVE
        }
        button::Status::Disabled => SnapFrameColors::DISABLED,
        _ => SnapFrameColors::CAPTURE_GREEN,
    };

    styled(background, status)
}

/// Red button used for quitting the application.
pub fn quit_button(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => SnapFrameColors::QUIT_RED_ACTIVE,
        button::Status::Disabled => SnapFrameColors::DISABLED,
        _ => SnapFrameColors::QUIT_RED,
    };

    styled(background, status)
}

fn styled(background: Color, status: button::Status) -> button::Style {
    let text_color = if matches!(status, button::Status::Disabled) {
        SnapFrameColors::TEXT_MUTED
    } else {
        Color::WHITE
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            radius: 6.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
