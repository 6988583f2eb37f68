//! SnapFrame - Screenshot Capture Tool
//!
//! Screenshot application with:
//! - Main window (custom filename entry, capture/view/quit actions)
//! - Selection overlay (transparent full-screen window, drag to select)
//!
//! The shell hides its own windows before every grab so they never end
//! up inside the screenshot, and reports every outcome via a modal
//! dialog.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

use iced::widget::{button, center, column, container, text, text_input};
use iced::{
    daemon, window, Alignment, Color, Element, Length, Padding, Point, Size, Subscription, Task,
    Theme,
};

use log::{error, info, warn};
use rfd::{AsyncMessageDialog, MessageButtons, MessageLevel};

use snapframe::capture::{self, BoundingBox, SavedScreenshot};
use snapframe::{savepath, viewer};

mod ui;
use ui::theme::{self, SnapFrameColors};
use ui::SelectionEvent;

// ============================================================================
// Constants
// ============================================================================

const MAIN_WIDTH: f32 = 500.0;
const MAIN_HEIGHT: f32 = 450.0;

// Let the window manager finish hiding the main window before grabbing,
// so its closing animation is not part of the screenshot.
const HIDE_SETTLE: Duration = Duration::from_millis(300);

// The overlay dims the whole screen; give the compositor a moment to
// tear it down before the region grab runs.
const OVERLAY_SETTLE: Duration = Duration::from_millis(150);

// ============================================================================
// Types
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum WindowType {
    Main,
    Overlay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ShellMode {
    Idle,
    Busy,
}

/// What to do once the main window has settled out of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PendingCapture {
    FullScreen,
    Region,
}

// ============================================================================
// Messages
// ============================================================================

#[derive(Debug, Clone)]
enum Message {
    MainWindowOpened(window::Id),
    OverlayOpened(window::Id),
    WindowClosed(window::Id),

    CustomNameChanged(String),

    CaptureFullScreen,
    CaptureRegion,
    ViewLastScreenshot,
    Quit,

    MainHidden(PendingCapture),
    Selection(SelectionEvent),
    CancelSelection,
    OverlayTornDown(BoundingBox),
    CaptureFinished(Result<SavedScreenshot, String>),
}

// ============================================================================
// Application State
// ============================================================================

struct SnapFrameApp {
    windows: BTreeMap<window::Id, WindowType>,
    main_id: Option<window::Id>,
    overlay_id: Option<window::Id>,

    mode: ShellMode,
    custom_name: String,
    last_screenshot: Option<SavedScreenshot>,
    status_message: String,
}

impl SnapFrameApp {
    fn new() -> (Self, Task<Message>) {
        let app = Self {
            windows: BTreeMap::new(),
            main_id: None,
            overlay_id: None,

            mode: ShellMode::Idle,
            custom_name: String::new(),
            last_screenshot: None,
            status_message: "Ready to capture".to_string(),
        };

        let main_settings = window::Settings {
            size: Size::new(MAIN_WIDTH, MAIN_HEIGHT),
            position: window::Position::Centered,
            resizable: true,
            ..Default::default()
        };

        let (_, open_task) = window::open(main_settings);
        (app, open_task.map(Message::MainWindowOpened))
    }

    fn title(&self, window_id: window::Id) -> String {
        match self.windows.get(&window_id) {
            Some(WindowType::Overlay) => "Select a Region".to_string(),
            _ => "Screenshot Capture Tool".to_string(),
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::MainWindowOpened(id) => {
                self.main_id = Some(id);
                self.windows.insert(id, WindowType::Main);
                info!("Main window opened: {:?}", id);
                window::gain_focus(id)
            }

            Message::OverlayOpened(id) => {
                self.overlay_id = Some(id);
                self.windows.insert(id, WindowType::Overlay);
                info!("Selection overlay opened: {:?}", id);
                window::gain_focus(id)
            }

            Message::WindowClosed(id) => self.on_window_closed(id),

            Message::CustomNameChanged(name) => {
                self.custom_name = name;
                Task::none()
            }

            Message::CaptureFullScreen => self.begin_capture(PendingCapture::FullScreen),
            Message::CaptureRegion => self.begin_capture(PendingCapture::Region),

            Message::MainHidden(PendingCapture::FullScreen) => {
                let path = match savepath::build(&self.custom_name) {
                    Ok(path) => path,
                    Err(e) => return self.finish_with_error(format!("{:#}", e)),
                };
                info!("Capturing full screen to {}", path.display());
                run_capture(move || capture::capture_full_screen(&path))
            }

            Message::MainHidden(PendingCapture::Region) => self.open_overlay(),

            Message::Selection(SelectionEvent::Finished(bbox)) => {
                info!("Region selected: {}", bbox);
                Task::batch([
                    self.close_overlay(),
                    Task::perform(tokio::time::sleep(OVERLAY_SETTLE), move |_| {
                        Message::OverlayTornDown(bbox)
                    }),
                ])
            }

            Message::Selection(SelectionEvent::Invalid) => {
                warn!("Degenerate region selection rejected");
                Task::batch([
                    self.close_overlay(),
                    self.finish_with_error(
                        "Invalid region selection: the rectangle has no area.".to_string(),
                    ),
                ])
            }

            Message::CancelSelection => {
                if self.overlay_id.is_none() {
                    return Task::none();
                }
                info!("Region selection cancelled");
                self.mode = ShellMode::Idle;
                self.status_message = "Selection cancelled".to_string();
                Task::batch([self.close_overlay(), self.show_main()])
            }

            Message::OverlayTornDown(bbox) => {
                let path = match savepath::build(&self.custom_name) {
                    Ok(path) => path,
                    Err(e) => return self.finish_with_error(format!("{:#}", e)),
                };
                info!("Capturing region {} to {}", bbox, path.display());
                run_capture(move || capture::capture_region(&path, bbox))
            }

            Message::CaptureFinished(Ok(saved)) => {
                self.mode = ShellMode::Idle;
                self.status_message = format!("Saved {}", display_name(&saved.path));
                let description = format!(
                    "Screenshot saved as {} ({}x{})",
                    saved.path.display(),
                    saved.width,
                    saved.height
                );
                self.last_screenshot = Some(saved);
                Task::batch([
                    self.show_main(),
                    notify(MessageLevel::Info, "Screenshot Saved", description),
                ])
            }

            Message::CaptureFinished(Err(message)) => self.finish_with_error(message),

            Message::ViewLastScreenshot => self.view_last_screenshot(),

            Message::Quit => {
                info!("Quit requested");
                iced::exit()
            }
        }
    }

    /// Common entry for both capture actions: refuse while busy, hide
    /// the main window and wait for the window manager to settle.
    fn begin_capture(&mut self, pending: PendingCapture) -> Task<Message> {
        if self.mode != ShellMode::Idle {
            warn!("Capture request ignored, another action is in flight");
            return Task::none();
        }

        self.mode = ShellMode::Busy;
        self.status_message = match pending {
            PendingCapture::FullScreen => "Capturing full screen...".to_string(),
            PendingCapture::Region => "Select a region...".to_string(),
        };

        Task::batch([
            self.hide_main(),
            Task::perform(tokio::time::sleep(HIDE_SETTLE), move |_| {
                Message::MainHidden(pending)
            }),
        ])
    }

    fn open_overlay(&mut self) -> Task<Message> {
        let (width, height) = match capture::screen_dimensions() {
            Ok(dimensions) => dimensions,
            Err(e) => return self.finish_with_error(format!("{:#}", e)),
        };

        let overlay_settings = window::Settings {
            size: Size::new(width as f32, height as f32),
            position: window::Position::Specific(Point::ORIGIN),
            transparent: true,
            decorations: false,
            resizable: false,
            level: window::Level::AlwaysOnTop,
            ..Default::default()
        };

        let (_, open_task) = window::open(overlay_settings);
        open_task.map(Message::OverlayOpened)
    }

    /// Report a failed action: back to idle, main window restored, the
    /// error surfaced in a dialog. Used by every error path.
    fn finish_with_error(&mut self, message: String) -> Task<Message> {
        error!("{}", message);
        self.mode = ShellMode::Idle;
        self.status_message = "Capture failed".to_string();
        Task::batch([
            self.show_main(),
            notify(MessageLevel::Error, "Error", message),
        ])
    }

    fn view_last_screenshot(&mut self) -> Task<Message> {
        match &self.last_screenshot {
            Some(saved) if saved.path.exists() => match viewer::open(&saved.path) {
                Ok(()) => Task::none(),
                Err(e) => notify(
                    MessageLevel::Error,
                    "Error",
                    format!("Failed to display screenshot: {:#}", e),
                ),
            },
            _ => notify(
                MessageLevel::Info,
                "No Screenshot",
                "No screenshot is available to view.".to_string(),
            ),
        }
    }

    fn on_window_closed(&mut self, id: window::Id) -> Task<Message> {
        match self.windows.remove(&id) {
            Some(WindowType::Main) => {
                info!("Main window closed, exiting");
                iced::exit()
            }
            Some(WindowType::Overlay) => {
                // Only an externally dismissed overlay still has its id
                // recorded; our own close paths clear it first.
                if self.overlay_id == Some(id) {
                    self.overlay_id = None;
                    if self.mode == ShellMode::Busy {
                        info!("Overlay dismissed, restoring main window");
                        self.mode = ShellMode::Idle;
                        self.status_message = "Selection cancelled".to_string();
                        return self.show_main();
                    }
                }
                Task::none()
            }
            None => Task::none(),
        }
    }

    fn hide_main(&self) -> Task<Message> {
        match self.main_id {
            Some(id) => window::change_mode(id, window::Mode::Hidden),
            None => Task::none(),
        }
    }

    fn show_main(&self) -> Task<Message> {
        match self.main_id {
            Some(id) => Task::batch([
                window::change_mode(id, window::Mode::Windowed),
                window::gain_focus(id),
            ]),
            None => Task::none(),
        }
    }

    fn close_overlay(&mut self) -> Task<Message> {
        match self.overlay_id.take() {
            Some(id) => window::close(id),
            None => Task::none(),
        }
    }

    // ========================================================================
    // Views
    // ========================================================================

    fn view(&self, window_id: window::Id) -> Element<'_, Message> {
        match self.windows.get(&window_id) {
            Some(WindowType::Main) => self.view_main(),
            Some(WindowType::Overlay) => ui::overlay::view().map(Message::Selection),
            None => container(text("Loading..."))
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
        }
    }

    fn view_main(&self) -> Element<'_, Message> {
        let idle = self.mode == ShellMode::Idle;

        let title = text("Screenshot Capture Tool")
            .size(24)
            .color(SnapFrameColors::TEXT_PRIMARY);

        let name_label = text("Custom Filename (Optional)")
            .size(13)
            .color(SnapFrameColors::TEXT_SECONDARY);

        let name_input = text_input("e.g. report", &self.custom_name)
            .on_input(Message::CustomNameChanged)
            .padding(10)
            .width(Length::Fixed(320.0))
            .style(theme::name_input);

        let full_screen_button = action_button(
            "Capture Full Screen",
            idle.then_some(Message::CaptureFullScreen),
            theme::capture_button,
        );
        let region_button = action_button(
            "Capture Specific Region",
            idle.then_some(Message::CaptureRegion),
            theme::capture_button,
        );

        let view_label = if self.has_viewable_screenshot() {
            "View Last Screenshot"
        } else {
            "No Screenshot to View"
        };
        let view_button = action_button(
            view_label,
            idle.then_some(Message::ViewLastScreenshot),
            theme::capture_button,
        );

        let quit_button = action_button("Quit", Some(Message::Quit), theme::quit_button);

        let last_line = match &self.last_screenshot {
            Some(saved) => text(format!(
                "Last: {} ({}x{})",
                display_name(&saved.path),
                saved.width,
                saved.height
            )),
            None => text("No capture yet"),
        }
        .size(12)
        .color(SnapFrameColors::TEXT_MUTED);

        let status = text(&self.status_message)
            .size(13)
            .color(SnapFrameColors::TEXT_SECONDARY);

        let content = column![
            title,
            column![name_label, name_input].spacing(6).align_x(Alignment::Center),
            full_screen_button,
            region_button,
            view_button,
            quit_button,
            status,
            last_line,
        ]
        .spacing(16)
        .align_x(Alignment::Center);

        container(center(content))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(theme::main_background)
            .into()
    }

    fn has_viewable_screenshot(&self) -> bool {
        self.last_screenshot
            .as_ref()
            .is_some_and(|saved| saved.path.exists())
    }

    // ========================================================================
    // Runtime wiring
    // ========================================================================

    fn subscription(&self) -> Subscription<Message> {
        let mut subs = vec![window::close_events().map(Message::WindowClosed)];

        // Escape dismisses an open overlay.
        if self.overlay_id.is_some() {
            subs.push(iced::keyboard::on_key_press(|key, _modifiers| {
                match key.as_ref() {
                    iced::keyboard::Key::Named(iced::keyboard::key::Named::Escape) => {
                        Some(Message::CancelSelection)
                    }
                    _ => None,
                }
            }));
        }

        Subscription::batch(subs)
    }

    fn theme(&self, _window_id: window::Id) -> Theme {
        Theme::Dark
    }

    fn style(&self, theme: &Theme) -> daemon::Appearance {
        // Transparent base so the overlay window shows the live screen;
        // the main window paints its own opaque background.
        daemon::Appearance {
            background_color: Color::TRANSPARENT,
            text_color: theme.palette().text,
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Run a blocking capture off the UI thread and report the result.
fn run_capture<F>(capture: F) -> Task<Message>
where
    F: FnOnce() -> anyhow::Result<SavedScreenshot> + Send + 'static,
{
    Task::perform(
        async move {
            match tokio::task::spawn_blocking(capture).await {
                Ok(result) => result.map_err(|e| format!("{:#}", e)),
                Err(e) => Err(format!("capture task failed: {}", e)),
            }
        },
        Message::CaptureFinished,
    )
}

/// Fire-and-forget modal notification dialog.
fn notify(level: MessageLevel, title: &str, description: String) -> Task<Message> {
    let dialog = AsyncMessageDialog::new()
        .set_level(level)
        .set_title(title)
        .set_description(description)
        .set_buttons(MessageButtons::Ok);

    Task::future(async move {
        let _ = dialog.show().await;
    })
    .discard()
}

fn action_button<'a>(
    label: &'a str,
    on_press: Option<Message>,
    style: impl Fn(&Theme, button::Status) -> button::Style + 'a,
) -> Element<'a, Message> {
    button(text(label).size(14))
        .padding(Padding::from([10, 24]))
        .width(Length::Fixed(260.0))
        .style(style)
        .on_press_maybe(on_press)
        .into()
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

// ============================================================================
// Main
// ============================================================================

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .filter_module("wgpu_hal", log::LevelFilter::Error)
        .filter_module("wgpu_core", log::LevelFilter::Error)
        .filter_module("naga", log::LevelFilter::Error)
        .init();
    info!("SnapFrame starting...");

    daemon(
        SnapFrameApp::title,
        SnapFrameApp::update,
        SnapFrameApp::view,
    )
    .subscription(SnapFrameApp::subscription)
    .theme(SnapFrameApp::theme)
    .style(SnapFrameApp::style)
    .run_with(SnapFrameApp::new)
}
