use iced::widget::image::Handle;
use iced::widget::{container, stack};
use iced::{window, Element, Length, Size, Task, Theme};
use iced_video_player::Video;
use std::collections::HashMap;

// Declare the application modules
mod analytics;
mod media;
mod state;
mod ui;

use state::catalog;
use state::data::VideoEntry;
use state::playback::Playback;

/// Window title, mirroring the page metadata of the deployment
const APP_TITLE: &str = "Videx - Educational Videos";

/// Short tagline printed at startup
const APP_TAGLINE: &str = "Watch short educational videos";

/// Fixed portrait viewport; the page it replaces pins its viewport and
/// disables user scaling, so the window is not resizable either
const WINDOW_WIDTH: f32 = 480.0;
const WINDOW_HEIGHT: f32 = 854.0;

/// Main application state
struct Videx {
    /// Catalog partitioned into 2x2 pages
    pages: Vec<Vec<VideoEntry>>,
    /// Decoded thumbnails keyed by catalog ID
    thumbnails: HashMap<String, Handle>,
    /// Selection plus paused flag (the three-state machine)
    playback: Playback,
    /// The mounted pipeline while the overlay is up. `None` alongside an
    /// active selection means the mount failed; the overlay then shows
    /// fallback text and toggling is a no-op.
    overlay_video: Option<Video>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// Startup thumbnail decoding finished
    ThumbnailsLoaded(Vec<(String, Handle)>),
    /// User pressed a thumbnail card
    VideoSelected(VideoEntry),
    /// User tapped the overlay video wrapper
    ToggleOverlayPlayback,
    /// User pressed the back button or the backdrop
    CloseOverlay,
    /// Fire-and-forget analytics delivery finished
    AnalyticsReported,
}

impl Videx {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let entries = catalog::entries();
        let pages = catalog::chunk_catalog(&entries, catalog::PAGE_SIZE);

        println!(
            "🎬 {}: {} videos on {} pages",
            APP_TAGLINE,
            entries.len(),
            pages.len()
        );

        let app = Videx {
            pages,
            thumbnails: HashMap::new(),
            playback: Playback::new(),
            overlay_video: None,
        };

        // Decode thumbnails in the background and announce the page view
        let startup = Task::batch([
            Task::perform(
                media::thumbnail::load_catalog_thumbnails(entries),
                Message::ThumbnailsLoaded,
            ),
            Task::perform(analytics::report(analytics::Event::PageView), |_| {
                Message::AnalyticsReported
            }),
        ]);

        (app, startup)
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ThumbnailsLoaded(batch) => {
                self.thumbnails.extend(batch);
                Task::none()
            }
            Message::VideoSelected(entry) => {
                // Mount the pipeline first; a failed mount still leaves a
                // coherent overlay (fallback text, toggle no-ops)
                self.overlay_video = match media::player::open(&entry.video_url) {
                    Ok(video) => Some(video),
                    Err(e) => {
                        eprintln!("❌ Could not open '{}': {}", entry.title, e);
                        None
                    }
                };

                let event = analytics::Event::VideoOpened {
                    id: entry.id.clone(),
                };
                self.playback.select(entry);

                Task::perform(analytics::report(event), |_| Message::AnalyticsReported)
            }
            Message::ToggleOverlayPlayback => {
                // Decide from the pipeline's actual state, not our flag.
                // With no mounted pipeline the tap is silently ignored.
                if let Some(video) = &mut self.overlay_video {
                    let paused = !video.paused();
                    video.set_paused(paused);
                    self.playback.set_paused(paused);
                }
                Task::none()
            }
            Message::CloseOverlay => {
                let event = self
                    .playback
                    .selected()
                    .map(|entry| analytics::Event::VideoClosed {
                        id: entry.id.clone(),
                    });

                // Dropping the pipeline releases the only media resource
                self.overlay_video = None;
                self.playback.close();

                match event {
                    Some(event) => {
                        Task::perform(analytics::report(event), |_| Message::AnalyticsReported)
                    }
                    None => Task::none(),
                }
            }
            Message::AnalyticsReported => Task::none(),
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let base = container(ui::grid::catalog_grid(&self.pages, &self.thumbnails))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme| container::Style {
                background: Some(iced::Color::BLACK.into()),
                ..container::Style::default()
            });

        match self.playback.selected() {
            Some(entry) => stack![
                base,
                ui::overlay::player_overlay(
                    entry,
                    self.overlay_video.as_ref(),
                    self.playback.is_paused(),
                ),
            ]
            .into(),
            None => base.into(),
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    iced::application(APP_TITLE, Videx::update, Videx::view)
        .theme(Videx::theme)
        .window(window::Settings {
            size: Size::new(WINDOW_WIDTH, WINDOW_HEIGHT),
            min_size: Some(Size::new(WINDOW_WIDTH, WINDOW_HEIGHT)),
            resizable: false,
            ..window::Settings::default()
        })
        .centered()
        .run_with(Videx::new)
}
