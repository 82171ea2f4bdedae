use iced::widget::{button, canvas, center, container, mouse_area, opaque, stack, text};
use iced::{Color, Element, Length, Theme};
use iced_video_player::{Video, VideoPlayer};

use crate::state::data::VideoEntry;
use crate::ui::icons::PlayIcon;
use crate::Message;

/// Size of the large play badge shown while paused
const PAUSE_BADGE_SIZE: f32 = 88.0;

/// Modal content size inside the fixed portrait viewport
const MODAL_WIDTH: f32 = 440.0;
const MODAL_HEIGHT: f32 = 790.0;

/// The full-screen modal player, stacked over the grid while a
/// selection exists.
///
/// Click routing: tapping the video wrapper toggles play/pause, the
/// back button closes, and the dimmed backdrop closes only when the
/// press lands on the backdrop itself. The inner `opaque` swallows
/// presses over the modal content, so interacting with the player can
/// never reach the backdrop's `mouse_area`.
pub fn player_overlay<'a>(
    entry: &'a VideoEntry,
    video: Option<&'a Video>,
    paused: bool,
) -> Element<'a, Message> {
    let media: Element<'a, Message> = match video {
        Some(video) => container(
            VideoPlayer::new(video)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .into(),
        // The pipeline failed to mount; show fallback text instead
        None => container(text(format!("'{}' cannot be played.", entry.title)).size(16))
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into(),
    };

    let mut wrapper = stack![media];
    if paused {
        // Large centered play glyph, same hit area as the video itself
        wrapper = wrapper.push(
            container(
                canvas(PlayIcon)
                    .width(Length::Fixed(PAUSE_BADGE_SIZE))
                    .height(Length::Fixed(PAUSE_BADGE_SIZE)),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill),
        );
    }

    let video_wrapper = mouse_area(wrapper).on_press(Message::ToggleOverlayPlayback);

    let back_button = button(text("←").size(22))
        .padding([6, 14])
        .style(back_button_style)
        .on_press(Message::CloseOverlay);

    let content = container(stack![
        container(video_wrapper)
            .width(Length::Fill)
            .height(Length::Fill),
        container(back_button).padding(14),
    ])
    .width(Length::Fixed(MODAL_WIDTH))
    .height(Length::Fixed(MODAL_HEIGHT))
    .style(modal_style);

    opaque(
        mouse_area(center(opaque(content)).style(backdrop_style))
            .on_press(Message::CloseOverlay),
    )
}

fn back_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Color::from_rgba(1.0, 1.0, 1.0, 0.25),
        _ => Color::from_rgba(1.0, 1.0, 1.0, 0.12),
    };

    button::Style {
        background: Some(background.into()),
        text_color: Color::WHITE,
        border: iced::border::Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 18.0.into(),
        },
        shadow: iced::Shadow::default(),
    }
}

fn modal_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Color::BLACK.into()),
        ..container::Style::default()
    }
}

fn backdrop_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.85).into()),
        ..container::Style::default()
    }
}
