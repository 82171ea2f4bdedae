use std::collections::HashMap;

use iced::widget::image::Handle;
use iced::widget::{button, canvas, column, container, image, row, scrollable, stack, text};
use iced::{Color, ContentFit, Element, Length, Theme};

use crate::state::data::VideoEntry;
use crate::ui::icons::PlayIcon;
use crate::Message;

/// Card geometry: two cards per row, two rows per page in the fixed
/// portrait viewport
const CARD_WIDTH: f32 = 216.0;
const CARD_HEIGHT: f32 = 360.0;
const GRID_SPACING: f32 = 12.0;

/// Height of one page section, close to the viewport height so each
/// page reads as its own screen while scrolling
const PAGE_HEIGHT: f32 = 800.0;

/// Edge length of the small play badge on each card
const PLAY_BADGE_SIZE: f32 = 44.0;

/// The scrollable column of catalog pages shown while nothing is selected
pub fn catalog_grid<'a>(
    pages: &'a [Vec<VideoEntry>],
    thumbnails: &'a HashMap<String, Handle>,
) -> Element<'a, Message> {
    let mut sections = column![];
    for page in pages {
        sections = sections.push(page_section(page, thumbnails));
    }

    scrollable(sections.width(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// One catalog page: up to four cards laid out 2x2 and centered
fn page_section<'a>(
    page: &'a [VideoEntry],
    thumbnails: &'a HashMap<String, Handle>,
) -> Element<'a, Message> {
    let mut grid = column![].spacing(GRID_SPACING);
    for pair in page.chunks(2) {
        let mut cards = row![].spacing(GRID_SPACING);
        for entry in pair {
            cards = cards.push(video_card(entry, thumbnails.get(&entry.id)));
        }
        grid = grid.push(cards);
    }

    container(grid)
        .width(Length::Fill)
        .height(Length::Fixed(PAGE_HEIGHT))
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

/// A single thumbnail card with a play badge; pressing it selects the
/// entry for full-screen playback
fn video_card<'a>(entry: &'a VideoEntry, thumbnail: Option<&Handle>) -> Element<'a, Message> {
    let artwork: Element<'a, Message> = match thumbnail {
        Some(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Cover)
            .into(),
        // Decode still in flight or failed: neutral placeholder card
        None => container(text(&entry.title).size(14))
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .style(placeholder_style)
            .into(),
    };

    let badge = container(
        canvas(PlayIcon)
            .width(Length::Fixed(PLAY_BADGE_SIZE))
            .height(Length::Fixed(PLAY_BADGE_SIZE)),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .center_x(Length::Fill)
    .center_y(Length::Fill);

    button(stack![artwork, badge])
        .width(Length::Fixed(CARD_WIDTH))
        .height(Length::Fixed(CARD_HEIGHT))
        .padding(0)
        .style(card_style)
        .on_press(Message::VideoSelected(entry.clone()))
        .into()
}

fn card_style(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Color::from_rgb(0.16, 0.16, 0.16),
        _ => Color::from_rgb(0.10, 0.10, 0.10),
    };

    button::Style {
        background: Some(background.into()),
        text_color: Color::WHITE,
        border: iced::border::Border {
            color: Color::from_rgba(1.0, 1.0, 1.0, 0.08),
            width: 1.0,
            radius: 12.0.into(),
        },
        shadow: iced::Shadow::default(),
    }
}

fn placeholder_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Color::from_rgb(0.13, 0.13, 0.13).into()),
        text_color: Some(Color::from_rgb(0.6, 0.6, 0.6)),
        ..container::Style::default()
    }
}
