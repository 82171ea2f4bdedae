use iced::widget::canvas::{self, Path};
use iced::{Color, Point, Rectangle};

/// A solid play triangle drawn with the canvas API.
///
/// Proportioned like the classic 24x24 media glyph (8,5 → 8,19 → 19,12)
/// and scaled to whatever bounds the widget is given, so the same
/// program serves both the small card badge and the large pause badge.
#[derive(Debug, Clone, Copy)]
pub struct PlayIcon;

impl<Message> canvas::Program<Message> for PlayIcon {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        let w = bounds.width;
        let h = bounds.height;

        let triangle = Path::new(|p| {
            p.move_to(Point::new(w * (8.0 / 24.0), h * (5.0 / 24.0)));
            p.line_to(Point::new(w * (8.0 / 24.0), h * (19.0 / 24.0)));
            p.line_to(Point::new(w * (19.0 / 24.0), h * (12.0 / 24.0)));
            p.close();
        });

        frame.fill(&triangle, Color::WHITE);

        vec![frame.into_geometry()]
    }
}
