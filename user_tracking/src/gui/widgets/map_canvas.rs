use crate::gui::styles;
use crate::map::MapSnapshot;
use iced::mouse;
use iced::widget::canvas::{self, Cache, Frame, Geometry, Path, Program, Stroke, Text};
use iced::{alignment, Color, Length, Point, Rectangle, Renderer, Size, Theme};

const GRID_SPACING: f32 = 40.0;
/// Screen pixels per meter of accuracy radius
const PIXELS_PER_METER: f32 = 0.25;

/// Stand-in map surface: a grid, the user location, and the accuracy circle.
/// The grid only depends on the bounds, so it lives in a cache owned by the
/// caller and is redrawn on resize.
pub struct MapCanvas<'a> {
    snapshot: MapSnapshot,
    tint: Color,
    grid_cache: &'a Cache,
}

impl<'a> MapCanvas<'a> {
    pub fn new(snapshot: MapSnapshot, tint: Color, grid_cache: &'a Cache) -> Self {
        Self {
            snapshot,
            tint,
            grid_cache,
        }
    }
}

impl<Message> Program<Message> for MapCanvas<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let size = Size::new(bounds.width, bounds.height);

        let grid = self.grid_cache.draw(renderer, size, |frame| {
            let mut x = 0.0;
            while x < size.width {
                frame.stroke(
                    &Path::line(Point::new(x, 0.0), Point::new(x, size.height)),
                    Stroke::default().with_width(1.0).with_color(styles::MAP_GRID),
                );
                x += GRID_SPACING;
            }
            let mut y = 0.0;
            while y < size.height {
                frame.stroke(
                    &Path::line(Point::new(0.0, y), Point::new(size.width, y)),
                    Stroke::default().with_width(1.0).with_color(styles::MAP_GRID),
                );
                y += GRID_SPACING;
            }
        });

        let mut overlay = Frame::new(renderer, size);
        let center = overlay.center();

        match self.snapshot.location {
            Some(location) => {
                let accuracy = location.horizontal_accuracy.max(0.0) as f32;
                let radius = (accuracy * PIXELS_PER_METER).min(size.width.max(size.height));
                let circle = Path::circle(center, radius);
                overlay.fill(&circle, Color { a: 0.12, ..self.tint });
                overlay.stroke(
                    &circle,
                    Stroke::default()
                        .with_width(1.0)
                        .with_color(Color { a: 0.5, ..self.tint }),
                );

                let dot = Path::circle(center, 6.0);
                overlay.fill(&dot, self.tint);
                overlay.stroke(
                    &dot,
                    Stroke::default().with_width(2.0).with_color(Color::WHITE),
                );

                let mut label = Text {
                    content: format!(
                        "{:.5}, {:.5}  ±{:.0} m",
                        location.latitude, location.longitude, location.horizontal_accuracy
                    ),
                    position: Point::new(center.x, size.height - 16.0),
                    size: iced::Pixels(13.0),
                    color: styles::TEXT_COLOR,
                    ..Text::default()
                };
                label.horizontal_alignment = alignment::Horizontal::Center;
                label.vertical_alignment = alignment::Vertical::Center;
                overlay.fill_text(label);
            }
            None => {
                let mut label = Text {
                    content: "No location".to_owned(),
                    position: center,
                    size: iced::Pixels(16.0),
                    color: Color { a: 0.6, ..styles::TEXT_COLOR },
                    ..Text::default()
                };
                label.horizontal_alignment = alignment::Horizontal::Center;
                label.vertical_alignment = alignment::Vertical::Center;
                overlay.fill_text(label);
            }
        }

        vec![grid, overlay.into_geometry()]
    }
}

pub fn map_canvas<'a, Message>(
    snapshot: MapSnapshot,
    tint: Color,
    grid_cache: &'a Cache,
) -> canvas::Canvas<MapCanvas<'a>, Message>
where
    Message: 'a + Clone + 'static,
{
    canvas::Canvas::new(MapCanvas::new(snapshot, tint, grid_cache))
        .width(Length::Fill)
        .height(Length::Fill)
}
