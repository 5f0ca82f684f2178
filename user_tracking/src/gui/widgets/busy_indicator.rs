use iced::{
    mouse,
    widget::canvas::{self, path::Arc, Frame, Geometry, LineCap, Path, Program, Stroke},
    Color, Length, Point, Radians, Rectangle, Renderer, Theme,
};
use std::f32::consts::PI;

/// Rotating arc shown while the map is still looking for a usable fix.
pub struct BusyIndicator {
    phase: f32,
    color: Color,
}

impl BusyIndicator {
    pub fn new(phase: f32, color: Color) -> Self {
        Self { phase, color }
    }
}

impl<Message> Program<Message> for BusyIndicator {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        // redrawn every frame while spinning, so no cache
        let mut frame = Frame::new(renderer, bounds.size());
        let center = Point::new(bounds.width / 2.0, bounds.height / 2.0);
        let line_width = (bounds.width.min(bounds.height) * 0.12).max(1.5);
        let radius = bounds.width.min(bounds.height) / 2.0 - line_width;

        let track = Path::circle(center, radius);
        frame.stroke(
            &track,
            Stroke::default()
                .with_width(line_width)
                .with_color(Color {
                    a: self.color.a * 0.25,
                    ..self.color
                }),
        );

        let arc = Path::new(|builder| {
            builder.arc(Arc {
                center,
                radius,
                start_angle: Radians(self.phase),
                end_angle: Radians(self.phase + 1.5 * PI),
            });
        });
        frame.stroke(
            &arc,
            Stroke::default()
                .with_width(line_width)
                .with_color(self.color)
                .with_line_cap(LineCap::Round),
        );

        vec![frame.into_geometry()]
    }
}

/// Create a busy indicator widget
pub fn busy_indicator<'a, Message>(
    phase: f32,
    color: Color,
    size: f32,
) -> canvas::Canvas<BusyIndicator, Message>
where
    Message: 'a + Clone + 'static,
{
    canvas::Canvas::new(BusyIndicator::new(phase, color))
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
}
