use crate::gui::styles::{
    self,
    container_style::{content_container, ContainerLayer},
};
use crate::model::VisualMode;
use iced::{
    theme::Theme,
    widget::{container, text},
    Alignment, Background, Border, Length,
};

/// Pill that names the control's current visual mode
pub fn tracking_status_widget<'a, Message>(mode: VisualMode) -> iced::Element<'a, Message>
where
    Message: Clone + 'a,
{
    let (bg, fg, border) = match mode {
        VisualMode::Initial | VisualMode::TrackingOff => (
            styles::RED_BUTTON_COLOR,
            styles::RED_TEXT,
            styles::RED_BUTTON_BORDER,
        ),
        VisualMode::AcquiringFix => (
            styles::AMBER_BUTTON_COLOR,
            styles::AMBER_TEXT,
            styles::AMBER_BUTTON_BORDER,
        ),
        VisualMode::TrackingOn => (
            styles::GREEN_BUTTON_COLOR,
            styles::GREEN_TEXT,
            styles::GREEN_BUTTON_BORDER,
        ),
    };

    let inner = text(mode.to_string()).size(14).line_height(1.2);

    content_container(inner, ContainerLayer::Layer3)
        .padding([6, 12])
        .align_x(Alignment::Center)
        .align_y(Alignment::Center)
        .width(Length::Shrink)
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(bg)),
            text_color: Some(fg),
            border: Border {
                color: border,
                width: 1.0,
                radius: 12.0.into(),
            },
            ..Default::default()
        })
        .into()
}
