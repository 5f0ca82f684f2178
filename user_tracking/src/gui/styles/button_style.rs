use iced::{
    widget::button::Status,
    widget::{button, container, Button},
    Alignment, Background, Border, Color, Theme,
};

use crate::gui::styles;

fn drop_shadow(enabled: bool) -> iced::Shadow {
    iced::Shadow {
        offset: iced::Vector::new(1.0, 1.0),
        color: Color {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            a: if enabled { 0.2 } else { 0.1 },
        }, // soft drop shadow
        blur_radius: 3.0,
    }
}

pub fn demo_button<'a, Message>(
    content: impl Into<iced::Element<'a, Message>>,
    message: Option<Message>,
    enabled: bool,
) -> Button<'a, Message>
where
    Message: 'a + Clone,
{
    let mut btn = button(
        container(content)
            .align_x(Alignment::Center)
            .align_y(Alignment::Center)
            .width(iced::Length::Fill),
    )
    .padding([6, 12]);

    // Only set on_press if enabled and message is provided
    if enabled {
        if let Some(msg) = message {
            btn = btn.on_press(msg);
        }
    }

    btn.style(move |_theme: &Theme, status| {
        let hovered = matches!(status, Status::Hovered);
        let disabled_color = Color::from_rgb(0.3, 0.3, 0.3);
        let disabled_text_color = Color::from_rgb(0.5, 0.5, 0.5);

        iced::widget::button::Style {
            background: Some(Background::Color(if enabled {
                styles::BUTTON_COLOR
            } else {
                disabled_color
            })),

            text_color: if !enabled {
                disabled_text_color
            } else if hovered {
                styles::ACCENT_COLOR
            } else {
                styles::TEXT_COLOR
            },

            shadow: drop_shadow(enabled),
            border: Border {
                color: if !enabled {
                    disabled_color
                } else if hovered {
                    styles::ACCENT_COLOR
                } else {
                    styles::ELEMENT_BORDER
                },
                width: 1.0,
                radius: 7.0.into(),
            },
        }
    })
}

/// Square surface of the tracking control. Icons are tinted separately, so
/// hover only changes the border.
pub fn tracking_button<'a, Message>(
    content: impl Into<iced::Element<'a, Message>>,
    corner_radius: f32,
) -> Button<'a, Message>
where
    Message: 'a + Clone,
{
    button(content)
        .padding(6)
        .style(move |_theme: &Theme, status| {
            let hovered = matches!(status, Status::Hovered);
            let pressed = matches!(status, Status::Pressed);
            iced::widget::button::Style {
                background: Some(Background::Color(if pressed {
                    styles::PRESSED_BUTTON_COLOR
                } else {
                    styles::BUTTON_COLOR
                })),
                text_color: styles::TEXT_COLOR,
                shadow: drop_shadow(true),
                border: Border {
                    color: if hovered {
                        styles::ACCENT_COLOR
                    } else {
                        styles::ELEMENT_BORDER
                    },
                    width: 1.0,
                    radius: corner_radius.into(),
                },
            }
        })
}
