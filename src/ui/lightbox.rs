/// Modal lightbox overlay
///
/// Stacks the overlay over the page. The backdrop is a click target that
/// dismisses; the content panel is wrapped in `opaque` so clicks on it are
/// inert and never fall through to the backdrop. Escape dismissal lives in
/// the application's keyboard subscription, active exactly while the
/// lightbox is open.

use iced::widget::{button, center, column, container, image, mouse_area, opaque, row, stack, text, Space};
use iced::{Alignment, Background, Border, Color, ContentFit, Element, Length, Theme};

use crate::state::lightbox::LightboxContent;
use crate::Message;

const IMAGE_WIDTH: f32 = 760.0;
const IMAGE_HEIGHT: f32 = 500.0;

/// Compose the overlay over `base`
pub fn overlay<'a>(
    base: Element<'a, Message>,
    content: &'a LightboxContent,
    handle: Option<&image::Handle>,
    asset_url: String,
) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match handle {
        Some(handle) => image(handle.clone())
            .width(Length::Fixed(IMAGE_WIDTH))
            .height(Length::Fixed(IMAGE_HEIGHT))
            .content_fit(ContentFit::Contain)
            .into(),
        None => container(text("Loading image...").color(super::MUTED))
            .width(Length::Fixed(IMAGE_WIDTH))
            .height(Length::Fixed(IMAGE_HEIGHT))
            .center_x(Length::Fixed(IMAGE_WIDTH))
            .center_y(Length::Fixed(IMAGE_HEIGHT))
            .into(),
    };

    let close = row![
        Space::new(Length::Fill, Length::Shrink),
        button(text("\u{00D7}").size(18))
            .padding([2.0, 10.0])
            .style(close_button)
            .on_press(Message::LightboxDismissed),
    ];

    let mut panel = column![
        close,
        picture,
        text(&content.title).size(24).color(super::ACCENT),
    ]
    .spacing(12)
    .align_x(Alignment::Center);

    // No caption row at all when the record carries no description
    if let Some(caption) = &content.caption {
        panel = panel.push(text(caption).size(14).color(super::MUTED));
    }

    panel = panel.push(
        button(text("Open full resolution").size(13))
            .padding([6.0, 14.0])
            .on_press(Message::OpenHighRes {
                url: asset_url,
                title: content.title.clone(),
            }),
    );

    let panel = container(panel).padding(24).style(panel_style);

    stack![
        base,
        opaque(
            mouse_area(center(opaque(panel)).style(backdrop_style))
                .on_press(Message::LightboxDismissed)
        )
    ]
    .into()
}

/// 90% black backdrop behind the panel
fn backdrop_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: 0.9,
            ..Color::BLACK
        })),
        ..container::Style::default()
    }
}

fn panel_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(super::SURFACE)),
        text_color: Some(Color::WHITE),
        border: Border {
            radius: 8.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

fn close_button(_theme: &Theme, status: button::Status) -> button::Style {
    let background = if matches!(status, button::Status::Hovered | button::Status::Pressed) {
        Color::from_rgb8(0xFF, 0x8A, 0x5C)
    } else {
        super::ACCENT
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: Color::WHITE,
        border: Border {
            radius: 14.0.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}
