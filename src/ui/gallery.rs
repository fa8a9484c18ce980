/// Portfolio grid
///
/// Renders the gallery state: a wrapped grid of tiles when a load produced
/// images, otherwise one of three placeholders (loading, no results, error).
/// The "no results" and error placeholders are deliberately distinct; zero
/// matches is a normal outcome, not a failure.

use std::collections::HashMap;

use iced::widget::{column, container, image, mouse_area, row, text};
use iced::{Alignment, Background, Border, Color, ContentFit, Element, Length, Theme};
use iced_aw::Wrap;

use crate::state::data::ImageRecord;
use crate::state::filter;
use crate::state::gallery::{Gallery, Presentation};
use crate::Message;

const TILE_WIDTH: f32 = 280.0;
const THUMB_HEIGHT: f32 = 200.0;

pub fn view<'a>(
    gallery: &'a Gallery,
    active_filter: &'a str,
    thumbnails: &HashMap<String, image::Handle>,
) -> Element<'a, Message> {
    match gallery.presentation() {
        Presentation::Loading => placeholder("Loading portfolio...", None),
        Presentation::NoResults => placeholder(
            "No images found",
            Some("Upload some images through the admin panel to get started!"),
        ),
        Presentation::Error => placeholder(
            "Unable to load portfolio",
            Some("Please try again later."),
        ),
        Presentation::Tiles(images) => {
            let tiles: Vec<Element<'a, Message>> = images
                .iter()
                .map(|record| tile(record, active_filter, thumbnails.get(&record.filename)))
                .collect();
            Wrap::with_elements(tiles)
                .spacing(16.0)
                .line_spacing(16.0)
                .into()
        }
    }
}

/// One clickable tile: thumbnail, title, optional caption, category tags
fn tile<'a>(
    record: &'a ImageRecord,
    active_filter: &'a str,
    handle: Option<&image::Handle>,
) -> Element<'a, Message> {
    let thumb: Element<'a, Message> = match handle {
        Some(handle) => image(handle.clone())
            .width(Length::Fixed(TILE_WIDTH))
            .height(Length::Fixed(THUMB_HEIGHT))
            .content_fit(ContentFit::Cover)
            .into(),
        // Bytes not fetched yet; keep the slot so the grid does not reflow
        None => container(text("...").size(20).color(super::MUTED))
            .width(Length::Fixed(TILE_WIDTH))
            .height(Length::Fixed(THUMB_HEIGHT))
            .center_x(Length::Fixed(TILE_WIDTH))
            .center_y(Length::Fixed(THUMB_HEIGHT))
            .into(),
    };

    let mut tags = row![].spacing(6);
    for category in &record.categories {
        let highlighted =
            active_filter != filter::ALL && category.filter_key() == active_filter;
        tags = tags.push(tag(category.name.clone(), highlighted));
    }

    let mut info = column![text(record.display_title()).size(16)].spacing(4);
    if let Some(caption) = record.caption() {
        info = info.push(text(caption).size(12).color(super::MUTED));
    }
    info = info.push(tags);

    let card = container(column![thumb, container(info).padding(10)])
        .width(Length::Fixed(TILE_WIDTH))
        .style(card_style);

    mouse_area(card)
        .on_press(Message::ImageClicked(record.clone()))
        .into()
}

fn tag<'a>(name: String, highlighted: bool) -> Element<'a, Message> {
    container(text(name).size(11))
        .padding([2.0, 8.0])
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(if highlighted {
                super::ACCENT
            } else {
                Color::from_rgb8(0x33, 0x33, 0x33)
            })),
            text_color: Some(Color::WHITE),
            border: Border {
                radius: 10.0.into(),
                ..Border::default()
            },
            ..container::Style::default()
        })
        .into()
}

fn card_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(super::SURFACE)),
        border: Border {
            radius: 8.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

fn placeholder<'a>(heading: &'a str, detail: Option<&'a str>) -> Element<'a, Message> {
    let mut content = column![text(heading).size(22)]
        .spacing(8)
        .align_x(Alignment::Center);
    if let Some(detail) = detail {
        content = content.push(text(detail).size(14).color(super::MUTED));
    }
    container(content)
        .width(Length::Fill)
        .padding(48)
        .center_x(Length::Fill)
        .into()
}
