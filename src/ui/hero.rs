/// Hero banner
///
/// Composites the banner bottom-up: background image, then the decoration
/// layers recorded in `HeroState`, then the heading content. The heading is
/// pushed last on purpose so it always stacks above the scrim, whatever
/// order the layers were inserted in.

use iced::widget::{center, column, container, image, text, Space, Stack};
use iced::{Alignment, Background, Border, Color, ContentFit, Element, Length, Theme};

use crate::state::hero::{HeroLayer, HeroState};
use crate::Message;

const HERO_HEIGHT: f32 = 280.0;

pub fn view(hero: &HeroState) -> Element<'_, Message> {
    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fixed(HERO_HEIGHT));

    if let Some(handle) = hero.handle() {
        layers = layers.push(
            image(handle.clone())
                .width(Length::Fill)
                .height(Length::Fill)
                .content_fit(ContentFit::Cover),
        );
    }

    if hero.has_layer(HeroLayer::Scrim) {
        layers = layers.push(
            container(Space::new(Length::Fill, Length::Fill)).style(scrim_style),
        );
    }

    layers = layers.push(center(heading(hero.has_layer(HeroLayer::LogoBackdrop))));

    container(layers)
        .width(Length::Fill)
        .style(banner_style)
        .into()
}

fn heading<'a>(with_backdrop: bool) -> Element<'a, Message> {
    let content = column![
        text("Lens & Light Studio").size(40),
        text("Photography Portfolio").size(16).color(super::MUTED),
    ]
    .spacing(6)
    .align_x(Alignment::Center);

    let heading = container(content).padding([12.0, 24.0]);
    if with_backdrop {
        heading.style(backdrop_style).into()
    } else {
        heading.into()
    }
}

/// 35% black over the photo so the heading stays readable
fn scrim_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: 0.35,
            ..Color::BLACK
        })),
        ..container::Style::default()
    }
}

/// Darker rounded panel behind the heading text
fn backdrop_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: 0.45,
            ..Color::BLACK
        })),
        text_color: Some(Color::WHITE),
        border: Border {
            radius: 15.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

fn banner_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgb8(0x14, 0x14, 0x14))),
        ..container::Style::default()
    }
}
