/// Filter control row
///
/// One button per registered filter entry. The active entry is the only one
/// drawn with the accent background; activeness comes straight from
/// `FilterState`, so no per-button bookkeeping can drift out of sync.

use iced::widget::{button, row, text, Row};
use iced::{Background, Border, Color, Theme};

use crate::state::filter::FilterState;
use crate::Message;

pub fn view(filters: &FilterState) -> Row<'_, Message> {
    let mut controls = row![].spacing(8);
    for entry in filters.entries() {
        let active = entry.key == filters.active();
        controls = controls.push(
            button(text(entry.label.clone()).size(14))
                .padding([6.0, 16.0])
                .style(move |theme, status| filter_button(theme, status, active))
                .on_press(Message::FilterSelected(entry.key.clone())),
        );
    }
    controls
}

fn filter_button(_theme: &Theme, status: button::Status, active: bool) -> button::Style {
    let background = if active {
        super::ACCENT
    } else if matches!(status, button::Status::Hovered | button::Status::Pressed) {
        Color::from_rgb8(0x3A, 0x3A, 0x3A)
    } else {
        Color::from_rgb8(0x2A, 0x2A, 0x2A)
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: Color::WHITE,
        border: Border {
            radius: 16.0.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}
