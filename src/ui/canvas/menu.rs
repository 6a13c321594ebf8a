// SPDX-License-Identifier: MPL-2.0
//! Annotation menu shown after tapping a marker.

use crate::ui::design_tokens::{palette, radius, spacing, typography};
use iced::widget::{button, container, Column, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Theme};

/// Choices offered for the selected marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    EditDefect,
    AddNote,
    Cancel,
}

impl MenuAction {
    pub const ALL: [MenuAction; 3] = [MenuAction::EditDefect, MenuAction::AddNote, MenuAction::Cancel];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            MenuAction::EditDefect => "Edit defect",
            MenuAction::AddNote => "Add note",
            MenuAction::Cancel => "Cancel",
        }
    }
}

/// Renders the menu centred over a dimmed backdrop.
pub fn view<'a>(title: String) -> Element<'a, MenuAction> {
    let mut content = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(title).size(typography::TITLE_SM));

    for action in MenuAction::ALL {
        content = content.push(
            button(Text::new(action.label()).size(typography::BODY))
                .width(Length::Fixed(200.0))
                .padding([spacing::XS, spacing::MD])
                .on_press(action),
        );
    }

    let card = container(content)
        .padding(spacing::MD)
        .style(|theme: &Theme| container::Style {
            background: Some(Background::Color(theme.palette().background)),
            border: Border {
                radius: radius::MD.into(),
                width: 1.0,
                color: palette::GRAY_400,
            },
            ..Default::default()
        });

    container(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(Color {
                a: 0.4,
                ..palette::BLACK
            })),
            ..Default::default()
        })
        .into()
}
