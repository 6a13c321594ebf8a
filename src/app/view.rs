// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The canvas fills the window. Until an image is loaded a small prompt
//! floats over it; the placeholder image can still be annotated.

use super::Message;
use crate::ui::canvas;
use crate::ui::design_tokens::{palette, radius, spacing, typography};
use iced::widget::{button, container, Column, Stack, Text};
use iced::{Background, Border, Element, Length, Theme};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub canvas: &'a canvas::State,
    pub loading: bool,
}

/// Renders the application view.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let canvas_view = ctx.canvas.view().map(Message::Canvas);

    if ctx.canvas.image().is_some() && !ctx.loading {
        return canvas_view;
    }

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(canvas_view)
        .push(empty_state(ctx.loading))
        .into()
}

fn empty_state<'a>(loading: bool) -> Element<'a, Message> {
    let (caption, open) = if loading {
        ("Loading image...", None)
    } else {
        ("No image loaded. Tap to place markers, or open a plan.", Some(Message::OpenFileDialog))
    };

    let content = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(caption).size(typography::CAPTION))
        .push(
            button(Text::new("Open image").size(typography::BODY))
                .padding([spacing::XS, spacing::MD])
                .on_press_maybe(open),
        );

    let card = container(content)
        .padding(spacing::SM)
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
        .padding(spacing::LG)
        .width(Length::Shrink)
        .height(Length::Shrink)
        .into()
}
