// SPDX-License-Identifier: MPL-2.0
//! Iced rendering of badge primitives.
//!
//! Each [`Layer`] becomes a fixed-size container offset inside a
//! [`Stack`]; the stack is then pinned to the badge's [`Anchor`] inside
//! whatever view the badge is attached to.

use crate::badge::primitives::{LabelPrimitive, LinearGradient, ViewPrimitive};
use crate::badge::{Anchor, Badge, BadgeSlots, HorizontalAnchor, Layer, VerticalAnchor};
use crate::ui::design_tokens::{self, opacity};
use iced::font::Weight;
use iced::gradient::Linear;
use iced::widget::{container, text, Container, Space, Stack, Text};
use iced::{
    alignment, Background, Border, Element, Font, Gradient, Length, Padding, Radians, Theme,
};

/// Renders a badge, or an empty space while it is hidden.
pub fn view<'a, Message: 'a>(badge: &Badge) -> Element<'a, Message> {
    let primitives = badge.primitives();
    if !primitives.container.visible {
        return Space::new().into();
    }

    let stack = primitives
        .layers()
        .into_iter()
        .fold(Stack::new(), |stack, layer| {
            let element = match layer {
                Layer::View(view) => view_layer(view),
                Layer::Label(label) => label_layer(label),
            };
            stack.push(element)
        })
        .width(Length::Fixed(primitives.container.width))
        .height(Length::Fixed(primitives.container.height));

    anchored(stack, primitives.container.anchor)
}

/// Renders the badges attached to `slots`, bottom to top.
pub fn attached<'a, Message: 'a>(
    slots: &BadgeSlots,
    badges: &[Badge],
) -> Vec<Element<'a, Message>> {
    slots
        .ids()
        .iter()
        .filter_map(|id| badges.iter().find(|badge| badge.id() == *id))
        .map(view)
        .collect()
}

/// Pins `content` to an edge offset inside a view filling its parent.
///
/// Negative offsets are treated as zero.
pub fn anchored<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    anchor: Anchor,
) -> Element<'a, Message> {
    let mut padding = Padding::ZERO;
    let align_y = match anchor.vertical {
        VerticalAnchor::Top(top) => {
            padding.top = offset(top);
            alignment::Vertical::Top
        }
        VerticalAnchor::Bottom(bottom) => {
            padding.bottom = offset(bottom);
            alignment::Vertical::Bottom
        }
    };
    let align_x = match anchor.horizontal {
        HorizontalAnchor::Left(left) => {
            padding.left = offset(left);
            alignment::Horizontal::Left
        }
        HorizontalAnchor::Right(right) => {
            padding.right = offset(right);
            alignment::Horizontal::Right
        }
    };

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(padding)
        .align_x(align_x)
        .align_y(align_y)
        .into()
}

fn offset(pixels: i32) -> f32 {
    pixels.max(0) as f32
}

/// Places `content` at `(top, left)` within its stack layer.
fn placed<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    top: f32,
    left: f32,
) -> Element<'a, Message> {
    Container::new(content)
        .padding(Padding {
            top,
            left,
            ..Padding::ZERO
        })
        .into()
}

fn view_layer<'a, Message: 'a>(view: &ViewPrimitive) -> Element<'a, Message> {
    let primitive = *view;
    let shape = Container::new(Space::new())
        .width(Length::Fixed(view.width))
        .height(Length::Fixed(view.height))
        .style(move |_theme: &Theme| view_style(&primitive));
    placed(shape, view.top, view.left)
}

fn label_layer<'a, Message: 'a>(label: &LabelPrimitive) -> Element<'a, Message> {
    let color = design_tokens::color(label.color, opacity::OPAQUE);
    let content = Text::new(label.text.clone().unwrap_or_default())
        .size(f32::from(label.font_size))
        .font(Font {
            weight: if label.bold { Weight::Bold } else { Weight::Normal },
            ..Font::with_name(label.font_family)
        })
        .style(move |_theme: &Theme| text::Style { color: Some(color) });

    let centered = Container::new(content)
        .width(Length::Fixed(label.width))
        .height(Length::Fixed(label.height))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);
    placed(centered, label.top, label.left)
}

/// Container style for a view primitive.
#[must_use]
pub fn view_style(view: &ViewPrimitive) -> container::Style {
    let background = match view.gradient {
        Some(gradient) => gradient_background(gradient, view.height, view.opacity),
        None => Background::Color(design_tokens::color(view.background, view.opacity)),
    };

    container::Style {
        background: Some(background),
        border: Border {
            color: design_tokens::color(view.border_color, opacity::OPAQUE),
            width: view.border_width,
            radius: view.corner_radius.into(),
        },
        ..Default::default()
    }
}

fn gradient_background(gradient: LinearGradient, height: f32, alpha: f32) -> Background {
    let end_offset = if height > 0.0 {
        (gradient.end_y / height).clamp(0.0, 1.0)
    } else {
        1.0
    };
    let linear = Linear::new(Radians::PI)
        .add_stop(0.0, design_tokens::color(gradient.start, alpha))
        .add_stop(end_offset, design_tokens::color(gradient.end, alpha));
    Background::Gradient(Gradient::Linear(linear))
}
