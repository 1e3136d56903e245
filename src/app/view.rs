// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Everything is laid out the way the demo screen is drawn on a phone:
//! fixed offsets from the top of the window, horizontally centered, with
//! the fake tab bar pinned to the bottom.

use super::demo::{Demo, CHANGE_BUTTON_TOP, CLEAR_BUTTON_TOP};
use super::Message;
use crate::badge::primitives::FONT_FAMILY;
use crate::badge::Anchor;
use crate::ui::badge::{self, anchored};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::tab_bar;
use crate::ui::theming::AppTheme;
use iced::font::{Style, Weight};
use iced::widget::{button, text, Container, Stack, Text};
use iced::{alignment, Color, Element, Font, Length, Theme};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub demo: &'a Demo,
    pub active_tab: usize,
    pub theme: &'a AppTheme,
    pub window_width: f32,
    pub warning: Option<&'a str>,
}

/// Title lines: text, top offset, font size, italic.
const TITLES: [(&str, i32, f32, bool); 4] = [
    ("DEMO", 10, typography::TITLE, false),
    ("of the", 38, typography::SUBTITLE, true),
    ("Badge Module", 52, typography::HEADLINE, false),
    (
        "Configure: Color, Size, and Shape\nToggle: Border and Shading",
        112,
        typography::CAPTION,
        true,
    ),
];

/// Renders the demo window.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let colors = &ctx.theme.colors;
    let mid = ctx.window_width / 2.0;
    let button_left = (mid - sizing::BUTTON_WIDTH / 2.0) as i32;

    let mut layers = Stack::new().width(Length::Fill).height(Length::Fill);

    for (index, (content, top, size, italic)) in TITLES.into_iter().enumerate() {
        let color = if index == TITLES.len() - 1 {
            colors.caption
        } else {
            colors.title
        };
        layers = layers.push(anchored(
            centered_title(content, size, italic, color),
            Anchor::top_left(top, 0),
        ));
    }

    layers = layers
        .push(anchored(
            action_button("Clear Badges", Message::ClearBadges, ctx.theme),
            Anchor::top_left(CLEAR_BUTTON_TOP, button_left),
        ))
        .push(anchored(
            action_button("Change Values", Message::ChangeValues, ctx.theme),
            Anchor::top_left(CHANGE_BUTTON_TOP, button_left),
        ));

    if let Some(warning) = ctx.warning {
        let notice = Text::new(warning.to_owned())
            .size(typography::TAB)
            .style(|_theme: &Theme| text::Style {
                color: Some(Color::WHITE),
            });
        layers = layers.push(anchored(
            Container::new(notice)
                .width(Length::Fill)
                .padding(spacing::XS)
                .align_x(alignment::Horizontal::Center),
            Anchor::top_left(CHANGE_BUTTON_TOP + 2 * sizing::BUTTON_HEIGHT as i32, 0),
        ));
    }

    for element in badge::attached(ctx.demo.window(), ctx.demo.badges()) {
        layers = layers.push(element);
    }

    layers = layers.push(tab_bar::view(
        ctx.demo.tabs(),
        ctx.active_tab,
        ctx.demo.badges(),
        ctx.window_width,
        colors,
        Message::TabPressed,
    ));

    Container::new(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::fill(colors.window))
        .into()
}

fn centered_title<'a>(
    content: &'static str,
    size: f32,
    italic: bool,
    color: Color,
) -> Element<'a, Message> {
    let font = Font {
        weight: Weight::Bold,
        style: if italic { Style::Italic } else { Style::Normal },
        ..Font::with_name(FONT_FAMILY)
    };
    let title = Text::new(content)
        .size(size)
        .font(font)
        .align_x(alignment::Horizontal::Center)
        .style(move |_theme: &Theme| text::Style { color: Some(color) });

    Container::new(title)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .into()
}

fn action_button<'a>(
    label: &'static str,
    message: Message,
    theme: &AppTheme,
) -> Element<'a, Message> {
    let content = Container::new(Text::new(label))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    button(content)
        .on_press(message)
        .width(Length::Fixed(sizing::BUTTON_WIDTH))
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .style(styles::button::primary(&theme.colors))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::badge::Platform;
    use crate::ui::theming::ThemeMode;

    #[test]
    fn renders_with_and_without_warning() {
        let demo = Demo::new(Platform::Ios, 400);
        let theme = AppTheme::new(ThemeMode::Light);
        let _plain = view(ViewContext {
            demo: &demo,
            active_tab: 0,
            theme: &theme,
            window_width: 400.0,
            warning: None,
        });
        let _warned = view(ViewContext {
            demo: &demo,
            active_tab: 2,
            theme: &theme,
            window_width: 400.0,
            warning: Some("settings.toml could not be read"),
        });
    }

    #[test]
    fn caption_is_the_last_title() {
        let (content, top, _, italic) = TITLES[TITLES.len() - 1];
        assert!(content.starts_with("Configure"));
        assert_eq!(top, 112);
        assert!(italic);
    }
}
