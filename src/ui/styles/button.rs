// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{opacity, palette::WHITE, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Style for the demo's two action buttons.
pub fn primary(colors: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let base = colors.brand_primary;
    let edge = colors.brand_secondary;
    let hover = colors.brand_hover;

    move |_theme: &Theme, status: button::Status| {
        let (background, shadow) = match status {
            button::Status::Hovered => (hover, shadow::SM),
            button::Status::Pressed => (
                Color {
                    a: opacity::OVERLAY_PRESSED,
                    ..base
                },
                shadow::NONE,
            ),
            button::Status::Active | button::Status::Disabled => (base, shadow::SM),
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: WHITE,
            border: Border {
                color: edge,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow,
            snap: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_uses_lighter_brand_color() {
        let colors = ColorScheme::light();
        let style = primary(&colors);
        let active = style(&Theme::Light, button::Status::Active);
        let hovered = style(&Theme::Light, button::Status::Hovered);
        assert_eq!(
            active.background,
            Some(Background::Color(colors.brand_primary))
        );
        assert_eq!(
            hovered.background,
            Some(Background::Color(colors.brand_hover))
        );
    }

    #[test]
    fn pressed_drops_shadow() {
        let style = primary(&ColorScheme::dark());
        let pressed = style(&Theme::Dark, button::Status::Pressed);
        assert_eq!(pressed.shadow, shadow::NONE);
        assert_eq!(pressed.text_color, WHITE);
    }
}
