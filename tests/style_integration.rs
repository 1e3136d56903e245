// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::widget::button::Status;
    use iced::{Background, Theme};
    use iced_badges::badge::{Badge, BadgeConfig};
    use iced_badges::domain::badge::{BadgeColor, Platform};
    use iced_badges::ui::badge::view_style;
    use iced_badges::ui::design_tokens::{self, opacity, palette, sizing, spacing};
    use iced_badges::ui::styles::{button, container};
    use iced_badges::ui::theming::{AppTheme, ThemeMode};

    #[test]
    fn all_styles_are_callable() {
        let theme = AppTheme::new(ThemeMode::Dark);

        let _ = button::primary(&theme.colors)(&Theme::Dark, Status::Active);
        let _ = container::fill(palette::WINDOW)(&Theme::Dark);
        let _ = container::tab(true, true)(&Theme::Dark);
    }

    #[test]
    fn design_tokens_are_accessible() {
        // Palette
        let _ = palette::PRIMARY_500;
        let _ = palette::WINDOW;

        // Spacing
        let _ = spacing::MD;

        // Opacity
        let _ = opacity::OVERLAY_PRESSED;

        // Sizing
        assert!(sizing::BUTTON_WIDTH > sizing::TAB_MIDDLE_WIDTH);
    }

    #[test]
    fn theming_switches_correctly() {
        let light = AppTheme::new(ThemeMode::Light);
        let dark = AppTheme::new(ThemeMode::Dark);

        assert!(light.colors.window.b > dark.colors.window.b);
        assert_eq!(light.mode.iced_theme(), Theme::Light);
        assert_eq!(dark.mode.iced_theme(), Theme::Dark);
    }

    #[test]
    fn badge_colors_ignore_theme() {
        for color in BadgeColor::ALL {
            let badge = Badge::new(
                BadgeConfig::new().value(5).color(color).use_shading(false),
                Platform::Ios,
            );
            let style = view_style(&badge.primitives().background);
            let expected = design_tokens::color(color.gradient().end, opacity::OPAQUE);
            assert_eq!(style.background, Some(Background::Color(expected)));
        }
    }
}
