// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Design tokens for the badge demo, following the W3C Design Tokens standard.

## Organization

- **Palette**: Demo window and tab bar colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Demo component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Button shadows

Badge colors themselves are not tokens: they come from
[`BadgeColor`](crate::domain::badge::BadgeColor) and are converted with
[`color`].

## Examples

```
use iced_badges::ui::design_tokens::{palette, spacing};

let background = palette::WINDOW;
let padding = spacing::MD; // 16px
```
"#]

use crate::domain::badge::Rgb;
use iced::Color;

/// Converts a badge color into an Iced color with the given opacity.
#[must_use]
pub fn color(rgb: Rgb, alpha: f32) -> Color {
    Color::from_rgba8(rgb.r, rgb.g, rgb.b, alpha)
}

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    /// Demo window background (`#68a`).
    pub const WINDOW: Color = Color::from_rgb(0.4, 0.533, 0.667);
    /// Demo window background in dark mode.
    pub const WINDOW_DARK: Color = Color::from_rgb(0.16, 0.21, 0.27);

    /// Inactive tab (`#111`).
    pub const TAB: Color = Color::from_rgb(0.067, 0.067, 0.067);
    /// Active tab (`#333`).
    pub const TAB_ACTIVE: Color = Color::from_rgb(0.2, 0.2, 0.2);
    /// Inactive tab label (`#999`).
    pub const TAB_TEXT: Color = Color::from_rgb(0.6, 0.6, 0.6);
    /// Active tab label (`#fff`).
    pub const TAB_TEXT_ACTIVE: Color = Color::WHITE;
    /// Strip behind the tabs (`#777`).
    pub const TAB_BAR: Color = Color::from_rgb(0.467, 0.467, 0.467);
    pub const TAB_BAR_DARK: Color = Color::from_rgb(0.27, 0.27, 0.27);

    // Buttons
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_PRESSED: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const BUTTON_WIDTH: f32 = 250.0;
    pub const BUTTON_HEIGHT: f32 = 40.0;

    pub const TAB_HEIGHT: f32 = 40.0;
    /// The middle tab sticks out above the others.
    pub const TAB_MIDDLE_HEIGHT: f32 = 50.0;
    pub const TAB_MIDDLE_WIDTH: f32 = 80.0;
    pub const TAB_BAR_HEIGHT: f32 = 42.0;
    /// Gap between tabs and around the tab bar.
    pub const TAB_GAP: f32 = 1.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font sizes used by the demo screen.

    /// "Badge Module" headline
    pub const HEADLINE: f32 = 32.0;

    /// "DEMO"
    pub const TITLE: f32 = 20.0;

    /// "of the"
    pub const SUBTITLE: f32 = 15.0;

    /// Feature caption under the headline
    pub const CAPTION: f32 = 13.0;

    /// Tab labels
    pub const TAB: f32 = 12.0;

    /// Middle tab glyph
    pub const TAB_GLYPH: f32 = 28.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
}

// ============================================================================
// Shadows
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);

    assert!(sizing::TAB_MIDDLE_HEIGHT > sizing::TAB_HEIGHT);
    assert!(sizing::TAB_BAR_HEIGHT > sizing::TAB_HEIGHT);

    assert!(typography::HEADLINE > typography::TITLE);
    assert!(typography::TITLE > typography::SUBTITLE);
    assert!(typography::SUBTITLE > typography::CAPTION);
    assert!(typography::CAPTION > typography::TAB);
};
