// SPDX-License-Identifier: MPL-2.0
//! Badge shape and color choices.

use std::fmt;
use std::str::FromStr;

// =============================================================================
// Rgb
// =============================================================================

/// Framework-independent 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);
    pub const BLACK: Rgb = Rgb::new(0x00, 0x00, 0x00);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Expands a 12-bit `#rgb` shorthand (`0xfaa` → `#ffaaaa`).
    #[must_use]
    pub const fn from_short_hex(hex: u16) -> Self {
        let r = ((hex >> 8) & 0xf) as u8;
        let g = ((hex >> 4) & 0xf) as u8;
        let b = (hex & 0xf) as u8;
        Self::new(r * 0x11, g * 0x11, b * 0x11)
    }
}

// =============================================================================
// Shape
// =============================================================================

/// Outline of the badge background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BadgeShape {
    /// Pill shape, corner radius of half the height.
    #[default]
    Round,
    /// Rounded rectangle, corner radius of a quarter of the height.
    Square,
}

impl BadgeShape {
    /// Corner radius for a badge of the given height.
    #[must_use]
    pub fn corner_radius(self, height: f32) -> f32 {
        match self {
            BadgeShape::Round => height / 2.0,
            BadgeShape::Square => height / 4.0,
        }
    }
}

// =============================================================================
// Color
// =============================================================================

/// Top and bottom stops of the badge fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GradientPair {
    pub start: Rgb,
    pub end: Rgb,
}

const RED: GradientPair = GradientPair {
    start: Rgb::from_short_hex(0xfaa),
    end: Rgb::from_short_hex(0xb00),
};
const BLUE: GradientPair = GradientPair {
    start: Rgb::from_short_hex(0xaaf),
    end: Rgb::from_short_hex(0x11b),
};
const GREEN: GradientPair = GradientPair {
    start: Rgb::from_short_hex(0x7c7),
    end: Rgb::from_short_hex(0x080),
};
const YELLOW: GradientPair = GradientPair {
    start: Rgb::from_short_hex(0xffc),
    end: Rgb::from_short_hex(0xdd0),
};

/// Light label color used on every badge but yellow ones.
pub const FONT_LIGHT: Rgb = Rgb::WHITE;
/// Dark label color used on yellow badges.
pub const FONT_DARK: Rgb = Rgb::from_short_hex(0x111);

/// Badge fill color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BadgeColor {
    #[default]
    Red,
    Blue,
    Green,
    Yellow,
}

impl BadgeColor {
    pub const ALL: [BadgeColor; 4] = [
        BadgeColor::Red,
        BadgeColor::Blue,
        BadgeColor::Green,
        BadgeColor::Yellow,
    ];

    /// Resolves a color name, falling back to red for anything unknown.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }

    #[must_use]
    pub fn gradient(self) -> GradientPair {
        match self {
            BadgeColor::Red => RED,
            BadgeColor::Blue => BLUE,
            BadgeColor::Green => GREEN,
            BadgeColor::Yellow => YELLOW,
        }
    }

    /// Label color readable on top of this fill.
    #[must_use]
    pub fn font_color(self) -> Rgb {
        match self {
            BadgeColor::Yellow => FONT_DARK,
            _ => FONT_LIGHT,
        }
    }
}

/// Error returned when a color name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownColor(pub String);

impl fmt::Display for UnknownColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown badge color: {}", self.0)
    }
}

impl std::error::Error for UnknownColor {}

impl FromStr for BadgeColor {
    type Err = UnknownColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "RED" => Ok(BadgeColor::Red),
            "BLUE" => Ok(BadgeColor::Blue),
            "GREEN" => Ok(BadgeColor::Green),
            "YELLOW" => Ok(BadgeColor::Yellow),
            _ => Err(UnknownColor(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_hex_expands_each_nibble() {
        assert_eq!(Rgb::from_short_hex(0xfaa), Rgb::new(0xff, 0xaa, 0xaa));
        assert_eq!(Rgb::from_short_hex(0x080), Rgb::new(0x00, 0x88, 0x00));
        assert_eq!(Rgb::from_short_hex(0xfff), Rgb::WHITE);
    }

    #[test]
    fn unknown_color_name_resolves_to_red() {
        assert_eq!(BadgeColor::from_name("PURPLE"), BadgeColor::Red);
        assert_eq!(
            BadgeColor::from_name("PURPLE").gradient(),
            BadgeColor::Red.gradient()
        );
    }

    #[test]
    fn color_names_are_case_insensitive() {
        assert_eq!(BadgeColor::from_name("green"), BadgeColor::Green);
        assert_eq!(BadgeColor::from_name("Yellow"), BadgeColor::Yellow);
    }

    #[test]
    fn only_yellow_uses_dark_font() {
        for color in BadgeColor::ALL {
            let expected = if color == BadgeColor::Yellow {
                FONT_DARK
            } else {
                FONT_LIGHT
            };
            assert_eq!(color.font_color(), expected);
        }
    }

    #[test]
    fn gradient_end_is_darker_than_start() {
        for color in BadgeColor::ALL {
            let pair = color.gradient();
            let start = u32::from(pair.start.r) + u32::from(pair.start.g) + u32::from(pair.start.b);
            let end = u32::from(pair.end.r) + u32::from(pair.end.g) + u32::from(pair.end.b);
            assert!(end < start, "{color:?} gradient should darken downwards");
        }
    }

    #[test]
    fn square_corners_are_tighter_than_round() {
        assert_eq!(BadgeShape::Round.corner_radius(18.0), 9.0);
        assert_eq!(BadgeShape::Square.corner_radius(18.0), 4.5);
    }
}
