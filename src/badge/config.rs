// SPDX-License-Identifier: MPL-2.0
//! Badge construction parameters.
//!
//! # Defaults
//!
//! | Option        | Default            |
//! |---------------|--------------------|
//! | `value`       | none (hidden)      |
//! | `size`        | [`BadgeSize::Tab`] |
//! | `shape`       | [`BadgeShape::Round`] |
//! | `color`       | [`BadgeColor::Red`] |
//! | `use_border`  | `true`             |
//! | `use_shading` | `true`             |
//! | position      | top 0, left 0      |
//!
//! When both `top` and `bottom` are given, `top` wins; likewise `left`
//! wins over `right`.

use crate::domain::badge::{BadgeColor, BadgeCount, BadgeHeight, BadgeShape, BadgeSize};

// =============================================================================
// Anchor
// =============================================================================

/// Vertical edge the badge is offset from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAnchor {
    Top(i32),
    Bottom(i32),
}

/// Horizontal edge the badge is offset from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAnchor {
    Left(i32),
    Right(i32),
}

/// Resolved badge position inside its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    pub vertical: VerticalAnchor,
    pub horizontal: HorizontalAnchor,
}

impl Anchor {
    #[must_use]
    pub fn new(vertical: VerticalAnchor, horizontal: HorizontalAnchor) -> Self {
        Self {
            vertical,
            horizontal,
        }
    }

    #[must_use]
    pub fn top_left(top: i32, left: i32) -> Self {
        Self::new(VerticalAnchor::Top(top), HorizontalAnchor::Left(left))
    }

    #[must_use]
    pub fn top_right(top: i32, right: i32) -> Self {
        Self::new(VerticalAnchor::Top(top), HorizontalAnchor::Right(right))
    }

    #[must_use]
    pub fn bottom_right(bottom: i32, right: i32) -> Self {
        Self::new(VerticalAnchor::Bottom(bottom), HorizontalAnchor::Right(right))
    }
}

impl Default for Anchor {
    fn default() -> Self {
        Self::top_left(0, 0)
    }
}

// =============================================================================
// BadgeConfig
// =============================================================================

/// Styling and initial value for a badge.
///
/// Built with chained setters; every setter normalizes its input, so a
/// finished config is always valid.
///
/// ```
/// use iced_badges::badge::BadgeConfig;
/// use iced_badges::domain::badge::{BadgeColor, BadgeShape, BadgeSize};
///
/// let config = BadgeConfig::new()
///     .value(17)
///     .top(5)
///     .right(5)
///     .size(BadgeSize::App)
///     .shape(BadgeShape::Square)
///     .color(BadgeColor::Green);
/// assert_eq!(config.height().value(), 23);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BadgeConfig {
    value: Option<u64>,
    height: BadgeHeight,
    shape: BadgeShape,
    color: BadgeColor,
    use_border: bool,
    use_shading: bool,
    top: Option<i32>,
    bottom: Option<i32>,
    left: Option<i32>,
    right: Option<i32>,
}

impl Default for BadgeConfig {
    fn default() -> Self {
        Self {
            value: None,
            height: BadgeHeight::from(BadgeSize::Tab),
            shape: BadgeShape::default(),
            color: BadgeColor::default(),
            use_border: true,
            use_shading: true,
            top: None,
            bottom: None,
            left: None,
            right: None,
        }
    }
}

impl BadgeConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial value; anything that is not a non-negative integer leaves
    /// the badge hidden.
    #[must_use]
    pub fn value(mut self, value: impl BadgeCount) -> Self {
        self.value = value.badge_count();
        self
    }

    /// Badge height, either a [`BadgeSize`] preset or raw pixels.
    #[must_use]
    pub fn size(mut self, size: impl Into<BadgeHeight>) -> Self {
        self.height = size.into();
        self
    }

    #[must_use]
    pub fn shape(mut self, shape: BadgeShape) -> Self {
        self.shape = shape;
        self
    }

    #[must_use]
    pub fn color(mut self, color: BadgeColor) -> Self {
        self.color = color;
        self
    }

    /// Sets the color by name, using red for unrecognized names.
    #[must_use]
    pub fn color_name(mut self, name: &str) -> Self {
        self.color = BadgeColor::from_name(name);
        self
    }

    #[must_use]
    pub fn use_border(mut self, use_border: bool) -> Self {
        self.use_border = use_border;
        self
    }

    #[must_use]
    pub fn use_shading(mut self, use_shading: bool) -> Self {
        self.use_shading = use_shading;
        self
    }

    #[must_use]
    pub fn top(mut self, top: i32) -> Self {
        self.top = Some(top);
        self
    }

    /// Offset from the bottom edge; ignored when `top` is set.
    #[must_use]
    pub fn bottom(mut self, bottom: i32) -> Self {
        self.bottom = Some(bottom);
        self
    }

    #[must_use]
    pub fn left(mut self, left: i32) -> Self {
        self.left = Some(left);
        self
    }

    /// Offset from the right edge; ignored when `left` is set.
    #[must_use]
    pub fn right(mut self, right: i32) -> Self {
        self.right = Some(right);
        self
    }

    #[must_use]
    pub fn initial_value(&self) -> Option<u64> {
        self.value
    }

    #[must_use]
    pub fn height(&self) -> BadgeHeight {
        self.height
    }

    #[must_use]
    pub fn badge_shape(&self) -> BadgeShape {
        self.shape
    }

    #[must_use]
    pub fn badge_color(&self) -> BadgeColor {
        self.color
    }

    #[must_use]
    pub fn has_border(&self) -> bool {
        self.use_border
    }

    #[must_use]
    pub fn has_shading(&self) -> bool {
        self.use_shading
    }

    /// Resolves the position options into a single anchor.
    #[must_use]
    pub fn anchor(&self) -> Anchor {
        let vertical = match (self.top, self.bottom) {
            (Some(top), _) => VerticalAnchor::Top(top),
            (None, Some(bottom)) => VerticalAnchor::Bottom(bottom),
            (None, None) => VerticalAnchor::Top(0),
        };
        let horizontal = match (self.left, self.right) {
            (Some(left), _) => HorizontalAnchor::Left(left),
            (None, Some(right)) => HorizontalAnchor::Right(right),
            (None, None) => HorizontalAnchor::Left(0),
        };
        Anchor::new(vertical, horizontal)
    }
}
