// SPDX-License-Identifier: MPL-2.0
//! The visual group a badge is drawn from.
//!
//! A badge is four stacked layers inside one positioned container:
//!
//! 1. a translucent black shadow, shifted 3px down,
//! 2. the colored background with its white border and optional gradient,
//! 3. a translucent white highlight strip (only when shading is on),
//! 4. the centered numeric label.
//!
//! These are plain descriptions; a renderer such as [`crate::ui::badge`]
//! turns them into widgets.

use super::config::{Anchor, BadgeConfig};
use crate::domain::badge::{metrics, BadgeColor, Platform, Rgb};

/// Border width of a bordered badge.
pub const BORDER_WIDTH: f32 = 2.0;
/// Vertical offset of the drop shadow.
pub const SHADOW_OFFSET: f32 = 3.0;
pub const SHADOW_OPACITY: f32 = 0.3;
/// Highlight opacity on Android and on yellow badges.
pub const HIGHLIGHT_OPACITY_STRONG: f32 = 0.4;
pub const HIGHLIGHT_OPACITY_SUBTLE: f32 = 0.15;
/// The highlight is inset this much narrower than the badge.
pub const HIGHLIGHT_INSET: f32 = 9.0;
/// Fraction of the height where the gradient reaches its end color.
pub const GRADIENT_EXTENT: f32 = 0.8;
pub const FONT_FAMILY: &str = "Helvetica Neue";

/// Two-stop vertical gradient, from `y = 0` down to `end_y`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearGradient {
    pub start: Rgb,
    pub end: Rgb,
    pub end_y: f32,
}

/// A filled, optionally bordered rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewPrimitive {
    pub top: f32,
    pub left: f32,
    pub width: f32,
    pub height: f32,
    pub background: Rgb,
    pub opacity: f32,
    pub border_color: Rgb,
    pub border_width: f32,
    pub corner_radius: f32,
    pub gradient: Option<LinearGradient>,
}

/// Single-line centered text.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelPrimitive {
    /// `None` once the badge has been cleared.
    pub text: Option<String>,
    pub top: f32,
    pub left: f32,
    pub width: f32,
    pub height: f32,
    pub color: Rgb,
    pub font_size: u16,
    pub font_family: &'static str,
    pub bold: bool,
}

/// Outer box holding every layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerPrimitive {
    pub anchor: Anchor,
    pub width: f32,
    pub height: f32,
    pub visible: bool,
}

/// One entry of the container's child list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Layer<'a> {
    View(&'a ViewPrimitive),
    Label(&'a LabelPrimitive),
}

/// Every primitive making up one badge.
#[derive(Debug, Clone, PartialEq)]
pub struct BadgePrimitives {
    pub container: ContainerPrimitive,
    pub shadow: ViewPrimitive,
    pub background: ViewPrimitive,
    pub highlight: ViewPrimitive,
    pub label: LabelPrimitive,
    /// Whether the highlight is part of the container's children.
    pub highlight_attached: bool,
}

impl BadgePrimitives {
    /// Builds the primitives at their initial square size.
    pub(crate) fn build(config: &BadgeConfig, platform: Platform) -> Self {
        let height = config.height().as_f32();
        let color = config.badge_color();
        let gradient_pair = color.gradient();
        let corner_radius = config.badge_shape().corner_radius(height);

        let background = ViewPrimitive {
            top: 0.0,
            left: 0.0,
            width: height,
            height,
            background: gradient_pair.end,
            opacity: 1.0,
            border_color: Rgb::WHITE,
            border_width: if config.has_border() { BORDER_WIDTH } else { 0.0 },
            corner_radius,
            gradient: config.has_shading().then_some(LinearGradient {
                start: gradient_pair.start,
                end: gradient_pair.end,
                end_y: height * GRADIENT_EXTENT,
            }),
        };

        let label = LabelPrimitive {
            text: config.initial_value().map(|value| value.to_string()),
            top: 0.0,
            left: 0.0,
            width: height,
            height: height - 1.0,
            color: color.font_color(),
            font_size: metrics::font_size(platform, config.height()),
            font_family: FONT_FAMILY,
            bold: true,
        };

        let highlight_opacity = if platform.is_android() || color == BadgeColor::Yellow {
            HIGHLIGHT_OPACITY_STRONG
        } else {
            HIGHLIGHT_OPACITY_SUBTLE
        };
        let highlight = ViewPrimitive {
            top: 2.0,
            left: 5.0,
            width: height,
            height: 2.0 * height / 5.0,
            background: Rgb::WHITE,
            opacity: highlight_opacity,
            border_color: Rgb::WHITE,
            border_width: 0.0,
            corner_radius: height / 5.0,
            gradient: None,
        };

        let shadow = ViewPrimitive {
            top: SHADOW_OFFSET,
            left: 0.0,
            width: height,
            height,
            background: Rgb::BLACK,
            opacity: SHADOW_OPACITY,
            border_color: Rgb::BLACK,
            border_width: 0.0,
            corner_radius,
            gradient: None,
        };

        Self {
            container: ContainerPrimitive {
                anchor: config.anchor(),
                width: height,
                height: height + SHADOW_OFFSET,
                visible: false,
            },
            shadow,
            background,
            highlight,
            label,
            highlight_attached: config.has_shading(),
        }
    }

    /// Applies a new badge width to every layer.
    pub(crate) fn resize(&mut self, width: f32) {
        self.background.width = width;
        self.label.width = width;
        self.highlight.width = width - HIGHLIGHT_INSET;
        self.shadow.width = width;
        self.container.width = width;
        self.container.height = self.background.height + SHADOW_OFFSET;
    }

    /// Children of the container, back to front.
    #[must_use]
    pub fn layers(&self) -> Vec<Layer<'_>> {
        let mut layers = vec![Layer::View(&self.shadow), Layer::View(&self.background)];
        if self.highlight_attached {
            layers.push(Layer::View(&self.highlight));
        }
        layers.push(Layer::Label(&self.label));
        layers
    }
}
