// SPDX-License-Identifier: MPL-2.0
//! The badge handle.

use super::config::{Anchor, BadgeConfig};
use super::container::BadgeContainer;
use super::primitives::BadgePrimitives;
use crate::domain::badge::{
    metrics, BadgeColor, BadgeCount, BadgeHeight, BadgeShape, Platform,
};
use std::fmt;

/// Placeholder used to size a badge before its first value arrives.
const PLACEHOLDER_VALUE: u64 = 1;

/// Unique identifier for a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BadgeId(u64);

impl BadgeId {
    /// Creates a new unique badge ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for BadgeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BadgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "badge-{}", self.0)
    }
}

/// A numeric badge overlay.
///
/// The badge owns its visual primitives and keeps them in sync with the
/// displayed value. Invalid values never fail; they hide the badge.
#[derive(Debug, Clone)]
pub struct Badge {
    id: BadgeId,
    platform: Platform,
    height: BadgeHeight,
    shape: BadgeShape,
    color: BadgeColor,
    use_border: bool,
    primitives: BadgePrimitives,
    /// Width applied by the last dimension write (0 before the first one).
    previous_width: f32,
    dimension_writes: u32,
}

impl Badge {
    /// Builds a badge and applies its initial value.
    pub fn new(config: BadgeConfig, platform: Platform) -> Self {
        let mut badge = Self {
            id: BadgeId::new(),
            platform,
            height: config.height(),
            shape: config.badge_shape(),
            color: config.badge_color(),
            use_border: config.has_border(),
            primitives: BadgePrimitives::build(&config, platform),
            previous_width: 0.0,
            dimension_writes: 0,
        };
        badge.set_dimensions(config.initial_value().unwrap_or(PLACEHOLDER_VALUE));
        badge.apply_count(config.initial_value());
        badge
    }

    /// Displays `value`, or hides the badge when it is not a non-negative
    /// integer.
    pub fn set_value(&mut self, value: impl BadgeCount) {
        self.apply_count(value.badge_count());
    }

    /// Hides the badge and forgets its value.
    pub fn clear(&mut self) {
        self.apply_count(None);
    }

    /// Shows the badge, unless it has been cleared.
    pub fn show(&mut self) {
        if self.primitives.label.text.is_some() {
            self.primitives.container.visible = true;
        }
    }

    pub fn hide(&mut self) {
        self.primitives.container.visible = false;
    }

    /// Currently displayed text, `None` after [`Badge::clear`].
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.primitives.label.text.as_deref()
    }

    pub fn attach_to_view<C>(&self, container: &mut C)
    where
        C: BadgeContainer + ?Sized,
    {
        if container.can_host_badges() {
            container.add_badge(self.id);
        }
    }

    pub fn detach_from_view<C>(&self, container: &mut C)
    where
        C: BadgeContainer + ?Sized,
    {
        if container.can_host_badges() {
            container.remove_badge(self.id);
        }
    }

    #[must_use]
    pub fn id(&self) -> BadgeId {
        self.id
    }

    #[must_use]
    pub fn platform(&self) -> Platform {
        self.platform
    }

    #[must_use]
    pub fn height(&self) -> BadgeHeight {
        self.height
    }

    #[must_use]
    pub fn shape(&self) -> BadgeShape {
        self.shape
    }

    #[must_use]
    pub fn color(&self) -> BadgeColor {
        self.color
    }

    #[must_use]
    pub fn anchor(&self) -> Anchor {
        self.primitives.container.anchor
    }

    #[must_use]
    pub fn width(&self) -> f32 {
        self.primitives.container.width
    }

    #[must_use]
    pub fn font_size(&self) -> u16 {
        self.primitives.label.font_size
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.primitives.container.visible
    }

    #[must_use]
    pub fn primitives(&self) -> &BadgePrimitives {
        &self.primitives
    }

    /// How many times the layout has been resized since construction.
    #[must_use]
    pub fn dimension_writes(&self) -> u32 {
        self.dimension_writes
    }

    fn apply_count(&mut self, count: Option<u64>) {
        self.hide();
        match count {
            Some(count) => {
                self.primitives.label.text = Some(String::new());
                self.set_dimensions(count);
                self.primitives.label.text = Some(count.to_string());
                self.show();
                tracing::debug!(badge = %self.id, count, "badge value applied");
            }
            None => {
                self.primitives.label.text = None;
                tracing::debug!(badge = %self.id, "badge cleared");
            }
        }
    }

    fn set_dimensions(&mut self, count: u64) {
        let width = metrics::badge_width(self.platform, count, self.height, self.use_border);
        if width != self.previous_width {
            self.primitives.resize(width);
            self.previous_width = width;
            self.dimension_writes += 1;
            tracing::trace!(badge = %self.id, width, "badge resized");
        }
    }
}
