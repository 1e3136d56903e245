// SPDX-License-Identifier: MPL-2.0
//! Badge height value object.

// =============================================================================
// Height Bounds
// =============================================================================

/// Badge height bounds in pixels.
pub mod height_bounds {
    /// Smallest height with a font-size entry.
    pub const MIN: u32 = 15;
    /// Largest height with a font-size entry.
    pub const MAX: u32 = 30;
}

// =============================================================================
// BadgeSize
// =============================================================================

/// Named badge height presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BadgeSize {
    /// Small iOS tab bar badge (18px).
    #[default]
    Tab,
    /// iOS app icon badge (23px).
    App,
    Big,
    Max,
}

impl BadgeSize {
    /// Pixel height of the preset.
    #[must_use]
    pub fn pixels(self) -> u32 {
        match self {
            BadgeSize::Tab => 18,
            BadgeSize::App => 23,
            BadgeSize::Big => 27,
            BadgeSize::Max => 30,
        }
    }
}

// =============================================================================
// BadgeHeight
// =============================================================================

/// Badge height in pixels, guaranteed to be within 15–30.
///
/// Every font-size and width lookup is keyed by this type, so an
/// out-of-table height can never reach them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BadgeHeight(u32);

impl BadgeHeight {
    /// Creates a height from a raw pixel count.
    ///
    /// Positive values are clamped into range; zero and negative values
    /// fall back to the [`BadgeSize::Tab`] preset.
    #[must_use]
    pub fn from_raw(pixels: i64) -> Self {
        if pixels <= 0 {
            return Self::default();
        }
        let clamped = pixels.clamp(
            i64::from(height_bounds::MIN),
            i64::from(height_bounds::MAX),
        );
        Self(clamped as u32)
    }

    /// Returns the height in pixels.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    #[must_use]
    pub fn as_f32(self) -> f32 {
        self.0 as f32
    }
}

impl Default for BadgeHeight {
    fn default() -> Self {
        Self(BadgeSize::Tab.pixels())
    }
}

impl From<BadgeSize> for BadgeHeight {
    fn from(size: BadgeSize) -> Self {
        Self(size.pixels())
    }
}

impl From<i32> for BadgeHeight {
    fn from(pixels: i32) -> Self {
        Self::from_raw(i64::from(pixels))
    }
}

impl From<u32> for BadgeHeight {
    fn from(pixels: u32) -> Self {
        Self::from_raw(i64::from(pixels))
    }
}
