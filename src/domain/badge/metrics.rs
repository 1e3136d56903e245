// SPDX-License-Identifier: MPL-2.0
//! Font-size and width tables.
//!
//! All platform-specific numbers live here as data. Lookups take a
//! [`BadgeHeight`], which is already clamped into the table range.

use super::newtypes::{height_bounds, BadgeHeight};
use super::platform::Platform;

const TABLE_LEN: usize = (height_bounds::MAX - height_bounds::MIN + 1) as usize;

/// Font sizes for heights 15 through 30, iOS.
const IOS_FONT_SIZES: [u16; TABLE_LEN] =
    [10, 10, 11, 11, 12, 14, 15, 16, 17, 17, 17, 18, 19, 19, 20, 21];
/// Font sizes for heights 15 through 30, Android.
const ANDROID_FONT_SIZES: [u16; TABLE_LEN] =
    [10, 10, 11, 11, 12, 14, 14, 15, 16, 16, 17, 18, 19, 19, 20, 21];
/// Font sizes for heights 15 through 30, mobile web.
const MOBILE_WEB_FONT_SIZES: [u16; TABLE_LEN] =
    [10, 10, 11, 11, 13, 14, 14, 15, 16, 16, 17, 18, 19, 20, 21, 22];

/// Width multipliers for 1..=7 digits as `(ios, other)`.
const DIGIT_MULTIPLIERS: [(f32, f32); 7] = [
    (1.0, 1.0),
    (1.22, 1.4),
    (1.6, 1.7),
    (1.9, 2.1),
    (2.5, 2.6),
    (2.8, 2.9),
    (3.3, 3.4),
];

/// Multiplier for eight digits and beyond, on every platform.
const WIDE_MULTIPLIER: f32 = 4.0;

/// Width lost when a badge is drawn without its white border.
pub const BORDERLESS_WIDTH_REDUCTION: f32 = 2.0;

/// Looks up the label font size for a badge height.
#[must_use]
pub fn font_size(platform: Platform, height: BadgeHeight) -> u16 {
    let table = match platform {
        Platform::Ios => &IOS_FONT_SIZES,
        Platform::Android => &ANDROID_FONT_SIZES,
        Platform::MobileWeb => &MOBILE_WEB_FONT_SIZES,
    };
    table[(height.value() - height_bounds::MIN) as usize]
}

/// Number of decimal digits in `value` (`0` has one digit).
#[must_use]
pub fn digit_count(value: u64) -> u32 {
    value.checked_ilog10().map_or(1, |log| log + 1)
}

/// Width multiplier for a value, chosen by its digit count.
#[must_use]
pub fn width_multiplier(platform: Platform, value: u64) -> f32 {
    let digits = digit_count(value) as usize;
    match DIGIT_MULTIPLIERS.get(digits - 1) {
        Some(&(ios, _)) if platform.is_ios() => ios,
        Some(&(_, other)) => other,
        None => WIDE_MULTIPLIER,
    }
}

/// Badge width for `value` at the given height.
#[must_use]
pub fn badge_width(
    platform: Platform,
    value: u64,
    height: BadgeHeight,
    use_border: bool,
) -> f32 {
    let width = width_multiplier(platform, value) * height.as_f32();
    if use_border {
        width
    } else {
        width - BORDERLESS_WIDTH_REDUCTION
    }
}
