// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration.

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Default demo window width, roughly a phone screen.
pub const DEFAULT_WINDOW_WIDTH: u32 = 400;

/// Default demo window height.
pub const DEFAULT_WINDOW_HEIGHT: u32 = 700;

/// Smallest window that still fits both demo buttons.
pub const MIN_WINDOW_WIDTH: u32 = 320;

/// Smallest window that still fits the demo content above the tab bar.
pub const MIN_WINDOW_HEIGHT: u32 = 480;

// ==========================================================================
// Platform Defaults
// ==========================================================================

/// Platform name used when neither the CLI nor the config picks one.
pub const DEFAULT_PLATFORM: &str = "iphone";
