// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// "Clear Badges" was pressed.
    ClearBadges,
    /// "Change Values" was pressed.
    ChangeValues,
    /// A fake tab was clicked.
    TabPressed(usize),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Platform whose badge metrics to use (`iphone`, `ipad`, `android`, `mobileweb`).
    /// Takes precedence over the `platform` setting.
    pub platform: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_BADGES_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
