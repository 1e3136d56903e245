// SPDX-License-Identifier: MPL-2.0
//! Application root state for the badge demo.
//!
//! The `App` struct owns the demo badges and the views they are attached
//! to, and translates button and tab clicks into badge updates.

mod demo;
mod message;
pub mod paths;
mod update;
mod view;

pub use demo::{Demo, VALUE_CYCLES};
pub use message::{Flags, Message};

use crate::config;
use crate::domain::badge::Platform;
use crate::ui::theming::{AppTheme, ThemeMode};
use iced::{window, Element, Size, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    platform: Platform,
    theme: AppTheme,
    window_size: (u32, u32),
    demo: Demo,
    /// Number of "Change Values" presses so far.
    clicks: usize,
    active_tab: usize,
    /// Shown under the buttons when the settings file could not be used.
    warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("platform", &self.platform)
            .field("clicks", &self.clicks)
            .field("active_tab", &self.active_tab)
            .finish()
    }
}

/// Builds the window settings.
///
/// The demo mimics a phone screen laid out from fixed offsets, so the window
/// is not resizable.
pub fn window_settings(width: u32, height: u32) -> window::Settings {
    window::Settings {
        size: Size::new(width as f32, height as f32),
        min_size: Some(Size::new(
            config::MIN_WINDOW_WIDTH as f32,
            config::MIN_WINDOW_HEIGHT as f32,
        )),
        resizable: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    paths::init_cli_overrides(flags.config_dir.clone());
    let (config, warning) = config::load();
    let (width, height) = config.window_size();

    // iced 0.14 requires the boot function to be `Fn`
    let boot = move || App::new(&flags, config.clone(), warning.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings(width, height))
        .run()
}

/// Picks the badge platform: CLI flag, then settings, then the host OS.
fn resolve_platform(flag: Option<&str>, config: &config::Config) -> Platform {
    if let Some(name) = flag {
        match name.parse() {
            Ok(platform) => return platform,
            Err(err) => tracing::warn!(%err, "ignoring --platform"),
        }
    }
    config.platform().unwrap_or_else(Platform::current)
}

impl App {
    /// Initializes the demo from CLI flags and loaded settings.
    fn new(
        flags: &Flags,
        config: config::Config,
        warning: Option<String>,
    ) -> (Self, Task<Message>) {
        let platform = resolve_platform(flags.platform.as_deref(), &config);
        let window_size = config.window_size();
        tracing::info!(
            %platform,
            width = window_size.0,
            height = window_size.1,
            "starting badge demo"
        );

        let app = App {
            platform,
            theme: AppTheme::new(config.general.theme_mode),
            window_size,
            demo: Demo::new(platform, window_size.0),
            clicks: 0,
            active_tab: 0,
            warning,
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        format!("Badge Demo ({})", self.platform)
    }

    fn theme(&self) -> Theme {
        self.theme.mode.iced_theme()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            demo: &mut self.demo,
            clicks: &mut self.clicks,
            active_tab: &mut self.active_tab,
        };

        match message {
            Message::ClearBadges => update::handle_clear_badges(&mut ctx),
            Message::ChangeValues => update::handle_change_values(&mut ctx),
            Message::TabPressed(index) => update::handle_tab_pressed(&mut ctx, index),
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            demo: &self.demo,
            active_tab: self.active_tab,
            theme: &self.theme,
            window_width: self.window_size.0 as f32,
            warning: self.warning.as_deref(),
        })
    }

    #[must_use]
    pub fn platform(&self) -> Platform {
        self.platform
    }

    #[must_use]
    pub fn theme_mode(&self) -> ThemeMode {
        self.theme.mode
    }

    #[must_use]
    pub fn demo(&self) -> &Demo {
        &self.demo
    }

    #[must_use]
    pub fn active_tab(&self) -> usize {
        self.active_tab
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn app_with(platform: Option<&str>) -> App {
        let flags = Flags {
            platform: platform.map(str::to_owned),
            config_dir: None,
        };
        App::new(&flags, Config::default(), None).0
    }

    fn values(app: &App) -> Vec<Option<String>> {
        app.demo()
            .badges()
            .iter()
            .map(|badge| badge.value().map(str::to_owned))
            .collect()
    }

    #[test]
    fn new_starts_on_first_tab_with_initial_values() {
        let app = app_with(Some("android"));
        assert_eq!(app.platform(), Platform::Android);
        assert_eq!(app.active_tab(), 0);
        assert_eq!(
            values(&app),
            vec![
                Some("6".into()),
                Some("7".into()),
                Some("8".into()),
                Some("7".into()),
                None
            ]
        );
    }

    #[test]
    fn cli_platform_overrides_config() {
        let mut config = Config::default();
        config.general.platform = Some("android".into());
        assert_eq!(resolve_platform(Some("ipad"), &config), Platform::Ios);
        assert_eq!(resolve_platform(None, &config), Platform::Android);
    }

    #[test]
    fn invalid_cli_platform_falls_back_to_config() {
        let mut config = Config::default();
        config.general.platform = Some("mobileweb".into());
        assert_eq!(
            resolve_platform(Some("palm-os"), &config),
            Platform::MobileWeb
        );
    }

    #[test]
    fn clear_badges_hides_everything() {
        let mut app = app_with(Some("iphone"));
        let _ = app.update(Message::ClearBadges);
        assert!(values(&app).iter().all(Option::is_none));
        assert!(app.demo().badges().iter().all(|badge| !badge.is_visible()));
    }

    #[test]
    fn change_values_steps_through_cycles() {
        let mut app = app_with(Some("iphone"));
        let _ = app.update(Message::ChangeValues);
        assert_eq!(
            values(&app),
            vec![
                None,
                Some("4".into()),
                Some("50".into()),
                Some("2".into()),
                Some("212".into())
            ]
        );

        let _ = app.update(Message::ChangeValues);
        assert_eq!(values(&app)[0].as_deref(), Some("27"));
        assert_eq!(values(&app)[4], None);
    }

    #[test]
    fn change_values_after_clear_restores_badges() {
        let mut app = app_with(Some("iphone"));
        let _ = app.update(Message::ClearBadges);
        let _ = app.update(Message::ChangeValues);
        assert!(app.demo().badges()[1].is_visible());
    }

    #[test]
    fn tab_press_activates_tab() {
        let mut app = app_with(None);
        let _ = app.update(Message::TabPressed(2));
        assert_eq!(app.active_tab(), 2);
        let _ = app.update(Message::TabPressed(2));
        assert_eq!(app.active_tab(), 2);
        let _ = app.update(Message::TabPressed(7));
        assert_eq!(app.active_tab(), 2);
    }

    #[test]
    fn title_names_platform() {
        let app = app_with(Some("mobileweb"));
        assert_eq!(app.title(), "Badge Demo (mobileweb)");
    }
}
