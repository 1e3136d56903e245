// SPDX-License-Identifier: MPL-2.0
//! The five demo badges, the views they live on and their value cycles.

use crate::badge::{Badge, BadgeConfig, BadgeSlots};
use crate::domain::badge::{BadgeColor, BadgeShape, BadgeSize, Platform};
use crate::ui::design_tokens::sizing;
use crate::ui::tab_bar::{FakeTab, TabKind};

pub const CLEAR_BUTTON_TOP: i32 = 205;
pub const CHANGE_BUTTON_TOP: i32 = CLEAR_BUTTON_TOP + 80;

/// Values each badge steps through on "Change Values", indexed by
/// `clicks % len`. `None` clears the badge.
pub const VALUE_CYCLES: [&[Option<u64>]; 5] = [
    &[Some(1), None, Some(27), Some(300)],
    &[None, Some(4), Some(13)],
    &[
        Some(1),
        Some(50),
        Some(2),
        Some(16),
        Some(8),
        Some(320),
        Some(7),
        Some(349_876),
    ],
    &[None, Some(2), Some(40), Some(3)],
    &[Some(7), Some(212), None, Some(12), None],
];

/// Badges plus every view they can be attached to.
#[derive(Debug, Clone)]
pub struct Demo {
    badges: Vec<Badge>,
    tabs: Vec<FakeTab>,
    window: BadgeSlots,
}

impl Demo {
    /// Builds the badges, attaches them and applies the starting values.
    pub fn new(platform: Platform, window_width: u32) -> Self {
        let mid = i32::try_from(window_width / 2).unwrap_or(i32::MAX);
        let half_button = (sizing::BUTTON_WIDTH / 2.0) as i32;

        let configs = [
            BadgeConfig::new().size(BadgeSize::Tab).right(2).top(2),
            BadgeConfig::new()
                .value(7)
                .size(BadgeSize::Tab)
                .color(BadgeColor::Blue)
                .shape(BadgeShape::Square)
                .use_border(false)
                .right(2)
                .bottom(2),
            BadgeConfig::new()
                .value(22)
                .size(BadgeSize::Tab)
                .color(BadgeColor::Green)
                .use_border(false)
                .use_shading(false)
                .right(2)
                .top(2),
            BadgeConfig::new()
                .size(BadgeSize::Big)
                .color(BadgeColor::Green)
                .top(CLEAR_BUTTON_TOP + 5)
                .left(mid - half_button - 10),
            BadgeConfig::new()
                .size(BadgeSize::App)
                .color(BadgeColor::Yellow)
                .shape(BadgeShape::Square)
                .use_border(false)
                .use_shading(false)
                .top(CHANGE_BUTTON_TOP - 10)
                .left(mid + half_button - 10),
        ];
        let mut badges: Vec<Badge> = configs
            .into_iter()
            .map(|config| Badge::new(config, platform))
            .collect();

        let mut tabs = vec![
            FakeTab::new(TabKind::Side),
            FakeTab::new(TabKind::Middle),
            FakeTab::new(TabKind::Side),
        ];
        let mut window = BadgeSlots::new();

        for (badge, tab) in badges.iter().zip(tabs.iter_mut()) {
            badge.attach_to_view(tab);
        }
        for badge in badges.iter().skip(3) {
            badge.attach_to_view(&mut window);
        }

        let starting_values = [(0, 6), (2, 8), (3, 7)];
        for (index, value) in starting_values {
            if let Some(badge) = badges.get_mut(index) {
                badge.set_value(value);
            }
        }

        tracing::debug!(%platform, window_width, "demo badges attached");
        Self {
            badges,
            tabs,
            window,
        }
    }

    #[must_use]
    pub fn badges(&self) -> &[Badge] {
        &self.badges
    }

    #[must_use]
    pub fn tabs(&self) -> &[FakeTab] {
        &self.tabs
    }

    /// Badges attached directly to the window.
    #[must_use]
    pub fn window(&self) -> &BadgeSlots {
        &self.window
    }

    pub fn clear_all(&mut self) {
        for badge in &mut self.badges {
            badge.clear();
        }
    }

    /// Applies the value cycle entry for the given click count.
    pub fn apply_cycle(&mut self, clicks: usize) {
        for (badge, cycle) in self.badges.iter_mut().zip(VALUE_CYCLES) {
            let value = cycle.get(clicks % cycle.len()).copied().flatten();
            badge.set_value(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::badge::{Anchor, HorizontalAnchor, VerticalAnchor};

    fn values(demo: &Demo) -> Vec<Option<&str>> {
        demo.badges().iter().map(Badge::value).collect()
    }

    #[test]
    fn starts_with_documented_values() {
        let demo = Demo::new(Platform::Ios, 400);
        assert_eq!(
            values(&demo),
            vec![Some("6"), Some("7"), Some("8"), Some("7"), None]
        );
        assert!(!demo.badges()[4].is_visible());
    }

    #[test]
    fn badges_are_attached_to_their_views() {
        let demo = Demo::new(Platform::Android, 400);
        let badges = demo.badges();
        for (index, tab) in demo.tabs().iter().enumerate() {
            assert_eq!(tab.slots().ids(), &[badges[index].id()]);
        }
        assert_eq!(demo.window().ids(), &[badges[3].id(), badges[4].id()]);
    }

    #[test]
    fn window_badges_sit_beside_the_buttons() {
        let demo = Demo::new(Platform::Ios, 400);
        assert_eq!(demo.badges()[3].anchor(), Anchor::top_left(210, 65));
        assert_eq!(demo.badges()[4].anchor(), Anchor::top_left(275, 315));
        assert_eq!(
            demo.badges()[1].anchor(),
            Anchor::new(VerticalAnchor::Bottom(2), HorizontalAnchor::Right(2))
        );
    }

    #[test]
    fn first_click_applies_second_entry() {
        let mut demo = Demo::new(Platform::Ios, 400);
        demo.apply_cycle(1);
        assert_eq!(
            values(&demo),
            vec![None, Some("4"), Some("50"), Some("2"), Some("212")]
        );
    }

    #[test]
    fn cycles_wrap_around() {
        let mut demo = Demo::new(Platform::Ios, 400);
        demo.apply_cycle(8);
        assert_eq!(
            values(&demo),
            vec![Some("1"), Some("13"), Some("1"), None, Some("12")]
        );
    }

    #[test]
    fn clear_all_hides_every_badge() {
        let mut demo = Demo::new(Platform::MobileWeb, 400);
        demo.clear_all();
        assert!(demo.badges().iter().all(|badge| !badge.is_visible()));
        assert!(values(&demo).iter().all(Option::is_none));
    }
}
