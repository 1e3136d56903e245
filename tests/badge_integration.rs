// SPDX-License-Identifier: MPL-2.0
//! End-to-end behavior of badges through the public API.

use iced_badges::badge::{
    Anchor, Badge, BadgeConfig, BadgeContainer, BadgeId, BadgeSlots, HorizontalAnchor, Layer,
    VerticalAnchor,
};
use iced_badges::domain::badge::{metrics, BadgeColor, BadgeHeight, BadgeShape, Platform};

fn badge(platform: Platform) -> Badge {
    Badge::new(BadgeConfig::new(), platform)
}

#[test]
fn non_negative_values_round_trip_as_decimal_text() {
    let mut badge = badge(Platform::Ios);
    for value in [0_u64, 7, 10, 99, 1_000, 349_876, 12_345_678_901, u64::MAX] {
        badge.set_value(value);
        assert_eq!(badge.value(), Some(value.to_string().as_str()));
        assert!(badge.is_visible());
    }
}

#[test]
fn invalid_values_hide_and_blank_the_badge() {
    let mut badge = Badge::new(BadgeConfig::new().value(3), Platform::Android);
    assert!(badge.is_visible());

    badge.set_value(None::<u32>);
    assert!(!badge.is_visible());
    assert_eq!(badge.value(), None);

    badge.set_value(4);
    badge.set_value(-1);
    assert!(!badge.is_visible());
    assert_eq!(badge.value(), None);

    badge.set_value(4);
    badge.set_value("abc");
    assert!(!badge.is_visible());
    assert_eq!(badge.value(), None);

    let unset = Badge::new(BadgeConfig::new(), Platform::Android);
    assert!(!unset.is_visible());
    assert_eq!(unset.value(), None);
}

#[test]
fn textual_values_use_their_leading_integer() {
    let mut badge = badge(Platform::Ios);
    badge.set_value("42px");
    assert_eq!(badge.value(), Some("42"));
    badge.set_value(" 7");
    assert_eq!(badge.value(), Some("7"));
    badge.set_value(String::from("3.9"));
    assert_eq!(badge.value(), Some("3"));
}

#[test]
fn clear_matches_setting_none() {
    let mut cleared = Badge::new(BadgeConfig::new().value(12), Platform::Ios);
    let mut nulled = Badge::new(BadgeConfig::new().value(12), Platform::Ios);
    cleared.clear();
    nulled.set_value(None::<u64>);
    assert_eq!(cleared.value(), nulled.value());
    assert_eq!(cleared.is_visible(), nulled.is_visible());
    assert_eq!(cleared.width(), nulled.width());
}

#[test]
fn width_never_shrinks_as_digits_grow() {
    for platform in Platform::ALL {
        for height in [15_i64, 18, 23, 27, 30] {
            let height = BadgeHeight::from_raw(height);
            let mut previous = 0.0;
            for digits in 1..=12 {
                let value = 10_u64.pow(digits - 1);
                let width = metrics::badge_width(platform, value, height, true);
                assert!(width >= previous, "{platform} h={height:?} digits={digits}");
                previous = width;
            }
        }
    }
}

#[test]
fn heights_are_clamped() {
    let short = Badge::new(BadgeConfig::new().size(10), Platform::Ios);
    let tall = Badge::new(BadgeConfig::new().size(45), Platform::Ios);
    let app = Badge::new(BadgeConfig::new().size(23), Platform::Ios);
    assert_eq!(short.height().value(), 15);
    assert_eq!(tall.height().value(), 30);
    assert_eq!(app.height().value(), 23);
}

#[test]
fn unknown_color_names_fall_back_to_red() {
    let config = BadgeConfig::new().color_name("chartreuse");
    let badge = Badge::new(config, Platform::Ios);
    assert_eq!(badge.color(), BadgeColor::Red);
    assert_eq!(
        badge.color().gradient(),
        BadgeColor::Red.gradient(),
    );
}

#[test]
fn documented_configuration_produces_expected_badge() {
    let config = BadgeConfig::new()
        .value(17)
        .top(5)
        .right(5)
        .size(23)
        .shape(BadgeShape::Square)
        .color(BadgeColor::Green);
    let badge = Badge::new(config, Platform::Ios);

    assert_eq!(badge.height().value(), 23);
    assert_eq!(badge.shape(), BadgeShape::Square);
    assert_eq!(badge.color(), BadgeColor::Green);
    assert_eq!(
        badge.primitives().background.gradient.map(|g| (g.start, g.end)),
        Some((
            BadgeColor::Green.gradient().start,
            BadgeColor::Green.gradient().end
        ))
    );
    assert_eq!(badge.value(), Some("17"));
    assert_eq!(
        badge.anchor(),
        Anchor::new(VerticalAnchor::Top(5), HorizontalAnchor::Right(5))
    );
    assert!(badge.is_visible());
    assert_eq!(badge.primitives().background.corner_radius, 23.0 / 4.0);
}

#[test]
fn equal_widths_do_not_rewrite_dimensions() {
    let mut badge = badge(Platform::Ios);
    let writes = badge.dimension_writes();

    // Same digit count as the placeholder
    badge.set_value(5);
    badge.set_value(9);
    assert_eq!(badge.dimension_writes(), writes);

    badge.set_value(10);
    assert_eq!(badge.dimension_writes(), writes + 1);
    badge.set_value(99);
    assert_eq!(badge.dimension_writes(), writes + 1);

    // Clearing never resizes
    badge.clear();
    assert_eq!(badge.dimension_writes(), writes + 1);
}

#[test]
fn layers_follow_shading() {
    let shaded = Badge::new(BadgeConfig::new().value(1), Platform::Ios);
    let flat = Badge::new(BadgeConfig::new().value(1).use_shading(false), Platform::Ios);
    assert_eq!(shaded.primitives().layers().len(), 4);
    assert_eq!(flat.primitives().layers().len(), 3);
    assert!(matches!(
        flat.primitives().layers().last(),
        Some(Layer::Label(_))
    ));
}

/// A view that refuses children, like a label or image.
struct Leaf {
    added: Vec<BadgeId>,
}

impl BadgeContainer for Leaf {
    fn add_badge(&mut self, id: BadgeId) {
        self.added.push(id);
    }

    fn remove_badge(&mut self, id: BadgeId) {
        self.added.retain(|added| *added != id);
    }

    fn can_host_badges(&self) -> bool {
        false
    }
}

#[test]
fn attach_and_detach_respect_container_capability() {
    let badge = badge(Platform::MobileWeb);

    let mut slots = BadgeSlots::new();
    badge.attach_to_view(&mut slots);
    assert!(slots.contains(badge.id()));
    badge.detach_from_view(&mut slots);
    assert!(slots.is_empty());

    let mut leaf = Leaf { added: Vec::new() };
    badge.attach_to_view(&mut leaf);
    assert!(leaf.added.is_empty());

    let container: &mut dyn BadgeContainer = &mut slots;
    badge.attach_to_view(container);
    assert_eq!(slots.ids(), &[badge.id()]);
}
