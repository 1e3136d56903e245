// SPDX-License-Identifier: MPL-2.0
//! Container styles for the demo window and its fake tab bar.

use crate::ui::design_tokens::{palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Flat fill with no border.
pub fn fill(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        ..Default::default()
    }
}

/// One fake tab. The middle tab gets rounded corners.
pub fn tab(active: bool, rounded: bool) -> impl Fn(&Theme) -> container::Style {
    let color = if active {
        palette::TAB_ACTIVE
    } else {
        palette::TAB
    };
    let corner = if rounded { radius::SM } else { radius::NONE };

    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        border: Border {
            radius: corner.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Label color for a tab.
#[must_use]
pub fn tab_text(active: bool) -> Color {
    if active {
        palette::TAB_TEXT_ACTIVE
    } else {
        palette::TAB_TEXT
    }
}
