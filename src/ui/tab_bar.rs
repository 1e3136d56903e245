// SPDX-License-Identifier: MPL-2.0
//! Fake tab bar along the bottom of the demo window.
//!
//! Three tabs sit on a gray strip: two plain side tabs and a taller,
//! rounded middle tab. Each tab is a [`BadgeContainer`], so badges can be
//! attached to it like to any other view.

use crate::badge::{
    Anchor, Badge, BadgeContainer, BadgeId, BadgeSlots, HorizontalAnchor, VerticalAnchor,
};
use crate::ui::badge;
use crate::ui::design_tokens::{sizing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{mouse_area, text, Container, Space, Stack, Text};
use iced::{alignment, Element, Length, Padding, Theme};

/// Which of the two tab looks to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabKind {
    /// Labelled "Tab", 40px high.
    Side,
    /// Labelled with a star, 50px high with rounded corners.
    Middle,
}

/// One fake tab and the badges attached to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeTab {
    kind: TabKind,
    slots: BadgeSlots,
}

impl FakeTab {
    #[must_use]
    pub fn new(kind: TabKind) -> Self {
        Self {
            kind,
            slots: BadgeSlots::new(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> TabKind {
        self.kind
    }

    #[must_use]
    pub fn slots(&self) -> &BadgeSlots {
        &self.slots
    }

    fn label(&self) -> &'static str {
        match self.kind {
            TabKind::Side => "Tab",
            TabKind::Middle => "*",
        }
    }

    fn height(&self) -> f32 {
        match self.kind {
            TabKind::Side => sizing::TAB_HEIGHT,
            TabKind::Middle => sizing::TAB_MIDDLE_HEIGHT,
        }
    }
}

impl BadgeContainer for FakeTab {
    fn add_badge(&mut self, id: BadgeId) {
        self.slots.add_badge(id);
    }

    fn remove_badge(&mut self, id: BadgeId) {
        self.slots.remove_badge(id);
    }
}

/// Width of a side tab for a window `window_width` pixels wide.
#[must_use]
pub fn side_tab_width(window_width: f32) -> f32 {
    let mid = window_width / 2.0;
    (mid - sizing::TAB_MIDDLE_WIDTH / 2.0 - 2.0 * sizing::TAB_GAP).max(0.0)
}

/// Left edge of each tab, in window coordinates.
#[must_use]
pub fn tab_offsets(window_width: f32) -> [f32; 3] {
    let mid = window_width / 2.0;
    let side = side_tab_width(window_width);
    [
        sizing::TAB_GAP,
        mid - sizing::TAB_MIDDLE_WIDTH / 2.0,
        window_width - sizing::TAB_GAP - side,
    ]
}

/// Renders the strip and its tabs, pinned to the bottom of the window.
///
/// Expects the side, middle, side layout the demo uses; `on_press` maps a
/// tab index to the message sent when that tab is clicked.
pub fn view<'a, Message>(
    tabs: &[FakeTab],
    active: usize,
    badges: &[Badge],
    window_width: f32,
    colors: &ColorScheme,
    on_press: impl Fn(usize) -> Message,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let strip = Container::new(Space::new())
        .width(Length::Fill)
        .height(Length::Fixed(sizing::TAB_BAR_HEIGHT))
        .style(styles::container::fill(colors.tab_bar));

    let strip = badge::anchored(
        strip,
        Anchor::new(VerticalAnchor::Bottom(0), HorizontalAnchor::Left(0)),
    );
    let offsets = tab_offsets(window_width);
    let side_width = side_tab_width(window_width);

    let bar = tabs
        .iter()
        .enumerate()
        .fold(
            Stack::new().push(strip),
            |bar, (index, tab)| {
                let width = match tab.kind {
                    TabKind::Side => side_width,
                    TabKind::Middle => sizing::TAB_MIDDLE_WIDTH,
                };
                let left = offsets.get(index).copied().unwrap_or_default();
                let content = mouse_area(tab_view(tab, index == active, width, badges))
                    .on_press(on_press(index));
                bar.push(badge::anchored(
                    content,
                    Anchor::new(
                        VerticalAnchor::Bottom(sizing::TAB_GAP as i32),
                        HorizontalAnchor::Left(left as i32),
                    ),
                ))
            },
        )
        .width(Length::Fill)
        .height(Length::Fixed(sizing::TAB_MIDDLE_HEIGHT + sizing::TAB_GAP));

    Container::new(bar)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(alignment::Vertical::Bottom)
        .into()
}

fn tab_view<'a, Message: 'a>(
    tab: &FakeTab,
    active: bool,
    width: f32,
    badges: &[Badge],
) -> Element<'a, Message> {
    let height = tab.height();
    let color = styles::container::tab_text(active);
    let (size, padding) = match tab.kind {
        TabKind::Side => (
            typography::TAB,
            Padding {
                top: sizing::TAB_HEIGHT / 2.0,
                ..Padding::ZERO
            },
        ),
        TabKind::Middle => (typography::TAB_GLYPH, Padding::ZERO),
    };

    let label = Text::new(tab.label())
        .size(size)
        .style(move |_theme: &Theme| text::Style { color: Some(color) });
    let label_box = Container::new(label)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(padding)
        .align_x(alignment::Horizontal::Center)
        .align_y(if tab.kind == TabKind::Middle {
            alignment::Vertical::Center
        } else {
            alignment::Vertical::Top
        });

    let background = Container::new(Space::new())
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::tab(active, tab.kind == TabKind::Middle));

    badge::attached(&tab.slots, badges)
        .into_iter()
        .fold(
            Stack::new().push(background).push(label_box),
            |stack, badge| stack.push(badge),
        )
        .width(Length::Fixed(width))
        .height(Length::Fixed(height))
        .into()
}
