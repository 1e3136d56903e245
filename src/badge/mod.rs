// SPDX-License-Identifier: MPL-2.0
//! Numeric badge overlays, as seen on iOS and Android app icons.
//!
//! A [`Badge`] is built once from a [`BadgeConfig`] and the host
//! [`Platform`](crate::domain::badge::Platform), then driven with
//! [`Badge::set_value`] and [`Badge::clear`]. It keeps a set of
//! [`BadgePrimitives`] describing what to draw; attaching it to a
//! [`BadgeContainer`] decides where.
//!
//! ```
//! use iced_badges::badge::{Badge, BadgeConfig, BadgeSlots};
//! use iced_badges::domain::badge::Platform;
//!
//! let mut tab = BadgeSlots::new();
//! let mut badge = Badge::new(BadgeConfig::new().top(2).right(2), Platform::Ios);
//! badge.attach_to_view(&mut tab);
//!
//! badge.set_value(8);
//! assert_eq!(badge.value(), Some("8"));
//!
//! badge.clear();
//! assert!(!badge.is_visible());
//! ```

mod config;
mod container;
mod handle;
pub mod primitives;

pub use config::{Anchor, BadgeConfig, HorizontalAnchor, VerticalAnchor};
pub use container::{BadgeContainer, BadgeSlots};
pub use handle::{Badge, BadgeId};
pub use primitives::{BadgePrimitives, Layer};
