// SPDX-License-Identifier: MPL-2.0
//! Badge value objects and lookup tables.
//!
//! Everything here is plain data and pure functions, shared read-only by
//! every badge instance.

pub mod metrics;
pub mod newtypes;
pub mod platform;
pub mod style;
pub mod value;

pub use newtypes::{BadgeHeight, BadgeSize};
pub use platform::Platform;
pub use style::{BadgeColor, BadgeShape, GradientPair, Rgb};
pub use value::BadgeCount;
