// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`badge`]: Badge value objects ([`Platform`](badge::Platform),
//!   [`BadgeHeight`](badge::BadgeHeight), [`BadgeColor`](badge::BadgeColor),
//!   [`BadgeShape`](badge::BadgeShape)) and the font/width lookup tables in
//!   [`metrics`](badge::metrics)

pub mod badge;
