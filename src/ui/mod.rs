// SPDX-License-Identifier: MPL-2.0
//! User interface components for the badge demo.
//!
//! Follows the Elm-style "state down, messages up" pattern: views are pure
//! functions of the application state and emit messages on interaction.
//!
//! - [`badge`] - Renders badge primitives as Iced widgets
//! - [`tab_bar`] - Fake tab bar that badges are attached to
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod badge;
pub mod design_tokens;
pub mod styles;
pub mod tab_bar;
pub mod theming;
