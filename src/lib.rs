// SPDX-License-Identifier: MPL-2.0
//! `iced_badges` draws iOS/Android-style numeric badges with the Iced GUI
//! framework.
//!
//! The [`badge`] module computes everything a badge needs to be drawn
//! (size, colors, font, position) from a small builder; [`ui::badge`]
//! renders it. The [`app`] module is a demo window showing badges of every
//! color, size and shape attached to buttons and fake tabs.

pub mod app;
pub mod badge;
pub mod config;
pub mod domain;
pub mod error;
pub mod ui;
