// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Entity-discovery notification stack
//!
//! A small stack of "entity discovered" cards that cycles through a fixed
//! catalog while its panel is on screen. [`stack`] holds the state
//! machine, [`style`] maps slots to presentation and [`driver`] runs the
//! timers on tokio.

pub mod catalog;
pub mod driver;
pub mod stack;
pub mod style;

pub use catalog::{NotificationTemplate, CATALOG};
pub use driver::{Animator, Frame};
pub use stack::{NotificationStack, Phase, RenderedNotification, VisibilityChange};
pub use style::{stack_style, StackStyle};
