// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! ACF Site: landing pages for the ACF Document Scanner
//!
//! Server-rendered landing page variants with a live "entity discovery"
//! panel whose notification stack is animated over a WebSocket.

pub mod animator;
pub mod config;
pub mod error;
pub mod site;
pub mod visibility;
pub mod web;

pub use config::AppConfig;
pub use error::{Result, SiteError};
