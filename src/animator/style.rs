// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Slot to presentation mapping for the notification stack

use serde::Serialize;

/// CSS transition the client applies between frames
pub const STACK_TRANSITION: &str = "all 0.7s cubic-bezier(0.4, 0, 0.2, 1)";

/// Presentation of one stack slot
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StackStyle {
    /// CSS length for `translateY`
    pub translate_y: &'static str,
    pub scale: f32,
    pub opacity: f32,
    /// Higher is drawn in front
    pub stack_index: i32,
}

const STAGED: StackStyle = StackStyle { translate_y: "calc(-50% + 60px)", scale: 1.0, opacity: 0.0, stack_index: 4 };
const FRONT: StackStyle = StackStyle { translate_y: "-50%", scale: 1.0, opacity: 1.0, stack_index: 3 };
const SECOND: StackStyle = StackStyle { translate_y: "calc(-50% - 12px)", scale: 0.96, opacity: 0.85, stack_index: 2 };
const THIRD: StackStyle = StackStyle { translate_y: "calc(-50% - 24px)", scale: 0.92, opacity: 0.7, stack_index: 1 };
const LEAVING: StackStyle = StackStyle { translate_y: "calc(-50% - 50px)", scale: 0.88, opacity: 0.0, stack_index: 0 };

/// Style for a slot; anything outside -1..=2 renders as the leaving slot
pub fn stack_style(slot: i32) -> StackStyle {
    match slot {
        -1 => STAGED,
        0 => FRONT,
        1 => SECOND,
        2 => THIRD,
        _ => LEAVING,
    }
}

impl StackStyle {
    /// CSS `transform` value, e.g. `translateY(-50%) scale(1)`
    pub fn transform(&self) -> String {
        format!("translateY({}) scale({})", self.translate_y, self.scale)
    }

    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }
}
