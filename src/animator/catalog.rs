// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Sample discoveries cycled through by the notification stack

use serde::Serialize;

/// A pre-authored "entity discovered" sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NotificationTemplate {
    pub entity: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

/// Fixed order in which discoveries are shown
pub const CATALOG: [NotificationTemplate; 6] = [
    NotificationTemplate { entity: "Mikhail Volkov", kind: "Person identified" },
    NotificationTemplate { entity: "Cyprus Holdings Ltd", kind: "Company extracted" },
    NotificationTemplate { entity: "$2.3M transfer", kind: "Transaction found" },
    NotificationTemplate { entity: "BVI Shell Corp", kind: "Entity linked" },
    NotificationTemplate { entity: "Swiss Trustee AG", kind: "Connection mapped" },
    NotificationTemplate { entity: "Yacht 'Serenity'", kind: "Asset discovered" },
];

/// Endless cursor over [`CATALOG`]
#[derive(Debug, Clone, Default)]
pub struct CatalogCursor {
    index: usize,
}

impl CatalogCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the current entry and advance, wrapping after the last one
    pub fn next_template(&mut self) -> NotificationTemplate {
        let template = CATALOG[self.index % CATALOG.len()];
        self.index = (self.index + 1) % CATALOG.len();
        template
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }
}
