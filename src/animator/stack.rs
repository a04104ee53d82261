// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Notification stack state machine
//!
//! Runtime-free: the caller decides when [`NotificationStack::tick`] and
//! [`NotificationStack::settle`] happen. See [`super::driver`] for the
//! tokio-backed timing.

use serde::Serialize;

use super::catalog::{CatalogCursor, NotificationTemplate};
use super::style::stack_style;

/// Notifications placed when the panel first becomes visible
pub const SEED_COUNT: usize = 3;

/// Off-view slot a new notification enters at
pub const STAGED_SLOT: i32 = -1;

/// Highest slot still retained; anything pushed past it is dropped
pub const LAST_SLOT: i32 = 3;

/// Upper bound on tracked notifications (slots -1..=3)
pub const MAX_TRACKED: usize = (LAST_SLOT - STAGED_SLOT + 1) as usize;

/// Where a notification is in its entrance/exit cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Not created yet
    Absent,
    /// Appended below the stack, waiting to settle
    Staged,
    /// Front of the stack
    Settled,
    /// Pushed back by newer notifications
    Aging,
    /// Pushed past the last slot and dropped
    Evicted,
}

impl Phase {
    pub fn from_slot(slot: i32) -> Self {
        match slot {
            STAGED_SLOT => Self::Staged,
            0 => Self::Settled,
            1..=LAST_SLOT => Self::Aging,
            _ => Self::Evicted,
        }
    }
}

/// One tracked notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationInstance {
    pub id: u64,
    pub template: NotificationTemplate,
    pub slot: i32,
}

impl NotificationInstance {
    pub fn phase(&self) -> Phase {
        Phase::from_slot(self.slot)
    }
}

/// Render-ready view of a notification
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedNotification {
    pub id: u64,
    pub entity: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub slot: i32,
    pub phase: Phase,
    pub transform: String,
    pub opacity: f32,
    pub stack_index: i32,
}

impl From<&NotificationInstance> for RenderedNotification {
    fn from(instance: &NotificationInstance) -> Self {
        let style = stack_style(instance.slot);
        Self {
            id: instance.id,
            entity: instance.template.entity.to_string(),
            kind: instance.template.kind.to_string(),
            slot: instance.slot,
            phase: instance.phase(),
            transform: style.transform(),
            opacity: style.opacity,
            stack_index: style.stack_index,
        }
    }
}

/// Outcome of [`NotificationStack::set_visible`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityChange {
    Shown,
    Hidden,
    Unchanged,
}

/// Bounded, ordered stack of discovery notifications (oldest first)
#[derive(Debug, Clone, Default)]
pub struct NotificationStack {
    visible: bool,
    instances: Vec<NotificationInstance>,
    cursor: CatalogCursor,
    next_id: u64,
}

impl NotificationStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a visibility edge.
    ///
    /// Becoming visible resets the catalog and id counter and seeds
    /// [`SEED_COUNT`] notifications back-to-front (slots 2, 1, 0).
    /// Becoming hidden drops everything. Repeating the current value
    /// does nothing.
    pub fn set_visible(&mut self, visible: bool) -> VisibilityChange {
        if visible == self.visible {
            return VisibilityChange::Unchanged;
        }
        self.visible = visible;
        self.instances.clear();

        if !visible {
            return VisibilityChange::Hidden;
        }

        self.cursor.reset();
        self.next_id = 0;
        for i in 0..SEED_COUNT {
            let slot = (SEED_COUNT - 1 - i) as i32;
            self.push(slot);
        }
        VisibilityChange::Shown
    }

    /// Push every notification back one slot and stage the next sample.
    ///
    /// Returns the id of the staged notification, or `None` when the
    /// stack is hidden or empty.
    pub fn tick(&mut self) -> Option<u64> {
        if !self.visible || self.instances.is_empty() {
            return None;
        }

        for instance in &mut self.instances {
            instance.slot += 1;
        }
        let id = self.push(STAGED_SLOT);
        self.instances.retain(|n| n.slot <= LAST_SLOT);
        Some(id)
    }

    /// Move staged notifications to the front slot.
    ///
    /// Returns `true` if anything moved. Ids are kept.
    pub fn settle(&mut self) -> bool {
        let mut moved = false;
        for instance in self.instances.iter_mut().filter(|n| n.slot == STAGED_SLOT) {
            instance.slot = 0;
            moved = true;
        }
        moved
    }

    fn push(&mut self, slot: i32) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.instances.push(NotificationInstance {
            id,
            template: self.cursor.next_template(),
            slot,
        });
        id
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn instances(&self) -> &[NotificationInstance] {
        &self.instances
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn has_staged(&self) -> bool {
        self.instances.iter().any(|n| n.slot == STAGED_SLOT)
    }

    /// Phase of a notification id within the current visible lifetime
    pub fn phase_of(&self, id: u64) -> Phase {
        if id >= self.next_id {
            return Phase::Absent;
        }
        self.instances
            .iter()
            .find(|n| n.id == id)
            .map_or(Phase::Evicted, NotificationInstance::phase)
    }

    /// Render-ready frame in stack order
    pub fn frame(&self) -> Vec<RenderedNotification> {
        self.instances.iter().map(RenderedNotification::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animator::catalog::CATALOG;

    fn slots(stack: &NotificationStack) -> Vec<i32> {
        stack.instances().iter().map(|n| n.slot).collect()
    }

    fn shown() -> NotificationStack {
        let mut stack = NotificationStack::new();
        assert_eq!(stack.set_visible(true), VisibilityChange::Shown);
        stack
    }

    #[test]
    fn test_new_stack_is_hidden_and_empty() {
        let stack = NotificationStack::new();
        assert!(!stack.is_visible());
        assert!(stack.is_empty());
        assert!(stack.frame().is_empty());
    }

    #[test]
    fn test_showing_seeds_three_back_to_front() {
        let stack = shown();
        assert_eq!(slots(&stack), vec![2, 1, 0]);

        let entities: Vec<_> = stack.instances().iter().map(|n| n.template.entity).collect();
        assert_eq!(entities, vec!["Mikhail Volkov", "Cyprus Holdings Ltd", "$2.3M transfer"]);
        let ids: Vec<_> = stack.instances().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn test_tick_stages_then_settle_promotes() {
        let mut stack = shown();

        let staged = stack.tick().unwrap();
        assert_eq!(slots(&stack), vec![3, 2, 1, -1]);
        assert_eq!(stack.phase_of(staged), Phase::Staged);

        assert!(stack.settle());
        assert_eq!(slots(&stack), vec![3, 2, 1, 0]);
        let front = stack.instances().last().unwrap();
        assert_eq!(front.id, staged);
        assert_eq!(front.template.entity, "BVI Shell Corp");
        assert_eq!(front.template.kind, "Entity linked");
        assert_eq!(stack.phase_of(staged), Phase::Settled);
    }

    #[test]
    fn test_second_tick_evicts_oldest() {
        let mut stack = shown();
        stack.tick();
        stack.settle();
        stack.tick();

        assert_eq!(slots(&stack), vec![3, 2, 1, -1]);
        assert!(stack.instances().iter().all(|n| n.id != 0));
        assert_eq!(stack.phase_of(0), Phase::Evicted);
        assert_eq!(stack.phase_of(1), Phase::Aging);
    }

    #[test]
    fn test_settle_is_idempotent() {
        let mut stack = shown();
        assert!(!stack.settle());

        stack.tick();
        assert!(stack.settle());
        let before = stack.instances().to_vec();
        assert!(!stack.settle());
        assert_eq!(stack.instances(), before.as_slice());
    }

    #[test]
    fn test_tracked_count_stays_bounded() {
        let mut stack = shown();
        for i in 0..50 {
            stack.tick();
            assert!(stack.len() <= MAX_TRACKED);
            assert!(stack.instances().iter().all(|n| n.slot <= LAST_SLOT));
            if i % 3 != 0 {
                stack.settle();
            }
        }
    }

    #[test]
    fn test_catalog_cycles_with_period_six() {
        let mut stack = shown();
        let mut seen: Vec<_> = stack.instances().iter().map(|n| n.template).collect();
        for _ in 0..9 {
            stack.tick();
            seen.push(stack.instances().last().unwrap().template);
            stack.settle();
        }
        for (i, template) in seen.iter().enumerate() {
            assert_eq!(*template, CATALOG[i % CATALOG.len()]);
        }
    }

    #[test]
    fn test_ids_strictly_increase() {
        let mut stack = shown();
        let mut last = stack.instances().last().unwrap().id;
        for _ in 0..10 {
            let id = stack.tick().unwrap();
            assert!(id > last);
            last = id;
            stack.settle();
        }
    }

    #[test]
    fn test_hiding_clears_and_stops_ticks() {
        let mut stack = shown();
        stack.tick();
        assert_eq!(stack.set_visible(false), VisibilityChange::Hidden);
        assert!(stack.is_empty());
        assert_eq!(stack.tick(), None);
        assert!(!stack.settle());
        assert!(stack.is_empty());
    }

    #[test]
    fn test_repeated_visibility_is_noop() {
        let mut stack = shown();
        stack.tick();
        let before = stack.instances().to_vec();

        assert_eq!(stack.set_visible(true), VisibilityChange::Unchanged);
        assert_eq!(stack.instances(), before.as_slice());

        stack.set_visible(false);
        assert_eq!(stack.set_visible(false), VisibilityChange::Unchanged);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_reentering_restarts_catalog_and_ids() {
        let mut stack = shown();
        for _ in 0..4 {
            stack.tick();
            stack.settle();
        }
        stack.set_visible(false);
        stack.set_visible(true);

        let first = &stack.instances()[0];
        assert_eq!(first.id, 0);
        assert_eq!(first.template, CATALOG[0]);
        assert_eq!(slots(&stack), vec![2, 1, 0]);
        assert_eq!(stack.phase_of(7), Phase::Absent);
    }

    #[test]
    fn test_frame_carries_styles() {
        let mut stack = shown();
        stack.tick();
        let frame = stack.frame();

        let staged = frame.iter().find(|n| n.slot == STAGED_SLOT).unwrap();
        assert_eq!(staged.opacity, 0.0);
        assert_eq!(staged.stack_index, 4);
        assert_eq!(staged.phase, Phase::Staged);

        let leaving = frame.iter().find(|n| n.slot == LAST_SLOT).unwrap();
        assert_eq!(leaving.opacity, 0.0);
        assert_eq!(leaving.transform, "translateY(calc(-50% - 50px)) scale(0.88)");

        let json = serde_json::to_value(&frame[0]).unwrap();
        assert_eq!(json["type"], "Person identified");
        assert_eq!(json["stackIndex"], 0);
        assert_eq!(json["phase"], "aging");
    }
}
