// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Timer-driven runner for a [`NotificationStack`]
//!
//! Each [`Animator`] owns one tokio task. Visibility goes in on a watch
//! channel and frames come out on another. The tick interval and the
//! settle timer only exist while the panel is visible; leaving the
//! visible state drops both.
//!
//! Every visibility edge bumps a generation counter, so a hide followed
//! by a show that both land before the task wakes still restarts the
//! stack from the first catalog entry.

use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info, Instrument};
use uuid::Uuid;

use super::stack::{NotificationStack, RenderedNotification, VisibilityChange};
use crate::config::AnimatorConfig;

/// Frame published to subscribers
pub type Frame = Vec<RenderedNotification>;

/// Visibility as last reported, with the number of edges seen so far
#[derive(Debug, Clone, Copy, Default)]
struct Visibility {
    visible: bool,
    generation: u64,
}

/// Handle to a running notification stack
pub struct Animator {
    id: Uuid,
    visibility: watch::Sender<Visibility>,
    frames: watch::Receiver<Frame>,
    task: JoinHandle<()>,
}

enum Exit {
    Hidden,
    Closed,
}

impl Animator {
    /// Start an animator task. It stays idle until made visible.
    pub fn spawn(config: AnimatorConfig) -> Self {
        let id = Uuid::new_v4();
        let (visibility_tx, visibility_rx) = watch::channel(Visibility::default());
        let (frames_tx, frames_rx) = watch::channel(Frame::new());

        let span = tracing::info_span!("animator", session = %id);
        let task = tokio::spawn(run(config, visibility_rx, frames_tx).instrument(span));

        Self {
            id,
            visibility: visibility_tx,
            frames: frames_rx,
            task,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Report whether the panel is on screen.
    ///
    /// Returns `false` when the value was already current.
    pub fn set_visible(&self, visible: bool) -> bool {
        self.visibility.send_if_modified(|state| {
            if state.visible == visible {
                false
            } else {
                state.visible = visible;
                state.generation += 1;
                true
            }
        })
    }

    /// Subscribe to frame updates
    pub fn frames(&self) -> watch::Receiver<Frame> {
        self.frames.clone()
    }
}

impl Drop for Animator {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn run(
    config: AnimatorConfig,
    mut visibility: watch::Receiver<Visibility>,
    frames: watch::Sender<Frame>,
) {
    let mut stack = NotificationStack::new();

    loop {
        let generation = loop {
            let state = *visibility.borrow_and_update();
            if state.visible {
                break state.generation;
            }
            if visibility.changed().await.is_err() {
                return;
            }
        };

        let exit = run_visible(&config, &mut stack, &mut visibility, &frames, generation).await;

        if stack.set_visible(false) == VisibilityChange::Hidden {
            frames.send_replace(stack.frame());
            info!("Panel hidden, timers released");
        }

        if let Exit::Closed = exit {
            return;
        }
    }
}

async fn run_visible(
    config: &AnimatorConfig,
    stack: &mut NotificationStack,
    visibility: &mut watch::Receiver<Visibility>,
    frames: &watch::Sender<Frame>,
    generation: u64,
) -> Exit {
    // Seed after the next paint
    tokio::task::yield_now().await;
    if visibility.borrow_and_update().generation != generation {
        return Exit::Hidden;
    }

    stack.set_visible(true);
    frames.send_replace(stack.frame());
    info!("Panel visible, seeded {} notifications", stack.len());

    let period = config.tick_interval();
    let mut ticks = time::interval_at(Instant::now() + period, period);
    ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let settle = time::sleep(Duration::ZERO);
    tokio::pin!(settle);
    let mut settle_armed = false;

    loop {
        tokio::select! {
            changed = visibility.changed() => {
                if changed.is_err() {
                    return Exit::Closed;
                }
                // any edge since entry means the panel left the screen
                if visibility.borrow_and_update().generation != generation {
                    return Exit::Hidden;
                }
            }
            _ = ticks.tick(), if !stack.is_empty() => {
                if let Some(id) = stack.tick() {
                    debug!("Staged notification {} ({} tracked)", id, stack.len());
                    frames.send_replace(stack.frame());
                    settle.as_mut().reset(Instant::now() + config.settle_delay());
                    settle_armed = true;
                }
            }
            _ = &mut settle, if settle_armed => {
                settle_armed = false;
                if stack.settle() {
                    frames.send_replace(stack.frame());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slots(frame: &Frame) -> Vec<i32> {
        frame.iter().map(|n| n.slot).collect()
    }

    async fn next_frame(rx: &mut watch::Receiver<Frame>) -> Frame {
        rx.changed().await.unwrap();
        rx.borrow_and_update().clone()
    }

    #[tokio::test(start_paused = true)]
    async fn test_idle_until_visible() {
        let animator = Animator::spawn(AnimatorConfig::default());
        let mut rx = animator.frames();

        let waited = time::timeout(Duration::from_secs(30), rx.changed()).await;
        assert!(waited.is_err());
        assert!(rx.borrow().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_tick_and_settle_timing() {
        let animator = Animator::spawn(AnimatorConfig::default());
        let mut rx = animator.frames();
        let start = Instant::now();

        assert!(animator.set_visible(true));
        let seeded = next_frame(&mut rx).await;
        assert_eq!(slots(&seeded), vec![2, 1, 0]);
        assert_eq!(seeded[2].entity, "$2.3M transfer");

        let staged = next_frame(&mut rx).await;
        assert_eq!(slots(&staged), vec![3, 2, 1, -1]);
        assert_eq!(start.elapsed(), Duration::from_millis(2500));

        let settled = next_frame(&mut rx).await;
        assert_eq!(slots(&settled), vec![3, 2, 1, 0]);
        assert_eq!(settled[3].entity, "BVI Shell Corp");
        assert_eq!(settled[3].id, staged[3].id);
        assert_eq!(start.elapsed(), Duration::from_millis(2550));

        let evicting = next_frame(&mut rx).await;
        assert_eq!(slots(&evicting), vec![3, 2, 1, -1]);
        assert!(evicting.iter().all(|n| n.id != 0));
        assert_eq!(start.elapsed(), Duration::from_millis(5000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_hidden_clears_and_stops() {
        let animator = Animator::spawn(AnimatorConfig::default());
        let mut rx = animator.frames();

        animator.set_visible(true);
        next_frame(&mut rx).await;
        next_frame(&mut rx).await;

        assert!(animator.set_visible(false));
        let cleared = next_frame(&mut rx).await;
        assert!(cleared.is_empty());

        let waited = time::timeout(Duration::from_secs(30), rx.changed()).await;
        assert!(waited.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_repeated_visibility_is_ignored() {
        let animator = Animator::spawn(AnimatorConfig::default());
        assert!(animator.set_visible(true));
        assert!(!animator.set_visible(true));
        assert!(animator.set_visible(false));
        assert!(!animator.set_visible(false));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reentry_restarts_catalog() {
        let animator = Animator::spawn(AnimatorConfig::default());
        let mut rx = animator.frames();

        animator.set_visible(true);
        next_frame(&mut rx).await;
        next_frame(&mut rx).await;
        next_frame(&mut rx).await;

        animator.set_visible(false);
        next_frame(&mut rx).await;
        animator.set_visible(true);
        let reseeded = next_frame(&mut rx).await;

        assert_eq!(slots(&reseeded), vec![2, 1, 0]);
        assert_eq!(reseeded[0].id, 0);
        assert_eq!(reseeded[0].entity, "Mikhail Volkov");
    }

    #[tokio::test(start_paused = true)]
    async fn test_back_to_back_hide_and_show_reseeds() {
        let animator = Animator::spawn(AnimatorConfig::default());
        let mut rx = animator.frames();

        animator.set_visible(true);
        next_frame(&mut rx).await;
        next_frame(&mut rx).await;
        let settled = next_frame(&mut rx).await;
        assert_eq!(settled.len(), 4);

        // both edges land before the task runs
        assert!(animator.set_visible(false));
        assert!(animator.set_visible(true));

        let reseeded = time::timeout(Duration::from_millis(100), async {
            loop {
                let frame = next_frame(&mut rx).await;
                if !frame.is_empty() {
                    return frame;
                }
            }
        })
        .await
        .unwrap();

        assert_eq!(slots(&reseeded), vec![2, 1, 0]);
        let ids: Vec<u64> = reseeded.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert_eq!(reseeded[0].entity, "Mikhail Volkov");
    }

    #[tokio::test(start_paused = true)]
    async fn test_show_then_hide_before_seeding_publishes_nothing() {
        let animator = Animator::spawn(AnimatorConfig::default());
        let mut rx = animator.frames();

        animator.set_visible(true);
        tokio::task::yield_now().await;
        animator.set_visible(false);

        let waited = time::timeout(Duration::from_secs(10), rx.changed()).await;
        assert!(waited.is_err());
        assert!(rx.borrow().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_honors_configured_timing() {
        let config = AnimatorConfig {
            tick_interval_ms: 1000,
            settle_delay_ms: 10,
            ..AnimatorConfig::default()
        };
        let animator = Animator::spawn(config);
        let mut rx = animator.frames();
        let start = Instant::now();

        animator.set_visible(true);
        next_frame(&mut rx).await;
        next_frame(&mut rx).await;
        assert_eq!(start.elapsed(), Duration::from_millis(1000));
        next_frame(&mut rx).await;
        assert_eq!(start.elapsed(), Duration::from_millis(1010));
    }

    #[tokio::test(start_paused = true)]
    async fn test_animators_are_independent() {
        let first = Animator::spawn(AnimatorConfig::default());
        let second = Animator::spawn(AnimatorConfig::default());
        let mut rx_first = first.frames();
        let mut rx_second = second.frames();

        first.set_visible(true);
        next_frame(&mut rx_first).await;
        next_frame(&mut rx_first).await;

        second.set_visible(true);
        let seeded = next_frame(&mut rx_second).await;
        assert_eq!(seeded[0].id, 0);
        assert_eq!(seeded[0].entity, "Mikhail Volkov");
        assert_ne!(first.id(), second.id());
    }
}
