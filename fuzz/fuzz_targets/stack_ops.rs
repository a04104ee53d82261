// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

#![no_main]

use acf_site::animator::stack::{NotificationStack, LAST_SLOT, MAX_TRACKED, STAGED_SLOT};
use acf_site::animator::CATALOG;
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Op {
    Visible(bool),
    Tick,
    Settle,
}

fuzz_target!(|ops: Vec<Op>| {
    let mut stack = NotificationStack::new();
    let mut last_id: Option<u64> = None;

    for op in ops {
        match op {
            Op::Visible(visible) => {
                let was_visible = stack.is_visible();
                stack.set_visible(visible);
                if visible && !was_visible {
                    let seeded = stack.instances();
                    assert_eq!(seeded.len(), 3);
                    assert_eq!(seeded[0].template, CATALOG[0]);
                    last_id = seeded.last().map(|n| n.id);
                }
                if !visible {
                    assert!(stack.is_empty());
                    last_id = None;
                }
            }
            Op::Tick => {
                if let Some(id) = stack.tick() {
                    assert!(last_id.map_or(true, |last| id > last));
                    last_id = Some(id);
                }
            }
            Op::Settle => {
                stack.settle();
                assert!(!stack.has_staged());
            }
        }

        assert!(stack.len() <= MAX_TRACKED);
        assert!(stack
            .instances()
            .iter()
            .all(|n| (STAGED_SLOT..=LAST_SLOT).contains(&n.slot)));
        if !stack.is_visible() {
            assert!(stack.is_empty());
        }
    }
});
