//! Cancellable one-shot timers keyed by owner and purpose. Scheduling a key
//! that is already pending supersedes its deadline, so a fresh hover on an
//! anchor replaces the pending decay instead of racing it.

use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimerPurpose {
    /// Clear an anchor label's hover class.
    HoverDecay,
    /// Return the auto-rotate speed to normal after an input spike.
    RotateDecay,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TimerKey {
    pub owner: String,
    pub purpose: TimerPurpose,
}

impl TimerKey {
    pub fn hover_decay(anchor: &str) -> Self {
        Self {
            owner: anchor.to_string(),
            purpose: TimerPurpose::HoverDecay,
        }
    }
    pub fn rotate_decay() -> Self {
        Self {
            owner: "orbit".to_string(),
            purpose: TimerPurpose::RotateDecay,
        }
    }
}

#[derive(Default)]
pub struct TimerQueue {
    pending: Vec<(TimerKey, f64)>,
}

impl TimerQueue {
    /// Schedule `key` to fire at `deadline_ms`, superseding any pending
    /// deadline for the same key.
    pub fn schedule(&mut self, key: TimerKey, deadline_ms: f64) {
        if let Some(slot) = self.pending.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = deadline_ms;
        } else {
            self.pending.push((key, deadline_ms));
        }
    }

    pub fn cancel(&mut self, key: &TimerKey) {
        self.pending.retain(|(k, _)| k != key);
    }

    pub fn deadline_ms(&self, key: &TimerKey) -> Option<f64> {
        self.pending
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, d)| *d)
    }

    /// Remove and return every key whose deadline has passed.
    pub fn fire_due(&mut self, now_ms: f64) -> SmallVec<[TimerKey; 4]> {
        let mut due: SmallVec<[TimerKey; 4]> = SmallVec::new();
        self.pending.retain(|(key, deadline)| {
            if *deadline <= now_ms {
                due.push(key.clone());
                false
            } else {
                true
            }
        });
        due
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
