//! Idle-activity hint: surface a "scroll / arrow keys" affordance once the
//! user has been quiet for a while, and pulse it if they stay quiet.

use crate::constants::{HINT_PULSE_AFTER_MS, HINT_SHOW_AFTER_MS};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HintState {
    pub shown: bool,
    pub pulsing: bool,
}

/// Tracks the single "last qualifying input" timestamp. Qualifying inputs are
/// wheel scrolls and arrow keys; plain pointer motion does not count.
#[derive(Clone, Copy, Debug)]
pub struct IdleHint {
    last_input_ms: f64,
}

impl IdleHint {
    pub fn new(now_ms: f64) -> Self {
        Self {
            last_input_ms: now_ms,
        }
    }

    pub fn note_input(&mut self, now_ms: f64) {
        self.last_input_ms = now_ms;
    }

    pub fn elapsed_ms(&self, now_ms: f64) -> f64 {
        (now_ms - self.last_input_ms).max(0.0)
    }

    /// Both thresholds are checked independently on purpose; pulsing must not
    /// assume the show threshold is the smaller of the two.
    pub fn evaluate(&self, now_ms: f64) -> HintState {
        let elapsed = self.elapsed_ms(now_ms);
        HintState {
            shown: elapsed > HINT_SHOW_AFTER_MS,
            pulsing: elapsed > HINT_PULSE_AFTER_MS,
        }
    }
}
