//! Warm-up debounce of the raw grasp predicate.

use super::phase::{GraspEvent, GraspPhase};
use serde::{Deserialize, Serialize};

/// Warm-up count above which a raw grasp is trusted.
pub const WARM_UP_FRAMES: u32 = 2;

/// Stabilizes the raw per-frame predicate.
///
/// The raw predicate must hold for three consecutive frames before the
/// stabilized state turns true. The warm-up count saturates at three. A
/// single false frame resets the count, so a regrasp after release pays the
/// full warm-up again.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct Debounce {
    warm_up: u32,
    is_grabbing: bool,
    prev_grabbing: bool,
}

impl Debounce {
    /// Idle debounce with no warm-up.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one frame's raw predicate and returns the resulting event.
    pub fn update(&mut self, raw: bool) -> Option<GraspEvent> {
        if raw {
            self.warm_up = (self.warm_up + 1).min(WARM_UP_FRAMES + 1);
            self.is_grabbing = self.warm_up > WARM_UP_FRAMES;
        } else {
            self.warm_up = 0;
            self.is_grabbing = false;
        }
        let event = GraspEvent::between(self.prev_grabbing, self.is_grabbing);
        self.prev_grabbing = self.is_grabbing;
        event
    }

    /// Consecutive raw-true frames, capped at `WARM_UP_FRAMES + 1`.
    pub fn warm_up(&self) -> u32 {
        self.warm_up
    }

    /// Stabilized grasp decision for the current frame.
    pub fn is_grabbing(&self) -> bool {
        self.is_grabbing
    }

    /// Stabilized decision as of the end of the last update.
    pub fn prev_grabbing(&self) -> bool {
        self.prev_grabbing
    }

    /// Phase derived from the warm-up count and stabilized state.
    pub fn phase(&self) -> GraspPhase {
        if self.is_grabbing {
            GraspPhase::Grasping
        } else if self.warm_up > 0 {
            GraspPhase::WarmingUp
        } else {
            GraspPhase::Idle
        }
    }
}
