//! Per-finger probe with curl-based hysteresis.
//!
//! A probe enters when its fingertip touches the object while the finger is
//! curled, and only leaves once the finger uncurls past the curl it had when
//! it entered. Small joint jitter therefore never releases a probe.

use super::hand::Finger;
use serde::{Deserialize, Serialize};

/// Fingertip query radius for the thumb, in metres.
pub const THUMB_PROBE_RADIUS: f32 = 0.015;

/// Fingertip query radius for the other four fingers, in metres.
pub const FINGER_PROBE_RADIUS: f32 = 0.01;

/// Curl at or above which a finger counts as extended.
pub const EXTENDED_CURL: f32 = 0.65;

/// Added to the thumb's entry baseline so it re-triggers more easily.
pub const THUMB_REENTRY_BIAS: f32 = 0.15;

impl Finger {
    /// Contact radius around this finger's tip.
    pub fn probe_radius(&self) -> f32 {
        if self.is_thumb() {
            THUMB_PROBE_RADIUS
        } else {
            FINGER_PROBE_RADIUS
        }
    }

    /// Offset added to the baseline curl when this finger enters.
    pub fn reentry_bias(&self) -> f32 {
        if self.is_thumb() {
            THUMB_REENTRY_BIAS
        } else {
            0.0
        }
    }
}

/// Whether a fingertip is judged to be wrapped around the object.
#[derive(Clone, Copy, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Probe {
    pub is_inside: bool,
    /// Baseline curl recorded while outside; the exit threshold once inside.
    pub curl: f32,
}

/// Fresh per-frame judgement: touching and not extended.
pub fn candidate_inside(curl: f32, colliding: bool) -> bool {
    colliding && curl < EXTENDED_CURL
}

impl Probe {
    /// Applies one frame of measurements.
    pub fn update(&mut self, finger: Finger, curl: f32, colliding: bool) {
        let candidate = candidate_inside(curl, colliding);
        if !self.is_inside {
            self.is_inside = candidate;
            self.curl = curl + finger.reentry_bias();
        } else if curl > self.curl {
            self.is_inside = candidate;
        }
    }
}
