//! Pure classification core.
//!
//! This module holds the per-frame grasp heuristic:
//! - Hand pose samples and identifiers
//! - Per-finger probes with curl hysteresis
//! - The warm-up debounce and the grasp phase it exposes
//! - The per-(hand, object) classifier tying them together
//!
//! Nothing here calls a grasp manager or logs; side effects live in
//! [`crate::driver`].

mod classifier;
mod debounce;
mod hand;
mod math;
mod phase;
mod probe;

pub use classifier::ClassifierState;
pub use debounce::{Debounce, WARM_UP_FRAMES};
pub use hand::{Chirality, Finger, FingerPose, HandId, HandPose, ObjectId, SurfaceId};
pub use math::{Quat, Vec3, WarpTransform, EPSILON};
pub use phase::{GraspEvent, GraspPhase, PhaseChange};
pub use probe::{
    candidate_inside, Probe, EXTENDED_CURL, FINGER_PROBE_RADIUS, THUMB_PROBE_RADIUS,
    THUMB_REENTRY_BIAS,
};
